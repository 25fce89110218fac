use crate::{errors::Result, playlist::Playlist};
use std::io::Write;

pub const DEMO_SONGS: [&str; 3] = ["Song A", "Song B", "Song C"];

/// Plays past the end of the three-song cycle, so playback wraps once.
pub const DEMO_PLAYS: usize = 5;

/// Build the three-song cycle, print it, then play forward [`DEMO_PLAYS`] songs.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut playlist = Playlist::new();
    let handles = DEMO_SONGS
        .iter()
        .map(|name| playlist.create_song(*name))
        .collect::<Result<Vec<_>>>()?;
    playlist.link_circular(&handles)?;

    playlist.print_playlist(out)?;
    playlist.play_forward(out, DEMO_PLAYS)?;
    Ok(())
}
