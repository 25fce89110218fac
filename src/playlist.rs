use crate::{
    errors::{PlaylistError, Result},
    handle::Handle,
    name::SongName,
    node::Song,
};
use log::{debug, warn};
use std::{
    collections::HashSet,
    io::{self, Write},
};

/// A circular playlist. All songs live in one arena and link to each other by index,
/// so dropping the playlist releases the whole cycle at once.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    songs: Vec<Song>,
    head: Option<usize>,
}

/// One lap of song names, starting at the head.
///
/// Stops when the head comes around again, or after every song in the arena
/// has been visited, whichever happens first.
pub struct Iter<'a> {
    list: &'a Playlist,
    cursor: Option<usize>,
    visited: usize,
}

/// Endless playback from the head, wrapping around the cycle.
pub struct Playback<'a> {
    list: &'a Playlist,
    cursor: Option<usize>,
}

impl Playlist {
    /// Create a playlist with no songs and no head.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create one song per name and link them into a cycle in the given order.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        let handles = names
            .into_iter()
            .map(|name| list.create_song(name))
            .collect::<Result<Vec<_>>>()?;
        list.link_circular(&handles)?;
        Ok(list)
    }

    /// Number of songs owned by the playlist.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// True while no cycle has been linked, even if songs have been created.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<Handle> {
        self.head.map(Handle)
    }

    pub fn name(&self, h: Handle) -> Option<&str> {
        self.songs.get(h.0).map(|s| s.name.as_str())
    }

    pub fn next(&self, h: Handle) -> Option<Handle> {
        self.songs.get(h.0).map(|s| Handle(s.next))
    }

    /// Add a song that links to itself. The head is left untouched.
    pub fn create_song(&mut self, name: impl Into<String>) -> Result<Handle> {
        let name = SongName::new(name)?;
        self.songs
            .try_reserve(1)
            .map_err(|_| PlaylistError::Allocation)?;

        let id = self.songs.len();
        debug!("created song {id}: {name}");
        self.songs.push(Song::self_linked(id, name));
        Ok(Handle(id))
    }

    /// Rewire `seq` into a single cycle in the given order and make its first song the head.
    ///
    /// Nothing is rewired unless the whole sequence is valid.
    pub fn link_circular(&mut self, seq: &[Handle]) -> Result<Handle> {
        let first = *seq.first().ok_or(PlaylistError::EmptySequence)?;

        let mut seen = HashSet::with_capacity(seq.len());
        for h in seq {
            self.require_existing(*h)?;
            if !seen.insert(h.0) {
                return Err(PlaylistError::DuplicateSong);
            }
        }

        for (h, next) in seq.iter().zip(seq.iter().cycle().skip(1)) {
            self.songs[h.0].next = next.0;
        }
        self.head = Some(first.0);

        debug!(
            "linked {} songs into a cycle starting at {}",
            seq.len(),
            self.songs[first.0].name
        );
        Ok(first)
    }

    /// Iterate one lap of names from the head.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.head,
            visited: 0,
        }
    }

    /// Iterate names from the head forever. Empty when there is no head.
    pub fn playback(&self) -> Playback<'_> {
        Playback {
            list: self,
            cursor: self.head,
        }
    }

    /// Render the playlist the way [`Playlist::print_playlist`] writes it.
    pub fn render(&self) -> Result<String> {
        let Some(head) = self.head else {
            return Ok("\nPlaylist is empty\n".to_owned());
        };

        let mut text = String::from("\nPlaylist: ");
        for name in self.lap()? {
            text.push_str(name);
            text.push_str(" -> ");
        }
        text.push_str("(back to ");
        text.push_str(self.songs[head].name.as_str());
        text.push_str(")\n");
        Ok(text)
    }

    /// Write every song once, in cycle order, followed by the song the cycle closes on.
    ///
    /// Nothing is written if the head is not reached again within [`Playlist::len`] steps.
    pub fn print_playlist<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = self.render()?;
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write `n` "Now playing" lines starting at the head, wrapping around as often as needed.
    pub fn play_forward<W: Write>(&self, out: &mut W, n: usize) -> io::Result<()> {
        if self.head.is_none() {
            return Ok(());
        }
        write!(out, "\nPlaying forward:\n")?;
        for name in self.playback().take(n) {
            writeln!(out, "Now playing: {name}")?;
        }
        Ok(())
    }

    fn lap(&self) -> Result<Vec<&str>> {
        let mut iter = self.iter();
        let names: Vec<_> = iter.by_ref().collect();
        if iter.cursor.is_some() {
            warn!("head not revisited after {} songs", names.len());
            return Err(PlaylistError::MalformedCycle {
                visited: names.len(),
            });
        }
        Ok(names)
    }

    fn require_existing(&self, h: Handle) -> Result<usize> {
        match self.songs.get(h.0) {
            Some(_) => Ok(h.0),
            None => Err(PlaylistError::InvalidHandle),
        }
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        if self.visited == self.list.songs.len() {
            return None;
        }
        let song = &self.list.songs[id];
        self.visited += 1;
        self.cursor = if Some(song.next) == self.list.head {
            None
        } else {
            Some(song.next)
        };
        Some(song.name.as_str())
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let song = &self.list.songs[self.cursor?];
        self.cursor = Some(song.next);
        Some(song.name.as_str())
    }
}
