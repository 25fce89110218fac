use playlist_ring::{run_demo, Playlist, DEMO_PLAYS, DEMO_SONGS};

#[test]
fn demo_prints_cycle_then_wraps() {
    let mut buf = Vec::new();
    run_demo(&mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert_eq!(
        out,
        "\nPlaylist: Song A -> Song B -> Song C -> (back to Song A)\n\
         \nPlaying forward:\n\
         Now playing: Song A\n\
         Now playing: Song B\n\
         Now playing: Song C\n\
         Now playing: Song A\n\
         Now playing: Song B\n"
    );
}

#[test]
fn demo_plays_more_than_one_lap() {
    let pl = Playlist::from_names(DEMO_SONGS).unwrap();
    assert!(DEMO_PLAYS > pl.len());

    let played: Vec<_> = pl.playback().take(DEMO_PLAYS).collect();
    assert_eq!(played, ["Song A", "Song B", "Song C", "Song A", "Song B"]);
}
