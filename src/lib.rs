mod demo;
mod errors;
mod handle;
mod name;
mod node;
mod playlist;

pub use demo::{run as run_demo, DEMO_PLAYS, DEMO_SONGS};
pub use errors::{PlaylistError, Result};
pub use handle::Handle;
pub use name::{SongName, MAX_NAME_LEN};
pub use playlist::{Iter, Playback, Playlist};
