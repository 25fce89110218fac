/// Non-owning reference to a song inside the playlist that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

impl Handle {
    /// Returns the song's arena index, for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}
