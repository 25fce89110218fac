use crate::name::SongName;

#[derive(Debug, Clone)]
pub(crate) struct Song {
    pub(crate) name: SongName,
    /// Arena index of the following song. Never dangling.
    pub(crate) next: usize,
}

impl Song {
    /// A song linked to itself: the trivial one-node cycle.
    pub(crate) fn self_linked(id: usize, name: SongName) -> Self {
        Self { name, next: id }
    }
}
