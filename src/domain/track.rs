/// One validated playlist entry.
///
/// A track exists only if its source row had exactly 8 tab-separated
/// fields and all four numeric fields parsed. Tracks carry no identity
/// beyond their fields; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    pub size: i64,
    /// Unit is whatever the playlist export used; opaque here.
    pub duration: i64,
    pub year: i64,
    pub plays: i64,
}
