pub mod body;
pub mod error;
pub mod extract;
pub mod fragment;
pub mod metadata;
pub mod song;

pub use error::Warning;
pub use extract::extract_songs;
pub use fragment::{ChordedLine, Fragment};
pub use metadata::Metadata;
pub use song::Song;

/// All songs extracted from one source file.
#[derive(Debug, Clone)]
pub struct Songbook {
    /// Songs in source order.
    pub songs: Vec<Song>,
    /// The source file ID (for diagnostics with codespan-reporting).
    pub source_id: usize,
}
