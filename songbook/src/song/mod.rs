use std::ops::Range;

use crate::metadata::Metadata;

/// One song block, from `\beginsong` to `\endsong`.
/// The body is kept as raw markup; it is parsed into fragments on demand.
#[derive(Debug, Clone)]
pub struct Song {
    /// The song title (from the mandatory brace argument), as written.
    pub title: String,
    /// Attributes scanned from the optional bracket argument.
    pub metadata: Metadata,
    /// Raw body markup between the begin and end markers.
    pub body: String,
    /// Byte span of the whole block in source, for diagnostics.
    pub span: Range<usize>,
    /// Byte offset of the body within the source file.
    pub body_offset: usize,
}
