use std::collections::BTreeMap;

/// One HTML block fragment produced by the body parser. Fragments are
/// a strict forward-only sequence; the renderer consumes them in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Opens a verse div. The label is the visible stanza marker
    /// ("1.", "2.", or a custom label); None renders an unnumbered verse.
    VerseOpen { label: Option<String> },
    /// Closes the current verse div.
    VerseClose,
    /// Opens a chorus div with its fixed "R:" label.
    ChorusOpen,
    /// Closes the current chorus div.
    ChorusClose,
    /// A forced blank line inside a verse.
    Break,
    /// One lyric line. Holds one segment per `\brk`-separated piece;
    /// almost always exactly one.
    Line(Vec<ChordedLine>),
}

/// A lyric line with its chord markers stripped out and recorded as
/// (character offset, chord name) entries. Offsets count characters of
/// the stripped text, so the marker itself contributes zero width.
///
/// Two chords recorded at the same offset collapse to the later one in
/// scan order; an accepted limitation for malformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordedLine {
    /// The lyric text with all chord markers removed.
    pub text: String,
    /// Chord name keyed by character column in `text`.
    pub chords: BTreeMap<usize, String>,
}

impl ChordedLine {
    pub fn plain(text: impl Into<String>) -> Self {
        ChordedLine {
            text: text.into(),
            chords: BTreeMap::new(),
        }
    }
}
