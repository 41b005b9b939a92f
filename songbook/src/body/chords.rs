use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::fragment::ChordedLine;

/// An inline chord marker: `\[chord-name]`.
static CHORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\[(.+?)\]").unwrap());

/// Split a lyric line into plain text plus chord positions.
///
/// Offsets are character counts of the text accumulated so far with all
/// markers already stripped, so the chord ends up above the character
/// that directly followed its marker. A chord recorded at the very end
/// of the line has no column under it and is never rendered.
pub fn parse_chorded(line: &str) -> ChordedLine {
    let mut text = String::new();
    let mut columns = 0usize;
    let mut chords = BTreeMap::new();
    let mut pos = 0usize;

    for caps in CHORD.captures_iter(line) {
        let marker = caps.get(0).unwrap();
        let segment = &line[pos..marker.start()];
        text.push_str(segment);
        columns += segment.chars().count();
        // Last writer wins when two markers land on the same column.
        chords.insert(columns, caps[1].to_string());
        pos = marker.end();
    }
    text.push_str(&line[pos..]);

    ChordedLine { text, chords }
}
