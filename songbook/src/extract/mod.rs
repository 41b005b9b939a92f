use once_cell::sync::Lazy;
use regex::Regex;

use crate::Songbook;
use crate::error::Warning;
use crate::metadata::Metadata;
use crate::song::Song;

/// A song block: `\beginsong{title}` with an optional `[...]` metadata
/// argument, body text, `\endsong`. Non-greedy throughout so malformed
/// markers do not spill across blocks.
static SONG_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\\beginsong\{(.+?)\}(?:\[(.*?)\])?(.*?)\\endsong").unwrap()
});

static BEGIN_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\beginsong\{").unwrap());

/// Extract every song block from one source file, in source order.
///
/// A begin-marker with no matching end-marker yields no song; the block
/// is dropped and reported as a warning. Pure function of the input
/// text apart from the returned diagnostics.
pub fn extract_songs(source: &str, file_id: usize) -> (Songbook, Vec<Warning>) {
    let mut songs = Vec::new();
    let mut spans = Vec::new();

    for caps in SONG_BLOCK.captures_iter(source) {
        let whole = caps.get(0).unwrap();
        let title = caps[1].to_string();
        let metadata = caps
            .get(2)
            .map(|m| Metadata::scan(m.as_str()))
            .unwrap_or_default();
        let body_match = caps.get(3).unwrap();

        spans.push(whole.range());
        songs.push(Song {
            title,
            metadata,
            body: body_match.as_str().to_string(),
            span: whole.range(),
            body_offset: body_match.start(),
        });
    }

    // Any begin-marker that falls outside every matched block has no
    // matching \endsong; the block it opens is silently absent from the
    // output, so surface a warning.
    let mut warnings = Vec::new();
    for m in BEGIN_MARKER.find_iter(source) {
        if !spans.iter().any(|s| s.contains(&m.start())) {
            warnings.push(
                Warning::new(
                    "song block has no matching \\endsong and was dropped",
                    m.range(),
                    file_id,
                )
                .with_note("add \\endsong to include this song in the output".to_string()),
            );
        }
    }

    (Songbook { songs, source_id: file_id }, warnings)
}
