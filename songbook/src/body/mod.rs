pub mod chords;

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Warning;
use crate::fragment::Fragment;

static NUMBERED_REPEAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\rep\{\d+\}").unwrap());
static EMPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\emph\{([^{}]*?)\}").unwrap());
static MUSIC_NOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\musicnote\{([^{}]*?)\}").unwrap());
static VERSE_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\labeledverse\{(.+?)\}").unwrap());

/// What kind of block an open fragment started, for end-of-body warnings.
#[derive(Debug, Clone, Copy)]
enum OpenBlock {
    Verse,
    Chorus,
}

/// Parse one song's raw body into an ordered sequence of block
/// fragments.
///
/// Directive classification is first-match-wins in a fixed priority
/// order; anything unrecognized falls through to the chorded-line path
/// and is displayed verbatim. The parser never fails: unbalanced
/// verse/chorus markers degrade to dangling blocks plus a warning.
///
/// `body_offset` is the byte offset of `body` within its source file,
/// so warning spans point into the right place.
pub fn parse_body(body: &str, body_offset: usize, file_id: usize) -> (Vec<Fragment>, Vec<Warning>) {
    let mut output = Vec::new();
    let mut warnings = Vec::new();

    let trimmed = body.trim();
    let trimmed_offset = body_offset + (trimmed.as_ptr() as usize - body.as_ptr() as usize);

    let mut verse_number = 1usize;
    let mut in_verse = false;
    // Open verse/chorus blocks awaiting their close marker.
    let mut open_blocks: Vec<(OpenBlock, Range<usize>)> = Vec::new();

    let mut offset = trimmed_offset;
    for raw_line in trimmed.split('\n') {
        let span = offset..offset + raw_line.len();
        offset += raw_line.len() + 1;

        let line = substitute(raw_line.trim().trim_end_matches('\\'));

        if line.starts_with(r"\beginverse*") {
            output.push(Fragment::VerseOpen { label: None });
            in_verse = true;
            open_blocks.push((OpenBlock::Verse, span));
            continue;
        }
        if line.starts_with('%') {
            // Comment line.
            continue;
        }
        if line.starts_with(r"\beginverse") {
            output.push(Fragment::VerseOpen {
                label: Some(format!("{}.", verse_number)),
            });
            verse_number += 1;
            in_verse = true;
            open_blocks.push((OpenBlock::Verse, span));
        } else if line.starts_with(r"\endverse") {
            output.push(Fragment::VerseClose);
            in_verse = false;
            open_blocks.pop();
        } else if line.starts_with(r"\labeledverse{*}") {
            output.push(Fragment::VerseOpen { label: None });
            in_verse = true;
            open_blocks.push((OpenBlock::Verse, span));
        } else if line.starts_with(r"\labeledverse{") {
            // A label that never closes its brace sets the verse state
            // but emits nothing.
            if let Some(caps) = VERSE_LABEL.captures(&line) {
                output.push(Fragment::VerseOpen {
                    label: Some(caps[1].to_string()),
                });
                open_blocks.push((OpenBlock::Verse, span));
            }
            in_verse = true;
        } else if line.starts_with(r"\beginchorus") {
            output.push(Fragment::ChorusOpen);
            open_blocks.push((OpenBlock::Chorus, span));
        } else if line.starts_with(r"\endchorus") {
            output.push(Fragment::ChorusClose);
            open_blocks.pop();
        } else if line.starts_with(r"\nolyrics") {
            continue;
        } else if line.is_empty() {
            if in_verse {
                output.push(Fragment::Break);
            }
        } else if line.contains(r"\brk") {
            let segments = line.split(r"\brk").map(chords::parse_chorded).collect();
            output.push(Fragment::Line(segments));
        } else {
            output.push(Fragment::Line(vec![chords::parse_chorded(&line)]));
        }
    }

    for (kind, span) in open_blocks {
        let what = match kind {
            OpenBlock::Verse => "verse",
            OpenBlock::Chorus => "chorus",
        };
        warnings.push(
            Warning::new(
                format!("{} is still open at the end of the song", what),
                span,
                file_id,
            )
            .with_note("the block stays open in the rendered output".to_string()),
        );
    }

    (output, warnings)
}

/// Resolve inline escape directives, in a fixed order that keeps each
/// step from interfering with later chord parsing:
/// repeat brackets, escaped punctuation, non-breaking space, numbered
/// repeats (removed), emphasis and music notes (unwrapped).
fn substitute(line: &str) -> String {
    let line = line
        .replace(r"\lrep", "[:")
        .replace(r"\rrep", ":]")
        .replace(r"\#", "#")
        .replace(r"\%", "%")
        .replace(r"\&", "&")
        .replace('~', " ");
    let line = NUMBERED_REPEAT.replace_all(&line, "");
    let line = EMPH.replace_all(&line, "$1");
    MUSIC_NOTE.replace_all(&line, "$1").into_owned()
}
