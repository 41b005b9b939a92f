use songbook::Fragment;

use crate::line::render_line;

/// Render a song body's fragment sequence to HTML, one fragment per
/// line. Open and close fragments are emitted as-is; balance is the
/// source markup's responsibility.
pub fn render_fragments(fragments: &[Fragment]) -> String {
    let parts: Vec<String> = fragments.iter().map(render_fragment).collect();
    parts.join("\n")
}

fn render_fragment(fragment: &Fragment) -> String {
    match fragment {
        Fragment::VerseOpen { label: Some(label) } => format!(
            "<div class=\"verse\"><div class=\"verse-number\">{}</div>",
            html_escape::encode_safe(label)
        ),
        Fragment::VerseOpen { label: None } => "<div class=\"verse\">".to_string(),
        Fragment::VerseClose => "</div>".to_string(),
        Fragment::ChorusOpen => {
            "<div class=\"chorus\"><span class=\"label\">R:</span><br>".to_string()
        }
        Fragment::ChorusClose => "</div>".to_string(),
        Fragment::Break => "<br>".to_string(),
        Fragment::Line(segments) => render_line(segments),
    }
}
