use songbook::ChordedLine;

/// Render one lyric line as a preformatted two-row block: chord row on
/// top, escaped lyric row below. Multiple segments (from a `\brk`
/// directive) are joined with a forced line break inside the same
/// block.
pub fn render_line(segments: &[ChordedLine]) -> String {
    let rows: Vec<String> = segments
        .iter()
        .map(|segment| {
            let (chord_row, lyric_row) = render_rows(segment);
            format!("{}\n{}", chord_row, lyric_row)
        })
        .collect();
    format!("<pre class=\"song-line\">{}</pre>", rows.join("<br>"))
}

/// Build the aligned chord and lyric rows for one segment.
///
/// Alignment is computed over raw character columns before any
/// escaping: every lyric character contributes exactly one cell to each
/// row, so an `&` that escapes to `&amp;` still counts as one column.
pub fn render_rows(segment: &ChordedLine) -> (String, String) {
    let mut chord_row = String::new();
    let mut lyric_row = String::new();
    let mut buf = [0u8; 4];

    for (column, ch) in segment.text.chars().enumerate() {
        match segment.chords.get(&column) {
            Some(chord) => {
                chord_row.push_str("<span class=\"chord\">");
                html_escape::encode_safe_to_string(chord, &mut chord_row);
                chord_row.push_str("</span>");
            }
            None => chord_row.push(' '),
        }
        html_escape::encode_safe_to_string(ch.encode_utf8(&mut buf), &mut lyric_row);
    }

    (chord_row, lyric_row)
}
