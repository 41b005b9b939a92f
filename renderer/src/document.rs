use songbook::{Song, Songbook, Warning, body};

use crate::fragment::render_fragments;
use crate::style::STYLE;

/// A download link shown at the top of the document.
#[derive(Debug, Clone)]
pub struct Download {
    pub label: String,
    pub href: String,
}

/// Page-level strings and asset references. Everything is optional or
/// has a neutral default; referenced assets are not checked for
/// existence.
#[derive(Debug, Clone)]
pub struct DocumentOptions {
    pub title: String,
    pub lang: String,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub stylesheet: Option<String>,
    pub downloads: Vec<Download>,
    pub contents_heading: String,
    pub back_to_top: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            title: "Songbook".to_string(),
            lang: "en".to_string(),
            logo: None,
            favicon: None,
            stylesheet: None,
            downloads: Vec::new(),
            contents_heading: "Contents".to_string(),
            back_to_top: "↑ Top".to_string(),
        }
    }
}

struct Entry<'a> {
    song: &'a Song,
    number: usize,
    body_html: String,
}

/// Assemble the final HTML document from every extracted songbook, in
/// argument order.
///
/// The index is alphabetical by title (case-insensitive), grouped under
/// a heading per leading letter; song sections keep extraction order.
/// A song's display number comes from its `number` metadata when
/// present, otherwise from its 1-based position in extraction order,
/// and the same number keys both the index anchor and the section id.
pub fn render_document(books: &[Songbook], options: &DocumentOptions) -> (String, Vec<Warning>) {
    let mut warnings = Vec::new();
    let mut entries = Vec::new();

    let mut position = 0usize;
    for book in books {
        for song in &book.songs {
            position += 1;
            let number = song.metadata.number.unwrap_or(position);
            let (fragments, mut body_warnings) =
                body::parse_body(&song.body, song.body_offset, book.source_id);
            warnings.append(&mut body_warnings);
            entries.push(Entry {
                song,
                number,
                body_html: render_fragments(&fragments),
            });
        }
    }

    let mut html = vec![head(options)];

    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.song.title.to_lowercase());

    let mut current_letter: Option<String> = None;
    for entry in &sorted {
        let first_letter = entry
            .song
            .title
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();
        if current_letter.as_deref() != Some(first_letter.as_str()) {
            if current_letter.is_some() {
                html.push("</div>".to_string());
            }
            html.push(format!(
                "<h3>{}</h3><div>",
                html_escape::encode_safe(&first_letter)
            ));
            current_letter = Some(first_letter);
        }
        html.push(format!(
            "<a href=\"#song-{}\">{} ({})</a>",
            entry.number,
            html_escape::encode_safe(&entry.song.title),
            entry.number
        ));
    }
    if current_letter.is_some() {
        html.push("</div>".to_string());
    }
    html.push("</div><hr>".to_string());

    for entry in &entries {
        html.push(format!("<div class=\"song\" id=\"song-{}\">", entry.number));
        html.push(format!(
            "<h2>{}. {}</h2>",
            entry.number,
            html_escape::encode_safe(&entry.song.title)
        ));
        if let Some(author) = &entry.song.metadata.author {
            if !author.is_empty() {
                html.push(format!(
                    "<p><i>{}</i></p>",
                    html_escape::encode_safe(author)
                ));
            }
        }
        html.push(entry.body_html.clone());
        html.push(format!(
            "<div class=\"back-to-top\"><a href=\"#top\">{}</a></div>",
            html_escape::encode_safe(&options.back_to_top)
        ));
        html.push("</div>".to_string());
    }

    html.push("</body></html>".to_string());
    (html.join("\n"), warnings)
}

/// Static boilerplate up to and including the index heading.
fn head(options: &DocumentOptions) -> String {
    let title = html_escape::encode_safe(&options.title);
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!(
        "<html lang=\"{}\">\n",
        html_escape::encode_safe(&options.lang)
    ));
    out.push_str("<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("  <title>{}</title>\n", title));
    if let Some(favicon) = &options.favicon {
        out.push_str(&format!(
            "  <link rel=\"icon\" type=\"image/x-icon\" href=\"{}\">\n",
            html_escape::encode_safe(favicon)
        ));
    }
    if let Some(stylesheet) = &options.stylesheet {
        out.push_str(&format!(
            "  <link rel=\"stylesheet\" href=\"{}\">\n",
            html_escape::encode_safe(stylesheet)
        ));
    }
    out.push_str("  <style>\n");
    out.push_str(STYLE);
    out.push_str("\n  </style>\n");
    out.push_str("</head>\n");
    out.push_str("<body>\n");
    out.push_str("  <a id=\"top\"></a>\n");
    if !options.downloads.is_empty() {
        let links: Vec<String> = options
            .downloads
            .iter()
            .map(|d| {
                format!(
                    "<a href=\"{}\" download>{}</a>",
                    html_escape::encode_safe(&d.href),
                    html_escape::encode_safe(&d.label)
                )
            })
            .collect();
        out.push_str(&format!(
            "  <div class=\"download-links\">\n    {}\n  </div>\n",
            links.join(", ")
        ));
    }
    out.push_str(&format!(
        "<h1 style=\"text-align: center;\">{}</h1>\n",
        title
    ));
    if let Some(logo) = &options.logo {
        out.push_str(&format!(
            "<div style=\"text-align: center;\">\n    <img src=\"{}\" alt=\"{}\" style=\"width: 50%;\">\n</div>\n",
            html_escape::encode_safe(logo),
            title
        ));
    }
    out.push_str("  <div class=\"index\">\n");
    out.push_str(&format!(
        "    <h2>{}</h2>",
        html_escape::encode_safe(&options.contents_heading)
    ));
    out
}
