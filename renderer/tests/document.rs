use renderer::{DocumentOptions, Download, render_document, render_fragments};
use songbook::body::parse_body;
use songbook::extract_songs;

fn render(source: &str) -> String {
    let (book, _) = extract_songs(source, 0);
    render_document(&[book], &DocumentOptions::default()).0
}

#[test]
fn index_is_alphabetical_with_letter_headings() {
    let html = render(
        "\\beginsong{Beta}\nb\n\\endsong\n\\beginsong{Alpha}\na\n\\endsong",
    );
    let heading_a = html.find("<h3>A</h3>").expect("A heading");
    let heading_b = html.find("<h3>B</h3>").expect("B heading");
    assert!(heading_a < heading_b);
    let alpha_link = html.find(">Alpha (2)</a>").expect("Alpha entry");
    let beta_link = html.find(">Beta (1)</a>").expect("Beta entry");
    assert!(alpha_link < beta_link);
}

#[test]
fn sections_keep_extraction_order() {
    let html = render(
        "\\beginsong{Beta}\nb\n\\endsong\n\\beginsong{Alpha}\na\n\\endsong",
    );
    let beta = html.find("<h2>1. Beta</h2>").expect("Beta section");
    let alpha = html.find("<h2>2. Alpha</h2>").expect("Alpha section");
    assert!(beta < alpha);
}

#[test]
fn explicit_number_wins_over_position() {
    let html = render("\\beginsong{Test}[number=5]\n\\beginverse\nHello \\[C]world\n\\endverse\n\\endsong");
    assert!(html.contains("href=\"#song-5\""));
    assert!(html.contains("id=\"song-5\""));
    assert!(html.contains("<h2>5. Test</h2>"));
    // Verse numbering is internal to the song, independent of its number.
    assert!(html.contains("<div class=\"verse-number\">1.</div>"));
    // The chord sits above the 'w' of "world".
    assert!(html.contains("      <span class=\"chord\">C</span>"));
}

#[test]
fn author_line_is_italic_and_optional() {
    let with_author = render("\\beginsong{T}[by={John Doe}]\nx\n\\endsong");
    assert!(with_author.contains("<p><i>John Doe</i></p>"));
    let without = render("\\beginsong{T}\nx\n\\endsong");
    assert!(!without.contains("<p><i>"));
}

#[test]
fn empty_author_is_omitted() {
    let html = render("\\beginsong{T}[by={}]\nx\n\\endsong");
    assert!(!html.contains("<p><i>"));
}

#[test]
fn titles_are_escaped_everywhere() {
    let html = render("\\beginsong{Rock & Roll}\nx\n\\endsong");
    assert!(html.contains("Rock &amp; Roll"));
    assert!(!html.contains("Rock & Roll"));
}

#[test]
fn balanced_markup_renders_balanced_divs() {
    let (fragments, _) = parse_body(
        "\\beginverse\nfoo\n\\endverse\n\\beginchorus\nla\n\\endchorus",
        0,
        0,
    );
    let body = render_fragments(&fragments);
    assert_eq!(body.matches("<div").count(), body.matches("</div>").count());
}

#[test]
fn rendering_is_deterministic() {
    let source = "\\beginsong{One}\n\\beginverse\na \\[C]b\n\\endverse\n\\endsong";
    assert_eq!(render(source), render(source));
}

#[test]
fn case_insensitive_index_grouping() {
    let html = render(
        "\\beginsong{apple}\na\n\\endsong\n\\beginsong{Apricot}\nb\n\\endsong",
    );
    // One "A" group holds both titles.
    assert_eq!(html.matches("<h3>A</h3>").count(), 1);
}

#[test]
fn options_drive_the_boilerplate() {
    let (book, _) = extract_songs("\\beginsong{T}\nx\n\\endsong", 0);
    let options = DocumentOptions {
        title: "Zpěvník".to_string(),
        lang: "cs".to_string(),
        logo: Some("logo.png".to_string()),
        favicon: Some("favicon.ico".to_string()),
        stylesheet: Some("styles.css".to_string()),
        downloads: vec![Download {
            label: "pdf".to_string(),
            href: "book.pdf".to_string(),
        }],
        contents_heading: "Obsah".to_string(),
        back_to_top: "↑ Nahoru".to_string(),
    };
    let (html, _) = render_document(&[book], &options);
    assert!(html.contains("<html lang=\"cs\">"));
    assert!(html.contains("<title>Zpěvník</title>"));
    assert!(html.contains("<img src=\"logo.png\""));
    assert!(html.contains("href=\"favicon.ico\""));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\">"));
    assert!(html.contains("<a href=\"book.pdf\" download>pdf</a>"));
    assert!(html.contains("<h2>Obsah</h2>"));
    assert!(html.contains(">↑ Nahoru</a>"));
}

#[test]
fn unbalanced_body_still_renders_and_warns() {
    let (book, _) = extract_songs("\\beginsong{T}\n\\beginverse\nabandoned", 0);
    // The block above is unterminated and dropped; a terminated one warns
    // about its open verse instead.
    let (book2, _) = extract_songs("\\beginsong{T}\n\\beginverse\nabandoned\n\\endsong", 0);
    assert!(book.songs.is_empty());
    let (html, warnings) = render_document(&[book2], &DocumentOptions::default());
    assert!(html.contains("<div class=\"verse\">"));
    assert_eq!(warnings.len(), 1);
}
