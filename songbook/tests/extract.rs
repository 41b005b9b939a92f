use songbook::{Metadata, Songbook, extract_songs};

fn extract(source: &str) -> Songbook {
    extract_songs(source, 0).0
}

#[test]
fn single_song() {
    let book = extract("\\beginsong{Test}[number=5 by={Someone}]\nHello\n\\endsong");
    assert_eq!(book.songs.len(), 1);
    let song = &book.songs[0];
    assert_eq!(song.title, "Test");
    assert_eq!(song.metadata.number, Some(5));
    assert_eq!(song.metadata.author.as_deref(), Some("Someone"));
    assert_eq!(song.body, "\nHello\n");
}

#[test]
fn metadata_argument_is_optional() {
    let book = extract("\\beginsong{Plain}\nla la\n\\endsong");
    assert_eq!(book.songs[0].metadata, Metadata::default());
}

#[test]
fn unknown_metadata_keys_are_ignored() {
    let book = extract("\\beginsong{T}[key=1 number=7 flavor={sweet}]\nx\n\\endsong");
    let metadata = &book.songs[0].metadata;
    assert_eq!(metadata.number, Some(7));
    assert_eq!(metadata.author, None);
}

#[test]
fn songs_keep_source_order() {
    let book = extract(
        "\\beginsong{Beta}\nb\n\\endsong\n\\beginsong{Alpha}\na\n\\endsong",
    );
    let titles: Vec<&str> = book.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Beta", "Alpha"]);
}

#[test]
fn unterminated_song_is_dropped_with_warning() {
    let (book, warnings) = extract_songs("\\beginsong{Lost}\nno end here", 0);
    assert!(book.songs.is_empty());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("dropped"));
}

#[test]
fn terminated_songs_survive_a_trailing_unterminated_one() {
    let (book, warnings) = extract_songs(
        "\\beginsong{Good}\nok\n\\endsong\n\\beginsong{Bad}\nno end",
        0,
    );
    assert_eq!(book.songs.len(), 1);
    assert_eq!(book.songs[0].title, "Good");
    assert_eq!(warnings.len(), 1);
}

#[test]
fn body_offset_points_into_the_source() {
    let source = "\\beginsong{T}\nbody\n\\endsong";
    let book = extract(source);
    let song = &book.songs[0];
    assert_eq!(&source[song.body_offset..song.body_offset + song.body.len()], song.body);
}

#[test]
fn empty_body_is_allowed() {
    let book = extract("\\beginsong{T}\\endsong");
    assert_eq!(book.songs[0].body, "");
}
