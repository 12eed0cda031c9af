use super::error::MpdError;
use super::response::{parse_records, quote_arg};

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| l.to_string()).collect()
}

#[test]
fn parse_records_splits_on_file_keys() {
    let records = parse_records(&lines(&[
        "file: Artist/Album/01.flac",
        "Album: First",
        "Date: 1998",
        "file: Artist/Album/02.flac",
        "Album: First",
        "Date: 1998",
    ]))
    .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].first("file"), Some("Artist/Album/01.flac"));
    assert_eq!(records[1].first("file"), Some("Artist/Album/02.flac"));
    assert_eq!(records[1].first("Album"), Some("First"));
}

#[test]
fn parse_records_starts_records_at_directory_and_playlist_keys() {
    let records = parse_records(&lines(&[
        "directory: Artist",
        "directory: Artist/Album",
        "file: Artist/Album/01.flac",
        "Title: Opener",
        "playlist: Artist/Album/album.m3u",
    ]))
    .unwrap();

    assert_eq!(records.len(), 4);
    assert_eq!(records[0].first("directory"), Some("Artist"));
    assert_eq!(records[2].first("Title"), Some("Opener"));
    assert_eq!(records[2].first("directory"), None);
    assert_eq!(records[3].first("playlist"), Some("Artist/Album/album.m3u"));
}

#[test]
fn record_first_takes_first_of_repeated_keys() {
    let records = parse_records(&lines(&[
        "file: a.flac",
        "Genre: Electronic",
        "Genre: Ambient",
    ]))
    .unwrap();

    assert_eq!(records[0].first("genre"), Some("Electronic"));
}

#[test]
fn record_lookup_is_case_insensitive() {
    let records = parse_records(&lines(&["file: a.flac", "AlbumArtist: Boards of Canada"])).unwrap();

    assert_eq!(records[0].first("albumartist"), Some("Boards of Canada"));
    assert_eq!(records[0].first("ALBUMARTIST"), Some("Boards of Canada"));
    assert_eq!(records[0].first("album"), None);
}

#[test]
fn record_keeps_value_with_colon_inside() {
    let records = parse_records(&lines(&["file: a.flac", "Title: Subtitle: The Sequel"])).unwrap();

    assert_eq!(records[0].first("Title"), Some("Subtitle: The Sequel"));
}

#[test]
fn parse_records_rejects_unparsable_lines() {
    let err = parse_records(&lines(&["file: a.flac", "garbage"])).unwrap_err();
    assert!(matches!(err, MpdError::Protocol(line) if line == "garbage"));
}

#[test]
fn quote_arg_escapes_quotes_and_backslashes() {
    assert_eq!(quote_arg("plain"), "\"plain\"");
    assert_eq!(quote_arg("with space"), "\"with space\"");
    assert_eq!(quote_arg("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(quote_arg("back\\slash"), "\"back\\\\slash\"");
}
