//! HTML assembly for the album listing.
//!
//! One fixed document: bootstrap/font-awesome head, a single table with an
//! Artist / Year / Album / Rating row per album, the artist cell spanning
//! its group of rows.

use std::io::{self, Write};

use crate::rating::Rating;

/// One album row within an artist's group.
#[derive(Debug, Clone)]
pub struct AlbumRow {
    pub date: String,
    pub album: String,
    pub rating: Rating,
}

/// All albums for one artist.
#[derive(Debug, Clone)]
pub struct ArtistGroup {
    pub artist: String,
    pub albums: Vec<AlbumRow>,
}

/// Escape text for interpolation into markup.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Star glyphs for a rating: one filled star per point, then empty stars up
/// to the stored maximum. An unavailable rating renders as nothing.
pub fn stars(rating: Rating) -> String {
    match rating {
        Rating::Score { value, max } => {
            let filled = "<i class=\"fa fa-star\"></i>".repeat(value as usize);
            let empty =
                "<i class=\"fa fa-star-o\"></i>".repeat(max.saturating_sub(value) as usize);
            format!("{filled}{empty}")
        }
        Rating::Unavailable => String::new(),
    }
}

/// Write the complete document.
pub fn write_report<W: Write>(
    out: &mut W,
    title: &str,
    groups: &[ArtistGroup],
) -> io::Result<()> {
    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\"/>")?;
    writeln!(out, "<title>{}</title>", escape(title))?;
    writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"https://netdna.bootstrapcdn.com/bootstrap/3.1.1/css/bootstrap.min.css\">"
    )?;
    writeln!(
        out,
        "<link rel=\"stylesheet\" href=\"https://maxcdn.bootstrapcdn.com/font-awesome/4.1.0/css/font-awesome.min.css\">"
    )?;
    writeln!(
        out,
        "<style>body{{background:#eee}}table{{margin:5em auto; max-width:56em; background: white;}}</style>"
    )?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div class=\"table-responsive\">")?;
    writeln!(
        out,
        "<table id=\"music\" style=\"white-space: nowrap;\" class=\"table table-bordered\">"
    )?;
    writeln!(out, "<thead>")?;
    writeln!(
        out,
        "<tr><th>Artist</th><th>Year</th><th>Album</th><th>Rating</th></tr>"
    )?;
    writeln!(out, "</thead>")?;
    writeln!(out, "<tbody>")?;
    for group in groups {
        write_group(out, group)?;
    }
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}

fn write_group<W: Write>(out: &mut W, group: &ArtistGroup) -> io::Result<()> {
    for (i, row) in group.albums.iter().enumerate() {
        if i == 0 {
            writeln!(
                out,
                "<tr class=\"newartist\"><td rowspan=\"{}\">{}</td>",
                group.albums.len(),
                escape(&group.artist)
            )?;
        } else {
            writeln!(out, "<tr>")?;
        }
        writeln!(out, "<td>{}</td>", escape(&row.date))?;
        writeln!(out, "<td>{}</td>", escape(&row.album))?;
        writeln!(out, "<td>{}</td>", stars(row.rating))?;
        writeln!(out, "</tr>")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_handles_markup_characters() {
        assert_eq!(escape("AC & DC"), "AC &amp; DC");
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn stars_renders_against_the_stored_denominator() {
        let out = stars(Rating::Score { value: 8, max: 10 });
        assert_eq!(out.matches("fa fa-star\"").count(), 8);
        assert_eq!(out.matches("fa fa-star-o\"").count(), 2);
    }

    #[test]
    fn stars_saturate_when_value_exceeds_max() {
        let out = stars(Rating::Score { value: 12, max: 10 });
        assert_eq!(out.matches("fa fa-star\"").count(), 12);
        assert_eq!(out.matches("fa fa-star-o\"").count(), 0);
    }

    #[test]
    fn stars_render_nothing_when_unavailable() {
        assert_eq!(stars(Rating::Unavailable), "");
    }

    fn sample_groups() -> Vec<ArtistGroup> {
        vec![
            ArtistGroup {
                artist: "Simon & Garfunkel".to_string(),
                albums: vec![
                    AlbumRow {
                        date: "1966".to_string(),
                        album: "Sounds of Silence".to_string(),
                        rating: Rating::Score { value: 8, max: 10 },
                    },
                    AlbumRow {
                        date: "1970".to_string(),
                        album: "Bridge over Troubled Water".to_string(),
                        rating: Rating::Unavailable,
                    },
                ],
            },
            ArtistGroup {
                artist: "Tindersticks".to_string(),
                albums: vec![AlbumRow {
                    date: "1993".to_string(),
                    album: "Tindersticks".to_string(),
                    rating: Rating::Score { value: 9, max: 10 },
                }],
            },
        ]
    }

    #[test]
    fn write_report_spans_the_artist_cell_over_its_rows() {
        let mut out = Vec::new();
        write_report(&mut out, "Music Library", &sample_groups()).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.contains("<td rowspan=\"2\">Simon &amp; Garfunkel</td>"));
        assert!(html.contains("<td rowspan=\"1\">Tindersticks</td>"));
        assert_eq!(html.matches("<tr class=\"newartist\">").count(), 2);
        assert_eq!(html.matches("</tr>").count(), 4);
    }

    #[test]
    fn write_report_emits_rows_in_order_with_ratings() {
        let mut out = Vec::new();
        write_report(&mut out, "Music Library", &sample_groups()).unwrap();
        let html = String::from_utf8(out).unwrap();

        let sounds = html.find("Sounds of Silence").unwrap();
        let bridge = html.find("Bridge over Troubled Water").unwrap();
        assert!(sounds < bridge);

        assert!(html.contains("<title>Music Library</title>"));
        // The unrated album gets an empty rating cell, not a crash.
        assert!(html.contains("<td></td>"));
    }
}
