//! Sidecar rating lookup.
//!
//! Ratings are not part of the daemon's database. They live in a small text
//! file next to each album's audio files; the catalog only tells us where
//! the album is stored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::warn;

use crate::catalog;
use crate::config::LibrarySettings;
use crate::mpd::{Catalog, MpdError};

/// A parsed album rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// `value` points out of `max`, as stored in the sidecar ("7/10").
    Score { value: u32, max: u32 },
    /// No sidecar, unreadable sidecar, or content that does not parse.
    Unavailable,
}

impl Rating {
    /// Parse a sidecar line of the form `"<value>/<max>"`.
    ///
    /// Anything else is reported unavailable rather than an error, matching
    /// the missing-file case.
    pub fn parse(line: &str) -> Rating {
        let Some((value, max)) = line.trim().split_once('/') else {
            return Rating::Unavailable;
        };
        match (value.trim().parse(), max.trim().parse()) {
            (Ok(value), Ok(max)) => Rating::Score { value, max },
            _ => Rating::Unavailable,
        }
    }
}

/// Locates rating sidecars relative to the music root.
pub struct SidecarResolver {
    music_root: PathBuf,
    rating_file: String,
}

impl SidecarResolver {
    pub fn new(library: &LibrarySettings) -> Self {
        Self {
            music_root: library.music_root.clone(),
            rating_file: library.rating_file.clone(),
        }
    }

    /// Sidecar path for a database-relative track path.
    ///
    /// The sidecar sits in the album's own directory. A track inside a
    /// per-disc subfolder ("CD1", "cd 2") is one level deeper, so that
    /// folder is skipped.
    pub fn sidecar_path(&self, track_file: &str) -> PathBuf {
        let track = self.music_root.join(track_file);
        let mut dir = track.parent().unwrap_or(Path::new(""));
        if dir
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_disc_dir)
        {
            if let Some(parent) = dir.parent() {
                dir = parent;
            }
        }
        dir.join(&self.rating_file)
    }

    /// Read the rating for a track path, tolerating a missing sidecar.
    pub fn read(&self, track_file: &str) -> Rating {
        let path = self.sidecar_path(track_file);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(_) => return Rating::Unavailable,
        };

        let mut line = String::new();
        if BufReader::new(file).read_line(&mut line).is_err() {
            return Rating::Unavailable;
        }
        let rating = Rating::parse(&line);
        if rating == Rating::Unavailable && !line.trim().is_empty() {
            warn!("unparsable rating {:?} in {}", line.trim(), path.display());
        }
        rating
    }
}

/// Rating for one (artist, date, album) triple.
///
/// The catalog supplies the album's file location; a triple that matches no
/// record is a lookup error, not a silent blank.
pub fn rating_for_album<C: Catalog>(
    catalog: &mut C,
    resolver: &SidecarResolver,
    artist: &str,
    date: &str,
    album: &str,
) -> Result<Rating, MpdError> {
    let files = catalog::query(
        catalog,
        &["file"],
        &[("albumartist", artist), ("date", date), ("album", album)],
    )?;
    let Some(file) = files.first().and_then(|tuple| tuple.first()) else {
        return Err(MpdError::NotFound(format!("{artist} / {date} / {album}")));
    };
    Ok(resolver.read(file))
}

/// Whether a directory name marks one disc of a multi-disc album:
/// the text "CD" (any case), optionally one space, then a digit.
fn is_disc_dir(name: &str) -> bool {
    let bytes = name.as_bytes();
    for i in 0..bytes.len().saturating_sub(2) {
        if bytes[i].eq_ignore_ascii_case(&b'c') && bytes[i + 1].eq_ignore_ascii_case(&b'd') {
            let rest = &bytes[i + 2..];
            let rest = rest.strip_prefix(b" ").unwrap_or(rest);
            if rest.first().is_some_and(u8::is_ascii_digit) {
                return true;
            }
        }
    }
    false
}
