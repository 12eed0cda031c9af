//! Catalog queries: projection, filtering and grouping helpers.

use std::collections::HashSet;

use crate::mpd::{Catalog, MpdError};

/// Project `fields` out of every matching record, in field order.
///
/// An empty `filters` slice asks the daemon for the full listing; otherwise
/// a single `find` carries all criteria (the daemon matches their
/// conjunction). Multi-valued fields contribute their first value. A tuple
/// with any missing or empty component is dropped, and duplicate tuples are
/// emitted once, at the position of their first occurrence.
pub fn query<C: Catalog>(
    catalog: &mut C,
    fields: &[&str],
    filters: &[(&str, &str)],
) -> Result<Vec<Vec<String>>, MpdError> {
    let records = if filters.is_empty() {
        catalog.list_all()?
    } else {
        catalog.find(filters)?
    };

    let mut seen = HashSet::new();
    let mut tuples = Vec::new();
    for record in &records {
        let projected: Vec<String> = fields
            .iter()
            .map(|field| record.first(field).unwrap_or_default().to_string())
            .collect();
        if projected.iter().any(|value| value.is_empty()) {
            continue;
        }
        if seen.insert(projected.clone()) {
            tuples.push(projected);
        }
    }
    Ok(tuples)
}

/// Every album artist in the catalog, in catalog order.
pub fn artists<C: Catalog>(catalog: &mut C) -> Result<Vec<String>, MpdError> {
    Ok(query(catalog, &["albumartist"], &[])?
        .into_iter()
        .filter_map(|tuple| tuple.into_iter().next())
        .collect())
}

/// One album belonging to an artist.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AlbumEntry {
    pub date: String,
    pub title: String,
}

/// All (date, album) pairs for an album artist, sorted by date then title.
pub fn albums<C: Catalog>(catalog: &mut C, artist: &str) -> Result<Vec<AlbumEntry>, MpdError> {
    let mut entries: Vec<AlbumEntry> =
        query(catalog, &["date", "album"], &[("albumartist", artist)])?
            .into_iter()
            .filter_map(|tuple| {
                let mut values = tuple.into_iter();
                Some(AlbumEntry {
                    date: values.next()?,
                    title: values.next()?,
                })
            })
            .collect();
    entries.sort();
    Ok(entries)
}

/// Sort key ordering artists case-insensitively, with a name starting in
/// lowercase sorting after its capitalized twin.
pub fn artist_sort_key(name: &str) -> (String, bool) {
    let starts_lower = name.chars().next().is_some_and(char::is_lowercase);
    (name.to_uppercase(), starts_lower)
}
