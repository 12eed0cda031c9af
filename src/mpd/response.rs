use super::error::MpdError;

/// One record from a daemon response: `key: value` pairs in response order.
///
/// A key may repeat within a record (multi-valued tags); `first` returns its
/// first occurrence. Keys compare ASCII-case-insensitively, since responses
/// capitalize tag names (`AlbumArtist: …`) while commands spell them in
/// lowercase.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pairs: Vec<(String, String)>,
}

impl Record {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value stored under `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Keys that open a new record in a listing response.
const RECORD_KEYS: [&str; 3] = ["file", "directory", "playlist"];

/// Group response lines into records.
///
/// Every line must be `Key: value`; a `file:`, `directory:` or `playlist:`
/// key closes the record under construction and opens the next one.
pub fn parse_records(lines: &[String]) -> Result<Vec<Record>, MpdError> {
    let mut records = Vec::new();
    let mut current: Vec<(String, String)> = Vec::new();

    for line in lines {
        let (key, value) = line
            .split_once(": ")
            .ok_or_else(|| MpdError::Protocol(line.clone()))?;
        if RECORD_KEYS.iter().any(|k| key.eq_ignore_ascii_case(k)) && !current.is_empty() {
            records.push(Record::from_pairs(std::mem::take(&mut current)));
        }
        current.push((key.to_string(), value.to_string()));
    }
    if !current.is_empty() {
        records.push(Record::from_pairs(current));
    }
    Ok(records)
}

/// Quote a command argument, escaping backslashes and double quotes.
pub fn quote_arg(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '\\' || c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
