//! Delimited-text loading with encoding and delimiter auto-detection.

use csv::ReaderBuilder;
use std::path::Path;

use super::{non_blank, normalize_headers, RowTable};
use crate::error::{LoadError, LoadResult};

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as is; anything else goes through chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// Unknown labels fall back to lossy UTF-8. A leading BOM is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    let decoded = match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) if enc != encoding_rs::UTF_8 => enc.decode(bytes).0.into_owned(),
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Comma wins ties and lines with no separator at all.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [b',', b';', b'\t', b'|'];
    let mut best_sep = b',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.bytes().filter(|&b| b == sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse delimited bytes into a [`RowTable`]. The first record is the header.
pub fn parse_csv_bytes(bytes: &[u8]) -> LoadResult<RowTable> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let delimiter = detect_delimiter(&content);

    tracing::debug!(%encoding, delimiter = %(delimiter as char).escape_default(), "parsing delimited text");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let header_record = reader.headers()?.clone();
    if header_record.is_empty() {
        return Err(LoadError::EmptyFile);
    }
    let headers = normalize_headers(header_record.iter());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }
        rows.push(record.iter().map(|field| non_blank(field.to_string())).collect());
    }

    Ok(RowTable::new(headers, rows))
}

/// Read and parse a `.csv` file.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> LoadResult<RowTable> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_csv_bytes(&bytes)
}
