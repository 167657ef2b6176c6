//! Generic reader for any CSV file with a header row.

use std::path::Path;

/// A CSV file loaded as plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Read a CSV file, dropping every row with a missing or blank field.
///
/// Any failure (missing file, bad encoding, broken quoting) gives an empty table.
pub fn read_table(path: impl AsRef<Path>) -> CsvTable {
    try_read_table(path.as_ref()).unwrap_or_default()
}

fn try_read_table(path: &Path) -> Result<CsvTable, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let complete =
            record.len() >= headers.len() && record.iter().all(|field| !field.is_empty());

        if complete {
            rows.push(record.iter().take(headers.len()).map(str::to_string).collect());
        }
    }

    Ok(CsvTable { headers, rows })
}
