use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::model::{CellValue, Table};
use crate::error::{InspectError, Result};

const BYTES_PER_MB: u64 = 1024 * 1024;

// ---------------------------------------------------------------------------
// File listing
// ---------------------------------------------------------------------------

/// A loadable file found in the data directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl CsvFile {
    pub fn size_mb(&self) -> f64 {
        self.size as f64 / BYTES_PER_MB as f64
    }
}

/// List `*.csv` files in `dir`, sorted by name.
///
/// An empty directory yields [`InspectError::NoCsvFiles`].
pub fn list_csv_files(dir: &Path) -> Result<Vec<CsvFile>> {
    let entries = fs::read_dir(dir).map_err(|source| InspectError::File {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        let metadata = match entry.metadata() {
            Ok(m) if m.is_file() => m,
            Ok(_) => continue,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                continue;
            }
        };
        files.push(CsvFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            size: metadata.len(),
        });
    }

    if files.is_empty() {
        return Err(InspectError::NoCsvFiles);
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("found {} csv file(s) in {}", files.len(), dir.display());
    Ok(files)
}

// ---------------------------------------------------------------------------
// Menu choice parsing
// ---------------------------------------------------------------------------

/// Why a 1-based choice was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceError {
    NotANumber,
    OutOfRange,
}

/// Turn user input into a zero-based index into a list of `len` items.
///
/// Only plain ASCII digits are accepted, so `-1` and `+1` are not numbers.
pub fn parse_choice(input: &str, len: usize) -> Result<usize, ChoiceError> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChoiceError::NotANumber);
    }
    // Digits too long for usize are simply out of range.
    match input.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(ChoiceError::OutOfRange),
    }
}

/// Pick a file by its 1-based position in `files`.
pub fn select_file<'a>(files: &'a [CsvFile], input: &str) -> Result<&'a CsvFile> {
    match parse_choice(input, files.len()) {
        Ok(i) => Ok(&files[i]),
        Err(ChoiceError::NotANumber) => Err(InspectError::FileChoiceNotANumber),
        Err(ChoiceError::OutOfRange) => Err(InspectError::FileChoiceOutOfRange),
    }
}

// ---------------------------------------------------------------------------
// Loading and validation
// ---------------------------------------------------------------------------

/// Limits applied when loading a file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub max_size_mb: u64,
    /// Column exempt from numeric validation.
    pub label_column: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_size_mb: 20,
            label_column: "region".to_string(),
        }
    }
}

/// Load and validate a CSV file.
///
/// Checks the size cap before touching the content, then parses and
/// validates. The returned table has every non-label column numeric.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let size = fs::metadata(path)
        .map_err(|source| InspectError::File {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if size > options.max_size_mb.saturating_mul(BYTES_PER_MB) {
        warn!(
            "{} is {size} bytes, over the {} MB cap",
            path.display(),
            options.max_size_mb
        );
        return Err(InspectError::FileTooLarge {
            limit_mb: options.max_size_mb,
        });
    }

    let file = fs::File::open(path).map_err(|source| InspectError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_csv(file)?;
    info!(
        "parsed {}: {} rows x {} columns",
        path.display(),
        table.len(),
        table.column_count()
    );

    if table.is_empty() {
        return Err(InspectError::EmptyTable);
    }
    validate(&table, &options.label_column)?;
    Ok(table)
}

/// Parse CSV content with a header row into a [`Table`].
pub fn parse_csv<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let headers = dedup_headers(reader.headers()?.iter());
    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(InspectError::Malformed(
            "no columns to parse from file".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            return Err(InspectError::Malformed(format!(
                "expected {} fields in line {}, saw {}",
                headers.len(),
                row_no + 2,
                record.len()
            )));
        }
        rows.push(record.iter().map(CellValue::parse).collect());
    }

    Ok(Table::from_rows(headers, rows))
}

/// Rename repeated header names to `name.1`, `name.2`, ...
///
/// A generated name skips any suffix already taken, so `x,x.1,x` becomes
/// `x,x.1,x.2`.
fn dedup_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::new();
    for name in raw {
        let mut header = name.to_string();
        if used.contains(&header) {
            let n = suffixes.entry(name.to_string()).or_insert(0);
            loop {
                *n += 1;
                header = format!("{name}.{n}");
                if !used.contains(&header) {
                    break;
                }
            }
        }
        used.insert(header.clone());
        headers.push(header);
    }
    headers
}

/// Every non-label column must be numeric.
///
/// Reports the first offending cell by column, then row. Rows are numbered
/// as a spreadsheet shows them: the header is row 1.
pub fn validate(table: &Table, label_column: &str) -> Result<()> {
    for column in &table.columns {
        if column.name == label_column {
            continue;
        }
        if let Some((index, value)) = column.first_non_numeric() {
            return Err(InspectError::DataIntegrity {
                column: column.name.clone(),
                row: index + 2,
                value: value.to_string(),
            });
        }
    }
    Ok(())
}
