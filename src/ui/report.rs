use std::io::{self, Write};

use crate::data::loader::CsvFile;
use crate::data::model::Table;
use crate::state::Session;
use crate::stats::Summary;

// ---------------------------------------------------------------------------
// Menu
// ---------------------------------------------------------------------------

pub fn menu<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out, "\nChoose an action")?;
    match session.file_name() {
        Some(name) => writeln!(out, "Current file: {name}")?,
        None => writeln!(out, "No file selected")?,
    }
    writeln!(out, "1. Select file")?;
    writeln!(out, "2. Calculate metrics")?;
    writeln!(out, "3. Calculate percentiles")?;
    writeln!(out, "4. Exit")
}

// ---------------------------------------------------------------------------
// File selection and loading
// ---------------------------------------------------------------------------

pub fn file_list<W: Write>(out: &mut W, files: &[CsvFile]) -> io::Result<()> {
    writeln!(out, "\nAvailable files")?;
    for (i, file) in files.iter().enumerate() {
        writeln!(out, "{}. {} ({:.2} MB)", i + 1, file.name, file.size_mb())?;
    }
    Ok(())
}

pub fn load_summary<W: Write>(out: &mut W, file_name: &str, table: &Table) -> io::Result<()> {
    writeln!(out, "\nFile '{file_name}' loaded successfully")?;
    writeln!(
        out,
        "Rows: {}, Columns: {}",
        table.len(),
        table.column_count()
    )?;
    let quoted: Vec<String> = table
        .column_names()
        .iter()
        .map(|n| format!("'{n}'"))
        .collect();
    writeln!(out, "Columns: [{}]", quoted.join(", "))
}

// ---------------------------------------------------------------------------
// Column reports
// ---------------------------------------------------------------------------

pub fn column_choices<W: Write>(out: &mut W, columns: &[String]) -> io::Result<()> {
    writeln!(out, "Available numeric columns:")?;
    for (i, name) in columns.iter().enumerate() {
        writeln!(out, "{}. {name}", i + 1)?;
    }
    Ok(())
}

pub fn metrics<W: Write>(out: &mut W, column: &str, summary: &Summary) -> io::Result<()> {
    writeln!(out, "\nMetrics for column '{column}':")?;
    writeln!(out, "Count: {}", summary.count)?;
    writeln!(out, "Min: {:.2}", summary.min)?;
    writeln!(out, "Max: {:.2}", summary.max)?;
    writeln!(out, "Mean: {:.2}", summary.mean)?;
    writeln!(out, "Median: {:.2}", summary.median)
}

pub fn percentiles<W: Write>(out: &mut W, column: &str, rows: &[(u32, f64)]) -> io::Result<()> {
    writeln!(out, "\nPercentiles for column '{column}':")?;
    for (p, value) in rows {
        writeln!(out, "{p:2}%: {value:.2}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::data::model::CellValue;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_files_with_sizes() {
        let files = vec![CsvFile {
            name: "sales.csv".into(),
            path: PathBuf::from("sales.csv"),
            size: 2 * 1024 * 1024,
        }];
        let text = render(|out| file_list(out, &files));
        assert!(text.contains("1. sales.csv (2.00 MB)"));
    }

    #[test]
    fn load_summary_lists_columns() {
        let table = Table::from_rows(
            vec!["region".into(), "sales".into()],
            vec![vec![CellValue::parse("north"), CellValue::parse("1")]],
        );
        let text = render(|out| load_summary(out, "s.csv", &table));
        assert!(text.contains("File 's.csv' loaded successfully"));
        assert!(text.contains("Rows: 1, Columns: 2"));
        assert!(text.contains("Columns: ['region', 'sales']"));
    }

    #[test]
    fn metrics_use_two_decimals() {
        let summary = Summary::from_values(&[10.0, 20.0, 30.0, 40.0]).unwrap();
        let text = render(|out| metrics(out, "sales", &summary));
        assert!(text.contains("Count: 4\n"));
        assert!(text.contains("Min: 10.00\n"));
        assert!(text.contains("Max: 40.00\n"));
        assert!(text.contains("Mean: 25.00\n"));
        assert!(text.contains("Median: 25.00\n"));
    }

    #[test]
    fn percentile_labels_are_padded() {
        let text = render(|out| percentiles(out, "x", &[(0, 1.0), (5, 1.25), (100, 9.0)]));
        assert!(text.contains("\n 0%: 1.00\n"));
        assert!(text.contains("\n 5%: 1.25\n"));
        assert!(text.contains("\n100%: 9.00\n"));
    }

    #[test]
    fn menu_shows_current_file() {
        let text = render(|out| menu(out, &Session::default()));
        assert!(text.contains("No file selected"));
        assert!(text.contains("4. Exit"));
    }
}
