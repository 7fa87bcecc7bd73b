// ---------------------------------------------------------------------------
// CellValue – a single cell of a loaded table
// ---------------------------------------------------------------------------

/// Tokens read as a missing value, mirroring the default NA set of Pandas.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A dynamically-typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Classify a raw CSV field.
    pub fn parse(raw: &str) -> Self {
        if MISSING_TOKENS.contains(&raw) || raw.trim().is_empty() {
            return CellValue::Missing;
        }
        match parse_number(raw) {
            Some(v) => CellValue::Number(v),
            None => CellValue::Text(raw.to_string()),
        }
    }

    /// Numeric view of the cell; `None` for text and missing cells.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// Parse a field as a float, ignoring surrounding whitespace.
///
/// Accepts everything `f64::from_str` does (sign, exponent, `inf`), but not
/// a textual NaN: those are read as missing before they get here.
pub fn parse_number(raw: &str) -> Option<f64> {
    let v = raw.trim().parse::<f64>().ok()?;
    if v.is_nan() {
        return None;
    }
    Some(v)
}

// ---------------------------------------------------------------------------
// Column – one named column with its cached classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every present cell parsed as a number.
    Numeric,
    /// At least one present cell is text.
    Text,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
    pub kind: ColumnKind,
}

impl Column {
    /// Build a column and classify it from its cells.
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        let kind = if cells.iter().all(|c| c.is_missing() || c.as_f64().is_some()) {
            ColumnKind::Numeric
        } else {
            ColumnKind::Text
        };
        Column {
            name: name.into(),
            cells,
            kind,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }

    /// Position and value of the first present cell that is not a number.
    pub fn first_non_numeric(&self) -> Option<(usize, &str)> {
        self.cells.iter().enumerate().find_map(|(i, c)| match c {
            CellValue::Text(s) => Some((i, s.as_str())),
            _ => None,
        })
    }

    /// Every cell as a number, or `None` if any cell is missing or text.
    pub fn values(&self) -> Option<Vec<f64>> {
        self.cells.iter().map(CellValue::as_f64).collect()
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Assemble a table from row-major records.
    ///
    /// Short rows are padded with [`CellValue::Missing`]; callers reject long
    /// rows before getting here.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let n_rows = rows.len();
        let mut per_column: Vec<Vec<CellValue>> = headers
            .iter()
            .map(|_| Vec::with_capacity(n_rows))
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in per_column.iter_mut() {
                column.push(cells.next().unwrap_or(CellValue::Missing));
            }
        }

        let columns = headers
            .into_iter()
            .zip(per_column)
            .map(|(name, cells)| Column::new(name, cells))
            .collect();

        Table {
            columns,
            rows: n_rows,
        }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the numeric columns, in file order.
    ///
    /// No column is skipped by name: a label column full of numbers counts.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.numeric_column_positions()
            .into_iter()
            .map(|i| self.columns[i].name.as_str())
            .collect()
    }

    /// Positions in `columns` of the numeric columns, in file order.
    pub fn numeric_column_positions(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_numeric())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::from_rows(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|v| CellValue::parse(v)).collect())
                .collect(),
        )
    }

    #[test]
    fn cell_parsing() {
        assert_eq!(CellValue::parse("12"), CellValue::Number(12.0));
        assert_eq!(CellValue::parse(" -1.5e2 "), CellValue::Number(-150.0));
        assert_eq!(CellValue::parse("NA"), CellValue::Missing);
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("   "), CellValue::Missing);
        assert_eq!(CellValue::parse("abc"), CellValue::Text("abc".into()));
        assert!(CellValue::parse("inf").as_f64().unwrap().is_infinite());
    }

    #[test]
    fn spreadsheet_error_tokens_are_missing() {
        for token in ["#NA", "#N/A N/A", "-1.#IND", "1.#IND", "-1.#QNAN", "1.#QNAN"] {
            assert_eq!(CellValue::parse(token), CellValue::Missing, "{token}");
        }
    }

    #[test]
    fn detects_only_fully_numeric_columns() {
        let t = table(
            &["region", "sales", "notes"],
            &[&["north", "10", "5"], &["south", "20", "late"], &["east", "", "7"]],
        );
        assert_eq!(t.numeric_columns(), vec!["sales"]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.column_count(), 3);
    }

    #[test]
    fn label_column_is_not_special_cased() {
        let t = table(&["region", "sales"], &[&["1", "10"], &["2", "20"]]);
        assert_eq!(t.numeric_columns(), vec!["region", "sales"]);
    }

    #[test]
    fn no_numeric_columns_is_empty_not_error() {
        let t = table(&["a"], &[&["x"], &["y"]]);
        assert!(t.numeric_columns().is_empty());
    }

    #[test]
    fn short_rows_are_padded() {
        let t = table(&["a", "b"], &[&["1", "2"], &["3"]]);
        let b = t.column("b").unwrap();
        assert_eq!(b.cells[1], CellValue::Missing);
        assert!(b.is_numeric());
        assert_eq!(b.values(), None);
        assert_eq!(t.column("a").unwrap().values(), Some(vec![1.0, 3.0]));
    }

    #[test]
    fn first_non_numeric_reports_position() {
        let c = Column::new(
            "revenue",
            ["1", "2", "abc", "x"].iter().map(|v| CellValue::parse(v)).collect(),
        );
        assert_eq!(c.first_non_numeric(), Some((2, "abc")));
        assert_eq!(c.kind, ColumnKind::Text);
    }
}
