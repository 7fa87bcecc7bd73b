use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::config::Settings;
use crate::data::loader::{self, ChoiceError};
use crate::error::{InspectError, Result};
use crate::state::Session;
use crate::stats::{self, Summary};
use crate::ui::report;

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectFile,
    Metrics,
    Percentiles,
    Exit,
}

impl Action {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Action::SelectFile),
            "2" => Some(Action::Metrics),
            "3" => Some(Action::Percentiles),
            "4" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// Which statistic a column report runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Metrics,
    Percentiles,
}

// ---------------------------------------------------------------------------
// The interactive session
// ---------------------------------------------------------------------------

/// Menu loop over any line source and sink.
pub struct InspectorApp<R, W> {
    input: R,
    output: W,
    settings: Settings,
    session: Session,
}

impl<R: BufRead, W: Write> InspectorApp<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
            session: Session::default(),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run until the user exits or input ends.
    ///
    /// Only fatal errors are returned; everything else is printed and the
    /// menu comes back.
    pub fn run(&mut self) -> Result<()> {
        loop {
            report::menu(&mut self.output, &self.session)?;
            let Some(line) = self.prompt("Choose an action (1-4): ")? else {
                debug!("input closed, leaving menu");
                return Ok(());
            };

            let action = Action::parse(&line);
            debug!("{:?}: action {action:?}", self.session.state());
            let outcome = match action {
                Some(Action::SelectFile) => self.select_file(),
                Some(Action::Metrics) => self.report(ReportKind::Metrics),
                Some(Action::Percentiles) => self.report(ReportKind::Percentiles),
                Some(Action::Exit) => return Ok(()),
                None => {
                    writeln!(self.output, "Unknown command")?;
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                if e.is_fatal() {
                    warn!("stopping on fatal error: {e}");
                    return Err(e);
                }
                debug!("recoverable error: {e:?}");
                writeln!(self.output, "{e}")?;
            }
        }
    }

    /// Print `text` and read one line; `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// List files, read a choice, load it and make it current.
    fn select_file(&mut self) -> Result<()> {
        let files = loader::list_csv_files(&self.settings.dir)?;
        report::file_list(&mut self.output, &files)?;

        let Some(choice) = self.prompt("\nSelect file: ")? else {
            return Ok(());
        };
        let file = loader::select_file(&files, &choice)?;

        let table = loader::load_table(&file.path, &self.settings.load_options())?;
        report::load_summary(&mut self.output, &file.name, &table)?;
        info!("loaded {} ({} rows)", file.name, table.len());
        self.session.set_table(table, file.name.clone());
        Ok(())
    }

    /// Pick a numeric column of the current table and run `kind` on it.
    fn report(&mut self, kind: ReportKind) -> Result<()> {
        let Some(table) = self.session.table() else {
            writeln!(self.output, "No file selected")?;
            return Ok(());
        };

        let positions = table.numeric_column_positions();
        if positions.is_empty() {
            return Err(InspectError::NoNumericColumns);
        }
        let columns: Vec<String> = table
            .numeric_columns()
            .into_iter()
            .map(str::to_string)
            .collect();
        report::column_choices(&mut self.output, &columns)?;

        let Some(choice) = self.prompt("Select column number: ")? else {
            return Ok(());
        };
        let chosen = match loader::parse_choice(&choice, columns.len()) {
            Ok(i) => i,
            Err(ChoiceError::NotANumber) => return Err(InspectError::ColumnChoiceNotANumber),
            Err(ChoiceError::OutOfRange) => {
                return Err(InspectError::ColumnChoiceOutOfRange {
                    available: columns.len(),
                })
            }
        };
        let name = &columns[chosen];

        // Numeric kind was fixed at load time; a missing cell still cannot be
        // summarised, and that is a data error rather than a typo.
        let values = self
            .session
            .table()
            .and_then(|t| t.columns.get(positions[chosen]))
            .and_then(|c| c.values())
            .ok_or_else(|| InspectError::MissingValues {
                column: name.clone(),
            })?;

        match kind {
            ReportKind::Metrics => {
                // Loaded tables have at least one row and no gaps in `values`.
                let summary =
                    Summary::from_values(&values).ok_or(InspectError::EmptyTable)?;
                report::metrics(&mut self.output, name, &summary)?;
            }
            ReportKind::Percentiles => {
                let rows = stats::percentiles(&values);
                report::percentiles(&mut self.output, name, &rows)?;
            }
        }
        Ok(())
    }
}
