use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::LoadOptions;

/// Interactive inspector for numeric CSV files
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// Directory scanned for *.csv files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Largest file that will be loaded, in MB
    #[arg(long, default_value_t = 20)]
    pub max_size_mb: u64,

    /// Column exempt from numeric validation
    #[arg(long, default_value = "region")]
    pub label_column: String,
}

impl Default for Settings {
    fn default() -> Self {
        let defaults = LoadOptions::default();
        Self {
            dir: PathBuf::from("."),
            max_size_mb: defaults.max_size_mb,
            label_column: defaults.label_column,
        }
    }
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_size_mb: self.max_size_mb,
            label_column: self.label_column.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_cli_defaults() {
        let parsed = Settings::try_parse_from(["csv-inspector"]).unwrap();
        let default = Settings::default();
        assert_eq!(parsed.dir, default.dir);
        assert_eq!(parsed.max_size_mb, 20);
        assert_eq!(parsed.label_column, "region");
        assert_eq!(default.load_options().max_size_mb, 20);
    }

    #[test]
    fn flags_override_defaults() {
        let parsed = Settings::try_parse_from([
            "csv-inspector",
            "--dir",
            "data",
            "--max-size-mb",
            "5",
            "--label-column",
            "city",
        ])
        .unwrap();
        let options = parsed.load_options();
        assert_eq!(parsed.dir, PathBuf::from("data"));
        assert_eq!(options.max_size_mb, 5);
        assert_eq!(options.label_column, "city");
    }

    #[test]
    fn rejects_non_numeric_size() {
        assert!(Settings::try_parse_from(["csv-inspector", "--max-size-mb", "big"]).is_err());
    }
}
