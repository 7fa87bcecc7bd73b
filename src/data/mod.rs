/// Data layer: core types, loading and validation.
///
/// Architecture:
/// ```text
///   *.csv in data dir
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  list → select → size cap → parse → validate
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered columns, numeric kind cached per column
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
