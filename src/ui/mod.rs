//! Console rendering. Everything the user reads goes through here.

pub mod report;
