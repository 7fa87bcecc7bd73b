use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Where the menu loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    NoFileLoaded,
    FileLoaded,
}

/// The loaded table and its file name. Only "select file" replaces them.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<(Table, String)>,
}

impl Session {
    pub fn state(&self) -> MenuState {
        match self.current {
            Some(_) => MenuState::FileLoaded,
            None => MenuState::NoFileLoaded,
        }
    }

    /// Replace whatever was loaded before.
    pub fn set_table(&mut self, table: Table, file_name: String) {
        self.current = Some((table, file_name));
    }

    pub fn table(&self) -> Option<&Table> {
        self.current.as_ref().map(|(t, _)| t)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, n)| n.as_str())
    }
}
