//! Per-scenario state carried between steps

/// State one step leaves behind for a later step of the same scenario.
///
/// Created when a scenario starts and dropped when it ends; the runner never
/// shares one between scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioContext {
    last_browsed_isbn: Option<String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_last_browsed_isbn(&mut self, isbn: impl Into<String>) {
        self.last_browsed_isbn = Some(isbn.into());
    }

    /// Isbn of the details page opened most recently in this scenario.
    pub fn last_browsed_isbn(&self) -> Option<&str> {
        self.last_browsed_isbn.as_deref()
    }
}
