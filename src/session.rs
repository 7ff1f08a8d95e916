//! Session-scoped state: the active connection and the last fetched tree.
//!
//! The source application kept these in process-wide UI state; here they
//! live in an explicit object constructed per invocation and passed to
//! whatever renders or generates commands. The tree is replaced wholesale on
//! each successful fetch, so readers never observe a partially-built tree.

use crate::api::{FetchOutcome, FolderWarning};
use crate::course::CourseTree;
use crate::parser::ConnectionConfig;

/// One interactive session's in-memory state. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    config: ConnectionConfig,
    tree: Option<CourseTree>,
    warnings: Vec<FolderWarning>,
}

impl Session {
    /// Starts a session with no fetched tree yet.
    #[must_use]
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            tree: None,
            warnings: Vec::new(),
        }
    }

    /// The connection config the session was opened with.
    #[must_use]
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// The last successfully fetched tree, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&CourseTree> {
        self.tree.as_ref()
    }

    /// Per-folder warnings from the last fetch.
    #[must_use]
    pub fn warnings(&self) -> &[FolderWarning] {
        &self.warnings
    }

    /// Installs a fetch result, replacing tree and warnings wholesale.
    pub fn install_fetch(&mut self, outcome: FetchOutcome) {
        self.tree = Some(outcome.tree);
        self.warnings = outcome.warnings;
    }

    /// Discards the fetched tree and warnings, keeping the config.
    pub fn clear(&mut self) {
        self.tree = None;
        self.warnings.clear();
    }
}
