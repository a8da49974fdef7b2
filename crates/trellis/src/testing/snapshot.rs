//! # Snapshot Testing Utilities
//!
//! Compares tree dumps and error messages against files stored on disk.
//! Set `UPDATE_SNAPSHOTS=1` to (re)write the stored files.
//!
//! ```rust,ignore
//! use trellis::testing::SnapshotTester;
//!
//! let tester = SnapshotTester::new("tests/snapshots");
//! tester.assert_tree_snapshot("json_object", &grammar.parse(input)?);
//! ```

use crate::error::ParseError;
use crate::syntax::SyntaxTree;
use crate::syntax::pretty::{PrettyConfig, dump_with_config};
use std::path::PathBuf;

/// Snapshot tester for parse trees
#[derive(Debug, Clone)]
pub struct SnapshotTester {
    snapshot_dir: PathBuf,
    update_mode: bool,
    config: PrettyConfig,
}

impl SnapshotTester {
    #[must_use]
    pub fn new(snapshot_dir: impl Into<PathBuf>) -> Self {
        let update_mode = std::env::var("UPDATE_SNAPSHOTS").is_ok()
            || std::env::var("TRELLIS_UPDATE_SNAPSHOTS").is_ok();
        Self {
            snapshot_dir: snapshot_dir.into(),
            update_mode,
            config: PrettyConfig::default(),
        }
    }

    /// Set update mode (for updating existing snapshots)
    #[must_use]
    pub const fn with_update_mode(mut self, update: bool) -> Self {
        self.update_mode = update;
        self
    }

    /// Dump trees with `config` instead of the default layout
    #[must_use]
    pub fn with_config(mut self, config: PrettyConfig) -> Self {
        self.config = config;
        self
    }

    /// Assert that a syntax tree matches the snapshot
    ///
    /// # Panics
    /// Panics if the snapshot doesn't match (and update mode is disabled)
    pub fn assert_tree_snapshot(&self, name: &str, tree: &SyntaxTree) {
        let actual = dump_with_config(tree.root(), &self.config);
        self.check_snapshot(name, &actual);
    }

    /// Assert that a parse error matches the snapshot
    ///
    /// # Panics
    /// Panics if the snapshot doesn't match (and update mode is disabled)
    pub fn assert_error_snapshot(&self, name: &str, error: &ParseError) {
        let actual = format!("{error}\nspan: {}\n", error.span());
        self.check_snapshot(name, &actual);
    }

    fn check_snapshot(&self, name: &str, actual: &str) {
        let path = self.snapshot_dir.join(format!("{name}.snap"));

        if self.update_mode {
            std::fs::create_dir_all(&self.snapshot_dir).expect("Failed to create snapshot dir");
            std::fs::write(&path, actual).expect("Failed to write snapshot");
            return;
        }

        if path.exists() {
            let expected = std::fs::read_to_string(&path).expect("Failed to read snapshot");
            assert!(
                actual == expected,
                "Snapshot mismatch for '{name}':\n\
                --- Expected ---\n{expected}\n\
                --- Actual ---\n{actual}\n\
                \n\
                To update snapshots, run with UPDATE_SNAPSHOTS=1"
            );
        } else {
            panic!(
                "Snapshot '{name}' not found at {}.\n\
                To create it, run with UPDATE_SNAPSHOTS=1",
                path.display()
            );
        }
    }
}
