// File: src/error.rs
// Purpose: Mount failure modes

use thiserror::Error;

/// Errors that abort a mount.
///
/// Both are fatal: the tree is left partially annotated and must be
/// rebuilt before another attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// A `parent_action` reference (after following `../` hops) does not
    /// resolve to an existing action.
    #[error("cannot find parent action '{reference}' for action {tree_path}")]
    MissingParentAction {
        /// The unresolved reference, as written (including `../` prefixes).
        reference: String,
        /// `tree_path` of the action holding the reference.
        tree_path: String,
    },

    /// The in-route `parent_action` graph contains a cycle. A
    /// self-reference counts.
    #[error("cyclic parent action reference involving {}", .tree_paths.join(", "))]
    CyclicDependency {
        /// `tree_path`s of every action left unresolved by the cycle.
        tree_paths: Vec<String>,
    },
}
