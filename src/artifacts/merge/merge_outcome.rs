use crate::artifacts::objects::object_id::ObjectId;
use std::fmt;
use std::path::PathBuf;

/// Result of a merge that passed its preconditions
///
/// Conflicts are not failures: the merge commit is still created and the
/// conflicted paths are reported here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The target is an ancestor of the current branch; nothing changed
    AlreadyUpToDate,
    /// The current branch moved forward to the target without a new commit
    FastForwarded { commit: ObjectId },
    /// A merge commit was created
    Merged {
        commit: ObjectId,
        conflicted: Vec<PathBuf>,
    },
}

impl MergeOutcome {
    pub fn has_conflicts(&self) -> bool {
        matches!(self, MergeOutcome::Merged { conflicted, .. } if !conflicted.is_empty())
    }
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::AlreadyUpToDate => {
                write!(f, "Given branch is an ancestor of the current branch.")
            }
            MergeOutcome::FastForwarded { .. } => write!(f, "Current branch fast-forwarded."),
            MergeOutcome::Merged { .. } if self.has_conflicts() => {
                write!(f, "Encountered a merge conflict.")
            }
            MergeOutcome::Merged { .. } => Ok(()),
        }
    }
}
