//! Three-way path classification
//!
//! Every path tracked by the merge base gets a divergence flag set recording
//! whether its blob changed (or disappeared) on the head side, on the target
//! side, or both. Paths the base never tracked are handled separately:
//! introduced only by the target, they are taken from it. Introduced by both
//! sides with different content, they conflict.

use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

pub const CONFLICT_HEAD_MARKER: &str = "<<<<<<< HEAD\n";
pub const CONFLICT_SEPARATOR: &str = "=======\n";
pub const CONFLICT_TRAILER: &str = ">>>>>>>\n";

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Divergence: u8 {
        const NONE = 0b00;
        const CHANGED_ON_HEAD = 0b01;
        const CHANGED_ON_TARGET = 0b10;
        const CHANGED_ON_BOTH = Self::CHANGED_ON_HEAD.bits() | Self::CHANGED_ON_TARGET.bits();
    }
}

impl Divergence {
    pub fn classify(
        base: Option<&ObjectId>,
        head: Option<&ObjectId>,
        target: Option<&ObjectId>,
    ) -> Self {
        let mut divergence = Divergence::NONE;
        if head != base {
            divergence |= Divergence::CHANGED_ON_HEAD;
        }
        if target != base {
            divergence |= Divergence::CHANGED_ON_TARGET;
        }

        divergence
    }
}

impl fmt::Debug for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(Divergence::CHANGED_ON_HEAD) {
            flags.push("HEAD");
        }
        if self.contains(Divergence::CHANGED_ON_TARGET) {
            flags.push("TARGET");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

/// What a merge does to one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeAction {
    /// Check out the target's blob and stage it
    TakeTarget(ObjectId),
    /// Stage the removal and delete the working file
    Remove,
    /// Write a file holding both sides between conflict markers; absent sides are empty
    Conflict {
        head: Option<ObjectId>,
        target: Option<ObjectId>,
    },
}

/// Actions for every path that needs one, in path order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergePlan {
    actions: BTreeMap<PathBuf, MergeAction>,
}

impl MergePlan {
    pub fn compute(base: &Snapshot, head: &Snapshot, target: &Snapshot) -> Self {
        let mut actions = BTreeMap::new();

        for (path, base_oid) in base {
            let head_oid = head.get(path);
            let target_oid = target.get(path);

            let divergence = Divergence::classify(Some(base_oid), head_oid, target_oid);

            let action = if divergence == Divergence::CHANGED_ON_TARGET {
                Some(match target_oid {
                    Some(oid) => MergeAction::TakeTarget(oid.clone()),
                    None => MergeAction::Remove,
                })
            } else if divergence == Divergence::CHANGED_ON_BOTH && head_oid != target_oid {
                Some(MergeAction::Conflict {
                    head: head_oid.cloned(),
                    target: target_oid.cloned(),
                })
            } else {
                None
            };

            if let Some(action) = action {
                actions.insert(path.clone(), action);
            }
        }

        for (path, target_oid) in target {
            if base.contains_key(path) {
                continue;
            }

            match head.get(path) {
                None => {
                    actions.insert(path.clone(), MergeAction::TakeTarget(target_oid.clone()));
                }
                Some(head_oid) if head_oid != target_oid => {
                    actions.insert(
                        path.clone(),
                        MergeAction::Conflict {
                            head: Some(head_oid.clone()),
                            target: Some(target_oid.clone()),
                        },
                    );
                }
                Some(_) => {}
            }
        }

        MergePlan { actions }
    }

    pub fn actions(&self) -> &BTreeMap<PathBuf, MergeAction> {
        &self.actions
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn has_conflicts(&self) -> bool {
        self.actions
            .values()
            .any(|action| matches!(action, MergeAction::Conflict { .. }))
    }
}

/// Content of a conflicted file
pub fn conflict_content(head: &[u8], target: &[u8]) -> Bytes {
    let mut content = Vec::with_capacity(
        CONFLICT_HEAD_MARKER.len()
            + head.len()
            + CONFLICT_SEPARATOR.len()
            + target.len()
            + CONFLICT_TRAILER.len(),
    );
    content.extend_from_slice(CONFLICT_HEAD_MARKER.as_bytes());
    content.extend_from_slice(head);
    content.extend_from_slice(CONFLICT_SEPARATOR.as_bytes());
    content.extend_from_slice(target);
    content.extend_from_slice(CONFLICT_TRAILER.as_bytes());

    Bytes::from(content)
}
