//! Merge base discovery
//!
//! ## Algorithm
//!
//! 1. Collect `ancestors(head)`: head itself plus everything reachable through
//!    parent and second-parent edges. The walk is iterative and keeps a visited
//!    set, so shared history in merge-heavy graphs is expanded once.
//! 2. Breadth-first search backward from `target`, enqueueing the parent before
//!    the second parent of every commit. The first dequeued commit that is in
//!    `ancestors(head)` is the merge base.
//!
//! BFS visits `target`'s history in non-decreasing distance, so the result is a
//! nearest common ancestor. When several are equally near (criss-cross merges)
//! the enqueue order decides: the primary-parent side wins. Conflict output
//! depends on the chosen base, so this order is part of the contract.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Finds merge bases over any commit graph
///
/// The loader maps a commit id to its graph links; the repository backs it with
/// the object store, tests back it with an in-memory graph.
#[derive(Debug, Clone)]
pub struct MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// `start` plus every commit reachable from it
    pub fn ancestors(&self, start: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut visited = HashSet::new();
        let mut pending = vec![start.clone()];

        while let Some(oid) = pending.pop() {
            if !visited.insert(oid.clone()) {
                continue;
            }

            let commit = (self.commit_loader)(&oid)?;
            pending.extend(
                commit
                    .parents
                    .into_iter()
                    .filter(|parent| !visited.contains(parent)),
            );
        }

        debug_log!("ancestors({}) = {} commits", start.to_short_oid(), visited.len());

        Ok(visited)
    }

    /// Nearest common ancestor of `head` and `target`, `None` for unrelated histories
    pub fn find_merge_base(
        &self,
        head: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let head_ancestors = self.ancestors(head)?;

        let mut queued = HashSet::from([target.clone()]);
        let mut queue = VecDeque::from([target.clone()]);

        while let Some(oid) = queue.pop_front() {
            debug_log!("visiting {}", oid.to_short_oid());

            if head_ancestors.contains(&oid) {
                debug_log!(
                    "merge base of {} and {} is {}",
                    head.to_short_oid(),
                    target.to_short_oid(),
                    oid.to_short_oid()
                );
                return Ok(Some(oid));
            }

            for parent in (self.commit_loader)(&oid)?.parents {
                if queued.insert(parent.clone()) {
                    queue.push_back(parent);
                }
            }
        }

        debug_log!(
            "no common ancestor for {} and {}",
            head.to_short_oid(),
            target.to_short_oid()
        );

        Ok(None)
    }
}
