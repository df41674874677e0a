use crate::areas::index::Index;
use crate::artifacts::objects::commit::Snapshot;
use crate::errors::RepositoryError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Working files that are neither tracked by `current` nor staged for addition
pub fn untracked_files<'w>(
    current: &Snapshot,
    index: &Index,
    working_files: &'w [PathBuf],
) -> impl Iterator<Item = &'w PathBuf> {
    working_files
        .iter()
        .filter(move |path| !current.contains_key(*path) && !index.is_staged_for_addition(path))
}

/// Untracked working files that a checkout writing `incoming` paths would
/// overwrite or remove
///
/// Besides an exact path match, a file clashes when an incoming file replaces
/// one of its parent directories, or when it stands where an incoming file
/// needs a directory.
pub fn overwritten_untracked_files<'p>(
    current: &Snapshot,
    index: &Index,
    working_files: &[PathBuf],
    incoming: impl IntoIterator<Item = &'p Path>,
) -> Vec<PathBuf> {
    let incoming = incoming.into_iter().collect::<BTreeSet<_>>();
    let incoming_dirs = incoming
        .iter()
        .flat_map(|path| path.ancestors().skip(1))
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect::<BTreeSet<_>>();

    untracked_files(current, index, working_files)
        .filter(|path| {
            path.ancestors().any(|ancestor| incoming.contains(ancestor))
                || incoming_dirs.contains(path.as_path())
        })
        .cloned()
        .collect()
}

/// Fail with `UntrackedFileConflict` when any untracked file would be overwritten
pub fn ensure_no_overwrites<'p>(
    current: &Snapshot,
    index: &Index,
    working_files: &[PathBuf],
    incoming: impl IntoIterator<Item = &'p Path>,
) -> anyhow::Result<()> {
    let paths = overwritten_untracked_files(current, index, working_files, incoming);

    if paths.is_empty() {
        Ok(())
    } else {
        Err(RepositoryError::UntrackedFileConflict { paths }.into())
    }
}
