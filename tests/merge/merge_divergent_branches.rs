use crate::common::command::{
    blob_id, commit_file, head_commit, init_repository_dir, open_repository, run_twig_command,
};
use crate::common::file::read_file;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

/// History:
///       first (a.txt = 1)
///      /     \
///   second   third
///  a.txt = 2  b.txt = 3
///   master   feature
#[rstest]
fn merge_combines_independent_changes(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    commit_file(dir, "a.txt", "1", "first");
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "2", "second");
    let (second, _) = head_commit(dir);
    let a2 = blob_id(dir, "a.txt");

    run_twig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "b.txt", "3", "third");
    let (third, _) = head_commit(dir);
    let b3 = blob_id(dir, "b.txt");

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_twig_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("");

    let (_, merged) = head_commit(dir);
    assert_eq!(merged.message(), "Merged feature into master.");
    assert_eq!(merged.parent(), Some(&second));
    assert_eq!(merged.merge_parent(), Some(&third));
    assert_eq!(merged.snapshot().len(), 2);
    assert_eq!(
        merged.blob_id(Path::new("a.txt")).map(ToString::to_string),
        Some(a2)
    );
    assert_eq!(
        merged.blob_id(Path::new("b.txt")).map(ToString::to_string),
        Some(b3)
    );
    assert_eq!(read_file(&dir.join("b.txt")), "3");
    assert!(open_repository(dir).index().is_empty());
}

#[rstest]
fn merge_applies_removals_made_on_the_target(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    commit_file(dir, "a.txt", "1", "first");
    commit_file(dir, "gone.txt", "g", "add gone");
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "2", "master edit");

    run_twig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    run_twig_command(dir, &["rm", "gone.txt"]).assert().success();
    crate::common::command::twig_commit(dir, "drop gone")
        .assert()
        .success();

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_twig_command(dir, &["merge", "feature"])
        .assert()
        .success();

    let (_, merged) = head_commit(dir);
    assert!(!merged.tracks(Path::new("gone.txt")));
    assert!(!dir.join("gone.txt").exists());
    assert_eq!(read_file(&dir.join("a.txt")), "2");
}

#[rstest]
fn merge_keeps_changes_made_only_on_head(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    commit_file(dir, "a.txt", "1", "first");
    commit_file(dir, "b.txt", "1", "add b");
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "head edit", "edit a on master");

    run_twig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "b.txt", "target edit", "edit b on feature");

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_twig_command(dir, &["merge", "feature"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "head edit");
    assert_eq!(read_file(&dir.join("b.txt")), "target edit");
}

#[rstest]
fn merge_with_identical_changes_on_both_sides_has_nothing_to_commit(
    init_repository_dir: TempDir,
) {
    let dir = init_repository_dir.path();

    commit_file(dir, "a.txt", "1", "first");
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "same", "master edit");
    let (master_before, _) = head_commit(dir);

    run_twig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "a.txt", "same", "feature edit");

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    run_twig_command(dir, &["merge", "feature"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("No changes added to the commit."));

    assert_eq!(head_commit(dir).0, master_before);
}
