use crate::common::command::{committed_repository_dir, run_twig_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rm_branch_deletes_only_the_pointer(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();

    run_twig_command(dir, &["rm-branch", "feature"])
        .assert()
        .success();

    assert!(!dir.join(".twig/refs/heads/feature").exists());
    let status = stdout_of(run_twig_command(dir, &["status"]));
    assert!(!status.contains("feature"));
    assert!(dir.join("a.txt").exists());
}

#[rstest]
fn rm_branch_prunes_empty_namespaces(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    run_twig_command(dir, &["branch", "team/feature"])
        .assert()
        .success();

    run_twig_command(dir, &["rm-branch", "team/feature"])
        .assert()
        .success();

    assert!(!dir.join(".twig/refs/heads/team").exists());
    assert!(dir.join(".twig/refs/heads").is_dir());
}

#[rstest]
fn rm_branch_of_the_current_branch_fails(committed_repository_dir: TempDir) {
    run_twig_command(committed_repository_dir.path(), &["rm-branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the current branch."));
}

#[rstest]
fn rm_branch_of_a_missing_branch_fails(committed_repository_dir: TempDir) {
    run_twig_command(committed_repository_dir.path(), &["rm-branch", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}
