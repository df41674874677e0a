use crate::common::command::{
    branch_tip, commit_file, committed_repository_dir, head_commit, run_twig_command, stdout_of,
};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn branch_points_at_head_without_switching(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let (head_oid, _) = head_commit(dir);

    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();

    assert_eq!(branch_tip(dir, "feature"), head_oid.to_string());
    let status = stdout_of(run_twig_command(dir, &["status"]));
    assert!(status.starts_with("=== Branches ===\nfeature\n*master\n"));
}

#[rstest]
fn branches_move_independently(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    run_twig_command(dir, &["branch", "feature"])
        .assert()
        .success();
    let before = branch_tip(dir, "feature");

    commit_file(dir, "a.txt", "2", "second");

    assert_eq!(branch_tip(dir, "feature"), before);
    assert_eq!(branch_tip(dir, "master"), head_commit(dir).0.to_string());
}

#[rstest]
#[case("feature/login")]
#[case("release-1.0")]
#[case("fix_42")]
fn branch_accepts_valid_names(committed_repository_dir: TempDir, #[case] name: &str) {
    run_twig_command(committed_repository_dir.path(), &["branch", name])
        .assert()
        .success();

    let status = stdout_of(run_twig_command(committed_repository_dir.path(), &["status"]));
    assert!(status.contains(&format!("\n{name}\n")));
}

#[rstest]
#[case(".hidden")]
#[case("double..dot")]
#[case("trailing/")]
#[case("name.lock")]
#[case("star*")]
#[case("at@{brace")]
fn branch_rejects_invalid_names(committed_repository_dir: TempDir, #[case] name: &str) {
    run_twig_command(committed_repository_dir.path(), &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch name"));
}

#[rstest]
fn creating_an_existing_branch_fails(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_twig_command(dir, &["branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name already exists.",
        ));
}
