use crate::common::command::{
    branch_tip, commit_file, committed_repository_dir, head_commit, open_repository,
    run_twig_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_moves_the_branch_and_the_working_tree(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let (first, _) = head_commit(dir);
    commit_file(dir, "a.txt", "2", "second");
    commit_file(dir, "b.txt", "b", "third");

    run_twig_command(dir, &["reset", first.as_ref()])
        .assert()
        .success();

    assert_eq!(branch_tip(dir, "master"), first.to_string());
    assert_eq!(read_file(&dir.join("a.txt")), "1");
    assert!(!dir.join("b.txt").exists());

    let log = stdout_of(run_twig_command(dir, &["log"]));
    assert!(!log.contains("second"));
    assert!(!log.contains("third"));
}

#[rstest]
fn reset_clears_the_staging_area(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let (first, _) = head_commit(dir);
    write_file(FileSpec::new(dir.join("staged.txt"), "s".to_string()));
    run_twig_command(dir, &["add", "staged.txt"])
        .assert()
        .success();

    let short_id = first.to_short_oid();
    run_twig_command(dir, &["reset", short_id.as_str()])
        .assert()
        .success();

    assert!(open_repository(dir).index().is_empty());
    // untracked by both commits, so left on disk
    assert!(dir.join("staged.txt").exists());
}

#[rstest]
fn reset_only_moves_the_current_branch(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let (first, _) = head_commit(dir);
    commit_file(dir, "a.txt", "2", "second");
    run_twig_command(dir, &["branch", "keep"]).assert().success();
    let keep = branch_tip(dir, "keep");

    run_twig_command(dir, &["reset", first.as_ref()])
        .assert()
        .success();

    assert_eq!(branch_tip(dir, "keep"), keep);
    let head = std::fs::read_to_string(dir.join(".twig/HEAD")).unwrap();
    assert_eq!(head.trim(), "ref: refs/heads/master");
}

#[rstest]
fn reset_refuses_to_overwrite_untracked_files(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    commit_file(dir, "b.txt", "tracked", "add b");
    let (with_b, _) = head_commit(dir);
    run_twig_command(dir, &["rm", "b.txt"]).assert().success();
    crate::common::command::twig_commit(dir, "drop b")
        .assert()
        .success();
    let (without_b, _) = head_commit(dir);

    write_file(FileSpec::new(dir.join("b.txt"), "precious".to_string()));

    run_twig_command(dir, &["reset", with_b.as_ref()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("There is an untracked file in the way"));

    assert_eq!(read_file(&dir.join("b.txt")), "precious");
    assert_eq!(head_commit(dir).0, without_b);
}

#[rstest]
#[case("abcdef0123")]
#[case("xyz")]
fn reset_to_an_unknown_commit_fails(committed_repository_dir: TempDir, #[case] id: &str) {
    run_twig_command(committed_repository_dir.path(), &["reset", id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commit with that id exists."));
}

#[rstest]
fn reset_with_ancestor_notation(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    let (first, _) = head_commit(dir);
    commit_file(dir, "a.txt", "2", "second");
    commit_file(dir, "a.txt", "3", "third");
    let (third, _) = head_commit(dir);

    let revision = format!("{}~2", third.to_short_oid());
    run_twig_command(dir, &["reset", revision.as_str()])
        .assert()
        .success();

    assert_eq!(head_commit(dir).0, first);
    assert_eq!(read_file(&dir.join("a.txt")), "1");
}
