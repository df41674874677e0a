use crate::common::command::{
    commit_file, committed_repository_dir, head_commit, open_repository, run_twig_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn restore_a_file_from_head(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "scratch".to_string()));

    run_twig_command(dir, &["checkout", "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "1");
}

#[rstest]
fn restore_a_file_unstages_it(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    write_file(FileSpec::new(dir.join("a.txt"), "scratch".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    run_twig_command(dir, &["checkout", "--", "a.txt"])
        .assert()
        .success();

    assert!(
        !open_repository(dir)
            .index()
            .is_staged_for_addition(Path::new("a.txt"))
    );
}

#[rstest]
#[case(40)]
#[case(8)]
#[case(4)]
fn restore_a_file_from_an_older_commit(committed_repository_dir: TempDir, #[case] id_len: usize) {
    let dir = committed_repository_dir.path();
    let (first, _) = head_commit(dir);
    commit_file(dir, "a.txt", "2", "second");
    let (second, _) = head_commit(dir);

    let full_id = first.to_string();
    let id = &full_id[..id_len];
    run_twig_command(dir, &["checkout", id, "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "1");
    assert_eq!(head_commit(dir).0, second);
}

#[rstest]
fn restore_a_file_the_commit_does_not_track_fails(committed_repository_dir: TempDir) {
    run_twig_command(committed_repository_dir.path(), &["checkout", "--", "ghost.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "File does not exist in that commit.",
        ));
}

#[rstest]
fn restore_from_an_unknown_commit_fails(committed_repository_dir: TempDir) {
    run_twig_command(
        committed_repository_dir.path(),
        &["checkout", "0000000", "--", "a.txt"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("No commit with that id exists."));
}

#[rstest]
fn restore_from_the_parent_of_head(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    commit_file(dir, "a.txt", "2", "second");
    let (second, _) = head_commit(dir);

    let parent = format!("{second}^");
    run_twig_command(dir, &["checkout", parent.as_str(), "--", "a.txt"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.join("a.txt")), "1");
}
