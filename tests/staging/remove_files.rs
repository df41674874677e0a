use crate::common::command::{
    committed_repository_dir, head_commit, init_repository_dir, open_repository,
    run_twig_command, twig_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn rm_a_tracked_file_stages_its_removal_and_deletes_it(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_twig_command(dir, &["rm", "a.txt"]).assert().success();

    assert!(!dir.join("a.txt").exists());
    let repository = open_repository(dir);
    assert!(repository.index().is_staged_for_removal(Path::new("a.txt")));
    assert!(!repository.index().is_staged_for_addition(Path::new("a.txt")));

    twig_commit(dir, "remove a").assert().success();
    let (_, head) = head_commit(dir);
    assert!(!head.tracks(Path::new("a.txt")));
}

#[rstest]
fn rm_a_staged_untracked_file_only_unstages_it(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("new.txt"), "fresh".to_string()));
    run_twig_command(dir, &["add", "new.txt"]).assert().success();

    run_twig_command(dir, &["rm", "new.txt"]).assert().success();

    assert!(dir.join("new.txt").exists());
    assert!(open_repository(dir).index().is_empty());
}

#[rstest]
fn rm_a_file_that_is_neither_staged_nor_tracked_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("loose.txt"), "loose".to_string()));

    run_twig_command(dir, &["rm", "loose.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No reason to remove the file."));

    assert!(dir.join("loose.txt").exists());
}

#[rstest]
fn rm_a_tracked_file_already_deleted_from_disk(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();
    std::fs::remove_file(dir.join("a.txt")).unwrap();

    run_twig_command(dir, &["rm", "a.txt"]).assert().success();

    assert!(
        open_repository(dir)
            .index()
            .is_staged_for_removal(Path::new("a.txt"))
    );
}
