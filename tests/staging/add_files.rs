use crate::common::command::{
    committed_repository_dir, init_repository_dir, open_repository, repository_dir,
    run_twig_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file, write_generated_files};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;
use std::path::Path;

#[rstest]
fn add_stages_new_files(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let files = write_generated_files(dir, 3);

    for file in &files {
        let name = file.path.file_name().and_then(|n| n.to_str()).unwrap();
        run_twig_command(dir, &["add", name]).assert().success();
    }

    let repository = open_repository(dir);
    assert_eq!(repository.index().additions().len(), 3);
    for file in &files {
        let relative = file.path.strip_prefix(dir).unwrap();
        assert!(repository.index().is_staged_for_addition(relative));
    }
}

#[rstest]
fn add_a_nested_file(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(
        dir.join("src").join("lib").join("mod.txt"),
        "nested".to_string(),
    ));

    run_twig_command(dir, &["add", "src/lib/mod.txt"])
        .assert()
        .success();

    let repository = open_repository(dir);
    assert!(
        repository
            .index()
            .is_staged_for_addition(Path::new("src/lib/mod.txt"))
    );
}

#[rstest]
fn adding_a_missing_file_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["add", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File does not exist."));

    assert!(open_repository(init_repository_dir.path()).index().is_empty());
}

#[rstest]
fn adding_content_identical_to_head_unstages_the_file(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    write_file(FileSpec::new(dir.join("a.txt"), "changed".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();
    assert!(
        open_repository(dir)
            .index()
            .is_staged_for_addition(Path::new("a.txt"))
    );

    write_file(FileSpec::new(dir.join("a.txt"), "1".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    assert!(open_repository(dir).index().is_empty());
}

#[rstest]
fn adding_a_removed_file_back_cancels_the_removal(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_twig_command(dir, &["rm", "a.txt"]).assert().success();
    assert!(
        open_repository(dir)
            .index()
            .is_staged_for_removal(Path::new("a.txt"))
    );

    write_file(FileSpec::new(dir.join("a.txt"), "1".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    assert!(open_repository(dir).index().is_empty());
}

#[rstest]
fn adding_changed_content_after_rm_stages_it_again(committed_repository_dir: TempDir) {
    let dir = committed_repository_dir.path();

    run_twig_command(dir, &["rm", "a.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "2".to_string()));
    run_twig_command(dir, &["add", "a.txt"]).assert().success();

    let repository = open_repository(dir);
    let index = repository.index();
    assert!(index.is_staged_for_addition(Path::new("a.txt")));
    assert!(!index.is_staged_for_removal(Path::new("a.txt")));
}

#[rstest]
fn add_normalizes_the_given_path(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("dot.txt"), "dot".to_string()));
    write_file(FileSpec::new(dir.join("dir/nested.txt"), "n".to_string()));

    run_twig_command(dir, &["add", "./dot.txt"]).assert().success();
    run_twig_command(dir, &["add", "dir/../dir/./nested.txt"])
        .assert()
        .success();

    let status = stdout_of(run_twig_command(dir, &["status"]));

    assert!(status.contains("=== Staged Files ===\ndir/nested.txt\ndot.txt\n\n"));
    assert!(status.ends_with("=== Untracked Files ===\n\n"));
}

#[rstest]
fn add_rejects_paths_outside_the_working_directory(repository_dir: TempDir) {
    let root = repository_dir.path();
    run_twig_command(root, &["init", "repo"]).assert().success();
    write_file(FileSpec::new(root.join("outside.txt"), "secret".to_string()));
    let dir = root.join("repo");

    run_twig_command(&dir, &["add", "../outside.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File is outside the repository."));

    assert!(open_repository(&dir).index().is_empty());
}
