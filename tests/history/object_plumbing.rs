use crate::common::command::{
    blob_id, commit_file, head_commit, init_repository_dir, repository_dir, run_twig_command,
    stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn hash_object_without_a_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello".to_string()));

    // sha1 of "blob 5\0hello"
    run_twig_command(dir, &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout("b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0\n");
}

#[rstest]
fn hash_object_writes_the_blob(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello".to_string()));

    run_twig_command(dir, &["hash-object", "-w", "hello.txt"])
        .assert()
        .success();

    assert!(
        dir.join(".twig/objects/b6/fc4c620b67d95f953a5c1c1230aaab5db5a1b0")
            .is_file()
    );
    run_twig_command(dir, &["cat-file", "-p", "b6fc4c6"])
        .assert()
        .success()
        .stdout("hello");
}

#[rstest]
fn cat_file_prints_a_commit_body(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let (root, _) = head_commit(dir);
    commit_file(dir, "a.txt", "1", "first");
    let (head, _) = head_commit(dir);
    let blob = blob_id(dir, "a.txt");

    let body = stdout_of(run_twig_command(dir, &["cat-file", "-p", head.as_ref()]));

    assert_eq!(
        body,
        format!("parent {root}\ntimestamp 1672574400 +0000\nfile {blob} a.txt\n\nfirst")
    );
}

#[rstest]
fn cat_file_with_an_unknown_id_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["cat-file", "-p", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commit with that id exists."));
}
