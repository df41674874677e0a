use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_in_an_existing_repository_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A Twig version-control system already exists in the current directory.",
        ));
}
