use crate::common::command::{
    commit_file, head_commit, init_repository_dir, open_repository, run_twig_command, stdout_of,
};
use crate::common::{READABLE_COMMIT_DATE, READABLE_ROOT_DATE};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_walks_first_parents_newest_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let (root_oid, _) = head_commit(dir);

    commit_file(dir, "a.txt", "1", "first");
    let (first_oid, _) = head_commit(dir);
    commit_file(dir, "a.txt", "2", "second");
    let (second_oid, _) = head_commit(dir);

    let log = stdout_of(run_twig_command(dir, &["log"]));

    assert_eq!(
        log,
        format!(
            "===\ncommit {second_oid}\nDate: {READABLE_COMMIT_DATE}\nsecond\n\n\
             ===\ncommit {first_oid}\nDate: {READABLE_COMMIT_DATE}\nfirst\n\n\
             ===\ncommit {root_oid}\nDate: {READABLE_ROOT_DATE}\ninitial commit\n\n"
        )
    );
}

#[rstest]
fn log_ignores_commits_on_other_branches(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "a.txt", "1", "on master");

    run_twig_command(dir, &["branch", "side"]).assert().success();
    run_twig_command(dir, &["checkout", "side"]).assert().success();
    commit_file(dir, "b.txt", "2", "on side");
    run_twig_command(dir, &["checkout", "master"]).assert().success();

    let log = stdout_of(run_twig_command(dir, &["log"]));

    assert!(log.contains("on master"));
    assert!(!log.contains("on side"));
}

#[rstest]
fn log_shows_both_parents_of_a_merge_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    commit_file(dir, "a.txt", "1", "base");
    run_twig_command(dir, &["branch", "side"]).assert().success();
    commit_file(dir, "a.txt", "2", "master work");
    let (master_oid, _) = head_commit(dir);

    run_twig_command(dir, &["checkout", "side"]).assert().success();
    commit_file(dir, "b.txt", "3", "side work");
    let (side_oid, _) = head_commit(dir);

    run_twig_command(dir, &["checkout", "master"]).assert().success();
    run_twig_command(dir, &["merge", "side"]).assert().success();

    let entries = open_repository(dir).log().unwrap();
    let merge = &entries[0];
    assert_eq!(merge.commit.message(), "Merged side into master.");

    let log = stdout_of(run_twig_command(dir, &["log"]));
    assert!(log.starts_with(&format!(
        "===\ncommit {}\nMerge: {} {}\nDate: {READABLE_COMMIT_DATE}\nMerged side into master.\n\n",
        merge.oid,
        master_oid.to_short_oid(),
        side_oid.to_short_oid(),
    )));
    // side work is only reachable through the merge parent
    assert!(!log.contains("side work"));
}
