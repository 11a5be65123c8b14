use crate::common::command::{init_repository_dir, rev_parse, run_twig_command, twig_commit};
use crate::common::{read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn reset_to_parent_discards_second_commit_from_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = rev_parse(dir, "HEAD");
    write_file(dir, "1.txt", "uno");
    write_file(dir, "4.txt", "four");
    run_twig_command(dir, &["add", "1.txt", "4.txt"])
        .assert()
        .success();
    twig_commit(dir, "Second commit").assert().success();
    let second = rev_parse(dir, "HEAD");

    run_twig_command(dir, &["reset", "HEAD~1"])
        .assert()
        .success()
        .stdout("Reset successful\n");

    assert_eq!(rev_parse(dir, "HEAD"), first);
    assert_eq!(rev_parse(dir, "master"), first);
    assert_eq!(read_file(dir, "1.txt"), "one");
    assert!(!dir.join("4.txt").exists());
    // the abandoned commit stays in the store
    assert_eq!(rev_parse(dir, &second), second);
}

#[rstest]
fn reset_past_root_fails(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["reset", "HEAD~3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HEAD~3 requested"));
}
