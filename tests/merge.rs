use crate::common::command::{init_repository_dir, rev_parse, run_twig_command, twig_commit};
use crate::common::{read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn merge_overlays_branch_with_single_parent(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch-create", "feature"])
        .assert()
        .success();
    run_twig_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    write_file(dir, "feature.txt", "from feature");
    write_file(dir, "1.txt", "one, reworked on feature");
    run_twig_command(dir, &["add", "feature.txt", "1.txt"])
        .assert()
        .success();
    twig_commit(dir, "Feature work").assert().success();

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();
    assert!(!dir.join("feature.txt").exists());
    write_file(dir, "master.txt", "from master");
    run_twig_command(dir, &["add", "master.txt"])
        .assert()
        .success();
    twig_commit(dir, "Master work").assert().success();
    let master_head = rev_parse(dir, "HEAD");

    run_twig_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout("Files committed\n");

    let merge = rev_parse(dir, "HEAD");
    let record = std::fs::read_to_string(dir.join(".git/commits").join(&merge)).unwrap();

    assert_eq!(rev_parse(dir, "HEAD~1"), master_head);
    assert_eq!(record.matches("Parent: ").count(), 1);
    assert!(record.starts_with("Message: Merge branch feature\n"));
    assert_eq!(read_file(dir, "feature.txt"), "from feature");
    assert_eq!(read_file(dir, "1.txt"), "one, reworked on feature");
    assert_eq!(read_file(dir, "master.txt"), "from master");
}

#[rstest]
fn merge_missing_branch(init_repository_dir: TempDir) {
    run_twig_command(init_repository_dir.path(), &["merge", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch does not exist: ghost"));
}
