use crate::common::command::{
    init_repository_dir, repository_dir, rev_parse, run_twig_command, twig_commit, twig_stdout,
};
use crate::common::write_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn commit_records_snapshot_and_moves_branch(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(repository_dir.path(), "a.txt", "1");
    run_twig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    twig_commit(repository_dir.path(), "m1")
        .assert()
        .success()
        .stdout("Files committed\n");

    let head = rev_parse(repository_dir.path(), "HEAD");
    let branch = std::fs::read_to_string(repository_dir.path().join(".git/branches/master")).unwrap();
    let record =
        std::fs::read_to_string(repository_dir.path().join(".git/commits").join(&head)).unwrap();

    assert_eq!(branch, head);
    assert_eq!(
        record,
        "Message: m1\nDate: Sun Jan 1 12\\c00\\c00 2023 +0000\n\na.txt: 1\n"
    );
    assert_eq!(
        twig_stdout(repository_dir.path(), &["status"]),
        "Current branch is 'master'\nEverything up to date\n"
    );
}

#[rstest]
fn commit_with_empty_index_fails(init_repository_dir: TempDir) {
    twig_commit(init_repository_dir.path(), "nothing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to commit"));
}

#[rstest]
fn second_commit_links_its_parent(init_repository_dir: TempDir) {
    let first = rev_parse(init_repository_dir.path(), "HEAD");
    write_file(init_repository_dir.path(), "1.txt", "uno");
    run_twig_command(init_repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    twig_commit(init_repository_dir.path(), "Second commit")
        .assert()
        .success();

    let second = rev_parse(init_repository_dir.path(), "HEAD");
    let record = std::fs::read_to_string(
        init_repository_dir.path().join(".git/commits").join(&second),
    )
    .unwrap();

    assert_eq!(rev_parse(init_repository_dir.path(), "HEAD~1"), first);
    assert!(record.contains(&format!("Parent: {first}\n")));
    assert!(record.contains("a/b/3.txt: three\n"));
    assert!(record.contains("1.txt: uno\n"));
}
