use crate::common::command::{repository_dir, run_twig_command, twig_stdout};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn init_creates_storage_directory(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout("Project initialized\n");

    let git = repository_dir.path().join(".git");
    assert!(git.join("commits").is_dir());
    assert!(git.join("branches").is_dir());
    assert!(git.join("index").is_file());
    assert_eq!(
        std::fs::read_to_string(git.join("HEAD")).unwrap(),
        "ref: refs/heads/master"
    );
}

#[rstest]
fn init_with_directory_flag(repository_dir: TempDir) {
    let target = repository_dir.path().join("nested/project");

    run_twig_command(
        repository_dir.path(),
        &["-C", target.to_str().unwrap(), "init"],
    )
    .assert()
    .success();

    assert!(target.join(".git").join("HEAD").is_file());
}

#[rstest]
fn fresh_repository_is_up_to_date(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let stdout = twig_stdout(repository_dir.path(), &["status"]);

    assert_eq!(
        stdout,
        "Current branch is 'master'\nEverything up to date\n"
    );
}

#[rstest]
fn commands_fail_outside_a_repository(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a repository"));
}
