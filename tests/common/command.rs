use crate::common::{redirect_temp_dir, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(repository_dir.path(), "1.txt", "one");
    write_file(repository_dir.path(), "a/2.txt", "two");
    write_file(repository_dir.path(), "a/b/3.txt", "three");

    run_twig_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    twig_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.env_remove("TWIG_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn twig_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_twig_command(dir, &["commit", message]);
    cmd.env("TWIG_COMMIT_DATE", "2023-01-01 12:00:00 +0000");
    cmd
}

/// Stdout of a successful twig invocation
pub fn twig_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_twig_command(dir, args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

/// The commit a revision names, through `rev-parse`
pub fn rev_parse(dir: &Path, revision: &str) -> String {
    twig_stdout(dir, &["rev-parse", revision]).trim().to_string()
}
