use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::{Color, Colorize};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use twig::{Head, Repository, StatusInfo};

const LOG_ENV: &str = "TWIG_LOG";

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    about = "A small snapshot-based version control system",
    long_about = "twig records full snapshots of a working directory as linked commits, \
    keeps named branches pointing into that history and stages pending changes in an index.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        help = "Run as if started in this directory"
    )]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(name = "init", about = "Initialize a new repository")]
    Init,
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stages the current content of the given files. \
        Directories are expanded to every file below them."
    )]
    Add {
        #[arg(required = true, help = "The files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "rm",
        about = "Unstage files and delete them from the working directory"
    )]
    Rm {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status,
    #[command(name = "commit", about = "Record the staged changes")]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "reset",
        about = "Move HEAD to a revision and restore its snapshot"
    )]
    Reset {
        #[arg(index = 1)]
        revision: String,
    },
    #[command(name = "log", about = "Show commit history")]
    Log {
        #[arg(index = 1, help = "Start from this revision instead of HEAD")]
        revision: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a revision, or restore files from HEAD",
        long_about = "With a revision, replaces the tracked files with its snapshot. \
        A commit id or HEAD~N detaches HEAD, a branch name attaches it. \
        With `-- <files>`, restores only those files from the HEAD commit."
    )]
    Checkout {
        revision: Option<String>,
        #[arg(last = true)]
        files: Vec<PathBuf>,
    },
    #[command(name = "branch-create", about = "Create a branch at HEAD")]
    BranchCreate {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "branch-remove", about = "Delete a branch")]
    BranchRemove {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "show-branches", about = "List branches")]
    ShowBranches,
    #[command(name = "merge", about = "Overlay a branch onto HEAD and commit")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(name = "rev-parse", about = "Print the commit id a revision names")]
    RevParse {
        #[arg(index = 1)]
        revision: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let pwd = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let mut repository = Repository::new(&pwd)?;

    match cli.command {
        Commands::Init => {
            repository.init()?;
            println!("Project initialized");
        }
        Commands::Add { paths } => {
            repository.add(&paths)?;
            println!("Add completed successful");
        }
        Commands::Rm { paths } => {
            repository.rm(&paths)?;
            println!("Rm completed successful");
        }
        Commands::Status => print_status(&repository.status()?),
        Commands::Commit { message } => {
            repository.commit(&message)?;
            println!("Files committed");
        }
        Commands::Reset { revision } => {
            repository.reset(&revision)?;
            println!("Reset successful");
        }
        Commands::Log { revision } => {
            for summary in repository.log(revision.as_deref())? {
                let summary = summary?;
                println!("{} {}", "Commit".yellow(), summary.oid.to_string().yellow());
                println!("Date: {}", summary.date);
                println!();
                println!("{}", summary.message);
                println!();
            }
        }
        Commands::Checkout { revision, files } => {
            match (revision, files.is_empty()) {
                (Some(revision), true) => {
                    repository.checkout(&revision)?;
                }
                (None, false) => repository.checkout_files(&files)?,
                (Some(_), false) => bail!("checkout takes either a revision or `-- <files>`"),
                (None, true) => bail!("checkout needs a revision or `-- <files>`"),
            }
            println!("Checkout completed successful");
        }
        Commands::BranchCreate { name } => {
            repository.branch_create(&name)?;
            println!("Branch {name} created successfully");
        }
        Commands::BranchRemove { name } => {
            repository.branch_remove(&name)?;
            println!("Branch {name} removed successfully");
        }
        Commands::ShowBranches => {
            let current = repository.head().branch().cloned();
            println!("Available branches:");
            for branch in repository.show_branches()? {
                if Some(&branch) == current.as_ref() {
                    println!("* {}", branch.to_string().green());
                } else {
                    println!("  {branch}");
                }
            }
        }
        Commands::Merge { branch } => {
            repository.merge(&branch)?;
            println!("Files committed");
        }
        Commands::RevParse { revision } => {
            println!("{}", repository.rev_parse(&revision)?);
        }
    }

    Ok(())
}

fn print_status(status: &StatusInfo) {
    match &status.head {
        Head::Attached(branch) => println!("Current branch is '{branch}'"),
        Head::Detached(oid) => println!(
            "{} {}",
            "HEAD detached at".red(),
            oid.to_short_oid().red()
        ),
    }

    if status.is_clean() {
        println!("Everything up to date");
        return;
    }

    let sections = [
        ("Ready to commit", &status.ready_to_commit, Some(Color::Green)),
        ("Modified files", &status.modified, Some(Color::Red)),
        ("Removed files", &status.removed, Some(Color::Red)),
        ("Untracked files", &status.untracked, None),
    ];
    for (title, files, color) in sections {
        if files.is_empty() {
            continue;
        }

        println!();
        println!("{title}:");
        for file in files {
            let file = file.display().to_string();
            match color {
                Some(color) => println!("\t{}", file.color(color)),
                None => println!("\t{file}"),
            }
        }
    }
}
