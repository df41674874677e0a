use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use twig::areas::repository::Repository;
use twig::artifacts::core::OutputTarget;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small local version-control system",
    long_about = "Twig snapshots a working directory into content-addressed commits, \
    keeps branches as named pointers into the commit graph \
    and merges divergent branches with conflict markers.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path, \
        with a root commit on the master branch."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "rm",
        about = "Unstage a file and stop tracking it",
        long_about = "This command unstages a file and, if the current commit tracks it, \
        stages its removal and deletes it from the working directory."
    )]
    Rm {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staging area as a new commit on the current branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the history of the current branch")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1)]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "twig checkout <branch> switches to a branch. \
        twig checkout -- <file> restores a file from the current commit. \
        twig checkout <commit> -- <file> restores a file from the given commit."
    )]
    Checkout {
        #[arg(index = 1, help = "A branch name, or a commit id when a file follows")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<PathBuf>,
    },
    #[command(name = "branch", about = "Create a branch at the current commit")]
    Branch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(name = "rm-branch", about = "Delete a branch")]
    RmBranch {
        #[arg(index = 1)]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch and working tree to a commit"
    )]
    Reset {
        #[arg(index = 1)]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1)]
        branch: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match command {
        Commands::Init { path } => {
            let mut repository = Repository::new(path.unwrap_or(pwd))?;
            repository.init()
        }
        Commands::Add { file } => Repository::new(pwd)?.add(&file),
        Commands::Rm { file } => Repository::new(pwd)?.rm(&file),
        Commands::Commit { message } => {
            Repository::new(pwd)?.commit(&message)?;
            Ok(())
        }
        Commands::Log => {
            let entries = Repository::new(pwd)?.log()?;
            print_entries(entries)
        }
        Commands::GlobalLog => {
            let entries = Repository::new(pwd)?.global_log()?;
            print_entries(entries)
        }
        Commands::Find { message } => {
            let mut out = OutputTarget::choose(false);
            for oid in Repository::new(pwd)?.find(&message)? {
                writeln!(out, "{oid}")?;
            }
            out.finish()
        }
        Commands::Status => {
            let status = Repository::new(pwd)?.status_info()?;

            let mut out = OutputTarget::choose(false);
            writeln!(out, "{status}")?;
            out.finish()
        }
        Commands::Checkout { target, file } => {
            let mut repository = Repository::new(pwd)?;
            match (target, file) {
                (Some(commit), Some(file)) => repository.restore_file_from_commit(&commit, &file),
                (None, Some(file)) => repository.restore_file(&file),
                (Some(branch), None) => repository.checkout_branch(&branch),
                (None, None) => anyhow::bail!("Incorrect operands."),
            }
        }
        Commands::Branch { name } => Repository::new(pwd)?.branch(&name),
        Commands::RmBranch { name } => Repository::new(pwd)?.delete_branch(&name),
        Commands::Reset { commit } => Repository::new(pwd)?.reset(&commit),
        Commands::Merge { branch } => {
            let outcome = Repository::new(pwd)?.merge(&branch)?;

            let message = outcome.to_string();
            if !message.is_empty() {
                println!("{message}");
            }
            Ok(())
        }
        Commands::CatFile { sha } => {
            let content = Repository::new(pwd)?.cat_file(&sha)?;
            print!("{content}");
            Ok(())
        }
        Commands::HashObject { write, file } => {
            let oid = Repository::new(pwd)?.hash_object(&file, write)?;
            println!("{oid}");
            Ok(())
        }
    }
}

fn print_entries(entries: Vec<twig::artifacts::log::log_entry::LogEntry>) -> Result<()> {
    let mut out = OutputTarget::choose(true);
    for entry in entries {
        writeln!(out, "{entry}\n")?;
    }
    out.finish()
}
