use anyhow::Result;
use clap::{Parser, Subcommand};
use mygit::areas::repository::Repository;
use mygit::artifacts::log::LogOrder;
use mygit::errors::RepositoryError;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "mygit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal version-control engine",
    long_about = "A minimal version-control engine keeping a staging area, \
    commits identified by random ids and flat branch pointers in a .mygit directory.",
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
        long = "work-tree",
        global = true,
        env = "MYGIT_WORK_TREE",
        help = "Run as if started in this directory"
    )]
    work_tree: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .mygit directory with empty commit, \
        branch and staging areas."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command copies the current content of a file into the staging area, \
        replacing any snapshot staged under the same file name."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        path: PathBuf,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staged files",
        long_about = "This command moves every staged file into a new commit \
        and advances HEAD to it."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the commit history")]
    Log {
        #[arg(long, help = "Follow parents from HEAD instead of listing every commit")]
        ancestry: bool,
    },
    #[command(
        name = "branch",
        about = "Create a branch at HEAD, or list branches",
        long_about = "With a name, this command registers a new branch pointing at the current \
        HEAD commit. Without a name, it lists every branch."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "merge",
        about = "Stage the files of a branch's commit",
        long_about = "This command copies every file of the branch's commit into the staging area, \
        overwriting staged files of the same name. Commit afterwards to finalize the merge."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        name: String,
    },
    #[command(name = "status", about = "Show staged and modified files")]
    Status,
    #[command(name = "diff", about = "Compare staged files with the working directory")]
    Diff,
}

fn run(cli: Cli) -> Result<()> {
    let work_tree = match cli.work_tree {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repository = Repository::new(&work_tree, Box::new(std::io::stdout()))?;

    match cli.command {
        Commands::Init => repository.init()?,
        Commands::Add { path } => {
            repository.stage(&path)?;
        }
        Commands::Commit { message } => {
            repository.commit(&message)?;
        }
        Commands::Log { ancestry } => {
            let order = if ancestry {
                LogOrder::Ancestry
            } else {
                LogOrder::Listing
            };
            repository.log(order)?
        }
        Commands::Branch { name: Some(name) } => repository.branch(&name)?,
        Commands::Branch { name: None } => repository.list_branches()?,
        Commands::Merge { name } => {
            repository.merge(&name)?;
        }
        Commands::Status => repository.status()?,
        Commands::Diff => repository.diff()?,
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::AlreadyInitialized(_)) => {
                println!("Repository already initialized.");
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
