use clap::{Parser, Subcommand};
use git_menu::commands::*;
use git_menu::core::{
    error::{GitMenuError, Result},
    print_error, CommandOptions,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-menu")]
#[command(about = "Menu-driven git fetch and pull")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Git executable to run (overrides the settings file)
    #[arg(long = "git", global = true, value_name = "PATH")]
    git_path: Option<String>,

    /// Run as if started in this directory
    #[arg(short = 'C', global = true, value_name = "DIR")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch from the push remote, upstream, elsewhere, all remotes or submodules
    Fetch,
    /// Pull from the push remote, upstream or elsewhere
    Pull,
}

fn exit_on_error(result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_cancellation() => log::debug!("Aborted: {e}"),
        Err(GitMenuError::NotInGitRepo) => {
            print_error("Not in a git repository");
            std::process::exit(1);
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = CommandOptions {
        directory: cli.directory,
        git_path: cli.git_path,
    };

    match cli.command {
        Commands::Fetch => exit_on_error(execute_fetch(&options)),
        Commands::Pull => exit_on_error(execute_pull(&options)),
    }
}
