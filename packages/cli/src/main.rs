mod commands;
mod config;
mod logging;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    blocks, edit, init, new_page, show, BlocksArgs, EditArgs, InitArgs, NewArgs, ShowArgs,
};

/// Blockpage CLI - build landing pages from content blocks
#[derive(Parser, Debug)]
#[command(name = "blockpage")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Blockpage project
    Init(InitArgs),

    /// Create a page from catalog blocks
    New(NewArgs),

    /// Print the blocks of a page
    Show(ShowArgs),

    /// Apply a script of editor intents to a page
    Edit(EditArgs),

    /// List the block templates in the catalog
    Blocks(BlocksArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::New(args) => new_page(args, &cwd),
                Command::Show(args) => show(args, &cwd),
                Command::Edit(args) => edit(args, &cwd),
                Command::Blocks(args) => blocks(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
