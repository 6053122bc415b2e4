mod cli;
mod clone;
mod config;
mod display;
mod error;
mod prompt;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::io::IsTerminal;

use crate::clone::{CloneOptions, SystemRunner};
use crate::error::{GcloneError, Result};
use crate::prompt::{LinePrompt, TerminalPrompt};

#[derive(Parser)]
#[command(name = "gclone", version)]
#[command(about = "Clone GitHub repositories by short name", long_about = None)]
struct Cli {
    /// Open the cloned repository in VSCode
    #[arg(short = 'c')]
    open_in_editor: bool,

    /// Clone into the configured temporary directory
    #[arg(long = "tmp")]
    use_tmp_dir: bool,

    /// Configure gclone settings
    #[arg(long = "config")]
    configure: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Repository as `name` or `owner/name`; extra arguments are ignored
    #[arg(value_name = "REPOSITORY")]
    repositories: Vec<String>,
}

fn main() {
    let cli = Cli::parse_from(cli::args::normalize(std::env::args_os()));

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    if let Err(e) = run(cli) {
        match e {
            GcloneError::MissingRepository => display::print_markdown(cli::USAGE),
            _ => display::print_error(&e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = config::locate()?;

    if cli.configure {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            cli::configure::run(&config_path, &mut TerminalPrompt::new())?;
        } else {
            let mut prompt = LinePrompt::new(stdin.lock(), std::io::stdout());
            cli::configure::run(&config_path, &mut prompt)?;
        }
        return Ok(());
    }

    let options = CloneOptions {
        open_in_editor: cli.open_in_editor,
        use_tmp_dir: cli.use_tmp_dir,
    };
    let cwd = std::env::current_dir()?;

    cli::clone::run(
        cli.repositories.first().map(String::as_str),
        options,
        &config_path,
        &cwd,
        &SystemRunner,
    )
}
