//! Markr CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # List everything, or filter (default command)
//! markr
//! markr -t news,weather -s bbc
//! markr ls -u github --open
//!
//! # Add a bookmark
//! markr add https://www.rust-lang.org -n Rust -t lang,rust
//! markr add --copy --autoname --edit
//!
//! # Change or remove one bookmark by number
//! markr edit 3
//! markr rm 3
//!
//! # Review the stalest bookmark
//! markr prune
//!
//! # Look at the history of the bookmark file
//! markr git log --oneline
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/markr/config.toml` on Linux) and `MARKR_*` environment
//! variables. Set `RUST_LOG=debug` for diagnostics.

use log::debug;
use markr::cli::{Cli, Commands};
use markr::commands::{self, Session};
use markr::config::MarkrConfig;
use markr::{Result, output};
use std::process::ExitCode;

fn run(cli: Cli) -> Result<ExitCode> {
    let config = MarkrConfig::load()?.with_overrides(cli.file.clone(), cli.quiet);
    debug!("Using bookmark file {}", config.bookmark_file.display());

    let session = || Session::from_config(&config);
    match cli.get_command() {
        Commands::Config { command } => commands::config::execute(&config, &command)?,
        Commands::List(args) => commands::list::execute(&session(), &args)?,
        Commands::Add(args) => {
            commands::add::execute(&session(), &args)?;
        }
        Commands::AddNewsboat {
            url,
            title,
            description,
            feed_title,
            edit,
        } => {
            commands::add_newsboat::execute(
                &session(),
                &url,
                &title,
                &description,
                feed_title.as_deref(),
                edit,
            )?;
        }
        Commands::Edit { number } => commands::edit::execute(&session(), number)?,
        Commands::Rm { number, force } => {
            commands::rm::execute(&session(), number, force)?;
        }
        Commands::Copy { number } => commands::copy::execute(&session(), number)?,
        Commands::Open { number } => commands::open::execute(&session(), number)?,
        Commands::Prune => {
            commands::prune::execute(&session())?;
        }
        Commands::Tags => commands::tags::execute(&session())?,
        Commands::Git { args } => {
            let code = commands::git::execute(&session(), &args)?;
            return Ok(u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse_args()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", output::error(&e.to_string()));
            ExitCode::FAILURE
        }
    }
}
