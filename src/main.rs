//! `greet` — print a salutation for a person.
//!
//! # Usage
//!
//! ```text
//! greet [--hello | --goodbye | --greeting <kind>] [--config <path>] [--] [name]
//! ```
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Parse args
//!   3. Load config, apply env overrides
//!   4. Init logger at the configured level
//!   5. Greet
//!
//! With no name nothing is printed and the exit status is 0.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use greet::{config, error::AppError, logger, Greeting, Person};
use tracing::{debug, info};

// ── CLI arg parsing ────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    greeting: Option<Greeting>,
    config: Option<PathBuf>,
    name: Option<String>,
    help: bool,
}

/// Convert raw arguments to `String`s; any non-UTF-8 argument is a usage error.
fn utf8_args<I>(args: I) -> Result<Vec<String>, AppError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|_| AppError::Usage("argument is not valid UTF-8".into()))
        })
        .collect()
}

fn parse_args<I>(args: I) -> Result<Args, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = Args::default();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--hello" => parsed.greeting = Some(Greeting::Hello),
            "--goodbye" => parsed.greeting = Some(Greeting::Goodbye),
            "--greeting" | "-g" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::Usage(format!("{arg} needs a value")))?;
                parsed.greeting = Some(value.parse()?);
            }
            "--config" | "-c" => {
                let value = iter
                    .next()
                    .ok_or_else(|| AppError::Usage(format!("{arg} needs a value")))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => parsed.help = true,
            "--" => {
                if let Some(name) = iter.next() {
                    set_name(&mut parsed, name)?;
                }
                if let Some(extra) = iter.next() {
                    return Err(AppError::Usage(format!("unexpected argument '{extra}'")));
                }
                break;
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(AppError::Usage(format!("unknown flag '{flag}'")));
            }
            _ => set_name(&mut parsed, arg)?,
        }
    }

    Ok(parsed)
}

fn set_name(parsed: &mut Args, name: String) -> Result<(), AppError> {
    if parsed.name.is_some() {
        return Err(AppError::Usage(format!("unexpected argument '{name}'")));
    }
    parsed.name = Some(name);
    Ok(())
}

fn print_help() {
    eprintln!(
        "usage: greet [--hello | --goodbye | --greeting <kind>] [--config <path>] [--] [name]"
    );
    eprintln!();
    eprintln!("flags:");
    eprintln!("  --hello                 say hello (default)");
    eprintln!("  --goodbye               say goodbye");
    eprintln!("  --greeting, -g <kind>   'hello' or 'goodbye'");
    eprintln!(
        "  --config,   -c <path>   config file (default: {})",
        config::DEFAULT_CONFIG_PATH
    );
    eprintln!("  --help,     -h          print this help");
    eprintln!();
    eprintln!("with no name, nothing is printed.");
}

// ── entry point ────────────────────────────────────────────────────────────

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        let code = match e {
            AppError::Usage(_) | AppError::Greeting(_) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

fn run() -> Result<(), AppError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let args = parse_args(utf8_args(std::env::args_os().skip(1))?)?;
    if args.help {
        print_help();
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => config::load_from(
            path,
            std::env::var("GREET_GREETING").ok().as_deref(),
            std::env::var("GREET_LOG_LEVEL").ok().as_deref(),
        )?,
        None => config::load()?,
    };

    logger::parse_level(&config.log_level)?;
    logger::init(&config.log_level)?;

    info!(greeting = %config.greeting, log_level = %config.log_level, "config loaded");

    let greeting = args.greeting.unwrap_or(config.greeting);
    let person = args.name.map(Person::new);
    debug!(%greeting, has_person = person.is_some(), "greeting");

    greet::greet(greeting, person.as_ref());
    Ok(())
}
