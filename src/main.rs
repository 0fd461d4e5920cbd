use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use gee::{
    check_source_with, display_error,
    errors::errors::Error,
    lexer::tokens::Token,
    logger::{self, LogLevel},
    type_checker::type_map::TypeMap,
};
use tracing::error;

/// Type checker for the Gee language
#[derive(Parser, Debug)]
#[command(name = "gee")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source file to check
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Trace grammar rules (-d), or lexing as well (-dd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Print the parsed program before checking it
    #[arg(long)]
    ast: bool,

    /// Print the token stream before parsing
    #[arg(long)]
    tokens: bool,
}

fn check(args: &Args, source: &str) -> Result<TypeMap, Error> {
    let file = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.to_string_lossy().into_owned());

    check_source_with(
        source,
        Some(file),
        |tokens| {
            if args.tokens {
                tokens.iter().for_each(Token::debug);
            }
        },
        |ast| {
            if args.ast {
                print!("{}", ast);
            }
        },
    )
}

fn run(args: &Args) -> Result<ExitCode> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    match check(args, &source) {
        Ok(type_map) => {
            print!("{}", type_map);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            display_error(&err, &source, &args.file);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    logger::init_with_level(match args.debug {
        0 => LogLevel::Warn,
        1 => LogLevel::Debug,
        _ => LogLevel::Trace,
    });

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
