use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{ArgAction, Parser};
use tinyscript::{display_error, lexer::lexer::tokenize, parse};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEMO_PROGRAM: &str = "var name = \"World\";\nvar answer = (2 + 3) * 4 - 10 / 5;\nprint(name, answer, true)";

/// Parses a program and prints its syntax tree.
#[derive(Debug, Parser)]
#[command(name = "tinyscript", about = "Parse a tinyscript program and print its syntax tree")]
struct Cli {
    /// Source file to parse; a built-in demo program when omitted
    file: Option<PathBuf>,

    /// Print the token stream instead of the tree
    #[arg(long)]
    tokens: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let (source, file_name) = match &cli.file {
        Some(path) => match read_to_string(path) {
            Ok(source) => (source, path.display().to_string()),
            Err(err) => {
                error!("failed to read {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => (DEMO_PROGRAM.to_string(), String::from("demo")),
    };

    let start = Instant::now();

    if cli.tokens {
        match tokenize(source.clone(), Some(file_name)) {
            Ok(tokens) => {
                info!("Tokenized in {:?}", start.elapsed());
                for token in tokens {
                    println!("{}", token.debug());
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprint!("{}", display_error(&err, &source));
                ExitCode::FAILURE
            }
        }
    } else {
        match parse(source.clone(), Some(file_name)) {
            Ok(tree) => {
                info!("Parsed in {:?}", start.elapsed());
                print!("{}", tree);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprint!("{}", display_error(&err, &source));
                ExitCode::FAILURE
            }
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "tinyscript=info",
        1 => "tinyscript=debug",
        _ => "tinyscript=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(directive_for_verbosity(0), "tinyscript=info");
        assert_eq!(directive_for_verbosity(1), "tinyscript=debug");
        assert_eq!(directive_for_verbosity(7), "tinyscript=trace");
    }

    #[test]
    fn demo_program_parses() {
        let tree = parse(DEMO_PROGRAM.to_string(), None).unwrap();

        assert_eq!(tree.children().len(), 3);
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from(["tinyscript", "--tokens", "-vv", "prog.ts"]);

        assert!(cli.tokens);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("prog.ts")));
    }
}
