use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use getarg::{ResolveRequest, TokenSource};

/// Resolve typed option values from command-line tokens.
#[derive(Debug, Parser)]
#[command(name = "getarg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve bool, string and int options and print them as JSON
    Resolve {
        /// Boolean option to resolve, honouring -noNAME
        #[arg(long = "bool", value_name = "NAME[=DEFAULT]", allow_hyphen_values = true)]
        bools: Vec<String>,
        /// String option to resolve
        #[arg(long = "string", value_name = "NAME[=DEFAULT]", allow_hyphen_values = true)]
        strings: Vec<String>,
        /// Integer option to resolve
        #[arg(long = "int", value_name = "NAME[=DEFAULT]", allow_hyphen_values = true)]
        ints: Vec<String>,
        /// Path to a KDL file with more queries
        #[arg(long, value_name = "FILE")]
        queries: Option<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print every recorded option and positional as JSON
    Index {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Command line to split with shell quoting rules
    #[arg(long, allow_hyphen_values = true, conflicts_with = "tokens")]
    line: Option<String>,
    /// Raw tokens, given after `--`
    #[arg(last = true)]
    tokens: Vec<String>,
}

impl From<InputArgs> for TokenSource {
    fn from(input: InputArgs) -> Self {
        match input.line {
            Some(line) => TokenSource::Line(line),
            None => TokenSource::Tokens(input.tokens),
        }
    }
}

fn main() -> ExitCode {
    getarg::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            bools,
            strings,
            ints,
            queries,
            input,
        } => getarg::run_resolve(&ResolveRequest {
            bools,
            strings,
            ints,
            queries_file: queries,
            source: input.into(),
        }),
        Commands::Index { input } => getarg::run_index(&input.into()),
    }
}
