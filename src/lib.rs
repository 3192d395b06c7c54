//! Resolve typed option values from raw command-line tokens.
//!
//! ```
//! use getarg::ArgIndex;
//!
//! let args = ArgIndex::build(["-jff=11", "--nobar", "input.txt"]);
//! assert_eq!(args.get_int("-jff", 0), 11);
//! assert!(!args.get_bool("-bar", true));
//! assert_eq!(args.get_string("-missing", "fallback"), "fallback");
//! ```

pub mod command;
pub mod domain;
pub mod index;
pub mod protocol;
pub mod query;
pub mod resolve;

pub(crate) mod cli;

pub use cli::logging::init_tracing;
pub use cli::resolve::ResolveRequest;
pub use cli::TokenSource;
pub use domain::{negated_name_of, OptionName};
pub use index::{ArgIndex, SharedIndex};
pub use resolve::{bool_arg, int_arg, string_arg};

/// Run the resolve subcommand and write its JSON report to stdout.
///
/// This is the binary entry point. It bridges `main.rs` to the library
/// without exposing `cli` internals; library callers should use
/// [`ArgIndex`] and [`query::QuerySet`] directly.
pub fn run_resolve(request: &ResolveRequest) -> std::process::ExitCode {
    cli::resolve::run(request)
}

/// Run the index subcommand and write the index as JSON to stdout.
pub fn run_index(source: &TokenSource) -> std::process::ExitCode {
    cli::index::run(source)
}
