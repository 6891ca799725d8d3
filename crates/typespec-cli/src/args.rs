use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the typespec binary.
///
/// Resolves an extractor document into per-module signatures and prints the
/// result as JSON on stdout.
#[derive(Parser, Debug, Clone)]
#[command(name = "typespec", version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the extractor JSON document. Overrides the config file.
    pub spec: Option<PathBuf>,

    /// Path to typespec.json or a directory containing it.
    #[arg(short = 'p', long = "project")]
    pub project: Option<PathBuf>,

    /// Print only the entries stored under these references.
    #[arg(short = 'r', long = "reference")]
    pub references: Vec<String>,

    /// Restrict output to the module with this name.
    #[arg(long)]
    pub module: Option<String>,

    /// Name used for anonymous object types.
    #[arg(long = "anonymousName", alias = "anonymous-name")]
    pub anonymous_name: Option<String>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}
