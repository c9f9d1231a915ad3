use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid graph in '{file}': {message}")]
#[diagnostic(
    code(bipartite_oracle::graph_parse_error),
    help("Each line must be `u v` with non-negative node ids, or `nodes N` as a header")
)]
pub struct GraphParseError {
    pub file: String,
    pub message: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid suite file '{file}'")]
#[diagnostic(
    code(bipartite_oracle::suite_parse_error),
    help("Check the TOML syntax and that every [[case]] has a name, kind and size")
)]
pub struct SuiteParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum OracleError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(bipartite_oracle::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    GraphParseError(Box<GraphParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    SuiteParseError(Box<SuiteParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(bipartite_oracle::json_error),
        help("Graph JSON files must look like {{\"nodes\": 3, \"edges\": [[0, 1], [1, 2]]}}")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(bipartite_oracle::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(bipartite_oracle::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Invalid file pattern")]
    #[diagnostic(
        code(bipartite_oracle::pattern_error),
        help("Quote glob patterns so the shell does not expand them")
    )]
    Pattern(#[from] glob::PatternError),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(bipartite_oracle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(bipartite_oracle::graph_error),
        help("The graph references a node that does not exist")
    )]
    GraphError { message: String },

    #[error("Odd cycle reconstruction failed: {message}")]
    #[diagnostic(
        code(bipartite_oracle::contract_violation),
        help("The graph reported inconsistent adjacency data during the traversal")
    )]
    CycleReconstruction { message: String },
}
