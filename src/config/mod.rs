//! # Configuration Module
//!
//! Configuration structures for every command. Each one comes with a builder
//! whose `with_*` setters are finished by [`ConfigBuilder::build`], which
//! reports missing fields as configuration errors.
//!
//! - **CheckConfig**: graph files to run the oracle on
//! - **BenchConfig**: comparison harness settings
//! - **GenerateConfig**: synthetic graph output
//!
//! ## Example
//!
//! ```
//! use bipartite_oracle::cli::OutputFormat;
//! use bipartite_oracle::common::ConfigBuilder;
//! use bipartite_oracle::config::{BenchConfig, SuiteSource};
//!
//! let config = BenchConfig::builder()
//!     .with_suite(SuiteSource::Smoke)
//!     .with_seed(42)
//!     .with_format(OutputFormat::Json)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.iterations, 1);
//! ```
//!
//! [`ConfigBuilder::build`]: crate::common::ConfigBuilder::build

pub mod bench;
pub mod check;
pub mod generate;

pub use bench::{BenchConfig, SuiteSource};
pub use check::CheckConfig;
pub use generate::GenerateConfig;
