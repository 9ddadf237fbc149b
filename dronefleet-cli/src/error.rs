//! Error types emitted by the dronefleet CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dronefleet::OrderDraftError;
use thiserror::Error;

/// Errors emitted by the dronefleet CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A fleet override is outside the values a fleet can take.
    #[error("invalid {field}: {reason}")]
    InvalidFleet {
        /// Name of the offending option.
        field: &'static str,
        /// What the value must satisfy.
        reason: &'static str,
    },
    /// The orders path does not exist.
    #[error("orders path {path:?} does not exist")]
    MissingOrdersFile {
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// The orders path exists but is not a file.
    #[error("orders path {path:?} exists but is not a file")]
    OrdersPathNotFile {
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// Opening or inspecting the orders file failed.
    #[error("failed to open orders file {path:?}: {source}")]
    OpenOrders {
        /// Path of the orders file.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The orders file is not a JSON array of orders.
    #[error("failed to parse orders JSON at {path:?}: {source}")]
    ParseOrders {
        /// Path of the orders file.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// An order in the file failed validation.
    #[error("order {index} in {path:?} is invalid: {source}")]
    InvalidOrder {
        /// Path of the orders file.
        path: Utf8PathBuf,
        /// Zero-based position of the order in the file.
        index: usize,
        /// Validation failure.
        #[source]
        source: OrderDraftError,
    },
    /// Serializing the simulation output failed.
    #[error("failed to serialize simulation output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the simulation output failed.
    #[error("failed to write simulation output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
