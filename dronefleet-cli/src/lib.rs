//! Command-line interface for the dronefleet dispatch engine.
//!
//! `dronefleet simulate <orders.json>` registers every order in the file,
//! runs one allocation and prints the allocation with its report, as JSON or
//! as dispatch text. Options can come from CLI flags, configuration files or
//! `DRONEFLEET_*` environment variables.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod render;
mod simulate;

pub use error::CliError;

use simulate::{SimulateArgs, run_simulate};

pub(crate) const ARG_ORDERS: &str = "orders";
pub(crate) const ENV_ORDERS: &str = "DRONEFLEET_CMDS_SIMULATE_ORDERS_PATH";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_ALLOCATOR: &str = "allocator";
pub(crate) const ARG_CAPACITY_KG: &str = "capacity-kg";
pub(crate) const ARG_MAX_RANGE: &str = "max-range";
pub(crate) const ARG_FLEET_SIZE: &str = "fleet-size";
pub(crate) const ARG_SPEED: &str = "speed";

/// Run the dronefleet CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the orders file or
/// output writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Simulate(args) => run_simulate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dronefleet",
    about = "Allocate delivery orders to a drone fleet and report on the result",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Allocate the orders in a JSON file and print the outcome.
    Simulate(SimulateArgs),
}

#[cfg(test)]
mod tests;
