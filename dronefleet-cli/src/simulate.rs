//! Simulate command implementation for the dronefleet CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use dronefleet::{
    Allocation, Allocator, BinPackingAllocator, FleetConfig, LeastLoadedAllocator, OrderDraft,
    Report, Simulation,
};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::{file_is_file, open_utf8_file};
use crate::render::write_text;
use crate::{
    ARG_ALLOCATOR, ARG_CAPACITY_KG, ARG_FLEET_SIZE, ARG_FORMAT, ARG_MAX_RANGE, ARG_ORDERS,
    ARG_SPEED, CliError, ENV_ORDERS,
};

/// How the simulation outcome is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OutputFormat {
    /// Pretty-printed JSON with the keyed allocation and the report.
    #[default]
    Json,
    /// Dispatch lines per carrier followed by a report summary.
    Text,
}

/// Which allocator assigns the orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum AllocatorChoice {
    /// Multi-strategy bin packing selected by capacity utilization.
    #[default]
    Utilization,
    /// Single pass onto the least busy carrier.
    LeastLoaded,
}

/// CLI arguments for the `simulate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Register every order in a JSON file, allocate them to the \
                 fleet and print the allocation with its delivery report. \
                 The file holds an array of objects with `weight`, \
                 `destination` ({x, y}) and optional `priority`.",
    about = "Allocate orders from a JSON file"
)]
#[ortho_config(prefix = "DRONEFLEET")]
pub(crate) struct SimulateArgs {
    /// Path to a JSON file containing the orders.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) orders_path: Option<Utf8PathBuf>,
    /// Output format: `json` or `text`.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Allocator: `utilization` or `least-loaded`.
    #[arg(long = ARG_ALLOCATOR, value_enum)]
    #[serde(default)]
    pub(crate) allocator: Option<AllocatorChoice>,
    /// Carrier capacity in kilograms.
    #[arg(long = ARG_CAPACITY_KG, value_name = "kg")]
    #[serde(default)]
    pub(crate) capacity_kg: Option<f64>,
    /// Maximum destination distance from the depot.
    #[arg(long = ARG_MAX_RANGE, value_name = "units")]
    #[serde(default)]
    pub(crate) max_range: Option<f64>,
    /// Number of carriers in the fleet.
    #[arg(long = ARG_FLEET_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) fleet_size: Option<usize>,
    /// Cruise speed in distance units per minute.
    #[arg(long = ARG_SPEED, value_name = "units-per-minute")]
    #[serde(default)]
    pub(crate) speed: Option<f64>,
}

impl SimulateArgs {
    pub(crate) fn into_config(self) -> Result<SimulateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SimulateConfig::try_from(merged)
    }
}

/// Resolved `simulate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimulateConfig {
    pub(crate) orders_path: Utf8PathBuf,
    pub(crate) format: OutputFormat,
    pub(crate) allocator: AllocatorChoice,
    pub(crate) fleet: FleetConfig,
}

impl SimulateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.orders_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::OrdersPathNotFile {
                path: self.orders_path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingOrdersFile {
                    path: self.orders_path.clone(),
                })
            }
            Err(source) => Err(CliError::OpenOrders {
                path: self.orders_path.clone(),
                source,
            }),
        }
    }
}

fn non_negative(value: f64, field: &'static str) -> Result<f64, CliError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CliError::InvalidFleet {
            field,
            reason: "must be a finite, non-negative number",
        })
    }
}

fn resolve_fleet(args: &SimulateArgs) -> Result<FleetConfig, CliError> {
    let defaults = FleetConfig::default();
    let capacity_kg = non_negative(
        args.capacity_kg.unwrap_or(defaults.capacity_kg),
        ARG_CAPACITY_KG,
    )?;
    let max_range = non_negative(args.max_range.unwrap_or(defaults.max_range), ARG_MAX_RANGE)?;
    let fleet_size = args.fleet_size.unwrap_or(defaults.fleet_size);
    if fleet_size == 0 {
        return Err(CliError::InvalidFleet {
            field: ARG_FLEET_SIZE,
            reason: "must be at least 1",
        });
    }
    let speed_units_per_minute = args.speed.unwrap_or(defaults.speed_units_per_minute);
    if !(speed_units_per_minute.is_finite() && speed_units_per_minute > 0.0) {
        return Err(CliError::InvalidFleet {
            field: ARG_SPEED,
            reason: "must be a finite, positive number",
        });
    }
    Ok(FleetConfig {
        capacity_kg,
        max_range,
        fleet_size,
        speed_units_per_minute,
    })
}

impl TryFrom<SimulateArgs> for SimulateConfig {
    type Error = CliError;

    fn try_from(args: SimulateArgs) -> Result<Self, Self::Error> {
        let fleet = resolve_fleet(&args)?;
        let orders_path = args.orders_path.ok_or(CliError::MissingArgument {
            field: ARG_ORDERS,
            env: ENV_ORDERS,
        })?;
        Ok(Self {
            orders_path,
            format: args.format.unwrap_or_default(),
            allocator: args.allocator.unwrap_or_default(),
            fleet,
        })
    }
}

/// Allocation and report produced by one simulate invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SimulationOutcome {
    pub(crate) allocation: Allocation,
    pub(crate) report: Report,
}

pub(crate) fn run_simulate(args: SimulateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_simulate_with(args, &mut stdout)
}

pub(crate) fn run_simulate_with(
    args: SimulateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let drafts = load_orders(&config.orders_path)?;
    let outcome = simulate_drafts(&config, drafts);
    write_outcome(writer, &outcome, config.format)
}

pub(crate) fn simulate_drafts(
    config: &SimulateConfig,
    drafts: Vec<OrderDraft>,
) -> SimulationOutcome {
    match config.allocator {
        AllocatorChoice::Utilization => {
            simulate_with(BinPackingAllocator::new(), config.fleet, drafts)
        }
        AllocatorChoice::LeastLoaded => simulate_with(LeastLoadedAllocator, config.fleet, drafts),
    }
}

fn simulate_with<A: Allocator>(
    allocator: A,
    fleet: FleetConfig,
    drafts: Vec<OrderDraft>,
) -> SimulationOutcome {
    let mut simulation = Simulation::with_config(allocator, fleet);
    for draft in drafts {
        simulation.register_draft(draft);
    }
    let allocation = simulation.simulate().clone();
    if let Some(strategy) = allocation.diagnostics().strategy {
        info!("allocation chosen by {strategy}");
    }
    SimulationOutcome {
        allocation,
        report: simulation.generate_report(),
    }
}

/// Load and validate the JSON-encoded orders at `path`.
pub(crate) fn load_orders(path: &Utf8Path) -> Result<Vec<OrderDraft>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenOrders {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let drafts: Vec<OrderDraft> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseOrders {
            path: path.to_path_buf(),
            source,
        })?;
    for (index, draft) in drafts.iter().enumerate() {
        draft.validate().map_err(|source| CliError::InvalidOrder {
            path: path.to_path_buf(),
            index,
            source,
        })?;
    }
    Ok(drafts)
}

fn write_outcome(
    writer: &mut dyn Write,
    outcome: &SimulationOutcome,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload =
                serde_json::to_string_pretty(outcome).map_err(CliError::SerializeOutput)?;
            writer
                .write_all(payload.as_bytes())
                .map_err(CliError::WriteOutput)?;
            writer.write_all(b"\n").map_err(CliError::WriteOutput)
        }
        OutputFormat::Text => write_text(writer, outcome).map_err(CliError::WriteOutput),
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SimulateConfig, CliError> {
    let merged = SimulateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SimulateConfig::try_from(merged)
}
