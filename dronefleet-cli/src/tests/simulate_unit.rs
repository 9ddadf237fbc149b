//! Focused unit tests covering simulate configuration and order loading.

use super::helpers::{VALID_ORDERS, Workspace};
use super::*;
use camino::Utf8PathBuf;
use crate::simulate::{
    AllocatorChoice, OutputFormat, SimulateConfig, config_from_layers_for_test, load_orders,
    run_simulate_with, simulate_drafts,
};
use dronefleet::{CarrierKey, FleetConfig, OrderDraftError};
use rstest::rstest;

fn args_for(path: Utf8PathBuf) -> SimulateArgs {
    SimulateArgs {
        orders_path: Some(path),
        ..SimulateArgs::default()
    }
}

#[rstest]
fn converting_without_orders_path_errors() {
    let err = SimulateConfig::try_from(SimulateArgs::default())
        .expect_err("missing orders path should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ORDERS);
            assert_eq!(env, ENV_ORDERS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn conversion_applies_defaults() {
    let config = SimulateConfig::try_from(args_for(Utf8PathBuf::from("orders.json")))
        .expect("config should build");
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.allocator, AllocatorChoice::Utilization);
    assert_eq!(config.fleet, FleetConfig::default());
}

#[rstest]
#[case::zero_fleet(
    SimulateArgs { fleet_size: Some(0), ..SimulateArgs::default() },
    ARG_FLEET_SIZE
)]
#[case::negative_capacity(
    SimulateArgs { capacity_kg: Some(-1.0), ..SimulateArgs::default() },
    ARG_CAPACITY_KG
)]
#[case::infinite_range(
    SimulateArgs { max_range: Some(f64::INFINITY), ..SimulateArgs::default() },
    ARG_MAX_RANGE
)]
#[case::zero_speed(
    SimulateArgs { speed: Some(0.0), ..SimulateArgs::default() },
    ARG_SPEED
)]
fn conversion_rejects_invalid_fleet(#[case] args: SimulateArgs, #[case] expected: &'static str) {
    let err = SimulateConfig::try_from(args).expect_err("invalid fleet should error");
    match err {
        CliError::InvalidFleet { field, .. } => assert_eq!(field, expected),
        other => panic!("expected InvalidFleet, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_missing_file() {
    let workspace = Workspace::new();
    let config = SimulateConfig::try_from(args_for(workspace.path("absent.json")))
        .expect("config should build");
    match config.validate_sources().expect_err("expected failure") {
        CliError::MissingOrdersFile { path } => assert_eq!(path, workspace.path("absent.json")),
        other => panic!("expected MissingOrdersFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let dir = workspace.path("orders.json");
    std::fs::create_dir(dir.as_std_path()).expect("orders directory");
    let config = SimulateConfig::try_from(args_for(dir)).expect("config should build");
    match config.validate_sources().expect_err("expected failure") {
        CliError::OrdersPathNotFile { .. } => {}
        other => panic!("expected OrdersPathNotFile, found {other:?}"),
    }
}

#[rstest]
fn load_orders_reads_drafts() {
    let workspace = Workspace::new();
    let path = workspace.write_orders(VALID_ORDERS);
    let drafts = load_orders(&path).expect("orders should load");
    assert_eq!(drafts.len(), 3);
    assert_eq!(drafts.first().map(|d| d.priority), Some(dronefleet::Priority::High));
    assert_eq!(drafts.get(2).map(|d| d.priority), Some(dronefleet::Priority::Low));
}

#[rstest]
fn load_orders_reports_parse_errors() {
    let workspace = Workspace::new();
    let path = workspace.write_orders("{ not json");
    match load_orders(&path).expect_err("expected parse failure") {
        CliError::ParseOrders { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseOrders, found {other:?}"),
    }
}

#[rstest]
fn load_orders_reports_invalid_order_index() {
    let workspace = Workspace::new();
    let path = workspace.write_orders(
        r#"[{"weight": 1.0, "destination": {"x": 0.0, "y": 0.0}},
            {"weight": -2.0, "destination": {"x": 0.0, "y": 0.0}}]"#,
    );
    match load_orders(&path).expect_err("expected validation failure") {
        CliError::InvalidOrder { index, source, .. } => {
            assert_eq!(index, 1);
            assert!(matches!(source, OrderDraftError::NegativeWeight { .. }));
        }
        other => panic!("expected InvalidOrder, found {other:?}"),
    }
}

#[rstest]
fn load_orders_reports_unknown_priority() {
    let workspace = Workspace::new();
    let path = workspace.write_orders(
        r#"[{"weight": 1.0, "destination": {"x": 0.0, "y": 0.0}, "priority": "urgent"}]"#,
    );
    assert!(matches!(load_orders(&path), Err(CliError::ParseOrders { .. })));
}

#[rstest]
#[case(AllocatorChoice::Utilization, Some("by-weight"))]
#[case(AllocatorChoice::LeastLoaded, Some("least-loaded"))]
fn allocator_choice_selects_allocator(
    #[case] allocator: AllocatorChoice,
    #[case] strategy: Option<&'static str>,
) {
    let workspace = Workspace::new();
    let drafts = load_orders(&workspace.write_orders(VALID_ORDERS)).expect("orders should load");
    let config = SimulateConfig {
        orders_path: workspace.path("orders.json"),
        format: OutputFormat::Json,
        allocator,
        fleet: FleetConfig::default(),
    };
    let outcome = simulate_drafts(&config, drafts);
    assert_eq!(outcome.allocation.diagnostics().strategy, strategy);
    assert_eq!(
        outcome
            .allocation
            .get(CarrierKey::Unallocated)
            .map(|orders| orders.iter().map(|o| o.id).collect::<Vec<_>>()),
        Some(vec![3])
    );
    assert_eq!(outcome.report.total_deliveries, 2);
}

#[rstest]
fn json_output_contains_keyed_allocation_and_report() {
    let workspace = Workspace::new();
    let path = workspace.write_orders(VALID_ORDERS);
    let mut buffer = Vec::new();
    run_simulate_with(args_for(path), &mut buffer).expect("simulate should succeed");

    let value: serde_json::Value = serde_json::from_slice(&buffer).expect("JSON output");
    assert_eq!(value["allocation"]["-1"][0]["id"], 3);
    assert!(value["allocation"]["1"].is_array());
    assert_eq!(value["report"]["totalDeliveries"], 2);
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "orders_path": 42 }));

    match config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration")
    {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "format": "text", "fleet_size": 5, "orders_path": "from-file.json" }),
        None,
    );
    composer.push_environment(json!({
        "orders_path": "from-env.json",
        "allocator": "least-loaded",
    }));
    composer.push_cli(json!({ "fleet_size": 2 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.orders_path, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.allocator, AllocatorChoice::LeastLoaded);
    assert_eq!(config.fleet.fleet_size, 2);
}
