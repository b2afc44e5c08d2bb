//! End-to-end tests for the `vehicle-cli` binary.
//!
//! Each test starts the mock server on a random port in a background thread,
//! then runs the built binary with `assert_cmd` against it and checks stdout,
//! stderr, and the exit code.

use std::net::SocketAddr;

use assert_cmd::Command;
use mock_server::{Position, Vehicle};
use predicates::prelude::*;

fn spawn_server(vehicles: Vec<Vehicle>) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_vehicles(listener, vehicles).await
        })
        .unwrap();
    });

    addr
}

/// A port that refuses connections.
fn closed_port() -> SocketAddr {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
}

fn vehicle(id: i64, shortcode: &str, battery: f64, latitude: f64, longitude: f64) -> Vehicle {
    Vehicle {
        id,
        shortcode: shortcode.to_string(),
        battery,
        position: Position {
            latitude,
            longitude,
        },
    }
}

fn cli() -> Command {
    Command::cargo_bin("vehicle-cli").expect("binary exists")
}

// --- global behavior ---

#[test]
fn no_arguments_prints_help() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("CLI tool to manage vehicles via HTTP API"))
        .stdout(predicate::str::contains("list-vehicle"))
        .stdout(predicate::str::contains("delete-vehicle"));
}

#[test]
fn options_without_subcommand_print_nothing() {
    cli()
        .args(["-a", "not-a-url"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vehicle-cli 1.0.0"));
}

#[test]
fn invalid_address_exits_1() {
    cli()
        .args(["--address", "not-a-url", "list-vehicle"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid URL: not-a-url"));
}

#[test]
fn delete_without_id_is_a_usage_error() {
    cli()
        .arg("delete-vehicle")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--id"));
}

// --- list-vehicle ---

#[test]
fn list_empty() {
    let addr = spawn_server(Vec::new());

    cli()
        .args(["-a", &format!("http://{addr}"), "list-vehicle"])
        .assert()
        .success()
        .stdout("No vehicles found.\n");
}

#[test]
fn list_prints_each_vehicle() {
    let addr = spawn_server(vec![
        vehicle(1, "abc", 50.0, 12.0, 34.0),
        vehicle(2, "def", 87.5, 52.52, 13.405),
    ]);

    cli()
        .args(["-a", &format!("http://{addr}"), "list-vehicle"])
        .assert()
        .success()
        .stdout(
            "ID: 1 | Shortcode: abc | Battery: 50 | Lat: 12 | Lon: 34\n\
             ID: 2 | Shortcode: def | Battery: 87.5 | Lat: 52.52 | Lon: 13.405\n",
        );
}

#[test]
fn list_without_server_reports_no_response() {
    let addr = closed_port();

    cli()
        .args(["-a", &format!("http://{addr}"), "list-vehicle"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: No response from server. Please check if the server is running.",
        ))
        .stderr(predicate::str::contains("Details").not());
}

// --- delete-vehicle ---

#[test]
fn delete_existing_vehicle() {
    let addr = spawn_server(vec![vehicle(123, "abc", 50.0, 12.0, 34.0)]);
    let address = format!("http://{addr}");

    cli()
        .args(["-a", &address, "delete-vehicle", "--id", "123"])
        .assert()
        .success()
        .stdout("Vehicle 123 deleted successfully\n");

    cli()
        .args(["-a", &address, "list-vehicle"])
        .assert()
        .success()
        .stdout("No vehicles found.\n");
}

#[test]
fn delete_missing_vehicle_reports_server_error() {
    let addr = spawn_server(Vec::new());

    cli()
        .args(["delete-vehicle", "-i", "42", "--address", &format!("http://{addr}")])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Vehicle not found"))
        .stderr(predicate::str::contains("   Status Code: 404"))
        .stderr(predicate::str::contains("   Details: {"));
}

#[test]
fn verbose_logs_requests_to_stderr() {
    let addr = spawn_server(Vec::new());

    cli()
        .args(["-vv", "-a", &format!("http://{addr}"), "list-vehicle"])
        .assert()
        .success()
        .stdout("No vehicles found.\n")
        .stderr(predicate::str::contains("sending request"));
}

#[test]
fn delete_id_with_space_reaches_server() {
    let addr = spawn_server(Vec::new());

    cli()
        .args(["-a", &format!("http://{addr}"), "delete-vehicle", "--id", "a b"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Invalid vehicle id"))
        .stderr(predicate::str::contains("   Status Code: 400"));
}
