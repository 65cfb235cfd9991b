mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::write_script;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_refill_then_drain_round_trip() {
    let file = write_script(&["add_change,,,,2,1,3", "dispense_all_change,,,,,,"]);

    let mut cmd = Command::new(cargo_bin!("coinvend"));
    cmd.arg(file.path());

    cmd.assert().success().stdout(predicate::eq(
        "Dispensing 25 cents\n\
         Dispensing 25 cents\n\
         Dispensing 25 cents\n\
         Dispensing 10 cents\n\
         Dispensing 5 cents\n\
         Dispensing 5 cents\n",
    ));
}

#[test]
fn test_drain_leaves_customer_coins() {
    let file = write_script(&[
        "add_change,,,,1,0,5",
        "insert,,5,,,,",
        "dispense_all_change,,,,,,",
    ]);

    let mut cmd = Command::new(cargo_bin!("coinvend"));
    cmd.arg(file.path()).arg("--summary");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Dispensing 25 cents").count(), 5);
    assert_eq!(stdout.matches("Dispensing 5 cents").count(), 1);

    let json_start = stdout.find('{').unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(summary["machine"]["total_cents"], 0);
    assert_eq!(summary["user"]["nickels"], 1);
}

#[test]
fn test_unnamed_product_warning() {
    let file = write_script(&["add_product,4,50,,,,"]);

    let mut cmd = Command::new(cargo_bin!("coinvend"));
    cmd.arg(file.path()).arg("--summary");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Product name is missing for product in position 4\n"));
    let json_start = stdout.find('{').unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(summary["products"][0]["position"], 4);
    assert!(summary["products"][0]["name"].is_null());
}

#[test]
fn test_verbose_logging_goes_to_stderr() {
    let file = write_script(&["add_change,,,,1,0,0"]);

    let mut cmd = Command::new(cargo_bin!("coinvend"));
    cmd.arg(file.path()).arg("--verbose").env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("change added"));
}
