//! End-to-end runs of the `batteryinfo` binary against fake power-supply trees.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const EXE: &str = env!("CARGO_BIN_EXE_batteryinfo");

/// A command isolated from the user's config and log settings.
fn batteryinfo(home: &Path) -> Command {
    let mut cmd = Command::new(EXE);
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

struct Tree {
    dir: TempDir,
}

impl Tree {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("ps")).unwrap();
        Self { dir }
    }

    fn root(&self) -> String {
        self.dir.path().join("ps").display().to_string()
    }

    fn device(&self, name: &str, kind: &str, uevent: Option<&str>, driver: Option<&str>) {
        let dev = self.dir.path().join("ps").join(name);
        fs::create_dir_all(&dev).unwrap();
        fs::write(dev.join("type"), kind).unwrap();
        if let Some(uevent) = uevent {
            fs::write(dev.join("uevent"), uevent).unwrap();
        }
        if let Some(driver) = driver {
            fs::create_dir_all(dev.join("device")).unwrap();
            fs::write(dev.join("device/uevent"), driver).unwrap();
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = batteryinfo(self.dir.path());
        cmd.arg("--root").arg(self.root());
        cmd
    }
}

const BAT0: &str = "\
POWER_SUPPLY_NAME=BAT0
POWER_SUPPLY_STATUS=Discharging
POWER_SUPPLY_PRESENT=1
POWER_SUPPLY_TECHNOLOGY=Li-ion
POWER_SUPPLY_VOLTAGE_NOW=12500000
POWER_SUPPLY_CURRENT_NOW=150000
POWER_SUPPLY_CHARGE_FULL_DESIGN=5000
POWER_SUPPLY_CHARGE_FULL=4000
POWER_SUPPLY_CHARGE_NOW=3000
POWER_SUPPLY_MODEL_NAME=45N1029
POWER_SUPPLY_MANUFACTURER=SANYO
";

#[test]
fn default_text_report() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery\n", Some(BAT0), Some("DRIVER=battery\n"));
    tree.device("AC", "Mains\n", Some("POWER_SUPPLY_ONLINE=1\n"), None);

    let expected = "\
battery:                      0
name:                         BAT0
charge:                       75.00%
voltage:                      12.50
current:                      1.50
model:                        45N1029
manufacturer:                 SANYO
technology:                   Li-ion
driver:                       battery
status:                       Discharging
present:                      yes
";
    tree.cmd().assert().success().stdout(expected);
}

#[test]
fn json_all_fields() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery\n", Some(BAT0), None);

    let output = tree.cmd().args(["-j", "-a"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("{\n\"batteries\": ["));
    assert!(stdout.contains("\"charge\": 75.00"));
    assert!(stdout.contains("\"max_charge\": 80.00"));
    assert!(stdout.contains("\"etd\": 0.07"));
    assert!(stdout.contains("\"temperature\": null"));
    assert!(stdout.contains("\"present\": true"));
    assert!(stdout.contains("\"driver\": null"));
}

#[test]
fn driver_only_device() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery", None, Some("DRIVER=acpi\n"));

    tree.cmd()
        .arg("ndcp")
        .assert()
        .success()
        .stdout(predicate::str::contains("driver:                       acpi\n"))
        .stdout(predicate::str::contains("name:                         ?\n"))
        .stdout(predicate::str::contains("charge:                       ?\n"))
        .stdout(predicate::str::contains("present:                      ?\n"));
}

#[test]
fn unreadable_device_is_skipped_but_counted() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery", None, None);
    tree.device("BAT1", "Battery", Some("POWER_SUPPLY_CAPACITY=42\n"), None);

    tree.cmd()
        .arg("c")
        .assert()
        .success()
        .stdout("battery:                      1\ncharge:                       42.00%\n");
}

#[test]
fn non_battery_types_are_excluded() {
    let tree = Tree::new();
    tree.device("AC", "Mains\n", Some("POWER_SUPPLY_CAPACITY=1\n"), None);
    tree.device("UPS", " Battery\n", Some("POWER_SUPPLY_CAPACITY=2\n"), None);
    tree.device("hid", "battery\n", Some("POWER_SUPPLY_CAPACITY=3\n"), None);

    tree.cmd().assert().success().stdout("");
}

#[test]
fn unknown_name_gives_empty_json_batch() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery\n", Some(BAT0), None);

    tree.cmd()
        .args(["--json", "--name", "BAT9"])
        .assert()
        .success()
        .stdout("{\n\"batteries\": []\n}\n");
}

#[test]
fn name_filter_selects_one() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery\n", Some("POWER_SUPPLY_CAPACITY=10\n"), None);
    tree.device("BAT1", "Battery\n", Some("POWER_SUPPLY_CAPACITY=90\n"), None);

    tree.cmd()
        .args(["c", "-n", "BAT1"])
        .assert()
        .success()
        .stdout("battery:                      0\ncharge:                       90.00%\n");
}

#[test]
fn charge_cap_can_be_disabled() {
    let tree = Tree::new();
    tree.device(
        "BAT0",
        "Battery\n",
        Some("POWER_SUPPLY_CHARGE_NOW=4500\nPOWER_SUPPLY_CHARGE_FULL=4000\n"),
        None,
    );

    tree.cmd()
        .arg("c")
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00%"));
    tree.cmd()
        .args(["c", "-N"])
        .assert()
        .success()
        .stdout(predicate::str::contains("112.50%"));
}

#[test]
fn digit_flags() {
    let tree = Tree::new();
    tree.device(
        "BAT0",
        "Battery\n",
        Some("POWER_SUPPLY_PRESENT=1\nPOWER_SUPPLY_ONLINE=0\nPOWER_SUPPLY_CHARGING_ENABLED=7\n"),
        None,
    );

    tree.cmd()
        .args(["pog", "-d"])
        .assert()
        .success()
        .stdout(
            "battery:                      0\n\
             present:                      1\n\
             online:                       0\n\
             charging_enabled:             ?\n",
        );
}

#[test]
fn missing_root_is_fatal() {
    let tree = Tree::new();
    batteryinfo(tree.dir.path())
        .args(["--root", "/definitely/not/here", "-j"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "error: couldn't open directory \"/definitely/not/here\"",
        ));
}

#[test]
fn invalid_sequence_fails_before_reading() {
    let tree = Tree::new();
    batteryinfo(tree.dir.path())
        .args(["ncx", "--root", "/definitely/not/here"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unrecognised character -- 'x'"))
        .stderr(predicate::str::contains("Usage: batteryinfo"))
        .stderr(predicate::str::contains("couldn't open directory").not());
}

#[test]
fn all_ignores_invalid_sequence() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery\n", Some(BAT0), None);
    tree.cmd().args(["xyz", "-a"]).assert().success();
}

#[test]
fn second_sequence_is_rejected() {
    let tree = Tree::new();
    tree.cmd()
        .args(["nc", "vC"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: batteryinfo"));
}

#[test]
fn empty_name_is_rejected() {
    let tree = Tree::new();
    tree.cmd()
        .args(["-n", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("battery name must be a non-empty string"))
        .stderr(predicate::str::contains("Usage: batteryinfo"));
}

#[test]
fn empty_name_is_reported_before_the_config_is_read() {
    let tree = Tree::new();
    let config = tree.dir.path().join("config/batteryinfo");
    fs::create_dir_all(&config).unwrap();
    fs::write(config.join("batteryinfo.toml"), "this is not toml").unwrap();

    tree.cmd()
        .args(["-n", ""])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("battery name must be a non-empty string"))
        .stderr(predicate::str::contains("config error").not());
}

#[test]
fn informational_flags_use_stderr() {
    let tree = Tree::new();
    batteryinfo(tree.dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("output sequence"));
    batteryinfo(tree.dir.path())
        .arg("-v")
        .assert()
        .success()
        .stdout("")
        .stderr(format!("batteryinfo v{}\n", env!("CARGO_PKG_VERSION")));
    batteryinfo(tree.dir.path())
        .arg("--license")
        .assert()
        .success()
        .stderr(predicate::str::contains("Copyright (c) 2016 Joe Glancy"))
        .stderr(predicate::str::contains("GNU General Public License"));
}

#[test]
fn config_file_supplies_defaults() {
    let tree = Tree::new();
    tree.device("BAT0", "Battery\n", Some(BAT0), None);
    let config = tree.dir.path().join("config/batteryinfo");
    fs::create_dir_all(&config).unwrap();
    fs::write(config.join("batteryinfo.toml"), "sequence = \"t\"\njson = true\n").unwrap();

    tree.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_charge\": 80.00"));

    // a positional sequence still wins
    tree.cmd()
        .arg("n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"BAT0\""))
        .stdout(predicate::str::contains("max_charge").not());
}

#[test]
fn explicit_config_must_exist() {
    let tree = Tree::new();
    tree.cmd()
        .args(["--config", "/definitely/not/here.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}
