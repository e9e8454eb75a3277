use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const CHICAGO_TWO_ROWS: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-06-23 15:09:32,2017-06-23 15:11:12,100,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
2017-06-24 09:00:00,2017-06-24 09:05:00,300,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1981.0
";

const WASHINGTON_ROWS: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2017-03-11 10:40:00,2017-03-11 10:46:00,360.0,Georgia Ave and Fairmont St NW,14th & Belmont St NW,Registered
";

fn write_dataset(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("failed to write fixture");
}

fn bikeshare() -> Command {
    Command::cargo_bin("bikeshare-cli").expect("binary builds")
}

#[test]
fn stats_reports_duration_and_user_totals() {
    let data = tempdir().expect("tempdir");
    write_dataset(data.path(), "chicago.csv", CHICAGO_TWO_ROWS);

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .args(["stats", "--city", "chicago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("400 seconds"))
        .stdout(predicate::str::contains("200 seconds"))
        .stdout(predicate::str::contains("Subscriber"))
        .stdout(predicate::str::contains("June"))
        .stdout(predicate::str::contains("Friday"));
}

#[test]
fn stats_labels_totals_with_the_month_filter() {
    let data = tempdir().expect("tempdir");
    write_dataset(data.path(), "chicago.csv", CHICAGO_TWO_ROWS);

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .args(["stats", "--city", "chicago", "--month", "june"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in June"));
}

#[test]
fn stats_for_washington_reports_demographics_unavailable() {
    let data = tempdir().expect("tempdir");
    write_dataset(data.path(), "washington.csv", WASHINGTON_ROWS);

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .args(["stats", "--city", "washington"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "not available for Washington",
        ));
}

#[test]
fn stats_with_no_matching_rows_prints_no_data_banner() {
    let data = tempdir().expect("tempdir");
    write_dataset(data.path(), "chicago.csv", CHICAGO_TWO_ROWS);

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .args(["stats", "--city", "chicago", "--month", "december"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "There is no data available for the given inputs",
        ));
}

#[test]
fn stats_with_missing_data_file_fails_with_hint() {
    let data = tempdir().expect("tempdir");

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .args(["stats", "--city", "new york city"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no data file"))
        .stderr(predicate::str::contains("--data-dir"));
}

#[test]
fn stats_rejects_values_outside_the_fixed_domains() {
    bikeshare()
        .args(["stats", "--city", "boston"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown city"));

    bikeshare()
        .args(["stats", "--city", "chicago", "--month", "junuary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown month"));
}

#[test]
fn explore_runs_a_full_session_from_piped_input() {
    let data = tempdir().expect("tempdir");
    write_dataset(data.path(), "chicago.csv", CHICAGO_TWO_ROWS);

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .arg("explore")
        .write_stdin("chicago\njune\nall\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Hello! Let's explore some US bikeshare data!",
        ))
        .stdout(predicate::str::contains("Calculating Trip Duration"))
        .stdout(predicate::str::contains("Would you like to restart?"));
}

#[test]
fn explore_reprompts_on_invalid_city() {
    let data = tempdir().expect("tempdir");
    write_dataset(data.path(), "chicago.csv", CHICAGO_TWO_ROWS);

    bikeshare()
        .args(["--data-dir"])
        .arg(data.path())
        .arg("explore")
        .write_stdin("boston\nchicago\nall\nall\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The entered City value is invalid."));
}

#[test]
fn config_set_and_show_round_trip() {
    let config = tempdir().expect("tempdir");

    bikeshare()
        .args(["--config-dir"])
        .arg(config.path())
        .args(["config", "set", "data_dir", "/data/bikeshare"])
        .assert()
        .success();

    bikeshare()
        .args(["--config-dir"])
        .arg(config.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/data/bikeshare"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let config = tempdir().expect("tempdir");

    bikeshare()
        .args(["--config-dir"])
        .arg(config.path())
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}
