#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn f1db_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("f1db"));
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("F1DB_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir.join("data"));
    cmd
}

const DRIVER_ARGS: &[&str] = &[
    "add",
    "id=max-verstappen",
    "name=Max Verstappen",
    "firstName=Max",
    "lastName=Verstappen",
    "fullName=Max Emilian Verstappen",
    "abbreviation=VER",
    "permanentNumber=33",
    "gender=MALE",
    "dateOfBirth=1997-09-30",
    "placeOfBirth=Hasselt",
    "countryOfBirthCountryId=belgium",
    "nationalityCountryId=netherlands",
    "totalRaceWins=63",
];

fn drivers_file(dir: &Path) -> String {
    fs::read_to_string(dir.join("data").join("f1db-drivers.json")).unwrap()
}

#[test]
fn test_add_list_show_workflow() {
    let temp = TempDir::new().unwrap();

    f1db_cmd(temp.path())
        .args(DRIVER_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Record added (0): Max Verstappen (max-verstappen)",
        ));

    f1db_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0. Max Verstappen (max-verstappen)"))
        .stdout(predicate::str::contains("1 record(s) · Active drivers: 1"));

    f1db_cmd(temp.path())
        .args(["show", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"totalRaceWins\": 63"));

    let raw = drivers_file(temp.path());
    assert!(raw.starts_with("[\n  {\n    \"id\": \"max-verstappen\""));
}

#[test]
fn test_naked_invocation_lists() {
    let temp = TempDir::new().unwrap();
    f1db_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No drivers yet."));
}

#[test]
fn test_add_with_missing_fields_fails() {
    let temp = TempDir::new().unwrap();
    f1db_cmd(temp.path())
        .args(["add", "id=oscar-piastri"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required fields"))
        .stderr(predicate::str::contains("abbreviation"));
    assert!(!temp.path().join("data").join("f1db-drivers.json").exists());
}

#[test]
fn test_edit_duplicate_delete() {
    let temp = TempDir::new().unwrap();
    f1db_cmd(temp.path()).args(DRIVER_ARGS).assert().success();

    f1db_cmd(temp.path())
        .args(["edit", "0", "totalPoints=3023.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record updated (0)"));
    assert!(drivers_file(temp.path()).contains("\"totalPoints\": 3023.5"));

    f1db_cmd(temp.path())
        .args(["duplicate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max-verstappen-copy"));

    f1db_cmd(temp.path())
        .args(["delete", "0"])
        .assert()
        .success();

    let raw = drivers_file(temp.path());
    assert!(raw.contains("max-verstappen-copy"));
    assert!(raw.contains("Max Verstappen (copy)"));
    assert!(!raw.contains("\"id\": \"max-verstappen\","));

    f1db_cmd(temp.path())
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_import_from_stdin_reports_rejections() {
    let temp = TempDir::new().unwrap();
    let payload = r#"[
        {"id": "mclaren", "name": "McLaren", "fullName": "McLaren Racing", "countryId": "united-kingdom",
         "bestChampionshipPosition": 1, "bestStartingGridPosition": 1, "bestRaceResult": 1,
         "totalChampionshipWins": 9, "totalRaceEntries": 980, "totalRaceStarts": 978,
         "totalRaceWins": 189, "total1And2Finishes": 51, "totalRaceLaps": 52000,
         "totalPodiums": 510, "totalPodiumRaces": 400, "totalPoints": 7000.5,
         "totalChampionshipPoints": 6900.5, "totalPolePositions": 165, "totalFastestLaps": 170,
         "totalSprintRaceStarts": 30, "totalSprintRaceWins": 3},
        {"id": "broken"}
    ]"#;

    f1db_cmd(temp.path())
        .args(["-d", "Constructors", "import"])
        .write_stdin(payload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 record(s) into Constructors"))
        .stdout(predicate::str::contains("Record 1 skipped"));

    f1db_cmd(temp.path())
        .args(["-d", "constructors", "import", "--strict"])
        .write_stdin(r#"{"id": "broken"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("partially failed"));

    let raw = fs::read_to_string(temp.path().join("data").join("f1db-constructors.json")).unwrap();
    assert!(raw.contains("\"id\": \"mclaren\""));
    assert!(!raw.contains("broken"));
}

#[test]
fn test_replace_all_and_export() {
    let temp = TempDir::new().unwrap();
    let upload = temp.path().join("upload.json");
    fs::write(&upload, r#"[{"raceId": 1100, "driverId": "lando-norris", "year": 2024}]"#).unwrap();

    f1db_cmd(temp.path())
        .args(["-d", "Race Results", "replace-all"])
        .arg(&upload)
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced Race Results with 1 record(s)"))
        .stdout(predicate::str::contains("missing required fields"));

    f1db_cmd(temp.path())
        .args(["-d", "Race Results", "list", "--year", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Race 1100 - Driver lando-norris"));

    let out = temp.path().join("export.json");
    f1db_cmd(temp.path())
        .args(["-d", "race-results", "export"])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        fs::read_to_string(
            temp.path()
                .join("data")
                .join("f1db-races-race-results.json")
        )
        .unwrap()
    );
}

#[test]
fn test_json_output_and_form() {
    let temp = TempDir::new().unwrap();
    f1db_cmd(temp.path())
        .args(["--output", "json", "form"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"dateOfBirth *\""));

    f1db_cmd(temp.path())
        .args(["datasets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("f1db-races-race-results.json"));
}

#[test]
fn test_unknown_dataset_fails() {
    let temp = TempDir::new().unwrap();
    f1db_cmd(temp.path())
        .args(["-d", "Circuits", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown dataset name: Circuits"));
}

#[test]
fn test_config_file_sets_copy_suffix() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("f1db.toml"), "id_copy_suffix = \"-2\"\n").unwrap();
    f1db_cmd(temp.path()).args(DRIVER_ARGS).assert().success();
    f1db_cmd(temp.path())
        .args(["duplicate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(max-verstappen-2)"));
}
