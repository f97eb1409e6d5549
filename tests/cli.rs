#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(agenda: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("agenda-cli").unwrap();
    cmd.arg("--agenda").arg(agenda);
    cmd
}

#[test]
fn add_event_then_slots_excludes_booked_range() {
    let dir = tempdir().unwrap();
    let agenda = dir.path().join("agenda.json");
    let today = chrono::Local::now().date_naive().to_string();

    cli(&agenda)
        .args([
            "add-event",
            "--title",
            "Standup",
            "--description",
            "point quotidien",
            "--date",
            &today,
            "--start",
            "10:00",
            "--end",
            "10:30",
        ])
        .assert()
        .success();

    cli(&agenda)
        .args(["slots", "--date", &today])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("10:30")
                .and(predicate::str::contains("10:00").not())
                .and(predicate::str::contains("10:15").not()),
        );
}

#[test]
fn overlapping_add_event_fails() {
    let dir = tempdir().unwrap();
    let agenda = dir.path().join("agenda.json");
    let today = chrono::Local::now().date_naive().to_string();

    cli(&agenda)
        .args([
            "add-event", "--title", "A", "--date", &today, "--start", "10:00", "--end", "11:00",
        ])
        .assert()
        .success();

    cli(&agenda)
        .args([
            "add-event", "--title", "B", "--date", &today, "--start", "10:30", "--end", "11:30",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("slot not available"));
}

#[test]
fn reminders_roundtrip_through_the_cli() {
    let dir = tempdir().unwrap();
    let agenda = dir.path().join("agenda.json");
    let today = chrono::Local::now().date_naive().to_string();

    let output = cli(&agenda)
        .args([
            "add-event", "--title", "Démo", "--date", &today, "--start", "14:00", "--end", "15:00",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let event_id = String::from_utf8(output).unwrap().trim().to_string();

    cli(&agenda)
        .args([
            "add-reminder",
            "--event-id",
            &event_id,
            "--at",
            &format!("{today}T13:00"),
            "--kind",
            "system",
        ])
        .assert()
        .success();

    cli(&agenda)
        .args(["reminders", "--event-id", &event_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("system").and(predicate::str::contains("13:00")));
}
