use assert_cmd::Command; // Bring Command into scope
use predicates::prelude::*; // Bring predicate traits into scope

#[test]
fn test_ping_command() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("stronghold")?;

    cmd.arg("--ping");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("pong"));

    Ok(())
}

#[test]
fn test_modules_command_lists_core_modules() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("stronghold")?;

    cmd.arg("modules");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("core-telemetry"))
        .stdout(predicate::str::contains("legacy-bridge"));

    Ok(())
}

#[test]
fn test_default_run_enables_and_disables() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("stronghold")?;

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enabling feature suite..."))
        .stdout(predicate::str::contains("Feature suite disabled."))
        .stdout(predicate::str::contains("pong").not());

    Ok(())
}
