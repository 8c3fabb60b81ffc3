use assert_cmd::prelude::*; // Add methods on commands
use predicates::prelude::*; // Used for writing assertions
use std::fs;
use std::path::PathBuf;
use std::process::Command; // Run programs

// Each test gets its own scratch dir since the binary reads providers.txt
// and writes main.tf relative to the working directory.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("armada-test-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

#[test]
fn armada_without_args_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("armada")?;

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("USAGE"));

    Ok(())
}

#[test]
fn armada_rejects_a_non_integer_node_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scratch_dir("non-integer");
    fs::write(dir.join("providers.txt"), "# providers\n")?;

    let mut cmd = Command::cargo_bin("armada")?;
    cmd.current_dir(&dir).args(&["many", "128", "10"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid digit found in string"));

    assert!(!dir.join("main.tf").exists());
    Ok(())
}

#[test]
fn armada_fails_without_the_prelude() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scratch_dir("no-prelude");

    let mut cmd = Command::cargo_bin("armada")?;
    cmd.current_dir(&dir).args(&["3", "128", "10"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("providers.txt"));

    assert!(!dir.join("main.tf").exists());
    Ok(())
}

#[test]
fn armada_writes_the_prelude_followed_by_the_blocks() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scratch_dir("generate");
    fs::write(dir.join("providers.txt"), "# providers\n")?;

    let mut cmd = Command::cargo_bin("armada")?;
    cmd.current_dir(&dir).args(&["2", "128", "10"]);
    cmd.assert().success();

    let main_tf = fs::read_to_string(dir.join("main.tf"))?;
    assert!(main_tf.starts_with("# providers\n"));
    assert_eq!(main_tf.matches("resource \"aws_instance\"").count(), 2);
    assert!(main_tf
        .contains("--id 0 --message-size 128 --message-rate 10 --port 4100 --peers-addrs"));
    assert!(main_tf
        .contains("--id 1 --message-size 128 --message-rate 10 --port 4100 --peers-addrs"));

    Ok(())
}

#[test]
fn armada_caps_the_node_count_at_the_table_size() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scratch_dir("capped");
    fs::write(dir.join("providers.txt"), "# providers\n")?;

    let mut cmd = Command::cargo_bin("armada")?;
    cmd.current_dir(&dir).args(&["999", "128", "10"]);
    cmd.assert().success();

    let main_tf = fs::read_to_string(dir.join("main.tf"))?;
    assert_eq!(main_tf.matches("resource \"aws_instance\"").count(), 25);

    Ok(())
}

#[test]
fn armada_with_zero_nodes_writes_just_the_prelude() -> Result<(), Box<dyn std::error::Error>> {
    let dir = scratch_dir("zero");
    fs::write(dir.join("providers.txt"), "# providers\n")?;

    let mut cmd = Command::cargo_bin("armada")?;
    cmd.current_dir(&dir).args(&["0", "128", "10"]);
    cmd.assert().success();

    assert_eq!(fs::read_to_string(dir.join("main.tf"))?, "# providers\n");
    Ok(())
}
