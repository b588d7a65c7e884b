use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "keyshop-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_keyshop-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("persistence-roundtrip"));
}

#[test]
fn cli_runs_all_scenarios_with_json_report() {
    let exe = env!("CARGO_BIN_EXE_keyshop-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args([
            "--report",
            "json",
            "--scenarios",
            "all",
            "--iterations",
            "2",
            "--output",
        ])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Keyshop Cart Tester"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("\"failed\": 0"));
    assert!(content.contains("File Storage Round Trip"));
}

#[test]
fn cli_audit_rejects_corrupt_cart() {
    let exe = env!("CARGO_BIN_EXE_keyshop-tester");
    let cart = temp_path("corrupt").with_extension("json");
    std::fs::write(&cart, "{\"items\": 3}").expect("write cart");
    let output = Command::new(exe)
        .arg("--audit")
        .arg(&cart)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not an array"), "{stderr}");
    assert!(cart.exists());
    let _ = std::fs::remove_file(cart);
}

#[test]
fn cli_audit_summarises_clean_cart() {
    let exe = env!("CARGO_BIN_EXE_keyshop-tester");
    let cart = temp_path("clean").with_extension("json");
    std::fs::write(
        &cart,
        r#"[{"id":"cod-premium","gameValue":"cod","gameName":"Call of Duty","gameLogo":"","passTitle":"BlackCell Pass","passPrice":"$29.99","priceNumeric":29.99,"gameSpecificFeature":"","quantity":2}]"#,
    )
    .expect("write cart");
    let output = Command::new(exe)
        .arg("--audit")
        .arg(&cart)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Items: 2"), "{stdout}");
    assert!(stdout.contains("Total: $59.98"), "{stdout}");
    let _ = std::fs::remove_file(cart);
}
