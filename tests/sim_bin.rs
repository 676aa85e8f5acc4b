use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "colors", "1", "5"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["variant"], "colors");
    let rounds = v["rounds"].as_array().expect("rounds array");
    assert_eq!(rounds.len(), 5);
    for round in rounds {
        let options = round["options"].as_array().expect("options array");
        assert_eq!(options.len(), 4);
        assert!(options.contains(&round["target"]));
        assert_eq!(round["solved"], true);
    }
}
