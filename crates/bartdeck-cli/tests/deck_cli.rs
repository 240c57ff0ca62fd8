use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent dir should be created");
    }
    fs::write(path, content).expect("file should be written");
}

fn run_bartdeck(args: &[&str], working_dir: &Path) -> std::process::Output {
    let binary_path = env!("CARGO_BIN_EXE_bartdeck");
    Command::new(binary_path)
        .args(args)
        .current_dir(working_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("bartdeck command should run")
}

#[test]
fn write_command_creates_single_deck_in_working_dir() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("case.json"),
        r#"
        {
          "base": "test",
          "parameters": [
            { "field": "n_energy_groups", "value": 2 },
            { "field": "output_filename_base", "value": "test" }
          ]
        }
        "#,
    );

    let output = run_bartdeck(&["write", "case.json"], temp.path());

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        String::from_utf8_lossy(&output.stdout).contains("Wrote 1 deck file(s)"),
        "stdout should summarize written decks"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("inputs/test.input")).expect("deck should exist"),
        "number of groups = 2\noutput file name base = test\n"
    );
}

#[test]
fn write_command_expands_sweep_under_root() {
    let temp = TempDir::new().expect("tempdir should be created");
    let case_path = temp.path().join("case.json");
    let root = temp.path().join("out");
    write_file(
        &case_path,
        r#"
        {
          "parameters": [
            { "field": "transport_model", "value": "saaf" },
            { "field": "uniform_refinements", "value": [10, 20, 30] }
          ]
        }
        "#,
    );

    let output = run_bartdeck(
        &[
            "write",
            case_path.to_str().expect("utf-8 path"),
            "--base",
            "case",
            "--root",
            root.to_str().expect("utf-8 path"),
        ],
        temp.path(),
    );

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    for (index, value) in [10, 20, 30].iter().enumerate() {
        let content = fs::read_to_string(root.join(format!("inputs/case-{}.input", index)))
            .expect("sweep deck should exist");
        assert_eq!(
            content,
            format!("transport model = saaf\nuniform refinements = {}\n", value)
        );
    }
}

#[test]
fn write_command_rejects_multiple_sweeps() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("case.json"),
        r#"
        {
          "base": "multi",
          "parameters": [
            { "field": "n_cells", "value": [1, 2] },
            { "field": "uniform_refinements", "value": [0, 1] }
          ]
        }
        "#,
    );

    let output = run_bartdeck(&["write", "case.json"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr)
            .matches("only one parameter sweep")
            .count(),
        1,
        "stderr should carry the multi-sweep diagnostic exactly once"
    );
    let written = fs::read_dir(temp.path().join("inputs"))
        .expect("inputs dir should exist")
        .count();
    assert_eq!(written, 0);
}

#[test]
fn repeated_sweep_on_one_field_is_rejected() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("case.json"),
        r#"
        {
          "base": "twice",
          "parameters": [
            { "field": "n_cells", "value": [1, 2] },
            { "field": "n_cells", "value": [4] }
          ]
        }
        "#,
    );

    let output = run_bartdeck(&["write", "case.json"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp.path().join("inputs/twice-0.input").exists());
}

#[test]
fn preview_command_rejects_multiple_sweeps() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("case.json"),
        r#"
        {
          "base": "multi",
          "parameters": [
            { "field": "n_cells", "value": [1, 2] },
            { "field": "angular_quad_order", "value": [4, 8] }
          ]
        }
        "#,
    );

    let output = run_bartdeck(&["preview", "case.json"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("only one parameter sweep"),
        "stderr should carry the multi-sweep diagnostic"
    );
}

#[test]
fn preview_command_prints_decks_without_writing() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("case.json"),
        r#"
        {
          "base": "look",
          "parameters": [
            { "label": "custom label", "value": 1.0 },
            { "field": "angular_quad_order", "value": [4, 8] }
          ]
        }
        "#,
    );

    let output = run_bartdeck(&["preview", "case.json"], temp.path());

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "# inputs/look-0.input\ncustom label = 1.0\nangular quadrature order = 4\n\
         # inputs/look-1.input\ncustom label = 1.0\nangular quadrature order = 8\n"
    );
    assert!(!temp.path().join("inputs").exists());
}

#[test]
fn fields_command_lists_every_label() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output = run_bartdeck(&["fields"], temp.path());

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 36);
    assert!(stdout.contains("n_energy_groups"));
    assert!(stdout.contains("number of groups"));
    assert!(stdout.contains("angular quadrature order"));
}

#[test]
fn unknown_field_fails_with_input_exit_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("case.json"),
        r#"{ "base": "bad", "parameters": [ { "field": "warp_factor", "value": 9 } ] }"#,
    );

    let output = run_bartdeck(&["write", "case.json"], temp.path());

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR: [INPUT.CASE_UNKNOWN_FIELD]"));
    assert!(stderr.contains("FATAL EXIT CODE: 2"));
}

#[test]
fn missing_case_file_fails_with_io_exit_code() {
    let temp = TempDir::new().expect("tempdir should be created");
    let output = run_bartdeck(&["write", "absent.json", "--base", "x"], temp.path());

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO.CASE_READ"));
}
