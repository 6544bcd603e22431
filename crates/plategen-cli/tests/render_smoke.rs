use std::io::Write;
use std::process::{Command, Stdio};

fn count_entities(dxf: &str, kind: &str) -> usize {
    let lines: Vec<&str> = dxf.lines().collect();
    lines
        .chunks(2)
        .filter(|pair| pair[0].trim() == "0" && pair[1] == kind)
        .count()
}

#[test]
fn raw_data_from_stdin_to_stdout() {
    let bin = env!("CARGO_BIN_EXE_plategen");
    let mut child = Command::new(bin)
        .args(["render", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn plategen");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"[\"Esc\",\"F1\"],\n[{w:2.25},\"Enter\"]")
        .expect("write layout");
    let output = child.wait_with_output().expect("wait plategen");
    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let dxf = String::from_utf8_lossy(&output.stdout);
    assert!(dxf.starts_with("0\nSECTION\n"));
    assert!(dxf.trim_end().ends_with("EOF"));
    // Three switch cutouts plus one stabilizer pair.
    assert_eq!(count_entities(&dxf, "ARC"), 5 * 4);
}

#[test]
fn settings_file_and_flags_shape_the_plate() {
    let bin = env!("CARGO_BIN_EXE_plategen");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("kb.json");
    std::fs::write(&input, r#"[{"name":"tiny"},[{"w":1.5},"Tab","Q"]]"#).expect("write layout");
    let settings = dir.path().join("plate.yaml");
    std::fs::write(&settings, "acoustics: typical\ncutout-radius: 1\n").expect("write settings");
    let output = dir.path().join("plate.dxf");

    let result = Command::new(bin)
        .args([
            "render",
            input.to_str().unwrap(),
            "--settings",
            settings.to_str().unwrap(),
            "--cutout-radius",
            "0",
            "-o",
            output.to_str().unwrap(),
        ])
        .output()
        .expect("run plategen render");
    assert!(
        result.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    assert!(result.stdout.is_empty());

    let dxf = std::fs::read_to_string(&output).expect("read dxf");
    // Zero cutout radius: only the two acoustic slots beside the 1.5u key have arcs.
    assert_eq!(count_entities(&dxf, "ARC"), 2 * 4);
    assert_eq!(count_entities(&dxf, "LINE"), 2 * 4 + 2 * 4 + 4);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let bin = env!("CARGO_BIN_EXE_plategen");
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("kb.json");
    std::fs::write(&input, r#"[["A"]]"#).expect("write layout");

    let result = Command::new(bin)
        .args(["render", input.to_str().unwrap(), "-v"])
        .output()
        .expect("run plategen render");
    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("plate ready"), "{stderr}");
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ENTITIES"));
}
