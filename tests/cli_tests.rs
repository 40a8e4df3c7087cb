use std::fs;
use std::process::Command;

#[test]
fn sequence_field_expansion() {
    let exe = env!("CARGO_BIN_EXE_blockgen");
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("gametitle");

    let output = Command::new(exe)
        .args([base.to_str().unwrap(), "4", "NNNNNNNNa0380408"])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    for i in 0..4u8 {
        let path = dir.path().join(format!("gametitle-{:04}.bin", i));
        let data = fs::read(&path).unwrap();
        assert_eq!(data, [i, 0, 0, 0, 0xa0, 0x38, 0x04, 0x08]);
    }
    assert!(!dir.path().join("gametitle-0004.bin").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout
        .lines()
        .all(|l| l.starts_with("Created ") && l.ends_with(".bin")));
}

#[test]
fn fixed_template_writes_identical_files() {
    let exe = env!("CARGO_BIN_EXE_blockgen");
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("fixed");

    let status = Command::new(exe)
        .args([base.to_str().unwrap(), "3", "a0380408"])
        .status()
        .expect("run failed");
    assert!(status.success());

    for i in 0..3 {
        let path = dir.path().join(format!("fixed-{:04}.bin", i));
        assert_eq!(fs::read(&path).unwrap(), [0xa0, 0x38, 0x04, 0x08]);
    }
}

#[test]
fn zero_count_succeeds_with_no_files() {
    let exe = env!("CARGO_BIN_EXE_blockgen");
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("none");

    let output = Command::new(exe)
        .args([base.to_str().unwrap(), "0", "a0380408"])
        .output()
        .expect("run failed");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn lowercase_placeholder_token() {
    let exe = env!("CARGO_BIN_EXE_blockgen");
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("lower");

    let status = Command::new(exe)
        .args([base.to_str().unwrap(), "2", "nnff"])
        .status()
        .expect("run failed");
    assert!(status.success());

    assert_eq!(
        fs::read(dir.path().join("lower-0000.bin")).unwrap(),
        [0x00, 0xff]
    );
    assert_eq!(
        fs::read(dir.path().join("lower-0001.bin")).unwrap(),
        [0x01, 0xff]
    );
}

#[test]
fn help_describes_the_placeholder() {
    let exe = env!("CARGO_BIN_EXE_blockgen");
    let output = Command::new(exe)
        .arg("--help")
        .output()
        .expect("run failed");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NN"));
    assert!(stdout.contains("little-endian"));
}
