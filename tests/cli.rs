use std::{fs, path::PathBuf, process::Command};

fn deutschcode(path: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_deutschcode")).args(["--code", path])
                                                   .output()
                                                   .expect("failed to start the binary")
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("deutschcode-{}-{name}", std::process::id()));
    fs::write(&path, contents).expect("failed to write scratch file");
    path
}

#[test]
fn runs_a_program() {
    let output = deutschcode(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/grundlagen.dc"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout),
               fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/grundlagen.out")).unwrap());
}

#[test]
fn rejects_files_without_dc_extension() {
    let path = scratch_file("program.txt", "gib 1 aus.");
    let output = deutschcode(path.to_str().unwrap());
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn missing_file_exits_with_one() {
    let path = std::env::temp_dir().join(format!("deutschcode-{}-missing.dc", std::process::id()));
    let output = deutschcode(path.to_str().unwrap());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read the input file"));
}

#[test]
fn program_error_exits_with_one() {
    let path = scratch_file("broken.dc", "gib 1 aus.\ngib y aus.");
    let output = deutschcode(path.to_str().unwrap());
    fs::remove_file(&path).ok();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error on line 2"));
}
