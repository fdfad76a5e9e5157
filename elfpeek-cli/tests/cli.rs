use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn elfpeek(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_elfpeek"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_temp(name: &str, data: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("elfpeek-cli-{}-{name}", std::process::id()));
    std::fs::write(&path, data).unwrap();
    path
}

fn x86_64_shared_object() -> Vec<u8> {
    let mut data = vec![0x7f, b'E', b'L', b'F', 2, 1, 1, 0];
    data.resize(16, 0);
    data.extend_from_slice(&3u16.to_le_bytes()); // e_type
    data.extend_from_slice(&62u16.to_le_bytes()); // e_machine
    data.extend_from_slice(&1u32.to_le_bytes()); // e_version
    data.extend_from_slice(&0x1040u64.to_le_bytes()); // e_entry
    data.extend_from_slice(&64u64.to_le_bytes()); // e_phoff
    data.extend_from_slice(&0x3a48u64.to_le_bytes()); // e_shoff
    data.extend_from_slice(&0u32.to_le_bytes()); // e_flags
    for v in [64u16, 56, 13, 64, 31, 30] {
        data.extend_from_slice(&v.to_le_bytes());
    }
    data
}

fn assert_fails(out: &Output) {
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "no partial report on failure");
    assert!(!out.stderr.is_empty());
}

#[test]
fn prints_report_and_exits_zero() {
    let path = write_temp("so", &x86_64_shared_object());
    let out = elfpeek(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "Ident: 7F 45 4C 46 02 01 01 00 00 00 00 00 00 00 00 00\n\
         Class: 02, 64-bit\n\
         Data encoding: 01, Two's complement, little-endian\n\
         EI version: 01, Current\n\
         OSABI: 00, No extension or unspecified\n\
         \n\
         Type: 00000003, Shared object\n\
         Machine: 0000003E, Unknown machine*\n"
    );
}

#[test]
fn all_flag_appends_field_table() {
    let path = write_temp("so-all", &x86_64_shared_object());
    let out = elfpeek(&["--all", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Ident: 7F 45 4C 46 02"));
    assert!(stdout.contains("Entry point"));
    assert!(stdout.contains("0x1040"));
    assert!(stdout.contains("Section header count"));
    assert!(stdout.contains("ELF64"));
}

#[test]
fn json_flag_prints_json() {
    let path = write_temp("so-json", &x86_64_shared_object());
    let out = elfpeek(&["--json", path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();

    assert_eq!(out.status.code(), Some(0));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["class"]["code"], 2);
    assert_eq!(v["class"]["label"], "64-bit");
    assert_eq!(v["os_abi"]["label"], "No extension or unspecified");
    assert_eq!(v["object_type"]["label"], "Shared object");
    assert_eq!(v["machine"]["code"], 62);
    assert_eq!(v["entry"], 0x1040);
    assert_eq!(v["shnum"], 31);
}

#[test]
fn missing_argument_exits_one() {
    assert_fails(&elfpeek(&[]));
}

#[test]
fn unopenable_file_exits_one() {
    let out = elfpeek(&["/nonexistent/elfpeek/input"]);
    assert_fails(&out);
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("/nonexistent/elfpeek/input"));
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn ten_byte_file_exits_one() {
    let path = write_temp("ten", &[0x7f, b'E', b'L', b'F', 1, 1, 1, 0, 0, 0]);
    let out = elfpeek(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_fails(&out);
}

#[test]
fn bad_magic_exits_one() {
    let mut data = x86_64_shared_object();
    data[0] = 0x7e;
    let path = write_temp("magic", &data);
    let out = elfpeek(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_fails(&out);
}

#[test]
fn truncated_header_exits_one() {
    let data = x86_64_shared_object();
    let path = write_temp("cut", &data[..data.len() - 1]);
    let out = elfpeek(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_fails(&out);
}

#[test]
fn unsupported_class_exits_one() {
    let mut data = x86_64_shared_object();
    data[4] = 3;
    let path = write_temp("class", &data);
    let out = elfpeek(&[path.to_str().unwrap()]);
    std::fs::remove_file(&path).unwrap();
    assert_fails(&out);
}

#[test]
fn closed_stdout_never_panics() {
    let path = write_temp("so-pipe", &x86_64_shared_object());
    for args in [vec![], vec!["--all"], vec!["--json"]] {
        let mut child = Command::new(env!("CARGO_BIN_EXE_elfpeek"))
            .args(&args)
            .arg(&path)
            .env_remove("RUST_LOG")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .unwrap();
        drop(child.stdout.take());
        let out = child.wait_with_output().unwrap();

        let code = out.status.code();
        assert!(
            code == Some(0) || code == Some(1),
            "{args:?}: exit {code:?}, stderr: {}",
            String::from_utf8_lossy(&out.stderr)
        );
        assert!(!String::from_utf8_lossy(&out.stderr).contains("panicked"));
    }
    std::fs::remove_file(&path).unwrap();
}
