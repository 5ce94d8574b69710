// e2e/cli_integration.rs — black-box tests of the `binpack` binary
//
// Runs the compiled tool through std::process::Command and checks exit codes,
// files written, and what lands on stdout / stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the compiled `binpack` binary.
fn binpack() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_binpack"));
    cmd.env_remove("BINPACK_FORMAT").env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str], dir: &Path) -> Output {
    binpack()
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn binpack")
}

/// TempDir holding `level.bin` with ~8 KB of repetitive content.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("level.bin");
    fs::write(&input, "Obj_Goomba 0 0 16\nObj_Koopa 0 16 16\n".repeat(230)).unwrap();
    (dir, input)
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ── 1. Round trips ───────────────────────────────────────────────────────────

#[test]
fn compress_decompress_default_names() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let out = run(&["compress", "level.bin"], dir.path());
    assert!(out.status.success(), "compress failed: {}", stderr(&out));
    let packed = dir.path().join("level.bin.szs");
    assert!(packed.exists());
    assert!(fs::read(&packed).unwrap().starts_with(b"Yaz0"));

    fs::remove_file(&input).unwrap();
    let out = run(&["decompress", "level.bin.szs"], dir.path());
    assert!(out.status.success(), "decompress failed: {}", stderr(&out));
    assert_eq!(fs::read(&input).unwrap(), original);
}

#[test]
fn lz77_formats_round_trip() {
    for format in ["lz77", "lz77-ext"] {
        let (dir, input) = make_temp_input();
        let original = fs::read(&input).unwrap();

        let out = run(
            &["compress", "level.bin", "--format", format, "-o", "packed.lz"],
            dir.path(),
        );
        assert!(out.status.success(), "{format}: {}", stderr(&out));

        let out = run(&["decompress", "packed.lz", "-o", "restored.bin"], dir.path());
        assert!(out.status.success(), "{format}: {}", stderr(&out));
        assert_eq!(fs::read(dir.path().join("restored.bin")).unwrap(), original);
    }
}

#[test]
fn format_from_environment() {
    let (dir, _input) = make_temp_input();
    let out = binpack()
        .env("BINPACK_FORMAT", "lz77")
        .args(["compress", "level.bin"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", stderr(&out));
    let packed = fs::read(dir.path().join("level.bin.lz")).unwrap();
    assert_eq!(packed[0], 0x10);
}

// ── 2. Overwrite protection ──────────────────────────────────────────────────

#[test]
fn refuses_to_overwrite_without_force() {
    let (dir, _input) = make_temp_input();
    let target = dir.path().join("level.bin.szs");
    fs::write(&target, b"precious").unwrap();

    let out = run(&["compress", "level.bin"], dir.path());
    assert!(!out.status.success());
    assert!(stderr(&out).contains("already exists"), "{}", stderr(&out));
    assert_eq!(fs::read(&target).unwrap(), b"precious");

    let out = run(&["-f", "compress", "level.bin"], dir.path());
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(fs::read(&target).unwrap().starts_with(b"Yaz0"));
}

// ── 3. info ──────────────────────────────────────────────────────────────────

#[test]
fn info_lists_each_container() {
    let (dir, _input) = make_temp_input();
    assert!(run(&["compress", "level.bin"], dir.path()).status.success());
    assert!(run(
        &["compress", "level.bin", "--format", "lz77-ext"],
        dir.path()
    )
    .status
    .success());

    let out = run(&["info", "level.bin.szs", "level.bin.lz"], dir.path());
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "{text}");
    assert!(lines[0].starts_with("yaz0"));
    assert!(lines[0].contains(&fs::metadata(dir.path().join("level.bin")).unwrap().len().to_string()));
    assert!(lines[1].starts_with("lz77-ext"));
}

#[test]
fn info_on_plain_file_fails() {
    let (dir, _input) = make_temp_input();
    let out = run(&["info", "level.bin"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("unrecognised container"), "{}", stderr(&out));
}

// ── 4. Verbosity ─────────────────────────────────────────────────────────────

#[test]
fn quiet_suppresses_progress_line() {
    let (dir, _input) = make_temp_input();

    let out = run(&["compress", "level.bin"], dir.path());
    assert!(stderr(&out).contains("level.bin"));

    let out = run(&["-q", "-f", "compress", "level.bin"], dir.path());
    assert!(out.status.success());
    assert!(stderr(&out).is_empty(), "{}", stderr(&out));
}

#[test]
fn errors_silenced_at_qq() {
    let dir = TempDir::new().unwrap();
    let out = run(&["-qq", "decompress", "missing.szs"], dir.path());
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).is_empty(), "{}", stderr(&out));
}

// ── 5. Usage ─────────────────────────────────────────────────────────────────

#[test]
fn version_and_help() {
    let dir = TempDir::new().unwrap();
    let out = run(&["--version"], dir.path());
    assert!(out.status.success());
    assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));

    let out = run(&["--help"], dir.path());
    assert!(out.status.success());
    assert!(stdout(&out).to_lowercase().contains("usage"));
}

#[test]
fn bad_usage_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    assert!(!run(&[], dir.path()).status.success());
    assert!(!run(&["compress", "x", "--format", "zip"], dir.path())
        .status
        .success());
}
