//! End-to-end runs of the `nat-configure` binary.
#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn nat_configure(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nat-configure"));
    cmd.current_dir(cwd)
        .env_remove("NAT_BASE_DIR")
        .env_remove("NAT_TARGET")
        .env_remove("NAT_TRACING");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("failed to spawn nat-configure")
}

/// Temporary project root with an empty `src/`.
fn project() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    fs::create_dir(root.join("src")).unwrap();
    (dir, root)
}

fn header(root: &Path) -> String {
    fs::read_to_string(root.join("src").join("config.h")).unwrap()
}

#[test]
fn base_dir_from_environment() {
    let (_dir, root) = project();
    let elsewhere = tempfile::tempdir().unwrap();

    let output = run(nat_configure(elsewhere.path())
        .arg("generate")
        .env("NAT_BASE_DIR", &root));
    assert!(output.status.success(), "{:?}", output);

    let text = header(&root);
    let root = root.display();
    assert_eq!(
        text,
        format!(
            "#ifndef nat_config_h\n\
             #define nat_config_h\n\
             #define NAT_CORE_LOC \"{root}/src/core/index\"\n\
             #define NAT_SYSTEM_LOC \"{root}/src/core/system\"\n\
             #endif\n"
        )
    );
}

#[test]
fn falls_back_to_working_directory() {
    let (_dir, root) = project();

    let output = run(nat_configure(&root).arg("generate"));
    assert!(output.status.success(), "{:?}", output);

    assert!(header(&root).contains(&format!(
        "#define NAT_CORE_LOC \"{}/src/core/index\"",
        root.display()
    )));
}

#[test]
fn virtualized_target_adds_emscripten_branch() {
    let (_dir, root) = project();

    let output = run(nat_configure(&root).args(["generate", "--target", "virtualized"]));
    assert!(output.status.success(), "{:?}", output);

    let text = header(&root);
    assert!(text.contains(
        "#ifdef __EMSCRIPTEN__\n  #define NAT_CORE_LOC \"/src/core/index\"\n  #define NAT_SYSTEM_LOC \"/src/core/system\"\n#else\n"
    ));
    assert!(text.contains(&format!(
        "  #define NAT_CORE_LOC \"{}/src/core/index\"",
        root.display()
    )));
}

#[test]
fn target_can_come_from_environment() {
    let (_dir, root) = project();

    let output = run(nat_configure(&root)
        .arg("generate")
        .env("NAT_TARGET", "virtualized"));
    assert!(output.status.success(), "{:?}", output);
    assert!(header(&root).contains("#ifdef __EMSCRIPTEN__"));
}

#[test]
fn regenerating_is_byte_identical() {
    let (_dir, root) = project();

    assert!(run(nat_configure(&root).args(["generate", "--target", "virtualized"])).status.success());
    let first = fs::read(root.join("src/config.h")).unwrap();
    assert!(run(nat_configure(&root).args(["generate", "--target", "virtualized"])).status.success());
    let second = fs::read(root.join("src/config.h")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_src_directory_fails_without_creating_anything() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(nat_configure(dir.path()).arg("generate"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config.h"));
    assert!(!dir.path().join("src").exists());
}

#[test]
fn strict_mode_requires_base_dir() {
    let (_dir, root) = project();

    let output = run(nat_configure(&root).args(["generate", "--require-base-dir"]));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("NAT_BASE_DIR"));
    assert!(!root.join("src/config.h").exists());
}

#[test]
fn settings_file_enables_base_dir_macro() {
    let (_dir, root) = project();
    let settings = root.join("nat.toml");
    fs::write(&settings, "[configure]\nemit_base_dir = true\n").unwrap();

    let output = run(nat_configure(&root)
        .arg("generate")
        .arg("--config")
        .arg(&settings));
    assert!(output.status.success(), "{:?}", output);
    assert!(header(&root).contains(&format!("#define NAT_BASE_DIR \"{}\"", root.display())));
}

#[test]
fn quiet_generate_prints_nothing() {
    let (_dir, root) = project();

    let output = run(nat_configure(&root).args(["--quiet", "generate"]));
    assert!(output.status.success(), "{:?}", output);
    assert!(output.stdout.is_empty());
}

#[test]
fn env_command_does_not_write() {
    let (_dir, root) = project();

    let output = run(nat_configure(&root).arg("env"));
    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("src/core/index"));
    assert!(!root.join("src/config.h").exists());
}

#[test]
fn regenerating_keeps_header_mode() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, root) = project();
    let dest = root.join("src/config.h");
    let mode = || fs::metadata(&dest).unwrap().permissions().mode() & 0o777;

    assert!(run(nat_configure(&root).arg("generate")).status.success());
    let first = mode();
    assert_eq!(first, 0o644);

    assert!(run(nat_configure(&root).arg("generate")).status.success());
    assert_eq!(mode(), first);

    fs::set_permissions(&dest, fs::Permissions::from_mode(0o664)).unwrap();
    assert!(run(nat_configure(&root).arg("generate")).status.success());
    assert_eq!(mode(), 0o664);
}
