use std::process::Command;
use tempfile::TempDir;

/// Runs the built binary with `-o <tmp>` and asserts that the full icon set
/// is produced and the per-file confirmations are printed.
#[test]
fn test_cli_generates_icon_set() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("icons");

    let binary_path = get_binary_path();

    let output = Command::new(&binary_path)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run agnexus-icon-gen");

    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("agnexus-icon-gen command failed");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for size in [16u32, 48, 128] {
        let filename = format!("icon{size}.png");
        let path = output_dir.join(&filename);
        assert!(path.exists(), "{filename} should exist");
        assert!(
            stdout.contains(&filename),
            "stdout should confirm {filename}"
        );

        let decoded = image::open(&path).expect("Failed to decode generated icon");
        assert_eq!(decoded.width(), size);
        assert_eq!(decoded.height(), size);
    }
}

/// Gets the path to the binary (either from target/debug or by building it)
fn get_binary_path() -> std::path::PathBuf {
    let debug_path = std::path::Path::new("target/debug/agnexus-icon-gen");
    if debug_path.exists() {
        return debug_path.to_path_buf();
    }

    let build_output = Command::new("cargo")
        .args(["build", "--bin", "agnexus-icon-gen"])
        .output()
        .expect("Failed to run cargo build");

    if !build_output.status.success() {
        panic!(
            "Failed to build agnexus-icon-gen binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    debug_path.to_path_buf()
}
