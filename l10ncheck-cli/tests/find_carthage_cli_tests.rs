use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn find_cmd() -> Command {
    Command::cargo_bin("find-carthage").unwrap()
}

#[test]
fn test_prints_the_checkout_root_from_inside_a_checkout() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("Carthage").join("Checkouts").join("foo");
    fs::create_dir_all(&nested).unwrap();

    let out = find_cmd().current_dir(&nested).output().unwrap();
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    // The process reports its resolved working directory, so resolve the
    // fixture path the same way before comparing.
    let expected = temp.path().canonicalize().unwrap().join("Carthage");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), expected.to_str().unwrap());
}

#[test]
fn test_finds_a_subfolder_of_the_working_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Carthage")).unwrap();

    let out = find_cmd().current_dir(temp.path()).output().unwrap();
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let expected = temp.path().canonicalize().unwrap().join("Carthage");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.trim(), expected.to_str().unwrap());
}

#[test]
fn test_fails_when_no_checkout_folder_exists() {
    let temp = TempDir::new().unwrap();

    let out = find_cmd().current_dir(temp.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("ERROR:"));
    assert!(stderr.contains("Carthage"));
    assert!(out.stdout.is_empty());
}
