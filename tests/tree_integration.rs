//! End-to-end tree output tests.
//!
//! The binary runs from inside a temp dir so the first line is the relative
//! root name and output is stable enough for inline snapshots.

use assert_cmd::Command;
use insta::assert_snapshot;
use std::fs::{self, File};
use std::path::Path;
use tempfile::TempDir;

fn run_in(dir: &Path, args: &[&str]) -> (bool, String) {
    let output = Command::cargo_bin("folder-tree")
        .unwrap()
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

fn create_assets(dir: &Path) {
    let root = dir.join("Assets");
    fs::create_dir_all(root.join("Sub")).unwrap();
    File::create(root.join("b.txt")).unwrap();
    File::create(root.join("a.txt")).unwrap();
    File::create(root.join("Sub/c.txt")).unwrap();
}

#[test]
fn assets_scenario() {
    let dir = TempDir::new().unwrap();
    create_assets(dir.path());

    let (ok, stdout) = run_in(dir.path(), &[]);
    assert!(ok);
    assert_snapshot!(stdout, @r"
    Assets
    ├── a.txt
    ├── b.txt
    └── Sub
        └── c.txt
    ");
}

#[test]
fn nested_tree_connectors() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("project");
    fs::create_dir_all(root.join("src/bin")).unwrap();
    fs::create_dir_all(root.join("tests")).unwrap();
    File::create(root.join("Cargo.toml")).unwrap();
    File::create(root.join("README.md")).unwrap();
    File::create(root.join("src/lib.rs")).unwrap();
    File::create(root.join("src/bin/main.rs")).unwrap();
    File::create(root.join("tests/it.rs")).unwrap();

    let (ok, stdout) = run_in(dir.path(), &["project"]);
    assert!(ok);
    assert_snapshot!(stdout, @r"
    project
    ├── Cargo.toml
    ├── README.md
    ├── src
    │   ├── bin
    │   │   └── main.rs
    │   └── lib.rs
    └── tests
        └── it.rs
    ");
}

#[test]
fn runs_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    create_assets(dir.path());

    let (_, first) = run_in(dir.path(), &[]);
    let (_, second) = run_in(dir.path(), &[]);
    assert_eq!(first, second);
}

#[test]
fn line_count_matches_entry_count() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("Assets");
    fs::create_dir(&root).unwrap();
    for i in 0..25 {
        File::create(root.join(format!("file{i:02}.dat"))).unwrap();
    }

    let (ok, stdout) = run_in(dir.path(), &[]);
    assert!(ok);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines.iter().filter(|l| l.starts_with("└── ")).count(), 1);
    assert_eq!(lines[25], "└── file24.dat");
}

#[cfg(unix)]
mod permissions {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Restores the mode on drop so the temp dir can be removed.
    struct Locked<'a>(&'a Path);

    impl<'a> Locked<'a> {
        fn new(path: &'a Path) -> Self {
            fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
            Locked(path)
        }
    }

    impl Drop for Locked<'_> {
        fn drop(&mut self) {
            let _ = fs::set_permissions(self.0, fs::Permissions::from_mode(0o755));
        }
    }

    fn running_as_root() -> bool {
        nix::unistd::geteuid().is_root()
    }

    #[test]
    fn denied_directory_gets_placeholder() {
        if running_as_root() {
            eprintln!("skipping: root ignores directory permissions");
            return;
        }

        let dir = TempDir::new().unwrap();
        create_assets(dir.path());
        let locked_path = dir.path().join("Assets/Locked");
        fs::create_dir(&locked_path).unwrap();
        File::create(locked_path.join("secret.txt")).unwrap();
        let _locked = Locked::new(&locked_path);

        let (ok, stdout) = run_in(dir.path(), &[]);
        assert!(ok);
        assert_snapshot!(stdout, @r"
        Assets
        ├── a.txt
        ├── b.txt
        ├── Locked
        │   └── [Permission Denied]
        └── Sub
            └── c.txt
        ");
    }

    #[test]
    fn denied_last_directory_uses_blank_indent() {
        if running_as_root() {
            eprintln!("skipping: root ignores directory permissions");
            return;
        }

        let dir = TempDir::new().unwrap();
        let root = dir.path().join("Assets");
        fs::create_dir_all(root.join("zzz")).unwrap();
        File::create(root.join("a.txt")).unwrap();
        let zzz = root.join("zzz");
        let _locked = Locked::new(&zzz);

        let (ok, stdout) = run_in(dir.path(), &["--on-error", "abort"]);
        assert!(ok, "denials never fail the run");
        assert_eq!(stdout, "Assets\n├── a.txt\n└── zzz\n    └── [Permission Denied]\n");
    }
}
