#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "INPUT_KUBERNETES-VERSION",
    "INPUT_CONTAINER-RUNTIME",
    "MINICACHE_CACHE_ROOT",
    "MINICACHE_TOOL",
    "MINICACHE_STATE_FILE",
    "MINICACHE_STORE_DIR",
    "RUST_LOG",
];

/// Write an executable that behaves like `minikube version --short`
fn fake_tool(dir: &Path, script_body: &str) -> PathBuf {
    let path = dir.join("fake-minikube");
    fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn minicache(work: &Path, tool: &Path) -> Command {
    let mut cmd = Command::cargo_bin("minicache").unwrap();
    cmd.current_dir(work);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--tool")
        .arg(tool)
        .arg("--store-dir")
        .arg(work.join("store"))
        .arg("--arch")
        .arg("x64");
    cmd
}

fn populate_caches(work: &Path) {
    for category in ["iso", "kic", "preload"] {
        let dir = work.join(".minikube/cache").join(category);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{category}.bin")), category).unwrap();
    }
}

#[test]
fn test_keys_without_probing() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "exit 1");

    minicache(work.path(), &tool)
        .args(["keys", "--tool-version", "v1.32.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "iso\tiso-v1.32.0-x64\t.minikube/cache/iso",
        ))
        .stdout(predicate::str::contains("kic\tkic-v1.32.0-x64"))
        .stdout(predicate::str::contains(
            "preload\tpreload-v1.32.0-x64-stable-docker\t.minikube/cache/preload",
        ));
}

#[test]
fn test_keys_follow_configuration() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo v1.32.0");

    minicache(work.path(), &tool)
        .args([
            "keys",
            "--kubernetes-version",
            "1.29",
            "--container-runtime",
            "containerd",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "preload-v1.32.0-x64-1.29-containerd",
        ));
}

#[test]
fn test_keys_read_action_inputs_from_environment() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo v1.32.0");

    minicache(work.path(), &tool)
        .env("INPUT_CONTAINER-RUNTIME", "CRI-O")
        .arg("keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("preload-v1.32.0-x64-stable-cri-o"));
}

#[test]
fn test_version_prints_trimmed_tool_output() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo '  v1.32.0  '");

    minicache(work.path(), &tool)
        .arg("version")
        .assert()
        .success()
        .stdout("v1.32.0\n");
}

#[test]
fn test_restore_save_restore_cycle() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo v1.32.0");

    minicache(work.path(), &tool)
        .arg("restore")
        .assert()
        .success()
        .stdout(r#"{"iso":false,"kic":false,"preload":false}"#.to_string() + "\n");
    assert!(work.path().join(".minikube/cache-hits.json").exists());

    populate_caches(work.path());
    minicache(work.path(), &tool).arg("save").assert().success();

    let store = work.path().join("store");
    assert!(store.join("iso-v1.32.0-x64").is_dir());
    assert!(store.join("kic-v1.32.0-x64").is_dir());
    assert!(store.join("preload-v1.32.0-x64-stable-docker").is_dir());

    fs::remove_dir_all(work.path().join(".minikube/cache")).unwrap();
    minicache(work.path(), &tool)
        .arg("restore")
        .assert()
        .success()
        .stdout(r#"{"iso":true,"kic":true,"preload":true}"#.to_string() + "\n");

    let restored = work.path().join(".minikube/cache/preload/preload.bin");
    assert_eq!(fs::read_to_string(restored).unwrap(), "preload");
}

#[test]
fn test_save_only_saves_misses() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo v1.32.0");
    let state_file = work.path().join("hits.json");
    fs::write(&state_file, r#"{"iso":true,"kic":true,"preload":false}"#).unwrap();
    populate_caches(work.path());

    minicache(work.path(), &tool)
        .arg("--state-file")
        .arg(&state_file)
        .arg("save")
        .assert()
        .success();

    let entries: Vec<String> = fs::read_dir(work.path().join("store"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["preload-v1.32.0-x64-stable-docker".to_string()]);
}

#[test]
fn test_save_without_restore_fails() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo v1.32.0");

    minicache(work.path(), &tool)
        .arg("save")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run restore before save"));
}

#[test]
fn test_failing_tool_aborts_restore() {
    let work = TempDir::new().unwrap();
    let tool = fake_tool(work.path(), "echo 'minikube: broken' >&2; exit 3");

    minicache(work.path(), &tool)
        .arg("restore")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 3"));
    assert!(!work.path().join(".minikube/cache-hits.json").exists());
}
