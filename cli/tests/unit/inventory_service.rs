//! Unit tests for inventory generation.

#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use ansible_setup::application::services::build_inventory;
use ansible_setup::domain::settings::StorageLocation;
use ansible_setup::infra::fs::HostFs;
use tempfile::TempDir;

use crate::helpers::{RecordingDiagnostics, cluster, node, settings};

fn persistent(dir: &TempDir) -> StorageLocation {
    StorageLocation::persistent(dir.path().to_path_buf())
}

#[test]
fn test_build_inventory_renders_groups_and_host_lines() {
    let dir = TempDir::new().expect("tempdir");
    let mut settings = settings(persistent(&dir), "/p/site.yml".into());
    settings.environment = BTreeMap::from([(
        "frontend".to_string(),
        BTreeMap::from([("role".to_string(), "edge".to_string())]),
    )]);
    let c = cluster(
        "demo",
        vec![
            node("frontend", "fe1", Some("10.0.0.1")),
            node("compute", "c1", Some("10.0.0.2")),
            node("compute", "c2", Some("10.0.0.3")),
        ],
    );

    let path = build_inventory(&c, &settings, &HostFs, &RecordingDiagnostics::new())
        .expect("build")
        .expect("inventory written");

    assert_eq!(path, dir.path().join("ansible-inventory.demo"));
    let content = std::fs::read_to_string(&path).expect("read");
    assert_eq!(
        content,
        "\n[web]\nfe1 ansible_ssh_host=10.0.0.1 ansible_ssh_user=ubuntu role=edge\n\
         \n[worker]\nc1 ansible_ssh_host=10.0.0.2 ansible_ssh_user=ubuntu\n\
         c2 ansible_ssh_host=10.0.0.3 ansible_ssh_user=ubuntu\n"
    );
}

#[test]
fn test_build_inventory_no_matching_node_writes_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let settings = settings(persistent(&dir), "/p/site.yml".into());
    let c = cluster("demo", vec![node("storage", "s1", Some("10.0.0.9"))]);
    let diag = RecordingDiagnostics::new();

    let result = build_inventory(&c, &settings, &HostFs, &diag).expect("build");

    assert!(result.is_none());
    assert!(!dir.path().join("ansible-inventory.demo").exists());
    assert_eq!(diag.at("info"), vec!["No inventory file was created."]);
}

#[test]
fn test_build_inventory_node_in_two_groups_appears_in_both_sections() {
    let dir = TempDir::new().expect("tempdir");
    let mut settings = settings(persistent(&dir), "/p/site.yml".into());
    settings.groups.insert(
        "master".to_string(),
        vec!["control".to_string(), "monitoring".to_string()],
    );
    let c = cluster("demo", vec![node("master", "m1", Some("10.0.0.5"))]);

    let path = build_inventory(&c, &settings, &HostFs, &RecordingDiagnostics::new())
        .expect("build")
        .expect("inventory written");

    let content = std::fs::read_to_string(path).expect("read");
    assert_eq!(content.matches("\n[").count(), 2);
    assert_eq!(content.matches("m1 ansible_ssh_host=10.0.0.5").count(), 2);
}

#[test]
fn test_build_inventory_unassigned_address_is_rendered_empty() {
    let dir = TempDir::new().expect("tempdir");
    let settings = settings(persistent(&dir), "/p/site.yml".into());
    let c = cluster("demo", vec![node("frontend", "fe1", None)]);

    let path = build_inventory(&c, &settings, &HostFs, &RecordingDiagnostics::new())
        .expect("build")
        .expect("inventory written");

    let content = std::fs::read_to_string(path).expect("read");
    assert!(content.contains("fe1 ansible_ssh_host= ansible_ssh_user=ubuntu\n"));
}

#[test]
fn test_build_inventory_rebuild_is_byte_identical() {
    let dir = TempDir::new().expect("tempdir");
    let settings = settings(persistent(&dir), "/p/site.yml".into());
    let c = cluster(
        "demo",
        vec![
            node("compute", "c2", Some("10.0.0.3")),
            node("frontend", "fe1", Some("10.0.0.1")),
        ],
    );
    let diag = RecordingDiagnostics::new();

    let path = build_inventory(&c, &settings, &HostFs, &diag)
        .expect("build")
        .expect("written");
    let first = std::fs::read(&path).expect("read");
    build_inventory(&c, &settings, &HostFs, &diag).expect("rebuild");
    let second = std::fs::read(&path).expect("read");

    assert_eq!(first, second);
}

#[test]
fn test_build_inventory_rebuild_reflects_current_membership() {
    let dir = TempDir::new().expect("tempdir");
    let settings = settings(persistent(&dir), "/p/site.yml".into());
    let diag = RecordingDiagnostics::new();
    let before = cluster(
        "demo",
        vec![
            node("compute", "c1", Some("10.0.0.2")),
            node("compute", "c2", Some("10.0.0.3")),
        ],
    );
    build_inventory(&before, &settings, &HostFs, &diag).expect("build");

    let after = cluster("demo", vec![node("compute", "c1", Some("10.0.0.2"))]);
    let path = build_inventory(&after, &settings, &HostFs, &diag)
        .expect("rebuild")
        .expect("written");

    let content = std::fs::read_to_string(path).expect("read");
    assert!(content.contains("c1 "));
    assert!(!content.contains("c2 "));
}

#[test]
fn test_build_inventory_recreates_missing_storage_with_warning() {
    let dir = TempDir::new().expect("tempdir");
    let storage = dir.path().join("gone");
    let settings = settings(StorageLocation::ephemeral(storage.clone()), "/p/site.yml".into());
    let c = cluster("demo", vec![node("frontend", "fe1", Some("10.0.0.1"))]);
    let diag = RecordingDiagnostics::new();

    let path = build_inventory(&c, &settings, &HostFs, &diag)
        .expect("build")
        .expect("written");

    assert!(path.starts_with(&storage));
    assert!(path.is_file());
    assert_eq!(diag.at("warn").len(), 1);
    assert!(diag.at("warn")[0].contains("missing"));
}

#[test]
fn test_build_inventory_clusters_do_not_share_files() {
    let dir = TempDir::new().expect("tempdir");
    let settings = settings(persistent(&dir), "/p/site.yml".into());
    let diag = RecordingDiagnostics::new();
    let a = cluster("a", vec![node("frontend", "fa", Some("10.0.1.1"))]);
    let b = cluster("b", vec![node("frontend", "fb", Some("10.0.2.1"))]);

    let pa = build_inventory(&a, &settings, &HostFs, &diag).expect("a").expect("a written");
    let pb = build_inventory(&b, &settings, &HostFs, &diag).expect("b").expect("b written");

    assert_ne!(pa, pb);
    assert!(std::fs::read_to_string(pa).expect("read a").contains("fa "));
    assert!(std::fs::read_to_string(pb).expect("read b").contains("fb "));
}

#[test]
fn test_build_inventory_ephemeral_write_is_logged_at_debug() {
    let dir = TempDir::new().expect("tempdir");
    let settings = settings(
        StorageLocation::ephemeral(dir.path().to_path_buf()),
        "/p/site.yml".into(),
    );
    let c = cluster("demo", vec![node("frontend", "fe1", Some("10.0.0.1"))]);
    let diag = RecordingDiagnostics::new();

    build_inventory(&c, &settings, &HostFs, &diag).expect("build");

    assert!(diag.at("warn").is_empty());
    assert!(
        diag.at("debug")
            .iter()
            .any(|m| m.starts_with("Writing inventory file to tmp dir"))
    );
}
