//! Unit tests for `AnsibleSetupProvider` wired with mock ports.
//!
//! Exercises the `SetupProvider` contract end to end over `cluster_common`
//! clusters: construction, setup, and cleanup sharing one storage location.

#![allow(clippy::expect_used)]

use std::path::PathBuf;

use ansible_setup::application::ports::SetupProvider;
use ansible_setup::domain::config::ProviderConfig;
use ansible_setup::infra::fs::HostFs;
use ansible_setup::infra::provider::AnsibleSetupProvider;
use cluster_common::{Cluster, Node};
use tempfile::TempDir;

use crate::helpers::{FakeHost, RecordingDiagnostics, RecordingRunner, write_playbook};

fn demo_cluster(name: &str) -> Cluster {
    Cluster {
        name: name.to_string(),
        user_key_private: PathBuf::from("/keys/demo"),
        nodes: vec![
            Node {
                name: "frontend001".to_string(),
                kind: "frontend".to_string(),
                preferred_ip: Some("10.0.0.1".to_string()),
                image_user: "ubuntu".to_string(),
            },
            Node {
                name: "compute001".to_string(),
                kind: "compute".to_string(),
                preferred_ip: Some("10.0.0.2".to_string()),
                image_user: "ubuntu".to_string(),
            },
        ],
    }
}

fn config(playbook: &std::path::Path) -> ProviderConfig {
    let yaml = format!(
        "groups:\n  frontend: [web]\n  compute: [worker]\nplaybook_path: {}\n",
        playbook.display()
    );
    serde_yaml::from_str(&yaml).expect("valid config")
}

type TestProvider = AnsibleSetupProvider<RecordingRunner, HostFs, FakeHost, RecordingDiagnostics>;

fn provider(config: &ProviderConfig, runner: RecordingRunner) -> TestProvider {
    AnsibleSetupProvider::with_parts(config, runner, HostFs, FakeHost::new(), RecordingDiagnostics::new())
        .expect("provider")
}

#[tokio::test]
async fn test_provider_setup_then_cleanup_reclaims_temporary_storage() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&write_playbook(dir.path()));
    let runner = RecordingRunner::exiting(0);
    let p = provider(&config, runner.clone());
    let storage = p.storage_path().to_path_buf();
    assert!(p.settings().storage.ephemeral);

    let cluster = demo_cluster("demo");
    assert!(p.setup_cluster(&cluster).await.expect("setup"));
    assert!(storage.join("ansible-inventory.demo").is_file());

    p.cleanup(&cluster);

    assert!(!storage.exists());
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].var("ANSIBLE_PRIVATE_KEY_FILE"),
        Some("/keys/demo")
    );
}

#[tokio::test]
async fn test_provider_failed_run_keeps_inventory_until_cleanup() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = config(&write_playbook(dir.path()));
    config.storage_path = Some(dir.path().join("inv").to_string_lossy().into_owned());
    let p = provider(&config, RecordingRunner::exiting(4));
    let cluster = demo_cluster("demo");

    assert!(!p.setup_cluster(&cluster).await.expect("setup"));
    assert!(dir.path().join("inv/ansible-inventory.demo").is_file());

    p.cleanup(&cluster);

    assert!(!dir.path().join("inv/ansible-inventory.demo").exists());
    assert!(dir.path().join("inv").is_dir());
}

#[tokio::test]
async fn test_provider_serves_several_clusters() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&write_playbook(dir.path()));
    let runner = RecordingRunner::exiting(0);
    let p = provider(&config, runner.clone());
    let a = demo_cluster("a");
    let b = demo_cluster("b");

    assert!(p.setup_cluster(&a).await.expect("a"));
    assert!(p.setup_cluster(&b).await.expect("b"));
    p.cleanup(&a);
    assert!(p.storage_path().join("ansible-inventory.b").is_file());
    p.cleanup(&b);

    assert!(!p.storage_path().exists());
    let inventories: Vec<_> = runner
        .calls()
        .iter()
        .map(|c| c.args[1].clone())
        .collect();
    assert!(inventories[0].ends_with("ansible-inventory.a"));
    assert!(inventories[1].ends_with("ansible-inventory.b"));
}

#[test]
fn test_provider_build_inventory_only() {
    let dir = TempDir::new().expect("tempdir");
    let mut config = config(&write_playbook(dir.path()));
    config.storage_path = Some(dir.path().to_string_lossy().into_owned());
    let runner = RecordingRunner::exiting(0);
    let p = provider(&config, runner.clone());

    let path = p
        .build_inventory(&demo_cluster("demo"))
        .expect("build")
        .expect("written");

    let content = std::fs::read_to_string(path).expect("read");
    assert_eq!(
        content,
        "\n[web]\nfrontend001 ansible_ssh_host=10.0.0.1 ansible_ssh_user=ubuntu\n\
         \n[worker]\ncompute001 ansible_ssh_host=10.0.0.2 ansible_ssh_user=ubuntu\n"
    );
    assert!(runner.calls().is_empty());
}

#[test]
fn test_provider_rejects_invalid_config() {
    let mut config = ProviderConfig::default();
    config
        .groups
        .insert("frontend".to_string(), vec!["web servers".to_string()]);

    let result = AnsibleSetupProvider::with_parts(
        &config,
        RecordingRunner::exiting(0),
        HostFs,
        FakeHost::new(),
        RecordingDiagnostics::new(),
    );

    assert!(result.is_err());
}

#[tokio::test]
async fn test_provider_noop_setup_releases_temporary_storage() {
    let dir = TempDir::new().expect("tempdir");
    let config: ProviderConfig = serde_yaml::from_str(&format!(
        "groups:\n  storage: [nfs]\nplaybook_path: {}\n",
        write_playbook(dir.path()).display()
    ))
    .expect("valid config");
    let runner = RecordingRunner::exiting(0);
    let p = provider(&config, runner.clone());
    let storage = p.storage_path().to_path_buf();
    let cluster = demo_cluster("demo");

    assert!(p.setup_cluster(&cluster).await.expect("setup"));
    p.cleanup(&cluster);
    assert!(storage.is_dir());
    p.release_storage();

    assert!(!storage.exists());
    assert!(runner.calls().is_empty());
}
