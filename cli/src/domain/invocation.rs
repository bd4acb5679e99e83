//! Command line and environment construction for `ansible-playbook`.
//!
//! Ansible uses the first configuration file it finds and never merges keys
//! across files; environment variables are the only channel that overrides
//! individual settings. The child environment is therefore modelled as
//! `base ⊕ overrides`, with override keys always winning.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::Path;

use tracing::level_filters::LevelFilter;

use crate::domain::settings::ProviderSettings;

/// Name of the playbook runner binary, resolved through `PATH`.
pub const ANSIBLE_PLAYBOOK: &str = "ansible-playbook";

/// Highest `-v` count passed on.
pub const MAX_VERBOSITY: u8 = 3;

/// Environment overrides applied on top of the inherited environment.
#[must_use]
pub fn ansible_env_overrides(
    settings: &ProviderSettings,
    private_key_file: &Path,
) -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();
    env.insert("ANSIBLE_FORKS".to_string(), settings.forks.to_string());
    env.insert("ANSIBLE_HOST_KEY_CHECKING".to_string(), "no".to_string());
    env.insert(
        "ANSIBLE_PRIVATE_KEY_FILE".to_string(),
        private_key_file.to_string_lossy().into_owned(),
    );
    env.insert(
        "ANSIBLE_SSH_PIPELINING".to_string(),
        yes_no(settings.ssh_pipelining).to_string(),
    );
    env.insert("ANSIBLE_TIMEOUT".to_string(), settings.timeout.to_string());
    if !settings.module_dirs.is_empty() {
        env.insert(
            "ANSIBLE_LIBRARY".to_string(),
            settings.module_dirs.join(":"),
        );
    }
    env
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// `base ⊕ overrides`: every override key replaces the inherited value.
///
/// The inherited side stays as raw OS strings so variables that are not
/// valid UTF-8 reach the child unchanged.
#[must_use]
pub fn merge_environment(
    mut base: BTreeMap<OsString, OsString>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<OsString, OsString> {
    base.extend(
        overrides
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v))),
    );
    base
}

/// Map the caller's log level to an Ansible `-v` count in `0..=3`.
///
/// Warnings-only (or quieter) gives no flag; each more verbose level adds one.
#[must_use]
pub fn ansible_verbosity(level: LevelFilter) -> u8 {
    let v = if level >= LevelFilter::TRACE {
        3
    } else if level >= LevelFilter::DEBUG {
        2
    } else if level >= LevelFilter::INFO {
        1
    } else {
        0
    };
    v.min(MAX_VERBOSITY)
}

/// Arguments following the binary name.
///
/// `<playbook> --inventory=<path> [--sudo --sudo-user=<user>] [-v...]`
#[must_use]
pub fn playbook_args(
    playbook: &Path,
    inventory: &Path,
    sudo_user: Option<&str>,
    verbosity: u8,
) -> Vec<String> {
    let mut args = vec![
        playbook.to_string_lossy().into_owned(),
        format!("--inventory={}", inventory.to_string_lossy()),
    ];
    if let Some(user) = sudo_user {
        args.push("--sudo".to_string());
        args.push(format!("--sudo-user={user}"));
    }
    let verbosity = verbosity.min(MAX_VERBOSITY);
    if verbosity > 0 {
        args.push(format!("-{}", "v".repeat(usize::from(verbosity))));
    }
    args
}
