//! Inventory document model and its INI rendering.
//!
//! The document is rebuilt on every setup; nothing here is cached.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// The facts about one node the inventory needs.
#[derive(Debug, Clone, Copy)]
pub struct HostFacts<'a> {
    pub kind: &'a str,
    pub name: &'a str,
    /// Preferred reachable address; `None` while unassigned.
    pub address: Option<&'a str>,
    pub login_user: &'a str,
}

/// One `<name> ansible_ssh_host=<address> <vars>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEntry {
    pub name: String,
    pub address: String,
    /// Space-separated `key=value` pairs, starting with `ansible_ssh_user`.
    pub vars: String,
}

/// Group name → hosts, in the order nodes were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryDocument {
    groups: BTreeMap<String, Vec<HostEntry>>,
}

impl InventoryDocument {
    /// `true` when no node matched any configured group.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Append a host to `group`, creating the group on first use.
    pub fn add_host(&mut self, group: &str, entry: HostEntry) {
        self.groups.entry(group.to_string()).or_default().push(entry);
    }

    /// Hosts of a group, if the group exists.
    #[must_use]
    pub fn hosts(&self, group: &str) -> Option<&[HostEntry]> {
        self.groups.get(group).map(Vec::as_slice)
    }

    /// Group names present in the document.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Render in the Ansible INI inventory format: a blank line, a
    /// `[group]` header, then one line per host, for every group.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (group, hosts) in &self.groups {
            let _ = write!(out, "\n[{group}]\n");
            for host in hosts {
                let _ = writeln!(
                    out,
                    "{} ansible_ssh_host={} {}",
                    host.name, host.address, host.vars
                );
            }
        }
        out
    }
}

/// Group `nodes` by configured role.
///
/// Nodes whose kind has no entry in `groups` are skipped. Each matching node
/// gets `ansible_ssh_user=<login user>` followed by the per-kind variables
/// from `environment`, and is added once to every group of its kind.
pub fn build_document<'a>(
    nodes: impl IntoIterator<Item = HostFacts<'a>>,
    groups: &BTreeMap<String, Vec<String>>,
    environment: &BTreeMap<String, BTreeMap<String, String>>,
) -> InventoryDocument {
    let mut doc = InventoryDocument::default();
    for node in nodes {
        let Some(node_groups) = groups.get(node.kind) else {
            continue;
        };

        let mut vars = vec![format!("ansible_ssh_user={}", node.login_user)];
        if let Some(extra) = environment.get(node.kind) {
            vars.extend(extra.iter().map(|(k, v)| format!("{k}={v}")));
        }
        let vars = vars.join(" ");

        for group in node_groups {
            doc.add_host(
                group,
                HostEntry {
                    name: node.name.to_string(),
                    address: node.address.unwrap_or_default().to_string(),
                    vars: vars.clone(),
                },
            );
        }
    }
    doc
}
