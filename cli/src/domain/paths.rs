//! Path expansion and naming rules.
//!
//! Pure string/path manipulation — callers supply the home directory and a
//! variable lookup, so nothing here reads the process environment.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Suffix every inventory file name starts with.
pub const INVENTORY_FILE_ENDING: &str = "ansible-inventory";

/// Location of the bundled playbook, relative to the installation prefix.
pub const DEFAULT_PLAYBOOK: &str = "share/ansible-setup/providers/ansible-playbooks/site.yml";

/// Separators accepted between module directories: `,` or `:` with optional
/// surrounding whitespace.
#[allow(clippy::expect_used)]
static PATH_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[,:]\s*").expect("valid regex"));

/// `$NAME` or `${NAME}` references.
#[allow(clippy::expect_used)]
static VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+|\{[^}]*\})").expect("valid regex"));

/// File name of the inventory generated for `cluster_name`.
#[must_use]
pub fn inventory_file_name(cluster_name: &str) -> String {
    format!("{INVENTORY_FILE_ENDING}.{cluster_name}")
}

/// Playbook used when none is configured.
#[must_use]
pub fn default_playbook_path(prefix: &Path) -> PathBuf {
    prefix.join(DEFAULT_PLAYBOOK)
}

/// Split a comma- or colon-separated module directory list.
///
/// Entries are trimmed and empty entries dropped; `None` yields an empty list.
#[must_use]
pub fn split_module_dirs(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    PATH_SPLIT_RE
        .split(raw)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace a leading `~` (alone or followed by `/`) with `home`.
///
/// `~user` forms and inputs without a leading tilde are returned unchanged,
/// as is everything when no home directory is known.
#[must_use]
pub fn expand_user(input: &str, home: Option<&Path>) -> String {
    match (input.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.to_string_lossy().into_owned(),
        (Some(rest), Some(home)) if rest.starts_with('/') => {
            format!("{}{rest}", home.to_string_lossy().trim_end_matches('/'))
        }
        _ => input.to_string(),
    }
}

/// Substitute `$NAME` and `${NAME}` using `lookup`.
///
/// References to unknown variables are left untouched.
pub fn expand_vars(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    VAR_RE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let raw = &caps[1];
            let name = raw
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
                .unwrap_or(raw);
            lookup(name).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// User expansion followed by variable expansion, made absolute against `cwd`.
pub fn expand_path(
    input: &str,
    home: Option<&Path>,
    cwd: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    let expanded = PathBuf::from(expand_vars(&expand_user(input, home), lookup));
    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}
