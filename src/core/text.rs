//! Small string helpers shared by the command modules.

/// Number of characters shown for an abbreviated commit id
pub const SHORT_HASH_LEN: usize = 7;

/// Abbreviate a commit id for display. Missing ids render as an empty string.
pub fn short_hash(commit: Option<&str>) -> String {
    match commit {
        Some(id) => id.chars().take(SHORT_HASH_LEN).collect(),
        None => String::new(),
    }
}

/// Split `"remote/branch"` on the first `/`.
///
/// Branch names may themselves contain slashes, so `"a/b/c"` yields
/// `("a", "b/c")`. Returns `None` when either segment would be empty.
pub fn remote_branch_segments(full_name: &str) -> Option<(&str, &str)> {
    match full_name.split_once('/') {
        Some((remote, branch)) if !remote.is_empty() && !branch.is_empty() => {
            Some((remote, branch))
        }
        _ => None,
    }
}

/// Fully qualified local branch ref
pub fn branch_ref(branch: &str) -> String {
    format!("refs/heads/{branch}")
}
