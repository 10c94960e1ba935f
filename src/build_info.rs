//! Build-time information
//!
//! Metadata captured by the build script: compiler, target, optimization level
//! and, when building from a git checkout, the commit.

/// Build timestamp (when the binary was compiled)
pub const BUILD_TIMESTAMP: &str = env!("VERGEN_BUILD_TIMESTAMP");

/// Cargo optimization level (0, 1, 2, 3, s, z)
pub const CARGO_OPT_LEVEL: &str = env!("VERGEN_CARGO_OPT_LEVEL");

/// Target triple (e.g., x86_64-unknown-linux-gnu)
pub const CARGO_TARGET_TRIPLE: &str = env!("VERGEN_CARGO_TARGET_TRIPLE");

pub const RUSTC_SEMVER: &str = env!("VERGEN_RUSTC_SEMVER");

/// Rust channel (stable, beta, or nightly)
pub const RUSTC_CHANNEL: &str = env!("VERGEN_RUSTC_CHANNEL");

/// Git values are absent when building outside a checkout
pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");
pub const GIT_BRANCH: Option<&str> = option_env!("VERGEN_GIT_BRANCH");
pub const GIT_COMMIT_TIMESTAMP: Option<&str> = option_env!("VERGEN_GIT_COMMIT_TIMESTAMP");
const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

/// First 7 characters of the commit SHA, or "unknown"
pub fn git_sha_short() -> &'static str {
    match GIT_SHA {
        Some(sha) => sha.get(..7).unwrap_or(sha),
        None => "unknown",
    }
}

pub fn is_git_dirty() -> bool {
    GIT_DIRTY == Some("true")
}

/// Returns a formatted build version string
///
/// Format: `{package_version}+{sha}-{target_triple}-opt{opt_level}`
pub fn version_string() -> String {
    format!(
        "{}+{}-{}-opt{}",
        env!("CARGO_PKG_VERSION"),
        git_sha_short(),
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL
    )
}

/// Multi-line build summary for `--version` style output and logs
pub fn detailed_info() -> String {
    format!(
        "Version: {}\nGit: {}@{}{}\nBuilt: {}\nTarget: {}\nOptimization: {}\nRustc: {} ({})",
        env!("CARGO_PKG_VERSION"),
        GIT_BRANCH.unwrap_or("unknown"),
        git_sha_short(),
        if is_git_dirty() { " (dirty)" } else { "" },
        BUILD_TIMESTAMP,
        CARGO_TARGET_TRIPLE,
        CARGO_OPT_LEVEL,
        RUSTC_SEMVER,
        RUSTC_CHANNEL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha_is_bounded() {
        assert!(git_sha_short().len() <= 7);
    }

    #[test]
    fn test_version_string_names_target() {
        assert!(version_string().contains(CARGO_TARGET_TRIPLE));
        assert!(version_string().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
