//! Config file discovery.
//!
//! Searches upward from the current working directory for
//! `.fluxion/config.toml`. The first hit wins; reaching the filesystem
//! root without a hit means "no config file", which is not an error.

use std::path::PathBuf;

/// Walk upward from the current directory looking for
/// `.fluxion/config.toml`.
#[must_use]
pub fn discover_config_file() -> Option<PathBuf> {
    let start = std::env::current_dir().ok()?;
    discover_from(&start)
}

fn discover_from(start: &std::path::Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(".fluxion").join("config.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovers_in_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        let config_dir = root.path().join(".fluxion");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[llm]\n").unwrap();

        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let found = discover_from(&nested).expect("should find config upward");
        assert_eq!(found, config_dir.join("config.toml"));
    }

    #[test]
    fn test_no_config_returns_none() {
        let root = tempfile::tempdir().unwrap();
        assert!(discover_from(root.path()).is_none());
    }
}
