use std::path::{Path, PathBuf};

use crate::env::EnvSnapshot;

/// Dotfile read before the check, looked up from the working directory upwards.
pub const DEFAULT_ENV_FILE: &str = ".env.local";

/// Find [`DEFAULT_ENV_FILE`] in `start` or the nearest ancestor that has one.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DEFAULT_ENV_FILE))
        .find(|candidate| candidate.is_file())
}

/// The dotfile to load when none was given explicitly.
///
/// Falls back to the bare file name, which will simply be skipped.
pub fn resolve_env_file(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| {
            let cwd = std::env::current_dir().ok()?;
            find_env_file(&cwd)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read. `added` keys were new, `kept` were already set.
    Loaded { added: usize, kept: usize },
    /// The file is absent or unreadable; nothing was loaded.
    Skipped,
}

/// Merge `KEY=VALUE` pairs from `path` into `env`.
///
/// Keys already present in `env` keep their value. A missing or unreadable
/// file is not an error, and malformed lines are skipped.
pub fn load(path: &Path, env: &mut EnvSnapshot) -> LoadOutcome {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) => {
            log::debug!("Not loading {}: {}", path.display(), e);
            return LoadOutcome::Skipped;
        }
    };

    let (mut added, mut kept) = (0, 0);
    for item in iter {
        match item {
            Ok((key, value)) => {
                if env.insert_if_absent(key, value) {
                    added += 1;
                } else {
                    kept += 1;
                }
            }
            Err(e) => log::warn!("Skipping malformed line in {}: {}", path.display(), e),
        }
    }

    log::debug!(
        "Loaded {}: {} added, {} already set",
        path.display(),
        added,
        kept
    );
    LoadOutcome::Loaded { added, kept }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn finds_env_file_in_ancestor() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("scripts").join("tickets");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(DEFAULT_ENV_FILE), "A=x\n").unwrap();

        assert_eq!(
            find_env_file(&nested),
            Some(root.path().join(DEFAULT_ENV_FILE))
        );
    }

    #[test]
    fn nearest_env_file_wins() {
        let root = tempfile::tempdir().unwrap();
        let scripts = root.path().join("scripts");
        std::fs::create_dir_all(&scripts).unwrap();
        std::fs::write(root.path().join(DEFAULT_ENV_FILE), "A=x\n").unwrap();
        std::fs::write(scripts.join(DEFAULT_ENV_FILE), "A=y\n").unwrap();

        assert_eq!(find_env_file(&scripts), Some(scripts.join(DEFAULT_ENV_FILE)));
    }

    #[test]
    fn directory_named_like_env_file_is_ignored() {
        let root = tempfile::tempdir().unwrap();
        let scripts = root.path().join("scripts");
        std::fs::create_dir_all(scripts.join(DEFAULT_ENV_FILE)).unwrap();
        std::fs::write(root.path().join(DEFAULT_ENV_FILE), "A=x\n").unwrap();

        assert_eq!(find_env_file(&scripts), Some(root.path().join(DEFAULT_ENV_FILE)));
    }

    #[test]
    fn explicit_env_file_is_used_as_is() {
        let path = PathBuf::from("/nonexistent/support.env");
        assert_eq!(resolve_env_file(Some(path.clone())), path);
    }

    #[test]
    fn missing_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut env: EnvSnapshot = [("A", "x")].into_iter().collect();
        let before = env.clone();

        let outcome = load(&dir.path().join(DEFAULT_ENV_FILE), &mut env);

        assert_eq!(outcome, LoadOutcome::Skipped);
        assert_eq!(env, before);
    }

    #[test]
    fn loads_pairs_and_ignores_comments() {
        let file = env_file("# support keys\n\nSUPPORT_API_KEY=sk_123\nBILLING_API_KEY=\"bk 456\"\n");
        let mut env = EnvSnapshot::default();

        let outcome = load(file.path(), &mut env);

        assert_eq!(outcome, LoadOutcome::Loaded { added: 2, kept: 0 });
        assert_eq!(env.get("SUPPORT_API_KEY"), Some("sk_123"));
        assert_eq!(env.get("BILLING_API_KEY"), Some("bk 456"));
    }

    #[test]
    fn never_overrides_existing_keys() {
        let file = env_file("A=from_file\nB=from_file\nC=from_file\n");
        let mut env: EnvSnapshot = [("A", "from_shell"), ("B", "")].into_iter().collect();

        let outcome = load(file.path(), &mut env);

        assert_eq!(outcome, LoadOutcome::Loaded { added: 1, kept: 2 });
        assert_eq!(env.get("A"), Some("from_shell"));
        assert_eq!(env.get("B"), Some(""));
        assert_eq!(env.get("C"), Some("from_file"));
    }
}
