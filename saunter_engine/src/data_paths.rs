use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that overrides data directory detection.
pub const DATA_DIR_VAR: &str = "SAUNTER_DATA";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    if let Some(dir) = env::var_os(DATA_DIR_VAR) {
        return PathBuf::from(dir);
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    candidate_roots(exe_dir.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("saunter_engine/data"))
}

/// Workspace layout first, then a flattened `data/`, then the same next to the executable.
fn candidate_roots(exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("saunter_engine/data"), PathBuf::from("data")];
    if let Some(dir) = exe_dir {
        candidates.push(dir.join("saunter_engine/data"));
        candidates.push(dir.join("data"));
        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("saunter_engine/data"));
            candidates.push(parent.join("data"));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_layout_is_tried_first() {
        let candidates = candidate_roots(Some(Path::new("/opt/saunter/bin")));
        assert_eq!(candidates[0], PathBuf::from("saunter_engine/data"));
        assert!(candidates.contains(&PathBuf::from("/opt/saunter/bin/data")));
        assert_eq!(candidates.last(), Some(&PathBuf::from("/opt/saunter/data")));
    }
}
