use directories::ProjectDirs;
use std::path::PathBuf;

/// Default per-user data directory for the collection record, following
/// platform conventions (e.g. `~/.local/share/cardbox` on Linux). `None`
/// when no home directory can be determined; hosts may always inject
/// their own root into [`crate::storage::fs::FileStore`] instead.
pub fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "cardbox", "cardbox").map(|dirs| dirs.data_dir().to_path_buf())
}
