use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".quote_core";
const BUDGET_DIR: &str = "budgets";
const STATE_FILE: &str = "state.json";

/// Returns the application-specific data directory, defaulting to `~/.quote_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("QUOTE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding one JSON file per stored budget, inside the given root.
pub fn budgets_dir_in(root: &Path) -> PathBuf {
    root.join(BUDGET_DIR)
}

/// Path to the store state file (id allocator watermark) inside the given root.
pub fn state_file_in(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}

/// Creates the directory (and parents) if it does not exist yet.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
