//! Test utilities for tessera
//!
//! This crate provides shared testing utilities used across the tessera workspace.

pub mod fixtures;

use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps every test sandbox in a single gitignored location.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use tessera_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    let workspace_root = std::env::current_dir().expect("Failed to get current directory");

    let tmp_base = workspace_root.join(".tmp");

    // Ensure .tmp/ exists
    std::fs::create_dir_all(&tmp_base).expect("Failed to create .tmp directory");

    TempDir::new_in(&tmp_base).expect("Failed to create temporary directory in .tmp/")
}

/// Run `f` with `HOME` pointing at a fresh temporary directory
///
/// Tests that resolve the default config location (`~/.config/tessera`)
/// use this so they never touch the real home directory. The previous
/// value is restored afterwards and `ENV_LOCK` serializes callers.
///
/// ```no_run
/// use tessera_testkit::with_isolated_home;
///
/// with_isolated_home(|home| {
///     assert!(!home.join(".config").exists());
/// });
/// ```
pub fn with_isolated_home<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let original_home = std::env::var("HOME").ok();
    let original_config = std::env::var("TESSERA_CONFIG").ok();
    let fake_home = TempDir::new().expect("Failed to create isolated home");

    // SAFETY: ENV_LOCK is held, so no other test mutates the environment concurrently.
    unsafe {
        std::env::set_var("HOME", fake_home.path());
        std::env::remove_var("TESSERA_CONFIG");
    }

    let result = f(fake_home.path());

    // SAFETY: ENV_LOCK is still held.
    unsafe {
        match original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
        if let Some(config) = original_config {
            std::env::set_var("TESSERA_CONFIG", config);
        }
    }

    result
}

/// Sorted relative paths of every entry below `root`, using `/` separators
///
/// `root` itself is not included.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter_map(|entry| {
            entry.path().strip_prefix(root).ok().map(|rel| {
                rel.components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
        })
        .collect();
    entries.sort();
    entries
}
