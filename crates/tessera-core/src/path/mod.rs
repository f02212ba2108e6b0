//! Placeholder expansion and file path composition
//!
//! The only placeholder is the literal token `$n`, replaced by the
//! 1-based repetition index. Composition rules:
//!
//! 1. Expand `$n` in the filename (repeated-group files only)
//! 2. Strip a single leading path separator from the filename
//! 3. Strip a single leading `.` from the extension
//! 4. Name = `filename + "." + extension` (an empty extension keeps the dot)
//! 5. Join with the expanded containing folder
//!
//! ```rust
//! use tessera_core::path::{compose_file_name, expand};
//!
//! assert_eq!(expand("pkg-$n", 3), "pkg-3");
//! assert_eq!(compose_file_name("/main", ".go"), "main.go");
//! ```

use crate::template::File;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Placeholder replaced by the repetition index
pub const INDEX_TOKEN: &str = "$n";

/// Replace every `$n` in `pattern` with `index`
pub fn expand(pattern: &str, index: usize) -> String {
    pattern.replace(INDEX_TOKEN, &index.to_string())
}

/// Remove one leading path separator, if present
pub fn strip_leading_separator(filename: &str) -> &str {
    filename
        .strip_prefix(|c: char| c == '/' || c == MAIN_SEPARATOR)
        .unwrap_or(filename)
}

/// Remove one leading dot, if present
pub fn strip_leading_dot(ext: &str) -> &str {
    ext.strip_prefix('.').unwrap_or(ext)
}

/// Final file name for a raw filename and extension
pub fn compose_file_name(filename: &str, ext: &str) -> String {
    format!(
        "{}.{}",
        strip_leading_separator(filename),
        strip_leading_dot(ext)
    )
}

/// Path of a repeated-group file for repetition `index`, relative to the base directory
///
/// `folder` is the already expanded folder pattern.
pub fn repeated_file_path(folder: &str, file: &File, index: usize) -> PathBuf {
    let filename = expand(&file.filename, index);
    Path::new(folder).join(compose_file_name(&filename, &file.ext))
}

/// Path of a root file, relative to the base directory
///
/// Root files are never index-expanded.
pub fn root_file_path(file: &File) -> PathBuf {
    PathBuf::from(compose_file_name(&file.filename, &file.ext))
}
