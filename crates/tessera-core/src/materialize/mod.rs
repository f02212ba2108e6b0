//! Template materialization
//!
//! Walks a template and a repetition count and writes the layout to disk,
//! reporting one [`ProgressEvent`] per created file. The first filesystem
//! error aborts the run; whatever was created before it stays on disk.

mod event;

pub use event::{ProgressEvent, ProgressSink};

use crate::error::{Result, TesseraError};
use crate::path::{expand, repeated_file_path, root_file_path};
use crate::template::{File, Template};
use std::fs::{self, DirBuilder};
use std::io::Write;
use std::path::Path;

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;

/// Materialize `template` in the current working directory
///
/// # Errors
///
/// Returns error if the working directory cannot be resolved or any
/// directory/file operation fails. The error is also reported to `sink`
/// as a final [`ProgressEvent::Failed`].
pub fn materialize<S: ProgressSink + ?Sized>(
    template: &Template,
    repetitions: usize,
    sink: &mut S,
) -> Result<()> {
    let base = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            let err = TesseraError::CurrentDirUnavailable(e);
            sink.emit(ProgressEvent::Failed {
                message: err.to_string(),
            });
            return Err(err);
        }
    };
    materialize_in(template, repetitions, &base, sink)
}

/// Materialize `template` relative to `base`
///
/// Order of work:
/// 1. Start event
/// 2. For each repetition `1..=repetitions`: folder, then its files in declared order
/// 3. Root files in declared order
///
/// Created file paths are reported relative to `base`.
pub fn materialize_in<S: ProgressSink + ?Sized>(
    template: &Template,
    repetitions: usize,
    base: &Path,
    sink: &mut S,
) -> Result<()> {
    sink.emit(ProgressEvent::Started {
        dir: base.to_path_buf(),
        repetitions,
    });
    tracing::info!(
        template = %template.name,
        repetitions,
        base = %base.display(),
        "materializing template"
    );

    let result = write_layout(template, repetitions, base, sink);
    match &result {
        Ok(()) => tracing::info!(template = %template.name, "template materialized"),
        Err(e) => {
            tracing::error!(template = %template.name, error = %e, "materialization aborted");
            sink.emit(ProgressEvent::Failed {
                message: e.to_string(),
            });
        }
    }
    result
}

fn write_layout<S: ProgressSink + ?Sized>(
    template: &Template,
    repetitions: usize,
    base: &Path,
    sink: &mut S,
) -> Result<()> {
    let group = template.repeated_group();
    if template.repeated.is_none() && repetitions > 0 {
        // Kept for compatibility: the loop still runs and creates the base dir.
        tracing::warn!(
            template = %template.name,
            repetitions,
            "template has no repeated group; repetitions only touch the base directory"
        );
    }

    for index in 1..=repetitions {
        let folder = expand(&group.folder, index);
        create_dir_all(&base.join(&folder))?;
        tracing::debug!(folder = %folder, index, "created repeated folder");

        for file in &group.files {
            let relative = repeated_file_path(&folder, file, index);
            write_file(base, &relative, file, &template.endline_format)?;
            sink.emit(ProgressEvent::CreatedFile { path: relative });
        }
    }

    for file in &template.root {
        let relative = root_file_path(file);
        write_file(base, &relative, file, &template.endline_format)?;
        sink.emit(ProgressEvent::CreatedFile { path: relative });
    }

    Ok(())
}

/// Create (or truncate) one file, creating missing ancestors first
fn write_file(base: &Path, relative: &Path, file: &File, separator: &str) -> Result<()> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }

    let mut handle = fs::File::create(&path).map_err(|source| TesseraError::FileCreate {
        path: path.clone(),
        source,
    })?;

    if let Some(content) = file.content(separator) {
        handle
            .write_all(content.as_bytes())
            .map_err(|source| TesseraError::FileWrite {
                path: path.clone(),
                source,
            })?;
    }

    tracing::debug!(path = %relative.display(), "created file");
    Ok(())
}

fn create_dir_all(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(path)
        .map_err(|source| TesseraError::DirCreate {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tessera_testkit::{list_tree, temp_dir_in_workspace};

    fn go_template() -> Template {
        Template::new("go")
            .with_endline("\n")
            .with_repeated(
                crate::template::RepeatedGroup::new("pkg-$n")
                    .with_file(File::new("mod", "go").with_lines(["package main"])),
            )
    }

    #[test]
    fn test_creates_one_folder_per_repetition() {
        let temp = temp_dir_in_workspace();
        let mut events = Vec::new();

        materialize_in(&go_template(), 3, temp.path(), &mut events).unwrap();

        for i in 1..=3 {
            let path = temp.path().join(format!("pkg-{i}/mod.go"));
            assert_eq!(fs::read_to_string(path).unwrap(), "package main");
        }
        assert_eq!(
            list_tree(temp.path()),
            vec![
                "pkg-1",
                "pkg-1/mod.go",
                "pkg-2",
                "pkg-2/mod.go",
                "pkg-3",
                "pkg-3/mod.go",
            ]
        );
    }

    #[test]
    fn test_event_order() {
        let temp = temp_dir_in_workspace();
        let template = go_template()
            .with_root_file(File::new("go", "mod"))
            .with_root_file(File::new("README", "md"));
        let mut events = Vec::new();

        materialize_in(&template, 2, temp.path(), &mut events).unwrap();

        let rendered: Vec<String> = events.iter().skip(1).map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                format!(
                    "created file: {}",
                    Path::new("pkg-1").join("mod.go").display()
                ),
                format!(
                    "created file: {}",
                    Path::new("pkg-2").join("mod.go").display()
                ),
                "created file: go.mod".to_string(),
                "created file: README.md".to_string(),
            ]
        );
        assert_eq!(
            events[0],
            ProgressEvent::Started {
                dir: temp.path().to_path_buf(),
                repetitions: 2,
            }
        );
    }

    #[test]
    fn test_zero_repetitions_only_writes_root_files() {
        let temp = temp_dir_in_workspace();
        let template = go_template().with_root_file(File::new("go", "mod"));
        let mut events = Vec::new();

        materialize_in(&template, 0, temp.path(), &mut events).unwrap();

        assert_eq!(list_tree(temp.path()), vec!["go.mod"]);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_zero_repetitions_without_root_emits_only_start() {
        let temp = temp_dir_in_workspace();
        let mut events = Vec::new();

        materialize_in(&go_template(), 0, temp.path(), &mut events).unwrap();

        assert!(list_tree(temp.path()).is_empty());
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], ProgressEvent::Started { .. }));
    }

    #[test]
    fn test_multi_line_content_joined_without_terminator() {
        let temp = temp_dir_in_workspace();
        let template = Template::new("lines")
            .with_endline("\n")
            .with_root_file(File::new("ab", "txt").with_lines(["a", "b"]));

        materialize_in(&template, 1, temp.path(), &mut Vec::new()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("ab.txt")).unwrap(),
            "a\nb"
        );
    }

    #[test]
    fn test_separator_written_verbatim() {
        let temp = temp_dir_in_workspace();
        let template = Template::new("raw")
            .with_endline("\\n")
            .with_root_file(File::new("raw", "txt").with_lines(["a", "b"]));

        materialize_in(&template, 0, temp.path(), &mut Vec::new()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("raw.txt")).unwrap(),
            "a\\nb"
        );
    }

    #[test]
    fn test_empty_data_creates_empty_file() {
        let temp = temp_dir_in_workspace();
        let template = Template::new("empty").with_root_file(File::new("blank", "txt"));

        materialize_in(&template, 0, temp.path(), &mut Vec::new()).unwrap();

        let meta = fs::metadata(temp.path().join("blank.txt")).unwrap();
        assert_eq!(meta.len(), 0);
    }

    #[test]
    fn test_existing_file_is_truncated() {
        let temp = temp_dir_in_workspace();
        fs::write(temp.path().join("notes.md"), "old content that is long").unwrap();
        let template = Template::new("t")
            .with_root_file(File::new("notes", "md").with_lines(["new"]));

        materialize_in(&template, 0, temp.path(), &mut Vec::new()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("notes.md")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_nested_filenames_create_ancestors() {
        let temp = temp_dir_in_workspace();
        let template = Template::new("nested")
            .with_repeated(
                crate::template::RepeatedGroup::new("day$n")
                    .with_file(File::new("/src/part$n", ".rs")),
            )
            .with_root_file(File::new("/docs/index", "md"));

        materialize_in(&template, 2, temp.path(), &mut Vec::new()).unwrap();

        assert!(temp.path().join("day1/src/part1.rs").is_file());
        assert!(temp.path().join("day2/src/part2.rs").is_file());
        assert!(temp.path().join("docs/index.md").is_file());
    }

    #[test]
    fn test_empty_extension_keeps_trailing_dot() {
        let temp = temp_dir_in_workspace();
        let template = Template::new("make").with_root_file(File::new("Makefile", ""));

        materialize_in(&template, 0, temp.path(), &mut Vec::new()).unwrap();

        assert!(temp.path().join("Makefile.").is_file());
    }

    #[test]
    fn test_missing_repeated_group_loops_without_writing() {
        let temp = temp_dir_in_workspace();
        let template = Template::new("root-only").with_root_file(File::new("main", "py"));
        let mut events = Vec::new();

        materialize_in(&template, 3, temp.path(), &mut events).unwrap();

        assert_eq!(list_tree(temp.path()), vec!["main.py"]);
        assert_eq!(
            events.last(),
            Some(&ProgressEvent::CreatedFile {
                path: PathBuf::from("main.py"),
            })
        );
    }

    #[test]
    fn test_failure_on_second_repetition_keeps_first() {
        let temp = temp_dir_in_workspace();
        // A regular file where pkg-2/ must be created blocks the second repetition.
        fs::write(temp.path().join("pkg-2"), "blocker").unwrap();
        let template = go_template().with_root_file(File::new("go", "mod"));
        let mut events = Vec::new();

        let result = materialize_in(&template, 3, temp.path(), &mut events);

        assert!(matches!(result, Err(TesseraError::DirCreate { .. })));
        assert!(temp.path().join("pkg-1/mod.go").is_file());
        assert!(!temp.path().join("pkg-3").exists());
        assert!(!temp.path().join("go.mod").exists());

        let last = events.last().unwrap().to_string();
        assert!(last.starts_with("Error: DIR_CREATE_FAILED"));
        let created = events
            .iter()
            .filter(|e| matches!(e, ProgressEvent::CreatedFile { .. }))
            .count();
        assert_eq!(created, 1);
    }

    #[test]
    fn test_file_create_failure_halts_remaining_files() {
        let temp = temp_dir_in_workspace();
        // A directory occupying the target file path makes File::create fail.
        fs::create_dir_all(temp.path().join("pkg-2/a.txt")).unwrap();
        let template = Template::new("multi").with_repeated(
            crate::template::RepeatedGroup::new("pkg-$n")
                .with_file(File::new("a", "txt"))
                .with_file(File::new("b", "txt")),
        );
        let mut events = Vec::new();

        let result = materialize_in(&template, 3, temp.path(), &mut events);

        assert!(matches!(result, Err(TesseraError::FileCreate { .. })));
        assert!(temp.path().join("pkg-1/a.txt").is_file());
        assert!(temp.path().join("pkg-1/b.txt").is_file());
        assert!(!temp.path().join("pkg-2/b.txt").exists());
        assert!(!temp.path().join("pkg-3").exists());
    }
}
