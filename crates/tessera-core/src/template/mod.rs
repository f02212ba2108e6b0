//! Template data model
//!
//! A template describes a folder/file layout: a repeated group that is
//! instantiated once per requested repetition, plus root files that are
//! written exactly once.

use crate::error::{Result, TesseraError};
use serde::{Deserialize, Serialize};

static EMPTY_GROUP: RepeatedGroup = RepeatedGroup {
    folder: String::new(),
    files: Vec::new(),
};

/// A single file in a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// File name without extension, may contain `$n` and path separators
    #[serde(default)]
    pub filename: String,
    /// Extension, stored without a leading dot
    #[serde(default)]
    pub ext: String,
    /// Content lines, joined with the template line separator
    #[serde(default)]
    pub data: Vec<String>,
}

impl File {
    pub fn new(filename: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ext: ext.into(),
            data: Vec::new(),
        }
    }

    /// Append content lines
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Joined file content, or `None` when the file has no lines
    ///
    /// The separator is used verbatim; no trailing separator is appended.
    pub fn content(&self, separator: &str) -> Option<String> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.join(separator))
        }
    }
}

/// The part of a template instantiated once per repetition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatedGroup {
    /// Folder pattern, may contain `$n`
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub files: Vec<File>,
}

impl RepeatedGroup {
    pub fn new(folder: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            files: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: File) -> Self {
        self.files.push(file);
        self
    }
}

/// A named, reusable folder/file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "description")]
    pub desc: String,
    /// Free-form language label, not interpreted
    #[serde(default)]
    pub lang: String,
    /// Literal separator placed between content lines when writing files
    #[serde(default)]
    pub endline_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeated: Option<RepeatedGroup>,
    #[serde(default)]
    pub root: Vec<File>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_endline(mut self, endline: impl Into<String>) -> Self {
        self.endline_format = endline.into();
        self
    }

    pub fn with_repeated(mut self, group: RepeatedGroup) -> Self {
        self.repeated = Some(group);
        self
    }

    pub fn with_root_file(mut self, file: File) -> Self {
        self.root.push(file);
        self
    }

    /// Repeated group, or an empty group when the template has none
    ///
    /// An absent group behaves as an empty folder pattern with no files.
    pub fn repeated_group(&self) -> &RepeatedGroup {
        self.repeated.as_ref().unwrap_or(&EMPTY_GROUP)
    }

    /// Check the template invariants
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TesseraError::TemplateInvalid(
                "template name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
