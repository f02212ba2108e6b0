//! Template configuration fixtures
//!
//! Kept as JSON text so tests in every crate can parse them into their own
//! types.

/// Two templates: a repeated Go package layout and a root-only Python layout
pub const SAMPLE_CONFIG_JSON: &str = r#"{
  "path": "~/.config/tessera/tessera.json",
  "templates": [
    {
      "name": "go-packages",
      "description": "numbered go packages with a module file",
      "lang": "go",
      "endline_format": "\n",
      "repeated": {
        "folder": "pkg-$n",
        "files": [
          { "filename": "mod", "ext": "go", "data": ["package main"] }
        ]
      },
      "root": [
        { "filename": "go", "ext": "mod", "data": ["module example", "", "go 1.22"] }
      ]
    },
    {
      "name": "python-script",
      "description": "single python entry point",
      "lang": "python",
      "endline_format": "\\n",
      "root": [
        { "filename": "/main", "ext": ".py", "data": ["print('hi')"] }
      ]
    }
  ]
}"#;

/// Advent-of-code style layout with nested, index-expanded file names
pub const NESTED_TEMPLATE_JSON: &str = r##"{
  "name": "aoc",
  "description": "one folder per day",
  "lang": "rust",
  "endline_format": "\n",
  "repeated": {
    "folder": "day-$n",
    "files": [
      { "filename": "src/part$n", "ext": "rs", "data": ["fn main() {", "}"] },
      { "filename": "input", "ext": "txt", "data": [] }
    ]
  },
  "root": [
    { "filename": "README", "ext": "md", "data": ["# Advent"] }
  ]
}"##;

/// Write [`SAMPLE_CONFIG_JSON`] to `path`, creating parent directories
pub fn write_sample_config(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, SAMPLE_CONFIG_JSON)
}
