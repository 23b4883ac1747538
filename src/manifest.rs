//! # Manifest Parsing
//!
//! The CLI reconciles the files declared in a YAML manifest,
//! `.file-updater.yaml` by default, stored in the workspace root. The
//! manifest is a list of rules; each rule names a `path` and exactly one
//! source of expected content:
//!
//! ```yaml
//! - path: README.md
//!   text: |
//!     # Generated
//! - path: tsconfig.json
//!   json:
//!     compilerOptions:
//!       strict: true
//! - path: LICENSE
//!   copy: templates/LICENSE
//! - path: legacy.cfg
//!   absent: true
//! ```
//!
//! - `text`: the file must contain exactly this string.
//! - `json`: the file must be JSON equal to this value, keys in the same
//!   order; it is written with 4-space indentation.
//! - `copy`: the file must match the current text of another workspace file.
//! - `absent: true`: the file must not exist.
//!
//! When the same `path` appears more than once, the last rule wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use serde_yaml::{Mapping, Value};

use crate::defaults;
use crate::error::{Error, Result};
use crate::files::{Entry, FileSet};
use crate::filesystem;
use crate::path;
use crate::strategy::{json, text, FileContext, Strategy};

/// Where the expected content of a rule comes from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Text(String),
    Json(JsonValue),
    Copy(String),
    Absent,
}

/// One manifest rule
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Path relative to the workspace root
    pub path: String,
    pub source: Source,
}

/// A parsed manifest, rules in declaration order
pub type Manifest = Vec<Rule>;

const SOURCE_KEYS: &[&str] = &["text", "json", "copy", "absent"];

fn manifest_error(message: impl Into<String>, hint: Option<&str>) -> Error {
    Error::Manifest {
        message: message.into(),
        hint: hint.map(str::to_string),
    }
}

/// Parse a manifest from a YAML string.
///
/// An empty document is an empty manifest.
pub fn parse(yaml_content: &str) -> Result<Manifest> {
    if yaml_content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let raw: Value = serde_yaml::from_str(yaml_content)?;
    let items = match raw {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(items) => items,
        _ => {
            return Err(manifest_error(
                "Expected a list of rules",
                Some("Start each rule with '- path: <file>'"),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Mapping(map) => parse_rule(index + 1, map),
            _ => Err(manifest_error(
                format!("Rule {} is not a mapping", index + 1),
                Some("Start each rule with '- path: <file>'"),
            )),
        })
        .collect()
}

fn parse_rule(number: usize, map: Mapping) -> Result<Rule> {
    let mut path = None;
    let mut source = None;

    for (key, value) in map {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(manifest_error(
                    format!("Rule {} has a non-string key: {:?}", number, other),
                    None,
                ))
            }
        };

        if key == "path" {
            match value {
                Value::String(p) if !p.trim().is_empty() => path = Some(p),
                _ => {
                    return Err(manifest_error(
                        format!("Rule {} has an empty or non-string 'path'", number),
                        None,
                    ))
                }
            }
            continue;
        }

        if !SOURCE_KEYS.contains(&key.as_str()) {
            return Err(manifest_error(
                format!("Rule {} has unknown key '{}'", number, key),
                Some("Use one of 'text', 'json', 'copy' or 'absent'"),
            ));
        }
        if source.is_some() {
            return Err(manifest_error(
                format!("Rule {} declares more than one content source", number),
                Some("Keep exactly one of 'text', 'json', 'copy' or 'absent'"),
            ));
        }
        source = Some(parse_source(number, &key, value)?);
    }

    let path = path.ok_or_else(|| {
        manifest_error(
            format!("Rule {} is missing 'path'", number),
            Some("Add 'path: <file relative to the workspace root>'"),
        )
    })?;
    let source = source.ok_or_else(|| {
        manifest_error(
            format!("Rule {} ('{}') has no content source", number, path),
            Some("Add one of 'text', 'json', 'copy' or 'absent'"),
        )
    })?;

    Ok(Rule { path, source })
}

fn parse_source(number: usize, key: &str, value: Value) -> Result<Source> {
    match key {
        "text" => match value {
            Value::String(s) => Ok(Source::Text(s)),
            _ => Err(manifest_error(
                format!("Rule {}: 'text' must be a string", number),
                Some("Quote the value or use a '|' block"),
            )),
        },
        "json" => serde_yaml::from_value::<JsonValue>(value)
            .map(Source::Json)
            .map_err(|e| manifest_error(format!("Rule {}: invalid 'json' value: {}", number, e), None)),
        "copy" => match value {
            Value::String(s) if !s.trim().is_empty() => Ok(Source::Copy(s)),
            _ => Err(manifest_error(
                format!("Rule {}: 'copy' must name a file", number),
                None,
            )),
        },
        _ => match value {
            Value::Bool(true) => Ok(Source::Absent),
            _ => Err(manifest_error(
                format!("Rule {}: 'absent' only accepts 'true'", number),
                Some("Remove the rule if the file may exist"),
            )),
        },
    }
}

/// Read and parse a manifest file
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}

/// Find the manifest for `root`.
///
/// `manifest` overrides the default file name and is resolved against the
/// workspace root when relative.
pub fn locate(root: &Path, manifest: Option<&Path>) -> Result<PathBuf> {
    let name = manifest.unwrap_or_else(|| Path::new(defaults::MANIFEST_FILE));
    let candidate = root.join(name);
    if candidate.is_file() {
        return Ok(candidate);
    }

    Err(Error::EntryNotFound {
        file: name.display().to_string().replace('\\', "/"),
        dir: root.to_path_buf(),
    })
}

/// Expected content taken from another file of the workspace
#[derive(Debug, Clone)]
pub struct CopyStrategy {
    source: PathBuf,
    label: String,
}

impl CopyStrategy {
    pub fn new(root: &Path, source: &str) -> Self {
        let resolved = path::resolve(root, source);
        let label = path::display_path(root, &resolved);
        Self {
            source: resolved,
            label,
        }
    }
}

#[async_trait]
impl Strategy for CopyStrategy {
    type Content = String;

    async fn read(&self, path: &Path) -> Result<String> {
        filesystem::read_text(path).await
    }

    async fn update(&self, _actual: Option<String>, _ctx: &FileContext) -> Result<Option<String>> {
        if !filesystem::exists(&self.source).await? {
            return Err(manifest_error(
                format!("copy source '{}' does not exist", self.label),
                None,
            ));
        }
        filesystem::read_text(&self.source).await.map(Some)
    }

    async fn equal(&self, expected: &String, actual: &String) -> Result<bool> {
        Ok(expected == actual)
    }

    async fn write(&self, path: &Path, expected: &String) -> Result<()> {
        filesystem::write_text(path, expected).await
    }
}

/// Turn manifest rules into the file set the engine runs.
pub fn to_file_set(root: &Path, manifest: &[Rule]) -> FileSet {
    let mut files = FileSet::new();
    for rule in manifest {
        let entry: Entry = match &rule.source {
            Source::Text(content) => {
                let content = content.clone();
                text(move |_, _| Ok(Some(content.clone()))).into()
            }
            Source::Json(value) => {
                let value = value.clone();
                json(move |_, _| Ok(Some(value.clone()))).into()
            }
            Source::Copy(source) => CopyStrategy::new(root, source).into(),
            Source::Absent => Entry::callback(|_, _| Ok(None)),
        };
        files.insert(rule.path.clone(), entry);
    }
    files
}
