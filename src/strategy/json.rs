//! JSON strategy
//!
//! JSON files are parsed into a serde type (by default [`serde_json::Value`]),
//! compared by their compact serialization (so key order matters, whitespace
//! does not), and written in a stable, diff-friendly layout:
//! 4-space indentation and exactly one trailing newline. Object keys keep the
//! order they have in the value, so reading and writing a file back does not
//! reorder it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value as JsonValue;

use super::{FileContext, Strategy};
use crate::defaults;
use crate::error::{Error, Result};
use crate::filesystem;

/// Update callback for JSON files
pub type JsonCallback<T> = Arc<dyn Fn(Option<T>, &FileContext) -> Result<Option<T>> + Send + Sync>;

/// Strategy treating the file as a JSON document of type `T`
pub struct JsonStrategy<T = JsonValue> {
    callback: JsonCallback<T>,
}

impl<T> JsonStrategy<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    /// Build a strategy for a typed document.
    ///
    /// ```
    /// use file_updater::strategy::JsonStrategy;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Clone, Serialize, Deserialize)]
    /// struct Package {
    ///     name: String,
    ///     version: String,
    /// }
    ///
    /// let strategy = JsonStrategy::<Package>::new(|actual, _ctx| {
    ///     Ok(actual.map(|mut package| {
    ///         package.version = "1.0.0".to_string();
    ///         package
    ///     }))
    /// });
    /// # let _ = strategy;
    /// ```
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Option<T>, &FileContext) -> Result<Option<T>> + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl<T> fmt::Debug for JsonStrategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonStrategy").finish_non_exhaustive()
    }
}

/// Build a JSON strategy over untyped [`serde_json::Value`] documents.
pub fn json<F>(callback: F) -> JsonStrategy<JsonValue>
where
    F: Fn(Option<JsonValue>, &FileContext) -> Result<Option<JsonValue>> + Send + Sync + 'static,
{
    JsonStrategy::new(callback)
}

/// Serialize a value the way JSON files are written: 4-space indentation and
/// a single trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(defaults::JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| Error::Serialization {
            message: e.to_string(),
        })?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })
}

/// Compact serialization; equal documents with keys in a different order differ
fn canonical<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::Serialization {
        message: e.to_string(),
    })
}

#[async_trait]
impl<T> Strategy for JsonStrategy<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
{
    type Content = T;

    async fn read(&self, path: &Path) -> Result<T> {
        filesystem::read_json(path).await
    }

    async fn update(&self, actual: Option<T>, ctx: &FileContext) -> Result<Option<T>> {
        (self.callback)(actual, ctx)
    }

    async fn equal(&self, expected: &T, actual: &T) -> Result<bool> {
        Ok(canonical(expected)? == canonical(actual)?)
    }

    async fn write(&self, path: &Path, expected: &T) -> Result<()> {
        let text = to_pretty_json(expected)?;
        filesystem::write_text(path, &text).await
    }
}
