//! Plain-text strategy

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::{FileContext, Strategy};
use crate::error::Result;
use crate::filesystem;

/// Update callback for text files
pub type TextCallback =
    Arc<dyn Fn(Option<String>, &FileContext) -> Result<Option<String>> + Send + Sync>;

/// Strategy treating the file as a UTF-8 string compared exactly
pub struct TextStrategy {
    callback: TextCallback,
}

impl TextStrategy {
    pub fn new(callback: TextCallback) -> Self {
        Self { callback }
    }
}

impl fmt::Debug for TextStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextStrategy").finish_non_exhaustive()
    }
}

/// Build a text strategy around an update callback.
///
/// The file is read as UTF-8 (invalid sequences are replaced), compared with
/// exact string equality and written back verbatim.
pub fn text<F>(callback: F) -> TextStrategy
where
    F: Fn(Option<String>, &FileContext) -> Result<Option<String>> + Send + Sync + 'static,
{
    TextStrategy::new(Arc::new(callback))
}

#[async_trait]
impl Strategy for TextStrategy {
    type Content = String;

    async fn read(&self, path: &Path) -> Result<String> {
        filesystem::read_text(path).await
    }

    async fn update(&self, actual: Option<String>, ctx: &FileContext) -> Result<Option<String>> {
        (self.callback)(actual, ctx)
    }

    async fn equal(&self, expected: &String, actual: &String) -> Result<bool> {
        Ok(expected == actual)
    }

    async fn write(&self, path: &Path, expected: &String) -> Result<()> {
        filesystem::write_text(path, expected).await
    }
}
