//! Suppliers of raw word-list text.
//!
//! The engine only needs newline-delimited text; where it comes from (the list
//! compiled into the binary, a file, or text the caller fetched some other way)
//! is up to the [`WordSource`] handed to [`crate::WordEngine::init`].

use std::path::PathBuf;

use crate::error::SourceError;

/// Anything that can produce the raw, newline-delimited word list
pub trait WordSource {
    fn fetch(&self) -> Result<String, SourceError>;
}

impl<F> WordSource for F
where
    F: Fn() -> Result<String, SourceError>,
{
    fn fetch(&self) -> Result<String, SourceError> {
        self()
    }
}

/// The word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn fetch(&self) -> Result<String, SourceError> {
        Ok(crate::embedded_word_list().to_string())
    }
}

/// A newline-delimited word list on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn fetch(&self) -> Result<String, SourceError> {
        std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// Word-list text already held in memory
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Join individual words into a newline-delimited list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self { text }
    }
}

impl WordSource for TextSource {
    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// A source that never answers; forces the offline list
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl WordSource for Unavailable {
    fn fetch(&self) -> Result<String, SourceError> {
        Err(SourceError::Unavailable)
    }
}
