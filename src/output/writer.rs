//! Chapter file writer

use crate::url::chapter_file_name;
use crate::{OutputError, OutputResult};
use std::fs;
use std::path::PathBuf;

/// Persists chapter text under a fixed root directory
///
/// Each novel gets its own subdirectory named after the title exactly as it
/// was entered; files inside it are named after the slug.
#[derive(Debug, Clone)]
pub struct ChapterWriter {
    root: PathBuf,
}

impl ChapterWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory that holds every chapter of `title`
    pub fn novel_dir(&self, title: &str) -> PathBuf {
        self.root.join(title)
    }

    /// Full path a chapter is written to
    pub fn chapter_path(&self, title: &str, slug: &str, chapter_number: u32) -> PathBuf {
        self.novel_dir(title)
            .join(chapter_file_name(slug, chapter_number))
    }

    /// Writes one chapter, replacing any previous file for the same chapter
    ///
    /// # Arguments
    ///
    /// * `title` - Novel title, used as the directory name
    /// * `slug` - Normalized title, used in the file name
    /// * `chapter_number` - Chapter being saved
    /// * `text` - Chapter content, stored as UTF-8
    ///
    /// # Returns
    ///
    /// * `Ok(PathBuf)` - Path of the written file
    /// * `Err(OutputError::CreateDir)` - The novel directory could not be created
    /// * `Err(OutputError::Write)` - The file itself could not be written
    pub fn write(
        &self,
        title: &str,
        slug: &str,
        chapter_number: u32,
        text: &str,
    ) -> OutputResult<PathBuf> {
        let dir = self.novel_dir(title);
        fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = self.chapter_path(title, slug, chapter_number);
        fs::write(&path, text.as_bytes()).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} bytes to {}", text.len(), path.display());
        Ok(path)
    }
}
