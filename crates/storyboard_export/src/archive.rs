//! Zip packaging of a project.

use crate::{
    AUDIO_DIR, PROMPT_LOG_FILE, THUMBNAIL_FILE, VISUALS_DIR, archive_root, download_name,
    prompt_log, scene_file_stem, wrap_pcm,
};
use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};
use storyboard_core::{Project, Voice};
use storyboard_error::{ExportError, ExportErrorKind, StoryboardResult};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// One file in the archive.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ArchiveEntry {
    /// Path inside the zip, root folder included
    path: String,
    /// File contents
    bytes: Vec<u8>,
}

/// Every file of an exported project, in archive order.
///
/// Order is the thumbnail, then per scene its illustration and narration,
/// then the prompt log.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct StoryboardArchive {
    /// Root folder name, see [`archive_root`](crate::archive_root)
    root: String,
    /// Title the archive was built from
    title: String,
    /// Files in archive order
    entries: Vec<ArchiveEntry>,
}

impl StoryboardArchive {
    /// Collect the files of `project`. `voice` is recorded in the prompt log.
    ///
    /// # Errors
    ///
    /// Returns an export error if a narration cannot be framed as WAV.
    #[tracing::instrument(skip_all, fields(project_id = %project.id(), voice = %voice))]
    pub fn from_project(project: &Project, voice: Voice) -> StoryboardResult<Self> {
        let root = archive_root(project.title());
        let mut entries = Vec::new();

        if let Some(thumbnail) = project.thumbnail() {
            entries.push(ArchiveEntry {
                path: format!("{}/{}", root, THUMBNAIL_FILE),
                bytes: thumbnail.bytes().clone(),
            });
        }

        for (index, scene) in project.scenes().iter().enumerate() {
            let stem = scene_file_stem(index);
            if let Some(image) = scene.image() {
                entries.push(ArchiveEntry {
                    path: format!("{}/{}/{}.png", root, VISUALS_DIR, stem),
                    bytes: image.bytes().clone(),
                });
            }
            if let Some(audio) = scene.audio() {
                entries.push(ArchiveEntry {
                    path: format!("{}/{}/{}.wav", root, AUDIO_DIR, stem),
                    bytes: wrap_pcm(audio.pcm())?,
                });
            }
        }

        entries.push(ArchiveEntry {
            path: format!("{}/{}", root, PROMPT_LOG_FILE),
            bytes: prompt_log(project, voice).into_bytes(),
        });

        tracing::debug!(entries = entries.len(), "Collected archive entries");
        Ok(Self {
            root,
            title: project.title().clone(),
            entries,
        })
    }

    /// Name offered for the downloaded zip.
    pub fn download_name(&self) -> String {
        download_name(&self.title)
    }

    /// Write the archive as a deflated zip into `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportErrorKind::Archive`] if the zip writer fails.
    pub fn write_zip<W: Write + Seek>(&self, writer: W) -> StoryboardResult<W> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = zip::ZipWriter::new(writer);
        for entry in &self.entries {
            zip.start_file(entry.path.as_str(), options)
                .map_err(|e| archive_error(&entry.path, e))?;
            zip.write_all(&entry.bytes)
                .map_err(|e| archive_error(&entry.path, e))?;
        }
        let writer = zip.finish().map_err(|e| archive_error("finish", e))?;
        Ok(writer)
    }

    /// The archive as zip bytes.
    pub fn to_zip_bytes(&self) -> StoryboardResult<Vec<u8>> {
        Ok(self.write_zip(Cursor::new(Vec::new()))?.into_inner())
    }

    /// Write the zip into `dir` under [`Self::download_name`].
    ///
    /// Creates `dir` if needed. The zip is written to a temporary file first
    /// and renamed into place.
    ///
    /// # Errors
    ///
    /// Returns an export error if the directory or file cannot be written.
    #[tracing::instrument(skip_all, fields(dir = %dir.as_ref().display()))]
    pub async fn write_to_dir(&self, dir: impl AsRef<Path>) -> StoryboardResult<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            ExportError::new(ExportErrorKind::DirectoryCreation(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        })?;

        let bytes = self.to_zip_bytes()?;
        let path = dir.join(self.download_name());
        let temp_path = path.with_extension("zip.tmp");
        tokio::fs::write(&temp_path, &bytes).await.map_err(|e| {
            ExportError::new(ExportErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            ExportError::new(ExportErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            path = %path.display(),
            size = bytes.len(),
            entries = self.entries.len(),
            "Wrote storyboard archive"
        );
        Ok(path)
    }
}

fn archive_error(what: &str, err: impl std::fmt::Display) -> ExportError {
    ExportError::new(ExportErrorKind::Archive(format!("{}: {}", what, err)))
}
