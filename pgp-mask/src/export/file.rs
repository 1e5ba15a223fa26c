//! Fire-and-forget file export.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use slog::{debug, warn, Logger};

use super::{discard_logger, ExportError, Result};

/// Somewhere exported text can be saved under a filename.
pub trait FileSink {
    /// Saves `contents` as plain text named `filename`.
    fn save(&self, filename: &str, contents: &str) -> Result<()>;
}

impl<T> FileSink for &T
where
    T: FileSink + ?Sized,
{
    fn save(&self, filename: &str, contents: &str) -> Result<()> {
        (**self).save(filename, contents)
    }
}

impl<T> FileSink for Arc<T>
where
    T: FileSink + ?Sized,
{
    fn save(&self, filename: &str, contents: &str) -> Result<()> {
        (**self).save(filename, contents)
    }
}

/// Saves exports into one directory.
///
/// Only the final component of a filename is used, so `../x.asc` lands in the
/// directory as `x.asc`. Filenames with no final component are refused.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSink for DirectorySink {
    fn save(&self, filename: &str, contents: &str) -> Result<()> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| ExportError::InvalidFilename(filename.to_string()))?;
        fs::write(self.root.join(name), contents.as_bytes())?;
        Ok(())
    }
}

/// Triggers a save through a [`FileSink`] and reports nothing back.
///
/// The content is borrowed for the duration of the call only. Failures are
/// logged at warning level.
pub struct FileExporter<S> {
    sink: S,
    logger: Logger,
}

impl<S> FileExporter<S>
where
    S: FileSink,
{
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            logger: discard_logger(),
        }
    }

    #[must_use]
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Saves `content` as `filename`. No extension is added or checked.
    pub fn download(&self, content: &str, filename: &str) {
        match self.sink.save(filename, content) {
            Ok(()) => {
                debug!(self.logger, "exported file"; "filename" => filename, "bytes" => content.len());
            }
            Err(err) => {
                warn!(self.logger, "file export failed"; "filename" => filename, "error" => %err);
            }
        }
    }

    /// The wrapped sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectorySink, FileSink};
    use crate::ExportError;

    #[test]
    fn directory_sink_strips_parent_components() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        sink.save("../escape.asc", "armored").unwrap();

        let saved = std::fs::read_to_string(dir.path().join("escape.asc")).unwrap();
        assert_eq!(saved, "armored");
    }

    #[test]
    fn directory_sink_refuses_names_without_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());

        for name in ["", "..", "/"] {
            let err = sink.save(name, "x").unwrap_err();
            assert!(matches!(err, ExportError::InvalidFilename(_)), "{name:?}");
        }
    }

    #[test]
    fn directory_sink_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("missing"));

        let err = sink.save("key.asc", "x").unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
