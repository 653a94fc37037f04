use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;
use todo_core::TodoDocument;

use crate::{AppError, Result};

const EXPECTED_ARRAY: &str = "Expected JSON array";

/// Owns the single `todo.json` file.
///
/// Writes go to a uniquely named sibling temp file which is then renamed
/// over the canonical path, so readers only ever see a complete document.
/// There is no lock: concurrent replaces race and the last rename wins.
#[derive(Clone, Debug)]
pub struct DocumentStore {
    path: PathBuf,
}

impl DocumentStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Seeds an empty list when the document does not exist yet. Returns
    /// `true` when a new file was written.
    pub fn ensure_initialized(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.replace(&TodoDocument::default())?;
        Ok(true)
    }

    pub fn load(&self) -> Result<TodoDocument> {
        let file = match fs::File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(AppError::NotFound(self.path.clone()));
            }
            Err(source) => {
                return Err(AppError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                AppError::Read {
                    path: self.path.clone(),
                    source: source.into(),
                }
            } else {
                AppError::Malformed {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }

    /// Checks the top-level type before anything touches disk.
    pub fn replace_value(&self, value: Value) -> Result<()> {
        let doc = TodoDocument::try_from(value)
            .map_err(|_| AppError::Validation(EXPECTED_ARRAY.to_string()))?;
        self.replace(&doc)
    }

    pub fn replace(&self, doc: &TodoDocument) -> Result<()> {
        self.replace_with(doc, |tmp, dest| {
            tmp.persist(dest).map(|_| ()).map_err(|err| err.error)
        })?;
        tracing::debug!(path = %self.path.display(), items = doc.len(), "document replaced");
        Ok(())
    }

    fn replace_with<F>(&self, doc: &TodoDocument, commit: F) -> Result<()>
    where
        F: FnOnce(NamedTempFile, &Path) -> io::Result<()>,
    {
        let write_err = |source: io::Error| AppError::Write {
            path: self.path.clone(),
            source,
        };
        let mut tmp = tempfile::Builder::new()
            .prefix(&self.temp_prefix())
            .suffix(".tmp")
            .tempfile_in(self.parent_dir())
            .map_err(write_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, doc)
                .map_err(|err| write_err(err.into()))?;
            writer.flush().map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        commit(tmp, &self.path).map_err(write_err)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn temp_prefix(&self) -> String {
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        format!(".{name}.")
    }
}
