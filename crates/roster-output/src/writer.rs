//! Incremental CSV writer for accepted contacts.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use roster_model::{NormalizedContact, OUTPUT_HEADERS};
use serde::Serialize;
use tracing::debug;

use crate::error::{OutputError, Result};

/// One data row in ConvertKit's import layout.
#[derive(Debug, Serialize)]
pub struct ConvertKitRow<'a> {
    #[serde(rename = "Email")]
    pub email: &'a str,
    #[serde(rename = "First Name")]
    pub first_name: &'a str,
    #[serde(rename = "Last Name")]
    pub last_name: &'a str,
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl<'a> From<&'a NormalizedContact> for ConvertKitRow<'a> {
    fn from(contact: &'a NormalizedContact) -> Self {
        Self {
            email: &contact.email,
            first_name: &contact.first_name,
            last_name: &contact.last_name,
            tags: contact.tags_cell(),
        }
    }
}

/// Writes the fixed header on creation, then one row per contact.
pub struct ContactWriter<W: Write> {
    inner: csv::Writer<W>,
    path: PathBuf,
    rows: usize,
}

impl ContactWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> Result<Self> {
        ensure_parent_dir(path)?;
        let inner = builder()
            .from_path(path)
            .map_err(|source| OutputError::Create {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_header(inner, path.to_path_buf())
    }
}

impl<W: Write> ContactWriter<W> {
    /// Wrap an arbitrary writer. `destination` names it in errors and logs.
    pub fn from_writer(writer: W, destination: impl Into<PathBuf>) -> Result<Self> {
        Self::with_header(builder().from_writer(writer), destination.into())
    }

    fn with_header(mut inner: csv::Writer<W>, path: PathBuf) -> Result<Self> {
        if let Err(source) = inner.write_record(OUTPUT_HEADERS) {
            return Err(OutputError::Write { path, source });
        }
        Ok(Self {
            inner,
            path,
            rows: 0,
        })
    }

    pub fn write_contact(&mut self, contact: &NormalizedContact) -> Result<()> {
        self.inner
            .serialize(ConvertKitRow::from(contact))
            .map_err(|source| OutputError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    /// Data rows written so far, header excluded.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered rows and return the row count.
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush().map_err(|source| OutputError::Flush {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), rows = self.rows, "output flushed");
        Ok(self.rows)
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        let path = self.path;
        self.inner
            .into_inner()
            .map_err(|err| OutputError::Flush {
                path,
                source: err.into_error(),
            })
    }
}

fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.has_headers(false).terminator(Terminator::CRLF);
    builder
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
