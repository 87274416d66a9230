use crate::ports::outbound::OutputPresenter;
use crate::shared::error::MapperError;
use crate::shared::security::validate_output_target;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing the generated mapping to a file
///
/// This adapter implements the OutputPresenter port for file output.
/// Content goes to a temporary file in the target directory which is then
/// renamed over the output path, so readers never see a partial file.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        MapperError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    /// Creates the output directory if needed and returns it
    fn prepare_directory(&self) -> Result<PathBuf> {
        let directory = match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        if directory.exists() {
            if !directory.is_dir() {
                return Err(self.write_error(format!(
                    "Output directory is not a directory: {}",
                    directory.display()
                )));
            }
        } else {
            fs::create_dir_all(&directory).map_err(|e| {
                self.write_error(format!(
                    "Failed to create output directory {}: {}",
                    directory.display(),
                    e
                ))
            })?;
        }

        Ok(directory)
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    /// - Reject if output path exists and is a directory
    fn validate_output_security(&self) -> Result<()> {
        validate_output_target(&self.output_path)?;

        if self.output_path.is_dir() {
            return Err(self.write_error("Output path is a directory"));
        }

        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_output_security()?;
        let directory = self.prepare_directory()?;

        let mut temp = NamedTempFile::new_in(&directory)
            .map_err(|e| self.write_error(format!("Failed to create temporary file: {}", e)))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.flush())
            .map_err(|e| self.write_error(e.to_string()))?;
        temp.persist(&self.output_path)
            .map_err(|e| self.write_error(e.error.to_string()))?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for stdout output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
