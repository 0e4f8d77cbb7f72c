// src/output/writer.rs
use crate::utils::error::OutputError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Sends rendered output to stdout or to a file.
pub enum OutputWriter {
    Stdout,
    File(PathBuf),
}

impl OutputWriter {
    /// Writes to `path` when given, otherwise to stdout.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Self {
        match path {
            Some(p) => Self::File(p.as_ref().to_path_buf()),
            None => Self::Stdout,
        }
    }

    /// Writes `rendered` in full. Missing parent directories are created for file output.
    pub fn write(&self, rendered: &str) -> Result<(), OutputError> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(rendered.as_bytes())?;
                stdout.flush()?;
            }
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, rendered)?;
                tracing::info!("Saved output to {}", path.display());
            }
        }
        Ok(())
    }
}
