// src/input/mod.rs
use crate::utils::error::InputError;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Picks the source from the optional path argument.
    /// Without a path, stdin is used only when it is not an interactive terminal.
    pub fn select(path: Option<&Path>, stdin_is_terminal: bool) -> Result<Self, InputError> {
        match path {
            Some(p) if p == Path::new(STDIN_PATH) => Ok(Self::Stdin),
            Some(p) => Ok(Self::File(p.to_path_buf())),
            None if !stdin_is_terminal => Ok(Self::Stdin),
            None => Err(InputError::NoInput),
        }
    }
}

/// Reads the whole document from `source`, using `stdin` for [`InputSource::Stdin`].
pub fn read_source<R: Read>(source: &InputSource, mut stdin: R) -> Result<String, InputError> {
    let content = match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            stdin
                .read_to_string(&mut buf)
                .map_err(|source| InputError::Read { path: PathBuf::from(STDIN_PATH), source })?;
            buf
        }
        InputSource::File(path) => fs::read_to_string(path)
            .map_err(|source| InputError::Read { path: path.clone(), source })?,
    };

    tracing::debug!("Read {} bytes from {:?}", content.len(), source);
    Ok(content)
}

/// Reads the document named on the command line, falling back to piped stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, InputError> {
    let stdin = io::stdin();
    let source = InputSource::select(path, stdin.is_terminal())?;
    read_source(&source, stdin.lock())
}
