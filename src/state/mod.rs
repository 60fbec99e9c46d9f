//! Publication of the pedal state to other processes.
//!
//! The channel is a single small file holding exactly one of two values.
//! Subscribers read the whole file whenever they care about the pedal; the
//! writer replaces the whole value on every publish.

#[cfg(test)]
pub mod mod_test;

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Pedal state as seen by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedalState {
    Released,
    Pressed,
}

impl PedalState {
    /// The wire form written to the publication file.
    pub fn as_str(&self) -> &'static str {
        match self {
            PedalState::Released => "0",
            PedalState::Pressed => "1",
        }
    }
}

impl From<bool> for PedalState {
    fn from(pressed: bool) -> Self {
        if pressed {
            PedalState::Pressed
        } else {
            PedalState::Released
        }
    }
}

/// Represents all possible errors publishing the pedal state
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Could not write state: {0}")]
    IoError(#[from] io::Error),
}

/// Single-value state channel backed by a file. Publishing writes a
/// sibling temp file and renames it over the target, so a reader never
/// observes a half-written value.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// Overwrite the published value. Publishing an unchanged state is
    /// fine and leaves the same value in place.
    pub fn publish(&self, state: PedalState) -> Result<(), PublishError> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, state.as_str())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
