//! PNG encoding with all-or-nothing placement of the finished files.
//!
//! Every resized image is first written into a hidden staging directory
//! beside its destination. Nothing is moved into place until the whole set
//! has been encoded, so a failure part way through leaves the destination
//! untouched; the staging directory is removed when dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tempfile::TempDir;
use tracing::debug;

use crate::error::ResizeError;

/// Resized images encoded to a staging area, waiting to be committed.
pub struct StagedOutputs {
    staging: TempDir,
    pending: Vec<(PathBuf, PathBuf)>,
}

impl StagedOutputs {
    /// Create a staging area inside `target_dir`.
    ///
    /// Staging on the same filesystem as the destination keeps the final
    /// renames atomic.
    ///
    /// # Errors
    ///
    /// Returns an error if the staging directory cannot be created.
    pub fn new(target_dir: &Path) -> Result<Self, ResizeError> {
        let staging = tempfile::Builder::new().prefix(".resize-").tempdir_in(target_dir)?;
        debug!("Staging outputs in {}", staging.path().display());
        Ok(Self { staging, pending: Vec::new() })
    }

    /// Encode `image` as PNG into the staging area, destined for `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` has no file name, is an existing
    /// directory, or encoding fails.
    pub fn stage(&mut self, image: &RgbaImage, target: PathBuf) -> Result<(), ResizeError> {
        let file_name = target.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Output path has no file name: {}", target.display()),
            )
        })?;
        if target.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Output path is a directory: {}", target.display()),
            )
            .into());
        }
        let staged = self.staging.path().join(file_name);
        image.save_with_format(&staged, ImageFormat::Png)?;
        debug!("Encoded {}x{} -> {}", image.width(), image.height(), staged.display());
        self.pending.push((staged, target));
        Ok(())
    }

    /// Move every staged file over its destination, overwriting old copies.
    ///
    /// Returns the destination paths in the order they were staged.
    ///
    /// # Errors
    ///
    /// Returns an error if a rename fails.
    pub fn commit(self) -> Result<Vec<PathBuf>, ResizeError> {
        let Self { staging, pending } = self;
        let mut written = Vec::with_capacity(pending.len());
        for (staged, target) in pending {
            fs::rename(&staged, &target)?;
            written.push(target);
        }
        drop(staging);
        Ok(written)
    }
}
