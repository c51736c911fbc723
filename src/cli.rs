//! CLI argument parsing with clap.

use clap::Parser;

use crate::error::ResizeError;

/// Resize an image into 32, 64, 128, 256 and 512 pixel square PNGs.
#[derive(Parser, Debug)]
#[command(name = "resize", version, about)]
pub struct Cli {
    /// Path of the image to resize.
    #[arg(value_name = "IMAGE_FILE_NAME")]
    pub image_file_name: Option<String>,

    /// Directory to write the resized images to (defaults to next to the input).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Return the input path, or a usage error when none was given.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::Usage`] if the positional argument is missing
    /// or empty.
    pub fn input(&self) -> Result<&str, ResizeError> {
        match self.image_file_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(ResizeError::Usage),
        }
    }
}
