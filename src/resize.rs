//! Decoding, RGBA normalization and square Lanczos resampling.

use std::io;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{ImageReader, RgbaImage};
use tracing::{debug, info};

use crate::error::ResizeError;
use crate::naming::{base_name, output_path, parent_dir};
use crate::output::StagedOutputs;

/// Square edge lengths written for every input, smallest first.
pub const TARGET_SIZES: [u32; 5] = [32, 64, 128, 256, 512];

/// Decode `path` and normalize it to 8-bit RGBA.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes. Sources without alpha gain a fully opaque channel.
///
/// # Errors
///
/// Returns [`ResizeError::NotFound`] if the file does not exist, or another
/// variant if it cannot be read or decoded.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, ResizeError> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ResizeError::NotFound(path.to_path_buf()),
        _ => ResizeError::Io(e),
    })?;
    let decoded = reader.with_guessed_format()?.decode()?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgba8())
}

/// Resample `source` to `size`x`size` with a Lanczos3 filter.
///
/// Aspect ratio is not preserved.
#[must_use]
pub fn resize_square(source: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(source, size, size, FilterType::Lanczos3)
}

/// Write one PNG per entry of [`TARGET_SIZES`] for the image at `input`.
///
/// Outputs are named `<base>-<size>.png` where `<base>` is [`base_name`] of
/// `input`, and land next to it unless `output_dir` is given. Either all
/// outputs are written or none are. Returns the written paths, smallest
/// size first.
///
/// # Errors
///
/// Returns [`ResizeError::NotFound`] if `input` does not exist, or another
/// variant if decoding, encoding or writing fails.
pub fn resize_all(input: &str, output_dir: Option<&Path>) -> Result<Vec<PathBuf>, ResizeError> {
    let base = base_name(input);
    let source = load_rgba(Path::new(input))?;

    let target_dir = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            dir.to_path_buf()
        }
        None => parent_dir(&output_path(base, TARGET_SIZES[0], None)).to_path_buf(),
    };

    let mut staged = StagedOutputs::new(&target_dir)?;
    for size in TARGET_SIZES {
        let resized = resize_square(&source, size);
        staged.stage(&resized, output_path(base, size, output_dir))?;
    }

    let written = staged.commit()?;
    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    fn write_rgb_fixture(dir: &Path, name: &str, width: u32, height: u32) -> String {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let path = dir.join(name);
        img.save(&path).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn resize_square_hits_exact_dimensions() {
        let source = RgbaImage::from_pixel(30, 10, Rgba([1, 2, 3, 4]));
        for size in TARGET_SIZES {
            let out = resize_square(&source, size);
            assert_eq!(out.dimensions(), (size, size));
        }
    }

    #[test]
    fn load_rgba_missing_file() {
        let err = load_rgba(Path::new("does_not_exist.png")).unwrap_err();
        assert!(matches!(err, ResizeError::NotFound(p) if p == Path::new("does_not_exist.png")));
    }

    #[test]
    fn load_rgba_adds_opaque_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_rgb_fixture(dir.path(), "rgb.png", 8, 8);

        let rgba = load_rgba(Path::new(&input)).unwrap();
        assert!(rgba.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn load_rgba_sniffs_content_over_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_rgb_fixture(dir.path(), "real.png", 5, 5);
        let renamed = dir.path().join("misnamed.dat");
        std::fs::rename(&png, &renamed).unwrap();

        assert_eq!(load_rgba(&renamed).unwrap().dimensions(), (5, 5));
    }

    #[test]
    fn load_rgba_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load_rgba(&path).unwrap_err();
        assert!(!matches!(err, ResizeError::NotFound(_)));
    }

    #[test]
    fn resize_all_writes_every_size() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_rgb_fixture(dir.path(), "logo.png", 100, 60);

        let written = resize_all(&input, None).unwrap();

        let expected: Vec<PathBuf> =
            TARGET_SIZES.iter().map(|s| dir.path().join(format!("logo-{s}.png"))).collect();
        assert_eq!(written, expected);
        for (path, size) in written.iter().zip(TARGET_SIZES) {
            let out = image::open(path).unwrap();
            assert_eq!((out.width(), out.height()), (size, size));
            assert!(out.color().has_alpha());
        }
    }

    #[test]
    fn resize_all_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_rgb_fixture(dir.path(), "logo.png", 16, 16);
        let out_dir = dir.path().join("nested").join("icons");

        let written = resize_all(&input, Some(&out_dir)).unwrap();

        assert_eq!(written.len(), TARGET_SIZES.len());
        assert!(written.iter().all(|p| p.parent() == Some(out_dir.as_path())));
        assert!(out_dir.join("logo-512.png").exists());
        assert!(!dir.path().join("logo-32.png").exists());
    }

    #[test]
    fn resize_all_late_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_rgb_fixture(dir.path(), "logo.png", 16, 16);
        // Smaller sizes are staged before the largest one fails.
        std::fs::create_dir(dir.path().join("logo-512.png")).unwrap();

        let err = resize_all(&input, None).unwrap_err();

        assert!(matches!(err, ResizeError::Io(_)));
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["logo-512.png", "logo.png"]);
        assert!(dir.path().join("logo-512.png").is_dir());
    }

    #[test]
    fn resize_all_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("does_not_exist.png");

        let err = resize_all(input.to_str().unwrap(), None).unwrap_err();

        assert!(matches!(err, ResizeError::NotFound(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
