//! Base name derivation and output file naming.

use std::path::{Path, PathBuf};

/// Strip everything from the first `.` of the file name onwards.
///
/// Only the final path component is scanned, so `./icons/logo.png` keeps its
/// `./` prefix. A name with several dots loses all of them: `my.photo.png`
/// becomes `my`.
#[must_use]
pub fn base_name(input: &str) -> &str {
    let name_start = input.rfind(std::path::is_separator).map_or(0, |i| i + 1);
    match input[name_start..].find('.') {
        Some(dot) => &input[..name_start + dot],
        None => input,
    }
}

/// Build `<base>-<size>.png`, moved under `output_dir` when one is given.
#[must_use]
pub fn output_path(base: &str, size: u32, output_dir: Option<&Path>) -> PathBuf {
    let file_name = format!("{}-{size}.png", file_part(base));
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(format!("{base}-{size}.png")),
    }
}

fn file_part(base: &str) -> &str {
    base.rfind(std::path::is_separator).map_or(base, |i| &base[i + 1..])
}

/// Directory an output path lands in; `.` for bare file names.
#[must_use]
pub fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
