//! Output path derivation for pack and unpack.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use dvpl_core::constants::FILE_EXTENSION;

/// Name used when an unpacked file has no `.dvpl` suffix to strip.
pub const FALLBACK_NAME: &str = "orig";

/// `name.ext` -> `name.ext.dvpl`
pub fn packed_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(FILE_EXTENSION);
    PathBuf::from(name)
}

/// `name.ext.dvpl` -> `name.ext`; anything else -> `orig` in the same directory.
pub fn unpacked_path(input: &Path) -> PathBuf {
    let has_extension = input
        .extension()
        .map(|ext| ext == FILE_EXTENSION)
        .unwrap_or(false);
    let stem = input.file_stem().filter(|s| !s.is_empty());

    match (has_extension, stem) {
        (true, Some(stem)) => input.with_file_name(stem),
        _ => input.with_file_name(FALLBACK_NAME),
    }
}

/// True when `output` names the same file as `input` once both are resolved.
///
/// `output` may not exist yet, so its parent directory is resolved instead and the
/// file name joined back on. Falls back to comparing the paths as written.
pub fn same_file(input: &Path, output: &Path) -> bool {
    match (fs::canonicalize(input), resolve_output(output)) {
        (Ok(a), Some(b)) => a == b,
        _ => input == output,
    }
}

fn resolve_output(path: &Path) -> Option<PathBuf> {
    if let Ok(resolved) = fs::canonicalize(path) {
        return Some(resolved);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_appends_extension() {
        assert_eq!(packed_path(Path::new("a/b/tex.png")), PathBuf::from("a/b/tex.png.dvpl"));
        assert_eq!(packed_path(Path::new("noext")), PathBuf::from("noext.dvpl"));
    }

    #[test]
    fn unpack_strips_extension() {
        assert_eq!(unpacked_path(Path::new("a/b/tex.png.dvpl")), PathBuf::from("a/b/tex.png"));
        assert_eq!(unpacked_path(Path::new("model.dvpl")), PathBuf::from("model"));
    }

    #[test]
    fn unpack_without_extension_falls_back() {
        assert_eq!(unpacked_path(Path::new("a/b/data.bin")), PathBuf::from("a/b/orig"));
        assert_eq!(unpacked_path(Path::new("blob")), PathBuf::from("orig"));
        assert_eq!(unpacked_path(Path::new("x.DVPL")), PathBuf::from("orig"));
    }

    #[test]
    fn pack_then_unpack_path_is_identity() {
        let p = Path::new("dir/file.txt");
        assert_eq!(unpacked_path(&packed_path(p)), p);
    }

    #[test]
    fn same_file_sees_through_dot_segments() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.dvpl");
        fs::write(&src, b"x").unwrap();

        assert!(same_file(&src, &dir.path().join(".").join("a.dvpl")));
        assert!(!same_file(&src, &dir.path().join("a")));
    }

    #[test]
    fn same_file_handles_missing_output() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.dvpl");
        fs::write(&src, b"x").unwrap();

        let missing = dir.path().join("sub").join("..").join("new");
        assert!(!same_file(&src, &missing));
    }
}
