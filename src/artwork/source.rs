//! Resolving the configured image path to one file.

use rand::Rng;
use std::path::{Path, PathBuf};

use super::error::RenderError;
use crate::paths;

/// Extensions accepted when scanning a directory for images.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// Whether `path` has one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    paths::extension_lowercase(path)
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Turn the configured path into the image file to render.
///
/// A file is used as-is. A directory yields one of its supported images,
/// picked with `rng`.
pub fn resolve_source<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<PathBuf, RenderError> {
    let path = paths::expand_home(path);
    let metadata = std::fs::metadata(&path).map_err(|source| RenderError::Path {
        path: path.clone(),
        source,
    })?;

    if !metadata.is_dir() {
        return Ok(path);
    }

    let candidates =
        paths::files_matching(&path, is_supported_image).map_err(|source| RenderError::Path {
            path: path.clone(),
            source,
        })?;

    match paths::pick(&candidates, rng) {
        Some(chosen) => {
            log::debug!(
                "picked {} of {} images in {}",
                chosen.display(),
                candidates.len(),
                path.display()
            );
            Ok(chosen.clone())
        }
        None => Err(RenderError::NoCandidates {
            dir: path,
            kind: "image",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_supported_extensions_case_insensitive() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("a.jpeg")));
        assert!(is_supported_image(Path::new("a.WebP")));
        assert!(!is_supported_image(Path::new("a.gif")));
        assert!(!is_supported_image(Path::new("png")));
    }

    #[test]
    fn test_file_is_used_directly() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("anything.bin");
        std::fs::write(&file, b"x").unwrap();

        let resolved = resolve_source(&file, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_directory_picks_supported_image() {
        let dir = TempDir::new().unwrap();
        for name in ["notes.txt", "one.png", "two.webp", "three.gif"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let chosen = resolve_source(dir.path(), &mut rng).unwrap();
            assert!(is_supported_image(&chosen), "picked {:?}", chosen);
        }
    }

    #[test]
    fn test_same_seed_same_pick() {
        let dir = TempDir::new().unwrap();
        for i in 0..8 {
            std::fs::write(dir.path().join(format!("{i}.jpg")), b"x").unwrap();
        }
        let a = resolve_source(dir.path(), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = resolve_source(dir.path(), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_directory_reports_no_candidates() {
        let dir = TempDir::new().unwrap();
        let err = resolve_source(dir.path(), &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, RenderError::NoCandidates { kind: "image", .. }));
    }

    #[test]
    fn test_missing_path_reports_path_error() {
        let err =
            resolve_source(Path::new("/no/such/lunarfetch/dir"), &mut StdRng::seed_from_u64(1))
                .unwrap_err();
        assert!(matches!(err, RenderError::Path { .. }));
    }
}
