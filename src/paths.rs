//! Path helpers shared by the logo and image loaders.

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when no home directory is known, come
/// back unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Files directly inside `dir` accepted by `filter`, sorted by path.
pub fn files_matching(
    dir: &Path,
    filter: impl Fn(&Path) -> bool,
) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && filter(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Pick one candidate uniformly with the supplied randomness source.
pub fn pick<'a, R: Rng + ?Sized>(candidates: &'a [PathBuf], rng: &mut R) -> Option<&'a PathBuf> {
    candidates.choose(rng)
}

/// Lowercased extension of `path`, without the dot.
pub fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_expand_home_leaves_plain_paths() {
        let path = PathBuf::from("/etc/lunarfetch");
        assert_eq!(expand_home(&path), path);
        let relative = PathBuf::from("logos/arch.txt");
        assert_eq!(expand_home(&relative), relative);
    }

    #[test]
    fn test_expand_home_replaces_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let expanded = expand_home(Path::new("~/.config/lunarfetch"));
        assert_eq!(expanded, home.join(".config/lunarfetch"));
    }

    #[test]
    fn test_files_matching_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }
        std::fs::create_dir(dir.path().join("d.txt")).unwrap();

        let files = files_matching(dir.path(), |p| {
            extension_lowercase(p).as_deref() == Some("txt")
        })
        .unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_pick_is_deterministic_with_seed() {
        let candidates: Vec<PathBuf> = (0..10).map(|i| PathBuf::from(format!("{i}.png"))).collect();
        let first = pick(&candidates, &mut StdRng::seed_from_u64(7)).cloned();
        let second = pick(&candidates, &mut StdRng::seed_from_u64(7)).cloned();
        assert_eq!(first, second);
        assert!(first.is_some());
        assert!(pick(&[], &mut StdRng::seed_from_u64(7)).is_none());
    }
}
