//! ASCII logo loading.
//!
//! A logo is a plain `.txt` file printed as-is. The configured path may
//! also be a directory of logos, in which case one is picked at random.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::artwork::RenderError;
use crate::compose::Placement;
use crate::paths;

/// `[logo]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    #[serde(alias = "enable_logo")]
    pub enabled: bool,
    /// A `.txt` file, or a directory to pick one from.
    pub path: PathBuf,
    pub position: Placement,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: PathBuf::from("~/.config/lunarfetch/logos"),
            position: Placement::Left,
        }
    }
}

fn path_error(path: &Path) -> impl FnOnce(std::io::Error) -> RenderError {
    let path = path.to_path_buf();
    move |source| RenderError::Path { path, source }
}

fn is_logo_file(path: &Path) -> bool {
    paths::extension_lowercase(path).is_some_and(|ext| ext == "txt")
}

/// Read the logo at `path`, choosing among a directory's `.txt` files with
/// `rng`.
pub fn load_logo<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> Result<String, RenderError> {
    let path = paths::expand_home(path);
    let metadata = std::fs::metadata(&path).map_err(path_error(&path))?;
    let file = if metadata.is_dir() {
        let candidates = paths::files_matching(&path, is_logo_file).map_err(path_error(&path))?;
        match paths::pick(&candidates, rng) {
            Some(chosen) => chosen.clone(),
            None => {
                return Err(RenderError::NoCandidates {
                    dir: path,
                    kind: "logo",
                })
            }
        }
    } else {
        path
    };

    log::debug!("loading logo {}", file.display());
    std::fs::read_to_string(&file).map_err(path_error(&file))
}
