//! End-to-end image rendering against fake external tools.
//!
//! Each test builds a private PATH holding shell-script stand-ins for the
//! tools the renderers look for, so no real chafa or terminal-image is needed.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use lunarfetch::artwork::{
    fit_dimensions, prepare, render_image, CellSize, ImageConfig, RasterImage, RenderError,
};
use lunarfetch::protocol::{self, EncodeContext, Protocol, ProtocolSetting, StaticEnvironment};
use lunarfetch::terminal::TerminalGeometry;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

fn install(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn write_source(dir: &Path) -> PathBuf {
    let path = dir.join("moon.png");
    RgbaImage::from_fn(64, 32, |x, y| Rgba([(x * 4) as u8, (y * 8) as u8, 128, 255]))
        .save(&path)
        .unwrap();
    path
}

/// A chafa that keeps a copy of its input and echoes the requested size.
fn fake_chafa(bin: &Path) {
    let script = format!(
        "#!/bin/sh\n\
         size=\n\
         while [ $# -gt 1 ]; do\n\
         if [ \"$1\" = \"--size\" ]; then size=\"$2\"; fi\n\
         shift\n\
         done\n\
         cp \"$1\" '{dir}/seen.png'\n\
         printf '%s' \"$1\" > '{dir}/path.txt'\n\
         printf 'chafa %s' \"$size\"\n",
        dir = bin.display()
    );
    install(bin, "chafa", &script);
}

fn env_with_path(bin: &Path) -> StaticEnvironment {
    StaticEnvironment::new().with_var("PATH", bin.to_str().unwrap())
}

fn config(path: PathBuf, protocol: ProtocolSetting) -> ImageConfig {
    ImageConfig {
        path,
        protocol,
        ..ImageConfig::default()
    }
}

// ==================== External tool round trip ====================

#[test]
fn test_chafa_receives_prepared_bitmap_and_its_footprint() {
    let bin = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    fake_chafa(bin.path());
    let source_path = write_source(images.path());

    let env = env_with_path(bin.path()).with_var("TERM", "xterm-256color");
    let geometry = TerminalGeometry::new(100, 40);
    let config = config(source_path.clone(), ProtocolSetting::Auto);
    let mut rng = StdRng::seed_from_u64(7);

    let rendered = render_image(&config, geometry, &env, &mut rng).unwrap();

    let source = RasterImage::open(&source_path).unwrap();
    let prepared = prepare(&source, &config, geometry);
    let expected = format!("chafa {}x{}\n", prepared.cells.width, prepared.cells.height);
    assert_eq!(rendered.text(), Some(expected.as_str()));

    // The tool saw exactly the fitted, resized bitmap.
    let seen = image::open(bin.path().join("seen.png")).unwrap().to_rgba8();
    assert_eq!(seen.dimensions(), prepared.raster.dimensions());
    assert_eq!(seen.as_raw().as_slice(), prepared.raster.as_raw());

    // And its temporary input is gone.
    let temp = fs::read_to_string(bin.path().join("path.txt")).unwrap();
    assert!(!Path::new(&temp).exists());
}

#[test]
fn test_directory_source_renders_its_only_image() {
    let bin = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    fake_chafa(bin.path());
    write_source(images.path());
    fs::write(images.path().join("notes.txt"), "not an image").unwrap();

    let env = env_with_path(bin.path());
    let config = config(images.path().to_path_buf(), ProtocolSetting::Chafa);
    let mut rng = StdRng::seed_from_u64(1);

    let rendered = render_image(&config, TerminalGeometry::new(100, 40), &env, &mut rng).unwrap();
    assert!(rendered.text().unwrap().starts_with("chafa "));
}

// ==================== Auto-detection ====================

#[test]
fn test_kitty_signal_beats_installed_chafa() {
    let bin = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    fake_chafa(bin.path());

    let env = env_with_path(bin.path()).with_var("KITTY_WINDOW_ID", "1");
    let config = config(write_source(images.path()), ProtocolSetting::Auto);
    let mut rng = StdRng::seed_from_u64(3);

    let rendered = render_image(&config, TerminalGeometry::new(100, 40), &env, &mut rng).unwrap();
    assert!(rendered.text().unwrap().starts_with("\x1b_Ga=T,f=100,"));
    assert!(!bin.path().join("path.txt").exists());
}

#[test]
fn test_kitty_header_matches_covered_cells() {
    let bin = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    let path = images.path().join("square.png");
    RgbaImage::from_pixel(512, 512, Rgba([90, 90, 110, 255]))
        .save(&path)
        .unwrap();

    // A square image in a 20x30 box: the raster covers 20x10 cells only.
    let env = env_with_path(bin.path()).with_var("KITTY_WINDOW_ID", "1");
    let config = config(path, ProtocolSetting::Auto);
    let mut rng = StdRng::seed_from_u64(5);

    let rendered = render_image(&config, TerminalGeometry::new(100, 50), &env, &mut rng).unwrap();
    let text = rendered.text().unwrap();
    assert!(text.starts_with("\x1b_Ga=T,f=100,c=20,r=10,C=1,m="), "{:?}", &text[..40]);
    assert_eq!(
        rendered.footprint(),
        Some(CellSize {
            width: 20,
            height: 10
        })
    );
}

#[test]
fn test_auto_falls_through_failing_tool() {
    let bin = TempDir::new().unwrap();
    install(bin.path(), "chafa", "#!/bin/sh\nexit 1\n");
    install(bin.path(), "terminal-image", "#!/bin/sh\nprintf 'pixels'\n");
    let env = env_with_path(bin.path());

    let image = RasterImage::new(RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255])));
    let geometry = TerminalGeometry::new(80, 24);
    let ctx = EncodeContext {
        cells: fit_dimensions(8, 8, geometry, Default::default()),
        geometry,
        render_mode: Default::default(),
        offset: 2,
        env: &env,
    };

    let (used, rendered) = protocol::encode(ProtocolSetting::Auto, &image, &ctx).unwrap();
    assert_eq!(used, Protocol::TerminalImage);
    assert_eq!(rendered.text(), Some("pixels\n"));

    let err = protocol::encode(ProtocolSetting::Chafa, &image, &ctx).unwrap_err();
    assert!(matches!(err, RenderError::ToolExecution { tool: "chafa", .. }));
}

#[test]
fn test_nothing_detected_is_protocol_unavailable() {
    let bin = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    let env = env_with_path(bin.path()).with_var("TERM", "xterm-256color");
    let config = config(write_source(images.path()), ProtocolSetting::Auto);
    let mut rng = StdRng::seed_from_u64(9);

    let err = render_image(&config, TerminalGeometry::new(100, 40), &env, &mut rng).unwrap_err();
    assert!(matches!(err, RenderError::ProtocolUnavailable));
}

#[test]
fn test_explicit_tool_missing_is_reported() {
    let bin = TempDir::new().unwrap();
    let images = TempDir::new().unwrap();
    let env = env_with_path(bin.path()).with_var("KITTY_WINDOW_ID", "1");
    let config = config(write_source(images.path()), ProtocolSetting::Chafa);
    let mut rng = StdRng::seed_from_u64(9);

    let err = render_image(&config, TerminalGeometry::new(100, 40), &env, &mut rng).unwrap_err();
    assert!(matches!(err, RenderError::ToolMissing { tool: "chafa" }));
}
