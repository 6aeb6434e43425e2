//! Orchestration: renders the info, logo and image blocks and composes them.
//!
//! A block that fails to render is logged and left out; nothing here stops
//! the program from printing whatever did render.

use rand::Rng;

use crate::artwork::render_image;
use crate::compose::{compose, Block};
use crate::config::Config;
use crate::info::{info_block, CommandCache};
use crate::logo::load_logo;
use crate::protocol::{Environment, Rendered};
use crate::terminal::TerminalGeometry;

/// One run of the program against a loaded configuration.
pub struct Fetch<'a> {
    config: &'a Config,
    env: &'a dyn Environment,
    cache: &'a CommandCache,
}

impl<'a> Fetch<'a> {
    pub fn new(config: &'a Config, env: &'a dyn Environment, cache: &'a CommandCache) -> Self {
        Self { config, env, cache }
    }

    /// The bordered system information box.
    pub fn info_block(&self) -> Block {
        info_block(
            &self.config.modules,
            &self.config.icons,
            &self.config.decorations,
            self.cache,
            self.env,
        )
    }

    /// The ASCII logo, when enabled and loadable.
    pub fn logo_block<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Block> {
        if !self.config.logo.enabled {
            return None;
        }
        match load_logo(&self.config.logo.path, rng) {
            Ok(text) => Some(Block::from_text(&text)),
            Err(e) => {
                log::warn!("logo omitted: {}", e);
                None
            }
        }
    }

    /// The image, when enabled and rendered in-band.
    ///
    /// Pixel graphics reserve the cells they cover. Overlays drawn by a
    /// detached process produce no block.
    pub fn image_block<R: Rng + ?Sized>(
        &self,
        geometry: TerminalGeometry,
        rng: &mut R,
    ) -> Option<Block> {
        if !self.config.image.enabled {
            return None;
        }
        match render_image(&self.config.image.render, geometry, self.env, rng) {
            Ok(Rendered::Inline(text)) => Some(Block::from_text(&text)),
            Ok(Rendered::Pixels { payload, cells }) => Some(Block::reserved(
                &payload,
                usize::from(cells.width),
                usize::from(cells.height),
            )),
            Ok(Rendered::Detached(overlay)) => {
                log::debug!(
                    "image drawn by overlay '{}' (pid {})",
                    overlay.identifier,
                    overlay.pid()
                );
                None
            }
            Err(e) => {
                log::warn!("image omitted: {}", e);
                None
            }
        }
    }

    /// Render every enabled block and compose the final output.
    pub fn render<R: Rng + ?Sized>(&self, geometry: TerminalGeometry, rng: &mut R) -> String {
        let logo = self.logo_block(rng);
        let image = self.image_block(geometry, rng);
        let info = self.info_block();

        compose(
            Some(&info),
            logo.as_ref(),
            image.as_ref(),
            &self.config.layout(),
        )
    }
}
