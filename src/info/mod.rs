//! System information box.
//!
//! Enabled probes run in parallel against one [`CommandCache`]; the box is
//! drawn once every probe has finished.

mod border;
mod cache;
mod gather;
mod parse;
mod probes;
mod settings;

pub use border::{draw_box, Decorations};
pub use cache::{CommandCache, DEFAULT_TTL};
pub use gather::{gather_parallel, gather_with};
pub use parse::{format_bytes, format_uptime};
pub use probes::{Probe, UNKNOWN};
pub use settings::{Icons, Modules};

use std::collections::HashMap;

use crate::compose::Block;
use crate::protocol::Environment;

/// Width of the rule drawn under the info lines, in separator repetitions.
pub const SEPARATOR_REPEAT: usize = 30;

/// Info lines for already gathered values, followed by the separator rule.
pub fn info_lines(
    probes: &[Probe],
    values: &HashMap<Probe, String>,
    icons: &Icons,
    separator: &str,
) -> Vec<String> {
    let mut lines: Vec<String> = probes
        .iter()
        .map(|&probe| {
            let value = values.get(&probe).map_or(UNKNOWN, String::as_str);
            format!(" {} {}: {}", icons.get(probe), probe.label(), value)
        })
        .collect();
    lines.push(separator.repeat(SEPARATOR_REPEAT));
    lines
}

/// Gather the enabled probes and draw the bordered info box.
///
/// # Arguments
/// * `modules` - Which probes to show
/// * `icons` - Glyph printed before each label
/// * `decorations` - Box and separator glyphs
/// * `cache` - Command output cache shared by the probe workers
/// * `env` - Environment variables the probes consult
pub fn info_block(
    modules: &Modules,
    icons: &Icons,
    decorations: &Decorations,
    cache: &CommandCache,
    env: &dyn Environment,
) -> Block {
    let probes = modules.enabled();
    let values = gather_parallel(&probes, cache, env);
    draw_box(
        &info_lines(&probes, &values, icons, &decorations.separator),
        decorations,
    )
}
