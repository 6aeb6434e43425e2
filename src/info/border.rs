//! The box drawn around the info lines.

use serde::{Deserialize, Serialize};

use crate::compose::Block;
use crate::terminal::{display_width, pad_to_width};

/// Glyphs used to draw the info box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Decorations {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_edge: String,
    pub bottom_edge: String,
    pub left_edge: String,
    pub right_edge: String,
    /// Repeated to draw the rule under the info lines.
    pub separator: String,
}

impl Default for Decorations {
    fn default() -> Self {
        Self {
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_edge: "─".to_string(),
            bottom_edge: "─".to_string(),
            left_edge: "│".to_string(),
            right_edge: "│".to_string(),
            separator: "─".to_string(),
        }
    }
}

/// Draw `lines` inside a box, one space of padding on each side.
pub fn draw_box(lines: &[String], decorations: &Decorations) -> Block {
    let inner = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
    let rule = |edge: &str| edge.repeat(inner + 2);

    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(format!(
        "{}{}{}",
        decorations.top_left,
        rule(&decorations.top_edge),
        decorations.top_right
    ));
    for line in lines {
        out.push(format!(
            "{} {} {}",
            decorations.left_edge,
            pad_to_width(line, inner),
            decorations.right_edge
        ));
    }
    out.push(format!(
        "{}{}{}",
        decorations.bottom_left,
        rule(&decorations.bottom_edge),
        decorations.bottom_right
    ));
    Block::new(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_is_rectangular() {
        let lines = vec![" a: 1".to_string(), " longer: 22".to_string()];
        let block = draw_box(&lines, &Decorations::default());
        assert_eq!(
            block.lines(),
            &[
                "╭─────────────╮",
                "│  a: 1       │",
                "│  longer: 22 │",
                "╰─────────────╯",
            ]
        );
        let widths: Vec<usize> = block.lines().iter().map(|l| display_width(l)).collect();
        assert!(widths.iter().all(|&w| w == widths[0]));
    }

    #[test]
    fn test_wide_icons_are_measured() {
        let lines = vec!["日 x".to_string(), "ab".to_string()];
        let block = draw_box(&lines, &Decorations::default());
        assert_eq!(block.lines()[2], "│ ab   │");
    }

    #[test]
    fn test_custom_glyphs() {
        let decorations = Decorations {
            top_left: "+".into(),
            top_right: "+".into(),
            bottom_left: "+".into(),
            bottom_right: "+".into(),
            top_edge: "-".into(),
            bottom_edge: "=".into(),
            left_edge: "|".into(),
            right_edge: "!".into(),
            separator: "~".into(),
        };
        let block = draw_box(&["x".to_string()], &decorations);
        assert_eq!(block.to_text(), "+---+\n| x !\n+===+");
    }
}
