//! Rendered text blocks.

use crate::terminal::{display_width, is_control_only, pad_to_width};

/// A rendered, multi-line piece of output (logo, image or info box).
///
/// A block may reserve more cells than its text shows: a pixel image's
/// payload has no text width, yet it covers a known area of the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    lines: Vec<String>,
    min_width: usize,
    min_height: usize,
}

impl Block {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            min_width: 0,
            min_height: 0,
        }
    }

    /// Split `text` on `'\n'`. [`Block::to_text`] gives `text` back exactly.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split('\n').map(String::from).collect())
    }

    /// A `width` x `height` area whose first row carries `payload`.
    ///
    /// The payload must leave the cursor where it started; the remaining
    /// rows are empty and only hold the space the graphic is drawn over.
    pub fn reserved(payload: &str, width: usize, height: usize) -> Self {
        let height = height.max(1);
        let mut lines = vec![String::new(); height];
        lines[0] = payload.trim_end_matches('\n').to_string();
        Self {
            lines,
            min_width: width,
            min_height: height,
        }
    }

    /// Keep at least `height` rows through normalization.
    pub fn with_min_height(mut self, height: usize) -> Self {
        self.min_height = height;
        self
    }

    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Rows this block keeps however blank they are.
    pub fn min_height(&self) -> usize {
        self.min_height
    }

    /// Widest line or reserved width, in terminal cells.
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0)
            .max(self.min_width)
    }

    /// Copy with trailing whitespace stripped from every line and trailing
    /// blank lines removed.
    ///
    /// Trailing lines holding nothing but CSI sequences (a colour reset, a
    /// cursor-show) count as blank; their codes move onto the last kept line
    /// so the terminal state they restore is not lost.
    pub fn normalized(&self) -> Block {
        let mut lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| line.trim_end().to_string())
            .collect();

        let mut controls = Vec::new();
        while lines.len() > self.min_height
            && lines.last().is_some_and(|line| is_control_only(line))
        {
            if let Some(line) = lines.pop() {
                controls.push(line);
            }
        }
        if let Some(last) = lines.last_mut() {
            for codes in controls.iter().rev() {
                last.push_str(codes);
            }
        }

        Block {
            lines,
            min_width: self.min_width,
            min_height: self.min_height,
        }
    }

    /// Lines right-padded to the block's own width.
    pub fn padded_lines(&self) -> Vec<String> {
        let width = self.width();
        self.lines
            .iter()
            .map(|line| pad_to_width(line, width))
            .collect()
    }

    /// True when the block has no visible content and reserves no space.
    pub fn is_blank(&self) -> bool {
        self.min_width == 0 && self.lines.iter().all(|line| is_control_only(line))
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Block::from_text(text)
    }
}
