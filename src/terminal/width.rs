//! Display width of terminal text.
//!
//! Rendered blocks carry SGR colour codes and whole image payloads (sixel,
//! kitty, iTerm2 sequences) next to wide icon glyphs, so column alignment
//! is measured in cells: escape sequences are zero-width and every other
//! character counts what `unicode-width` says it occupies.

use std::iter::Peekable;
use std::str::Chars;

use unicode_width::UnicodeWidthChar;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Number of terminal cells `text` occupies on one line.
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC {
            skip_escape(&mut chars);
            continue;
        }
        width += c.width().unwrap_or(0);
    }
    width
}

/// Right-pad `text` with spaces until it occupies `width` cells.
///
/// Text already at or beyond `width` is returned unchanged.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let current = display_width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(current));
    padded.push_str(text);
    for _ in current..width {
        padded.push(' ');
    }
    padded
}

/// True when `text` holds nothing but whitespace and CSI sequences.
///
/// Such a line draws nothing: it only changes colours, cursor visibility
/// and the like.
pub fn is_control_only(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESC {
            if chars.peek() != Some(&'[') {
                return false;
            }
            skip_escape(&mut chars);
            continue;
        }
        if !c.is_whitespace() {
            return false;
        }
    }
    true
}

/// Consume the remainder of an escape sequence whose ESC was just read.
fn skip_escape(chars: &mut Peekable<Chars<'_>>) {
    match chars.next() {
        // CSI: parameters then a final byte in @..~
        Some('[') => {
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        }
        // OSC, DCS, APC, PM, SOS: terminated by BEL or ST (ESC \)
        Some(']' | 'P' | '_' | '^' | 'X') => {
            while let Some(c) = chars.next() {
                if c == BEL {
                    break;
                }
                if c == ESC {
                    if chars.peek() == Some(&'\\') {
                        chars.next();
                    }
                    break;
                }
            }
        }
        // Two-character sequences such as ESC 7 / ESC 8
        _ => {}
    }
}
