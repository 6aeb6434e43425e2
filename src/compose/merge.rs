//! Vertical and horizontal block merging.

use super::block::Block;
use crate::terminal::pad_to_width;

/// Columns between horizontally merged blocks.
pub const GUTTER: usize = 2;

/// Place `right` beside `left`.
///
/// Both blocks are normalized first. The right block starts at column
/// `left.width() + gutter` on every row; rows run to the taller block's
/// height, so a row present on one side only is padded through the gutter.
/// Rows a block reserves for a pixel image stay in the result.
///
/// # Example
/// ```ignore
/// let a = Block::from_text("aaa\na");
/// let b = Block::from_text("bb\nbbbb");
/// assert_eq!(beside(&a, &b, 2).to_text(), "aaa  bb\na    bbbb");
/// ```
pub fn beside(left: &Block, right: &Block, gutter: usize) -> Block {
    let left = left.normalized();
    let right = right.normalized();
    let column = left.width() + gutter;
    let rows = left.height().max(right.height());

    let lines = (0..rows)
        .map(|row| {
            let l = left.lines().get(row).map_or("", String::as_str);
            let r = right.lines().get(row).map_or("", String::as_str);
            if r.is_empty() {
                l.to_string()
            } else {
                pad_to_width(l, column) + r
            }
        })
        .collect();

    Block::new(lines).with_min_height(left.min_height().max(right.min_height()))
}

/// Merge blocks left to right with [`beside`].
pub fn row(blocks: &[&Block], gutter: usize) -> Block {
    let mut iter = blocks.iter();
    let first = match iter.next() {
        Some(block) => block.normalized(),
        None => return Block::default(),
    };
    iter.fold(first, |acc, block| beside(&acc, block, gutter))
}

/// Stack blocks top to bottom.
pub fn stack(blocks: &[&Block]) -> Block {
    let lines = blocks
        .iter()
        .flat_map(|block| block.normalized().lines().to_vec())
        .collect();
    Block::new(lines)
}
