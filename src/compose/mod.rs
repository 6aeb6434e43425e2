//! Composition of the logo, image and info blocks into the final output.
//!
//! The info box anchors the layout. Blocks placed `left` or `right` join it
//! in one horizontal row; blocks placed `above` or `below` are stacked
//! around that row. Every block is normalized before merging and the result
//! ends with exactly one newline, plus the rows a pixel image still reserves.

mod block;
mod merge;
mod placement;

pub use block::Block;
pub use merge::{beside, row, stack, GUTTER};
pub use placement::{DisplayOrder, Layout, Placement};

/// Merge the rendered blocks according to `layout`.
///
/// Absent or blank blocks are skipped. A lone block is returned as it was
/// rendered, with a newline appended only when missing. Rows reserved for
/// a pixel image are always ended, so the cursor finishes below it.
///
/// # Arguments
/// * `info` - The bordered system information box
/// * `logo` - ASCII logo block, if enabled and loaded
/// * `image` - Image block, if enabled and rendered in-band
/// * `layout` - Placements of logo and image, and which goes first
pub fn compose(
    info: Option<&Block>,
    logo: Option<&Block>,
    image: Option<&Block>,
    layout: &Layout,
) -> String {
    fn visible(block: Option<&Block>) -> Option<&Block> {
        block.filter(|b| !b.is_blank())
    }
    let (info, logo, image) = (visible(info), visible(logo), visible(image));

    let present: Vec<&Block> = [info, logo, image].into_iter().flatten().collect();
    match present.as_slice() {
        [] => return "\n".to_string(),
        [only] if only.min_height() > 0 => return only.to_text() + "\n",
        [only] => return with_newline(only.to_text()),
        _ => {}
    }

    let sides = if layout.order.image_first() {
        [(image, layout.image), (logo, layout.logo)]
    } else {
        [(logo, layout.logo), (image, layout.image)]
    };

    let (mut above, mut below, mut left, mut right) = (vec![], vec![], vec![], vec![]);
    for (block, placement) in sides {
        let Some(block) = block else { continue };
        match placement {
            Placement::Above => above.push(block),
            Placement::Below => below.push(block),
            Placement::Left => left.push(block),
            Placement::Right => right.push(block),
        }
    }

    let middle: Vec<&Block> = left.into_iter().chain(info).chain(right).collect();
    let middle = row(&middle, GUTTER);

    let all: Vec<&Block> = above
        .into_iter()
        .chain(std::iter::once(&middle))
        .chain(below)
        .collect();
    stack(&all).to_text() + "\n"
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(logo: Placement, image: Placement, image_first: bool) -> Layout {
        Layout {
            logo,
            image,
            order: DisplayOrder {
                show_logo_first: !image_first,
                show_image_first: image_first,
            },
        }
    }

    #[test]
    fn test_nothing_to_show() {
        assert_eq!(compose(None, None, None, &Layout::default()), "\n");
        let blank = Block::from_text("  \n");
        assert_eq!(compose(Some(&blank), None, None, &Layout::default()), "\n");
    }

    #[test]
    fn test_single_block_untouched() {
        let info = Block::from_text("╭──╮  \n│hi│\n╰──╯");
        assert_eq!(
            compose(Some(&info), None, None, &Layout::default()),
            "╭──╮  \n│hi│\n╰──╯\n"
        );

        let image = Block::from_text("\x1b_Gpayload\x1b\\\n");
        assert_eq!(
            compose(None, None, Some(&image), &Layout::default()),
            "\x1b_Gpayload\x1b\\\n"
        );
    }

    #[test]
    fn test_logo_left_of_info() {
        let info = Block::from_text("i1\ni2");
        let logo = Block::from_text("L");
        let out = compose(
            Some(&info),
            Some(&logo),
            None,
            &layout(Placement::Left, Placement::Left, false),
        );
        assert_eq!(out, "L  i1\n   i2\n");
    }

    #[test]
    fn test_both_left_order() {
        let info = Block::from_text("i");
        let logo = Block::from_text("L");
        let image = Block::from_text("M");

        let out = compose(
            Some(&info),
            Some(&logo),
            Some(&image),
            &layout(Placement::Left, Placement::Left, false),
        );
        assert_eq!(out, "L  M  i\n");

        let out = compose(
            Some(&info),
            Some(&logo),
            Some(&image),
            &layout(Placement::Left, Placement::Left, true),
        );
        assert_eq!(out, "M  L  i\n");
    }

    #[test]
    fn test_opposite_sides() {
        let info = Block::from_text("info");
        let logo = Block::from_text("L\nL");
        let image = Block::from_text("M");
        let out = compose(
            Some(&info),
            Some(&logo),
            Some(&image),
            &layout(Placement::Right, Placement::Left, false),
        );
        assert_eq!(out, "M  info  L\n         L\n");
    }

    #[test]
    fn test_vertical_stacking() {
        let info = Block::from_text("info  \n\n");
        let logo = Block::from_text("logo");
        let image = Block::from_text("img");

        let out = compose(
            Some(&info),
            Some(&logo),
            Some(&image),
            &layout(Placement::Above, Placement::Below, false),
        );
        assert_eq!(out, "logo\ninfo\nimg\n");

        let out = compose(
            Some(&info),
            Some(&logo),
            Some(&image),
            &layout(Placement::Above, Placement::Above, true),
        );
        assert_eq!(out, "img\nlogo\ninfo\n");
    }

    #[test]
    fn test_kitty_image_left_keeps_its_area() {
        let payload = "\x1b_Ga=T,f=100,c=20,r=3,C=1,m=0;AAAA\x1b\\";
        let image = Block::reserved(payload, 20, 3);
        let info = Block::from_text("╭──╮\n│hi│\n╰──╯");
        let out = compose(
            Some(&info),
            None,
            Some(&image),
            &layout(Placement::Left, Placement::Left, true),
        );
        let gap = " ".repeat(20 + GUTTER);
        assert_eq!(
            out,
            format!("{payload}{gap}╭──╮\n{gap}│hi│\n{gap}╰──╯\n")
        );
    }

    #[test]
    fn test_pixel_image_taller_than_info() {
        let image = Block::reserved("\x1b_GX\x1b\\", 4, 3);
        let info = Block::from_text("hi");
        let out = compose(
            Some(&info),
            None,
            Some(&image),
            &layout(Placement::Left, Placement::Left, true),
        );
        assert_eq!(out, "\x1b_GX\x1b\\      hi\n\n\n");

        let out = compose(None, None, Some(&image), &Layout::default());
        assert_eq!(out, "\x1b_GX\x1b\\\n\n\n");
    }

    #[test]
    fn test_pixel_image_above_info() {
        let image = Block::reserved("\x1b7\x1bPq#0~\x1b\\\x1b8", 5, 2);
        let info = Block::from_text("info");
        let out = compose(
            Some(&info),
            None,
            Some(&image),
            &layout(Placement::Left, Placement::Above, true),
        );
        assert_eq!(out, "\x1b7\x1bPq#0~\x1b\\\x1b8\n\ninfo\n");
    }

    #[test]
    fn test_missing_info_still_merges() {
        let logo = Block::from_text("L");
        let image = Block::from_text("M");
        let out = compose(
            None,
            Some(&logo),
            Some(&image),
            &layout(Placement::Left, Placement::Right, false),
        );
        assert_eq!(out, "L  M\n");
    }
}
