//! Tests for block composition through the public API.

use lunarfetch::compose::{beside, compose, Block, DisplayOrder, Layout, Placement, GUTTER};

fn block(lines: &[&str]) -> Block {
    Block::new(lines.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_horizontal_merge_starts_right_block_after_gutter() {
    let merged = beside(&block(&["aaa", "a"]), &block(&["bb", "bbbb"]), GUTTER);
    assert_eq!(merged.lines()[0], "aaa  bb");
    assert_eq!(merged.lines()[1], "a    bbbb");
}

#[test]
fn test_colour_codes_do_not_shift_columns() {
    let left = block(&["\x1b[34maaa\x1b[0m", "a"]);
    let merged = beside(&left, &block(&["bb", "bbbb"]), GUTTER);
    assert_eq!(merged.lines()[0], "\x1b[34maaa\x1b[0m  bb");
    assert_eq!(merged.lines()[1], "a    bbbb");
}

#[test]
fn test_single_block_returned_unchanged() {
    let info = Block::from_text("╭────╮\n│ hi │   \n╰────╯");
    let out = compose(Some(&info), None, None, &Layout::default());
    assert_eq!(out, "╭────╮\n│ hi │   \n╰────╯\n");
}

#[test]
fn test_three_blocks_merge_in_visual_order() {
    let info = block(&["info"]);
    let logo = block(&["logo"]);
    let image = block(&["img", "img"]);
    let layout = Layout {
        logo: Placement::Left,
        image: Placement::Right,
        order: DisplayOrder::default(),
    };

    let out = compose(Some(&info), Some(&logo), Some(&image), &layout);
    assert_eq!(out, "logo  info  img\n            img\n");
}

#[test]
fn test_output_has_exactly_one_trailing_newline() {
    let info = block(&["info", "", ""]);
    let logo = block(&["logo", "   "]);
    let layout = Layout {
        logo: Placement::Below,
        ..Layout::default()
    };

    let out = compose(Some(&info), Some(&logo), None, &layout);
    assert_eq!(out, "info\nlogo\n");
}

#[test]
fn test_image_first_flag_orders_shared_side() {
    let info = block(&["i"]);
    let logo = block(&["L"]);
    let image = block(&["M"]);
    let mut layout = Layout {
        logo: Placement::Below,
        image: Placement::Below,
        order: DisplayOrder {
            show_logo_first: true,
            show_image_first: false,
        },
    };

    assert_eq!(compose(Some(&info), Some(&logo), Some(&image), &layout), "i\nL\nM\n");

    layout.order.show_image_first = true;
    assert_eq!(compose(Some(&info), Some(&logo), Some(&image), &layout), "i\nM\nL\n");
}
