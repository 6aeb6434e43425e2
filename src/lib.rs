//! lunarfetch library crate.
//!
//! Renders a system information box next to an ASCII logo and an image
//! drawn with whichever terminal graphics protocol is available.

pub mod artwork;
pub mod cli;
pub mod compose;
pub mod config;
pub mod fetch;
pub mod info;
pub mod logo;
pub mod paths;
pub mod protocol;
pub mod terminal;
