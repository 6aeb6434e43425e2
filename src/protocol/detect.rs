//! Protocol auto-detection.
//!
//! [`DETECTION_ORDER`] is a fixed priority list: terminal identification
//! first (kitty, then iTerm2), then a `TERM` match for sixel-capable
//! terminals, then the `chafa` binary, then a `terminal-image` binary. The
//! first protocol with a matching signal wins.

use super::env::Environment;
use super::Protocol;

/// One piece of evidence that a protocol is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Environment variable set to a non-empty value.
    VarPresent(&'static str),
    /// Environment variable equal to a value.
    VarEquals(&'static str, &'static str),
    /// `TERM` contains one of the fragments.
    TermContains(&'static [&'static str]),
    /// Executable found on `PATH`.
    Binary(&'static str),
}

impl Signal {
    pub fn matches(&self, env: &dyn Environment) -> bool {
        match *self {
            Signal::VarPresent(key) => env.var(key).is_some_and(|v| !v.is_empty()),
            Signal::VarEquals(key, expected) => env.var(key).is_some_and(|v| v == expected),
            Signal::TermContains(fragments) => env
                .var("TERM")
                .is_some_and(|term| fragments.iter().any(|f| term.contains(f))),
            Signal::Binary(name) => env.find_binary(name).is_some(),
        }
    }
}

/// Protocols in detection priority order, each with the signals that select it.
pub const DETECTION_ORDER: &[(Protocol, &[Signal])] = &[
    (
        Protocol::Kitty,
        &[
            Signal::VarPresent("KITTY_WINDOW_ID"),
            Signal::VarEquals("TERM", "xterm-kitty"),
        ],
    ),
    (
        Protocol::Iterm2,
        &[
            Signal::VarPresent("ITERM_SESSION_ID"),
            Signal::VarEquals("TERM_PROGRAM", "iTerm.app"),
        ],
    ),
    (Protocol::Sixel, &[Signal::TermContains(&["sixel", "mlterm"])]),
    (Protocol::Chafa, &[Signal::Binary("chafa")]),
    (Protocol::TerminalImage, &[Signal::Binary("terminal-image")]),
];

/// Every protocol whose signals match, in priority order.
pub fn candidates(env: &dyn Environment) -> Vec<Protocol> {
    DETECTION_ORDER
        .iter()
        .filter(|(_, signals)| signals.iter().any(|s| s.matches(env)))
        .map(|(protocol, _)| *protocol)
        .collect()
}

/// The highest-priority usable protocol.
pub fn detect(env: &dyn Environment) -> Option<Protocol> {
    DETECTION_ORDER
        .iter()
        .find(|(_, signals)| signals.iter().any(|s| s.matches(env)))
        .map(|(protocol, _)| *protocol)
}
