//! Smoko library exports for testing

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which of the two screens the binary hosts on startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Screen {
    /// The animated cigarette tap-counter.
    #[default]
    Counter,
    /// The posts list/detail browser.
    Posts,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Counter => "counter",
            Screen::Posts => "posts",
        }
    }
}
