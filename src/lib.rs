//! Tabbed navigation components for Leptos: a [`Tabs`] container, a [`Tab`]
//! header, and the [`use_tabs()`] selection hook behind them.
//!
//! The host supplies a [`TabSet`] of descriptors; the container renders one
//! header per non-hidden descriptor and swaps the content pane on click,
//! reporting every selection through a sanitized [`SelectEvent`].

pub mod tab;
pub mod tabs;
pub mod types;
pub mod use_tabs;
pub mod utils;

pub use tab::{Tab, DEFAULT_TEST_ID};
pub use tabs::Tabs;
pub use types::{ActiveStyles, SelectEvent, TabDescriptor, TabLabel, TabNode, TabSet};
pub use use_tabs::{use_tabs, UseTabs};
pub use utils::clean_object;
