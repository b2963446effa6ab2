//! Command-line front end: line input with validation, and the start menu.

#![cfg(feature = "std")]

pub mod input;
pub mod menu;

pub use input::InputReader;
pub use menu::{login_menu, MenuChoice};
