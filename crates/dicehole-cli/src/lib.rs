//! Headless shell for dicehole.
//!
//! Plays a puzzle from a script of pointer events instead of a touch screen,
//! and prints frames as text.
#![allow(clippy::missing_errors_doc)]

pub mod args;
pub mod render;
pub mod script;
pub mod session;
