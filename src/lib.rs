//! Helpdeck — block-based help-center page composer for the terminal
//!
//! This crate provides the page document model (blocks, ordered repeater
//! editing, accordion disclosure state) and the TUI frontend used to compose
//! a help-center page. The public module re-exports the domain core; the
//! runtime/boot helpers are placed in hidden modules to keep implementation
//! details out of the generated documentation.

pub mod core;

#[doc(hidden)]
pub mod boot;
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod i18n;
#[doc(hidden)]
pub mod tui;
