//! Text-menu presentation layer.
//!
//! Everything here is IO plumbing around the catalog and the access gate:
//! read a line, dispatch to the core contract, print the result (or the
//! recoverable error) and loop. The menus read from any `BufRead` and write
//! to any `Write`, so the whole flow is scriptable in tests.

pub mod app;
pub mod input;
pub mod render;

pub use app::App;
