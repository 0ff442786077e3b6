//! Color conversion core for the chroma CLI.
//!
//! Parses textual color notations (hex, rgb, hsl, hsv) into a canonical
//! [`Color`] value, converts between the three color models, and renders
//! the result back to text. No I/O happens here; the CLI owns the prompts.

pub mod convert;
pub mod error;
pub mod format;
pub mod model;
pub mod parse;

pub use error::{ColorError, ColorResult};
pub use format::render;
pub use model::{Color, ColorFormat};
pub use parse::parse;
