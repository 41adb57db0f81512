//! SVG renderer for icon definitions
//!
//! This module takes an IconDefinition and produces a complete SVG
//! string, or a base64 data URI wrapping the same markup.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_data_uri, render_icon};
