//! Output generation for the static site.
//!
//! # Submodules
//!
//! - [`html`]: Renders city pages and the index to HTML strings
//! - [`site`]: Writes rendered pages into the output directory

pub mod html;
pub mod site;
