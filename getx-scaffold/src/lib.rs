//! getx-scaffold library
//!
//! Generates the four files of a GetX page (view, binding, logic, state)
//! from a page name.
//!
//! ```rust,no_run
//! # fn main() -> Result<(), getx_scaffold::ScaffoldError> {
//! let page = getx_scaffold::generate_files("user_profile", std::path::Path::new("lib/pages"))?;
//! assert_eq!(page.files.len(), 4);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod templates;

pub use config::{OutputSettings, ScaffoldConfig};
pub use error::{ScaffoldError, ScaffoldResult};
pub use scaffold::{
    generate_files, Filesystem, GeneratedFile, GeneratedPage, LocalFilesystem, PageGenerator,
    TemplateHelpers,
};
pub use templates::TemplateKind;
