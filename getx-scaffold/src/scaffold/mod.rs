//! GetX page scaffolding
//!
//! Derives names from a page name, renders the view, binding, logic and
//! state templates and writes them into a page folder.

pub mod filesystem;
pub mod generator;
pub mod helpers;

pub use filesystem::{Filesystem, LocalFilesystem};
pub use generator::{generate_files, GeneratedFile, GeneratedPage, PageGenerator};
pub use helpers::TemplateHelpers;
