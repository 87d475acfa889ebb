//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod generate;
mod preview;

pub use completions::handle_completions;
pub use generate::handle_generate;
pub use preview::handle_preview;

use crate::error::{Error, Result};
use enumgen_core::{InterfaceLoader, InterfaceModel};
use std::path::Path;

/// Load an interface definition, with a friendly missing-file error
pub(crate) fn load_definition(path: &Path) -> Result<InterfaceModel> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(InterfaceLoader::new().load_file(path)?)
}
