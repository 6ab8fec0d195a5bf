//! Config loading facade: assembles the sources and validates the result.

use super::sources::{environment, explicit_file, global_file};
use super::CxlConfig;
use crate::error::CxlError;
use config::Config;
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults, global file, optional explicit file and environment.
    pub fn load(explicit: Option<&Path>) -> Result<CxlConfig, CxlError> {
        let mut builder = global_file::add_to_builder(Config::builder())?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = environment::add_to_builder(builder);

        let config: CxlConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a single file, ignoring the global file and environment.
    pub fn load_from_file(path: &Path) -> Result<CxlConfig, CxlError> {
        let builder = explicit_file::add_to_builder(Config::builder(), path)?;
        let config: CxlConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
