pub mod metadata;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "phonehunter")]
#[command(about = "Phone number report generator with quick search links")]
pub struct CliConfig {
    /// Phone number in international format, e.g. +9665xxxxxxx
    #[arg(value_name = "PHONE")]
    pub phone: String,

    #[arg(long, default_value = "results")]
    pub output_dir: String,

    /// TOML file replacing the built-in country/carrier/timezone table
    #[arg(long)]
    pub metadata: Option<String>,

    /// Seed for the placeholder generator, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report without writing any files
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("phone", &self.phone)?;
        validate_path("output_dir", &self.output_dir)?;
        if let Some(metadata) = &self.metadata {
            validate_path("metadata", metadata)?;
        }
        Ok(())
    }
}
