use crate::domain::model::{NumberType, RegionCode};
use crate::utils::error::{HunterError, Result};
use crate::utils::validation::{
    validate_digits, validate_non_empty_string, validate_region_code, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_METADATA: &str = include_str!("../../data/metadata.toml");

/// Timezone reported when nothing is known about the region.
pub const UNKNOWN_TIMEZONE: &str = "Etc/Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataTable {
    #[serde(default)]
    pub regions: HashMap<String, RegionMetadata>,
    #[serde(default)]
    pub carriers: Vec<CarrierMetadata>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionMetadata {
    pub name: String,
    pub timezones: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarrierMetadata {
    pub code: u16,
    pub prefixes: Vec<String>,
    pub name: String,
}

impl MetadataTable {
    /// The table shipped in `data/metadata.toml`.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_METADATA)
    }

    /// Loads a replacement table from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HunterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: Self = toml::from_str(content).map_err(|e| HunterError::MetadataError {
            message: format!("TOML parsing error: {}", e),
        })?;
        table.validate()?;
        Ok(table)
    }

    /// English country name for the region. Falls back to the region code,
    /// or an empty string when the region is unknown.
    pub fn country_name(&self, region: Option<RegionCode>) -> String {
        match region {
            Some(region) => self
                .regions
                .get(region.as_str())
                .map(|r| r.name.clone())
                .unwrap_or_else(|| region.to_string()),
            None => String::new(),
        }
    }

    pub fn timezones(&self, region: Option<RegionCode>) -> Vec<String> {
        region
            .and_then(|region| self.regions.get(region.as_str()))
            .map(|r| r.timezones.clone())
            .unwrap_or_else(|| vec![UNKNOWN_TIMEZONE.to_string()])
    }

    /// Carrier owning the longest matching prefix of the national number.
    /// Only mobile-capable numbers have a carrier; empty otherwise.
    pub fn carrier_name(
        &self,
        country_code: u16,
        national_number: u64,
        number_type: NumberType,
    ) -> String {
        if !number_type.is_mobile_capable() {
            return String::new();
        }

        let national = national_number.to_string();
        let national = national.as_str();
        self.carriers
            .iter()
            .filter(|carrier| carrier.code == country_code)
            .flat_map(|carrier| {
                carrier
                    .prefixes
                    .iter()
                    .filter(move |prefix| national.starts_with(prefix.as_str()))
                    .map(move |prefix| (prefix.len(), carrier))
            })
            // max_by_key keeps the last of equal keys; reverse so the first
            // listed carrier wins ties.
            .rev()
            .max_by_key(|(len, _)| *len)
            .map(|(_, carrier)| carrier.name.clone())
            .unwrap_or_default()
    }
}

impl Validate for MetadataTable {
    fn validate(&self) -> Result<()> {
        for (code, region) in &self.regions {
            let field = format!("regions.{}", code);
            validate_region_code(&field, code)?;
            validate_non_empty_string(&format!("{}.name", field), &region.name)?;
            if region.timezones.is_empty() {
                return Err(HunterError::InvalidConfigValueError {
                    field: format!("{}.timezones", field),
                    value: "[]".to_string(),
                    reason: "At least one timezone is required".to_string(),
                });
            }
            for zone in &region.timezones {
                validate_non_empty_string(&format!("{}.timezones", field), zone)?;
            }
        }

        for (index, carrier) in self.carriers.iter().enumerate() {
            let field = format!("carriers[{}]", index);
            validate_non_empty_string(&format!("{}.name", field), &carrier.name)?;
            for prefix in &carrier.prefixes {
                validate_digits(&format!("{}.prefixes", field), prefix)?;
            }
        }

        Ok(())
    }
}
