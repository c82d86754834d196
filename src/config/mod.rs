//! Configuration du désassembleur

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::format::FormatConfig;
use crate::rom::{BASE_ADDRESS, MIN_PROGRAM_SIZE};

/// Configuration principale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisasmConfig {
    pub format: FormatConfig,
    pub program: ProgramConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Adresse affichée pour le premier mot du programme
    pub base_address: u16,

    /// Taille minimale acceptée, en octets
    pub min_size: usize,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            base_address: BASE_ADDRESS,
            min_size: MIN_PROGRAM_SIZE,
        }
    }
}

impl DisasmConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("lecture de la configuration {}", path.display()))?;
        let config: DisasmConfig = toml::from_str(&contents)
            .with_context(|| format!("configuration invalide {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load_from_file(path).unwrap_or_default()
    }
}
