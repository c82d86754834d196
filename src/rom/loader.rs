//! Chargement des programmes CHIP-8 depuis le disque

use std::path::Path;

use log::{debug, warn};

use super::validation::{ProgramError, ProgramValidator};
use super::Program;
use crate::config::ProgramConfig;

/// Chargeur de programmes
#[derive(Debug, Clone, Default)]
pub struct ProgramLoader {
    config: ProgramConfig,
}

impl ProgramLoader {
    pub fn new(config: ProgramConfig) -> Self {
        Self { config }
    }

    /// Charge et valide un programme depuis un fichier
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Program, ProgramError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| ProgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let mut program = self.load_bytes(data)?;
        program.name = name;
        Ok(program)
    }

    /// Valide un programme déjà en mémoire
    pub fn load_bytes(&self, data: Vec<u8>) -> Result<Program, ProgramError> {
        let validation = ProgramValidator::validate(&data, self.config.min_size)?;

        debug!(
            "Programme chargé: {} octets, CRC32 {:#010x}",
            validation.size, validation.crc32
        );
        if validation.trailing_bytes > 0 {
            warn!(
                "{} octet(s) en fin de programme ignoré(s)",
                validation.trailing_bytes
            );
        }

        Ok(Program {
            data,
            name: String::new(),
            base_address: self.config.base_address,
            crc32: validation.crc32,
        })
    }
}
