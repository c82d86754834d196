//! Validation des programmes CHIP-8

use std::path::PathBuf;

use thiserror::Error;

/// Erreurs de chargement d'un programme
#[derive(Debug, Error)]
pub enum ProgramError {
    /// Fichier illisible
    #[error("impossible de lire {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fichier trop petit pour être un programme
    #[error("fichier trop petit pour être un programme CHIP-8: {size} octets (minimum {min})")]
    TooSmall { size: usize, min: usize },
}

/// Résultat de validation d'un programme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Taille du programme en octets
    pub size: usize,

    /// Checksum CRC32 calculé
    pub crc32: u32,

    /// Nombre d'octets ignorés en fin de programme (mot incomplet)
    pub trailing_bytes: usize,
}

/// Validateur de programmes
pub struct ProgramValidator;

impl ProgramValidator {
    /// Vérifie qu'un programme respecte la taille minimale
    pub fn validate(data: &[u8], min_size: usize) -> Result<ValidationResult, ProgramError> {
        if data.len() < min_size {
            return Err(ProgramError::TooSmall {
                size: data.len(),
                min: min_size,
            });
        }

        Ok(ValidationResult {
            size: data.len(),
            crc32: Self::calculate_crc32(data),
            trailing_bytes: data.len() % crate::cpu::INSTRUCTION_SIZE,
        })
    }

    /// Calcule le CRC32
    pub fn calculate_crc32(data: &[u8]) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}
