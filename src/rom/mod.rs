//! Programmes CHIP-8 : chargement et validation

pub mod loader;
pub mod validation;

pub use loader::*;
pub use validation::*;

/// Adresse de chargement des programmes CHIP-8
pub const BASE_ADDRESS: u16 = 0x200;

/// Taille minimale d'un programme valide
pub const MIN_PROGRAM_SIZE: usize = 0x200;

/// Programme chargé en mémoire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    data: Vec<u8>,
    name: String,
    base_address: u16,
    crc32: u32,
}

impl Program {
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn base_address(&self) -> u16 {
        self.base_address
    }

    pub fn crc32(&self) -> u32 {
        self.crc32
    }
}
