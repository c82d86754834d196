//! Décodage du jeu d'instructions CHIP-8
//!
//! Chaque instruction CHIP-8 tient sur un mot de 16 bits big-endian.
//! Le décodage est une fonction pure et totale : tout opcode produit une
//! instruction, éventuellement [`Instruction::Unknown`].

pub mod decoder;
pub mod instruction_formats;
pub mod instructions;

pub use decoder::*;
pub use instruction_formats::*;
pub use instructions::*;

/// Taille d'une instruction en octets
pub const INSTRUCTION_SIZE: usize = 2;
