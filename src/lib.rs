//! chip8-disasm - Désassembleur CHIP-8
//!
//! Cette bibliothèque fournit le décodeur d'opcodes CHIP-8, la mise en forme
//! (colorée ou brute) des instructions, ainsi que le chargement des programmes
//! et la production du listing complet.

pub mod cli;
pub mod config;
pub mod cpu;
pub mod disasm;
pub mod format;
pub mod rom;

pub use config::*;
pub use cpu::*;
pub use disasm::*;
pub use format::*;
pub use rom::*;

/// Version du désassembleur
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
