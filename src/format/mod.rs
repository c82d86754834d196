//! Mise en forme des instructions décodées
//!
//! Chaque classe d'opérande a son propre style. Le style ne modifie jamais
//! le texte : une fois les codes ANSI retirés, la sortie colorée est
//! identique à la sortie brute.

use owo_colors::{OwoColorize, Style};
use serde::{Deserialize, Serialize};

use crate::cpu::{Instruction, Mnemonic, Operand};

/// Espacement entre l'opcode et le mnémonique
pub const GUTTER: &str = "   ";

/// Largeur minimale du mnémonique
pub const MNEMONIC_WIDTH: usize = 4;

/// Marqueur affiché pour les opcodes inconnus
pub const UNKNOWN_MARKER: &str = "(Unknown)";

/// Configuration du formateur
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Désactive les codes de couleur (sortie brute, déterministe)
    pub disable_styling: bool,
}

impl FormatConfig {
    pub fn plain() -> Self {
        Self { disable_styling: true }
    }
}

/// Styles appliqués à chaque classe de texte
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub opcode: Style,
    pub mnemonic: Style,
    pub address: Style,
    pub register: Style,
    pub byte: Style,
    pub nibble: Style,
    pub unknown: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            opcode: Style::new().bold().bright_black(),
            mnemonic: Style::new().bold().white(),
            address: Style::new().green(),
            register: Style::new().cyan(),
            byte: Style::new().blue(),
            nibble: Style::new().blue(),
            unknown: Style::new().bold().bright_black(),
        }
    }
}

/// Formateur d'instructions
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    config: FormatConfig,
    palette: Palette,
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self::with_palette(config, Palette::default())
    }

    pub fn with_palette(config: FormatConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    /// Formateur sans couleurs
    pub fn plain() -> Self {
        Self::new(FormatConfig::plain())
    }

    pub fn config(&self) -> FormatConfig {
        self.config
    }

    /// Produit la ligne de listing d'une instruction
    pub fn render(&self, opcode: u16, instruction: &Instruction) -> String {
        match instruction {
            Instruction::Unknown => {
                format!("{}{}{}", self.opcode(opcode), GUTTER, self.unknown())
            }
            Instruction::Known { mnemonic, operands } => {
                let mut line = format!(
                    "{}{}{}",
                    self.opcode(opcode),
                    GUTTER,
                    self.mnemonic(*mnemonic)
                );
                if !operands.is_empty() {
                    line.push(' ');
                    line.push_str(&self.operands(operands));
                }
                line
            }
        }
    }

    /// Liste d'opérandes séparés par des virgules
    pub fn operands(&self, operands: &[Operand]) -> String {
        let mut text = String::new();
        for (i, operand) in operands.iter().enumerate() {
            match operand {
                Operand::Optional(inner) => {
                    text.push_str(" {, ");
                    text.push_str(&self.operand(inner));
                    text.push('}');
                }
                _ => {
                    if i > 0 {
                        text.push_str(", ");
                    }
                    text.push_str(&self.operand(operand));
                }
            }
        }
        text
    }

    pub fn operand(&self, operand: &Operand) -> String {
        match operand {
            Operand::Address(addr) => self.address(*addr),
            Operand::Register(r) => self.register(*r),
            Operand::RegisterAlias(name) => self.surround(name, self.palette.register),
            Operand::Byte(b) => self.surround(&format!("#{:02X}", b), self.palette.byte),
            Operand::Nibble(n) => {
                self.surround(&format!("#{:X}", n & 0x0F), self.palette.nibble)
            }
            Operand::Literal(text) => text.to_string(),
            Operand::IndexIndirect => self.surround("[I]", self.palette.address),
            Operand::Optional(inner) => self.operand(inner),
        }
    }

    pub fn opcode(&self, opcode: u16) -> String {
        self.surround(&format!("{:04x}", opcode), self.palette.opcode)
    }

    /// Mnémonique complété à 4 colonnes, y compris pour JP (`JP   $0ABC`)
    pub fn mnemonic(&self, mnemonic: Mnemonic) -> String {
        let padded = format!("{:<width$}", mnemonic.as_str(), width = MNEMONIC_WIDTH);
        self.surround(&padded, self.palette.mnemonic)
    }

    /// Adresse sur 4 chiffres : 0xABC s'affiche `$0ABC`
    pub fn address(&self, addr: u16) -> String {
        self.surround(&format!("${:04X}", addr & 0x0FFF), self.palette.address)
    }

    pub fn register(&self, r: u8) -> String {
        self.surround(&format!("V{:X}", r & 0x0F), self.palette.register)
    }

    pub fn unknown(&self) -> String {
        self.surround(UNKNOWN_MARKER, self.palette.unknown)
    }

    fn surround(&self, text: &str, style: Style) -> String {
        if self.config.disable_styling {
            text.to_string()
        } else {
            text.style(style).to_string()
        }
    }
}
