//! Décodeur d'instructions CHIP-8
//!
//! Le décodage passe par trois étages de masques appliqués dans l'ordre.
//! Les masques se chevauchent au niveau des bits : un opcode `0x8xyz` ne
//! correspond à aucun cas du premier étage et doit retomber sur le second.

use super::instruction_formats::OpcodeFields;
use super::instructions::{Instruction, Mnemonic, Operand};

/// Forme des opérandes d'une instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandShape {
    /// `addr`
    Addr,
    /// `Vx, kk`
    RegByte,
    /// `Vx, Vy`
    RegReg,
    /// `Vx {, Vy}`
    RegOptReg,
    /// `Vx, Vy, n`
    RegRegNibble,
    /// `Vx`
    Reg,
    /// `<alias>, addr`
    AliasAddr(&'static str),
    /// `<alias>, Vx`
    AliasReg(&'static str),
    /// `Vx, <littéral>`
    RegLiteral(&'static str),
    /// `<littéral>, Vx`
    LiteralReg(&'static str),
    /// `[I], Vx`
    IndirectReg,
    /// `Vx, [I]`
    RegIndirect,
}

impl OperandShape {
    /// Construit les opérandes à partir des champs de l'opcode
    pub fn operands(self, f: OpcodeFields) -> Vec<Operand> {
        use Operand::*;

        match self {
            OperandShape::Addr => vec![Address(f.addr)],
            OperandShape::RegByte => vec![Register(f.x), Byte(f.kk)],
            OperandShape::RegReg => vec![Register(f.x), Register(f.y)],
            OperandShape::RegOptReg => vec![Register(f.x), Optional(Box::new(Register(f.y)))],
            OperandShape::RegRegNibble => vec![Register(f.x), Register(f.y), Nibble(f.n)],
            OperandShape::Reg => vec![Register(f.x)],
            OperandShape::AliasAddr(name) => vec![RegisterAlias(name), Address(f.addr)],
            OperandShape::AliasReg(name) => vec![RegisterAlias(name), Register(f.x)],
            OperandShape::RegLiteral(text) => vec![Register(f.x), Literal(text)],
            OperandShape::LiteralReg(text) => vec![Literal(text), Register(f.x)],
            OperandShape::IndirectReg => vec![IndexIndirect, Register(f.x)],
            OperandShape::RegIndirect => vec![Register(f.x), IndexIndirect],
        }
    }
}

/// Un cas de la table : valeur masquée attendue et instruction produite
#[derive(Debug, Clone, Copy)]
pub struct DecodeCase {
    pub pattern: u16,
    pub mnemonic: Mnemonic,
    pub shape: OperandShape,
}

impl DecodeCase {
    const fn new(pattern: u16, mnemonic: Mnemonic, shape: OperandShape) -> Self {
        Self { pattern, mnemonic, shape }
    }

    /// Produit l'instruction correspondant à ce cas
    pub fn build(&self, opcode: u16) -> Instruction {
        let fields = OpcodeFields::from_opcode(opcode);
        Instruction::new(self.mnemonic, self.shape.operands(fields))
    }
}

/// Étage de décodage : un masque et les cas mutuellement exclusifs associés
#[derive(Debug)]
pub struct DecodeStage {
    pub mask: u16,
    pub cases: &'static [DecodeCase],
}

impl DecodeStage {
    /// Cherche le cas correspondant à l'opcode dans cet étage
    pub fn lookup(&self, opcode: u16) -> Option<&'static DecodeCase> {
        let key = opcode & self.mask;
        self.cases.iter().find(|case| case.pattern == key)
    }
}

use Mnemonic::*;
use OperandShape::*;

/// Instructions identifiées par leur seul quartet de poids fort
const UNIQUE_NIBBLE_CASES: &[DecodeCase] = &[
    DecodeCase::new(0x0000, Sys, Addr),
    DecodeCase::new(0x1000, Jp, Addr),
    DecodeCase::new(0x2000, Call, Addr),
    DecodeCase::new(0x3000, Se, RegByte),
    DecodeCase::new(0x4000, Sne, RegByte),
    DecodeCase::new(0x5000, Se, RegReg),
    DecodeCase::new(0x6000, Ld, RegByte),
    DecodeCase::new(0x7000, Add, RegByte),
    DecodeCase::new(0x9000, Sne, RegReg),
    DecodeCase::new(0xA000, Ld, AliasAddr("I")),
    DecodeCase::new(0xB000, Jp, AliasAddr("V0")),
    DecodeCase::new(0xC000, Rnd, RegByte),
    DecodeCase::new(0xD000, Drw, RegRegNibble),
];

/// Groupe arithmétique et logique 8xy#
const ARITHMETIC_CASES: &[DecodeCase] = &[
    DecodeCase::new(0x8000, Ld, RegReg),
    DecodeCase::new(0x8001, Or, RegReg),
    DecodeCase::new(0x8002, And, RegReg),
    DecodeCase::new(0x8003, Xor, RegReg),
    DecodeCase::new(0x8004, Add, RegReg),
    DecodeCase::new(0x8005, Sub, RegReg),
    DecodeCase::new(0x8006, Shr, RegOptReg),
    DecodeCase::new(0x8007, Subn, RegReg),
    DecodeCase::new(0x800E, Shl, RegOptReg),
];

/// Groupes Ex## (clavier) et Fx## (timers, mémoire)
const MISC_CASES: &[DecodeCase] = &[
    DecodeCase::new(0xE09E, Skp, Reg),
    DecodeCase::new(0xE0A1, Sknp, Reg),
    DecodeCase::new(0xF007, Ld, RegLiteral("DT")),
    DecodeCase::new(0xF00A, Ld, RegLiteral("K")),
    DecodeCase::new(0xF015, Ld, LiteralReg("DT")),
    DecodeCase::new(0xF018, Ld, LiteralReg("ST")),
    DecodeCase::new(0xF01E, Add, AliasReg("I")),
    DecodeCase::new(0xF029, Ld, LiteralReg("F")),
    DecodeCase::new(0xF033, Ld, LiteralReg("B")),
    DecodeCase::new(0xF055, Ld, IndirectReg),
    DecodeCase::new(0xF065, Ld, RegIndirect),
];

/// Étages de décodage, dans l'ordre de priorité
pub const DECODE_STAGES: [DecodeStage; 3] = [
    DecodeStage { mask: 0xF000, cases: UNIQUE_NIBBLE_CASES },
    DecodeStage { mask: 0xF00F, cases: ARITHMETIC_CASES },
    DecodeStage { mask: 0xF0FF, cases: MISC_CASES },
];

/// Décode un opcode brut en instruction structurée
///
/// La fonction est totale : un opcode qui ne correspond à aucun cas donne
/// [`Instruction::Unknown`].
pub fn decode(opcode: u16) -> Instruction {
    DECODE_STAGES
        .iter()
        .find_map(|stage| stage.lookup(opcode))
        .map(|case| case.build(opcode))
        .unwrap_or(Instruction::Unknown)
}
