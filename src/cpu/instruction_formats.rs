//! Champs de bits d'un opcode CHIP-8
//!
//! Toutes les instructions CHIP-8 font 16 bits et se découpent en quartets :
//!
//! +------+------+------+------+
//! |  op  |  x   |  y   |  n   |
//! +------+------+------+------+
//!        |        addr        |
//!               |     kk      |

/// Champs extraits d'un opcode avant le dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeFields {
    /// Quartet de poids fort (bits 12-15)
    pub op: u8,

    /// Registre x (bits 8-11)
    pub x: u8,

    /// Registre y (bits 4-7)
    pub y: u8,

    /// Immédiat sur 4 bits (bits 0-3)
    pub n: u8,

    /// Immédiat sur 8 bits (bits 0-7)
    pub kk: u8,

    /// Adresse sur 12 bits (bits 0-11)
    pub addr: u16,
}

impl OpcodeFields {
    /// Découpe un opcode en ses différents champs
    pub fn from_opcode(opcode: u16) -> Self {
        Self {
            op: ((opcode & 0xF000) >> 12) as u8,
            x: ((opcode & 0x0F00) >> 8) as u8,
            y: ((opcode & 0x00F0) >> 4) as u8,
            n: (opcode & 0x000F) as u8,
            kk: (opcode & 0x00FF) as u8,
            addr: opcode & 0x0FFF,
        }
    }
}

impl From<u16> for OpcodeFields {
    fn from(opcode: u16) -> Self {
        Self::from_opcode(opcode)
    }
}

/// Assemble un opcode big-endian à partir de deux octets consécutifs
pub fn opcode_from_bytes(high: u8, low: u8) -> u16 {
    u16::from_be_bytes([high, low])
}
