//! Instructions du jeu CHIP-8

/// Mnémoniques reconnus par le décodeur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    // Instructions système et de branchement
    Sys,
    Jp,
    Call,

    // Sauts conditionnels
    Se,
    Sne,
    Skp,
    Sknp,

    // Transferts
    Ld,

    // Instructions arithmétiques et logiques
    Add,
    Or,
    And,
    Xor,
    Sub,
    Shr,
    Subn,
    Shl,

    // Instructions spéciales
    Rnd,
    Drw,
}

impl Mnemonic {
    /// Nom en majuscules, tel qu'affiché dans le listing
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Sys => "SYS",
            Mnemonic::Jp => "JP",
            Mnemonic::Call => "CALL",
            Mnemonic::Se => "SE",
            Mnemonic::Sne => "SNE",
            Mnemonic::Skp => "SKP",
            Mnemonic::Sknp => "SKNP",
            Mnemonic::Ld => "LD",
            Mnemonic::Add => "ADD",
            Mnemonic::Or => "OR",
            Mnemonic::And => "AND",
            Mnemonic::Xor => "XOR",
            Mnemonic::Sub => "SUB",
            Mnemonic::Shr => "SHR",
            Mnemonic::Subn => "SUBN",
            Mnemonic::Shl => "SHL",
            Mnemonic::Rnd => "RND",
            Mnemonic::Drw => "DRW",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opérandes des instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Adresse mémoire sur 12 bits
    Address(u16),

    /// Registre général (V0-VF)
    Register(u8),

    /// Pseudo-registre nommé (I, V0 comme base de saut)
    RegisterAlias(&'static str),

    /// Valeur immédiate sur 8 bits
    Byte(u8),

    /// Valeur immédiate sur 4 bits
    Nibble(u8),

    /// Texte fixe ne dépendant pas de l'opcode (DT, ST, K, F, B)
    Literal(&'static str),

    /// Mémoire pointée par le registre d'index ([I])
    IndexIndirect,

    /// Opérande historiquement optionnel (second registre de SHR/SHL)
    Optional(Box<Operand>),
}

/// Résultat du décodage d'un opcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Instruction reconnue
    Known {
        mnemonic: Mnemonic,
        operands: Vec<Operand>,
    },

    /// Instruction inconnue
    Unknown,
}

impl Instruction {
    /// Construit une instruction reconnue
    pub fn new(mnemonic: Mnemonic, operands: Vec<Operand>) -> Self {
        Instruction::Known { mnemonic, operands }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Instruction::Unknown)
    }

    /// Mnémonique de l'instruction, `None` si elle est inconnue
    pub fn mnemonic(&self) -> Option<Mnemonic> {
        match self {
            Instruction::Known { mnemonic, .. } => Some(*mnemonic),
            Instruction::Unknown => None,
        }
    }

    /// Opérandes de l'instruction (vide si inconnue)
    pub fn operands(&self) -> &[Operand] {
        match self {
            Instruction::Known { operands, .. } => operands,
            Instruction::Unknown => &[],
        }
    }
}
