//! Parcours d'un programme et production du listing

use log::{debug, info};
use rayon::prelude::*;

use crate::cpu::{decode, opcode_from_bytes, Instruction, INSTRUCTION_SIZE};
use crate::format::Formatter;
use crate::rom::{Program, BASE_ADDRESS};

/// Ligne de listing décodée
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLine {
    /// Adresse affichée (offset + adresse de base), sans repli sur 16 bits
    pub address: u32,
    pub opcode: u16,
    pub instruction: Instruction,
}

/// Désassembleur : décode puis met en forme chaque mot d'un programme
#[derive(Debug, Clone, Copy, Default)]
pub struct Disassembler {
    formatter: Formatter,
}

impl Disassembler {
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Décode tous les mots complets d'un tampon
    ///
    /// Les mots sont décodés en parallèle, l'ordre du programme est conservé.
    /// Un octet final isolé est ignoré.
    pub fn decode_bytes(&self, bytes: &[u8], base_address: u16) -> Vec<ListingLine> {
        bytes
            .par_chunks_exact(INSTRUCTION_SIZE)
            .enumerate()
            .map(|(i, pair)| {
                let opcode = opcode_from_bytes(pair[0], pair[1]);
                ListingLine {
                    address: u32::from(base_address) + (i * INSTRUCTION_SIZE) as u32,
                    opcode,
                    instruction: decode(opcode),
                }
            })
            .collect()
    }

    /// Met en forme une ligne de listing
    pub fn render_line(&self, line: &ListingLine) -> String {
        format!(
            "{:04X}: {}",
            line.address,
            self.formatter.render(line.opcode, &line.instruction)
        )
    }

    /// Désassemble un tampon brut, chargé à l'adresse de base standard
    pub fn disassemble(&self, bytes: &[u8]) -> Vec<String> {
        self.disassemble_at(bytes, BASE_ADDRESS)
    }

    /// Désassemble un tampon brut chargé à `base_address`
    pub fn disassemble_at(&self, bytes: &[u8], base_address: u16) -> Vec<String> {
        let lines = self.decode_bytes(bytes, base_address);

        let unknown = lines.iter().filter(|l| l.instruction.is_unknown()).count();
        debug!("{} mots décodés, {} inconnus", lines.len(), unknown);

        lines.par_iter().map(|line| self.render_line(line)).collect()
    }

    /// Désassemble un programme validé
    pub fn disassemble_program(&self, program: &Program) -> Vec<String> {
        info!(
            "Désassemblage de {} ({} octets, CRC32 {:#010x})",
            if program.name().is_empty() { "<mémoire>" } else { program.name() },
            program.size(),
            program.crc32()
        );
        self.disassemble_at(program.data(), program.base_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_program_order() {
        let disasm = Disassembler::new(Formatter::plain());
        let bytes: Vec<u8> = (0..2048u32).flat_map(|i| (i as u16).to_be_bytes()).collect();
        let lines = disasm.decode_bytes(&bytes, 0x200);

        assert_eq!(lines.len(), 2048);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line.opcode, i as u16);
            assert_eq!(line.address, 0x200 + (i as u32) * 2);
        }
    }

    #[test]
    fn test_addresses_past_64k_do_not_wrap() {
        let disasm = Disassembler::new(Formatter::plain());
        let lines = disasm.disassemble(&vec![0x1A; 0x10000]);

        assert_eq!(lines.len(), 0x8000);
        assert_eq!(lines[0x7EFF], "FFFE: 1a1a   JP   $0A1A");
        assert_eq!(lines[0x7F00], "10000: 1a1a   JP   $0A1A");
        assert_eq!(lines[0x7FFF], "101FE: 1a1a   JP   $0A1A");
    }

    #[test]
    fn test_program_listing_uses_program_base() {
        use crate::config::ProgramConfig;
        use crate::rom::ProgramLoader;

        let config = ProgramConfig {
            base_address: 0x600,
            min_size: 0,
        };
        let data = vec![0x60, 0x2A, 0xA2, 0xF0];
        let program = ProgramLoader::new(config).load_bytes(data.clone()).unwrap();
        let disasm = Disassembler::new(Formatter::plain());

        assert_eq!(
            disasm.disassemble_program(&program),
            disasm.disassemble_at(&data, 0x600)
        );
        assert_eq!(disasm.disassemble_program(&program)[1], "0602: a2f0   LD   I, $02F0");
    }

    #[test]
    fn test_odd_trailing_byte_is_ignored() {
        let disasm = Disassembler::new(Formatter::plain());
        let lines = disasm.disassemble(&[0x1A, 0xBC, 0x12]);
        assert_eq!(lines, vec!["0200: 1abc   JP   $0ABC".to_string()]);
    }
}
