use chip8_disasm::{decode, FormatConfig, Formatter};

/// Retire les séquences d'échappement ANSI d'un texte
fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn plain(opcode: u16) -> String {
    Formatter::plain().render(opcode, &decode(opcode))
}

#[test]
fn test_jump_listing() {
    assert_eq!(plain(0x1ABC), "1abc   JP   $0ABC");
}

#[test]
fn test_register_and_byte_fields() {
    assert_eq!(plain(0x3A42), "3a42   SE   VA, #42");
}

#[test]
fn test_plain_listing_per_group() {
    let test_cases = [
        (0x00E0, "00e0   SYS  $00E0"),
        (0x2F00, "2f00   CALL $0F00"),
        (0x5120, "5120   SE   V1, V2"),
        (0xA123, "a123   LD   I, $0123"),
        (0xB200, "b200   JP   V0, $0200"),
        (0xD12F, "d12f   DRW  V1, V2, #F"),
        (0x8014, "8014   ADD  V0, V1"),
        (0x8AB7, "8ab7   SUBN VA, VB"),
        (0xE19E, "e19e   SKP  V1"),
        (0xE1A1, "e1a1   SKNP V1"),
        (0xF107, "f107   LD   V1, DT"),
        (0xF00A, "f00a   LD   V0, K"),
        (0xF015, "f015   LD   DT, V0"),
        (0xF418, "f418   LD   ST, V4"),
        (0xF01E, "f01e   ADD  I, V0"),
        (0xF529, "f529   LD   F, V5"),
        (0xF633, "f633   LD   B, V6"),
        (0xF355, "f355   LD   [I], V3"),
        (0xF365, "f365   LD   V3, [I]"),
    ];

    for (opcode, expected) in test_cases {
        assert_eq!(plain(opcode), expected);
    }
}

#[test]
fn test_shift_optional_operand() {
    assert_eq!(plain(0x8006), "8006   SHR  V0 {, V0}");
    assert_eq!(plain(0x8F06), "8f06   SHR  VF {, V0}");
    assert_eq!(plain(0x812E), "812e   SHL  V1 {, V2}");
}

#[test]
fn test_unknown_listing() {
    let line = plain(0xFFFF);
    assert!(line.starts_with("ffff"));
    assert!(line.to_lowercase().contains("unknown"));
    assert_eq!(line, "ffff   (Unknown)");
}

#[test]
fn test_styling_never_changes_text() {
    let styled = Formatter::new(FormatConfig { disable_styling: false });
    let plain = Formatter::plain();

    for opcode in 0..=u16::MAX {
        let instruction = decode(opcode);
        assert_eq!(
            strip_ansi(&styled.render(opcode, &instruction)),
            plain.render(opcode, &instruction),
            "opcode {:04X}",
            opcode
        );
    }
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let formatter = Formatter::plain();
    for opcode in [0x1ABC, 0x3A42, 0xFFFF, 0xF355] {
        assert!(!formatter.render(opcode, &decode(opcode)).contains('\u{1b}'));
    }
}

#[test]
fn test_styled_output_has_escape_codes() {
    let formatter = Formatter::new(FormatConfig::default());
    assert!(formatter.render(0x1ABC, &decode(0x1ABC)).contains('\u{1b}'));
    assert!(formatter.render(0xFFFF, &decode(0xFFFF)).contains('\u{1b}'));
}
