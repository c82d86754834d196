//! Interface en ligne de commande

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use argh::FromArgs;
use log::debug;

use crate::config::DisasmConfig;
use crate::disasm::Disassembler;
use crate::format::Formatter;
use crate::rom::ProgramLoader;

/// Désassembleur CHIP-8.
#[derive(FromArgs, Debug)]
pub struct Args {
    #[argh(subcommand)]
    pub command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Disasm(DisasmArgs),
}

/// Désassemble un fichier programme CHIP-8.
#[derive(FromArgs, Debug, Clone, PartialEq, Eq)]
#[argh(subcommand, name = "disasm")]
pub struct DisasmArgs {
    /// chemin du programme à désassembler
    #[argh(positional)]
    pub path: PathBuf,

    /// désactive les couleurs du listing
    #[argh(switch)]
    pub no_color: bool,

    /// fichier de configuration TOML
    #[argh(option, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Exécute la commande et écrit le résultat dans `out`
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Disasm(disasm) => run_disasm(disasm, out),
    }
}

/// Désassemble le programme et écrit une ligne par instruction
pub fn run_disasm<W: Write>(args: &DisasmArgs, out: &mut W) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => DisasmConfig::load_from_file(path)?,
        None => DisasmConfig::default(),
    };

    if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        config.format.disable_styling = true;
    }
    debug!("Configuration: {:?}", config);

    let program = ProgramLoader::new(config.program.clone())
        .load_file(&args.path)
        .with_context(|| format!("chargement de {}", args.path.display()))?;

    let disassembler = Disassembler::new(Formatter::new(config.format));
    for line in disassembler.disassemble_program(&program) {
        writeln!(out, "{}", line)?;
    }

    Ok(())
}
