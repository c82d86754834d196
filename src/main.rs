use anyhow::Result;
use log::info;
use std::io::Write;

use chip8_disasm::cli::{self, Args};

fn main() -> Result<()> {
    // Initialiser le logging
    env_logger::init();
    info!("Démarrage de chip8-disasm v{}", chip8_disasm::VERSION);

    let args: Args = argh::from_env();

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    cli::run(&args, &mut out)?;
    out.flush()?;

    Ok(())
}
