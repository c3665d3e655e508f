// src/main.rs
//
// Calculatrice à balayage — point d’entrée console
// ------------------------------------------------
// But:
// - Journal sur stderr (RUST_LOG, "warn" par défaut)
// - Une session : invite, un jeton sur stdin, une ligne sur stdout
// - Code de sortie 0 que l’expression soit valide ou non

use std::io;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::Reglages;

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filtre)
        .init();
}

fn main() -> anyhow::Result<()> {
    installer_journal();

    let stdin = io::stdin();
    let stdout = io::stdout();

    app::run(stdin.lock(), stdout.lock(), &Reglages::default()).context("session console")?;
    Ok(())
}
