// src/main.rs
//
// Calculatrice RPN — point d’entrée
// ---------------------------------
// - par défaut : boucle terminal (stdin -> stdout, erreurs sur stderr)
// - `--gui`    : fenêtre egui (feature "gui", active par défaut)
// - journal    : RUST_LOG (défaut "warn"), toujours sur stderr

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

#[cfg(feature = "gui")]
mod app;
mod console;
mod noyau;

use noyau::Evaluateur;

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filtre)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    installer_journal();

    if std::env::args().skip(1).any(|a| a == "--gui") {
        return lancer_gui();
    }

    let mut calc = Evaluateur::new();
    let stdin = io::stdin();
    let resultat = console::boucle(
        &mut calc,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );

    match resultat {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "erreur d’entrée/sortie");
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Entrée GUI ------------------------ */

#[cfg(feature = "gui")]
fn lancer_gui() -> ExitCode {
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(console::TITRE)
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    let lancement = eframe::run_native(
        console::TITRE,
        options,
        Box::new(|_cc| Ok(Box::<app::AppCalc>::default())),
    );

    match lancement {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "échec du lancement de la fenêtre");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
fn lancer_gui() -> ExitCode {
    eprintln!("Error: built without the \"gui\" feature");
    ExitCode::FAILURE
}
