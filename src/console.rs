// src/console.rs
//
// Boucle terminal (REPL) autour du noyau.
// - lit des lignes jusqu’à fin de flux ou `q`/`Q`
// - commandes directes : help, clear, print, hist (jamais envoyées au noyau)
// - le reste part dans evaluate() ; une erreur est affichée, jamais fatale
//
// Générique sur l’entrée et les sorties pour pouvoir tester sans terminal.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::noyau::format::format_valeur;
use crate::noyau::Evaluateur;

pub const TITRE: &str = "RPN Calculator";

pub const AIDE: &str = "\
Supported operators:
  + - * /        : arithmetic
  sqrt           : square root
  ^              : power
  fib            : Fibonacci number
  clear          : clear the stack
  print          : show the stack
  hist           : show the history
  help           : show this help
  q              : quit";

/// Lance la boucle. Ne retourne une erreur que pour un problème d’E/S.
pub fn boucle<R, W, E>(
    calc: &mut Evaluateur,
    mut entree: R,
    sortie: &mut W,
    erreurs: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(sortie, "{TITRE}")?;
    writeln!(
        sortie,
        "Enter an expression (e.g. '5 5 +'), 'q' to quit, 'help' for help."
    )?;

    // Octets bruts : une ligne non UTF-8 devient un jeton inconnu, pas une fin de session.
    let mut tampon = Vec::new();
    loop {
        write!(sortie, "> ")?;
        sortie.flush()?;

        tampon.clear();
        if entree.read_until(b'\n', &mut tampon)? == 0 {
            break;
        }
        let ligne = String::from_utf8_lossy(&tampon);
        let ligne = ligne.trim();
        if ligne.is_empty() {
            continue;
        }

        match ligne {
            "q" | "Q" => break,
            "help" => writeln!(sortie, "{AIDE}")?,
            "clear" => {
                calc.clear();
                writeln!(sortie, "Stack cleared")?;
            }
            "print" => writeln!(sortie, "Stack: {}", calc.print_stack())?,
            "hist" => afficher_historique(calc, sortie)?,
            expr => match calc.evaluate(expr) {
                Ok(v) => writeln!(sortie, "Result: {}", format_valeur(v))?,
                Err(e) => writeln!(erreurs, "Error: {e}")?,
            },
        }
    }

    debug!(historique = calc.historique().len(), "fin de session");
    Ok(())
}

fn afficher_historique<W: Write>(calc: &Evaluateur, sortie: &mut W) -> io::Result<()> {
    let historique = calc.historique();
    if historique.is_empty() {
        return writeln!(sortie, "No history");
    }
    writeln!(sortie, "History:")?;
    for (i, entree) in historique.entrees().iter().enumerate() {
        writeln!(sortie, "{}: {entree}", i + 1)?;
    }
    Ok(())
}
