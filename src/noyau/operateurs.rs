// src/noyau/operateurs.rs
//
// Application d’un opérateur sur la pile.
//
// Règles :
// - arité vérifiée AVANT tout dépilement (ensure_size)
// - en cas d’échec de domaine, la pile peut rester partiellement consommée :
//   c’est l’instantané pris par evaluate() qui remet tout en place
// - ordre des opérandes : b = sommet, a = dessous => a ∘ b

use num_traits::ToPrimitive;

use super::erreur::ErreurEval;
use super::jetons::Operateur;
use super::pile::Pile;

/// Plus grand indice de Fibonacci accepté (F(93) tient dans un u64).
pub const FIB_MAX: u32 = 93;

pub fn appliquer(op: Operateur, pile: &mut Pile) -> Result<(), ErreurEval> {
    pile.ensure_size(op.arite())?;

    let resultat = match op {
        Operateur::Plus | Operateur::Minus | Operateur::Star | Operateur::Slash | Operateur::Caret => {
            let b = pile.pop()?;
            let a = pile.pop()?;
            binaire(op, a, b)?
        }
        Operateur::Sqrt => {
            let a = pile.pop()?;
            if a < 0.0 {
                return Err(ErreurEval::NegativeSqrt(a));
            }
            a.sqrt()
        }
        Operateur::Fib => fib(pile.pop()?)?,
    };

    pile.push(resultat);
    Ok(())
}

fn binaire(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurEval> {
    let r = match op {
        Operateur::Plus => a + b,
        Operateur::Minus => a - b,
        Operateur::Star => a * b,
        Operateur::Slash => {
            if b == 0.0 {
                return Err(ErreurEval::DivideByZero);
            }
            a / b
        }
        Operateur::Caret => a.powf(b),
        Operateur::Sqrt | Operateur::Fib => {
            unreachable!("opérateur unaire {op} passé à binaire()")
        }
    };
    Ok(r)
}

/// F(0)=0, F(1)=1 ; accumulation itérative sur u64 vérifié.
fn fib(n: f64) -> Result<f64, ErreurEval> {
    if n < 0.0 || n.is_nan() || n.floor() != n {
        return Err(ErreurEval::InvalidFibInput(n));
    }
    let indice = match n.to_u32() {
        Some(i) if i <= FIB_MAX => i,
        _ => return Err(ErreurEval::FibOverflow(n)),
    };

    if indice == 0 {
        return Ok(0.0);
    }

    // On s’arrête sur F(n) : F(n+1) n’est jamais calculé (F(94) déborderait).
    let (mut a, mut b): (u64, u64) = (0, 1);
    for _ in 1..indice {
        let c = a.checked_add(b).ok_or(ErreurEval::FibOverflow(n))?;
        a = b;
        b = c;
    }

    b.to_f64().ok_or(ErreurEval::FibOverflow(n))
}
