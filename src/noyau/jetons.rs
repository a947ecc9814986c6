// src/noyau/jetons.rs
//
// Découpage + classification des jetons.
// - découpage : espaces blancs uniquement (entrée déjà en RPN)
// - classification : pure, sans état ; littéral sinon opérateur

use std::fmt;

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
    Sqrt,
    Fib,
}

impl Operateur {
    /// Nombre d’opérandes consommés.
    pub fn arite(self) -> usize {
        match self {
            Operateur::Plus
            | Operateur::Minus
            | Operateur::Star
            | Operateur::Slash
            | Operateur::Caret => 2,
            Operateur::Sqrt | Operateur::Fib => 1,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Minus => "-",
            Operateur::Star => "*",
            Operateur::Slash => "/",
            Operateur::Caret => "^",
            Operateur::Sqrt => "sqrt",
            Operateur::Fib => "fib",
        }
    }

    /// Identifiants reconnus (sensible à la casse).
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let op = match nom {
            "+" => Operateur::Plus,
            "-" => Operateur::Minus,
            "*" => Operateur::Star,
            "/" => Operateur::Slash,
            "^" => Operateur::Caret,
            "sqrt" => Operateur::Sqrt,
            "fib" => Operateur::Fib,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Litteral(f64),
    Op(Operateur),
}

/// Découpe une ligne en jetons texte (ligne vide => aucun jeton).
pub fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Grammaire des littéraux :
/// - signe optionnel `+`/`-` (jamais seul)
/// - puis chiffres avec au plus un `.`, et au moins un chiffre
/// - pas d’exposant
pub fn est_litteral(jeton: &str) -> bool {
    let corps = jeton
        .strip_prefix('+')
        .or_else(|| jeton.strip_prefix('-'))
        .unwrap_or(jeton);

    if corps.is_empty() {
        return false;
    }

    let mut points = 0;
    let mut chiffres = 0;
    for c in corps.chars() {
        match c {
            '.' => points += 1,
            c if c.is_ascii_digit() => chiffres += 1,
            _ => return false,
        }
    }

    points <= 1 && chiffres > 0
}

/// Valeur d’un littéral déjà validé par `est_litteral`.
/// Hors de portée f64 (débordement vers ±inf, ou chiffres non nuls arrondis à 0)
/// => LiteralOutOfRange ; les sous-normaux sont acceptés.
fn litteral(jeton: &str) -> Result<f64, ErreurEval> {
    let hors_portee = || ErreurEval::LiteralOutOfRange(jeton.to_string());

    let v = jeton.parse::<f64>().map_err(|_| hors_portee())?;
    if !v.is_finite() {
        return Err(hors_portee());
    }
    if v == 0.0 && jeton.chars().any(|c| matches!(c, '1'..='9')) {
        return Err(hors_portee());
    }
    Ok(v)
}

/// Classe un jeton : littéral, opérateur connu, sinon UnknownOperator.
pub fn classifier(jeton: &str) -> Result<Jeton, ErreurEval> {
    if est_litteral(jeton) {
        return litteral(jeton).map(Jeton::Litteral);
    }

    Operateur::depuis_nom(jeton)
        .map(Jeton::Op)
        .ok_or_else(|| ErreurEval::UnknownOperator(jeton.to_string()))
}
