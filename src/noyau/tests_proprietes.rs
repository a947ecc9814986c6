//! Tests de propriétés (proptest).
//!
//! - taille de pile après succès = avant + littéraux − Σ(arité − 1)
//! - échec => pile identique au bit près, historique inchangé
//! - succès => exactement une entrée d’historique de plus

use proptest::prelude::*;

use super::jetons::{classifier, Jeton};
use super::Evaluateur;

/// Jetons valides ou non : littéraux, opérateurs, et quelques intrus.
fn jeton_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-1000i32..1000).prop_map(|n| n.to_string()),
        2 => (-100.0f64..100.0).prop_map(|x| format!("{x:.3}")),
        1 => Just("0".to_string()),
        2 => prop::sample::select(vec!["+", "-", "*", "/", "^"]).prop_map(str::to_string),
        1 => prop::sample::select(vec!["sqrt", "fib"]).prop_map(str::to_string),
        1 => prop::sample::select(vec!["foo", "1e3", "--", "."]).prop_map(str::to_string),
    ]
}

fn expression_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(jeton_strategy(), 0..12).prop_map(|v| v.join(" "))
}

fn prefixe_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-50.0f64..50.0, 0..6)
}

fn bits(calc: &Evaluateur) -> Vec<u64> {
    calc.pile().valeurs().iter().map(|v| v.to_bits()).collect()
}

/// Variation de taille attendue si tous les jetons réussissent.
fn variation_attendue(expr: &str) -> Option<isize> {
    let mut delta = 0isize;
    for t in expr.split_whitespace() {
        match classifier(t).ok()? {
            Jeton::Litteral(_) => delta += 1,
            Jeton::Op(op) => delta -= op.arite() as isize - 1,
        }
    }
    Some(delta)
}

fn evaluateur_avec(prefixe: &[f64]) -> Evaluateur {
    let mut calc = Evaluateur::new();
    for v in prefixe {
        calc.evaluate(&v.to_string())
            .unwrap_or_else(|e| panic!("préfixe {v}: {e}"));
    }
    calc
}

proptest! {
    #[test]
    fn taille_coherente_avec_les_arites(prefixe in prefixe_strategy(), expr in expression_strategy()) {
        let mut calc = evaluateur_avec(&prefixe);
        let avant = calc.pile().len() as isize;

        if calc.evaluate(&expr).is_ok() {
            let delta = variation_attendue(&expr);
            prop_assert!(delta.is_some(), "succès avec un jeton invalide: {expr:?}");
            prop_assert_eq!(calc.pile().len() as isize, avant + delta.unwrap_or(0));
        }
    }

    #[test]
    fn echec_atomique(prefixe in prefixe_strategy(), expr in expression_strategy()) {
        let mut calc = evaluateur_avec(&prefixe);
        let pile_avant = bits(&calc);
        let hist_avant = calc.historique().len();

        if calc.evaluate(&expr).is_err() {
            prop_assert_eq!(bits(&calc), pile_avant);
            prop_assert_eq!(calc.historique().len(), hist_avant);
        }
    }

    #[test]
    fn historique_une_entree_par_succes(exprs in prop::collection::vec(expression_strategy(), 1..8)) {
        let mut calc = Evaluateur::new();
        let mut succes = Vec::new();

        for expr in &exprs {
            if calc.evaluate(expr).is_ok() {
                succes.push(expr.clone());
            }
        }

        let enregistrees: Vec<String> = calc
            .historique()
            .entrees()
            .iter()
            .map(|e| e.expression().to_string())
            .collect();
        prop_assert_eq!(enregistrees, succes);
    }
}
