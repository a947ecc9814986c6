//! Tests d’évaluation : cas concrets + atomicité + historique.
//!
//! Chaque test part d’un Evaluateur neuf sauf mention contraire :
//! la pile persiste d’un appel à l’autre, c’est voulu.

use pretty_assertions::assert_eq;

use super::{ErreurEval, Evaluateur};

fn eval_ok(calc: &mut Evaluateur, expr: &str) -> f64 {
    calc.evaluate(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn bits(calc: &Evaluateur) -> Vec<u64> {
    calc.pile().valeurs().iter().map(|v| v.to_bits()).collect()
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn addition_simple() {
    let mut calc = Evaluateur::new();
    assert_eq!(eval_ok(&mut calc, "5 5 +"), 10.0);
    assert_eq!(calc.pile().valeurs(), &[10.0]);
}

#[test]
fn division_par_zero_pile_intacte() {
    let mut calc = Evaluateur::new();
    assert_eq!(calc.evaluate("1 0 /"), Err(ErreurEval::DivideByZero));
    assert!(calc.pile().is_empty());
}

#[test]
fn racine_negative_pile_intacte() {
    let mut calc = Evaluateur::new();
    assert_eq!(calc.evaluate("-1 sqrt"), Err(ErreurEval::NegativeSqrt(-1.0)));
    assert!(calc.pile().is_empty());
}

#[test]
fn fibonacci() {
    let mut calc = Evaluateur::new();
    assert_eq!(eval_ok(&mut calc, "10 fib"), 55.0);
    assert_eq!(calc.evaluate("94 fib"), Err(ErreurEval::FibOverflow(94.0)));
    assert_eq!(calc.evaluate("2.5 fib"), Err(ErreurEval::InvalidFibInput(2.5)));
    assert_eq!(calc.evaluate("-3 fib"), Err(ErreurEval::InvalidFibInput(-3.0)));
    assert_eq!(calc.pile().valeurs(), &[55.0]);
}

#[test]
fn produit_decimal() {
    let mut calc = Evaluateur::new();
    let r = eval_ok(&mut calc, "3.5 2.1 *");
    assert!((r - 7.35).abs() < 1e-9, "r={r}");
}

#[test]
fn puissance_et_soustraction() {
    let mut calc = Evaluateur::new();
    assert_eq!(eval_ok(&mut calc, "2 10 ^"), 1024.0);
    assert_eq!(eval_ok(&mut calc, "24 -"), 1000.0);
    assert_eq!(eval_ok(&mut calc, "16 sqrt"), 4.0);
    assert_eq!(calc.pile().valeurs(), &[1000.0, 4.0]);
}

#[test]
fn signes_des_litteraux() {
    let mut calc = Evaluateur::new();
    assert_eq!(eval_ok(&mut calc, "+3 -2 -"), 5.0);
    assert_eq!(eval_ok(&mut calc, ".5 *"), 2.5);
}

/* ------------------------ Persistance entre appels ------------------------ */

#[test]
fn la_pile_persiste() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "3");
    eval_ok(&mut calc, "4");
    assert_eq!(eval_ok(&mut calc, "+"), 7.0);
    assert_eq!(calc.pile().valeurs(), &[7.0]);
}

#[test]
fn clear_vide_la_pile_mais_pas_l_historique() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "1 2");
    calc.clear();
    assert!(calc.pile().is_empty());
    assert_eq!(calc.historique().len(), 1);
    assert_eq!(
        calc.evaluate("+"),
        Err(ErreurEval::InsufficientOperands {
            required: 2,
            available: 0
        })
    );
}

/* ------------------------ Atomicité ------------------------ */

#[test]
fn echec_en_cours_de_route_restaure_tout() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "1.5 -2 7");
    let avant = bits(&calc);

    // Les premiers jetons réussissent, puis la division échoue.
    assert_eq!(calc.evaluate("+ 3 * 0 /"), Err(ErreurEval::DivideByZero));
    assert_eq!(bits(&calc), avant);

    assert_eq!(
        calc.evaluate("10 20 30 foo"),
        Err(ErreurEval::UnknownOperator("foo".into()))
    );
    assert_eq!(bits(&calc), avant);

    assert_eq!(
        calc.evaluate("+ + + +"),
        Err(ErreurEval::InsufficientOperands {
            required: 2,
            available: 1
        })
    );
    assert_eq!(bits(&calc), avant);
}

#[test]
fn premiere_erreur_gagne() {
    let mut calc = Evaluateur::new();
    assert_eq!(calc.evaluate("1 0 / foo"), Err(ErreurEval::DivideByZero));
    assert_eq!(
        calc.evaluate("foo 1 0 /"),
        Err(ErreurEval::UnknownOperator("foo".into()))
    );
}

#[test]
fn expression_vide() {
    let mut calc = Evaluateur::new();
    assert_eq!(calc.evaluate(""), Err(ErreurEval::EmptyResult));
    assert_eq!(calc.evaluate("   \t "), Err(ErreurEval::EmptyResult));
    assert!(calc.historique().is_empty());
}

#[test]
fn expression_vide_sur_pile_non_vide() {
    // Aucun jeton : le sommet existant est le résultat.
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "8");
    assert_eq!(eval_ok(&mut calc, ""), 8.0);
}

#[test]
fn commandes_console_inconnues_du_noyau() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "1");
    for cmd in ["hist", "print", "."] {
        assert_eq!(
            calc.evaluate(cmd),
            Err(ErreurEval::UnknownOperator(cmd.into()))
        );
    }
    assert_eq!(calc.pile().valeurs(), &[1.0]);
}

/* ------------------------ Historique ------------------------ */

#[test]
fn historique_seulement_les_succes_dans_l_ordre() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "5 5 +");
    let _ = calc.evaluate("1 0 /");
    eval_ok(&mut calc, "3.5 2.1 *");
    let _ = calc.evaluate("nope");
    eval_ok(&mut calc, "10 fib");

    let lignes: Vec<String> = calc
        .historique()
        .entrees()
        .iter()
        .map(|e| e.to_string())
        .collect();

    assert_eq!(
        lignes,
        vec![
            "5 5 + => 10".to_string(),
            "3.5 2.1 * => 7.35".to_string(),
            "10 fib => 55".to_string(),
        ]
    );
}

#[test]
fn print_stack_ne_modifie_rien() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "1 2.5 -3");
    let avant = bits(&calc);

    assert_eq!(calc.print_stack(), "1 2.5 -3 ");
    assert_eq!(calc.print_stack(), "1 2.5 -3 ");

    assert_eq!(bits(&calc), avant);
    assert_eq!(calc.historique().len(), 1);
}

/* ------------------------ Littéraux hors de portée ------------------------ */

#[test]
fn litteral_trop_grand_refuse_et_annule() {
    let mut calc = Evaluateur::new();
    eval_ok(&mut calc, "2");
    let avant = bits(&calc);
    let enorme = format!("1{}", "0".repeat(400));

    assert_eq!(
        calc.evaluate(&format!("3 {enorme} +")),
        Err(ErreurEval::LiteralOutOfRange(enorme.clone()))
    );
    assert_eq!(bits(&calc), avant);
    assert_eq!(calc.historique().len(), 1);
}

#[test]
fn litteral_trop_petit_refuse() {
    let mut calc = Evaluateur::new();
    let minuscule = format!("0.{}1", "0".repeat(400));
    assert_eq!(
        calc.evaluate(&minuscule),
        Err(ErreurEval::LiteralOutOfRange(minuscule.clone()))
    );
    assert!(calc.pile().is_empty());

    // zéro écrit longuement reste un zéro légitime
    assert_eq!(eval_ok(&mut calc, &format!("0.{}", "0".repeat(400))), 0.0);
}
