//! Noyau RPN
//!
//! Organisation interne :
//! - pile.rs       : pile d’opérandes + instantané/restauration
//! - jetons.rs     : découpage + classification (littéral / opérateur)
//! - operateurs.rs : + - * / ^ sqrt fib
//! - historique.rs : calculs réussis (ajout seulement)
//! - format.rs     : affichage des valeurs
//! - erreur.rs     : taxonomie des erreurs
//! - eval.rs       : évaluation atomique

pub mod erreur;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod operateurs;
pub mod pile;

#[cfg(test)]
mod tests_evaluation;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::Evaluateur;
