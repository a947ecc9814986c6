// src/noyau/pile.rs
//
// Pile d’opérandes (f64).
// Le sommet est le dernier élément poussé.
//
// Contrats :
// - push ne peut pas échouer
// - pop sur pile vide => EmptyStack
// - ensure_size AVANT de consommer : jamais de dépilement partiel sur une arité fausse
// - snapshot / restore : copie O(n), base de l’évaluation atomique

use super::erreur::ErreurEval;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pile {
    valeurs: Vec<f64>,
}

/// Copie figée du contenu de la pile (avant une évaluation).
#[derive(Clone, Debug, PartialEq)]
pub struct Instantane(Vec<f64>);

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, valeur: f64) {
        self.valeurs.push(valeur);
    }

    pub fn pop(&mut self) -> Result<f64, ErreurEval> {
        self.valeurs.pop().ok_or(ErreurEval::EmptyStack)
    }

    /// Sommet sans retrait.
    pub fn peek(&self) -> Option<f64> {
        self.valeurs.last().copied()
    }

    /// Vérifie qu’au moins `n` opérandes sont présents.
    pub fn ensure_size(&self, n: usize) -> Result<(), ErreurEval> {
        if self.valeurs.len() < n {
            return Err(ErreurEval::InsufficientOperands {
                required: n,
                available: self.valeurs.len(),
            });
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.valeurs.clear();
    }

    pub fn snapshot(&self) -> Instantane {
        Instantane(self.valeurs.clone())
    }

    pub fn restore(&mut self, instantane: Instantane) {
        self.valeurs = instantane.0;
    }

    pub fn len(&self) -> usize {
        self.valeurs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valeurs.is_empty()
    }

    /// Valeurs du plus ancien au plus récent.
    pub fn valeurs(&self) -> &[f64] {
        &self.valeurs
    }
}
