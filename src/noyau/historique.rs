// src/noyau/historique.rs
//
// Historique des calculs réussis : ajout seulement, durée de vie du processus.

use std::fmt;

/// (expression d’origine, sommet de pile formaté)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    expression: String,
    resultat: String,
}

impl EntreeHistorique {
    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

impl fmt::Display for EntreeHistorique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.expression, self.resultat)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn ajouter(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push(EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
        });
    }

    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
