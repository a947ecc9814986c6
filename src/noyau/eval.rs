//! Noyau — évaluation RPN atomique
//!
//! jetons -> (push littéral | applique opérateur)* -> sommet de pile
//!
//! Contrats :
//! - Atomicité : un appel qui échoue laisse la pile EXACTEMENT comme avant l’appel
//!   (instantané pris avant le premier jeton, restauré sur toute erreur).
//! - Une pile vide en fin d’appel est un échec (EmptyResult), avec restauration aussi.
//! - Succès : la pile N’EST PAS remise à zéro (calculatrice persistante) et
//!   une entrée est ajoutée à l’historique.

use tracing::{debug, trace};

use super::erreur::ErreurEval;
use super::format::{format_liste, format_valeur};
use super::historique::Historique;
use super::jetons::{classifier, tokenize, Jeton};
use super::operateurs::appliquer;
use super::pile::Pile;

#[derive(Clone, Debug, Default)]
pub struct Evaluateur {
    pile: Pile,
    historique: Historique,
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Évalue une ligne RPN et retourne le sommet de pile.
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, ErreurEval> {
        let instantane = self.pile.snapshot();

        let issue = self
            .appliquer_jetons(expression)
            .and_then(|()| self.pile.peek().ok_or(ErreurEval::EmptyResult));

        match issue {
            Ok(sommet) => {
                let texte = format_valeur(sommet);
                debug!(expression, resultat = %texte, profondeur = self.pile.len(), "évaluation réussie");
                self.historique.ajouter(expression, texte);
                Ok(sommet)
            }
            Err(erreur) => {
                debug!(expression, %erreur, "évaluation échouée, pile restaurée");
                self.pile.restore(instantane);
                Err(erreur)
            }
        }
    }

    fn appliquer_jetons(&mut self, expression: &str) -> Result<(), ErreurEval> {
        for texte in tokenize(expression) {
            match classifier(texte)? {
                Jeton::Litteral(v) => self.pile.push(v),
                Jeton::Op(op) => appliquer(op, &mut self.pile)?,
            }
            trace!(jeton = texte, pile = %format_liste(self.pile.valeurs()));
        }

        Ok(())
    }

    /// Vide la pile (l’historique est conservé).
    pub fn clear(&mut self) {
        debug!(profondeur = self.pile.len(), "pile vidée");
        self.pile.clear();
    }

    /// Contenu de la pile pour affichage : plus ancien d’abord, chaque valeur suivie d’un espace.
    pub fn print_stack(&self) -> String {
        self.pile
            .valeurs()
            .iter()
            .map(|v| format!("{} ", format_valeur(*v)))
            .collect()
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }
}
