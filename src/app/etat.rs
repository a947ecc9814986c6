//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’entrée, le dernier résultat, la dernière erreur
//! et l’Evaluateur (pile + historique) ; offrir les actions des boutons.
//!
//! Contrats :
//! - Toute mutation de la pile passe par evaluate() ou clear().
//! - Une erreur ne touche ni la pile (déjà restaurée par le noyau) ni le dernier résultat.

use crate::noyau::format::format_valeur;
use crate::noyau::Evaluateur;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- noyau ---
    calc: Evaluateur,

    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            calc: Evaluateur::new(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    pub fn calc(&self) -> &Evaluateur {
        &self.calc
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : vider la pile (l’historique reste).
    pub fn clear_pile(&mut self) {
        self.calc.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Évalue l’entrée ; en cas de succès l’entrée est vidée (style calculatrice RPN).
    pub fn evaluer(&mut self) {
        let s = self.entree.trim().to_string();
        if s.is_empty() {
            self.focus_entree = true;
            return;
        }

        match self.calc.evaluate(&s) {
            Ok(v) => {
                self.resultat = format_valeur(v);
                self.erreur.clear();
                self.entree.clear();
            }
            Err(e) => {
                // on garde l’entrée pour correction
                self.erreur = e.to_string();
            }
        }
        self.focus_entree = true;
    }

    /// Ajoute un opérateur/mot en le séparant par des espaces.
    pub fn inserer_mot(&mut self, mot: &str) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        if !self.entree.is_empty() {
            self.entree.push(' ');
        }
        self.entree.push_str(mot);
        self.entree.push(' ');
        self.focus_entree = true;
    }

    /// Chiffres et point : collés au nombre en cours.
    pub fn inserer_chiffre(&mut self, c: &str) {
        self.entree.push_str(c);
        self.focus_entree = true;
    }

    /// Efface le dernier jeton tapé (espaces finaux compris).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        for mot in ["sqrt", "fib"] {
            if self.entree.ends_with(mot) {
                let n = self.entree.len() - mot.len();
                self.entree.truncate(n);
                self.focus_entree = true;
                return;
            }
        }
        self.entree.pop();
        self.focus_entree = true;
    }
}
