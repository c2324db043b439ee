//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, démarche,
//! lot) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur l’exposant et sur la taille du lot.

use calculatrice_rpn::noyau::Limites;

/// Exposant maximal proposé au démarrage.
const EXPOSANT_MAX_DEFAUT: i64 = 1_000_000;

/// Garde-fou : on borne le réglage lui-même.
const EXPOSANT_MAX_BORNE: i64 = 1_000_000_000;

/// Garde-fou : nombre maximal de lignes traitées par lot (anti-gel).
pub const LIGNES_LOT_MAX: usize = 10_000;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub equilibre: String,
    pub rpn: String,
}

#[derive(Clone, Default, Debug)]
pub struct Lot {
    pub entree: String,
    pub detail: String,
    pub resume: String,
    pub rapport: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String, // message d’erreur (si conversion/éval échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- lot (une expression par ligne) ---
    pub lot: Lot,

    // --- paramètres ---
    pub exposant_max: i64,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            lot: Lot::default(),
            exposant_max: EXPOSANT_MAX_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + lot + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.lot = Lot::default();
        self.exposant_max = EXPOSANT_MAX_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    /// - La démarche reste : elle montre jusqu’où le pipeline est allé.
    pub fn set_erreur(&mut self, msg: impl Into<String>, demarche: Demarche) {
        self.erreur = msg.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + démarche).
    pub fn set_resultat(&mut self, valeur: i64, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = valeur.to_string();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Garde-fou : borne l’exposant maximal accepté.
    pub fn set_exposant_max(&mut self, max: i64) {
        self.exposant_max = max.clamp(0, EXPOSANT_MAX_BORNE);
        self.focus_entree = true;
    }

    /// Les limites transmises au noyau.
    pub fn limites(&self) -> Limites {
        Limites::avec_exposant_max(self.exposant_max)
    }

    /// Dépose les trois rendus d’un lot traité.
    pub fn set_lot(&mut self, detail: String, resume: String, rapport: String) {
        self.lot.detail = detail;
        self.lot.resume = resume;
        self.lot.rapport = rapport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposant_borne() {
        let mut app = AppCalc::default();
        app.set_exposant_max(-5);
        assert_eq!(app.exposant_max, 0);
        app.set_exposant_max(i64::MAX);
        assert_eq!(app.exposant_max, EXPOSANT_MAX_BORNE);
        assert_eq!(app.limites().exposant_max, Some(EXPOSANT_MAX_BORNE));
    }

    #[test]
    fn erreur_conserve_le_resultat() {
        let mut app = AppCalc::default();
        app.set_resultat(14, Demarche::default());
        app.set_erreur("division par zéro", Demarche::default());
        assert_eq!(app.resultat, "14");
        assert_eq!(app.erreur, "division par zéro");

        app.set_resultat(3, Demarche::default());
        assert!(app.erreur.is_empty());
    }

    #[test]
    fn ac_remet_tout_a_zero() {
        let mut app = AppCalc::default();
        app.entree.push_str("1 + 1");
        app.set_resultat(2, Demarche::default());
        app.set_exposant_max(3);
        app.lot.entree.push_str("1");
        app.reset_total();

        assert!(app.entree.is_empty());
        assert!(app.resultat.is_empty());
        assert!(app.lot.entree.is_empty());
        assert_eq!(app.exposant_max, EXPOSANT_MAX_DEFAUT);
    }
}
