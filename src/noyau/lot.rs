//! Noyau : traitement par lot.
//!
//! Une ligne = une expression, évaluée indépendamment des autres.
//! Une erreur n’arrête jamais le lot : elle est comptée et rapportée.
//! Ici on ne touche à aucun fichier : le rapport est rendu en texte,
//! à l’appelant de l’afficher ou de l’écrire.

use std::fmt::Write as _;

use super::erreurs::ExpressionError;
use super::eval::eval_expression;
use super::limites::Limites;

/// Les expressions de démonstration (succès et erreurs mêlés).
pub const EXPRESSIONS_DEMO: [&str; 10] = [
    "2 + 3 * 4",
    "(2 + 3) * 4",
    "10 / (5 - 5)",
    "2 ^ 3 + 1",
    "((2 + 3) * (4 - 1)",
    "15 % 4",
    "2 ^ 3 ^ 2",
    "10 / 0",
    "-5 + 8",
    "2 * (3 + 4)) - 1",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneTraitee {
    /// Numéro de ligne dans la source (à partir de 1).
    pub numero: usize,
    pub expression: String,
    pub rpn: Option<String>,
    pub resultat: Result<i64, ExpressionError>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RapportLot {
    pub lignes: Vec<LigneTraitee>,
}

impl RapportLot {
    pub fn total(&self) -> usize {
        self.lignes.len()
    }

    pub fn succes(&self) -> usize {
        self.lignes.iter().filter(|l| l.resultat.is_ok()).count()
    }

    pub fn erreurs(&self) -> usize {
        self.total() - self.succes()
    }

    /// Détail ligne par ligne : expression, RPN, résultat ou erreur.
    pub fn format_detail(&self) -> String {
        let mut out = String::new();
        for l in &self.lignes {
            let _ = writeln!(out, "Expression {}: {}", l.numero, l.expression);
            if let Some(rpn) = &l.rpn {
                let _ = writeln!(out, "  RPN: {rpn}");
            }
            match &l.resultat {
                Ok(v) => {
                    let _ = writeln!(out, "  Résultat: {v}");
                }
                Err(e) => {
                    let _ = writeln!(out, "  ERREUR: {e}");
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn format_resume(&self) -> String {
        format!(
            "Expressions: {}\nÉvaluées avec succès: {}\nErreurs: {}",
            self.total(),
            self.succes(),
            self.erreurs()
        )
    }

    /// Rapport d’erreurs (seules les lignes en échec), avec la source en en-tête.
    pub fn format_rapport_erreurs(&self, source: &str) -> String {
        let entete = format!("Rapport d’erreurs pour: {source}");
        let mut out = String::new();
        let _ = writeln!(out, "{entete}");
        let _ = writeln!(out, "{}", "=".repeat(entete.chars().count()));
        out.push('\n');

        for l in &self.lignes {
            if let Err(e) = &l.resultat {
                let _ = writeln!(out, "Ligne {}: {}", l.numero, l.expression);
                let _ = writeln!(out, "Erreur: {e}");
                out.push('\n');
            }
        }
        out
    }
}

/// Évalue chaque ligne non vide ; les numéros suivent la source.
#[tracing::instrument(level = "debug", skip_all)]
pub fn traiter_lot<'a, I>(lignes: I, limites: &Limites) -> RapportLot
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rapport = RapportLot::default();

    for (idx, ligne) in lignes.into_iter().enumerate() {
        // une ligne blanche n’est pas une expression : ni évaluée ni comptée,
        // mais les numéros des suivantes restent ceux de la source
        if ligne.trim().is_empty() {
            continue;
        }

        let (resultat, d) = eval_expression(ligne, limites);
        rapport.lignes.push(LigneTraitee {
            numero: idx + 1,
            expression: ligne.to_string(),
            rpn: d.rpn,
            resultat,
        });
    }

    tracing::debug!(
        total = rapport.total(),
        erreurs = rapport.erreurs(),
        "lot traité"
    );
    rapport
}

/// Le lot de démonstration.
pub fn lot_demo(limites: &Limites) -> RapportLot {
    traiter_lot(EXPRESSIONS_DEMO, limites)
}
