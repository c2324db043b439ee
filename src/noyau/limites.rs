//! Noyau : garde-fous configurables de l’évaluation.

/// Bornes appliquées par l’évaluateur.
///
/// Par défaut aucune borne : la puissance est calculée par exponentiation
/// rapide, son coût reste logarithmique en l’exposant. Une interface peut
/// toutefois refuser les exposants démesurés (anti-abus).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limites {
    /// Exposant maximal accepté pour `^` (`None` = illimité).
    pub exposant_max: Option<i64>,
}

impl Limites {
    pub const fn avec_exposant_max(max: i64) -> Self {
        Self {
            exposant_max: Some(max),
        }
    }

    /// La borne franchie par `exposant`, s’il y en a une.
    pub fn exposant_depasse(&self, exposant: i64) -> Option<i64> {
        self.exposant_max.filter(|max| exposant > *max)
    }
}

#[cfg(test)]
mod tests {
    use super::Limites;

    #[test]
    fn defaut_sans_borne() {
        assert_eq!(Limites::default().exposant_depasse(i64::MAX), None);
    }

    #[test]
    fn borne_inclusive() {
        let l = Limites::avec_exposant_max(64);
        assert_eq!(l.exposant_depasse(64), None);
        assert_eq!(l.exposant_depasse(65), Some(64));
    }
}
