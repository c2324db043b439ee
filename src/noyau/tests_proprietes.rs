//! Campagne de propriétés (proptest) : le pipeline contre un évaluateur de référence.
//!
//! - on génère un arbre, on le rend en infixe entièrement parenthésé
//! - l’arbre s’évalue récursivement avec la même arithmétique (wraparound)
//! - les deux doivent donner le même résultat ou la même erreur
//! - exposants bornés à des littéraux 0..6 (pas d’exposant négatif généré)

use proptest::prelude::*;

use super::erreurs::{EvalError, ExpressionError};
use super::{check_balance, convert_to_postfix, evaluate, evaluate_postfix, lot_demo, Limites};

/* ------------------------ Arbre de référence ------------------------ */

#[derive(Clone, Debug)]
enum Arbre {
    Num(u32),
    Neg(Box<Arbre>),
    Bin(char, Box<Arbre>, Box<Arbre>),
    Pow(Box<Arbre>, u8),
}

fn appliquer(op: char, a: i64, b: i64) -> Result<i64, EvalError> {
    match op {
        '+' => Ok(a.wrapping_add(b)),
        '-' => Ok(a.wrapping_sub(b)),
        '*' => Ok(a.wrapping_mul(b)),
        '/' if b == 0 => Err(EvalError::DivisionByZero),
        '/' => Ok(a.wrapping_div(b)),
        '%' if b == 0 => Err(EvalError::DivisionByZero),
        '%' => Ok(a.wrapping_rem(b)),
        '^' if b < 0 => Err(EvalError::NegativeExponent),
        '^' => Ok((0..b).fold(1_i64, |acc, _| acc.wrapping_mul(a))),
        _ => unreachable!("opérateur de test inconnu: {op}"),
    }
}

impl Arbre {
    fn eval(&self) -> Result<i64, EvalError> {
        match self {
            Arbre::Num(n) => Ok(i64::from(*n)),
            Arbre::Neg(a) => Ok(a.eval()?.wrapping_neg()),
            Arbre::Bin(op, a, b) => {
                let x = a.eval()?;
                let y = b.eval()?;
                appliquer(*op, x, y)
            }
            Arbre::Pow(a, e) => appliquer('^', a.eval()?, i64::from(*e)),
        }
    }

    /// Infixe entièrement parenthésé ; `sep` entoure les opérateurs binaires.
    fn rendu(&self, sep: &str) -> String {
        match self {
            Arbre::Num(n) => n.to_string(),
            Arbre::Neg(a) => format!("(-{})", a.rendu(sep)),
            Arbre::Bin(op, a, b) => format!("({}{sep}{op}{sep}{})", a.rendu(sep), b.rendu(sep)),
            Arbre::Pow(a, e) => format!("({}{sep}^{sep}{e})", a.rendu(sep)),
        }
    }
}

fn arbre() -> impl Strategy<Value = Arbre> {
    let feuille = (0_u32..1000).prop_map(Arbre::Num);
    feuille.prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|a| Arbre::Neg(Box::new(a))),
            (
                prop::sample::select(vec!['+', '-', '*', '/', '%']),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, a, b)| Arbre::Bin(op, Box::new(a), Box::new(b))),
            (inner, 0_u8..6).prop_map(|(a, e)| Arbre::Pow(Box::new(a), e)),
        ]
    })
}

fn priorite(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' | '%' => 2,
        _ => 3,
    }
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn accord_avec_la_reference(a in arbre()) {
        let attendu = a.eval().map_err(ExpressionError::from);
        prop_assert_eq!(evaluate(&a.rendu(" ")), attendu.clone());
        prop_assert_eq!(evaluate(&a.rendu("")), attendu);
    }

    #[test]
    fn rendu_toujours_equilibre(a in arbre()) {
        let s = a.rendu(" ");
        prop_assert!(check_balance(&s));
        let fermante_en_trop = format!("{s})");
        let ouvrante_en_trop = format!("({s}");
        prop_assert!(!check_balance(&fermante_en_trop));
        prop_assert!(!check_balance(&ouvrante_en_trop));
    }

    #[test]
    fn rpn_sans_parentheses(a in arbre()) {
        let rpn = convert_to_postfix(&a.rendu(" ")).unwrap();
        prop_assert!(rpn.iter().all(|t| !matches!(t, super::Tok::LPar | super::Tok::RPar)));
        prop_assert_eq!(evaluate_postfix(&rpn).map_err(ExpressionError::from), a.eval().map_err(ExpressionError::from));
    }

    #[test]
    fn deterministe(a in arbre()) {
        let s = a.rendu(" ");
        prop_assert_eq!(evaluate(&s), evaluate(&s));
    }

    /// Trois opérandes, deux opérateurs, aucune parenthèse : le regroupement
    /// suit la priorité, `^` groupe à droite, les autres à gauche.
    #[test]
    fn regroupement_sans_parentheses(
        a in 0_i64..50,
        b in 0_i64..8,
        c in 0_i64..8,
        op1 in prop::sample::select(vec!['+', '-', '*', '/', '%', '^']),
        op2 in prop::sample::select(vec!['+', '-', '*', '/', '%', '^']),
    ) {
        let s = format!("{a} {op1} {b} {op2} {c}");
        let a_droite = priorite(op2) > priorite(op1) || (op1 == '^' && op2 == '^');

        let attendu = if a_droite {
            appliquer(op2, b, c).and_then(|bc| appliquer(op1, a, bc))
        } else {
            appliquer(op1, a, b).and_then(|ab| appliquer(op2, ab, c))
        };

        prop_assert_eq!(evaluate(&s), attendu.map_err(ExpressionError::from), "expr={}", s);
    }

    #[test]
    fn fermante_en_trop_refusee(a in arbre(), b in 0_u32..100) {
        let s = format!("{}) + {b}", a.rendu(" "));
        prop_assert!(evaluate(&s).is_err());
    }
}

/* ------------------------ Campagne déterministe ------------------------ */

#[test]
fn demo_stable() {
    let l = Limites::default();
    assert_eq!(lot_demo(&l), lot_demo(&l));
}

#[test]
fn chaines_degenerees_sans_panique() {
    for s in [
        "", " ", "(", ")", "()", "(((", ")))", "-", "~", "^", "+-*/%^", "1 2 3", "((1)",
        "(-)", "--", "1e3", "٣", "9999999999999999999999999999",
    ] {
        let _ = evaluate(s);
    }
}
