//! Noyau : évaluation (pipeline réel)
//!
//! texte -> équilibre des parenthèses -> RPN (shunting-yard) -> pile d’entiers -> i64
//!
//! Arithmétique : entiers signés 64 bits, dépassements en “wraparound”
//! (comme un entier machine), division et reste tronqués vers zéro.

use num_traits::{One, WrappingMul};

use super::erreurs::{EvalError, ExpressionError};
use super::jetons::{format_tokens, Operateur, Tok};
use super::limites::Limites;
use super::rpn::{check_balance, convert_to_postfix};

/// Ce que l’interface affiche à côté du résultat.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub equilibre: bool,
    /// RPN rendue en texte ; `None` si la conversion a échoué.
    pub rpn: Option<String>,
}

/// Exécute une RPN sans borne particulière.
pub fn evaluate_postfix(tokens: &[Tok]) -> Result<i64, EvalError> {
    evaluate_postfix_with(tokens, &Limites::default())
}

/// Exécute une RPN sur une pile d’entiers.
///
/// La pile doit contenir exactement une valeur à la fin.
#[tracing::instrument(level = "trace", skip_all, fields(len = tokens.len()), err(level = "debug"))]
pub fn evaluate_postfix_with(tokens: &[Tok], limites: &Limites) -> Result<i64, EvalError> {
    let mut pile: Vec<i64> = Vec::with_capacity(tokens.len());

    for tok in tokens {
        match tok {
            Tok::Num(n) => pile.push(*n),

            Tok::Op(op) if op.arite() == 1 => {
                let x = pile.pop().ok_or(EvalError::StackUnderflow)?;
                pile.push(appliquer_unaire(*op, x)?);
            }

            Tok::Op(op) => {
                // droite d’abord : elle a été empilée en dernier
                let b = pile.pop().ok_or(EvalError::StackUnderflow)?;
                let a = pile.pop().ok_or(EvalError::StackUnderflow)?;
                pile.push(appliquer_binaire(*op, a, b, limites)?);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::MalformedToken(tok.clone())),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::MalformedExpression),
    }
}

fn appliquer_unaire(op: Operateur, x: i64) -> Result<i64, EvalError> {
    match op {
        Operateur::MoinsUnaire => Ok(x.wrapping_neg()),
        _ => Err(EvalError::MalformedToken(Tok::Op(op))),
    }
}

fn appliquer_binaire(op: Operateur, a: i64, b: i64, limites: &Limites) -> Result<i64, EvalError> {
    let v = match op {
        Operateur::Plus => a.wrapping_add(b),
        Operateur::Moins => a.wrapping_sub(b),
        Operateur::Fois => a.wrapping_mul(b),
        Operateur::Div => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.wrapping_div(b)
        }
        Operateur::Modulo => {
            if b == 0 {
                return Err(EvalError::DivisionByZero);
            }
            a.wrapping_rem(b)
        }
        Operateur::Puissance => {
            if b < 0 {
                return Err(EvalError::NegativeExponent);
            }
            if let Some(max) = limites.exposant_depasse(b) {
                return Err(EvalError::ExponentTooLarge { exposant: b, max });
            }
            puissance(a, b.unsigned_abs())
        }
        // géré par l’appelant (arité 1)
        Operateur::MoinsUnaire => return Err(EvalError::MalformedToken(Tok::Op(op))),
    };
    Ok(v)
}

/// `base` multiplié `exp` fois par lui-même, en wraparound (exp = 0 => 1).
///
/// Exponentiation rapide : la multiplication modulo 2^64 est associative,
/// le résultat est donc celui des `exp` multiplications successives.
fn puissance<T: WrappingMul + One + Copy>(base: T, mut exp: u64) -> T {
    let mut acc = T::one();
    let mut carre = base;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.wrapping_mul(&carre);
        }
        exp >>= 1;
        if exp > 0 {
            carre = carre.wrapping_mul(&carre);
        }
    }

    acc
}

/// API publique : évalue une expression infixe.
pub fn evaluate(expr: &str) -> Result<i64, ExpressionError> {
    evaluate_with(expr, &Limites::default())
}

pub fn evaluate_with(expr: &str, limites: &Limites) -> Result<i64, ExpressionError> {
    let rpn = convert_to_postfix(expr)?;
    Ok(evaluate_postfix_with(&rpn, limites)?)
}

/// Évalue et retourne aussi la démarche (équilibre, RPN) pour l’affichage.
#[tracing::instrument(level = "trace", skip(limites))]
pub fn eval_expression(
    expr: &str,
    limites: &Limites,
) -> (Result<i64, ExpressionError>, DemarcheNoyau) {
    let mut d = DemarcheNoyau {
        equilibre: check_balance(expr),
        rpn: None,
    };

    let rpn = match convert_to_postfix(expr) {
        Ok(rpn) => rpn,
        Err(e) => {
            tracing::debug!(expr, erreur = %e, "expression rejetée (syntaxe)");
            return (Err(e.into()), d);
        }
    };
    d.rpn = Some(format_tokens(&rpn));

    let res = evaluate_postfix_with(&rpn, limites).map_err(|e| {
        tracing::debug!(expr, erreur = %e, "expression rejetée (évaluation)");
        ExpressionError::from(e)
    });

    (res, d)
}
