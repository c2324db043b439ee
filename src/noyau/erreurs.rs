//! Noyau : erreurs typées du pipeline.
//!
//! Deux familles, une par étage :
//! - `SyntaxError` : conversion infixe -> RPN
//! - `EvalError`   : exécution de la RPN
//!
//! `ExpressionError` réunit les deux pour `evaluate` (conversion `?` via `From`).

use super::jetons::Tok;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// Une parenthèse ouvrante n’est jamais refermée.
    #[error("parenthèses non équilibrées")]
    UnbalancedParens,

    /// Une parenthèse fermante sans ouvrante (ou une ouvrante restée en pile).
    #[error("parenthèse fermante sans ouvrante correspondante")]
    MismatchedParen,

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    UnexpectedCharacter { caractere: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("opérande manquant (pile vide)")]
    StackUnderflow,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("exposant négatif")]
    NegativeExponent,

    /// La pile ne contient pas exactement une valeur en fin de RPN.
    #[error("expression invalide")]
    MalformedExpression,

    #[error("jeton inattendu en RPN: {0}")]
    MalformedToken(Tok),

    #[error("exposant trop grand: {exposant} (maximum {max})")]
    ExponentTooLarge { exposant: i64, max: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
    #[error("syntaxe: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("évaluation: {0}")]
    Eval(#[from] EvalError),
}
