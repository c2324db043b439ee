//! Noyau entier (i64)
//!
//! Organisation interne :
//! - jetons.rs   : jetons + table des opérateurs (priorité, associativité)
//! - rpn.rs      : équilibre des parenthèses + shunting-yard
//! - eval.rs     : exécution de la RPN + pipeline complet
//! - erreurs.rs  : erreurs typées (syntaxe / évaluation)
//! - limites.rs  : garde-fous configurables
//! - lot.rs      : une expression par ligne + rapports texte

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod limites;
pub mod lot;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreurs::{EvalError, ExpressionError, SyntaxError};
pub use eval::{
    eval_expression, evaluate, evaluate_postfix, evaluate_postfix_with, evaluate_with,
    DemarcheNoyau,
};
pub use jetons::{format_tokens, Operateur, Tok};
pub use limites::Limites;
pub use lot::{lot_demo, traiter_lot, RapportLot};
pub use rpn::{check_balance, convert_to_postfix};
