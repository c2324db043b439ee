//! Calculatrice RPN (bibliothèque)
//!
//! Le noyau (`noyau`) ne dépend d’aucune interface : il est partagé par
//! l’application egui (natif + web) et utilisable seul.
//!
//! ```
//! use calculatrice_rpn::noyau::{evaluate, EvalError, ExpressionError};
//!
//! assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(512));
//! assert_eq!(
//!     evaluate("10 / (5 - 5)"),
//!     Err(ExpressionError::Eval(EvalError::DivisionByZero))
//! );
//! ```

pub mod noyau;
