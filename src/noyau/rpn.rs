// src/noyau/rpn.rs
//
// Shunting-yard : infixe (texte) -> RPN (jetons)
//
// Règles:
// - Les parenthèses sont vérifiées AVANT le balayage (verifier_equilibre).
// - Moins unaire:
//    - un '-' est unaire s’il est le tout premier caractère, ou si le caractère
//      brut juste avant est '(' ou un opérateur (les espaces NE sont PAS sautés)
//    - il devient '~' sur la pile, sans comparaison de priorité
// - '^' est associatif à droite : à priorité égale, on ne dépile pas.

use super::erreurs::SyntaxError;
use super::jetons::{est_operateur, lire_entier, Associativite, Operateur, Tok};

/// Vérifie l’équilibre des parenthèses et dit pourquoi il échoue.
///
/// - `)` qui fait passer le compteur sous zéro -> `MismatchedParen`
/// - compteur > 0 en fin de chaîne          -> `UnbalancedParens`
pub fn verifier_equilibre(expr: &str) -> Result<(), SyntaxError> {
    let mut balance: usize = 0;

    for c in expr.chars() {
        match c {
            '(' => balance += 1,
            ')' => {
                balance = balance
                    .checked_sub(1)
                    .ok_or(SyntaxError::MismatchedParen)?;
            }
            _ => {}
        }
    }

    if balance == 0 {
        Ok(())
    } else {
        Err(SyntaxError::UnbalancedParens)
    }
}

/// Vrai si chaque `(` a sa `)` et qu’aucune `)` n’arrive trop tôt.
pub fn check_balance(expr: &str) -> bool {
    verifier_equilibre(expr).is_ok()
}

/// Un '-' en position `i` est-il unaire ? (position brute, pas de saut d’espaces)
fn est_moins_unaire(chars: &[char], i: usize) -> bool {
    match i.checked_sub(1).map(|p| chars[p]) {
        None => true,
        Some(prec) => prec == '(' || est_operateur(prec),
    }
}

/// Le sommet `top` doit-il sortir avant d’empiler `op` ?
fn doit_depiler(top: Operateur, op: Operateur) -> bool {
    let p_top = top.priorite();
    let p_op = op.priorite();

    match op.associativite() {
        Associativite::Droite => p_top > p_op,
        Associativite::Gauche => p_top >= p_op,
    }
}

/// Convertit une expression infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   "2 + 3 * 4"  ->  [Num(2), Num(3), Num(4), Op(*), Op(+)]
///   "-(1 + 2)"   ->  [Num(1), Num(2), Op(+), Op(~)]
#[tracing::instrument(level = "trace", err(level = "debug"))]
pub fn convert_to_postfix(expr: &str) -> Result<Vec<Tok>, SyntaxError> {
    verifier_equilibre(expr)?;

    let chars: Vec<char> = expr.chars().collect();
    let mut out: Vec<Tok> = Vec::new();
    // ne contient que des Op et des LPar
    let mut ops: Vec<Tok> = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : suite maximale de chiffres
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let chiffres: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_entier(&chiffres)));
            continue;
        }

        match c {
            '(' => ops.push(Tok::LPar),

            ')' => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(SyntaxError::MismatchedParen),
                    }
                }
            }

            '-' if est_moins_unaire(&chars, i) => {
                ops.push(Tok::Op(Operateur::MoinsUnaire));
            }

            _ => {
                let Some(op) = Operateur::depuis_char(c) else {
                    return Err(SyntaxError::UnexpectedCharacter {
                        caractere: c,
                        position: i,
                    });
                };

                while let Some(Tok::Op(top)) = ops.last() {
                    if !doit_depiler(*top, op) {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }

                ops.push(Tok::Op(op));
            }
        }

        i += 1;
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(SyntaxError::MismatchedParen);
        }
        out.push(top);
    }

    Ok(out)
}
