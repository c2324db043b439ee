// src/noyau/jetons.rs

use std::fmt;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Sens de regroupement pour deux opérateurs de même priorité.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Div,
    Modulo,
    Puissance, // ^
    MoinsUnaire, // ~ (jamais écrit par l’utilisateur, produit par le convertisseur)
}

impl Operateur {
    /// Opérateur binaire correspondant à un caractère de l’entrée.
    /// `~` n’en fait pas partie : le moins unaire est décidé par position.
    pub const fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Div),
            '%' => Some(Self::Modulo),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub const fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Div => '/',
            Self::Modulo => '%',
            Self::Puissance => '^',
            Self::MoinsUnaire => '~',
        }
    }

    pub const fn priorite(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Div | Self::Modulo => 2,
            Self::Puissance => 3,
            Self::MoinsUnaire => 4,
        }
    }

    pub const fn associativite(self) -> Associativite {
        match self {
            Self::Puissance => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    pub const fn arite(self) -> usize {
        match self {
            Self::MoinsUnaire => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(i64),
    Op(Operateur),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "{n}"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Vrai pour les caractères d’opérateur de l’entrée (`+ - * / % ^`).
pub fn est_operateur(c: char) -> bool {
    Operateur::depuis_char(c).is_some()
}

/// Lit une suite de chiffres ASCII en i64.
///
/// Le littéral est d’abord lu exactement ; s’il dépasse 64 bits il est réduit
/// modulo 2^64, comme le reste de l’arithmétique.
pub fn lire_entier(chiffres: &str) -> i64 {
    let Some(n) = BigInt::parse_bytes(chiffres.as_bytes(), 10) else {
        // appelé uniquement sur des chiffres : chaîne vide seulement
        return 0;
    };

    if let Some(v) = n.to_i64() {
        return v;
    }

    let (_signe, mots) = n.to_u64_digits();
    let bas = mots.first().copied().unwrap_or(0);
    tracing::warn!(litteral = chiffres, "littéral hors 64 bits, réduit modulo 2^64");
    // réinterprétation en complément à deux
    bas as i64
}

/// Format utilitaire (démarche / rapports) : liste de jetons en texte.
///
/// Un `Num` s’écrit en décimal signé. Un littéral ≥ 2^63 a déjà été réduit
/// modulo 2^64 par `lire_entier` : il apparaît donc négatif, avec un `-`
/// collé au nombre. La négation, elle, est toujours le jeton séparé `~`.
///
/// ```
/// use calculatrice_rpn::noyau::{convert_to_postfix, format_tokens};
///
/// let rpn = convert_to_postfix("-9223372036854775808 / 2").unwrap();
/// assert_eq!(format_tokens(&rpn), "-9223372036854775808 ~ 2 /");
/// ```
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
