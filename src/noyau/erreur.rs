// src/noyau/erreur.rs

use thiserror::Error;

/// Erreur unique du noyau : toute étape (vérification, découpe, littéral)
/// échoue avec une `ParseError`, et la première erreur interrompt tout.
///
/// Les positions sont des offsets (octets) dans le texte reçu par l’étape
/// qui a échoué ; l’appelant les recale avec [`ParseError::decale`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu '{car}' (position {pos})")]
    CaractereInattendu { car: char, pos: usize },

    #[error("opérande manquant (position {pos})")]
    OperandeManquant { pos: usize },

    #[error("second point décimal (position {pos})")]
    PointEnTrop { pos: usize },

    #[error("octet hors UTF-8 (position {pos})")]
    OctetInvalide { pos: usize },

    #[error("entrée trop longue : {longueur} caractères (max {max})")]
    TropLong { longueur: usize, max: usize },
}

impl ParseError {
    /// Recale la position d’une erreur issue d’un sous-segment commençant à `debut`.
    pub fn decale(self, debut: usize) -> Self {
        use ParseError::*;

        match self {
            CaractereInattendu { car, pos } => CaractereInattendu {
                car,
                pos: pos + debut,
            },
            OperandeManquant { pos } => OperandeManquant { pos: pos + debut },
            PointEnTrop { pos } => PointEnTrop { pos: pos + debut },
            OctetInvalide { pos } => OctetInvalide { pos: pos + debut },
            autre => autre,
        }
    }

    /// Position fautive, si l’erreur en porte une.
    pub fn position(&self) -> Option<usize> {
        use ParseError::*;

        match self {
            CaractereInattendu { pos, .. }
            | OperandeManquant { pos }
            | PointEnTrop { pos }
            | OctetInvalide { pos } => Some(*pos),
            Vide | TropLong { .. } => None,
        }
    }
}
