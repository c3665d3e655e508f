//! Noyau — évaluation par balayage
//!
//! Organisation interne :
//! - verif.rs      : alphabet de l’expression (0-9 . + - * /)
//! - decoupe.rs    : balayage droite -> gauche sur un niveau d’opérateurs
//! - expression.rs : somme des termes (+ -)
//! - terme.rs      : produit des littéraux (* /)
//! - litteral.rs   : texte décimal -> flottant
//! - format.rs     : affichage “%f”
//! - erreur.rs     : ParseError

pub mod decoupe;
pub mod erreur;
pub mod expression;
pub mod format;
pub mod litteral;
pub mod terme;
pub mod verif;

#[cfg(test)]
mod tests_scenarios;


use num_traits::Float;

/// Flottant utilisable par le noyau (f32, f64).
pub trait Nombre: Float + From<u8> {}

impl<T: Float + From<u8>> Nombre for T {}

// API publique minimale
pub use erreur::ParseError;
pub use expression::evaluate;
pub use format::format_fixed;
