// src/noyau/terme.rs

use tracing::trace;

use super::decoupe::segments_inverses;
use super::erreur::ParseError;
use super::litteral::parse_literal;
use super::Nombre;

/// Évalue un terme : littéraux séparés par `*` ou `/`.
///
/// Produit amorcé à 1, balayé de droite à gauche ; le littéral de tête est
/// multiplié en dernier. Division par zéro : sémantique IEEE (inf / NaN).
pub fn evaluate_term<T: Nombre>(terme: &str) -> Result<T, ParseError> {
    let mut produit = T::one();

    for seg in segments_inverses(terme, b"*/") {
        let v: T = parse_literal(seg.texte).map_err(|e| e.decale(seg.debut))?;
        trace!(litteral = seg.texte, debut = seg.debut, "littéral lu");

        produit = match seg.op {
            Some(b'/') => produit / v,
            _ => produit * v,
        };
    }

    Ok(produit)
}
