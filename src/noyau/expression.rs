//! Noyau — évaluation d’une expression complète
//!
//! verifie -> découpe sur + / - (droite -> gauche) -> terme -> littéral
//!
//! Les résultats partiels remontent ; la première erreur arrête tout
//! (pas de résultat partiel).

use tracing::{debug, trace};

use super::decoupe::segments_inverses;
use super::erreur::ParseError;
use super::terme::evaluate_term;
use super::verif::verifie;
use super::Nombre;

/// API publique : évalue une expression en `f64`.
pub fn evaluate(expression: &str) -> Result<f64, ParseError> {
    evaluate_as(expression)
}

/// Même pipeline, pour n’importe quel flottant.
///
/// Somme amorcée à 0, termes pris de droite à gauche ; le terme de tête est
/// ajouté en dernier. Un signe en tête n’est pas unaire : il laisse un
/// terme de tête vide, donc `OperandeManquant`.
pub fn evaluate_as<T: Nombre>(expression: &str) -> Result<T, ParseError> {
    let res = somme_des_termes(expression);
    if let Err(e) = &res {
        debug!(expression, erreur = %e, "expression invalide");
    }
    res
}

fn somme_des_termes<T: Nombre>(expression: &str) -> Result<T, ParseError> {
    verifie(expression)?;

    let mut somme = T::zero();

    for seg in segments_inverses(expression, b"+-") {
        let v: T = evaluate_term(seg.texte).map_err(|e| e.decale(seg.debut))?;
        trace!(terme = seg.texte, debut = seg.debut, "terme évalué");

        somme = match seg.op {
            Some(b'-') => somme - v,
            _ => somme + v,
        };
    }

    Ok(somme)
}
