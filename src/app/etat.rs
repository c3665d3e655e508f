//! src/app/etat.rs
//!
//! Réglages de la session console (sans noyau, sans entrée/sortie).
//!
//! Rôle : fixer la longueur maximale acceptée et l’invite.
//! Aucune option en ligne de commande : `Reglages::default()` fait foi.

/// Longueur utile par défaut (tampon de 100 octets, terminateur compris).
pub const LONGUEUR_MAX_DEFAUT: usize = 99;

/// Texte de l’invite.
pub const INVITE: &str = "Enter the expression:";

/// Message unique en cas d’échec, quelle que soit la raison.
pub const MESSAGE_INVALIDE: &str = "Invalid expression";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Longueur maximale (caractères) du jeton lu ; au-delà : refus, jamais de troncature.
    pub longueur_max: usize,
    /// Afficher l’invite avant la lecture.
    pub invite: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            longueur_max: LONGUEUR_MAX_DEFAUT,
            invite: true,
        }
    }
}
