//! src/app/console.rs
//!
//! Session console : invite -> un jeton -> noyau -> une ligne de résultat.
//!
//! Contrats :
//! - stdout ne reçoit que l’invite et la ligne de résultat (le journal va sur stderr)
//! - échec d’évaluation => "Invalid expression", jamais d’erreur remontée
//!   (octets hors UTF-8 compris)
//! - seules les erreurs d’E/S remontent (anyhow)

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, warn};

use super::etat::{Reglages, INVITE, MESSAGE_INVALIDE};
use crate::noyau::verif::validate;
use crate::noyau::{evaluate, format_fixed, ParseError};

/// Issue d’une session.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    Valeur(f64),
    Invalide(ParseError),
}

/// Blancs au sens de `isspace` en C (locale "C").
fn est_blanc(octet: u8) -> bool {
    matches!(octet, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Lit le premier jeton non blanc (comme `scanf("%s")`), en octets bruts.
///
/// Saute les lignes vides ; le reste de la ligne après le jeton est ignoré.
/// Fin d’entrée sans jeton => `None`.
pub fn lire_jeton<R: BufRead>(entree: &mut R) -> std::io::Result<Option<Vec<u8>>> {
    let mut ligne = Vec::new();
    loop {
        ligne.clear();
        if entree.read_until(b'\n', &mut ligne)? == 0 {
            return Ok(None);
        }
        if let Some(jeton) = ligne.split(|&o| est_blanc(o)).find(|j| !j.is_empty()) {
            return Ok(Some(jeton.to_vec()));
        }
    }
}

/// Évalue un jeton déjà lu : UTF-8, longueur, puis noyau.
pub fn evalue_jeton(jeton: &[u8], reglages: &Reglages) -> Issue {
    let texte = match std::str::from_utf8(jeton) {
        Ok(t) => t,
        Err(e) => {
            return Issue::Invalide(ParseError::OctetInvalide {
                pos: e.valid_up_to(),
            })
        }
    };

    let longueur = texte.chars().count();
    if longueur > reglages.longueur_max {
        warn!(longueur, max = reglages.longueur_max, "jeton trop long");
        return Issue::Invalide(ParseError::TropLong {
            longueur,
            max: reglages.longueur_max,
        });
    }

    match evaluate(texte) {
        Ok(v) => Issue::Valeur(v),
        Err(e) => {
            debug!(
                erreur = %e,
                position = ?e.position(),
                alphabet_valide = validate(texte),
                "refus"
            );
            Issue::Invalide(e)
        }
    }
}

/// Session complète sur `entree` / `sortie`.
pub fn run<R: BufRead, W: Write>(
    mut entree: R,
    mut sortie: W,
    reglages: &Reglages,
) -> anyhow::Result<Issue> {
    if reglages.invite {
        writeln!(sortie, "{INVITE}").context("écriture de l’invite")?;
        sortie.flush().context("écriture de l’invite")?;
    }

    let jeton = lire_jeton(&mut entree)
        .context("lecture de l’expression")?
        .unwrap_or_default();
    debug!(jeton = %String::from_utf8_lossy(&jeton), "jeton lu");

    let issue = evalue_jeton(&jeton, reglages);
    let ecrit = match &issue {
        Issue::Valeur(v) => writeln!(sortie, "{}", format_fixed(*v)),
        Issue::Invalide(_) => writeln!(sortie, "{MESSAGE_INVALIDE}"),
    };
    ecrit.context("écriture du résultat")?;

    Ok(issue)
}
