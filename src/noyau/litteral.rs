// src/noyau/litteral.rs

use super::erreur::ParseError;
use super::Nombre;

/// Chiffres significatifs gardés dans la mantisse ; au-delà, seul l’exposant bouge.
const CHIFFRES_SIGNIFICATIFS: u32 = 17;

/// Plus grande puissance de dix exacte en f64 : pas de mise à l’échelle.
const PAS_ECHELLE: i64 = 22;

/// Lit un littéral décimal non signé : chiffres, au plus un point.
///
/// Valeur : chaque chiffre pèse 10^(d - i - 1), d = position du point
/// (ou longueur du texte s’il n’y en a pas). Calculée en une passe :
/// mantisse entière (Horner, 17 chiffres significatifs au plus) et exposant
/// décimal, puis mise à l’échelle. Exact tant que la mantisse tient dans le
/// flottant et que l’exposant reste dans ±22.
///
/// Cas limites :
/// - texte vide => `OperandeManquant`
/// - `5.`, `.5` et `.` sont acceptés (`.` vaut 0)
/// - second point => `PointEnTrop`
/// - zéros de tête ou chiffres en excès : aucune limite de longueur
pub fn parse_literal<T: Nombre>(texte: &str) -> Result<T, ParseError> {
    if texte.is_empty() {
        return Err(ParseError::OperandeManquant { pos: 0 });
    }

    let dix: T = From::from(10u8);
    let mut mantisse = T::zero();
    let mut significatifs: u32 = 0;
    let mut exposant: i64 = 0;
    let mut vu_point = false;

    for (pos, c) in texte.char_indices() {
        match c {
            '0'..='9' => {
                let chiffre = c as u8 - b'0';
                if significatifs < CHIFFRES_SIGNIFICATIFS {
                    if significatifs > 0 || chiffre != 0 {
                        significatifs += 1;
                    }
                    let valeur: T = From::from(chiffre);
                    mantisse = mantisse * dix + valeur;
                    if vu_point {
                        exposant -= 1;
                    }
                } else if !vu_point {
                    // chiffre entier perdu : il décale quand même la valeur
                    exposant += 1;
                }
            }
            '.' if !vu_point => vu_point = true,
            '.' => return Err(ParseError::PointEnTrop { pos }),
            car => return Err(ParseError::CaractereInattendu { car, pos }),
        }
    }

    Ok(mise_a_echelle(mantisse, exposant))
}

/// mantisse × 10^exposant, par pas de 10^22 pour ne jamais calculer une
/// puissance hors du flottant.
fn mise_a_echelle<T: Nombre>(mantisse: T, exposant: i64) -> T {
    let dix: T = From::from(10u8);
    let pas = dix.powi(PAS_ECHELLE as i32);
    let mut v = mantisse;
    let mut reste = exposant;

    while reste > PAS_ECHELLE && v.is_finite() && !v.is_zero() {
        v = v * pas;
        reste -= PAS_ECHELLE;
    }
    while reste < -PAS_ECHELLE && !v.is_zero() {
        v = v / pas;
        reste += PAS_ECHELLE;
    }

    if v.is_zero() || !v.is_finite() {
        v
    } else if reste >= 0 {
        v * dix.powi(reste as i32)
    } else {
        v / dix.powi((-reste) as i32)
    }
}
