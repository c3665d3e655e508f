// src/noyau/format.rs

/// Affichage “%f” : six décimales, notation fixe.
///
/// Non finis comme printf : `inf`, `-inf`, `nan` (le signe d’un NaN est ignoré).
/// Le zéro négatif garde son signe : `-0.000000`.
pub fn format_fixed(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        };
    }
    format!("{x:.6}")
}
