//! Scénarios de bout en bout : texte -> evaluate -> format_fixed.
//!
//! Même forme que la sortie console : six décimales, ou le refus.

use super::erreur::ParseError;
use super::verif::validate;
use super::{evaluate, format_fixed};

fn affiche(expr: &str) -> String {
    let v = evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    format_fixed(v)
}

fn assert_refusee(expr: &str) {
    assert!(
        evaluate(expr).is_err(),
        "expr={expr:?} aurait dû être refusée"
    );
}

/* ------------------------ Cas de référence ------------------------ */

#[test]
fn scn_addition() {
    assert_eq!(affiche("3+4"), "7.000000");
}

#[test]
fn scn_multiplication_prioritaire() {
    assert_eq!(affiche("3+4*2"), "11.000000");
}

#[test]
fn scn_division_chainee() {
    assert_eq!(affiche("10/2/5"), "1.000000");
}

#[test]
fn scn_decimaux() {
    assert_eq!(affiche("3.5+1.25"), "4.750000");
}

#[test]
fn scn_vide() {
    assert_eq!(evaluate(""), Err(ParseError::Vide));
}

#[test]
fn scn_deux_points() {
    assert!(matches!(
        evaluate("1.2.3"),
        Err(ParseError::PointEnTrop { .. })
    ));
}

/* ------------------------ Mélanges ------------------------ */

#[test]
fn scn_melange_quatre_operateurs() {
    assert_eq!(affiche("1+2*3-4/2"), "5.000000");
    assert_eq!(affiche("100-99.5*2/4"), "50.250000");
}

#[test]
fn scn_resultat_negatif() {
    assert_eq!(affiche("1-2.5"), "-1.500000");
    assert_eq!(affiche("0-0"), "0.000000");
}

#[test]
fn scn_arrondi_affichage() {
    assert_eq!(affiche("1/3"), "0.333333");
    assert_eq!(affiche("2/3"), "0.666667");
}

#[test]
fn scn_division_par_zero() {
    assert_eq!(affiche("1/0"), "inf");
    assert_eq!(affiche("1-1/0"), "-inf");
    assert_eq!(affiche("0/0"), "nan");
}

#[test]
fn scn_zeros_de_tete() {
    assert_eq!(affiche("007+0.50"), "7.500000");
}

/* ------------------------ Refus ------------------------ */

#[test]
fn scn_caracteres_hors_alphabet() {
    for expr in ["3 + 4", "(1+2)", "2^3", "1e5", "x", "3,5", "1+2\n"] {
        assert!(!validate(expr), "expr={expr:?}");
        assert_refusee(expr);
    }
}

#[test]
fn scn_signes_et_operateurs_mal_places() {
    for expr in ["-3", "+3", "3+", "3-", "3++4", "*2", "2*", "2**3", "2*/3", "+", "-", "/"] {
        assert!(validate(expr), "alphabet valide: {expr:?}");
        assert_refusee(expr);
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn scn_deux_evaluations_identiques() {
    for expr in ["0.1+0.2", "1/3*3", "9.99*7.77-1.11/3"] {
        let a = evaluate(expr).unwrap();
        let b = evaluate(expr).unwrap();
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}
