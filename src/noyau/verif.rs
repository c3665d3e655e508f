// src/noyau/verif.rs

use super::erreur::ParseError;

/// Caractère autorisé dans une expression : chiffre, point, + - * /.
fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/')
}

/// Vérifie l’alphabet de l’expression, sans regarder sa structure.
/// (`++3` ou `3+` passent ici : la découpe les refusera ensuite.)
pub fn verifie(expression: &str) -> Result<(), ParseError> {
    if expression.is_empty() {
        return Err(ParseError::Vide);
    }

    match expression.char_indices().find(|&(_, c)| !est_autorise(c)) {
        Some((pos, car)) => Err(ParseError::CaractereInattendu { car, pos }),
        None => Ok(()),
    }
}

/// Forme booléenne de [`verifie`].
pub fn validate(expression: &str) -> bool {
    verifie(expression).is_ok()
}
