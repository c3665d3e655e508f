// src/noyau/decoupe.rs
//
// Balayage droite -> gauche commun aux deux niveaux de priorité.
//
// Principe (borne supérieure qui rétrécit) :
// - `fin` part de la fin du texte
// - chaque opérateur rencontré ferme le segment ]i, fin[ puis fin = i
// - le segment de tête [0, fin[ sort en dernier, sans opérateur
//
// Aucun segment n’est sauté : un opérateur en tête, en queue ou doublé
// produit un segment vide, que l’étape suivante refuse.

/// Morceau d’un texte délimité par des opérateurs d’un même niveau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Opérateur qui précède le segment (`None` pour le segment de tête).
    pub op: Option<u8>,
    /// Offset (octets) du segment dans le texte découpé.
    pub debut: usize,
    pub texte: &'a str,
}

/// Découpe `texte` sur les opérateurs `ops`, du dernier segment au premier.
///
/// Les opérateurs sont ASCII : chaque coupe tombe sur une frontière de caractère.
pub fn segments_inverses<'a>(texte: &'a str, ops: &[u8]) -> Vec<Segment<'a>> {
    let octets = texte.as_bytes();
    let mut out = Vec::new();
    let mut fin = octets.len();

    for i in (0..octets.len()).rev() {
        if ops.contains(&octets[i]) {
            out.push(Segment {
                op: Some(octets[i]),
                debut: i + 1,
                texte: &texte[i + 1..fin],
            });
            fin = i;
        }
    }

    out.push(Segment {
        op: None,
        debut: 0,
        texte: &texte[..fin],
    });
    out
}
