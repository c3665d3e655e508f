// src/app.rs
//
// Calculatrice à balayage — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + console.rs)
// - Ré-exporter Reglages et run (pour main.rs)
//
// Le noyau ne fait aucune E/S : tout ce qui touche stdin/stdout vit ici.

pub mod console;
pub mod etat;

pub use console::run;
pub use etat::Reglages;
