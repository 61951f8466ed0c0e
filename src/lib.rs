// src/lib.rs
//
// Calculette — moteur d’expression à pile (RPN) + description infixe.
// L’interface (boutons, affichage) reste hors de la bibliothèque.

pub mod noyau;

pub use noyau::{Calculatrice, ErreurProgramme, Evaluation, Op, Programme, Registre};
