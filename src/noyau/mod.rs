//! Noyau de la calculatrice (pile postfixe, flottants IEEE)
//!
//! Organisation interne :
//! - operations.rs : type somme Op + registre symbole -> Op
//! - pile.rs       : moteur (pile, variables, actions push/pop/clear)
//! - eval.rs       : évaluation récursive depuis la fin de la pile
//! - format.rs     : description infixe, parenthèses minimales
//! - programme.rs  : pile <-> suite de jetons texte

pub mod eval;
pub mod format;
pub mod operations;
pub mod pile;
pub mod programme;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::Evaluation;
pub use format::format_nombre;
pub use operations::{Op, Registre};
pub use pile::Calculatrice;
pub use programme::{ErreurProgramme, Programme};
