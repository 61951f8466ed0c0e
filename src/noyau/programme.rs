// src/noyau/programme.rs
//
// Programme = forme sérialisée de la pile : suite de jetons texte.
//
// Lecture d’un jeton (espaces de bord ignorés, dans cet ordre) :
// 1) symbole du registre      -> opération du registre
// 2) littéral numérique (f64) -> Operande
// 3) identifiant [A-Za-z_][A-Za-z0-9_]* -> Variable
// 4) sinon : ignoré (restauration permissive, “best effort”)
//
// NOTE: une variable nommée comme un symbole du registre ou comme un
// littéral (inf, nan) ne se relit pas en Variable.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::operations::{Op, Registre};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Programme(Vec<String>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErreurProgramme {
    #[error("jeton inconnu en position {position} : {jeton:?}")]
    JetonInconnu { position: usize, jeton: String },
}

impl Programme {
    /// Un jeton par entrée de pile, dans l’ordre de la pile.
    pub fn depuis_pile(pile: &[Op]) -> Self {
        Self(pile.iter().map(ToString::to_string).collect())
    }

    pub fn jetons(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reconstruit une pile ; les jetons non reconnus sont ignorés.
    pub fn restaurer(&self, registre: &Registre) -> Vec<Op> {
        self.0
            .iter()
            .filter_map(|jeton| {
                let op = lire_jeton(jeton, registre);
                if op.is_none() {
                    log::debug!("programme : jeton ignoré {jeton:?}");
                }
                op
            })
            .collect()
    }

    /// Variante stricte : signale le premier jeton que `restaurer` ignorerait.
    pub fn valider(&self, registre: &Registre) -> Result<(), ErreurProgramme> {
        match self
            .0
            .iter()
            .position(|jeton| lire_jeton(jeton, registre).is_none())
        {
            Some(position) => Err(ErreurProgramme::JetonInconnu {
                position,
                jeton: self.0[position].clone(),
            }),
            None => Ok(()),
        }
    }
}

fn lire_jeton(jeton: &str, registre: &Registre) -> Option<Op> {
    let jeton = jeton.trim();
    if let Some(op) = registre.lookup(jeton) {
        return Some(op.clone());
    }
    if let Ok(v) = jeton.parse::<f64>() {
        return Some(Op::Operande(v));
    }
    if est_identifiant(jeton) {
        return Some(Op::Variable(jeton.to_string()));
    }
    None
}

fn est_identifiant(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl<S: Into<String>> FromIterator<S> for Programme {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<String>> for Programme {
    fn from(jetons: Vec<String>) -> Self {
        Self(jetons)
    }
}

/// Jetons séparés par une espace.
impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}
