// src/noyau/operations.rs
//
// Catalogue des opérations (registre) + type somme Op.
//
// Règles:
// - Op::Binaire porte sa précédence et un drapeau `position_sensible`
//   (÷ et − : l’ordre des opérandes compte).
// - Tout ce qui n’est pas binaire a une précédence maximale
//   (jamais de parenthèses sous un parent binaire).
// - Le registre est une valeur possédée (pas d’état global) : symbole -> Op.
//
// Ordre des opérandes (pile lue depuis la fin) :
//   f(gauche, droite) où `droite` est le premier dépilé.
//   Donc ÷ calcule gauche / droite et − calcule gauche − droite.

use std::collections::HashMap;
use std::f64::consts::PI;
use std::fmt;

use super::format::format_nombre;

/// Précédence de × et ÷.
pub const PRECEDENCE_MUL: i32 = 150;

/// Précédence de + et −.
pub const PRECEDENCE_ADD: i32 = 140;

#[derive(Clone, Debug)]
pub enum Op {
    Operande(f64),
    Variable(String),

    Constante {
        symbole: String,
        valeur: f64,
    },

    Unaire {
        symbole: String,
        f: fn(f64) -> f64,
    },

    Binaire {
        symbole: String,
        f: fn(f64, f64) -> f64,
        precedence: i32,
        position_sensible: bool,
    },
}

impl Op {
    pub fn constante(symbole: impl Into<String>, valeur: f64) -> Op {
        Op::Constante {
            symbole: symbole.into(),
            valeur,
        }
    }

    pub fn unaire(symbole: impl Into<String>, f: fn(f64) -> f64) -> Op {
        Op::Unaire {
            symbole: symbole.into(),
            f,
        }
    }

    pub fn binaire(
        symbole: impl Into<String>,
        f: fn(f64, f64) -> f64,
        precedence: i32,
        position_sensible: bool,
    ) -> Op {
        Op::Binaire {
            symbole: symbole.into(),
            f,
            precedence,
            position_sensible,
        }
    }

    /// Précédence : celle du binaire, sinon maximale.
    pub fn precedence(&self) -> i32 {
        match self {
            Op::Binaire { precedence, .. } => *precedence,
            _ => i32::MAX,
        }
    }

    pub fn est_binaire(&self) -> bool {
        matches!(self, Op::Binaire { .. })
    }
}

/// Symbole d’affichage (pour Operande : rendu décimal de la valeur).
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Operande(v) => f.write_str(&format_nombre(*v)),
            Op::Variable(nom) => f.write_str(nom),
            Op::Constante { symbole, .. }
            | Op::Unaire { symbole, .. }
            | Op::Binaire { symbole, .. } => f.write_str(symbole),
        }
    }
}

/* ------------------------ Registre ------------------------ */

/// Catalogue symbole -> Op. Les symboles sont uniques (clé de la table).
#[derive(Clone, Debug, Default)]
pub struct Registre {
    ops: HashMap<String, Op>,
}

impl Registre {
    /// Registre sans aucune opération.
    pub fn vide() -> Self {
        Self::default()
    }

    /// Catalogue par défaut : × ÷ + − sin cos √ π.
    pub fn standard() -> Self {
        let mut r = Self::vide();

        r.register(Op::binaire("×", |a, b| a * b, PRECEDENCE_MUL, false));
        r.register(Op::binaire("÷", |a, b| a / b, PRECEDENCE_MUL, true));
        r.register(Op::binaire("+", |a, b| a + b, PRECEDENCE_ADD, false));
        r.register(Op::binaire("−", |a, b| a - b, PRECEDENCE_ADD, true));

        r.register(Op::unaire("sin", f64::sin));
        r.register(Op::unaire("cos", f64::cos));
        r.register(Op::unaire("√", f64::sqrt));

        r.register(Op::constante("π", PI));

        r
    }

    /// Insère (ou remplace) l’opération sous son symbole d’affichage.
    pub fn register(&mut self, op: Op) {
        self.ops.insert(op.to_string(), op);
    }

    pub fn lookup(&self, symbole: &str) -> Option<&Op> {
        self.ops.get(symbole)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Symboles connus, triés (affichage déterministe).
    pub fn symboles(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.ops.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
