//! src/noyau/pile.rs
//!
//! Moteur de la calculatrice : pile postfixe + liaisons de variables + registre.
//!
//! Rôle : recevoir les actions de l’interface (empiler un opérande, une
//! variable, une opération, dépiler, effacer, lier une variable) et rendre
//! le résultat courant et la description infixe.
//!
//! Contrats :
//! - Seule la queue de la pile est modifiée (push/pop), ou la pile entière (clear).
//! - Aucune erreur n’est levée : échec = `None` ou action sans effet.
//! - Chaque mutation de pile réévalue immédiatement.
//! - Lier/délier une variable ne réévalue pas.

use std::collections::HashMap;
use std::fmt;

use super::eval::{evaluer, Evaluation};
use super::format::format_description;
use super::operations::{Op, Registre};
use super::programme::Programme;

#[derive(Clone, Debug)]
pub struct Calculatrice {
    pile: Vec<Op>,
    registre: Registre,
    variables: HashMap<String, f64>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::avec_registre(Registre::standard())
    }
}

impl Calculatrice {
    /// Moteur vide, catalogue standard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moteur vide, catalogue fourni.
    pub fn avec_registre(registre: Registre) -> Self {
        Self {
            pile: Vec::new(),
            registre,
            variables: HashMap::new(),
        }
    }

    /* ------------------------ Actions sur la pile ------------------------ */

    pub fn push_operand(&mut self, valeur: f64) -> Option<f64> {
        self.pile.push(Op::Operande(valeur));
        self.evaluate()
    }

    /// Empile une référence de variable (résolue à l’évaluation).
    pub fn push_variable(&mut self, nom: impl Into<String>) -> Option<f64> {
        self.pile.push(Op::Variable(nom.into()));
        self.evaluate()
    }

    /// Retire la queue si elle existe (sinon rien).
    pub fn pop_operand(&mut self) -> Option<f64> {
        self.pile.pop();
        self.evaluate()
    }

    /// Symbole inconnu : pas de mutation, on rend le résultat courant.
    pub fn perform_operation(&mut self, symbole: &str) -> Option<f64> {
        match self.registre.lookup(symbole) {
            Some(op) => self.pile.push(op.clone()),
            None => log::trace!("opération inconnue ignorée : {symbole:?}"),
        }
        self.evaluate()
    }

    /// Vide la pile ; la passe d’évaluation (sans résultat) est conservée.
    pub fn clear(&mut self) {
        self.pile.clear();
        self.evaluate();
    }

    /* ------------------------ Variables ------------------------ */

    pub fn bind_variable(&mut self, nom: impl Into<String>, valeur: f64) {
        self.variables.insert(nom.into(), valeur);
    }

    pub fn unbind_variable(&mut self, nom: &str) {
        self.variables.remove(nom);
    }

    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variables
    }

    /* ------------------------ Lectures ------------------------ */

    /// Résultat courant (`None` : expression incomplète ou variable non liée).
    pub fn evaluate(&self) -> Option<f64> {
        self.evaluer_detaille().resultat
    }

    /// Résultat + nombre d’entrées de tête non consommées.
    pub fn evaluer_detaille(&self) -> Evaluation {
        let e = evaluer(&self.pile, &self.variables);
        log::debug!(
            "[{}] = {:?} avec {} entrée(s) restante(s)",
            self.program(),
            e.resultat,
            e.restant
        );
        e
    }

    /// Forme infixe, suffixe "=" ; vide si la pile est vide.
    pub fn description(&self) -> String {
        format_description(&self.pile)
    }

    pub fn pile(&self) -> &[Op] {
        &self.pile
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn registre(&self) -> &Registre {
        &self.registre
    }

    /* ------------------------ Programme ------------------------ */

    pub fn program(&self) -> Programme {
        Programme::depuis_pile(&self.pile)
    }

    /// Remplace la pile ; jetons non reconnus ignorés. Ne réévalue pas.
    pub fn set_program(&mut self, programme: &Programme) {
        self.pile = programme.restaurer(&self.registre);
    }
}

impl fmt::Display for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
