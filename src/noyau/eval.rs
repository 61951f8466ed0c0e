//! Noyau — évaluation récursive de la pile (postfixe, lue depuis la fin)
//!
//! Principe : on ne copie ni ne dépile jamais la pile ; on passe un indice
//! `fin` (tranche `pile[..fin]` encore disponible) et chaque appel renvoie
//! l’indice de ce qui reste après consommation.
//!
//! Politique d’échec (uniforme) :
//! - le créneau de l’opération qui échoue est toujours consommé ;
//! - ce que ses sous-évaluations ont consommé est rendu (reste = créneau - 1).

use std::collections::HashMap;

use super::operations::Op;

/// Résultat d’une évaluation complète : valeur + nombre d’entrées non consommées.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: Option<f64>,
    /// Entrées restantes en tête de pile (`pile[..restant]`), ignorées par le résultat.
    pub restant: usize,
}

/// Évalue toute la pile depuis la fin.
pub fn evaluer(pile: &[Op], variables: &HashMap<String, f64>) -> Evaluation {
    let (resultat, restant) = evaluer_jusqua(pile, pile.len(), variables);
    Evaluation { resultat, restant }
}

fn evaluer_jusqua(
    pile: &[Op],
    fin: usize,
    variables: &HashMap<String, f64>,
) -> (Option<f64>, usize) {
    // pile vide => pas de valeur
    let Some(reste) = fin.checked_sub(1) else {
        return (None, 0);
    };

    match &pile[reste] {
        Op::Operande(v) => (Some(*v), reste),

        // variable non liée => pas de valeur (pas une erreur)
        Op::Variable(nom) => (variables.get(nom).copied(), reste),

        Op::Constante { valeur, .. } => (Some(*valeur), reste),

        Op::Unaire { f, .. } => match evaluer_jusqua(pile, reste, variables) {
            (Some(x), apres) => (Some(f(x)), apres),
            (None, _) => (None, reste),
        },

        Op::Binaire { f, .. } => {
            // premier dépilé = opérande de droite
            let (droite, apres_droite) = evaluer_jusqua(pile, reste, variables);
            let Some(droite) = droite else {
                return (None, reste);
            };

            match evaluer_jusqua(pile, apres_droite, variables) {
                (Some(gauche), apres) => (Some(f(gauche, droite)), apres),
                (None, _) => (None, reste),
            }
        }
    }
}
