// src/noyau/format.rs
//
// Affichage infixe de la pile (description), parenthèses minimales.
//
// Lecture depuis la fin, comme l’évaluation :
// - premier sous-rendu = opérande de DROITE (empilée en dernier)
// - second sous-rendu  = opérande de GAUCHE
//
// Parenthèses pour un binaire de précédence P :
// - droite : sous-binaire de précédence < P, ou = P si l’opérateur est
//   position_sensible (a−(b−c), a÷(b÷c))
// - gauche : sous-binaire de précédence < P seulement ((a−b)−c s’écrit a−b−c)
//
// Opérande manquante : "?".

use super::operations::Op;

/// Marqueur d’opérande manquante.
const MANQUANT: &str = "?";

/// Rendu décimal d’un opérande (forme la plus courte qui se relit à l’identique).
pub fn format_nombre(v: f64) -> String {
    format!("{v}")
}

/// Description complète : fragments disjoints séparés par ", ", suffixe "=".
/// Pile vide => chaîne vide.
pub fn format_description(pile: &[Op]) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut fin = pile.len();

    while fin > 0 {
        let rendu = decrire_jusqua(pile, fin);
        fragments.push(rendu.texte.unwrap_or_else(|| MANQUANT.to_string()));
        fin = rendu.restant;
    }

    if fragments.is_empty() {
        return String::new();
    }

    // lus depuis la fin : on remet dans l’ordre de la pile
    fragments.reverse();
    let mut out = fragments.join(", ");
    out.push('=');
    out
}

struct Rendu<'a> {
    texte: Option<String>,
    restant: usize,
    op: Option<&'a Op>,
}

fn decrire_jusqua(pile: &[Op], fin: usize) -> Rendu<'_> {
    let Some(reste) = fin.checked_sub(1) else {
        return Rendu {
            texte: None,
            restant: 0,
            op: None,
        };
    };

    let op = &pile[reste];

    let (texte, restant) = match op {
        Op::Operande(_) | Op::Variable(_) | Op::Constante { .. } => (op.to_string(), reste),

        Op::Unaire { symbole, .. } => {
            let arg = decrire_jusqua(pile, reste);
            let inner = arg.texte.as_deref().unwrap_or(MANQUANT);
            (format!("{symbole}({inner})"), arg.restant)
        }

        Op::Binaire {
            symbole,
            precedence,
            position_sensible,
            ..
        } => {
            let droite = decrire_jusqua(pile, reste);
            let parens_droite = droite.op.is_some_and(|o| {
                o.est_binaire()
                    && (o.precedence() < *precedence
                        || (o.precedence() == *precedence && *position_sensible))
            });
            let a = entourer(droite.texte, parens_droite);

            let gauche = decrire_jusqua(pile, droite.restant);
            let parens_gauche = gauche
                .op
                .is_some_and(|o| o.est_binaire() && o.precedence() < *precedence);
            let b = entourer(gauche.texte, parens_gauche);

            (format!("{b}{symbole}{a}"), gauche.restant)
        }
    };

    Rendu {
        texte: Some(texte),
        restant,
        op: Some(op),
    }
}

fn entourer(texte: Option<String>, parens: bool) -> String {
    match texte {
        Some(t) if parens => format!("({t})"),
        Some(t) => t,
        None => MANQUANT.to_string(),
    }
}
