//! Tests scientifiques (campagne) : propriétés observables du moteur.
//!
//! Chaque scénario passe uniquement par l’API publique (push/operate/pop/clear,
//! liaisons, description, programme), comme le ferait l’interface.
//!
//! Notes :
//! - evaluate() ne réduit que depuis la fin : avec [3, 5] le résultat est 5
//!   et 3 reste en tête (visible dans la description, pas dans le résultat).
//! - un opérateur sans assez d’opérandes rend None ; sa description montre "?".

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use super::{Calculatrice, Programme};

/// Action “bouton” : nombre, variable (lettre), sinon opération.
fn jouer(calc: &mut Calculatrice, jeton: &str) -> Option<f64> {
    if let Ok(v) = jeton.parse::<f64>() {
        calc.push_operand(v)
    } else if jeton.chars().all(|c| c.is_ascii_alphabetic())
        && calc.registre().lookup(jeton).is_none()
    {
        calc.push_variable(jeton)
    } else {
        calc.perform_operation(jeton)
    }
}

fn calc_depuis(jetons: &[&str]) -> Calculatrice {
    let mut calc = Calculatrice::new();
    for j in jetons {
        jouer(&mut calc, j);
    }
    calc
}

fn assert_scenario(jetons: &[&str], resultat: Option<f64>, description: &str) {
    let calc = calc_depuis(jetons);
    assert_eq!(calc.evaluate(), resultat, "jetons={jetons:?}");
    assert_eq!(calc.description(), description, "jetons={jetons:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Scénarios de base ------------------------ */

#[test]
fn sci_addition() {
    assert_scenario(&["4", "5", "+"], Some(9.0), "4+5=");
}

#[test]
fn sci_division_ordre_corrige() {
    assert_scenario(&["6", "2", "÷"], Some(3.0), "6÷2=");
}

#[test]
fn sci_soustraction_chainee() {
    // (2−3)−4
    assert_scenario(&["2", "3", "−", "4", "−"], Some(-5.0), "2−3−4=");
    // 2−(3−4)
    assert_scenario(&["2", "3", "4", "−", "−"], Some(3.0), "2−(3−4)=");
}

#[test]
fn sci_operandes_insuffisants() {
    let calc = calc_depuis(&["10", "÷"]);
    assert_eq!(calc.evaluate(), None);
    assert_eq!(calc.len(), 2);
    assert_eq!(calc.evaluer_detaille().restant, 1);
    assert_eq!(calc.description(), "?÷10=");
}

#[test]
fn sci_pi_sur_pile_vide() {
    let mut calc = Calculatrice::new();
    assert_eq!(calc.perform_operation("π"), Some(PI));
    assert_eq!(calc.description(), "π=");
}

#[test]
fn sci_variable_liee_puis_deliee() {
    let mut calc = Calculatrice::new();
    calc.bind_variable("M", 7.0);
    assert_eq!(calc.push_variable("M"), Some(7.0));
    assert_eq!(calc.description(), "M=");

    calc.unbind_variable("M");
    assert_eq!(calc.evaluate(), None);
    // la description ne dépend pas des liaisons
    assert_eq!(calc.description(), "M=");
}

#[test]
fn sci_reste_ignore_par_le_resultat() {
    let calc = calc_depuis(&["3", "5"]);
    assert_eq!(calc.evaluate(), Some(5.0));
    assert_eq!(calc.evaluer_detaille().restant, 1);
    assert_eq!(calc.description(), "3, 5=");

    // opérateur incomplet au milieu : deux fragments
    let calc = calc_depuis(&["1", "2", "+", "×", "4"]);
    assert_eq!(calc.evaluate(), Some(4.0));
    assert_eq!(calc.description(), "?×(1+2), 4=");
}

#[test]
fn sci_unaires() {
    assert_scenario(&["9", "√"], Some(3.0), "√(9)=");
    assert_scenario(&["π", "cos"], Some(-1.0), "cos(π)=");
    assert_scenario(&["sin"], None, "sin(?)=");
    assert_scenario(&["3", "4", "×", "√"], Some(12f64.sqrt()), "√(3×4)=");
}

#[test]
fn sci_precedences_mixtes() {
    assert_scenario(&["2", "3", "+", "4", "×"], Some(20.0), "(2+3)×4=");
    assert_scenario(&["2", "3", "4", "×", "+"], Some(14.0), "2+3×4=");
    assert_scenario(&["8", "4", "2", "÷", "÷"], Some(4.0), "8÷(4÷2)=");
    assert_scenario(&["8", "4", "÷", "2", "÷"], Some(1.0), "8÷4÷2=");
    assert_scenario(
        &["1", "2", "+", "3", "4", "+", "×"],
        Some(21.0),
        "(1+2)×(3+4)=",
    );
}

#[test]
fn sci_variable_dans_expression() {
    let mut calc = calc_depuis(&["x", "2", "×", "1", "+"]);
    assert_eq!(calc.evaluate(), None);
    assert_eq!(calc.description(), "x×2+1=");

    calc.bind_variable("x", 4.5);
    assert_eq!(calc.evaluate(), Some(10.0));
}

/* ------------------------ Programme : aller-retour ------------------------ */

#[test]
fn sci_aller_retour_programme() {
    let scenarios: &[&[&str]] = &[
        &["4", "5", "+"],
        &["2", "3", "4", "−", "−", "π", "×"],
        &["10", "÷"],
        &["3", "5"],
        &["0.5", "√", "sin", "cos"],
        &["-2", "M", "÷"],
        &[],
    ];

    for jetons in scenarios {
        let mut a = calc_depuis(jetons);
        a.bind_variable("M", 8.0);

        let mut b = Calculatrice::new();
        b.bind_variable("M", 8.0);
        b.set_program(&a.program());

        assert_eq!(b.program(), a.program(), "jetons={jetons:?}");
        assert_eq!(b.description(), a.description(), "jetons={jetons:?}");
        assert_eq!(b.evaluate(), a.evaluate(), "jetons={jetons:?}");
    }
}

#[test]
fn sci_restauration_ignore_les_inconnus() {
    let mut calc = Calculatrice::new();
    let p: Programme = ["4", "?", "5", "*", "+", "4,5"].into_iter().collect();
    calc.set_program(&p);
    assert_eq!(calc.program().jetons(), &["4", "5", "+"]);
    assert_eq!(calc.evaluate(), Some(9.0));
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_chaine_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    // 1 2 + 3 + ... n +  (profondeur de récursion ~ n)
    let n = 400;
    let mut calc = Calculatrice::new();
    calc.push_operand(1.0);
    for k in 2..=n {
        calc.push_operand(k as f64);
        calc.perform_operation("+");
        budget(t0, max);
    }

    assert_eq!(calc.evaluate(), Some((n * (n + 1) / 2) as f64));
    let d = calc.description();
    assert!(d.starts_with("1+2+3+"));
    assert!(d.ends_with(&format!("+{n}=")));
    assert!(!d.contains('('));
    budget(t0, max);
}
