// src/main.rs
//
// Calculette — point d’entrée ligne de commande
// ---------------------------------------------
// But:
// - restaurer un programme (jetons RPN) depuis les arguments
// - lier les variables (--var M=7)
// - afficher la description puis le résultat ("?" si aucun)
//
// Exemple:
//   calculette 2 3 − 4 −            => 2−3−4=  /  -5
//   calculette --var M=7 M 2 ×      => M×2=    /  14
//   calculette --json 6 2 ÷
//
// Journalisation : RUST_LOG=debug calculette ...
//
// Garde-fou : évaluation et description sont récursives (profondeur ~ nombre
// d’opérateurs), donc on borne la longueur du programme avant de le charger.

use std::num::ParseFloatError;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use thiserror::Error;

use calculette::noyau::format_nombre;
use calculette::{Calculatrice, ErreurProgramme, Programme};

/// Nombre maximal de jetons acceptés (anti débordement de pile).
const JETONS_MAX: usize = 2_000;

#[derive(Parser, Debug)]
#[command(
    name = "calculette",
    version,
    about = "Calculatrice à pile : description infixe + résultat"
)]
struct Args {
    /// Liaison de variable, répétable
    #[arg(long = "var", value_name = "NOM=VALEUR", value_parser = lire_liaison)]
    vars: Vec<(String, f64)>,

    /// Refuse les jetons inconnus au lieu de les ignorer
    #[arg(long)]
    strict: bool,

    /// Sortie JSON (programme, description, résultat)
    #[arg(long)]
    json: bool,

    /// Programme : symboles (× ÷ + − sin cos √ π), nombres, variables
    #[arg(value_name = "JETON", allow_hyphen_values = true)]
    jetons: Vec<String>,
}

#[derive(Debug, Error)]
enum ErreurCli {
    #[error("liaison sans '=' : {0:?} (attendu NOM=VALEUR)")]
    LiaisonSansEgal(String),

    #[error("nom de variable vide dans {0:?}")]
    NomVide(String),

    #[error("valeur invalide pour {nom} : {source}")]
    ValeurInvalide {
        nom: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("programme trop long : {longueur} jetons (maximum {max})")]
    ProgrammeTropLong { longueur: usize, max: usize },

    #[error(transparent)]
    Programme(#[from] ErreurProgramme),

    #[error("sortie JSON : {0}")]
    Json(#[from] serde_json::Error),
}

/// `resultat` passe par `format_nombre` : NaN et ±inf restent distincts de
/// l’absence de résultat (`null`).
#[derive(Serialize)]
struct Rapport<'a> {
    programme: &'a Programme,
    description: String,
    resultat: Option<String>,
}

fn rapport_json(calc: &Calculatrice) -> Result<String, ErreurCli> {
    let programme = calc.program();
    let rapport = Rapport {
        programme: &programme,
        description: calc.description(),
        resultat: calc.evaluate().map(format_nombre),
    };
    Ok(serde_json::to_string_pretty(&rapport)?)
}

fn lire_liaison(s: &str) -> Result<(String, f64), ErreurCli> {
    let (nom, valeur) = s
        .split_once('=')
        .ok_or_else(|| ErreurCli::LiaisonSansEgal(s.to_string()))?;

    let nom = nom.trim();
    if nom.is_empty() {
        return Err(ErreurCli::NomVide(s.to_string()));
    }

    let valeur = valeur
        .trim()
        .parse::<f64>()
        .map_err(|source| ErreurCli::ValeurInvalide {
            nom: nom.to_string(),
            source,
        })?;

    Ok((nom.to_string(), valeur))
}

fn executer(args: Args) -> Result<(), ErreurCli> {
    let mut calc = Calculatrice::new();

    if args.jetons.len() > JETONS_MAX {
        return Err(ErreurCli::ProgrammeTropLong {
            longueur: args.jetons.len(),
            max: JETONS_MAX,
        });
    }

    let programme = Programme::from(args.jetons);
    if args.strict {
        programme.valider(calc.registre())?;
    }
    calc.set_program(&programme);

    for (nom, valeur) in args.vars {
        calc.bind_variable(nom, valeur);
    }

    if args.json {
        println!("{}", rapport_json(&calc)?);
    } else {
        println!("{calc}");
        let resultat = calc.evaluate();
        println!("{}", resultat.map_or_else(|| "?".to_string(), format_nombre));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match executer(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("calculette: {e}");
            ExitCode::FAILURE
        }
    }
}
