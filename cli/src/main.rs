//! Command-line front end for Soul-Link team building and matchups.

mod render;
mod run;

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use soullink_battle::{classify_against_type, Effectiveness, Matchup, MatchupRating, Type};
use soullink_team::{ConstraintSet, PairPool, RunSummary, SearchLimits, DEFAULT_MAX_COMBINATIONS};
use tracing_subscriber::EnvFilter;

use run::RunFile;

#[derive(Parser, Debug)]
#[command(name = "soullink", about = "Soul-Link team builder and matchup helper")]
struct Args {
    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enumerate legal teams from a run file
    Combos {
        /// Run file exported by the tracker
        run: PathBuf,

        /// Override the saved team size
        #[arg(long)]
        team_size: Option<usize>,

        /// Allow duplicate species across pairs
        #[arg(long, default_value_t = false)]
        no_species_clause: bool,

        /// Allow duplicate primary types across pairs
        #[arg(long, default_value_t = false)]
        no_type_clause: bool,

        /// Leave out pairs with a custom member
        #[arg(long, default_value_t = false)]
        no_custom: bool,

        /// Pair id that must be on every team (repeatable)
        #[arg(long = "require")]
        required: Vec<String>,

        /// Stop after this many teams
        #[arg(long, default_value_t = DEFAULT_MAX_COMBINATIONS)]
        max: usize,
    },

    /// Show weaknesses and resistances for one or two types
    Types {
        #[arg(required = true, num_args = 1..=2)]
        types: Vec<String>,
    },

    /// Compare our types against the opponent's
    Matchup {
        /// Our types, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        mine: Vec<String>,

        /// Opponent types, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        theirs: Vec<String>,
    },

    /// Count living and fallen pairs in a run file
    Summary { run: PathBuf },
}

fn parse_types(names: &[String]) -> Result<Vec<Type>> {
    let types = Type::parse_all(names.iter().map(String::as_str));
    if types.is_empty() {
        bail!("No known types in {:?}", names);
    }
    Ok(types)
}

/// Output of the `matchup` command
#[derive(Debug, Serialize)]
struct MatchupReport {
    #[serde(flatten)]
    matchup: Matchup,
    /// Only rated when the opponent has a single type
    rating: Option<MatchupRating>,
}

impl MatchupReport {
    fn new(mine: &[Type], theirs: &[Type]) -> Self {
        let rating = match theirs {
            [single] => Some(classify_against_type(&Effectiveness::resolve(mine), *single)),
            _ => None,
        };
        Self {
            matchup: Matchup::between(mine, theirs),
            rating,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Command::Combos {
            run,
            team_size,
            no_species_clause,
            no_type_clause,
            no_custom,
            required,
            max,
        } => {
            let run = RunFile::load(&run)?;
            let mut constraints = ConstraintSet {
                species_clause: run.constraints.species_clause && !no_species_clause,
                primary_type_clause: run.constraints.primary_type_clause && !no_type_clause,
                allow_custom: run.constraints.allow_custom && !no_custom,
                team_size: team_size.unwrap_or(run.constraints.team_size),
                required_pair_ids: run.constraints.required_pair_ids.clone(),
            };
            for id in required {
                constraints = constraints.require(id);
            }
            let limits = SearchLimits {
                max_combinations: max,
            };

            let pool = PairPool::eligible(&run.pairs, &constraints);
            let results = pool.search(&constraints, &limits)?;
            if args.json {
                print_json(&results)?;
            } else {
                print!("{}", render::combinations(&results));
                if let Some(note) = render::cap_note(results.len(), limits.max_combinations) {
                    print!("{note}");
                }
            }
        }
        Command::Types { types } => {
            let types = parse_types(&types)?;
            let effectiveness = Effectiveness::resolve(&types);
            if args.json {
                print_json(&effectiveness)?;
            } else {
                let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
                println!("{}", names.join("/"));
                print!("{}", render::effectiveness(&effectiveness));
            }
        }
        Command::Matchup { mine, theirs } => {
            let mine = parse_types(&mine)?;
            let theirs = parse_types(&theirs)?;
            let report = MatchupReport::new(&mine, &theirs);
            if args.json {
                print_json(&report)?;
            } else {
                print!("{}", render::matchup(&report.matchup, report.rating));
            }
        }
        Command::Summary { run } => {
            let run = RunFile::load(&run)?;
            let summary = RunSummary::from_pairs(&run.pairs);
            if args.json {
                print_json(&summary)?;
            } else {
                print!("{}", render::summary(&summary));
            }
        }
    }

    Ok(())
}
