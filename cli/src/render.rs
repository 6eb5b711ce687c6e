//! Plain-text output

use soullink_battle::{Effectiveness, Matchup, MatchupRating, TypeSet};
use soullink_team::{Combination, Pokemon, RunSummary};

fn types_of(p: &Pokemon) -> String {
    let keys = p.type_keys();
    if keys.is_empty() {
        "???".to_string()
    } else {
        keys.join("/")
    }
}

pub fn combinations(results: &[Combination]) -> String {
    if results.is_empty() {
        return "No valid combinations found.\n".to_string();
    }
    let mut out = String::new();
    for (i, combo) in results.iter().enumerate() {
        out.push_str(&format!("Team {}\n", i + 1));
        for pair in combo.iter() {
            out.push_str(&format!(
                "  [{}] {} ({}) + {} ({})\n",
                pair.id,
                pair.player1.name,
                types_of(&pair.player1),
                pair.player2.name,
                types_of(&pair.player2),
            ));
        }
    }
    out
}

/// Footer for a listing that filled the whole cap. The cap does not tell
/// us whether more teams exist, only that no more were collected.
pub fn cap_note(shown: usize, max: usize) -> Option<String> {
    (max > 0 && shown >= max).then(|| format!("(showing the first {max} teams)\n"))
}

fn line(label: &str, set: TypeSet) -> String {
    if set.is_empty() {
        format!("  {label:<18} -\n")
    } else {
        format!("  {label:<18} {set}\n")
    }
}

pub fn effectiveness(e: &Effectiveness) -> String {
    let mut out = String::new();
    out.push_str(&line("4x weak to:", e.double_weaknesses));
    out.push_str(&line("Weak to:", e.weaknesses));
    out.push_str(&line("Immune to:", e.immunities));
    out.push_str(&line("Double resists:", e.double_resistances));
    out.push_str(&line("Resists:", e.resistances));
    out
}

pub fn matchup(m: &Matchup, rating: Option<MatchupRating>) -> String {
    let mut out = format!(
        "Offense: {} ({}x)\nDefense: {} ({}x)\n",
        m.offense, m.offense_multiplier, m.defense, m.defense_multiplier
    );
    if let Some(rating) = rating {
        out.push_str(&format!("Against type: {rating}\n"));
    }
    out
}

pub fn summary(s: &RunSummary) -> String {
    format!("Pairs: {}  Alive: {}  Fallen: {}\n", s.total, s.alive, s.dead)
}
