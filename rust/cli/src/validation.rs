//! Parsing and validation for command arguments.
//!
//! Player lists are comma separated (`A,B,C`). Scripted betting actions are
//! `PLAYER:AMOUNT` or `PLAYER:fold`, also comma separated.

use std::collections::HashSet;

/// One scripted move in a betting round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Post { player: String, amount: u32 },
    Fold { player: String },
}

impl ScriptStep {
    pub fn player(&self) -> &str {
        match self {
            ScriptStep::Post { player, .. } | ScriptStep::Fold { player } => player,
        }
    }
}

/// Parses a seating list, rejecting empty names and repeats.
///
/// ```rust
/// # use pokeher_cli::validation::parse_players;
/// assert_eq!(parse_players("A, B,C").unwrap(), vec!["A", "B", "C"]);
/// assert!(parse_players("A,A").is_err());
/// ```
pub fn parse_players(input: &str) -> Result<Vec<String>, String> {
    let players: Vec<String> = input.split(',').map(|p| p.trim().to_string()).collect();
    if players.iter().any(|p| p.is_empty()) {
        return Err("player names must not be empty".into());
    }
    let mut seen = HashSet::new();
    for p in &players {
        if !seen.insert(p) {
            return Err(format!("player '{}' listed twice", p));
        }
    }
    Ok(players)
}

/// ```rust
/// # use pokeher_cli::validation::{parse_script, ScriptStep};
/// let steps = parse_script("C:20, D:fold").unwrap();
/// assert_eq!(steps[0], ScriptStep::Post { player: "C".into(), amount: 20 });
/// assert_eq!(steps[1], ScriptStep::Fold { player: "D".into() });
/// ```
pub fn parse_script(input: &str) -> Result<Vec<ScriptStep>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_step)
        .collect()
}

fn parse_step(step: &str) -> Result<ScriptStep, String> {
    let Some((player, what)) = step.split_once(':') else {
        return Err(format!("expected PLAYER:AMOUNT or PLAYER:fold, got '{}'", step));
    };
    let player = player.trim().to_string();
    if player.is_empty() {
        return Err(format!("missing player in '{}'", step));
    }
    let what = what.trim();
    if what.eq_ignore_ascii_case("fold") || what.eq_ignore_ascii_case("f") {
        return Ok(ScriptStep::Fold { player });
    }
    let amount = what
        .parse::<u32>()
        .map_err(|_| format!("invalid amount '{}' for {}", what, player))?;
    Ok(ScriptStep::Post { player, amount })
}

/// Eliminations for the blinds command: `HAND:PLAYER`, comma separated.
/// The player leaves after the given hand number has been played.
pub fn parse_eliminations(input: &str) -> Result<Vec<(u32, String)>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|entry| {
            let (hand, player) = entry
                .split_once(':')
                .ok_or_else(|| format!("expected HAND:PLAYER, got '{}'", entry))?;
            let hand = hand
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("invalid hand number in '{}'", entry))?;
            Ok((hand, player.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_players_rejects_empty_name() {
        assert!(parse_players("A,,B").is_err());
        assert!(parse_players("").is_err());
    }

    #[test]
    fn test_parse_script_errors() {
        assert!(parse_script("C20").is_err());
        assert!(parse_script("C:-5").is_err());
        assert!(parse_script(":20").is_err());
    }

    #[test]
    fn test_parse_script_allows_checks() {
        let steps = parse_script("B:0").unwrap();
        assert_eq!(
            steps,
            vec![ScriptStep::Post {
                player: "B".into(),
                amount: 0
            }]
        );
        assert_eq!(steps[0].player(), "B");
    }

    #[test]
    fn test_parse_eliminations() {
        assert_eq!(
            parse_eliminations("3:C, 5:A").unwrap(),
            vec![(3, "C".to_string()), (5, "A".to_string())]
        );
        assert!(parse_eliminations("x:C").is_err());
    }
}
