//! Card, board, action and equity formatters for terminal display.
//!
//! Suits are drawn with Unicode symbols where the terminal is known to cope
//! and fall back to the `c d h s` letters otherwise.
//!
//! ## Example
//!
//! ```rust
//! use pokeher_engine::cards::{Card, Rank, Suit};
//! use pokeher_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use pokeher_engine::cards::{Card, Suit};
use pokeher_engine::player::PlayerAction;

/// On Windows, only modern terminals (Windows Terminal, VS Code, anything
/// setting TERM_PROGRAM) get Unicode; elsewhere it is assumed.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// `[A♠ K♥ Q♦]`, or `[]` for no cards.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// ```rust
/// use pokeher_engine::player::PlayerAction;
/// # use pokeher_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Call(20)), "call 20");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call(amount) => format!("call {}", amount),
        PlayerAction::Raise(amount) => format!("raise {}", amount),
    }
}

/// Equity in `[0, 1]` as a percentage with two decimals.
pub fn format_equity(equity: f64) -> String {
    format!("{:.2}%", equity * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokeher_engine::cards::Rank;

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_card_uses_short_rank() {
        let ten = format_card(&Card::new(Rank::Ten, Suit::Clubs));
        assert!(ten.starts_with('T'));
    }

    #[test]
    fn test_format_empty_board() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_equity() {
        assert_eq!(format_equity(0.8523), "85.23%");
        assert_eq!(format_equity(0.0), "0.00%");
    }

    #[test]
    fn test_format_action_all_variants() {
        assert_eq!(format_action(&PlayerAction::Check), "check");
        assert_eq!(format_action(&PlayerAction::Raise(40)), "raise 40");
    }
}
