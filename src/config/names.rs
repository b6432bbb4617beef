//! Player-name suggestions for the name-entry screen.
//!
//! A suggestion is a board-flavoured title plus a piece, e.g. `CornerKnight`,
//! optionally followed by a cell number: `CenterRook5`.

use rand::RngExt;

const TITLES: &[&str] = &[
    "Corner", "Center", "Edge", "Cross", "Naught", "Diag", "Swift", "Bold", "Sly", "Lucky",
    "Grand", "Quiet",
];

const PIECES: &[&str] = &[
    "Knight", "Rook", "Bishop", "Pawn", "Queen", "King", "Tiger", "Fox", "Owl", "Crab", "Hawk",
    "Otter",
];

/// Longest suggestion this module can produce, in columns.
pub const MAX_SUGGESTION_LEN: usize = 13;

/// Attempts before settling for a name that clashes with `taken`.
const REROLLS: usize = 8;

/// Suggest a name that differs from `taken` (compared case-insensitively),
/// which is the other player's current entry.
pub fn suggest_player_name(taken: &str) -> String {
    let mut rng = rand::rng();
    let mut name = String::new();
    for _ in 0..REROLLS {
        let title = TITLES[rng.random_range(0..TITLES.len())];
        let piece = PIECES[rng.random_range(0..PIECES.len())];
        // Cell digits 1-9; zero means no suffix.
        name = match rng.random_range(0..10u8) {
            0 => format!("{title}{piece}"),
            cell => format!("{title}{piece}{cell}"),
        };
        if !name.eq_ignore_ascii_case(taken) {
            break;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_combination_fits() {
        let longest = TITLES.iter().map(|t| t.len()).max().unwrap()
            + PIECES.iter().map(|p| p.len()).max().unwrap()
            + 1;
        assert_eq!(longest, MAX_SUGGESTION_LEN);
    }

    #[test]
    fn test_suggestions_are_well_formed() {
        for _ in 0..100 {
            let name = suggest_player_name("");
            assert!(name.len() <= MAX_SUGGESTION_LEN);
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(TITLES.iter().any(|t| name.starts_with(t)));
            assert!(!name.ends_with('0'));
        }
    }

    #[test]
    fn test_suggestion_avoids_taken_name() {
        for _ in 0..100 {
            let first = suggest_player_name("");
            let second = suggest_player_name(&first.to_uppercase());
            assert!(!second.eq_ignore_ascii_case(&first));
        }
    }
}
