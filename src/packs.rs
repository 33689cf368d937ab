//! The game groups its puzzles into packs by difficulty.
//! Level files are stored as `<levels dir>/<pack name>/<puzzle number>`.

use std::path::{Path, PathBuf};

pub const PACK_NAMES: [&str; 12] = [
    "Practice",
    "Beginner",
    "Amateur",
    "Average",
    "Experienced",
    "Skilled",
    "Professional",
    "Expert",
    "Genius",
    "Extreme",
    "Ultimate",
    "Impossible",
];

/// Accepts either a 1-based pack number or a name (case insensitive).
pub fn pack_name(pack: &str) -> Option<&'static str> {
    if let Ok(number) = pack.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|i| PACK_NAMES.get(i))
            .cloned();
    }
    PACK_NAMES
        .iter()
        .find(|name| name.eq_ignore_ascii_case(pack))
        .cloned()
}

pub fn puzzle_path<P: AsRef<Path>>(levels_dir: P, pack_name: &str, puzzle: u32) -> PathBuf {
    levels_dir
        .as_ref()
        .join(pack_name)
        .join(puzzle.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_up_packs() {
        assert_eq!(pack_name("1"), Some("Practice"));
        assert_eq!(pack_name("12"), Some("Impossible"));
        assert_eq!(pack_name("0"), None);
        assert_eq!(pack_name("13"), None);
        assert_eq!(pack_name("genius"), Some("Genius"));
        assert_eq!(pack_name("EXPERT"), Some("Expert"));
        assert_eq!(pack_name("nope"), None);
    }

    #[test]
    fn paths() {
        assert_eq!(
            puzzle_path("levels", "Skilled", 7),
            Path::new("levels").join("Skilled").join("7")
        );
    }
}
