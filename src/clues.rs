//! Clue list parsing.
//!
//! A clue file is plain text: bare `across` / `down` lines switch the active
//! list, every other non-blank line is one clue.

use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueList {
    pub across: Vec<String>,
    pub down: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Across,
    Down,
}

impl Section {
    fn from_marker(line: &str) -> Option<Section> {
        if line.eq_ignore_ascii_case("across") {
            Some(Section::Across)
        } else if line.eq_ignore_ascii_case("down") {
            Some(Section::Down)
        } else {
            None
        }
    }
}

impl ClueList {
    /// Lines seen before the first section marker are dropped.
    pub fn parse(text: &str) -> ClueList {
        let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

        let (_, clues) = lines.fold(
            (Section::None, ClueList::default()),
            |(section, mut clues), line| {
                if let Some(next) = Section::from_marker(line) {
                    return (next, clues);
                }
                match section {
                    Section::Across => clues.across.push(line.to_string()),
                    Section::Down => clues.down.push(line.to_string()),
                    Section::None => debug!("dropping clue line before any section: {line:?}"),
                }
                (section, clues)
            },
        );

        debug!(
            "parsed {} across and {} down clues",
            clues.across.len(),
            clues.down.len()
        );
        clues
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_into_across_and_down() {
        let clues = ClueList::parse("across\n1. Cat\n2. Dog\ndown\n1. Bird\n");
        assert_eq!(clues.across, vec!["1. Cat", "2. Dog"]);
        assert_eq!(clues.down, vec!["1. Bird"]);
    }

    #[test]
    fn no_markers_means_no_clues() {
        let clues = ClueList::parse("1. Cat\n2. Dog\n");
        assert!(clues.is_empty());
    }

    #[test]
    fn markers_are_case_insensitive_and_trimmed() {
        let clues = ClueList::parse("  ACROSS \n1 Cat\nDown\n1 Ape");
        assert_eq!(clues.across, vec!["1 Cat"]);
        assert_eq!(clues.down, vec!["1 Ape"]);
    }

    #[test]
    fn blank_lines_and_preamble_are_ignored() {
        let clues = ClueList::parse("Puzzle 12\n\n\nacross\n\n1 Cat\r\n\n");
        assert_eq!(clues.across, vec!["1 Cat"]);
        assert!(clues.down.is_empty());
    }

    #[test]
    fn sections_can_repeat() {
        let clues = ClueList::parse("down\n1 Ape\nacross\n2 Bee\ndown\n3 Cow");
        assert_eq!(clues.across, vec!["2 Bee"]);
        assert_eq!(clues.down, vec!["1 Ape", "3 Cow"]);
    }

    #[test]
    fn marker_must_be_the_whole_line() {
        let clues = ClueList::parse("across\n5 Go across the river\ndownhill");
        assert_eq!(clues.across, vec!["5 Go across the river", "downhill"]);
    }
}
