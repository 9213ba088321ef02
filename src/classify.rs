//! Decides what each grid element becomes in the interactive page.

use crate::grid::{PositionedElement, Role};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LEFT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|[;\s])left:(\d+)px").unwrap());
static TOP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|[;\s])top:(\d+)px").unwrap());

/// Pixel offsets exactly as written in the source style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position<'a> {
    pub left: &'a str,
    pub top: &'a str,
}

impl<'a> Position<'a> {
    pub fn from_style(style: &'a str) -> Option<Position<'a>> {
        let left = LEFT_RE.captures(style)?.get(1)?.as_str();
        let top = TOP_RE.captures(style)?.get(1)?.as_str();
        Some(Position { left, top })
    }
}

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left:{}px;top:{}px;", self.left, self.top)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedCell<'a> {
    TrueBlack(Position<'a>),
    /// A playable square the grid tool tagged like a black one.
    DisguisedWhite(Position<'a>),
    NumberLabel { position: Position<'a>, text: &'a str },
    Passthrough(&'a str),
}

/// Tells a white square apart from a black one when both carry the
/// black-square class.
pub trait SquareHeuristic {
    fn is_disguised_white(&self, style: &str) -> bool;
}

/// The grid tool gives white squares a `#FFFFFF` border on at least one side.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteBorder;

const WHITE_BORDERS: [&str; 4] = [
    "border-top:#FFFFFF",
    "border-left:#FFFFFF",
    "border-right:#FFFFFF",
    "border-bottom:#FFFFFF",
];

impl SquareHeuristic for WhiteBorder {
    fn is_disguised_white(&self, style: &str) -> bool {
        WHITE_BORDERS.iter().any(|token| style.contains(token))
    }
}

pub struct Classifier<H = WhiteBorder> {
    heuristic: H,
}

impl Classifier {
    pub fn new() -> Self {
        Classifier::with_heuristic(WhiteBorder)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: SquareHeuristic> Classifier<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Classifier { heuristic }
    }

    /// `None` when the element has no usable `left`/`top`; such elements are
    /// left out of the page.
    pub fn classify<'a>(&self, el: &'a PositionedElement) -> Option<ClassifiedCell<'a>> {
        let Some(position) = Position::from_style(&el.style) else {
            trace!("skipping element without position: {:?}", el.style);
            return None;
        };

        let cell = if el.has_role(Role::BlackSquare) {
            if self.heuristic.is_disguised_white(&el.style) {
                ClassifiedCell::DisguisedWhite(position)
            } else {
                ClassifiedCell::TrueBlack(position)
            }
        } else if el.has_role(Role::NumberLabel) {
            ClassifiedCell::NumberLabel {
                position,
                text: el.inner_text.trim(),
            }
        } else {
            ClassifiedCell::Passthrough(&el.raw_markup)
        };

        trace!("classified {} as {:?}", position, cell);
        Some(cell)
    }

    pub fn classify_all<'a>(&self, elements: &'a [PositionedElement]) -> Vec<ClassifiedCell<'a>> {
        elements.iter().filter_map(|el| self.classify(el)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn element(roles: &[Role], style: &str, text: &str) -> PositionedElement {
        PositionedElement {
            roles: roles.to_vec(),
            style: style.to_string(),
            inner_text: text.to_string(),
            raw_markup: format!(r#"<div style="{style}">{text}</div>"#),
        }
    }

    #[test]
    fn reads_position_digits_verbatim() {
        let pos = Position::from_style("left:036px;top:72px;").unwrap();
        assert_eq!(pos.left, "036");
        assert_eq!(pos.top, "72");
        assert_eq!(pos.to_string(), "left:036px;top:72px;");
    }

    #[test]
    fn border_offsets_are_not_coordinates() {
        assert_eq!(Position::from_style("border-left:2px solid;top:0px;"), None);
        let pos = Position::from_style("border-left:2px solid; left:5px;top:9px").unwrap();
        assert_eq!(pos.left, "5");
    }

    #[test]
    fn black_square_without_white_border_is_black() {
        let el = element(&[Role::BlackSquare], "left:0px;top:0px;border-top:#000000 36px solid;", "");
        assert_eq!(
            Classifier::new().classify(&el),
            Some(ClassifiedCell::TrueBlack(Position { left: "0", top: "0" }))
        );
    }

    #[test]
    fn any_white_border_makes_a_white_square() {
        for side in ["top", "left", "right", "bottom"] {
            let style = format!("left:36px;top:0px;border-{side}:#FFFFFF 1px solid;");
            let el = element(&[Role::BlackSquare], &style, "");
            assert_eq!(
                Classifier::new().classify(&el),
                Some(ClassifiedCell::DisguisedWhite(Position { left: "36", top: "0" })),
                "border-{side}"
            );
        }
    }

    #[test]
    fn white_border_match_is_case_sensitive() {
        let el = element(&[Role::BlackSquare], "left:0px;top:0px;border-top:#ffffff 1px solid;", "");
        assert!(matches!(
            Classifier::new().classify(&el),
            Some(ClassifiedCell::TrueBlack(_))
        ));
    }

    #[test]
    fn number_label_text_is_trimmed() {
        let el = element(&[Role::NumberLabel], "left:2px;top:1px;", "\n 12 ");
        assert_eq!(
            Classifier::new().classify(&el),
            Some(ClassifiedCell::NumberLabel {
                position: Position { left: "2", top: "1" },
                text: "12",
            })
        );
    }

    #[test]
    fn rules_pass_through() {
        for role in [Role::HorizontalRule, Role::VerticalRule] {
            let el = element(&[role], "left:0px;top:36px;width:541px;", "");
            assert_eq!(
                Classifier::new().classify(&el),
                Some(ClassifiedCell::Passthrough(el.raw_markup.as_str()))
            );
        }
    }

    #[test]
    fn black_square_role_wins_over_number_label() {
        let el = element(&[Role::NumberLabel, Role::BlackSquare], "left:0px;top:0px;", "3");
        assert!(matches!(
            Classifier::new().classify(&el),
            Some(ClassifiedCell::TrueBlack(_))
        ));
    }

    #[test]
    fn missing_coordinates_are_skipped() {
        let els = vec![
            element(&[Role::BlackSquare], "left:0px;", ""),
            element(&[Role::NumberLabel], "top:0px;", "1"),
            element(&[Role::HorizontalRule], "width:10px;", ""),
            element(&[Role::VerticalRule], "left:0px;top:0px;", ""),
        ];
        let cells = Classifier::new().classify_all(&els);
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn heuristic_can_be_replaced() {
        struct EverythingWhite;
        impl SquareHeuristic for EverythingWhite {
            fn is_disguised_white(&self, _style: &str) -> bool {
                true
            }
        }
        let el = element(&[Role::BlackSquare], "left:0px;top:0px;", "");
        assert!(matches!(
            Classifier::with_heuristic(EverythingWhite).classify(&el),
            Some(ClassifiedCell::DisguisedWhite(_))
        ));
    }
}
