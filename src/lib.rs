//! Converts a crossword grid exported as absolutely positioned HTML, plus a
//! plain-text clue list, into a single interactive page.

pub mod classify;
pub mod clues;
pub mod document;
pub mod emit;
pub mod error;
pub mod grid;

pub use classify::{ClassifiedCell, Classifier, Position, SquareHeuristic, WhiteBorder};
pub use clues::ClueList;
pub use error::{Error, Result};
pub use grid::{PositionedElement, Role};

use log::debug;

/// Runs the whole pipeline over already-loaded inputs and returns the page.
pub fn convert(grid_markup: &str, clue_text: &str) -> Result<String> {
    let clues = ClueList::parse(clue_text);
    let elements = grid::parse_grid(grid_markup)?;
    let cells = Classifier::new().classify_all(&elements);
    debug!(
        "kept {} of {} grid elements",
        cells.len(),
        elements.len()
    );
    let fragments = emit::emit_cells(&cells);
    Ok(document::assemble(&clues, &fragments))
}
