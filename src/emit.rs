use crate::classify::ClassifiedCell;

/// Renders one classified element. Coordinates are copied, never recomputed.
pub fn emit_cell(cell: &ClassifiedCell<'_>) -> String {
    match cell {
        ClassifiedCell::TrueBlack(pos) => format!(r#"<div class="bk" style="{pos}"></div>"#),
        ClassifiedCell::DisguisedWhite(pos) => {
            format!(r#"<input class="cell" style="{pos}" maxlength="1">"#)
        }
        ClassifiedCell::NumberLabel { position, text } => format!(
            r#"<div class="nu" style="{position}color:#000000;text-align:left">{text}</div>"#
        ),
        ClassifiedCell::Passthrough(raw) => raw.to_string(),
    }
}

pub fn emit_cells(cells: &[ClassifiedCell<'_>]) -> Vec<String> {
    cells.iter().map(emit_cell).collect()
}
