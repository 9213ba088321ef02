//! Page assembly: clue columns on either side of the positioned grid.

use crate::clues::ClueList;

const PREAMBLE: &str = include_str!("assets/preamble.html");
const NAVIGATION_SCRIPT: &str = include_str!("assets/navigation.js");

const GRID_OPEN: &str = r#"<div class="crossword-grid">
<div style="border-width:0px;width:541px;height:541px;position:relative;">
<div style="border-width:0px;top:0px;left:0px;width:541px;height:541px;position:absolute;">"#;
const GRID_CLOSE: &str = "</div></div></div>";

/// Clue lines go into the page as written, so inline markup such as
/// `<i>Hamlet</i>` renders.
fn clue_column(out: &mut Vec<String>, opening: &str, heading: &str, clues: &[String]) {
    out.push(opening.to_string());
    out.push(format!("<h3>{heading}</h3>"));
    out.extend(clues.iter().map(|clue| format!("<div>{clue}</div>")));
    out.push("</div>".to_string());
}

/// Joins the page pieces in their fixed order. `fragments` are emitted grid
/// cells, kept in the order given.
pub fn assemble(clues: &ClueList, fragments: &[String]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(fragments.len() + clues.across.len() + clues.down.len() + 16);

    out.push(PREAMBLE.to_string());

    clue_column(
        &mut out,
        r#"<div class="clues-column" style="padding-left: 3%">"#,
        "Across",
        &clues.across,
    );

    out.push(GRID_OPEN.to_string());
    out.extend(fragments.iter().cloned());
    out.push(GRID_CLOSE.to_string());

    clue_column(&mut out, r#"<div class="clues-column">"#, "Down", &clues.down);

    out.push("</div>".to_string());
    out.push("</center>".to_string());
    out.push(NAVIGATION_SCRIPT.to_string());
    out.push("</body>\n</html>\n".to_string());

    out.join("\n")
}
