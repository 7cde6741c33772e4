//! Console rendering for the small fixed-size display.
//!
//! ```text
//!  _______________
//! /               \
//! | 09:37 - 10:05 |
//! | 10:07 - 10:35 |
//! \_______________/
//! ```

use crate::domain::Route;

/// Routes that fit on the six-line display.
pub const DEFAULT_ROWS: usize = 3;

const TOP: [&str; 2] = [" _______________", "/               \\"];
const BOTTOM: &str = "\\_______________/";
const NO_TRANSIT: [&str; 3] = [
    "|               |",
    "|  No transit!  |",
    "|               |",
];

/// Render up to `rows` options inside the frame, one line each.
///
/// An empty option set renders the "No transit!" placeholder.
pub fn render_options(routes: &[Route], rows: usize) -> String {
    let mut lines: Vec<String> = TOP.iter().map(|s| s.to_string()).collect();

    if routes.is_empty() {
        lines.extend(NO_TRANSIT.iter().map(|s| s.to_string()));
    } else {
        lines.extend(routes.iter().take(rows).map(|route| format!("| {route} |")));
    }

    lines.push(BOTTOM.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
