use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use nanoplay_core::WindowEntry;

use super::Context;

pub fn execute(ctx: &Context) {
    let session = ctx.open_session();

    println!("{}", table(session.windows(), None));
    println!("\n{} windows found", session.windows().len());
}

/// Renders the window list. Row numbers start at 1; the selected row
/// is marked with `*`.
pub fn table(windows: &[WindowEntry], selected: Option<usize>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new("HWND"),
            Cell::new("Title"),
        ]);

    for (i, window) in windows.iter().enumerate() {
        let marker = if selected == Some(i) { "*" } else { "" };
        table.add_row(vec![
            Cell::new(format!("{marker}{}", i + 1)).set_alignment(CellAlignment::Right),
            Cell::new(window.handle),
            Cell::new(&window.title),
        ]);
    }
    table
}
