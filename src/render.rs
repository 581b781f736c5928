//! Coloured terminal output of a board

use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::Write;

use crate::board::{Board, Checker};

/// Draws `board` with the same layout as its `Display` output, colouring each checker
pub fn draw<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    for row in 0..board.num_rows() {
        out.queue(PrintStyledContent(style("|").with(Color::DarkBlue)))?;
        for cell in board.row(row)? {
            let checker = match cell {
                Checker::X => style(cell.symbol()).attribute(Attribute::Bold).with(Color::Red),
                Checker::O => style(cell.symbol()).attribute(Attribute::Bold).with(Color::Yellow),
                Checker::Empty => style(cell.symbol()).attribute(Attribute::Dim),
            };
            out.queue(PrintStyledContent(checker))?
                .queue(PrintStyledContent(style("|").with(Color::DarkBlue)))?;
        }
        out.queue(PrintStyledContent(style("\n")))?;
    }

    let separator = "-".repeat(board.num_columns() * 2 + 1);
    let footer: String = (0..board.num_columns()).map(|col| format!("{} ", col)).collect();
    out.queue(PrintStyledContent(style(format!("{}\n {}\n", separator, footer))))?;
    out.flush()?;
    Ok(())
}
