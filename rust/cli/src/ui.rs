//! Terminal output shared by the commands.

use std::io::Write;

use holdem_engine::snapshot::{SeatSnapshot, TableSnapshot};

use crate::formatters::{format_board, format_hole};

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

fn seat_line(seat: &SeatSnapshot, button: usize) -> String {
    let mut line = format!(
        "  {}{}: {} stack {}",
        seat.name,
        if seat.seat == button { " (button)" } else { "" },
        format_hole(&seat.hole_cards),
        seat.stack
    );
    if seat.bet > 0 {
        line.push_str(&format!(", bet {}", seat.bet));
    }
    if seat.folded {
        line.push_str(", folded");
    } else if seat.all_in {
        line.push_str(", all-in");
    }
    if let Some(hand) = &seat.hand {
        line.push_str(&format!(" ({})", hand));
    }
    line
}

/// Board, pot and both seats, as seen by whoever the snapshot was taken for.
pub fn render_table(out: &mut dyn Write, table: &TableSnapshot) -> std::io::Result<()> {
    writeln!(
        out,
        "Board: {}  Pot: {}  Stage: {}",
        format_board(&table.board),
        table.pot,
        table.stage.name()
    )?;
    for seat in &table.seats {
        writeln!(out, "{}", seat_line(seat, table.button))?;
    }
    Ok(())
}

/// Winner lines for a finished hand.
pub fn render_result(out: &mut dyn Write, table: &TableSnapshot) -> std::io::Result<()> {
    for w in &table.winners {
        let name = table
            .seats
            .get(w.seat)
            .map_or("?", |s| s.name.as_str());
        writeln!(out, "{} wins {} ({})", name, w.amount, w.description)?;
    }
    Ok(())
}
