use std::io::{self, Write};

use fibtile_core::palette::color_for;
use fibtile_core::*;
use serde::Serialize;

#[derive(Serialize)]
struct CellView {
    value: TileValue,
    state: CellState,
    color: &'static str,
}

/// JSON shape of a snapshot, cells carry their palette color so a UI needs no lookup table.
#[derive(Serialize)]
struct SnapshotView {
    score: Score,
    phase: Phase,
    overlay: bool,
    last_direction: Option<Direction>,
    winning_value: TileValue,
    rows: Vec<Vec<CellView>>,
}

impl SnapshotView {
    fn new(snapshot: &GameSnapshot, config: &GameConfig) -> Self {
        let rows = snapshot
            .grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| CellView {
                        value: cell.value(),
                        state: cell.state(),
                        color: color_for(cell.value()),
                    })
                    .collect()
            })
            .collect();
        Self {
            score: snapshot.score,
            phase: snapshot.phase,
            overlay: snapshot.phase.shows_overlay(),
            last_direction: snapshot.last_direction,
            winning_value: config.winning_value,
            rows,
        }
    }
}

pub(crate) fn write_json<W: Write>(
    out: &mut W,
    snapshot: &GameSnapshot,
    config: &GameConfig,
) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, &SnapshotView::new(snapshot, config))?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_text<W: Write>(
    out: &mut W,
    snapshot: &GameSnapshot,
    config: &GameConfig,
) -> io::Result<()> {
    let width = snapshot.grid.max_value().max(1).to_string().len().max(3);

    writeln!(out)?;
    for row in snapshot.grid.rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let text = if cell.is_empty() {
                    ".".to_string()
                } else {
                    cell.value().to_string()
                };
                let marker = match cell.state() {
                    CellState::New => '+',
                    CellState::Merged => '*',
                    CellState::Static | CellState::Empty => ' ',
                };
                format!("{text:>width$}{marker}")
            })
            .collect();
        writeln!(out, "  {}", line.join(" "))?;
    }

    let last = snapshot
        .last_direction
        .map_or("-", |direction| direction.name());
    writeln!(out, "  score: {}  last: {}", snapshot.score, last)?;

    match snapshot.phase {
        Phase::Playing => {}
        Phase::Won => writeln!(
            out,
            "  You reached {}! Type `continue` to keep going or `new` for a new game.",
            config.winning_value
        )?,
        Phase::WonContinuing => writeln!(out, "  Playing past the win.")?,
        Phase::Lost => writeln!(out, "  Game over. Type `new` for a new game.")?,
    }
    out.flush()
}
