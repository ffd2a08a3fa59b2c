//! Replays a fixed list of coordinates and prints the result.

use crate::console::parse_coordinate;
use anyhow::{Context, Result};
use noughts_core::{
    Coordinate, MatchController, MatchStatus, Placement, ScriptedAdapter, play_match,
};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// Moves played when none are given: X takes the top row on its third turn.
pub const DEMO_MOVES: &str = "0,0 0,1 1,0 1,1 2,0";

/// Parses a space-separated list of `column,row` pairs, e.g. `"0,0 1,0 2,2"`.
pub fn parse_moves(moves: &str) -> Result<Vec<Coordinate>> {
    moves
        .split_whitespace()
        .map(|pair| {
            parse_coordinate(pair)
                .with_context(|| format!("Invalid move {:?}, expected column,row", pair))
        })
        .collect()
}

#[derive(Serialize)]
struct Report<'a> {
    view: noughts_core::MatchView,
    history: &'a [Placement],
}

/// Plays `moves` against `controller`, writing each outcome and the final board.
///
/// With `json` set, the final view and history are written as JSON instead.
#[instrument(skip(controller, moves, out), fields(move_count = moves.len()))]
pub fn run_replay(
    controller: &mut MatchController,
    moves: Vec<Coordinate>,
    out: &mut impl Write,
    json: bool,
) -> Result<MatchStatus> {
    let mut adapter = ScriptedAdapter::new(moves);
    let status = match play_match(controller, &mut adapter) {
        Ok(status) => status,
        Err(never) => match never {},
    };
    info!(?status, unplayed = adapter.remaining(), "Replay finished");

    if json {
        let report = Report {
            view: controller.view(),
            history: controller.history(),
        };
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON report")?;
        writeln!(out)?;
        return Ok(status);
    }

    for outcome in adapter.outcomes() {
        writeln!(out, "{}", outcome)?;
    }
    writeln!(out, "{}", controller.board_snapshot().display())?;
    writeln!(out, "{}", controller.view().headline())?;
    if adapter.remaining() > 0 {
        writeln!(out, "({} moves left unplayed)", adapter.remaining())?;
    }
    Ok(status)
}
