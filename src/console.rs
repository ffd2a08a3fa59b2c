//! Line-based console front-end.

use noughts_core::{Coordinate, MatchView, PresentationAdapter, TurnOutcome};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// Reads `column row` pairs from a reader and prints the board to a writer.
pub struct ConsoleAdapter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleAdapter<R, W> {
    /// Creates an adapter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the adapter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl ConsoleAdapter<io::StdinLock<'static>, io::Stdout> {
    /// Adapter bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

/// Parses "column row", "column,row" or "column, row".
///
/// Returns `None` for anything else.
pub fn parse_coordinate(line: &str) -> Option<Coordinate> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let column = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some(Coordinate::new(column, row)),
    }
}

impl<R: BufRead, W: Write> PresentationAdapter for ConsoleAdapter<R, W> {
    type Error = io::Error;

    fn render(&mut self, view: &MatchView) -> Result<(), Self::Error> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", view.snapshot().display())?;
        writeln!(self.output, "{}", view.headline())
    }

    #[instrument(skip_all, fields(player = %view.active_player().name()))]
    fn next_move(&mut self, view: &MatchView) -> Result<Option<Coordinate>, Self::Error> {
        let player = view.active_player();
        loop {
            write!(
                self.output,
                "{} ({}), enter column and row (or q to quit): ",
                player.name(),
                player.mark()
            )?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("Input closed");
                return Ok(None);
            }

            // Undecodable bytes become U+FFFD and fail to parse below.
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            match parse_coordinate(line) {
                Some(coord) => return Ok(Some(coord)),
                None => {
                    debug!(line, "Unparseable input");
                    writeln!(self.output, "Please enter a column and a row, e.g. `1 2`.")?;
                }
            }
        }
    }

    fn announce(&mut self, outcome: &TurnOutcome) -> Result<(), Self::Error> {
        match outcome {
            TurnOutcome::NoOp(_) | TurnOutcome::InvalidCoordinate { .. } => {
                writeln!(self.output, "{}", outcome)
            }
            TurnOutcome::Continue(_) | TurnOutcome::Win(_) | TurnOutcome::Draw => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("1 2"), Some(Coordinate::new(1, 2)));
        assert_eq!(parse_coordinate("0,2"), Some(Coordinate::new(0, 2)));
        assert_eq!(parse_coordinate(" 2 ,  1 "), Some(Coordinate::new(2, 1)));
        assert_eq!(parse_coordinate("1"), None);
        assert_eq!(parse_coordinate("1 2 3"), None);
        assert_eq!(parse_coordinate("a b"), None);
        assert_eq!(parse_coordinate("-1 0"), None);
    }
}
