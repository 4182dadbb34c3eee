//! Synchronous UCI engine loop.
//!
//! Each `go` runs to its deadline on the calling thread before the next
//! line is read, so `stop` has nothing to interrupt.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Move, divide, generate_moves};
use gambit_engine::{
    IterationReport, SearchConfig, SearchControl, Searcher, allot_budget,
};

use crate::command::{Command, GoParams, UciOption, parse_command};
use crate::error::UciError;
use crate::position::Position;

/// The UCI engine, holding the current position and search settings.
pub struct UciEngine {
    position: Position,
    searcher: Searcher,
}

impl UciEngine {
    /// Create a new engine with the starting position and default settings.
    pub fn new() -> Self {
        Self {
            position: Position::startpos(),
            searcher: Searcher::new(SearchConfig::default()),
        }
    }

    /// Current search settings.
    pub fn config(&self) -> &SearchConfig {
        self.searcher.config()
    }

    /// Run the UCI loop on stdin/stdout until `quit` or input closes.
    pub fn run(self) -> Result<(), UciError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_io(stdin.lock(), stdout.lock())
    }

    /// Run the UCI loop over arbitrary input and output.
    pub fn run_io<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), UciError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received UCI command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd, &mut out)?,
                Err(e) => warn!(error = %e, "UCI parse error"),
            }
            out.flush()?;
        }

        info!("gambit shutting down");
        Ok(())
    }

    fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), UciError> {
        match cmd {
            Command::Uci => self.handle_uci(out)?,
            Command::IsReady => writeln!(out, "readyok")?,
            Command::UciNewGame => self.position = Position::startpos(),
            Command::Position(position) => self.position = position,
            Command::Go(params) => self.handle_go(&params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Perft(depth) => self.handle_perft(depth, out)?,
            Command::Display => self.handle_display(out)?,
            Command::Stop | Command::Quit => {}
            Command::Unknown(cmd) => debug!(%cmd, "ignoring unknown command"),
        }
        Ok(())
    }

    fn handle_uci<W: Write>(&self, out: &mut W) -> Result<(), UciError> {
        let defaults = SearchConfig::default();
        let (max_lo, max_hi) = UciOption::MAX_DEPTH_RANGE;
        let (q_lo, q_hi) = UciOption::QUIESCENCE_DEPTH_RANGE;

        writeln!(out, "id name gambit")?;
        writeln!(out, "id author gambit developers")?;
        writeln!(out, "option name UseTT type check default {}", defaults.use_tt)?;
        writeln!(
            out,
            "option name UseMoveOrdering type check default {}",
            defaults.use_move_ordering
        )?;
        writeln!(
            out,
            "option name UseKillerMoves type check default {}",
            defaults.use_killers
        )?;
        writeln!(
            out,
            "option name UseQuiescence type check default {}",
            defaults.use_quiescence
        )?;
        writeln!(
            out,
            "option name DebugStats type check default {}",
            defaults.collect_stats
        )?;
        writeln!(
            out,
            "option name MaxDepth type spin default {} min {max_lo} max {max_hi}",
            defaults.max_depth
        )?;
        writeln!(
            out,
            "option name QuiescenceDepth type spin default {} min {q_lo} max {q_hi}",
            defaults.quiescence_depth
        )?;
        writeln!(out, "uciok")?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: UciOption) {
        let config = self.searcher.config_mut();
        match option {
            UciOption::UseTt(on) => config.use_tt = on,
            UciOption::UseMoveOrdering(on) => config.use_move_ordering = on,
            UciOption::UseKillerMoves(on) => config.use_killers = on,
            UciOption::UseQuiescence(on) => config.use_quiescence = on,
            UciOption::DebugStats(on) => config.collect_stats = on,
            UciOption::MaxDepth(depth) => config.max_depth = depth,
            UciOption::QuiescenceDepth(depth) => config.quiescence_depth = depth,
        }
        debug!(?option, "option set");
    }

    fn handle_go<W: Write>(&mut self, params: &GoParams, out: &mut W) -> Result<(), UciError> {
        let side = self.position.side_to_move();
        let budget = allot_budget(&params.clock(side));
        let control = SearchControl::new_timed(budget);
        let board = self.position.to_engine_board();

        let config = match params.depth {
            Some(depth) => self.searcher.config().with_depth_limit(depth),
            None => *self.searcher.config(),
        };
        let searcher = Searcher::new(config);
        debug!(%side, budget_ms = budget.as_millis() as u64, max_depth = config.max_depth, "starting search");

        let position = self.position;
        let mut write_error: Option<io::Error> = None;
        let result = searcher.search(&board, side, &control, |report: &IterationReport| {
            if write_error.is_some() {
                return;
            }
            let written = writeln!(
                out,
                "info depth {} score cp {} nodes {} nps {} hashfull {} time {} pv {}",
                report.depth,
                report.score,
                report.stats.nodes,
                report.stats.nps(),
                report.stats.hashfull,
                report.stats.elapsed.as_millis(),
                position.move_to_uci(report.best_move),
            )
            .and_then(|()| out.flush());
            if let Err(e) = written {
                write_error = Some(e);
            }
        });
        if let Some(e) = write_error {
            return Err(e.into());
        }

        let best = if result.best_move.is_null() {
            generate_moves(&board, side, side).first().copied()
        } else {
            Some(result.best_move)
        };
        match best {
            Some(mv) if mv != result.best_move => {
                warn!(fallback = %mv, "search returned no move, playing first generated move");
                self.write_bestmove(mv, out)
            }
            Some(mv) => self.write_bestmove(mv, out),
            None => {
                warn!("no moves available");
                writeln!(out, "bestmove 0000")?;
                Ok(())
            }
        }
    }

    fn handle_perft<W: Write>(&self, depth: usize, out: &mut W) -> Result<(), UciError> {
        let side = self.position.side_to_move();
        let board = self.position.to_engine_board();
        let mut total = 0;
        for (mv, count) in divide(&board, side, side, depth) {
            writeln!(out, "{}: {count}", self.position.move_to_uci(mv))?;
            total += count;
        }
        writeln!(out)?;
        writeln!(out, "Nodes searched: {total}")?;
        Ok(())
    }

    fn handle_display<W: Write>(&self, out: &mut W) -> Result<(), UciError> {
        let board = self.position.to_engine_board();
        writeln!(out, "{}", board.pretty())?;
        writeln!(out, "side to move: {}", self.position.side_to_move())?;
        writeln!(out, "key: {:016x}", board.key(self.position.side_to_move()))?;
        Ok(())
    }

    fn write_bestmove<W: Write>(&self, mv: Move, out: &mut W) -> Result<(), UciError> {
        writeln!(out, "bestmove {}", self.position.move_to_uci(mv))?;
        Ok(())
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::UciEngine;

    fn run_script(script: &str) -> String {
        let mut out = Vec::new();
        UciEngine::new().run_io(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn bestmove(output: &str) -> &str {
        output
            .lines()
            .find_map(|line| line.strip_prefix("bestmove "))
            .expect("no bestmove line")
    }

    #[test]
    fn uci_handshake_lists_options() {
        let output = run_script("uci\nisready\nquit\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.first(), Some(&"id name gambit"));
        assert!(lines.contains(&"option name UseTT type check default true"));
        assert!(lines.contains(&"option name MaxDepth type spin default 20 min 1 max 64"));
        assert!(lines.contains(&"option name QuiescenceDepth type spin default 16 min 0 max 64"));
        let uciok = lines.iter().position(|l| *l == "uciok").unwrap();
        assert_eq!(lines[uciok + 1], "readyok");
    }

    #[test]
    fn go_from_startpos_plays_a_white_move() {
        let output = run_script("position startpos\ngo depth 2\n");
        let mv = bestmove(&output);
        assert_eq!(mv.len(), 4);
        let from_rank = mv.as_bytes()[1];
        assert!(from_rank == b'1' || from_rank == b'2', "unexpected move {mv}");
    }

    #[test]
    fn go_as_black_plays_a_black_move() {
        let output = run_script("position startpos moves e2e4\ngo depth 2\n");
        let mv = bestmove(&output);
        let from_rank = mv.as_bytes()[1];
        assert!(from_rank == b'7' || from_rank == b'8', "unexpected move {mv}");
    }

    #[test]
    fn info_lines_precede_bestmove() {
        let output = run_script("position startpos\ngo depth 2\n");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("info depth 1 score cp "));
        assert!(lines[1].starts_with("info depth 2 score cp "));
        assert!(lines[1].contains(" pv "));
        assert!(lines[2].starts_with("bestmove "));
    }

    #[test]
    fn debug_stats_off_suppresses_info() {
        let output = run_script(
            "setoption name DebugStats value false\nposition startpos\ngo depth 1\n",
        );
        assert!(!output.contains("info depth"));
        assert!(output.contains("bestmove "));
    }

    #[test]
    fn captures_hanging_queen() {
        let output = run_script("position fen 4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1\ngo depth 2\n");
        assert_eq!(bestmove(&output), "e4d5");
    }

    #[test]
    fn promotes_with_queen_suffix() {
        let output = run_script("position fen 7k/4P3/8/8/8/8/8/K7 w - - 0 1\ngo depth 2\n");
        assert_eq!(bestmove(&output), "e7e8q");
    }

    #[test]
    fn no_pieces_gives_null_move() {
        let output = run_script("position fen 8/8/8/8/8/8/8/4k3 w - - 0 1\ngo movetime 50\n");
        assert_eq!(bestmove(&output), "0000");
    }

    #[test]
    fn bad_commands_are_skipped() {
        let output = run_script("position fen nonsense\nsetoption name Hash value 1\nfoo\nisready\n");
        assert_eq!(output, "readyok\n");
    }

    #[test]
    fn info_lines_stream_as_iterations_finish() {
        struct FailAfter {
            lines_left: usize,
            written: Vec<u8>,
        }
        impl std::io::Write for FailAfter {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if self.lines_left == 0 {
                    return Err(std::io::Error::other("closed"));
                }
                self.lines_left -= buf.iter().filter(|&&b| b == b'\n').count().min(self.lines_left);
                self.written.extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = FailAfter {
            lines_left: 1,
            written: Vec::new(),
        };
        let mut engine = UciEngine::new();
        let cmd = crate::command::parse_command("go depth 3").unwrap();
        let err = engine.handle(cmd, &mut sink).unwrap_err();
        assert!(matches!(err, crate::error::UciError::Io { .. }));
        let written = String::from_utf8(sink.written).unwrap();
        assert!(written.starts_with("info depth 1 "));
        assert!(!written.contains("bestmove"));
    }

    #[test]
    fn perft_counts_from_side_to_move() {
        let output = run_script("position startpos moves e2e4\ngo perft 2\n");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 12 + 2);
        assert!(lines.iter().any(|l| l.starts_with("g8f6: ")));
        let total: u64 = lines[..12]
            .iter()
            .map(|l| l.rsplit(' ').next().unwrap().parse::<u64>().unwrap())
            .sum();
        assert_eq!(lines[13], format!("Nodes searched: {total}"));
    }

    #[test]
    fn display_shows_rotated_board() {
        let output = run_script("position startpos moves e2e4\nd\n");
        assert!(output.contains("side to move: "));
        assert!(output.contains("key: "));
        assert!(output.lines().count() >= 10);
    }

    #[test]
    fn quit_stops_reading() {
        let output = run_script("quit\nisready\n");
        assert!(output.is_empty());
    }

    #[test]
    fn setoption_updates_config() {
        let mut out = Vec::new();
        let mut engine = UciEngine::new();
        let script = "setoption name UseTT value false\nsetoption name MaxDepth value 3\n";
        for line in script.lines() {
            let cmd = crate::command::parse_command(line).unwrap();
            engine.handle(cmd, &mut out).unwrap();
        }
        assert!(!engine.config().use_tt);
        assert_eq!(engine.config().max_depth, 3);
    }
}
