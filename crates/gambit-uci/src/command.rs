//! UCI command parsing.

use std::time::Duration;

use gambit_core::Color;
use gambit_engine::Clock;

use crate::error::UciError;
use crate::position::Position;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses the default budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// White's increment per move.
    pub winc: Option<Duration>,
    /// Black's increment per move.
    pub binc: Option<Duration>,
    /// Search for exactly this duration.
    pub movetime: Option<Duration>,
    /// Search to this depth only.
    pub depth: Option<u8>,
}

impl GoParams {
    /// Clock information for `side` (white is [`Color::First`]).
    pub fn clock(&self, side: Color) -> Clock {
        let (remaining, increment) = match side {
            Color::First => (self.wtime, self.winc),
            Color::Second => (self.btime, self.binc),
        };
        Clock {
            movetime: self.movetime,
            remaining,
            increment,
        }
    }
}

/// An engine option settable with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    UseTt(bool),
    UseMoveOrdering(bool),
    UseKillerMoves(bool),
    UseQuiescence(bool),
    DebugStats(bool),
    MaxDepth(u8),
    QuiescenceDepth(u8),
}

impl UciOption {
    /// Range accepted for `MaxDepth`.
    pub const MAX_DEPTH_RANGE: (u8, u8) = (1, 64);
    /// Range accepted for `QuiescenceDepth`.
    pub const QUIESCENCE_DEPTH_RANGE: (u8, u8) = (0, 64);

    fn parse(name: &str, value: Option<&str>) -> Result<UciOption, UciError> {
        let invalid = || UciError::InvalidOptionValue {
            name: name.to_string(),
            value: value.unwrap_or_default().to_string(),
        };
        let check = |value: Option<&str>| -> Result<bool, UciError> {
            match value.map(str::to_ascii_lowercase).as_deref() {
                Some("true") => Ok(true),
                Some("false") => Ok(false),
                _ => Err(invalid()),
            }
        };
        let spin = |value: Option<&str>, (min, max): (u8, u8)| -> Result<u8, UciError> {
            let n: u8 = value.and_then(|v| v.parse().ok()).ok_or_else(invalid)?;
            if (min..=max).contains(&n) {
                Ok(n)
            } else {
                Err(invalid())
            }
        };

        match name.to_ascii_lowercase().as_str() {
            "usett" => Ok(UciOption::UseTt(check(value)?)),
            "usemoveordering" => Ok(UciOption::UseMoveOrdering(check(value)?)),
            "usekillermoves" => Ok(UciOption::UseKillerMoves(check(value)?)),
            "usequiescence" => Ok(UciOption::UseQuiescence(check(value)?)),
            "debugstats" => Ok(UciOption::DebugStats(check(value)?)),
            "maxdepth" => Ok(UciOption::MaxDepth(spin(value, Self::MAX_DEPTH_RANGE)?)),
            "quiescencedepth" => Ok(UciOption::QuiescenceDepth(spin(
                value,
                Self::QUIESCENCE_DEPTH_RANGE,
            )?)),
            _ => Err(UciError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine and list options.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset to the starting position.
    UciNewGame,
    /// `position` -- set up a position with optional moves applied.
    Position(Position),
    /// `go` -- search the current position.
    Go(GoParams),
    /// `go perft <depth>` -- count move-tree leaves per root move.
    Perft(usize),
    /// `d` -- print the engine's view of the current position.
    Display,
    /// `setoption name <id> [value <x>]`.
    SetOption(UciOption),
    /// `stop` -- searches are synchronous, so there is nothing to stop.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (silently ignored).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "go" => parse_go(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        "d" => Ok(Command::Display),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// The FEN runs up to the `moves` keyword, so trailing FEN fields may be
/// omitted.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let Some((&kind, rest)) = tokens.split_first() else {
        return Err(UciError::MalformedPosition);
    };

    let moves_at = rest.iter().position(|&t| t == "moves").unwrap_or(rest.len());
    let (setup, moves) = rest.split_at(moves_at);

    let mut position = match kind {
        "startpos" => Position::startpos(),
        "fen" => Position::from_fen(&setup.join(" "))?,
        _ => return Err(UciError::MalformedPosition),
    };

    for uci_str in moves.iter().skip(1) {
        position.apply_uci(uci_str)?;
    }

    Ok(Command::Position(position))
}

/// Parse the `go` command arguments.
///
/// Supports: wtime, btime, winc, binc, movetime, depth, and a leading
/// `perft <depth>`. Unknown tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.first() == Some(&"perft") {
        return Ok(Command::Perft(parse_int(tokens.get(1), "perft")?));
    }

    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "wtime" => {
                params.wtime = Some(parse_millis(tokens.get(i + 1), "wtime")?);
                i += 2;
            }
            "btime" => {
                params.btime = Some(parse_millis(tokens.get(i + 1), "btime")?);
                i += 2;
            }
            "winc" => {
                params.winc = Some(parse_millis(tokens.get(i + 1), "winc")?);
                i += 2;
            }
            "binc" => {
                params.binc = Some(parse_millis(tokens.get(i + 1), "binc")?);
                i += 2;
            }
            "movetime" => {
                params.movetime = Some(parse_millis(tokens.get(i + 1), "movetime")?);
                i += 2;
            }
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <id...> [value <x>]`. Names may contain spaces
/// and are matched without regard to case or spacing.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    if tokens.first() != Some(&"name") {
        return Err(UciError::MissingOptionName);
    }
    let rest = &tokens[1..];
    let value_at = rest.iter().position(|&t| t == "value").unwrap_or(rest.len());
    let name: String = rest[..value_at].concat();
    if name.is_empty() {
        return Err(UciError::MissingOptionName);
    }
    let value = rest.get(value_at + 1).copied();

    UciOption::parse(&name, value).map(Command::SetOption)
}

/// Parse a millisecond value from a token.
fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    let ms: u64 = value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })?;
    Ok(Duration::from_millis(ms))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
