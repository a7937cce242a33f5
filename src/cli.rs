#![cfg(feature = "std")]

//! Terminal front-end: coordinate parsing, board rendering and the
//! interactive game loop.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::{
    board::{BoardSnapshot, CellView},
    common::{EngineError, Outcome, Phase, Shot, Side},
    config::BOARD_SIZE,
    game::{FireReport, GameEngine},
    random::RandomSource,
    ship::Orientation,
};

/// `(x, y)` to text such as `B4`: column letter, then 1-based row.
pub fn coord_to_string(x: usize, y: usize) -> String {
    let col = (b'A' + x as u8) as char;
    format!("{}{}", col, y + 1)
}

/// Parse `A5`-style text into `(x, y)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((x, row - 1))
}

/// Parse `B4 V` / `b4 h` into an anchor and orientation.
pub fn parse_placement(input: &str) -> Result<(usize, usize, Orientation), String> {
    let mut parts = input.split_whitespace();
    let coord = parts.next().ok_or("Empty input")?;
    let (x, y) = parse_coord(coord)?;
    let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
        Some(o) if o == "H" => Orientation::Horizontal,
        Some(o) if o == "V" => Orientation::Vertical,
        Some(o) => return Err(format!("Invalid orientation '{}' - use H or V", o)),
        None => return Err("Missing orientation - add H or V (e.g., B4 V)".to_string()),
    };
    if parts.next().is_some() {
        return Err("Too many words - expected e.g. B4 V".to_string());
    }
    Ok((x, y, orientation))
}

fn cell_char(view: CellView) -> char {
    match view {
        CellView::Empty => '.',
        CellView::Ship => 'S',
        CellView::Miss => 'o',
        CellView::Hit => 'X',
        CellView::Sunk => '#',
    }
}

/// Render a board snapshot as a framed grid with a legend.
pub fn render_board(snapshot: &BoardSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "    ╔═══════════════════════╗");
    let _ = write!(out, "    ║  ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    let _ = writeln!(out, " ║");
    let _ = writeln!(out, "    ╠═══════════════════════╣");
    for (y, row) in snapshot.cells.iter().enumerate() {
        let _ = write!(out, "    ║ {:2}", y + 1);
        for &view in row {
            let _ = write!(out, " {}", cell_char(view));
        }
        let _ = writeln!(out, " ║");
    }
    let _ = writeln!(out, "    ╚═══════════════════════╝");
    let _ = writeln!(out, "    Ships afloat: {}", snapshot.ships_remaining);
    out
}

/// Both boards, enemy on top.
pub fn render_view<S: RandomSource>(engine: &GameEngine<S>) -> String {
    let mut out = String::from("Enemy board:\n");
    out.push_str(&render_board(&engine.board_snapshot(Side::Ai)));
    out.push_str("\nYour board:\n");
    out.push_str(&render_board(&engine.board_snapshot(Side::Player)));
    out.push_str("    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water\n");
    out
}

fn describe_shot(shot: Shot) -> String {
    match shot {
        Shot::Miss => "miss".to_string(),
        Shot::Hit => "hit".to_string(),
        Shot::Sunk { size } => format!("hit and sunk a ship of size {}", size),
    }
}

/// Human-readable account of a `fire_at` call.
pub fn describe_report(report: &FireReport) -> String {
    let mut out = format!(
        "You fire at {}: {}. Enemy ships afloat: {}\n",
        coord_to_string(report.x, report.y),
        describe_shot(report.shot),
        report.enemy_ships_remaining
    );
    for shot in &report.ai_volley {
        let _ = writeln!(
            out,
            "Enemy fires at {}: {}",
            coord_to_string(shot.x, shot.y),
            describe_shot(shot.shot)
        );
    }
    out
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "CONGRATULATIONS, YOU WIN",
        Outcome::Loss => "SORRY, YOU LOSE",
    }
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> anyhow::Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/// Run an interactive game on the given streams until the player quits or
/// the input ends.
pub fn run_interactive<S, R, W>(engine: &mut GameEngine<S>, input: &mut R, output: &mut W) -> anyhow::Result<()>
where
    S: RandomSource,
    R: BufRead,
    W: Write,
{
    writeln!(output, "DESTROY THE ENEMIES")?;
    loop {
        match engine.phase() {
            Phase::Setup => {
                let Some(size) = engine.next_ship_size() else {
                    anyhow::bail!("setup phase without pending ships");
                };
                write!(output, "\n{}", render_board(&engine.board_snapshot(Side::Player)))?;
                let placed = engine.config().fleet.len() - engine.ships_to_place();
                let text = format!(
                    "Ship {}/{} (size {}). Enter placement (e.g. B4 V), 'random' or 'quit': ",
                    placed + 1,
                    engine.config().fleet.len(),
                    size
                );
                let Some(line) = prompt(input, output, &text)? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("quit") {
                    return Ok(());
                }
                if line.eq_ignore_ascii_case("random") {
                    engine.place_remaining_randomly()?;
                    writeln!(output, "Remaining ships placed at random.")?;
                    continue;
                }
                let (x, y, orientation) = match parse_placement(&line) {
                    Ok(p) => p,
                    Err(msg) => {
                        writeln!(output, "✗ {}", msg)?;
                        continue;
                    }
                };
                match engine.place_ship(size, orientation, x, y) {
                    Ok(()) => writeln!(output, "✓ Ship of size {} placed at {}", size, coord_to_string(x, y))?,
                    Err(EngineError::InvalidPlacement(reason)) => writeln!(output, "✗ {}", reason)?,
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::Playing => {
                write!(output, "\n{}", render_view(engine))?;
                let Some(line) = prompt(input, output, "Target (e.g. C7) or 'quit': ")? else {
                    return Ok(());
                };
                if line.eq_ignore_ascii_case("quit") {
                    return Ok(());
                }
                let (x, y) = match parse_coord(&line) {
                    Ok(c) => c,
                    Err(msg) => {
                        writeln!(output, "✗ {}", msg)?;
                        continue;
                    }
                };
                match engine.fire_at(x, y) {
                    Ok(report) => write!(output, "{}", describe_report(&report))?,
                    Err(EngineError::RepeatedShot { .. }) => {
                        writeln!(output, "✗ This cell has already been shot.")?
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Phase::GameOver => {
                write!(output, "\n{}", render_view(engine))?;
                if let Some(outcome) = engine.outcome() {
                    writeln!(output, "\n{}", outcome_message(outcome))?;
                }
                let Some(line) = prompt(input, output, "Play again? [y/N]: ")? else {
                    return Ok(());
                };
                if !line.eq_ignore_ascii_case("y") {
                    return Ok(());
                }
                engine.acknowledge_game_over()?;
            }
        }
    }
}
