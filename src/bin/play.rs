//! Two players at one terminal. Type a square such as `d3` when prompted.

use std::io::{self, BufRead, Write};

use spooky_othello::game::Game;
use spooky_othello::notation::format_square_list;
use spooky_othello::r#move::Move;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();
    let mut game = Game::new();

    while !game.is_over() {
        let player = game.turn();
        let moves = game.legal_moves_mask();
        write!(
            out,
            "{}{}: {}",
            game.board().render_with_moves(moves),
            player,
            format_square_list(moves)
        )?;

        let chosen = match game.forced_move() {
            Some(Move::Pass) => {
                writeln!(out, "{} can't move", player)?;
                Move::Pass
            }
            Some(only) => {
                writeln!(out, "Forced move")?;
                only
            }
            None => match prompt_move(&game, &mut lines, &mut out)? {
                Some(mv) => mv,
                None => return Ok(()),
            },
        };

        if !chosen.is_pass() {
            writeln!(out, ":{}", chosen)?;
        }
        game.make_move(&chosen)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }

    let (x, o) = game.score();
    write!(out, "{}", game.board())?;
    writeln!(out, "Game over. X:{} O:{}", x, o)?;
    Ok(())
}

/// Prompt with `": "` and read lines until a legal placement is typed.
/// `None` at end of input.
fn prompt_move<I, W>(game: &Game, lines: &mut I, out: &mut W) -> io::Result<Option<Move>>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    write!(out, ": ")?;
    loop {
        out.flush()?;
        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(None);
        };
        match line?.parse::<Move>() {
            Ok(mv) if !mv.is_pass() && game.is_legal_move(&mv) => return Ok(Some(mv)),
            _ => writeln!(out, "Invalid move")?,
        }
    }
}
