//! Deterministic playouts for profiling. Build with `--features hotpath` to
//! get per-function timings of the engine.

use spooky_othello::game::Game;

const PLAYOUTS: usize = 10_000;

#[hotpath::main]
fn main() {
    let mut total_moves = 0;
    let mut x_wins = 0;

    for i in 0..PLAYOUTS {
        let mut game = Game::new();
        while !game.is_over() {
            let moves = game.legal_moves();
            // Rotate through the options so playouts differ
            let move_ = moves[(i + game.move_count()) % moves.len()];
            if game.make_move(&move_).is_err() {
                break;
            }
        }
        total_moves += game.move_count();
        if game.outcome().and_then(|o| o.winner()) == Some(spooky_othello::Player::X) {
            x_wins += 1;
        }
    }

    println!(
        "{} playouts, {} moves, X won {}",
        PLAYOUTS, total_moves, x_wins
    );
}
