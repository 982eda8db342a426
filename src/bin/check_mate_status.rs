use std::env;
use std::process::ExitCode;

use chess_rules::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: check_mate_status [--fen \"<fen>\"] <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let (fen, moves) = match args.first().map(String::as_str) {
        Some("--fen") => match args.get(1) {
            Some(fen) => (Some(fen.as_str()), &args[2..]),
            None => {
                eprintln!("--fen needs a position");
                return ExitCode::FAILURE;
            }
        },
        _ => (None, &args[..]),
    };

    let mut game = match fen {
        Some(fen) => match Game::from_fen(fen) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("invalid fen: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Game::new(),
    };

    for mv in moves {
        if let Err(err) = game.apply_uci(mv) {
            eprintln!("{mv}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let draw = game.is_draw();
    let legal_moves = game.legal_move_list();
    println!("fen: {}", game.to_fen());
    println!("side_to_move: {}", game.side_to_move());
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", game.is_in_check());
    println!("checkmate: {}", game.is_checkmate());
    println!("stalemate: {}", game.is_stalemate());
    match draw.reason {
        Some(reason) => println!("draw: {reason}"),
        None => println!("draw: no"),
    }
    println!("status: {}", game.status());
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
