#![cfg(feature = "std")]

//! Plain-text rendering of session state.

use std::io::{self, Write};

use crate::{
    multi::{GamePhase, MultiplayerGame, Player},
    single::SinglePlayerGame,
};

/// Print the guess history of a single-player game.
pub fn print_history<W: Write>(out: &mut W, game: &SinglePlayerGame) -> io::Result<()> {
    if game.history().is_empty() {
        return Ok(());
    }
    writeln!(out, "Guess History:")?;
    for (i, entry) in game.history().iter().enumerate() {
        writeln!(
            out,
            "  Guess {}: {}  Digits: {}, Positions: {}",
            i + 1,
            entry.guess,
            entry.correct_digits,
            entry.correct_positions
        )?;
    }
    Ok(())
}

/// Header shown before each single-player prompt.
pub fn print_single_status<W: Write>(out: &mut W, game: &SinglePlayerGame) -> io::Result<()> {
    writeln!(
        out,
        "Guess the {}-digit number. Attempts left: {}",
        game.settings().digit_count(),
        game.attempts_left()
    )
}

fn print_player_card<W: Write>(out: &mut W, player: &Player, active: bool) -> io::Result<()> {
    let marker = if active { ">" } else { " " };
    let status = if player.is_eliminated() {
        " (eliminated)"
    } else {
        ""
    };
    writeln!(out, "{} {}. {}{}", marker, player.id() + 1, player.name(), status)?;
    for g in player.guesses() {
        writeln!(
            out,
            "     {} by player {}: {}",
            g.guess,
            g.guesser + 1,
            if g.correct {
                "correct!".to_string()
            } else {
                format!("digits {}, positions {}", g.correct_digits, g.correct_positions)
            }
        )?;
    }
    Ok(())
}

/// Player cards plus a banner naming whose turn it is.
pub fn print_multi_view<W: Write>(out: &mut W, game: &MultiplayerGame) -> io::Result<()> {
    match game.phase() {
        GamePhase::Setup => {
            writeln!(out, "Player Setup")?;
            writeln!(
                out,
                "Player {}'s turn to setup",
                game.current_setup_player() + 1
            )?;
        }
        GamePhase::Guessing => {
            writeln!(out, "Guessing Phase")?;
            for p in game.players() {
                print_player_card(out, p, p.id() == game.current_guesser())?;
            }
            if let Some(p) = game.player(game.current_guesser()) {
                writeln!(out, "{}'s turn to guess", p.name())?;
            }
        }
        GamePhase::Finished => {
            writeln!(out, "Game Over!")?;
            for p in game.players() {
                print_player_card(out, p, false)?;
            }
            if let Some(w) = game.winner() {
                writeln!(out, "{} wins!", w.name())?;
            }
        }
    }
    Ok(())
}
