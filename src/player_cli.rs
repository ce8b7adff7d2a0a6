#![cfg(feature = "std")]

//! Interactive terminal frontend. Reads one line per action and reflects
//! the resulting session state; all rules live in the core.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::{
    game::{Game, Session},
    multi::GamePhase,
    ui::{print_history, print_multi_view, print_single_status},
};

/// Source of player input lines.
pub trait InputSource {
    /// Show `prompt` and return the next line without its newline, or
    /// `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Reads from the process stdin, prompting on stdout.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Replays a fixed list of lines; used to script games.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Drive whichever session `game` holds until it ends or input runs out.
pub fn run_game<I: InputSource, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()> {
    match game.session() {
        Session::Single(_) => run_single(game, input, out),
        Session::Multi(_) => run_multi(game, input, out),
    }
}

/// Single-player loop: prompt, submit, report.
pub fn run_single<I: InputSource, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()> {
    while !game.is_over() {
        let Some(single) = game.session().as_single() else {
            return Ok(());
        };
        print_single_status(out, single)?;
        let Some(line) = input.read_line("Enter guess: ")? else {
            break;
        };
        let Some(outcome) = game.submit_guess(&line) else {
            return Ok(());
        };
        writeln!(out, "{}", outcome.message())?;
        if outcome.is_recorded() {
            if let Some(single) = game.session().as_single() {
                print_history(out, single)?;
            }
        }
    }
    Ok(())
}

fn parse_target(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// Multiplayer loop: setup for every player, then turns until one remains.
pub fn run_multi<I: InputSource, W: Write>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
) -> anyhow::Result<()> {
    loop {
        let Some(multi) = game.session().as_multi() else {
            return Ok(());
        };
        print_multi_view(out, multi)?;
        match multi.phase() {
            GamePhase::Finished => return Ok(()),
            GamePhase::Setup => {
                let Some(name) = input.read_line("Enter your name: ")? else {
                    return Ok(());
                };
                let Some(number) = input.read_line("Enter your secret number: ")? else {
                    return Ok(());
                };
                if let Some(outcome) = game.save_player_setup(&name, &number) {
                    writeln!(out, "{}", outcome.message())?;
                }
            }
            GamePhase::Guessing => {
                let targets: Vec<usize> = multi.valid_targets().map(|p| p.id()).collect();
                let target = match targets.as_slice() {
                    [only] => *only,
                    _ => {
                        let choices: Vec<String> =
                            targets.iter().map(|id| (id + 1).to_string()).collect();
                        let prompt = format!("Guess for ({}): ", choices.join("/"));
                        let Some(line) = input.read_line(&prompt)? else {
                            return Ok(());
                        };
                        match parse_target(&line) {
                            Some(t) => t,
                            None => {
                                writeln!(out, "Please choose one of {}.", choices.join(", "))?;
                                continue;
                            }
                        }
                    }
                };
                let Some(guess) = input.read_line("Enter guess: ")? else {
                    return Ok(());
                };
                if let Some(outcome) = game.submit_multi_guess(&guess, target) {
                    writeln!(out, "{}", outcome.message())?;
                }
            }
        }
    }
}
