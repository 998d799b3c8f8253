use std::io::BufRead;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use chrono::Utc;
use crawler_core::{update, AppState, Msg};
use crawler_engine::{export_filename, write_results_csv, EndpointSettings, ExportRecord};

use crate::effects::EffectRunner;
use crate::render;

/// One inbox for everything the controller reacts to: user lines from the
/// stdin reader and core messages forwarded from the engine.
pub(crate) enum Input {
    Line(String),
    Core(Msg),
    Eof,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Discover(String),
    List,
    Results,
    Toggle(usize),
    ToggleAll,
    Search(String),
    Run,
    Export(Option<PathBuf>),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn run() -> Result<()> {
    let (input_tx, input_rx) = mpsc::channel();
    let effects = EffectRunner::new(EndpointSettings::default(), input_tx.clone());
    spawn_stdin_reader(input_tx);

    let mut state = AppState::new();
    render::welcome();

    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Core(msg) => dispatch(&mut state, msg, &effects),
            Input::Line(line) => {
                if !handle_line(&line, &mut state, &effects) {
                    break;
                }
            }
            Input::Eof => break,
        }
    }

    Ok(())
}

/// Applies one message through the pure update function, hands effects to
/// the engine and redraws the status line after a dirty transition.
fn dispatch(state: &mut AppState, msg: Msg, effects: &EffectRunner) {
    let current = std::mem::take(state);
    let (mut next, effect_list) = update(current, msg);
    effects.enqueue(effect_list);
    if next.consume_dirty() {
        render::status(&next.view());
    }
    *state = next;
}

/// Returns `false` when the session should end.
fn handle_line(line: &str, state: &mut AppState, effects: &EffectRunner) -> bool {
    match parse_command(line) {
        Command::Discover(seed) => {
            dispatch(state, Msg::SeedInputChanged(seed), effects);
            dispatch(state, Msg::SeedSubmitted, effects);
        }
        Command::List => render::url_list(&state.view()),
        Command::Results => render::result_list(&state.view()),
        Command::Toggle(index) => {
            // Indices address the rows `list` printed, i.e. the filtered view.
            let view = state.view();
            match view.urls.get(index.wrapping_sub(1)) {
                Some(row) => {
                    let url = row.url.clone();
                    dispatch(state, Msg::UrlToggled { url }, effects);
                }
                None => render::note(&format!("no row {index}; see `list`")),
            }
        }
        Command::ToggleAll => dispatch(state, Msg::ToggleAllClicked, effects),
        Command::Search(needle) => dispatch(state, Msg::SearchChanged(needle), effects),
        Command::Run => dispatch(state, Msg::ProcessClicked, effects),
        Command::Export(dir) => export(state, dir),
        Command::Help => render::help(),
        Command::Quit => return false,
        Command::Empty => {}
        Command::Unknown(word) => render::note(&format!("unknown command `{word}`; try `help`")),
    }
    true
}

/// Exporting is only valid once the run has fully completed.
fn export(state: &AppState, dir: Option<PathBuf>) {
    let view = state.view();
    if !view.export_ready {
        render::note("no completed run to export");
        return;
    }

    let records: Vec<ExportRecord> = state
        .results()
        .iter()
        .map(|result| ExportRecord {
            url: result.url.clone(),
            status: result.status,
            data: result.data.clone(),
            html: result.html.clone(),
        })
        .collect();

    let date = Utc::now().format("%Y-%m-%d").to_string();
    let filename = export_filename(&date);
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    match write_results_csv(&dir, &filename, &records) {
        Ok(summary) => render::note(&format!(
            "wrote {} rows to {}",
            summary.row_count,
            summary.output_path.display()
        )),
        Err(err) => {
            log::error!("export failed: {err}");
            render::note(&format!("export failed: {err}"));
        }
    }
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "discover" if !rest.is_empty() => Command::Discover(rest.to_string()),
        "list" => Command::List,
        "results" => Command::Results,
        "toggle" => match rest.parse::<usize>() {
            Ok(index) => Command::Toggle(index),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
        "all" => Command::ToggleAll,
        "search" => Command::Search(rest.to_string()),
        "run" => Command::Run,
        "export" => {
            let dir = (!rest.is_empty()).then(|| PathBuf::from(rest));
            Command::Export(dir)
        }
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    }
}

fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Input::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(Input::Eof);
    });
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use std::path::PathBuf;

    #[test]
    fn commands_parse_with_arguments() {
        assert_eq!(
            parse_command("discover https://example.com"),
            Command::Discover("https://example.com".to_string())
        );
        assert_eq!(parse_command("toggle 3"), Command::Toggle(3));
        assert_eq!(
            parse_command("search blog"),
            Command::Search("blog".to_string())
        );
        assert_eq!(
            parse_command("export out"),
            Command::Export(Some(PathBuf::from("out")))
        );
        assert_eq!(parse_command("export"), Command::Export(None));
    }

    #[test]
    fn search_without_argument_clears_the_filter() {
        assert_eq!(parse_command("search"), Command::Search(String::new()));
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   "), Command::Empty);
        assert_eq!(parse_command("discover"), Command::Unknown("discover".to_string()));
        assert_eq!(parse_command("toggle x"), Command::Unknown("toggle x".to_string()));
        assert_eq!(parse_command("frobnicate"), Command::Unknown("frobnicate".to_string()));
    }
}
