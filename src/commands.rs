use crate::library::logger::interface::Logger;
use crate::sampling_loop::core::Event;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use thiserror::Error;

pub const HELP: &str = "commands: start | stop | train <class> [label] | release | label <class> <text> | quit";

#[derive(Debug, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{command} needs a class index")]
    MissingClass { command: String },
    #[error("invalid class index {0:?}")]
    InvalidClass(String),
    #[error("label needs some text")]
    MissingLabel,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Event>, CommandError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command.to_lowercase().as_str() {
        "" => return Ok(None),
        "start" => Event::StartRequested,
        "stop" => Event::StopRequested,
        "release" => Event::TrainReleased,
        "quit" | "exit" => Event::Shutdown,
        "train" => {
            let (class, label) = class_and_rest("train", rest)?;
            Event::TrainPressed {
                class,
                label: (!label.is_empty()).then(|| label.to_string()),
            }
        }
        "label" => {
            let (class, label) = class_and_rest("label", rest)?;
            if label.is_empty() {
                return Err(CommandError::MissingLabel);
            }
            Event::LabelEdited {
                class,
                label: label.to_string(),
            }
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(event))
}

fn class_and_rest<'a>(command: &str, rest: &'a str) -> Result<(usize, &'a str), CommandError> {
    let (class, label) = match rest.split_once(char::is_whitespace) {
        Some((class, label)) => (class, label.trim()),
        None => (rest, ""),
    };
    if class.is_empty() {
        return Err(CommandError::MissingClass {
            command: command.to_string(),
        });
    }
    let class = class
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidClass(class.to_string()))?;
    Ok((class, label))
}

/// Forwards parsed commands until input ends or `quit` is read. End of input also shuts down.
pub fn forward(
    input: impl BufRead,
    event_sender: Sender<Event>,
    logger: Arc<dyn Logger + Send + Sync>,
) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                let _ = logger.error(&format!("Failed to read input: {}", e));
                break;
            }
        };

        match parse(&line) {
            Ok(Some(event)) => {
                let shutdown = matches!(event, Event::Shutdown);
                if event_sender.send(event).is_err() || shutdown {
                    return;
                }
            }
            Ok(None) => {}
            Err(e) => {
                let _ = logger.error(&format!("{}. {}", e, HELP));
            }
        }
    }

    let _ = event_sender.send(Event::Shutdown);
}
