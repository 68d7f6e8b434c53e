//! `vigia session`: one question per stdin line.
//!
//! Submissions do not wait for each other. Every call runs as its own future
//! and its result is handed back to the [`Session`], whose sequence guard
//! drops anything superseded by a newer submission.

use anyhow::Context;
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{FuturesUnordered, StreamExt};
use tokio::io::{AsyncBufReadExt, BufReader};
use vigia_client::{ClientError, RiskApi, RiskClient};
use vigia_config::VigiaConfig;
use vigia_core::{ComunaRanking, PredictionResponse};
use vigia_session::{Completion, PredictionTicket, RankingTicket, Session};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SessionArgs;
use crate::output::dashboard::{render_advisory, render_ranking};
use crate::output::output;

const HELP: &str = "Escriba una consulta por línea. Comandos: :ranking, :select <n>, :quit";

/// One parsed stdin line.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Blank,
    Query(String),
    Ranking,
    Select(usize),
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Input::Query(line.to_string());
    };

    let mut words = command.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some("ranking"), None, None) => Input::Ranking,
        (Some("quit" | "q"), None, None) => Input::Quit,
        (Some("select"), Some(index), None) => index
            .parse()
            .map_or_else(|_| Input::Unknown(line.to_string()), Input::Select),
        _ => Input::Unknown(line.to_string()),
    }
}

/// A finished remote call, with the ticket it was issued under.
enum Landed {
    Prediction(PredictionTicket, Result<PredictionResponse, ClientError>),
    Ranking(RankingTicket, Result<Vec<ComunaRanking>, ClientError>),
}

type InFlight = FuturesUnordered<BoxFuture<'static, Landed>>;

fn spawn_prediction(in_flight: &InFlight, client: &RiskClient, ticket: PredictionTicket) {
    let client = client.clone();
    in_flight.push(
        async move {
            let result = client.predict(ticket.request()).await;
            Landed::Prediction(ticket, result)
        }
        .boxed(),
    );
}

fn spawn_ranking(in_flight: &InFlight, client: &RiskClient, ticket: RankingTicket) {
    let client = client.clone();
    in_flight.push(
        async move {
            let result = client.ranking().await;
            Landed::Ranking(ticket, result)
        }
        .boxed(),
    );
}

/// Handle `vigia session`.
pub async fn handle(
    args: &SessionArgs,
    config: &VigiaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut session = bootstrap::session(config)?;
    let mut in_flight = InFlight::new();

    let ticket = session.begin_ranking();
    spawn_ranking(&in_flight, session.api(), ticket);
    if let Some(query) = &args.query {
        submit(&mut session, &in_flight, query, flags);
    }

    if !flags.quiet {
        eprintln!("{HELP}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut reading = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if reading => {
                match line.context("failed to read from stdin")? {
                    Some(line) => reading = on_input(&mut session, &in_flight, &line, flags)?,
                    None => reading = false,
                }
            }
            Some(landed) = in_flight.next() => on_landed(&mut session, landed, flags)?,
            else => break,
        }
    }

    Ok(())
}

/// Returns whether to keep reading input.
fn on_input(
    session: &mut Session<RiskClient>,
    in_flight: &InFlight,
    line: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    match parse_input(line) {
        Input::Blank => {}
        Input::Quit => return Ok(false),
        Input::Query(query) => submit(session, in_flight, &query, flags),
        Input::Ranking => {
            let ticket = session.begin_ranking();
            spawn_ranking(in_flight, session.api(), ticket);
        }
        Input::Select(number) => {
            let point = number
                .checked_sub(1)
                .and_then(|index| session.state().points.get(index))
                .cloned();
            match point {
                Some(point) => {
                    session.select_point(point);
                    output(&session.state().selected, flags.format)?;
                }
                None => eprintln!(
                    "No hay punto crítico #{number} ({} disponibles).",
                    session.state().points.len()
                ),
            }
        }
        Input::Unknown(command) => eprintln!("Comando desconocido: {command}. {HELP}"),
    }
    Ok(true)
}

fn submit(session: &mut Session<RiskClient>, in_flight: &InFlight, query: &str, flags: &GlobalFlags) {
    let ticket = session.begin_prediction(query);
    if !flags.quiet {
        let request = ticket.request();
        eprintln!(
            "[#{}] {} / {} / {} / {}",
            ticket.seq(),
            request.comuna,
            request.region,
            request.tipo_accidente,
            request.fecha
        );
    }
    spawn_prediction(in_flight, session.api(), ticket);
}

fn on_landed(
    session: &mut Session<RiskClient>,
    landed: Landed,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match landed {
        Landed::Prediction(ticket, result) => {
            if session.finish_prediction(&ticket, result) != Completion::Stale {
                println!("{}", render_advisory(session.state(), flags.format)?);
            }
        }
        Landed::Ranking(ticket, result) => {
            if session.finish_ranking(ticket, result) != Completion::Stale {
                println!("{}", render_ranking(session.state(), flags.format)?);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_lines_are_queries() {
        assert_eq!(
            parse_input("  choque en Maipu el 01/02/2025 "),
            Input::Query("choque en Maipu el 01/02/2025".into())
        );
        assert_eq!(parse_input("   "), Input::Blank);
    }

    #[test]
    fn colon_lines_are_commands() {
        assert_eq!(parse_input(":ranking"), Input::Ranking);
        assert_eq!(parse_input(":select 2"), Input::Select(2));
        assert_eq!(parse_input(":quit"), Input::Quit);
        assert_eq!(parse_input(":q"), Input::Quit);
    }

    #[test]
    fn malformed_commands_are_unknown() {
        assert_eq!(parse_input(":select"), Input::Unknown(":select".into()));
        assert_eq!(parse_input(":select dos"), Input::Unknown(":select dos".into()));
        assert_eq!(parse_input(":ranking now"), Input::Unknown(":ranking now".into()));
        assert_eq!(parse_input(":help"), Input::Unknown(":help".into()));
    }
}
