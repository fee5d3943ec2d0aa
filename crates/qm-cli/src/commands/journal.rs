use std::io::{self, BufRead};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use qm_core::GameMode;
use qm_scoring::ScoringEngine;
use qm_session::{Clock, SessionConfig, SessionController, SessionEvent, SystemClock};
use tracing::debug;

/// How often the countdown is checked while waiting for input.
const POLL: Duration = Duration::from_millis(200);

pub fn run(minutes: u64, seed: Option<u64>) -> Result<(), String> {
    debug!(minutes, ?seed, "starting journal session");
    let mut config = SessionConfig::default().with_minutes(minutes);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let mut session = SessionController::new(config, Arc::new(ScoringEngine::default()), clock);

    println!("  {} {}", "Mode:".bold(), GameMode::Solo);
    println!(
        "  {} {}",
        "Prompt:".bold(),
        session.prompt().cyan().bold()
    );
    println!(
        "  {}",
        format!("{} on the clock. One line per sentence, Ctrl-D to finish.", session.formatted_time())
            .dimmed()
    );
    println!();

    let lines = spawn_reader();
    let mut text = String::new();

    while !session.is_expired() {
        match lines.recv_timeout(POLL) {
            Ok(line) => {
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&line);
                session.update_text(&text);
            }
            Err(RecvTimeoutError::Timeout) => session.poll(),
            Err(RecvTimeoutError::Disconnected) => break,
        }
        for event in session.drain_events() {
            print_event(&event, &session);
        }
    }
    for event in session.drain_events() {
        print_event(&event, &session);
    }
    session.stop();

    println!();
    println!(
        "  {}",
        format!(
            "Final score: {} ({} sentences)",
            session.score(),
            session.sentence_count()
        )
        .bold()
    );
    println!("  {}", session.status_line().dimmed());
    Ok(())
}

/// Forward stdin lines over a channel so the countdown keeps running while
/// the user types.
fn spawn_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn print_event(event: &SessionEvent, session: &SessionController) {
    let clock = format!("[{}]", session.formatted_time()).dimmed();
    match event {
        SessionEvent::TextScored(result) => println!(
            "  {clock} {} points, {} sentences",
            result.score, result.sentence_count
        ),
        SessionEvent::MilestoneReached { sentence_count } => println!(
            "  {clock} {}",
            format!("Milestone: {sentence_count} sentences!").green().bold()
        ),
        SessionEvent::MilestoneCleared => {}
        SessionEvent::TimeExpired => println!("  {clock} {}", "Time's up!".yellow().bold()),
    }
}
