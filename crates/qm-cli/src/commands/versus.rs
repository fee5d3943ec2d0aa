use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use qm_core::{GameMode, Player};
use qm_match::{MatchClient, MatchConfig, Matchmaker};
use qm_scoring::ScoringEngine;
use qm_session::{Clock, SystemClock};

pub fn run(file1: &Path, file2: &Path, name1: &str, name2: &str) -> Result<(), String> {
    let engine = ScoringEngine::default();
    let matchmaker = Arc::new(Matchmaker::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let client = |name: &str| {
        MatchClient::new(
            Arc::clone(&matchmaker),
            Arc::clone(&clock),
            Player::new(name),
            MatchConfig::default(),
        )
    };
    let mut first = client(name1);
    let mut second = client(name2);

    first.join_random_room().map_err(|e| e.to_string())?;
    second.join_random_room().map_err(|e| e.to_string())?;

    for (player, file) in [(&mut first, file1), (&mut second, file2)] {
        let text = super::read_text(Some(file))?;
        let result = engine.calculate_score(&text);
        player
            .update_score(result.score, result.sentence_count)
            .map_err(|e| e.to_string())?;
    }

    println!("  {} {}", "Mode:".bold(), GameMode::Multiplayer);
    println!();

    let room = first.end_game().map_err(|e| e.to_string())?.clone();
    let json = serde_json::to_string_pretty(&room).map_err(|e| e.to_string())?;
    println!("{json}");
    println!();

    match room.winner() {
        Some(winner) => println!(
            "  {}",
            format!("Winner: {} with {} points", winner.name, winner.score)
                .green()
                .bold()
        ),
        None => println!("  {}", "It's a tie.".yellow().bold()),
    }
    Ok(())
}
