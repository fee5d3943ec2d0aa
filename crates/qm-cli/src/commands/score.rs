use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qm_scoring::{ScoringEngine, SentenceReport};

pub fn run(file: Option<&Path>, json: bool, breakdown: bool) -> Result<(), String> {
    let text = super::read_text(file)?;
    let engine = ScoringEngine::default();
    let result = engine.calculate_score(&text);

    if json {
        let value = if breakdown {
            serde_json::json!({
                "result": result,
                "sentences": engine.analyze(&text),
            })
        } else {
            serde_json::to_value(result).map_err(|e| e.to_string())?
        };
        let out = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if breakdown {
        print_breakdown(&engine.analyze(&text));
    }

    println!("  Score: {}", result.score);
    println!("  Sentences: {}", result.sentence_count);
    if result.milestone_just_reached {
        println!(
            "  {}",
            format!("Milestone: {} sentences!", result.sentence_count)
                .green()
                .bold()
        );
    }
    Ok(())
}

fn print_breakdown(reports: &[SentenceReport]) {
    if reports.is_empty() {
        println!("  No sentences found.");
        println!();
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Sentence", "Valid", "Repetitive", "Points"]);

    for (i, report) in reports.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            super::truncate(&report.text, 60),
            yes_no(report.valid),
            yes_no(report.repetitive),
            report.points.to_string(),
        ]);
    }

    println!("{table}");
    println!();
}

fn yes_no(flag: bool) -> String {
    if flag { "yes" } else { "no" }.to_string()
}
