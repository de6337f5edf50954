//! Text rendering for prompts, listings and quiz results.

use crate::console::Prompt;
use crate::session::QuizReport;
use shared::{Player, Question};

/// Text shown before waiting for the user's reply
pub fn prompt_text(prompt: &Prompt<'_>) -> String {
    match prompt {
        Prompt::Identifier => "Welcome to the Quiz, kindly enter your ID".to_string(),
        Prompt::Name => "Kindly enter your name".to_string(),
        Prompt::Age => "Kindly enter your age".to_string(),
        Prompt::Answer {
            number,
            total,
            question,
        } => {
            let mut text = format!("Question {} of {}: {}\n", number, total, question.prompt);
            for (i, answer) in question.answers.iter().enumerate() {
                text.push_str(&format!("{}. {}\n", i + 1, answer.text));
            }
            text.push_str("Your answer");
            text
        }
    }
}

pub fn players_table(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players registered.".to_string();
    }

    let id_width = players
        .iter()
        .map(|p| p.id.len())
        .chain(std::iter::once(2))
        .max()
        .unwrap_or(2);
    let name_width = players
        .iter()
        .map(|p| p.name.len())
        .chain(std::iter::once(4))
        .max()
        .unwrap_or(4);

    let mut out = format!(
        "{:<id_width$}  {:<name_width$}  {:>3}  {:>5}\n",
        "ID", "Name", "Age", "Score"
    );
    for player in players {
        out.push_str(&format!(
            "{:<id_width$}  {:<name_width$}  {:>3}  {:>5}\n",
            player.id, player.name, player.age, player.score
        ));
    }
    out
}

/// Lists every question with its numbered options and correctness flags
pub fn questions_listing(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions available.".to_string();
    }

    let mut out = String::new();
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, question.prompt));
        for (j, answer) in question.answers.iter().enumerate() {
            out.push_str(&format!("   {}. {} ({})\n", j + 1, answer.text, answer.correct));
        }
    }
    out
}

pub fn report(report: &QuizReport) -> String {
    let mut out = format!(
        "Your score is {} and your rank is {}.\nYour answers are:\n",
        report.score, report.rank
    );
    for selection in &report.submission {
        out.push_str(&format!(
            "{},{}\n",
            selection.answer.text, selection.answer.correct
        ));
    }
    out
}
