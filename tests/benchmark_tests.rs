//! Performance benchmarks for scoring and ranking

use shared::{rank_of, score_selections, Answer, Player, Question};
use std::time::Instant;

fn quiz(count: usize) -> Vec<Question> {
    (0..count)
        .map(|i| {
            Question::new(
                format!("Question {}", i),
                vec![
                    Answer::new("a", false),
                    Answer::new("b", true),
                    Answer::new("c", false),
                    Answer::new("d", false),
                ],
            )
        })
        .collect()
}

fn roster(count: usize) -> Vec<Player> {
    (0..count)
        .map(|i| Player::new(format!("{:06}M", i), "Player", 30).with_score((i * 37 % 101) as u32))
        .collect()
}

/// Benchmarks scoring of complete quizzes
#[test]
fn benchmark_quiz_scoring() {
    let questions = quiz(10);
    let selections: Vec<usize> = (0..10).map(|i| i % 4 + 1).collect();

    let iterations = 100_000;
    let start = Instant::now();

    for _ in 0..iterations {
        let score = score_selections(&questions, &selections).unwrap();
        assert!(score <= 100);
    }

    let duration = start.elapsed();
    println!(
        "Quiz scoring: {} iterations in {:?} ({:.2} ns/iter)",
        iterations,
        duration,
        duration.as_nanos() as f64 / iterations as f64
    );

    // Should complete in under 2 seconds
    assert!(duration.as_millis() < 2000);
}

/// Benchmarks rank computation over a large roster
#[test]
fn benchmark_ranking() {
    let players = roster(10_000);

    let iterations = 200;
    let start = Instant::now();

    for i in 0..iterations {
        let id = &players[(i * 19) % players.len()].id;
        let rank = rank_of(&players, id).unwrap();
        assert!((1..=players.len()).contains(&rank));
    }

    let duration = start.elapsed();
    println!(
        "Ranking: {} lookups over {} players in {:?} ({:.2} μs/iter)",
        iterations,
        players.len(),
        duration,
        duration.as_micros() as f64 / iterations as f64
    );

    // Should complete in under 2 seconds
    assert!(duration.as_millis() < 2000);
}
