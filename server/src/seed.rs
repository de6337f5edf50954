//! Demo data loaded when the server starts.

use shared::{Answer, Player, Question};

pub fn players() -> Vec<Player> {
    vec![
        Player::new("000001M", "Clayton", 28).with_score(30),
        Player::new("000002M", "Giancarl", 27).with_score(10),
        Player::new("000003M", "Emma", 33).with_score(90),
        Player::new("000004M", "Paulinha", 30).with_score(50),
    ]
}

pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the national language of Malta?",
            vec![
                Answer::new("Italian", false),
                Answer::new("Arabic", false),
                Answer::new("Maltese", true),
            ],
        ),
        Question::new(
            "What currency is used in Malta?",
            vec![
                Answer::new("Lira", false),
                Answer::new("Pound", false),
                Answer::new("Euro", true),
            ],
        ),
        Question::new(
            "In which sea is Malta located?",
            vec![
                Answer::new("Mediterranean", true),
                Answer::new("Dead Sea", false),
                Answer::new("Sea of Samsara", false),
            ],
        ),
        Question::new(
            "How many inhabited islands make up the Republic of Malta?",
            vec![
                Answer::new("three", true),
                Answer::new("one", false),
                Answer::new("four", false),
            ],
        ),
        Question::new(
            "What are the colours of Malta's national flag?",
            vec![
                Answer::new("Blue, White and Red", false),
                Answer::new("White and Red", true),
                Answer::new("Red and White", false),
            ],
        ),
    ]
}
