//! Turn-based conversation with the person taking the quiz
//!
//! The quiz session never touches stdin or stdout directly. Each question it
//! needs answered is a [`Prompt`], and each reply is the raw line the user
//! typed. The interactive client plugs in a [`Terminal`]; tests plug in a
//! [`ScriptedConsole`] that replays canned replies.

use crate::error::ClientError;
use crate::rendering;
use shared::{Question, QuizError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A request for input from the user
#[derive(Debug, Clone, Copy)]
pub enum Prompt<'a> {
    Identifier,
    Name,
    Age,
    Answer {
        /// One-based position of the question
        number: usize,
        total: usize,
        question: &'a Question,
    },
}

pub trait Console {
    /// Shows the prompt and returns the reply, without its line ending
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String, ClientError>;

    /// Shows a line of information that needs no reply
    fn say(&mut self, text: &str) -> Result<(), ClientError>;
}

/// Console over any line reader and writer, normally stdin and stdout
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String, ClientError> {
        writeln!(self.writer, "{}", rendering::prompt_text(prompt))?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), ClientError> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

/// Console that replays prepared replies and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Number of replies not consumed yet
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<String, ClientError> {
        self.transcript.push(rendering::prompt_text(prompt));
        self.replies.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script ran out of replies").into()
        })
    }

    fn say(&mut self, text: &str) -> Result<(), ClientError> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

/// Parses an age reply into a positive number
pub fn parse_age(input: &str) -> Result<u32, QuizError> {
    match input.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(QuizError::InvalidInput(format!(
            "'{}' is not a valid age",
            input.trim()
        ))),
    }
}

/// Parses a one-based answer number; the range is checked by the scorer
pub fn parse_selection(input: &str) -> Result<usize, QuizError> {
    input
        .trim()
        .parse::<usize>()
        .map_err(|_| QuizError::InvalidInput(format!("'{}' is not an answer number", input.trim())))
}
