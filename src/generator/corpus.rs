use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("no practice texts for {0} difficulty")]
    EmptyTier(Difficulty),
    #[error("blank practice text in {0} difficulty")]
    BlankText(Difficulty),
}

const EASY: &[&str] = &[
    "The quick brown fox jumps over the lazy dog.",
    "Programming is the art of telling another human what one wants the computer to do.",
    "Simplicity is prerequisite for reliability.",
];

const MEDIUM: &[&str] = &[
    "The best error message is the one that never shows up.",
    "First, solve the problem. Then, write the code.",
    "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.",
    "Experience is the name everyone gives to their mistakes.",
];

const HARD: &[&str] = &[
    "Make it work, make it right, make it fast.",
    "Weeks of coding can save you hours of planning.",
    "Perfection is achieved not when there is nothing more to add, but rather when there is nothing more to take away.",
];

/// Practice sentences split into disjoint difficulty tiers.
#[derive(Clone, Debug)]
pub struct Corpus {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl Corpus {
    /// Every tier needs at least one non-blank text, otherwise a challenge
    /// could never be produced for it.
    pub fn new(
        easy: Vec<String>,
        medium: Vec<String>,
        hard: Vec<String>,
    ) -> Result<Self, CorpusError> {
        let corpus = Self { easy, medium, hard };
        for tier in Difficulty::ALL {
            let texts = corpus.texts(tier);
            if texts.is_empty() {
                return Err(CorpusError::EmptyTier(tier));
            }
            if texts.iter().any(|t| t.trim().is_empty()) {
                return Err(CorpusError::BlankText(tier));
            }
        }
        Ok(corpus)
    }

    pub fn builtin() -> Result<Self, CorpusError> {
        let owned = |texts: &[&str]| texts.iter().map(|t| t.to_string()).collect();
        Self::new(owned(EASY), owned(MEDIUM), owned(HARD))
    }

    pub fn texts(&self, tier: Difficulty) -> &[String] {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
