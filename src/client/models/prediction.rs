//! Prediction result types shown in the status area.

use std::fmt;

const DIGIT_GLYPHS: [&str; 10] = [
    "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣",
];

/// Scores strictly above this are shown as a confident prediction.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// A digit class in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: i64) -> Option<Self> {
        (0..=9).contains(&value).then_some(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Keycap emoji for this digit
    pub fn glyph(self) -> &'static str {
        DIGIT_GLYPHS[self.0 as usize]
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Backend confidence for the predicted class, always finite and in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && (0.0..=1.0).contains(&value)).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn sentiment(self) -> Sentiment {
        if self.0 > CONFIDENCE_THRESHOLD {
            Sentiment::Happy
        } else {
            Sentiment::Worried
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Happy,
    Worried,
}

impl Sentiment {
    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Happy => "😊",
            Sentiment::Worried => "😟",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Happy => "Happy",
            Sentiment::Worried => "Worried",
        }
    }
}

/// What the predictor said about one submitted image.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Digit { digit: Digit, score: Score },
    /// The backend answered but refused to classify (e.g. blank canvas)
    Rejected(String),
}
