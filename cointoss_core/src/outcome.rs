use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FlipOutcome {
    Heads,
    Tails,
}

impl FlipOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            FlipOutcome::Heads => "heads",
            FlipOutcome::Tails => "tails",
        }
    }

    /// Text shown in the result panel.
    pub fn display_text(self) -> String {
        self.as_str().to_uppercase()
    }

    pub fn coin_face(self) -> CoinFace {
        match self {
            FlipOutcome::Heads => CoinFace::Front,
            FlipOutcome::Tails => CoinFace::Mirrored,
        }
    }
}

impl fmt::Display for FlipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlipOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heads" => Ok(FlipOutcome::Heads),
            "tails" => Ok(FlipOutcome::Tails),
            other => Err(format!("unknown outcome `{other}`")),
        }
    }
}

/// Resting orientation of the coin once a flip has been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinFace {
    Front,
    Mirrored,
}

impl CoinFace {
    /// CSS transform for the coin element.
    pub fn transform(self) -> &'static str {
        match self {
            CoinFace::Front => "rotateY(0deg)",
            CoinFace::Mirrored => "rotateY(180deg)",
        }
    }
}
