use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classifier output classes, in the order the model emits its scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinType {
    Dry,
    Normal,
    Oily,
}

impl SkinType {
    pub const ALL: [SkinType; 3] = [SkinType::Dry, SkinType::Normal, SkinType::Oily];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Normal => "normal",
            SkinType::Oily => "oily",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkinType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dry" => Ok(SkinType::Dry),
            "normal" => Ok(SkinType::Normal),
            "oily" => Ok(SkinType::Oily),
            other => Err(format!("unknown skin type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub skin_type: SkinType,
    /// Percentage rendered with exactly two decimals, e.g. `"87.50"`.
    pub confidence: String,
    pub recommendations: Vec<String>,
    pub description: String,
}
