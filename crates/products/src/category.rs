use core::str::FromStr;
use serde::{Deserialize, Serialize};

use catalog_core::DomainError;

/// Closed set of catalog categories.
///
/// The literal names (`PC_GAME`, ...) are part of the external contract: they
/// are what `Display`, `FromStr` and serde all agree on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    PcGame,
    XboxGame,
    PlaystationGame,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 3] = [Category::PcGame, Category::XboxGame, Category::PlaystationGame];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::PcGame => "PC_GAME",
            Category::XboxGame => "XBOX_GAME",
            Category::PlaystationGame => "PLAYSTATION_GAME",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                DomainError::invalid_category(format!(
                    "'{wanted}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}
