use serde::{Deserialize, Serialize};
use std::fmt;

/// How soon the purchased item is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    /// Label shown on the buttons and written to the export.
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "Baixa",
            Urgency::Medium => "Média",
            Urgency::High => "Alta",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
