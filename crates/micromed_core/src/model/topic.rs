//! Meditation topic catalog.
//!
//! Topics only label a session; they never change its duration.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Topics offered by the `topics` screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeditationTopic {
    Relaxation,
    Energy,
    Focus,
}

impl MeditationTopic {
    pub const ALL: [MeditationTopic; 3] = [Self::Relaxation, Self::Energy, Self::Focus];

    pub fn label(self) -> &'static str {
        match self {
            Self::Relaxation => "Relaxation",
            Self::Energy => "Energy",
            Self::Focus => "Focus",
        }
    }

    /// Exact, case-sensitive match against the catalog labels.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.label() == value)
    }
}

impl Display for MeditationTopic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns catalog labels in display order.
pub fn topic_labels() -> Vec<String> {
    MeditationTopic::ALL
        .iter()
        .map(|topic| topic.label().to_string())
        .collect()
}
