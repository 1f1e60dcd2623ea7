use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Colours handed out, by column index, to technicians without an assigned colour.
pub const FALLBACK_COLORS: [&str; 6] = [
    "#6366f1", "#ec4899", "#14b8a6", "#f97316", "#8b5cf6", "#0ea5e9",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
    pub color: Option<String>,
}

impl Technician {
    /// The assigned colour, or a deterministic fallback for the given column.
    pub fn display_color(&self, column: usize) -> &str {
        self.color
            .as_deref()
            .unwrap_or(FALLBACK_COLORS[column % FALLBACK_COLORS.len()])
    }
}
