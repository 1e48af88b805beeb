use std::fmt;

/// Identifier of the card to show, taken from the last segment of a
/// location path (`/42` -> `42`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId(String);

impl CardId {
    /// Returns `None` when the last segment is empty, e.g. `/` or `/cards/`.
    pub fn from_location(path: &str) -> Option<Self> {
        let segment = path.rsplit('/').next().unwrap_or_default().trim();
        if segment.is_empty() {
            None
        } else {
            Some(Self(segment.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Location of the neighbouring numeric card, if there is one.
    pub fn step(&self, forward: bool) -> Option<String> {
        let number = self.as_number()?;
        let next = if forward {
            number.checked_add(1)?
        } else {
            number.checked_sub(1).filter(|n| *n > 0)?
        };
        Some(format!("/{next}"))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalises user input from the go-to prompt into a location path.
pub fn normalize_location(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
