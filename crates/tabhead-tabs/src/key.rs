//! Keys recognised by the inline title editor

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Commit the edit
    Enter,
    /// Abandon the edit, keeping the old title
    Escape,
    /// Anything else is handled by the input itself
    Other,
}

impl EditKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditKey::Enter => "Enter",
            EditKey::Escape => "Escape",
            EditKey::Other => "Other",
        }
    }
}

impl std::fmt::Display for EditKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EditKey {
    type Err = std::convert::Infallible;

    /// Parses DOM `KeyboardEvent.key` names. Unknown keys map to `Other`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Enter" => EditKey::Enter,
            "Escape" | "Esc" => EditKey::Escape,
            _ => EditKey::Other,
        })
    }
}
