//! Player roles.

use serde::{Deserialize, Serialize};

/// The role a player fills in the current rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Setter,
    OutsideHitter,
    MiddleBlocker,
    Opposite,
    /// A middle blocker substituted by the back-row specialist.
    Libero,
}

impl Role {
    /// Short token used in protocol output.
    pub const fn token(self) -> &'static str {
        match self {
            Role::Setter => "setter",
            Role::OutsideHitter => "outside-hitter",
            Role::MiddleBlocker => "middle-blocker",
            Role::Opposite => "opposite",
            Role::Libero => "libero",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Setter => "Setter",
            Role::OutsideHitter => "Outside Hitter",
            Role::MiddleBlocker => "Middle Blocker",
            Role::Opposite => "Opposite",
            Role::Libero => "Libero",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_name_matches_token() {
        for role in [
            Role::Setter,
            Role::OutsideHitter,
            Role::MiddleBlocker,
            Role::Opposite,
            Role::Libero,
        ] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.token()));
        }
    }
}
