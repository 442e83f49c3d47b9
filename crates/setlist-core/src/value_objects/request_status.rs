//! Song request lifecycle
//!
//! ```text
//! Pending ──► Accepted ──► Played
//!    │
//!    └──────► Declined
//! ```
//!
//! `Declined` and `Played` are terminal. Self-transitions are rejected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::StoredCode;

/// Status of a song request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum SongRequestStatus {
    /// Waiting for the performer; the only state that is ranked by votes
    #[default]
    Pending = 1,
    Accepted = 2,
    Declined = 3,
    Played = 4,
}

impl SongRequestStatus {
    /// Whether moving from `self` to `next` is a legal edge
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted | Self::Declined) | (Self::Accepted, Self::Played)
        )
    }

    /// No further transitions are possible
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Declined | Self::Played)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
            Self::Played => "played",
        }
    }
}

impl fmt::Display for SongRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StoredCode for SongRequestStatus {
    const TYPE_NAME: &'static str = "song request status";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Pending),
            2 => Some(Self::Accepted),
            3 => Some(Self::Declined),
            4 => Some(Self::Played),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SongRequestStatus; 4] = [
        SongRequestStatus::Pending,
        SongRequestStatus::Accepted,
        SongRequestStatus::Declined,
        SongRequestStatus::Played,
    ];

    #[test]
    fn test_allowed_edges() {
        use SongRequestStatus::{Accepted, Declined, Pending, Played};

        assert!(Pending.can_transition_to(Accepted));
        assert!(Pending.can_transition_to(Declined));
        assert!(Accepted.can_transition_to(Played));
    }

    #[test]
    fn test_every_other_pair_is_rejected() {
        use SongRequestStatus::{Accepted, Declined, Pending, Played};
        let allowed = [(Pending, Accepted), (Pending, Declined), (Accepted, Played)];

        for from in ALL {
            for to in ALL {
                if allowed.contains(&(from, to)) {
                    continue;
                }
                assert!(!from.can_transition_to(to), "{from} -> {to} should be rejected");
            }
        }
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for from in ALL.into_iter().filter(|s| s.is_terminal()) {
            assert!(ALL.iter().all(|to| !from.can_transition_to(*to)));
        }
    }

    #[test]
    fn test_stored_codes_match_legacy_values() {
        assert_eq!(SongRequestStatus::Pending.code(), 1);
        assert_eq!(SongRequestStatus::Played.code(), 4);
        assert_eq!(SongRequestStatus::from_code(3), Some(SongRequestStatus::Declined));
        assert_eq!(SongRequestStatus::from_code(9), None);
    }
}
