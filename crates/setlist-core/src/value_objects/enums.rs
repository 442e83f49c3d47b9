//! Enumerations shared by the catalog and event entities

use serde::{Deserialize, Serialize};

use super::StoredCode;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Audience = 1,
    Singer = 2,
    Venue = 3,
    Admin = 4,
}

impl StoredCode for UserRole {
    const TYPE_NAME: &'static str = "user role";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Audience),
            2 => Some(Self::Singer),
            3 => Some(Self::Venue),
            4 => Some(Self::Admin),
            _ => None,
        }
    }
}

/// How hard a song is to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum SongDifficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl StoredCode for SongDifficulty {
    const TYPE_NAME: &'static str = "song difficulty";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Easy),
            2 => Some(Self::Medium),
            3 => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Kind of event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum EventCategory {
    #[default]
    Show = 1,
    Festival = 2,
    Concert = 3,
    Karaoke = 4,
    OpenMic = 5,
    Competition = 6,
    Workshop = 7,
    Masterclass = 8,
    LiveStream = 9,
    Other = 10,
}

impl StoredCode for EventCategory {
    const TYPE_NAME: &'static str = "event category";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Show),
            2 => Some(Self::Festival),
            3 => Some(Self::Concert),
            4 => Some(Self::Karaoke),
            5 => Some(Self::OpenMic),
            6 => Some(Self::Competition),
            7 => Some(Self::Workshop),
            8 => Some(Self::Masterclass),
            9 => Some(Self::LiveStream),
            10 => Some(Self::Other),
            _ => None,
        }
    }
}

/// Publication state of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum EventStatus {
    #[default]
    Draft = 1,
    Published = 2,
    Live = 3,
    SoldOut = 4,
    Cancelled = 5,
    Postponed = 6,
    Completed = 7,
}

impl StoredCode for EventStatus {
    const TYPE_NAME: &'static str = "event status";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Draft),
            2 => Some(Self::Published),
            3 => Some(Self::Live),
            4 => Some(Self::SoldOut),
            5 => Some(Self::Cancelled),
            6 => Some(Self::Postponed),
            7 => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Who can discover an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum EventVisibility {
    #[default]
    Public = 1,
    Private = 2,
    Unlisted = 3,
}

impl StoredCode for EventVisibility {
    const TYPE_NAME: &'static str = "event visibility";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Public),
            2 => Some(Self::Private),
            3 => Some(Self::Unlisted),
            _ => None,
        }
    }
}

/// Kind of place a venue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum VenueType {
    Club = 1,
    #[default]
    Bar = 2,
    Theater = 3,
    Arena = 4,
    Stadium = 5,
    Outdoor = 6,
    Private = 7,
    Online = 8,
    Other = 9,
}

impl StoredCode for VenueType {
    const TYPE_NAME: &'static str = "venue type";

    fn code(self) -> i16 {
        self as i16
    }

    fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(Self::Club),
            2 => Some(Self::Bar),
            3 => Some(Self::Theater),
            4 => Some(Self::Arena),
            5 => Some(Self::Stadium),
            6 => Some(Self::Outdoor),
            7 => Some(Self::Private),
            8 => Some(Self::Online),
            9 => Some(Self::Other),
            _ => None,
        }
    }
}
