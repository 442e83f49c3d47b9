//! Value objects - immutable types that represent domain concepts

mod codes;
mod enums;
mod request_status;

pub use codes::StoredCode;
pub use enums::{EventCategory, EventStatus, EventVisibility, SongDifficulty, UserRole, VenueType};
pub use request_status::SongRequestStatus;
