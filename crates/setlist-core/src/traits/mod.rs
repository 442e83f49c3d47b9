mod repositories;
mod store;

pub use repositories::{
    ArtistProfileRepository, EventRepository, GenreRepository, PageRequest, RepertoireRepository,
    SongRepository, SongRequestRepository, UserRepository, VenueProfileRepository,
};
pub use store::{Entity, RepoResult, StorageHealth, Store};
