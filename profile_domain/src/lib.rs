pub mod error;
pub mod profile;
pub mod store;
pub mod timestamp;

pub use profile::{LikeSummary, Profile, ProfileUpdate, VisitorName, VisitorRequest};
pub use store::ProfileStore;
pub use timestamp::Timestamp;

use time::OffsetDateTime;

///
/// Mockable system abstraction
///
pub trait System {
    fn get_current_time(&self) -> OffsetDateTime;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl System for SystemClock {
    fn get_current_time(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock stuck at one instant, for deterministic timestamps.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub OffsetDateTime);

impl System for FixedClock {
    fn get_current_time(&self) -> OffsetDateTime {
        self.0
    }
}

pub trait FetchProfile {
    fn fetch_profile(&self) -> Profile;
}

pub trait UpdateProfile {
    fn update_profile(&self, update: ProfileUpdate) -> Profile;
}

pub trait LikeProfile {
    fn like(&self, visitor: VisitorName) -> error::ProfileResult<LikeSummary>;

    fn unlike(&self, visitor: VisitorName) -> error::ProfileResult<LikeSummary>;
}
