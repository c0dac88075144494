use crate::error::ProfileResult;
use crate::profile::{LikeSummary, Profile, ProfileUpdate, VisitorName};
use crate::{FetchProfile, LikeProfile, System, SystemClock, Timestamp, UpdateProfile};

use parking_lot::Mutex;
use std::sync::Arc;
use time::OffsetDateTime;

/// Shared handle to the one in-memory profile.
///
/// Every check-then-act sequence runs under a single lock acquisition, so concurrent
/// likes and unlikes cannot break the membership invariant.
#[derive(Clone)]
pub struct ProfileStore<S = SystemClock> {
    profile: Arc<Mutex<Profile>>,
    system: S,
}

impl<S: System> ProfileStore<S> {
    pub fn new(system: S) -> Self {
        let joined_date = Timestamp(system.get_current_time());

        Self {
            profile: Arc::new(Mutex::new(Profile::new(joined_date))),
            system,
        }
    }

    /// Another handle onto the same profile that reads time from `system`.
    pub fn with_clock<T: System>(&self, system: T) -> ProfileStore<T> {
        ProfileStore {
            profile: self.profile.clone(),
            system,
        }
    }
}

impl<S: System> System for ProfileStore<S> {
    fn get_current_time(&self) -> OffsetDateTime {
        self.system.get_current_time()
    }
}

impl<S> FetchProfile for ProfileStore<S> {
    fn fetch_profile(&self) -> Profile {
        self.profile.lock().clone()
    }
}

impl<S: System> UpdateProfile for ProfileStore<S> {
    fn update_profile(&self, update: ProfileUpdate) -> Profile {
        let now = Timestamp(self.system.get_current_time());

        let mut profile = self.profile.lock();
        profile.apply_update(update, now);

        tracing::debug!("profile updated at {now}");
        profile.clone()
    }
}

impl<S> LikeProfile for ProfileStore<S> {
    fn like(&self, visitor: VisitorName) -> ProfileResult<LikeSummary> {
        let result = self.profile.lock().like(&visitor);

        match &result {
            Ok(summary) => tracing::debug!("{visitor} liked the profile ({})", summary.likes),
            Err(e) => tracing::debug!("like by {visitor} rejected: {e}"),
        }
        result
    }

    fn unlike(&self, visitor: VisitorName) -> ProfileResult<LikeSummary> {
        let result = self.profile.lock().unlike(&visitor);

        match &result {
            Ok(summary) => tracing::debug!("{visitor} unliked the profile ({})", summary.likes),
            Err(e) => tracing::debug!("unlike by {visitor} rejected: {e}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;
    use crate::FixedClock;

    use assert_matches::*;

    fn test_time() -> OffsetDateTime {
        OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap()
    }

    fn test_store() -> ProfileStore<FixedClock> {
        ProfileStore::new(FixedClock(test_time()))
    }

    #[test]
    fn joined_date_comes_from_clock() {
        let profile = test_store().fetch_profile();

        assert_eq!(Timestamp(test_time()), profile.joined_date());
        assert_eq!(None, profile.updated_at());
    }

    #[test]
    fn clones_share_the_same_profile() {
        let store = test_store();
        let other = store.clone();

        store.like(VisitorName::resolve(Some("Bob"))).unwrap();

        assert_eq!(1, other.fetch_profile().likes());
        assert_matches!(
            other.like(VisitorName::resolve(Some("Bob"))),
            Err(ProfileError::AlreadyLiked { likes: 1 })
        );
    }

    #[test]
    fn update_stamps_updated_at() {
        let store = test_store();

        let profile = store.update_profile(ProfileUpdate {
            title: Some(Some(serde_json::json!("Engineer"))),
            ..Default::default()
        });

        assert_eq!(serde_json::json!("Engineer"), profile.title);
        assert_eq!(Some(Timestamp(test_time())), profile.updated_at());
        assert_eq!(profile, store.fetch_profile());
    }

    #[test]
    fn parallel_likes_and_unlikes_keep_invariants() {
        let store = test_store();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let store = store.clone();
                scope.spawn(move || {
                    for round in 0..200 {
                        let name = format!("v{}", round % 10);
                        let visitor = VisitorName::resolve(Some(name.as_str()));
                        let _ = if (worker + round) % 2 == 0 {
                            store.like(visitor)
                        } else {
                            store.unlike(visitor)
                        };
                    }
                });
            }
        });

        let profile = store.fetch_profile();
        let mut names = profile.liked_by().to_vec();
        names.sort();
        names.dedup();

        assert_eq!(profile.likes() as usize, profile.liked_by().len());
        assert_eq!(names.len(), profile.liked_by().len());
        assert!(profile.likes() <= 10);
    }
}
