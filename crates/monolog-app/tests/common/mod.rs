#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use monolog_app::api::{ApiClientError, BoxFuture, ProfileApi};
use monolog_core::models::profile::{Profile, ProfileUpdate};

/// In-process stand-in for the profile endpoint.
pub struct StubApi {
    profile: Mutex<Profile>,
    pub fail_fetch: bool,
    pub fail_update: bool,
    fetches: AtomicUsize,
    updates: AtomicUsize,
}

impl StubApi {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: Mutex::new(profile),
            fail_fetch: false,
            fail_update: false,
            fetches: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
        }
    }

    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Self::new(test_profile())
        }
    }

    pub fn failing_update() -> Self {
        Self {
            fail_update: true,
            ..Self::new(test_profile())
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl ProfileApi for StubApi {
    fn fetch_profile(&self) -> BoxFuture<'_, Result<Profile, ApiClientError>> {
        Box::pin(async move {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch {
                return Err(ApiClientError::Status { status: 500 });
            }
            Ok(self.profile.lock().unwrap().clone())
        })
    }

    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> BoxFuture<'_, Result<Profile, ApiClientError>> {
        Box::pin(async move {
            self.updates.fetch_add(1, Ordering::SeqCst);
            if self.fail_update {
                return Err(ApiClientError::Status { status: 500 });
            }
            let mut profile = self.profile.lock().unwrap();
            profile
                .apply(update)
                .map_err(|_| ApiClientError::Status { status: 400 })?;
            Ok(profile.clone())
        })
    }
}

pub fn test_profile() -> Profile {
    serde_json::from_str(r#"{"id":1,"name":"Test User","email":"test@example.com"}"#).unwrap()
}
