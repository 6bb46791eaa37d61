use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use monolog_core::models::profile::{Profile, ProfileUpdate};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status { status: u16 },
}

/// Access to the profile endpoint.
///
/// Methods return boxed futures for dyn compatibility.
pub trait ProfileApi: Send + Sync {
    /// `GET /api/profile`.
    fn fetch_profile(&self) -> BoxFuture<'_, Result<Profile, ApiClientError>>;

    /// `POST /api/profile`; resolves to the full record the server echoes.
    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> BoxFuture<'_, Result<Profile, ApiClientError>>;
}

impl<A: ProfileApi + ?Sized> ProfileApi for &A {
    fn fetch_profile(&self) -> BoxFuture<'_, Result<Profile, ApiClientError>> {
        (**self).fetch_profile()
    }

    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> BoxFuture<'_, Result<Profile, ApiClientError>> {
        (**self).update_profile(update)
    }
}

/// [`ProfileApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProfileApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProfileApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn profile_url(&self) -> String {
        format!("{}/api/profile", self.base_url)
    }

    async fn read_profile(response: reqwest::Response) -> Result<Profile, ApiClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<Profile>().await?)
    }
}

impl ProfileApi for HttpProfileApi {
    fn fetch_profile(&self) -> BoxFuture<'_, Result<Profile, ApiClientError>> {
        Box::pin(async move {
            let url = self.profile_url();
            tracing::debug!(%url, "fetching profile");
            let response = self.http.get(&url).send().await?;
            Self::read_profile(response).await
        })
    }

    fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> BoxFuture<'_, Result<Profile, ApiClientError>> {
        Box::pin(async move {
            let url = self.profile_url();
            tracing::debug!(%url, "updating profile");
            let response = self.http.post(&url).json(&update).send().await?;
            Self::read_profile(response).await
        })
    }
}
