//! JSON access layer used to talk to the homelab backend.

use hyper::ext::ReasonPhrase;
use reqwest::{
    Client, Response,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::debug;

use crate::config;
use crate::models::{
    Ack, ActionResult, Container, ContainerAction, ErrorBody, Health, ProductionProject,
    ProjectAction, ProjectFile,
};

const APPLICATION_JSON: &str = "application/json";

/// Errors returned by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered outside the 2xx range.
    ///
    /// `status_text` is the reason phrase from the status line, or the
    /// canonical one when the server sent none. `detail` is the `error`
    /// field of the backend's failure body, when it sent one.
    #[error("{status} {status_text}")]
    Status {
        status: u16,
        status_text: String,
        detail: Option<String>,
    },

    /// Connection, protocol or body decoding failure, passed through as-is.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Typed GET/POST against `base URL + path`
///
/// The base URL is either absolute or resolved against `origin`, the same
/// way a browser resolves a relative fetch against the page it runs on.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    origin: String,
    base: String,
}

impl ApiClient {
    /// Creates a client using the process-wide base URL.
    pub fn new(origin: &str) -> Self {
        Self::with_base(origin, config::api_base())
    }

    pub fn with_base(origin: &str, base: &str) -> Self {
        Self {
            http: Client::new(),
            origin: origin.trim_end_matches('/').to_string(),
            base: base.to_string(),
        }
    }

    /// Full request URL for `path`.
    pub fn url(&self, path: &str) -> String {
        if self.base.starts_with("http://") || self.base.starts_with("https://") {
            format!("{}{}", self.base, path)
        } else {
            format!("{}{}{}", self.origin, self.base, path)
        }
    }

    /// Issues a GET and decodes the JSON response into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, APPLICATION_JSON)
            .send()
            .await?;

        decode(response).await
    }

    /// Issues a POST with an optional JSON body and decodes the JSON response.
    ///
    /// With `None` the request carries no body at all, not a JSON `null`.
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!("POST {}", url);

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .header(ACCEPT, APPLICATION_JSON);
        if let Some(body) = body {
            request = request.json(body);
        }

        decode(request.send().await?).await
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        self.get("/api/health").await
    }

    /// All containers, stopped ones included.
    pub async fn containers(&self) -> Result<Vec<Container>, ApiError> {
        self.get("/api/docker/containers").await
    }

    pub async fn container_action(
        &self,
        id: &str,
        action: ContainerAction,
    ) -> Result<Ack, ApiError> {
        self.post(
            &format!("/api/docker/containers/{}/{}", id, action),
            None::<&()>,
        )
        .await
    }

    pub async fn production_projects(&self) -> Result<Vec<ProductionProject>, ApiError> {
        self.get("/api/production/projects").await
    }

    /// The project's `docker-compose.yml`.
    pub async fn production_compose(&self, name: &str) -> Result<ProjectFile, ApiError> {
        self.get(&format!("/api/production/projects/{}/compose", name))
            .await
    }

    /// The project's `.env`.
    pub async fn production_env(&self, name: &str) -> Result<ProjectFile, ApiError> {
        self.get(&format!("/api/production/projects/{}/env", name))
            .await
    }

    pub async fn production_action(
        &self,
        name: &str,
        action: ProjectAction,
    ) -> Result<ActionResult, ApiError> {
        self.post(
            &format!("/api/production/projects/{}/{}", name, action),
            None::<&()>,
        )
        .await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        debug!("{} answered {}", response.url(), status);
        let status_text = response
            .extensions()
            .get::<ReasonPhrase>()
            .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
            .or(status.canonical_reason())
            .unwrap_or_default()
            .to_string();
        let detail = response
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .map(|body| body.error);

        return Err(ApiError::Status {
            status: status.as_u16(),
            status_text,
            detail,
        });
    }

    Ok(response.json::<T>().await?)
}
