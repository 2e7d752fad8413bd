//! HTTP user directory client.
//!
//! Endpoints, relative to `DirectoryConfig::base_url`:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | all users | `GET /users` |
//! | pending teachers | `GET /teachers/pending` |
//! | approve | `POST /teachers/{id}/approve` |
//! | reject | `POST /teachers/{id}/reject` with `{"reason": string \| null}` |
//!
//! Every request carries a fresh `x-request-id` and, when configured, a
//! bearer token. Any non-2xx status is an error. Path segments such as the
//! teacher id are percent-encoded, so `/`, `?` and `#` stay inside the id.

use anyhow::{Context, anyhow};
use campusboard_config::DirectoryConfig;
use campusboard_core::{AppError, AppResult};
use campusboard_models::{Teacher, User, UserId};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use tracing::{debug, instrument};

use super::UserDirectoryService;

#[derive(Debug, Serialize)]
struct RejectTeacherRequest<'a> {
    reason: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: Client,
    config: DirectoryConfig,
}

impl HttpDirectory {
    /// Builds a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(config: DirectoryConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Appends `segments` to the base URL, encoding each one.
    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let base_url = &self.config.base_url;
        let mut url =
            Url::parse(base_url).with_context(|| format!("Invalid directory URL {base_url}"))?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("Directory URL {base_url} cannot take a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let request_id = uuid::Uuid::new_v4().to_string();
        let request = self
            .client
            .request(method, url)
            .header("x-request-id", request_id);

        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T>(&self, segments: &[&str]) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        let response = self
            .request(Method::GET, url.clone())
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Invalid response body from GET {url}"))
    }

    async fn post_teacher_action(
        &self,
        id: &UserId,
        action: &str,
        body: Option<&RejectTeacherRequest<'_>>,
    ) -> anyhow::Result<()> {
        let url = self.endpoint(&["teachers", id.as_str(), action])?;
        let mut request = self.request(Method::POST, url);
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await?.error_for_status()?;
        Ok(())
    }
}

impl UserDirectoryService for HttpDirectory {
    #[instrument(skip(self), fields(directory.operation = "fetch_all_users"))]
    async fn fetch_all_users(&self) -> AppResult<Vec<User>> {
        let users: Vec<User> = self
            .get_json(&["users"])
            .await
            .context("Failed to fetch users")
            .map_err(AppError::fetch)?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    #[instrument(skip(self), fields(directory.operation = "fetch_pending_teachers"))]
    async fn fetch_pending_teachers(&self) -> AppResult<Vec<Teacher>> {
        let teachers: Vec<Teacher> = self
            .get_json(&["teachers", "pending"])
            .await
            .context("Failed to fetch pending teachers")
            .map_err(AppError::fetch)?;

        debug!(count = teachers.len(), "Fetched pending teachers");
        Ok(teachers)
    }

    #[instrument(skip(self), fields(directory.operation = "approve_teacher", teacher_id = %id))]
    async fn approve_teacher(&self, id: &UserId) -> AppResult<()> {
        self.post_teacher_action(id, "approve", None)
            .await
            .with_context(|| format!("Failed to approve teacher {id}"))
            .map_err(AppError::remote_operation)?;

        Ok(())
    }

    #[instrument(skip(self, reason), fields(directory.operation = "reject_teacher", teacher_id = %id))]
    async fn reject_teacher(&self, id: &UserId, reason: Option<&str>) -> AppResult<()> {
        self.post_teacher_action(id, "reject", Some(&RejectTeacherRequest { reason }))
            .await
            .with_context(|| format!("Failed to reject teacher {id}"))
            .map_err(AppError::remote_operation)?;

        Ok(())
    }
}
