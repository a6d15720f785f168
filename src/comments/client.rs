//! HTTP access to the comments API.

use std::future::Future;

use reqwest::{Client, Response, Url};
use tracing::debug;

use super::model::{Comment, CommentId, CommentUpdate, NewComment};
use crate::core::{ApiConfig, ApiError};

/// Remote comment storage.
///
/// `list` returns comments oldest first. Deleting a comment also deletes
/// its replies.
pub trait CommentBackend: Send + Sync {
    fn list(&self, slug: &str) -> impl Future<Output = Result<Vec<Comment>, ApiError>> + Send;

    fn create(&self, comment: &NewComment) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update(
        &self,
        id: CommentId,
        content: &str,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(&self, id: CommentId) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// `reqwest` client for the comments endpoints under `ApiConfig`.
#[derive(Clone, Debug)]
pub struct CommentsClient {
    http: Client,
    api: ApiConfig,
}

impl CommentsClient {
    pub fn new(api: ApiConfig) -> Result<Self, ApiError> {
        Url::parse(&api.endpoint("/")).map_err(|_| ApiError::InvalidUrl(api.base_url.clone()))?;
        let http = Client::builder().timeout(api.timeout).build()?;
        Ok(Self { http, api })
    }

    #[must_use]
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    fn url(&self, path: &str) -> String {
        self.api.endpoint(path)
    }

}

/// Turn a non-2xx response into `ApiError::Status`.
pub(crate) fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            url: resp.url().to_string(),
        });
    }
    Ok(resp)
}

impl CommentBackend for CommentsClient {
    async fn list(&self, slug: &str) -> Result<Vec<Comment>, ApiError> {
        let url = self.url(&format!("/comments/{slug}"));
        let resp = check_status(self.http.get(&url).send().await?)?;
        let comments: Vec<Comment> = resp.json().await?;
        debug!(slug, count = comments.len(), "comments fetched");
        Ok(comments)
    }

    async fn create(&self, comment: &NewComment) -> Result<(), ApiError> {
        let url = self.url("/comments");
        check_status(self.http.post(&url).json(comment).send().await?)?;
        Ok(())
    }

    async fn update(&self, id: CommentId, content: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/comments/{id}"));
        let body = CommentUpdate {
            content: content.to_string(),
        };
        check_status(self.http.put(&url).json(&body).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> Result<(), ApiError> {
        let url = self.url(&format!("/comments/{id}"));
        check_status(self.http.delete(&url).send().await?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_base_url() {
        let api = ApiConfig::default().with_base_url("not a url");
        assert!(matches!(CommentsClient::new(api), Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_endpoint_paths() {
        let client = CommentsClient::new(ApiConfig::default()).unwrap();
        assert_eq!(client.url("/comments/pho"), "http://localhost:8000/api/comments/pho");
    }
}
