//! HTTP access to the notifications API.

use std::future::Future;

use reqwest::{Client, Url};
use tracing::debug;

use super::model::{Notification, NotificationId};
use crate::comments::client::check_status;
use crate::core::{ApiConfig, ApiError};

/// Remote notification storage, keyed by the recipient's uid.
///
/// `list` returns notifications newest first.
pub trait NotificationBackend: Send + Sync {
    fn list(&self, uid: &str) -> impl Future<Output = Result<Vec<Notification>, ApiError>> + Send;

    fn mark_read(&self, id: NotificationId) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn mark_all_read(&self, uid: &str) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete(&self, id: NotificationId) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_all(&self, uid: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// `reqwest` client for the notification endpoints.
#[derive(Clone, Debug)]
pub struct NotificationsClient {
    http: Client,
    api: ApiConfig,
}

impl NotificationsClient {
    pub fn new(api: ApiConfig) -> Result<Self, ApiError> {
        Url::parse(&api.endpoint("/")).map_err(|_| ApiError::InvalidUrl(api.base_url.clone()))?;
        let http = Client::builder().timeout(api.timeout).build()?;
        Ok(Self { http, api })
    }

    fn url(&self, path: &str) -> String {
        self.api.endpoint(path)
    }
}

impl NotificationBackend for NotificationsClient {
    async fn list(&self, uid: &str) -> Result<Vec<Notification>, ApiError> {
        let url = self.url(&format!("/notifications/{uid}"));
        let resp = check_status(self.http.get(&url).send().await?)?;
        let items: Vec<Notification> = resp.json().await?;
        debug!(uid, count = items.len(), "notifications fetched");
        Ok(items)
    }

    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError> {
        let url = self.url(&format!("/notifications/{id}/read"));
        check_status(self.http.put(&url).send().await?)?;
        Ok(())
    }

    async fn mark_all_read(&self, uid: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/notifications/read-all/{uid}"));
        check_status(self.http.put(&url).send().await?)?;
        Ok(())
    }

    async fn delete(&self, id: NotificationId) -> Result<(), ApiError> {
        let url = self.url(&format!("/notifications/{id}"));
        check_status(self.http.delete(&url).send().await?)?;
        Ok(())
    }

    async fn delete_all(&self, uid: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/notifications/delete-all/{uid}"));
        check_status(self.http.delete(&url).send().await?)?;
        Ok(())
    }
}
