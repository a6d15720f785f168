//! Signed-in user, injected into the comment store.
//!
//! The store never reads a global; it asks an `IdentityProvider` each time
//! it needs the current user.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// The signed-in user as reported by the auth provider.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentUser {
    pub uid: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl CurrentUser {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Display name, or the local part of the email when no display name
    /// is set.
    #[must_use]
    pub fn effective_name(&self) -> Option<String> {
        if let Some(name) = self.display_name.as_deref().filter(|n| !n.is_empty()) {
            return Some(name.to_string());
        }
        let email = self.email.as_deref()?;
        let local = email.split('@').next().unwrap_or_default();
        (!local.is_empty()).then(|| local.to_string())
    }
}

/// Read-only access to the signed-in user.
pub trait IdentityProvider {
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Fixed identity, for tests and server-side rendering.
#[derive(Clone, Debug, Default)]
pub struct StaticIdentity(pub Option<CurrentUser>);

impl StaticIdentity {
    #[must_use]
    pub fn signed_in(user: CurrentUser) -> Self {
        Self(Some(user))
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self(None)
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.0.clone()
    }
}

/// The auth session publishes through a watch channel; readers see the
/// latest value.
impl IdentityProvider for watch::Receiver<Option<CurrentUser>> {
    fn current_user(&self) -> Option<CurrentUser> {
        self.borrow().clone()
    }
}
