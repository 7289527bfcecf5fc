use std::collections::BTreeSet;

/// Current user and roles, passed explicitly to permission-aware views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: String,
    pub roles: BTreeSet<String>,
}

/// Restricts a view to the records a user may act on: those whose `field`
/// (a single user id or a list of them) contains the current user id. Users
/// holding one of `bypass_roles` see everything.
#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Deserialize)]
pub struct AccessScope {
    pub field: String,
    #[serde(default)]
    pub bypass_roles: BTreeSet<String>,
}

// --

impl AuthContext {
    pub fn new<I, S>(user_id: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user_id: user_id.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

impl AccessScope {
    pub fn new<I, S>(field: impl Into<String>, bypass_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            field: field.into(),
            bypass_roles: bypass_roles.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn bypassed_by(&self, auth: &AuthContext) -> bool {
        self.bypass_roles.iter().any(|r| auth.has_role(r))
    }
}
