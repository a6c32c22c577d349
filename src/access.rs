//! Advisory role policy shared with the browser gate in `frontend/auth.js`.
//!
//! Nothing here is enforced by the API. The login response carries the
//! caller's [`Capabilities`] so the front-end can decide which controls to
//! render, and `GET /api/access` answers whether a page may be shown for a
//! stored session.

use std::{fmt, str::FromStr};

use sea_orm::ActiveEnum;
use serde::Serialize;
use utoipa::ToSchema;

pub use crate::entity::users::Role;

pub const LOGIN_PAGE: &str = "login.html";
pub const INDEX_PAGE: &str = "index.html";
pub const SUBMISSION_QUEUE_PAGE: &str = "admin-submissions.html";

const EVERYONE: &[Role] = &[Role::Admin, Role::Manager, Role::Viewer];
const STAFF: &[Role] = &[Role::Admin, Role::Manager];

impl Role {
    pub fn capabilities(self) -> Capabilities {
        let staff = STAFF.contains(&self);
        Capabilities {
            can_edit: staff,
            can_delete: staff,
            can_add: staff,
            can_record_sales: staff,
            can_review_submissions: staff,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role `{}`", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::try_from_value(&s.to_string()).map_err(|_| UnknownRole(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub can_edit: bool,
    pub can_delete: bool,
    pub can_add: bool,
    pub can_record_sales: bool,
    pub can_review_submissions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    Allow,
    RedirectToLogin,
    Deny {
        message: &'static str,
        redirect: &'static str,
    },
}

/// Roles that may open a page. Only the submission queue is restricted.
fn page_roles(page: &str) -> &'static [Role] {
    if page.trim_start_matches('/') == SUBMISSION_QUEUE_PAGE {
        STAFF
    } else {
        EVERYONE
    }
}

/// Gate for a whole page: no session goes to login, a denied role goes back
/// to the index.
pub fn check_page_access(role: Option<Role>, page: &str) -> Gate {
    match role {
        None => Gate::RedirectToLogin,
        Some(role) if page_roles(page).contains(&role) => Gate::Allow,
        Some(_) => Gate::Deny {
            message: "Access Denied! You do not have permission to view this page.",
            redirect: INDEX_PAGE,
        },
    }
}

/// Wire form of a [`Gate`] decision for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageAccess {
    pub page: String,
    pub allowed: bool,
    pub message: Option<String>,
    pub redirect: Option<String>,
}

impl PageAccess {
    pub fn new(page: &str, gate: Gate) -> Self {
        let (allowed, message, redirect) = match gate {
            Gate::Allow => (true, None, None),
            Gate::RedirectToLogin => (false, Some("Please log in"), Some(LOGIN_PAGE)),
            Gate::Deny { message, redirect } => (false, Some(message), Some(redirect)),
        };
        Self {
            page: page.to_string(),
            allowed,
            message: message.map(str::to_string),
            redirect: redirect.map(str::to_string),
        }
    }
}
