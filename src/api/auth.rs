//! Role-based authorization for the roster API.
//!
//! The caller's identity and roles come from request headers set by the
//! gateway in front of the service: `x-user` names the principal and
//! `x-roles` lists its roles, comma separated. Creating employees requires
//! `ADMIN`; reading the roster or its export requires `USER` or `ADMIN`.

use std::str::FromStr;

use axum::http::{HeaderMap, StatusCode};

use crate::storage::Principal;

use super::request::principal_from_headers;
use super::response::{ApiError, ApiErrorResponse};

/// Header listing the caller's roles.
pub const ROLES_HEADER: &str = "x-roles";

/// Roles allowed to create employees.
pub const CREATE_ROLES: &[Role] = &[Role::Admin];

/// Roles allowed to list or export employees.
pub const READ_ROLES: &[Role] = &[Role::User, Role::Admin];

/// A role a caller may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Full access, including creating employees.
    Admin,
    /// Read-only access.
    User,
}

impl Role {
    /// Returns the role's name as it appears in the roles header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    /// Parses a role name, ignoring case and an optional `ROLE_` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        match name.strip_prefix("ROLE_").unwrap_or(&name) {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// The principal and roles a request acts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    principal: Principal,
    roles: Vec<Role>,
}

impl Caller {
    /// Creates a caller with the given principal and roles.
    pub fn new(principal: Principal, roles: Vec<Role>) -> Self {
        Self { principal, roles }
    }

    /// Reads the caller from request headers. Unknown role names are ignored.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let roles = headers
            .get(ROLES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(',')
                    .filter_map(|role| role.parse().ok())
                    .collect()
            })
            .unwrap_or_default();

        Self::new(principal_from_headers(headers), roles)
    }

    /// Returns the acting principal.
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Returns true if the caller holds any of `allowed`.
    pub fn has_any_role(&self, allowed: &[Role]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }

    /// Checks that the caller holds one of `allowed`.
    ///
    /// # Errors
    ///
    /// Returns a `403 FORBIDDEN` error response otherwise.
    pub fn authorize(&self, allowed: &[Role]) -> Result<(), ApiErrorResponse> {
        if self.has_any_role(allowed) {
            return Ok(());
        }

        let required = allowed
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(" or ");
        Err(ApiErrorResponse::new(
            StatusCode::FORBIDDEN,
            ApiError::with_details(
                "FORBIDDEN",
                format!("User '{}' is not allowed to perform this action", self.principal),
                format!("Requires role {}", required),
            ),
        ))
    }
}
