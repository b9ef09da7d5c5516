// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roles and authorization checks.
//!
//! There is no real authentication: the role travels as a plain request
//! parameter and is trusted as stated. Authorization still gates every
//! mutating operation so the server surface stays honest about who may
//! do what.

use std::str::FromStr;

use slotboard_domain::FacultyId;

use crate::error::{ApiError, AuthError};

/// Actor roles for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: dashboard operators with corrective authority.
    ///
    /// Admins may:
    /// - decide (approve or reject) leave and change requests
    /// - view any faculty member's requests and notifications
    /// - run the timetable generation flow
    Admin,
    /// Faculty role: teaching staff acting on their own records.
    ///
    /// Faculty may:
    /// - submit leave and change requests for themselves
    /// - dismiss their own notifications
    /// - run the suggestion flow against their own schedule
    Faculty,
}

impl Role {
    /// Returns the canonical role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Faculty => "Faculty",
        }
    }
}

impl FromStr for Role {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else if s.eq_ignore_ascii_case("faculty") {
            Ok(Self::Faculty)
        } else {
            Err(ApiError::InvalidInput {
                field: String::from("role"),
                message: format!("Unknown role '{s}'. Expected 'Admin' or 'Faculty'"),
            })
        }
    }
}

/// An acting identity with an associated role.
///
/// Faculty actors carry the faculty id they act as; admin actors carry
/// none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The role assigned to this actor.
    pub role: Role,
    /// The faculty identity, present for faculty actors.
    pub faculty_id: Option<FacultyId>,
}

impl AuthenticatedActor {
    /// Creates an admin actor.
    #[must_use]
    pub const fn admin() -> Self {
        Self {
            role: Role::Admin,
            faculty_id: None,
        }
    }

    /// Creates a faculty actor acting as the given faculty member.
    #[must_use]
    pub const fn faculty(faculty_id: FacultyId) -> Self {
        Self {
            role: Role::Faculty,
            faculty_id: Some(faculty_id),
        }
    }
}

/// Authorization checks for dashboard operations.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that an actor may decide a request.
    ///
    /// Only Admin actors may approve or reject requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_decide_request(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Faculty => Err(AuthError::Unauthorized {
                action: String::from("decide_request"),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks that an actor may submit a request on behalf of a faculty
    /// member.
    ///
    /// Admins may submit for anyone; faculty only for themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if a faculty actor targets another faculty id.
    pub fn authorize_submit_request(
        actor: &AuthenticatedActor,
        owner: &FacultyId,
    ) -> Result<(), AuthError> {
        Self::authorize_owner_scoped(actor, owner, "submit_request")
    }

    /// Checks that an actor may view or dismiss notifications owned by a
    /// faculty member.
    ///
    /// # Errors
    ///
    /// Returns an error if a faculty actor targets another faculty id.
    pub fn authorize_notification_access(
        actor: &AuthenticatedActor,
        owner: &FacultyId,
    ) -> Result<(), AuthError> {
        Self::authorize_owner_scoped(actor, owner, "notification_access")
    }

    fn authorize_owner_scoped(
        actor: &AuthenticatedActor,
        owner: &FacultyId,
        action: &str,
    ) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Faculty => {
                if actor.faculty_id.as_ref() == Some(owner) {
                    Ok(())
                } else {
                    Err(AuthError::Unauthorized {
                        action: String::from(action),
                        required_role: String::from("owning Faculty or Admin"),
                    })
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn faculty_id(value: &str) -> FacultyId {
        FacultyId::new(value).unwrap()
    }

    #[test]
    fn test_role_parsing_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Faculty".parse::<Role>().unwrap(), Role::Faculty);
        assert!("student".parse::<Role>().is_err());
    }

    #[test]
    fn test_only_admin_decides() {
        let admin = AuthenticatedActor::admin();
        let faculty = AuthenticatedActor::faculty(faculty_id("F001"));

        assert!(AuthorizationService::authorize_decide_request(&admin).is_ok());
        assert!(AuthorizationService::authorize_decide_request(&faculty).is_err());
    }

    #[test]
    fn test_faculty_submits_only_for_themselves() {
        let actor = AuthenticatedActor::faculty(faculty_id("F001"));

        assert!(AuthorizationService::authorize_submit_request(&actor, &faculty_id("F001")).is_ok());
        assert!(
            AuthorizationService::authorize_submit_request(&actor, &faculty_id("F002")).is_err()
        );
    }

    #[test]
    fn test_admin_accesses_any_notification_partition() {
        let admin = AuthenticatedActor::admin();
        assert!(
            AuthorizationService::authorize_notification_access(&admin, &faculty_id("F002"))
                .is_ok()
        );
    }
}
