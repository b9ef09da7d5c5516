// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use slotboard_domain::DomainError;

/// Authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authorization failed - the actor does not have permission.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A decision targeted a request that is already approved or rejected.
    RequestAlreadyDecided {
        /// The id of the already-decided request.
        request_id: u64,
    },
    /// The external completion service failed.
    ModelFailure {
        /// A human-readable description of the failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::RequestAlreadyDecided { request_id } => {
                write!(f, "Request {request_id} has already been decided")
            }
            Self::ModelFailure { message } => {
                write!(f, "Completion service failure: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidFacultyId(msg) => ApiError::InvalidInput {
            field: String::from("faculty_id"),
            message: msg,
        },
        DomainError::InvalidBatchId(msg) => ApiError::InvalidInput {
            field: String::from("batch_id"),
            message: format!("'{msg}' does not follow the batch naming convention"),
        },
        DomainError::InvalidRequestStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a valid request status"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Cannot transition request from {from} to {to}: {reason}"),
        },
        DomainError::InvalidWeekday(msg) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("'{msg}' is not a scheduled weekday"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}
