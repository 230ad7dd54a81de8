//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::models::{NewUser, UserPatch};

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub search: Option<String>,
    pub role: Option<String>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    /// Mandatory at creation; checked by the service so the rule holds
    /// for every transport
    pub password: Option<String>,

    pub phone: Option<String>,

    pub role: String,
}

/// Update user request
///
/// All fields optional; a supplied password is accepted and discarded.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    pub role: Option<String>,

    pub password: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
            phone: req.phone,
            role: req.role,
        }
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        UserPatch {
            name: req.name,
            email: req.email,
            phone: req.phone,
            role: req.role,
            password: req.password,
        }
    }
}
