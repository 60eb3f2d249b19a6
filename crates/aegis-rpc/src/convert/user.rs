//! User account projection. The password hash is never projected.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_i64, box_string, box_uuid, unbox_string};
use aegis_core::models::user::{User, UserStatus};
use uuid::Uuid;

use crate::convert::enums::EnumConverter;
use crate::wire::user::{RegisterUserRequest, UpdateUserRequest, UserInfo};

#[derive(Debug, Clone, Copy, Default)]
pub struct UserProjector {
    enums: EnumConverter,
}

impl UserProjector {
    pub fn new(enums: EnumConverter) -> Self {
        Self { enums }
    }

    pub fn to_wire(&self, user: Option<&User>) -> Option<UserInfo> {
        user.map(|u| self.project(u))
    }

    pub fn project(&self, user: &User) -> UserInfo {
        UserInfo {
            id: Some(user.id.to_string()),
            username: box_string(&user.username),
            email: box_string(&user.email),
            phone: box_string(&user.phone),
            status: self.enums.to_wire(user.status),
            created_by: box_uuid(user.created_by),
            updated_by: box_uuid(user.updated_by),
            created_at: box_i64(user.created_at),
            updated_at: box_i64(user.updated_at),
        }
    }

    pub fn to_wire_list(&self, users: &[User]) -> Vec<UserInfo> {
        users.iter().map(|u| self.project(u)).collect()
    }

    /// `password_hash` is computed by the caller; the raw password never
    /// reaches the projector.
    pub fn from_register(
        &self,
        req: &RegisterUserRequest,
        password_hash: String,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> User {
        User {
            id: Uuid::new_v4(),
            username: unbox_string(req.username.as_deref()),
            email: unbox_string(req.email.as_deref()),
            phone: unbox_string(req.phone.as_deref()),
            password_hash,
            status: UserStatus::Active,
            created_by: caller,
            updated_by: caller,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(
        &self,
        mut user: User,
        req: &UpdateUserRequest,
        caller: Option<Uuid>,
        now: Timestamp,
    ) -> User {
        if let Some(email) = &req.email {
            user.email = email.clone();
        }
        if let Some(phone) = &req.phone {
            user.phone = phone.clone();
        }
        if req.status.is_some() {
            user.status = self.enums.from_wire(req.status);
        }
        user.updated_by = caller;
        user.updated_at = now;
        user
    }
}
