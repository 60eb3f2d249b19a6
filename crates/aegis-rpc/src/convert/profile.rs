//! User profile projection.

use aegis_core::Timestamp;
use aegis_core::boxing::{box_i64, box_string, unbox_string};
use aegis_core::models::profile::UserProfile;
use uuid::Uuid;

use crate::convert::enums::EnumConverter;
use crate::wire::profile::{UpsertUserProfileRequest, UserProfileInfo};

#[derive(Debug, Clone, Copy, Default)]
pub struct UserProfileProjector {
    enums: EnumConverter,
}

impl UserProfileProjector {
    pub fn new(enums: EnumConverter) -> Self {
        Self { enums }
    }

    pub fn to_wire(&self, profile: Option<&UserProfile>) -> Option<UserProfileInfo> {
        profile.map(|p| self.project(p))
    }

    pub fn project(&self, profile: &UserProfile) -> UserProfileInfo {
        UserProfileInfo {
            user_id: Some(profile.user_id.to_string()),
            real_name: box_string(&profile.real_name),
            gender: self.enums.to_wire(profile.gender),
            birthday: profile.birthday.and_then(box_i64),
            title: box_string(&profile.title),
            specialties: profile.specialties.clone(),
            bio: box_string(&profile.bio),
            avatar_url: box_string(&profile.avatar_url),
            created_at: box_i64(profile.created_at),
            updated_at: box_i64(profile.updated_at),
        }
    }

    /// Merge an upsert into the stored profile, or into a blank one when
    /// the user has none yet.
    pub fn apply_upsert(
        &self,
        existing: Option<UserProfile>,
        req: &UpsertUserProfileRequest,
        user_id: Uuid,
        now: Timestamp,
    ) -> UserProfile {
        let mut profile = existing.unwrap_or_else(|| UserProfile {
            user_id,
            created_at: now,
            ..Default::default()
        });
        if let Some(real_name) = &req.real_name {
            profile.real_name = real_name.clone();
        }
        if req.gender.is_some() {
            profile.gender = self.enums.from_wire(req.gender);
        }
        if let Some(birthday) = req.birthday {
            profile.birthday = (birthday != 0).then_some(birthday);
        }
        if let Some(title) = &req.title {
            profile.title = title.clone();
        }
        if let Some(specialties) = &req.specialties {
            profile.specialties = specialties.clone();
        }
        if let Some(bio) = &req.bio {
            profile.bio = bio.clone();
        }
        if req.avatar_url.is_some() {
            profile.avatar_url = unbox_string(req.avatar_url.as_deref());
        }
        profile.updated_at = now;
        profile
    }
}
