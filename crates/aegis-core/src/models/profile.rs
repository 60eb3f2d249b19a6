//! User profile domain model and its persisted row form.
//!
//! Specialties are stored in a single text column as a JSON array.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Timestamp;
use crate::boxing::{decode_string_list, encode_string_list};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Other,
}

/// Personal and professional attributes of a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub real_name: String,
    pub gender: Gender,
    /// Unix seconds; `None` when unknown.
    pub birthday: Option<Timestamp>,
    pub title: String,
    pub specialties: Vec<String>,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Storage row for [`UserProfile`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfileRow {
    pub user_id: Uuid,
    pub real_name: String,
    pub gender: Gender,
    pub birthday: Option<Timestamp>,
    pub title: String,
    /// JSON array, or `""` for no specialties.
    pub specialties: String,
    pub bio: String,
    pub avatar_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfileRow {
    pub fn from_model(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user_id,
            real_name: profile.real_name.clone(),
            gender: profile.gender,
            birthday: profile.birthday,
            title: profile.title.clone(),
            specialties: encode_string_list(&profile.specialties),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }

    pub fn into_model(self) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            real_name: self.real_name,
            gender: self.gender,
            birthday: self.birthday,
            title: self.title,
            specialties: decode_string_list(&self.specialties).unwrap_or_default(),
            bio: self.bio,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialties_persist_as_json() {
        let profile = UserProfile {
            user_id: Uuid::new_v4(),
            specialties: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        let row = UserProfileRow::from_model(&profile);
        assert_eq!(row.specialties, r#"["a","b"]"#);
        assert_eq!(row.into_model(), profile);
    }

    #[test]
    fn empty_specialties_persist_as_empty_string() {
        let profile = UserProfile::default();
        let row = UserProfileRow::from_model(&profile);
        assert_eq!(row.specialties, "");
        assert!(row.into_model().specialties.is_empty());
    }
}
