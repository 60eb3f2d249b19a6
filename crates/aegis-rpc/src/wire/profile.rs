use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfileInfo {
    pub user_id: Option<String>,
    pub real_name: Option<String>,
    pub gender: Option<i32>,
    pub birthday: Option<i64>,
    pub title: Option<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpsertUserProfileRequest {
    pub user_id: Option<String>,
    pub real_name: Option<String>,
    pub gender: Option<i32>,
    pub birthday: Option<i64>,
    pub title: Option<String>,
    pub specialties: Option<Vec<String>>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
