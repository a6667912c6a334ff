//! User Model

use serde::{Deserialize, Serialize};

/// Customer profile as returned by the admin user lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}
