use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The user-identity record shown on the profile view.
///
/// Covers both the short `{ name, email }` shape and the longer
/// `{ name, title, description, skills, interests }` shape. Unknown fields
/// are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Profile {
    /// The record served when no seed file is configured.
    pub fn sample() -> Self {
        Self {
            name: "Your Name".to_string(),
            email: None,
            title: Some("ソフトウェアエンジニア".to_string()),
            description: Some(
                "技術とクリエイティビティを組み合わせることが好きなエンジニアです。".to_string(),
            ),
            skills: [
                "JavaScript/TypeScript",
                "React",
                "Node.js",
                "Express",
                "Git",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            interests: ["ウェブ開発", "UI/UXデザイン", "新技術の学習"]
                .into_iter()
                .map(String::from)
                .collect(),
            extra: serde_json::Map::new(),
        }
    }

    /// Apply an update, replacing only the editable fields it names.
    pub fn apply(&mut self, update: ProfileUpdate) -> Result<(), CoreError> {
        let name = update.name.trim();
        if name.is_empty() {
            return Err(CoreError::BlankField("name".to_string()));
        }
        self.name = name.to_string();
        Ok(())
    }
}

/// Body of `POST /api/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
}
