use serde::{Deserialize, Serialize};

/// Article object as returned by `GET /api/articles`.
///
/// Only the fields the reader displays are kept; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiArticle {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub social_image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub readable_publish_date: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub user: ApiUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiUser {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
