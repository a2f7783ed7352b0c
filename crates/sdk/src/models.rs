//! Response models for the Staffbase API.
//!
//! Staffbase payloads are loosely shaped: list endpoints answer either with a
//! bare array or with a `{"data": [...]}` envelope, and any field may be
//! missing, `null`, or of the wrong type. Every field here is therefore
//! optional or defaulted, and a malformed field falls back to its default
//! instead of failing the surrounding list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A list endpoint response: bare list, `data` envelope, or something else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListOrEnvelope<T> {
    List(Vec<T>),
    Envelope { data: Vec<T> },
    Other(Value),
}

impl<T> ListOrEnvelope<T> {
    /// The carried list, or `None` when the payload was neither shape.
    pub fn into_list(self) -> Option<Vec<T>> {
        match self {
            Self::List(items) | Self::Envelope { data: items } => Some(items),
            Self::Other(_) => None,
        }
    }
}

/// Locale code to content object, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localized(pub Map<String, Value>);

impl Localized {
    /// First locale in response order together with its content.
    ///
    /// This is whatever Staffbase listed first, not a "default" locale.
    pub fn representative(&self) -> Option<(&str, LocalizedContent)> {
        let (locale, content) = self.0.iter().next()?;
        Some((locale.as_str(), LocalizedContent::from_value(content)))
    }
}

/// Text fields of one locale entry. Missing or non-string fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedContent {
    pub title: String,
    pub teaser: String,
    pub content: String,
}

impl LocalizedContent {
    fn from_value(value: &Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        Self {
            title: text("title"),
            teaser: text("teaser"),
            content: text("content"),
        }
    }
}

/// A space (location / sub-instance).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// A news post from the global branch or a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default = "blank")]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient")]
    pub contents: Localized,
    #[serde(default = "blank")]
    pub published_at: Value,
}

/// A content page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default = "blank")]
    pub id: Value,
    #[serde(default, deserialize_with = "lenient")]
    pub contents: Localized,
    #[serde(default = "blank")]
    pub updated_at: Value,
}

/// A node of a space's news menu: a `news` channel, a folder, or anything
/// else Staffbase puts there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsNode {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub contents: Localized,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(rename = "installationID", default)]
    pub installation_id: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub children: Vec<NewsNode>,
}

impl NewsNode {
    pub fn is_channel(&self) -> bool {
        self.node_type.as_deref() == Some("news")
    }
}

fn blank() -> Value {
    Value::String(String::new())
}

/// `T` if the value has the expected shape, `T::default()` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_and_list_unwrap_identically() {
        let bare: ListOrEnvelope<Value> = serde_json::from_value(json!([{"id": "1"}])).unwrap();
        let wrapped: ListOrEnvelope<Value> =
            serde_json::from_value(json!({"data": [{"id": "1"}], "total": 1})).unwrap();

        assert_eq!(bare.into_list(), wrapped.into_list());
    }

    #[test]
    fn test_other_shape_has_no_list() {
        let other: ListOrEnvelope<Value> =
            serde_json::from_value(json!({"message": "nope"})).unwrap();
        assert!(matches!(other, ListOrEnvelope::Other(_)));
        assert!(other.into_list().is_none());
    }

    #[test]
    fn test_representative_locale_is_first_in_response_order() {
        let post: Post = serde_json::from_value(json!({
            "id": "p1",
            "contents": {
                "fr_FR": {"title": "Bonjour", "teaser": "salut"},
                "en_US": {"title": "Hello"}
            }
        }))
        .unwrap();

        let (locale, content) = post.contents.representative().unwrap();
        assert_eq!(locale, "fr_FR");
        assert_eq!(content.title, "Bonjour");
        assert_eq!(content.teaser, "salut");
        assert_eq!(content.content, "");
    }

    #[test]
    fn test_post_defaults() {
        let post: Post = serde_json::from_value(json!({"contents": null})).unwrap();
        assert_eq!(post.id, json!(""));
        assert_eq!(post.published_at, json!(""));
        assert!(post.contents.representative().is_none());
    }

    #[test]
    fn test_malformed_contents_keep_the_list() {
        let posts: ListOrEnvelope<Post> = serde_json::from_value(json!({
            "data": [
                {"id": "good", "contents": {"en": {"title": "Kept"}}},
                {"id": "empty-locales", "contents": []},
                {"id": "string-locales", "contents": "n/a"}
            ]
        }))
        .unwrap();

        let posts = posts.into_list().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].contents.representative().unwrap().1.title, "Kept");
        assert!(posts[1].contents.representative().is_none());
        assert!(posts[2].contents.representative().is_none());
    }

    #[test]
    fn test_malformed_node_fields_fall_back() {
        let nodes: ListOrEnvelope<NewsNode> = serde_json::from_value(json!([
            {"type": 7, "contents": [], "children": {"oops": true}},
            {"type": "news", "id": "c1", "children": [{"type": "news", "id": "c2"}]}
        ]))
        .unwrap();

        let nodes = nodes.into_list().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].node_type, None);
        assert!(nodes[0].children.is_empty());
        assert!(nodes[1].is_channel());
        assert_eq!(nodes[1].children[0].id, Some(json!("c2")));

        let space: Space = serde_json::from_value(json!({"id": "1", "name": 42})).unwrap();
        assert_eq!(space.name, "");
    }

    #[test]
    fn test_news_node_tree() {
        let node: NewsNode = serde_json::from_value(json!({
            "type": "folder",
            "children": [
                {"type": "news", "installationID": "inst-1", "id": "n1"}
            ]
        }))
        .unwrap();

        assert!(!node.is_channel());
        assert_eq!(node.children.len(), 1);
        assert!(node.children[0].is_channel());
        assert_eq!(node.children[0].installation_id, Some(json!("inst-1")));
    }
}
