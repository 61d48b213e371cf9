//! Typed payloads and their plain-value form.
//!
//! A [`Model`] is a serde type whose plain form is a `serde_json::Value`
//! with every null stripped. Request bodies and typed responses both go
//! through that form.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{Error, Result, strip_nulls};

/// Contract shared by request and response payload types.
///
/// Implementors only need the serde derives; unknown input fields are
/// ignored on decode, so models stay forward compatible as long as they do
/// not opt into `deny_unknown_fields`.
///
/// # Example
///
/// ```
/// use livere_core::Model;
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Page {
///     #[serde(skip_serializing_if = "Option::is_none")]
///     count: Option<u64>,
/// }
///
/// impl Model for Page {}
///
/// let page = Page::from_plain_value(json!({"count": 42, "extra": true})).expect("decode");
/// assert_eq!(page.count, Some(42));
/// assert_eq!(page.to_plain_value().expect("encode"), json!({"count": 42}));
/// ```
pub trait Model: Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static {
    /// Reduce to a plain value, omitting unset fields at every level.
    fn to_plain_value(&self) -> Result<Value> {
        let value = serde_json::to_value(self).map_err(Error::Encoding)?;
        Ok(strip_nulls(value))
    }

    /// Populate a new instance from a plain value.
    fn from_plain_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        crate::from_value(value)
    }

    /// Read one field by its wire name.
    fn get_field(&self, name: &str) -> Result<Option<Value>> {
        match self.to_plain_value()? {
            Value::Object(mut map) => Ok(map.remove(name)),
            _ => Ok(None),
        }
    }

    /// Replace one field by its wire name.
    ///
    /// Setting `null` unsets the field. Names the model does not declare are
    /// dropped on the way back, as with any other decode.
    fn set_field(&mut self, name: &str, value: Value) -> Result<()>
    where
        Self: Sized,
    {
        let mut map = match self.to_plain_value()? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert(name.to_string(), value);
        *self = Self::from_plain_value(Value::Object(map))?;
        Ok(())
    }
}

/// Object-safe view of a [`Model`], so bodies can be stored without generics.
pub trait ErasedModel: fmt::Debug + Send + Sync {
    /// See [`Model::to_plain_value`].
    fn plain_value(&self) -> Result<Value>;
}

impl<M: Model> ErasedModel for M {
    fn plain_value(&self) -> Result<Value> {
        self.to_plain_value()
    }
}

/// The `postBody` of a call.
#[derive(Debug)]
pub enum PostBody {
    /// A scalar (string, number, boolean), encoded as-is.
    Scalar(Value),
    /// A model, reduced through its own plain-value conversion.
    Model(Box<dyn ErasedModel>),
    /// Any other structure; nulls are stripped before encoding.
    Plain(Value),
}

impl PostBody {
    /// Wrap a model.
    #[must_use]
    pub fn model<M: Model>(model: M) -> Self {
        Self::Model(Box::new(model))
    }

    /// Wrap any serializable structure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the value cannot be represented as JSON.
    pub fn plain<T: Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Self::from)
            .map_err(Error::Encoding)
    }

    /// Wrap a scalar value.
    #[must_use]
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    /// Reduce to the value that goes on the wire.
    pub fn into_plain_value(self) -> Result<Value> {
        match self {
            Self::Scalar(value) => Ok(value),
            Self::Model(model) => model.plain_value(),
            Self::Plain(value) => Ok(strip_nulls(value)),
        }
    }

    /// Reduce and encode as a JSON string.
    pub fn encode(self) -> Result<String> {
        let value = self.into_plain_value()?;
        serde_json::to_string(&value).map_err(Error::Encoding)
    }
}

impl From<Value> for PostBody {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Self::Plain(value),
            scalar => Self::Scalar(scalar),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Comment {
        #[serde(skip_serializing_if = "Option::is_none")]
        author: Option<String>,
        #[serde(default)]
        reply_seq: Option<u64>,
        #[serde(default)]
        site: Option<Site>,
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Site {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        tags: Vec<String>,
    }

    impl Model for Comment {}

    #[test]
    fn to_plain_value_strips_unset_fields() {
        let comment = Comment {
            author: None,
            reply_seq: Some(7),
            site: Some(Site {
                name: None,
                tags: vec!["news".to_string()],
            }),
        };

        assert_eq!(
            comment.to_plain_value().expect("encode"),
            json!({"replySeq": 7, "site": {"tags": ["news"]}})
        );
    }

    #[test]
    fn from_plain_value_ignores_unknown_fields() {
        let comment = Comment::from_plain_value(json!({
            "author": "kim",
            "likes": 12,
            "site": {"name": "bloter", "theme": "dark"}
        }))
        .expect("decode");

        assert_eq!(comment.author.as_deref(), Some("kim"));
        assert_eq!(comment.reply_seq, None);
        assert_eq!(comment.site.and_then(|s| s.name).as_deref(), Some("bloter"));
    }

    #[test]
    fn from_plain_value_reports_path() {
        let err = Comment::from_plain_value(json!({"site": {"tags": [1]}})).expect_err("bad tag");
        match err {
            Error::Decoding { path, .. } => assert_eq!(path, "site.tags[0]"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn field_accessors() {
        let mut comment = Comment::default();
        assert_eq!(comment.get_field("author").expect("get"), None);

        comment.set_field("author", json!("lee")).expect("set");
        assert_eq!(comment.author.as_deref(), Some("lee"));
        assert_eq!(comment.get_field("author").expect("get"), Some(json!("lee")));

        comment.set_field("replySeq", json!(3)).expect("set");
        assert_eq!(comment.reply_seq, Some(3));

        comment.set_field("author", Value::Null).expect("unset");
        assert_eq!(comment.author, None);

        let err = comment.set_field("replySeq", json!("three")).expect_err("bad type");
        assert!(matches!(err, Error::Decoding { .. }));
        assert_eq!(comment.reply_seq, Some(3));
    }

    #[test]
    fn post_body_variants() {
        let body = PostBody::model(Comment {
            author: Some("kim".to_string()),
            ..Comment::default()
        });
        assert_eq!(body.encode().expect("encode"), r#"{"author":"kim"}"#);

        let body = PostBody::plain(&json!({"a": null, "b": [null, {"c": null}]})).expect("plain");
        assert_eq!(body.encode().expect("encode"), r#"{"b":[{}]}"#);

        assert_eq!(PostBody::scalar(false).encode().expect("encode"), "false");
        assert_eq!(PostBody::scalar("text").encode().expect("encode"), r#""text""#);
    }

    #[test]
    fn post_body_from_value_picks_variant() {
        assert!(matches!(PostBody::from(json!({"a": 1})), PostBody::Plain(_)));
        assert!(matches!(PostBody::from(json!([1, 2])), PostBody::Plain(_)));
        assert!(matches!(PostBody::from(json!(1)), PostBody::Scalar(_)));
    }

    #[test]
    fn post_body_plain_rejects_non_string_keys() {
        let mut map = std::collections::HashMap::new();
        map.insert((1, 2), "pair");
        let err = PostBody::plain(&map).expect_err("tuple keys are not JSON");
        assert!(matches!(err, Error::Encoding(_)));
    }

    fn arb_site() -> impl Strategy<Value = Site> {
        (
            proptest::option::of("[a-z]{0,8}"),
            proptest::collection::vec("[a-z]{1,5}", 0..3),
        )
            .prop_map(|(name, tags)| Site { name, tags })
    }

    fn arb_comment() -> impl Strategy<Value = Comment> {
        (
            proptest::option::of("[a-z ]{0,12}"),
            proptest::option::of(any::<u64>()),
            proptest::option::of(arb_site()),
        )
            .prop_map(|(author, reply_seq, site)| Comment {
                author,
                reply_seq,
                site,
            })
    }

    proptest! {
        #[test]
        fn plain_value_round_trip_is_stable(comment in arb_comment()) {
            let plain = comment.to_plain_value().expect("encode");
            let decoded = Comment::from_plain_value(plain.clone()).expect("decode");
            prop_assert_eq!(decoded.to_plain_value().expect("re-encode"), plain);
        }
    }
}
