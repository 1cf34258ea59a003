//! Request body encodings.
//!
//! A request carries exactly one of: nothing, a JSON document, a URL-encoded
//! form or a multipart form. Form and multipart bodies keep fields in the order
//! they were appended.
//!
//! The `*_opt` helpers share one presence rule: a value is sent only when it is
//! "truthy". `None`, empty strings and numeric zero are all skipped, so a caller
//! cannot send an explicit `0` or `""` through them. Arrays are sent whenever
//! they are `Some`, even when empty.

use std::{fmt::Display, path::Path};

use serde_json::Value;

use crate::{error::CommonRequestError, headers::ContentType};

/// Encoded payload of a request
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Form(FormBody),
    Multipart(MultipartBody),
}

impl RequestBody {
    /// Serialize any value into a JSON body.
    pub fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Self, CommonRequestError> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Content type implied by the body, if the body dictates one.
    #[must_use]
    pub fn content_type(&self) -> Option<ContentType> {
        match self {
            Self::Json(_) => Some(ContentType::Json),
            Self::Form(_) => Some(ContentType::FormUrlEncoded),
            Self::Empty | Self::Multipart(_) => None,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Json(_) => "json",
            Self::Form(_) => "form",
            Self::Multipart(_) => "multipart",
        }
    }
}

impl From<FormBody> for RequestBody {
    fn from(form: FormBody) -> Self {
        Self::Form(form)
    }
}

impl From<MultipartBody> for RequestBody {
    fn from(form: MultipartBody) -> Self {
        Self::Multipart(form)
    }
}

/// Wire text of an optional string, `None` when empty.
fn present_text(value: Option<impl AsRef<str>>) -> Option<String> {
    value
        .filter(|v| !v.as_ref().is_empty())
        .map(|v| v.as_ref().to_string())
}

/// Wire text of an optional number, `None` when zero.
fn present_number<N: FormNumber>(value: Option<N>) -> Option<String> {
    value.filter(|n| !n.is_zero()).map(|n| n.to_string())
}

/// JSON text of an optional array or object; empty arrays are kept.
fn present_json(value: Option<impl Into<Value>>) -> Option<String> {
    value.map(|v| v.into().to_string())
}

/// Numbers that have a "falsy" zero value.
pub trait FormNumber: Display + Copy {
    fn is_zero(self) -> bool;
}

macro_rules! impl_form_number {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl FormNumber for $ty {
                fn is_zero(self) -> bool {
                    self == $zero
                }
            }
        )*
    };
}

impl_form_number!(
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, usize => 0,
    i32 => 0, i64 => 0,
    f32 => 0.0, f64 => 0.0,
);

/// `application/x-www-form-urlencoded` body with ordered keys
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required field.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((name.into(), value.into()));
        self
    }

    /// Append an optional string field; `None` and `""` are skipped.
    #[must_use]
    pub fn text_opt(self, name: &str, value: Option<impl AsRef<str>>) -> Self {
        self.push_present(name, present_text(value))
    }

    /// Append an optional number; `None` and zero are skipped.
    #[must_use]
    pub fn number_opt<N: FormNumber>(self, name: &str, value: Option<N>) -> Self {
        self.push_present(name, present_number(value))
    }

    /// Append an optional array or object as a JSON string.
    #[must_use]
    pub fn json_opt(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        self.push_present(name, present_json(value))
    }

    fn push_present(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// URL-encode the pairs in insertion order.
    #[must_use]
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// An opaque file handed to a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub data: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            data: data.into(),
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, guessing its MIME type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, CommonRequestError> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().into_owned());
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string());

        Ok(Self {
            file_name,
            mime_type,
            data,
        })
    }

    fn into_part(self) -> Result<reqwest::multipart::Part, CommonRequestError> {
        let part = reqwest::multipart::Part::bytes(self.data).file_name(self.file_name);
        match self.mime_type {
            Some(mime) => part
                .mime_str(&mime)
                .map_err(|_| CommonRequestError::InvalidHeader(format!("content-type: {mime}"))),
            None => Ok(part),
        }
    }
}

/// A single field of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text { name: String, value: String },
    File { name: String, file: FilePart },
}

impl MultipartField {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// `multipart/form-data` body with ordered fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultipartBody {
    fields: Vec<MultipartField>,
}

impl MultipartBody {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MultipartField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append one file part per entry, all under `name`, keeping input order.
    #[must_use]
    pub fn files(mut self, name: &str, files: impl IntoIterator<Item = FilePart>) -> Self {
        self.fields
            .extend(files.into_iter().map(|file| MultipartField::File {
                name: name.to_string(),
                file,
            }));
        self
    }

    /// Append an optional string field; `None` and `""` are skipped.
    #[must_use]
    pub fn text_opt(self, name: &str, value: Option<impl AsRef<str>>) -> Self {
        self.push_present(name, present_text(value))
    }

    /// Append an optional number; `None` and zero are skipped.
    #[must_use]
    pub fn number_opt<N: FormNumber>(self, name: &str, value: Option<N>) -> Self {
        self.push_present(name, present_number(value))
    }

    /// Append an optional array or object as a JSON string.
    #[must_use]
    pub fn json_opt(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        self.push_present(name, present_json(value))
    }

    fn push_present(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => self.text(name, v),
            None => self,
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[MultipartField] {
        &self.fields
    }

    /// Text value of the first field called `name`.
    #[must_use]
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|field| match field {
            MultipartField::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Files appended under `name`, in order.
    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a FilePart> + 'a {
        self.fields.iter().filter_map(move |field| match field {
            MultipartField::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }

    /// Convert into the transport's form type.
    pub fn into_form(self) -> Result<reqwest::multipart::Form, CommonRequestError> {
        let mut form = reqwest::multipart::Form::new();
        for field in self.fields {
            form = match field {
                MultipartField::Text { name, value } => form.text(name, value),
                MultipartField::File { name, file } => form.part(name, file.into_part()?),
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_keeps_insertion_order() {
        let form = FormBody::new()
            .text("name", "A")
            .text("custom_prompt", "B")
            .text("default_llm", "C");
        assert_eq!(form.encode(), "name=A&custom_prompt=B&default_llm=C");
    }

    #[test]
    fn form_escapes_values() {
        let form = FormBody::new().text("prompt", "a b&c=d");
        assert_eq!(form.encode(), "prompt=a+b%26c%3Dd");
    }

    #[test]
    fn falsy_optionals_are_skipped() {
        let form = FormBody::new()
            .text_opt("description", None::<&str>)
            .text_opt("empty", Some(""))
            .number_opt("k", Some(0_u32))
            .number_opt("lambda_mult", Some(0.0_f64))
            .number_opt("fetch_k", None::<u32>);
        assert!(form.pairs().is_empty());
    }

    #[test]
    fn present_optionals_are_sent() {
        let form = FormBody::new()
            .number_opt("k", Some(4_u32))
            .number_opt("score_threshold", Some(0.5_f64))
            .json_opt("tags", Some(vec!["x".to_string(), "y".to_string()]));
        assert_eq!(form.get("k"), Some("4"));
        assert_eq!(form.get("score_threshold"), Some("0.5"));
        assert_eq!(form.get("tags"), Some(r#"["x","y"]"#));
    }

    #[test]
    fn empty_array_is_still_sent() {
        let form = FormBody::new().json_opt("tags", Some(Vec::<String>::new()));
        assert_eq!(form.get("tags"), Some("[]"));
    }

    #[test]
    fn form_and_multipart_share_presence_rule() {
        let form = FormBody::new()
            .text_opt("description", Some(""))
            .text_opt("name", Some("kb"))
            .number_opt("chunk_size", Some(0_u32))
            .number_opt("buffer_size", Some(3_u32))
            .json_opt("tags", Some(Vec::<String>::new()));
        let multipart = MultipartBody::new()
            .text_opt("description", Some(""))
            .text_opt("name", Some("kb"))
            .number_opt("chunk_size", Some(0_u32))
            .number_opt("buffer_size", Some(3_u32))
            .json_opt("tags", Some(Vec::<String>::new()));

        let form_keys: Vec<&str> = form.pairs().iter().map(|(k, _)| k.as_str()).collect();
        let multipart_keys: Vec<&str> = multipart.fields().iter().map(MultipartField::name).collect();
        assert_eq!(form_keys, ["name", "buffer_size", "tags"]);
        assert_eq!(form_keys, multipart_keys);
        assert_eq!(multipart.text_value("tags"), form.get("tags"));
    }

    #[test]
    fn body_content_types() {
        assert_eq!(RequestBody::Empty.content_type(), None);
        assert_eq!(
            RequestBody::from(FormBody::new()).content_type(),
            Some(ContentType::FormUrlEncoded)
        );
        assert_eq!(
            RequestBody::json(&serde_json::json!({"a": 1}))
                .unwrap()
                .content_type(),
            Some(ContentType::Json)
        );
        assert_eq!(RequestBody::from(MultipartBody::new()).content_type(), None);
    }

    #[test]
    fn multipart_orders_scalars_files_optionals() {
        let body = MultipartBody::new()
            .text("name", "kb")
            .files(
                "files",
                vec![FilePart::new("a.txt", b"a".to_vec()), FilePart::new("b.txt", b"b".to_vec())],
            )
            .number_opt("chunk_size", Some(1000_u32))
            .json_opt("separators", Some(vec!["\n".to_string()]));

        let names: Vec<&str> = body.fields().iter().map(MultipartField::name).collect();
        assert_eq!(names, ["name", "files", "files", "chunk_size", "separators"]);

        let files: Vec<&str> = body
            .files_named("files")
            .map(|f| f.file_name.as_str())
            .collect();
        assert_eq!(files, ["a.txt", "b.txt"]);
        assert_eq!(body.text_value("separators"), Some(r#"["\n"]"#));
    }

    #[test]
    fn multipart_rejects_bad_mime() {
        let body = MultipartBody::new().files(
            "file",
            [FilePart::new("a.bin", vec![0_u8]).with_mime_type("not a mime")],
        );
        assert!(matches!(
            body.into_form(),
            Err(CommonRequestError::InvalidHeader(ref msg)) if msg.contains("not a mime")
        ));
    }

    #[tokio::test]
    async fn file_part_from_path_guesses_mime() {
        let dir = std::env::temp_dir().join(format!("ai-ox-common-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();
        let path = dir.join("notes.txt");
        tokio::fs::write(&path, b"hello").await.unwrap();

        let part = FilePart::from_path(&path).await.unwrap();
        assert_eq!(part.file_name, "notes.txt");
        assert_eq!(part.mime_type.as_deref(), Some("text/plain"));
        assert_eq!(part.data, b"hello");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn file_part_from_missing_path_is_io_error() {
        let err = FilePart::from_path("/definitely/not/here.pdf").await.unwrap_err();
        assert!(matches!(err, CommonRequestError::Io(_)));
    }
}
