//! JSON request body decoding
//!
//! Parses exactly one JSON value per body and classifies every failure into
//! a [`DecodeError`] whose message is safe to echo to the client.

use axum::body::{Body, Bytes};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use shared::error::AppError;
use thiserror::Error;

use crate::core::config::MAX_BODY_BYTES;

/// Request body decoding failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("request body contains badly-formed JSON (at position {offset})")]
    Malformed { offset: usize },

    #[error("request body contains badly-formed JSON")]
    Truncated,

    #[error("request body contains an invalid value for the \"{field}\" field")]
    TypeMismatch { field: String },

    #[error("request body contains unknown field \"{field}\"")]
    UnknownField { field: String },

    #[error("request body must not be empty")]
    Empty,

    #[error("request body must not be larger than {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("request body must only contain a single JSON object")]
    MultipleValues,

    /// Anything else; `detail` is for the logs only
    #[error("failed to parse JSON")]
    Internal { detail: String },
}

impl From<DecodeError> for AppError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::PayloadTooLarge { .. } => AppError::payload_too_large(err.to_string()),
            DecodeError::Internal { detail } => {
                AppError::internal(format!("failed to parse JSON: {detail}"))
            }
            other => AppError::invalid_format(other.to_string()),
        }
    }
}

/// Stateless JSON decoder with a body size cap
#[derive(Debug, Clone, Copy)]
pub struct JsonDecoder {
    max_body_bytes: usize,
}

impl Default for JsonDecoder {
    fn default() -> Self {
        Self::new(MAX_BODY_BYTES)
    }
}

impl JsonDecoder {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }

    /// Decode a single JSON value into `T`
    ///
    /// With `strict`, any field `T` does not declare is rejected.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8], strict: bool) -> Result<T, DecodeError> {
        if body.len() > self.max_body_bytes {
            return Err(DecodeError::PayloadTooLarge {
                limit: self.max_body_bytes,
            });
        }
        if body.iter().all(|b| is_json_whitespace(*b)) {
            return Err(DecodeError::Empty);
        }

        let mut de = serde_json::Deserializer::from_slice(body);
        let mut track = serde_path_to_error::Track::new();
        let mut unknown_field: Option<String> = None;

        let tracked = serde_path_to_error::Deserializer::new(&mut de, &mut track);
        let result: Result<T, serde_json::Error> = serde_ignored::deserialize(tracked, |path| {
            if unknown_field.is_none() {
                unknown_field = Some(path.to_string());
            }
        });

        if strict && let Some(field) = unknown_field {
            return Err(DecodeError::UnknownField { field });
        }
        let value = result.map_err(|err| classify(body, &track.path().to_string(), err))?;

        de.end().map_err(|_| DecodeError::MultipleValues)?;
        Ok(value)
    }

    /// Buffer an HTTP body, enforcing the size cap
    pub async fn read_body(&self, body: Body) -> Result<Bytes, DecodeError> {
        axum::body::to_bytes(body, self.max_body_bytes)
            .await
            .map_err(|err| {
                if exceeds_length_limit(&err) {
                    DecodeError::PayloadTooLarge {
                        limit: self.max_body_bytes,
                    }
                } else {
                    DecodeError::Internal {
                        detail: err.to_string(),
                    }
                }
            })
    }

    /// Buffer and decode an HTTP body
    pub async fn decode_body<T: DeserializeOwned>(
        &self,
        body: Body,
        strict: bool,
    ) -> Result<T, DecodeError> {
        let bytes = self.read_body(body).await?;
        self.decode(&bytes, strict)
    }
}

fn classify(body: &[u8], path: &str, err: serde_json::Error) -> DecodeError {
    match err.classify() {
        Category::Syntax => DecodeError::Malformed {
            offset: byte_offset(body, err.line(), err.column()),
        },
        Category::Eof => DecodeError::Truncated,
        Category::Data => DecodeError::TypeMismatch {
            field: match path {
                "." | "" => "unknown".to_string(),
                field => field.to_string(),
            },
        },
        Category::Io => DecodeError::Internal {
            detail: err.to_string(),
        },
    }
}

/// Insignificant whitespace per RFC 8259
fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Byte offset of a 1-based line / column position
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split_inclusive(|b| *b == b'\n')
        .take(line.saturating_sub(1))
        .map(<[u8]>::len)
        .sum();
    (line_start + column).min(body.len())
}

fn exceeds_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> =
        Some(err as &(dyn std::error::Error + 'static));
    while let Some(current) = source {
        if current.downcast_ref::<LengthLimitError>().is_some() {
            return true;
        }
        source = current.source();
    }
    false
}
