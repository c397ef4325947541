//! Built-in decoders and standalone decode helpers
//!
//! Each helper exists in a concurrent form (tokio::fs) and a blocking form
//! (std::fs) so callers can compose their own decoders from them.

use super::{AsyncDecode, BlockingDecode, Metadata};
use crate::error::DecodeError;
use crate::tree::Value;
use async_trait::async_trait;
use std::path::Path;

pub async fn read_bytes(path: &Path) -> Result<Value, DecodeError> {
    Ok(Value::Bytes(tokio::fs::read(path).await?))
}

pub fn read_bytes_blocking(path: &Path) -> Result<Value, DecodeError> {
    Ok(Value::Bytes(std::fs::read(path)?))
}

pub async fn read_text(path: &Path) -> Result<Value, DecodeError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(Value::Text(String::from_utf8(bytes)?))
}

pub fn read_text_blocking(path: &Path) -> Result<Value, DecodeError> {
    let bytes = std::fs::read(path)?;
    Ok(Value::Text(String::from_utf8(bytes)?))
}

pub async fn parse_json(path: &Path) -> Result<Value, DecodeError> {
    let bytes = tokio::fs::read(path).await?;
    Ok(Value::Data(serde_json::from_slice(&bytes)?))
}

pub fn parse_json_blocking(path: &Path) -> Result<Value, DecodeError> {
    let bytes = std::fs::read(path)?;
    Ok(Value::Data(serde_json::from_slice(&bytes)?))
}

pub async fn parse_toml(path: &Path) -> Result<Value, DecodeError> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(Value::Data(toml::from_str(&text)?))
}

pub fn parse_toml_blocking(path: &Path) -> Result<Value, DecodeError> {
    let text = std::fs::read_to_string(path)?;
    Ok(Value::Data(toml::from_str(&text)?))
}

/// Raw bytes, no decoding. Used as the opt-in wildcard fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct BytesDecoder;

/// UTF-8 text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder;

/// JSON documents as structured data
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

/// TOML documents as structured data
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlDecoder;

macro_rules! dual_decoder {
    ($ty:ty, $concurrent:ident, $blocking:ident) => {
        impl BlockingDecode for $ty {
            fn decode(&self, path: &Path, _metadata: &Metadata) -> Result<Value, DecodeError> {
                $blocking(path)
            }
        }

        #[async_trait]
        impl AsyncDecode for $ty {
            async fn decode(&self, path: &Path, _metadata: &Metadata) -> Result<Value, DecodeError> {
                $concurrent(path).await
            }
        }
    };
}

dual_decoder!(BytesDecoder, read_bytes, read_bytes_blocking);
dual_decoder!(TextDecoder, read_text, read_text_blocking);
dual_decoder!(JsonDecoder, parse_json, parse_json_blocking);
dual_decoder!(TomlDecoder, parse_toml, parse_toml_blocking);
