//! Compact encodings of a map's JSON text.
//!
//! - compressed: zlib over compact JSON, optionally as standard base64 text
//! - url-safe: padded base64url of compact JSON, for query strings and cookies
//!
//! XML has no codec in this build; both directions fail with `MissingCodec`.

use std::io::{Read, Write};

use base64ct::{Base64, Base64Url, Encoding};
use flate2::{Compression, read::ZlibDecoder, write::ZlibEncoder};

use super::{ConvertError, JsonOptions, from_json};
use crate::{Result, dict::ObjDict};

impl ObjDict {
    /// zlib-compressed compact JSON
    pub fn to_compressed(&self) -> Result<Vec<u8>> {
        let json = self.to_json_string(&JsonOptions::compact())?;
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(json.as_bytes())?;
        Ok(encoder.finish()?)
    }

    /// [`ObjDict::to_compressed`] as standard padded base64 text
    pub fn to_compressed_text(&self) -> Result<String> {
        Ok(Base64::encode_string(&self.to_compressed()?))
    }

    /// Padded base64url of the compact JSON text
    pub fn to_urlsafe_text(&self) -> Result<String> {
        let json = self.to_json_string(&JsonOptions::compact())?;
        Ok(Base64Url::encode_string(json.as_bytes()))
    }

    /// Always fails: there is no XML codec
    pub fn to_xml(&self) -> Result<String> {
        Err(missing_xml())
    }
}

/// Decodes the output of [`ObjDict::to_compressed`] or
/// [`ObjDict::to_compressed_text`].
///
/// Input is first read as raw zlib; if that fails it is read as base64 text
/// wrapping zlib.
///
/// # Errors
/// `MalformedInput` if neither reading yields a JSON object.
pub fn from_compressed(data: &[u8]) -> Result<ObjDict> {
    let json = match inflate(data) {
        Ok(json) => json,
        Err(raw_err) => {
            tracing::debug!(error = %raw_err, "input is not raw zlib, trying base64");
            let text = std::str::from_utf8(data).map_err(|_| ConvertError::malformed(&raw_err))?;
            let bytes = Base64::decode_vec(text.trim()).map_err(ConvertError::malformed)?;
            inflate(&bytes).map_err(ConvertError::malformed)?
        }
    };
    from_json(&json)
}

fn inflate(data: &[u8]) -> std::io::Result<String> {
    let mut json = String::new();
    ZlibDecoder::new(data).read_to_string(&mut json)?;
    Ok(json)
}

/// Decodes the output of [`ObjDict::to_urlsafe_text`]
pub fn from_urlsafe_text(text: &str) -> Result<ObjDict> {
    let bytes = Base64Url::decode_vec(text.trim()).map_err(ConvertError::malformed)?;
    let json = String::from_utf8(bytes).map_err(ConvertError::malformed)?;
    from_json(&json)
}

/// Always fails: there is no XML codec
pub fn from_xml(_text: &str) -> Result<ObjDict> {
    Err(missing_xml())
}

fn missing_xml() -> crate::Error {
    ConvertError::MissingCodec {
        codec: "xml".to_string(),
    }
    .into()
}
