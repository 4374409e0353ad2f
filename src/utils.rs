use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}

/// Decodes a JSON body, reporting the path of the first offending field.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let de = &mut serde_json::Deserializer::from_slice(body);
    serde_path_to_error::deserialize(de)
        .map_err(|err| AppError::bad_request(format!("invalid body at `{}`: {}", err.path(), err.inner())))
}
