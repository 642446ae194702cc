//! API models for requests and responses

use gitshelf::{RepositoryDraft, validate};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Request body for creating a record or replacing its mutable fields.
///
/// Every field is optional at the deserialization boundary; shape and
/// presence are checked in two separate steps so each failure maps to its
/// own error variant, and so shape problems are reported even when other
/// fields are missing.
#[derive(Debug, Default, Deserialize)]
pub struct RepositoryPayload {
    pub title: Option<String>,
    pub url: Option<String>,
    pub techs: Option<Value>,
}

impl RepositoryPayload {
    /// Field guard: shape-check whatever fields are present.
    ///
    /// Absent fields pass; presence is enforced by [`Self::into_draft`].
    pub fn validate_fields(&self) -> Result<(), ApiError> {
        if let Some(techs) = &self.techs {
            if !techs.is_array() {
                return Err(ApiError::InvalidTechs);
            }
        }

        if let Some(url) = &self.url {
            if !validate::is_valid_url(url) {
                return Err(ApiError::InvalidUrl);
            }
        }

        Ok(())
    }

    /// Require all fields present and non-empty, yielding a validated draft.
    ///
    /// Techs entries must be strings; anything else is reported as an
    /// invalid array.
    pub fn into_draft(self) -> Result<RepositoryDraft, ApiError> {
        let title = self
            .title
            .filter(|title| !title.is_empty())
            .ok_or(ApiError::MissingFields)?;

        let url = self
            .url
            .filter(|url| !url.is_empty())
            .ok_or(ApiError::MissingFields)?;

        let techs = match self.techs {
            Some(Value::Array(values)) if !values.is_empty() => values,
            _ => return Err(ApiError::MissingFields),
        };

        let techs = techs
            .into_iter()
            .map(|value| match value {
                Value::String(tech) => Ok(tech),
                _ => Err(ApiError::InvalidTechs),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RepositoryDraft { title, url, techs })
    }
}
