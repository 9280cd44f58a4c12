//! Validated inputs for one backup run

use super::selection::DEFAULT_QUANTITY;
use thiserror::Error;

/// Input validation errors. All of them abort the run before any remote call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Profile identifier must contain digits only, got '{value}'")]
    InvalidIdentifier { value: String },

    #[error("Storage token is empty")]
    MissingToken,

    #[error("Photo quantity must be a non-negative integer, got '{value}'")]
    InvalidQuantity { value: String },
}

/// Profile identifier: non-empty, ASCII digits only
pub fn validate_identifier(input: &str) -> Result<String, RequestError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(RequestError::InvalidIdentifier {
            value: input.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

pub fn validate_token(input: &str) -> Result<String, RequestError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(RequestError::MissingToken);
    }
    Ok(trimmed.to_string())
}

/// Blank input selects [`DEFAULT_QUANTITY`]
pub fn parse_quantity(input: &str) -> Result<usize, RequestError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_QUANTITY);
    }
    trimmed
        .parse()
        .map_err(|_| RequestError::InvalidQuantity {
            value: input.to_string(),
        })
}

/// The three caller-supplied values of a run, validated on construction
#[derive(Clone, PartialEq, Eq)]
pub struct BackupRequest {
    identifier: String,
    disk_token: String,
    quantity: usize,
}

impl BackupRequest {
    pub fn new(identifier: &str, disk_token: &str, quantity: usize) -> Result<Self, RequestError> {
        Ok(Self {
            identifier: validate_identifier(identifier)?,
            disk_token: validate_token(disk_token)?,
            quantity,
        })
    }

    /// Validate raw prompt answers, quantity included
    pub fn from_input(identifier: &str, disk_token: &str, quantity: &str) -> Result<Self, RequestError> {
        let quantity = parse_quantity(quantity)?;
        Self::new(identifier, disk_token, quantity)
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn disk_token(&self) -> &str {
        &self.disk_token
    }

    pub fn quantity(&self) -> usize {
        self.quantity
    }
}

// Keep the token out of logs
impl std::fmt::Debug for BackupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackupRequest")
            .field("identifier", &self.identifier)
            .field("disk_token", &"<redacted>")
            .field("quantity", &self.quantity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    include!("request.test.rs");
}
