//! Bearer credential parsing.
//!
//! Parsing never panics and never allocates on the happy path; the three
//! failure shapes are kept distinct for diagnostics even though they all
//! surface as the same 401-class outcome to clients.

use std::fmt;

/// Why a credential header failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerError {
    /// No Authorization header was supplied.
    MissingHeader,
    /// The header was present but not of the form `Bearer <token>`.
    MalformedHeader,
    /// The scheme parsed but the token part was empty.
    EmptyToken,
}

impl fmt::Display for BearerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Authorization header is missing"),
            Self::MalformedHeader => write!(f, "Authorization header must be 'Bearer <token>'"),
            Self::EmptyToken => write!(f, "Bearer token is empty"),
        }
    }
}

/// Extract the token from an optional `Authorization: Bearer <token>` header.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, BearerError> {
    let header = header.ok_or(BearerError::MissingHeader)?;

    let mut parts = header.split_whitespace();
    let scheme = parts.next().ok_or(BearerError::MalformedHeader)?;
    let token = parts.next().ok_or(BearerError::MalformedHeader)?;
    if parts.next().is_some() {
        return Err(BearerError::MalformedHeader);
    }

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::MalformedHeader);
    }
    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(token)
}
