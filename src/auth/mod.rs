//! Authentication module for the CoinJar API.
//!
//! CoinJar authenticates every request with HTTP Basic Auth: the API key is
//! the username and the password is empty. This module provides:
//! - Credential management with secure key storage
//! - Encoding of the `Authorization` header

mod basic;
mod credentials;

pub use basic::{authorization_header, decode_authorization_header};
pub use credentials::{
    API_KEY_ENV_VAR, Credentials, CredentialsProvider, EnvCredentials, StaticCredentials,
};
