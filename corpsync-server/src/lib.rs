//! `CorpSync` authentication server library.
//!
//! Exposes the server for use in tests and embedding. The server reads a
//! JSON credential file, verifies email/password logins, and issues
//! signed 24-hour session tokens. It is stateless per request: the
//! credential file is read fresh on every call and token verification
//! needs no server-side session state.

pub mod config;
pub mod credentials;
pub mod init;
pub mod server;
pub mod session;
