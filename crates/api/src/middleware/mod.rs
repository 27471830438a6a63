//! Request extractors: bearer-token authentication, the staff guard, and
//! rate-limit client-key derivation.

pub mod auth;
pub mod client_key;
