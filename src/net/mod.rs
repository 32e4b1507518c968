//! Networking modules for the job-board REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` owns the shared client state and composes the auth/401
//! middleware around the `transport` dispatch seam. `types` defines the wire
//! schema, and the remaining modules are thin typed wrappers over individual
//! endpoint families.

pub mod applications;
pub mod auth;
pub mod error;
pub mod gateway;
pub mod jobs;
pub mod transport;
pub mod types;
pub mod upload;
pub mod users;

#[cfg(test)]
pub mod testing;
