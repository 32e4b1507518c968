//! Platform collaborators for the session core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` wraps the two persisted session keys and `navigate` performs the
//! hard redirect used by the unauthenticated-response interceptor. Both are
//! traits so the core can run natively against in-memory fakes.

pub mod navigate;
pub mod storage;
