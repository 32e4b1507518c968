//! Client-side state and pure display helpers.
//!
//! DESIGN
//! ======
//! `session` is the single authority over the logged-in user; `recommend`
//! and `stats` are stateless transformations over lists already fetched from
//! the server, kept here so dashboards stay free of hidden state.

pub mod recommend;
pub mod session;
pub mod stats;
