//! # jobboard-client
//!
//! WASM-targetable core for the job-board single-page client: session/auth
//! lifecycle, authenticated request dispatch, and typed wrappers for the
//! job/application/user/upload REST endpoints.
//!
//! The crate splits into `state` (session store and pure display helpers),
//! `net` (gateway, transport seam, DTOs, domain operations), and `util`
//! (persistent storage and navigation collaborators). Browser glue is gated
//! behind the `browser` feature so the core compiles and tests natively with
//! a fake transport.

pub mod net;
pub mod state;
pub mod util;

/// Install the browser logging/panic hooks. Call once at startup.
#[cfg(feature = "browser")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
