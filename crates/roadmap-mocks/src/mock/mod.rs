//! Stand-in implementation of the roadmap server functions. Data comes from
//! a bundled JSON file (or another configured source) instead of a real
//! backend, so the client can be developed and tested in isolation.

mod provider;

pub use provider::*;
