//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure (the name classifier)

pub mod outbound;

pub use outbound::NameClassifierPort;
