//! Authoritative xiangqi game server
//!
//! The backend owns the rooms, validates every move through the rule
//! engine, and plays the computer opponent. All state mutation happens on
//! one dispatcher task; connections only ever hold a send-capability into
//! their own outbound queue.

pub mod dispatcher;
pub mod error;
pub mod rooms;
pub mod server;
