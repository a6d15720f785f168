//! Zone system for puzzle pieces.
//!
//! ## Key Types
//!
//! - `PieceId`: Piece identifier (also its home board slot)
//! - `Bank`: Left, right or bottom holding area
//! - `Zone`: A bank or a board slot
//! - `ZoneManager`: Location tracking and movement

pub mod manager;

pub use manager::{Bank, PieceId, Zone, ZoneManager};
