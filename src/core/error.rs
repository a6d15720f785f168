//! Error types.

use thiserror::Error;

use crate::zones::PieceId;

/// Failure to build a round from the dish catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The catalog has no entry usable for this game.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Rejected puzzle move.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Unknown piece: {0}")]
    UnknownPiece(PieceId),

    #[error("Board slot {slot} out of range (board has {len} slots)")]
    SlotOutOfRange { slot: usize, len: usize },

    #[error("Puzzle already solved")]
    AlreadySolved,
}

/// Comments API failure.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid API url: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SetupError::InsufficientData("catalog has no slugs".into());
        assert_eq!(err.to_string(), "Insufficient data: catalog has no slugs");

        let err = MoveError::SlotOutOfRange { slot: 12, len: 12 };
        assert_eq!(err.to_string(), "Board slot 12 out of range (board has 12 slots)");

        assert_eq!(MoveError::UnknownPiece(PieceId::new(40)).to_string(), "Unknown piece: Piece(40)");
    }
}
