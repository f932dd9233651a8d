//! Error types for playback control.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Command queue is closed (controller dropped)")]
    QueueClosed,
}

pub type PlaybackResult<T> = Result<T, PlaybackError>;
