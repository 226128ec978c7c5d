//! Core data types: frame rate, markers and decomposed timestamps.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::TimestampError;

/// Frames captured per second of source video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRate(NonZeroU32);

impl FrameRate {
    /// Build a frame rate from a constant.
    ///
    /// Zero is an authoring mistake; in a `const` context it fails the build.
    pub const fn from_const(fps: u32) -> Self {
        match NonZeroU32::new(fps) {
            Some(fps) => Self(fps),
            None => panic!("frame rate must be positive"),
        }
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = TimestampError;

    fn try_from(fps: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(fps)
            .map(Self)
            .ok_or(TimestampError::InvalidFrameRate(fps))
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fps", self.0)
    }
}

/// A named point in a video, expressed as a frame number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub frame: u64,
    pub label: String,
}

impl Marker {
    pub fn new(frame: u64, label: impl Into<String>) -> Self {
        Self {
            frame,
            label: label.into(),
        }
    }
}

/// Elapsed time split into whole minutes and remaining seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp {
    pub minutes: u64,
    /// Always below 60.
    pub seconds: u8,
}

impl Timestamp {
    pub fn from_total_seconds(total: u64) -> Self {
        Self {
            minutes: total / 60,
            seconds: (total % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.minutes * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Minutes widen past 99, never wrap.
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}
