//! Reference marker data
//!
//! Highlights of the Eurobot match recording, as frame numbers at 24 fps.

use crate::types::{FrameRate, Marker};

/// Frame rate of the source recording
pub const FRAME_RATE: FrameRate = FrameRate::from_const(24);

/// Hard-coded markers, in playback order
pub const REFERENCE_MARKERS: &[(u64, &str)] = &[
    (50, "Robotronik, Match 2"),
    (672, "RIR, Match 3"),
    (1269, "ESEO, Match 4"),
    (1885, "GNOLE, Match 5"),
    (2483, "Intech, 8e de finale"),
    (3092, "IFEA, quart de finale"),
    (3703, "7Robot, demie finale"),
    (4331, "ESEO finale 1"),
    (4950, "ESEO, finale 2"),
    (5598, "Barrage Eurobot"),
    (6275, "UCLouvain, huitieme de finale Eurobot"),
];

/// Owned copy of [`REFERENCE_MARKERS`]
pub fn reference_markers() -> Vec<Marker> {
    REFERENCE_MARKERS
        .iter()
        .map(|&(frame, label)| Marker::new(frame, label))
        .collect()
}
