//! End-to-end integration tests

use regex::Regex;

use crate::converter::write_timestamps;
use crate::markers::{reference_markers, FRAME_RATE};

const EXPECTED_OUTPUT: &str = "\
00:02 Robotronik, Match 2
00:28 RIR, Match 3
00:52 ESEO, Match 4
01:18 GNOLE, Match 5
01:43 Intech, 8e de finale
02:08 IFEA, quart de finale
02:34 7Robot, demie finale
03:00 ESEO finale 1
03:26 ESEO, finale 2
03:53 Barrage Eurobot
04:21 UCLouvain, huitieme de finale Eurobot
";

fn render_reference() -> String {
    let mut out = Vec::new();
    write_timestamps(&mut out, &reference_markers(), FRAME_RATE).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_reference_output() {
    assert_eq!(render_reference(), EXPECTED_OUTPUT);
}

#[test]
fn test_run_matches_reference() {
    let mut out = Vec::new();
    crate::run(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_OUTPUT);
}

#[test]
fn test_line_shape_and_order() {
    let re = Regex::new(r"^(\d{2,}):([0-5]\d) (.+)$").unwrap();
    let output = render_reference();
    let markers = reference_markers();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), markers.len());

    for (line, marker) in lines.iter().zip(&markers) {
        let caps = re
            .captures(line)
            .unwrap_or_else(|| panic!("malformed line: {:?}", line));
        assert_eq!(&caps[3], marker.label);

        let minutes: u64 = caps[1].parse().unwrap();
        let seconds: u64 = caps[2].parse().unwrap();
        assert_eq!(minutes * 60 + seconds, marker.frame / 24);
    }
}

#[test]
fn test_output_is_stable() {
    assert_eq!(render_reference(), render_reference());
}
