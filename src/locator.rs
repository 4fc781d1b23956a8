//! The locator: map a target coordinate to a byte range inside a raw
//! stream, in a single forward scan and without building a token list.

use crate::breaks::Dimension;
use crate::coordinate::Coordinate;

/// Where a scan stands relative to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    /// The walker has not yet reached or passed the target.
    Seeking,
    /// The walker sits exactly on the target's scroll.
    InTarget,
    /// The walker has moved beyond the target; the range is closed.
    Closed,
}

/// The result of a subspace scan: the byte range `[start, end)` of the
/// scroll at the target coordinate, plus the walker coordinates needed to
/// splice new content in.
///
/// When the target is present, `start..end` covers its text and `insertion`
/// equals the target. When it is absent, `start == end` is the byte offset
/// where the target would be inserted and `insertion` is the nearest
/// coordinate below it (the `fallback`) from which separators must be
/// synthesized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubspaceOffsets {
    pub start: usize,
    pub end: usize,
    pub insertion: Coordinate,
    pub fallback: Coordinate,
}

/// Scan `subspace` for the scroll at `target`.
///
/// A single left-to-right pass advances a walker coordinate over every
/// break byte. If the walker never reaches or passes the target, the whole
/// stream is the insertion point (both offsets equal the stream length).
pub fn get_subspace_coordinates(subspace: &str, target: Coordinate) -> SubspaceOffsets {
    let mut walker = Coordinate::home();
    let mut fallback = Coordinate::home();
    let mut insertion = Coordinate::home();
    let mut start = 0;
    let mut end = 0;
    let mut stage = Stage::Seeking;
    let max = subspace.len();

    for (index, byte) in subspace.char_indices() {
        if stage == Stage::Seeking {
            if walker == target {
                stage = Stage::InTarget;
                start = index;
                fallback = walker;
                insertion = walker;
            }
            if walker < target {
                fallback = walker;
                insertion = walker;
            }
        }

        if stage != Stage::Closed && walker > target {
            // the walker just jumped past the target; the byte behind us
            // is the break that did it, so the range closes there
            if stage == Stage::Seeking {
                start = index.saturating_sub(1);
            }
            end = index.saturating_sub(1);
            insertion = fallback;
            stage = Stage::Closed;
        }

        if let Some(dimension) = Dimension::classify(byte) {
            walker.apply_break(dimension);
        }
    }

    if stage == Stage::InTarget && walker == target {
        end = max;
        insertion = walker;
        stage = Stage::Closed;
    }

    if stage == Stage::Seeking {
        start = max;
        end = max;
        insertion = walker;
    }

    return SubspaceOffsets {
        start,
        end,
        insertion,
        fallback,
    };
}

/// Read the scroll at `target`, or an empty string when no scroll lives
/// there. Never mutates the stream and never fails.
pub fn fetch(phext: &str, target: Coordinate) -> String {
    let parts = get_subspace_coordinates(phext, target);
    if parts.end > parts.start {
        return phext[parts.start..parts.end].to_string();
    }
    return String::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(address: &str) -> Coordinate {
        return Coordinate::from_address(address);
    }

    #[test]
    fn fetch_second_scroll() {
        assert_eq!(fetch("AAA\x17BBB", coord("1.1.1/1.1.1/1.1.2")), "BBB");
    }

    #[test]
    fn fetch_across_scroll_breaks() {
        let sample = "Hello World\x17Scroll #2 -- this text will be selected\x17Scroll #3 - this text will be ignored";
        assert_eq!(fetch(sample, coord("1.1.1/1.1.1/1.1.1")), "Hello World");
        assert_eq!(
            fetch(sample, coord("1.1.1/1.1.1/1.1.2")),
            "Scroll #2 -- this text will be selected"
        );
        assert_eq!(
            fetch(sample, coord("1.1.1/1.1.1/1.1.3")),
            "Scroll #3 - this text will be ignored"
        );
    }

    #[test]
    fn fetch_absent_coordinate_is_empty() {
        assert_eq!(fetch("AAA\x17BBB", coord("5.1.1/1.1.1/1.1.1")), "");
        assert_eq!(fetch("AAA\x18BBB", coord("1.1.1/1.1.1/1.1.2")), "");
    }

    #[test]
    fn locates_the_insertion_point_past_the_stream_end() {
        let test = "aaa\x01bbb\x17ccc";
        let parts = get_subspace_coordinates(test, coord("2.1.1/1.1.1/1.1.3"));
        assert_eq!(parts.start, 11);
        assert_eq!(parts.end, 11);
        assert_eq!(parts.insertion.to_string(), "2.1.1/1.1.1/1.1.2");
    }

    #[test]
    fn locates_an_exact_match_mid_stream() {
        let parts = get_subspace_coordinates("AAA\x17BBB\x17CCC", coord("1.1.1/1.1.1/1.1.2"));
        assert_eq!(parts.start, 4);
        assert_eq!(parts.end, 7);
        assert_eq!(parts.insertion.to_string(), "1.1.1/1.1.1/1.1.2");
    }

    #[test]
    fn falls_back_to_the_nearest_coordinate_below() {
        // 1.1.2 is skipped over by the section break, so the insertion
        // point lands just before it with the fallback coordinate
        let parts = get_subspace_coordinates("AAA\x18BBB", coord("1.1.1/1.1.1/1.1.2"));
        assert_eq!(parts.start, parts.end);
        assert_eq!(parts.insertion.to_string(), "1.1.1/1.1.1/1.1.1");
    }

    #[test]
    fn target_below_home_normalizes_to_offset_zero() {
        let parts = get_subspace_coordinates("AAA", coord("0.0.0/0.0.0/0.0.0"));
        assert_eq!(parts.start, 0);
        assert_eq!(parts.end, 0);
        assert_eq!(fetch("AAA", coord("0.0.0/0.0.0/0.0.0")), "");
    }

    #[test]
    fn dead_reckoning_through_every_dimension() {
        let mut test = String::new();
        test += "random text in 1.1.1/1.1.1/1.1.1 that we can skip past";
        test += "\x01";
        test += "everything in here is at 2.1.1/1.1.1/1.1.1";
        test += "\x17";
        test += "and now we're at 2.1.1/1.1.1/1.1.2";
        test += "\x17";
        test += "moving on up to 2.1.1/1.1.1/1.1.3";
        test += "\x1A";
        test += "and now over to 2.1.1/1.1.2/1.1.1";
        test += "\x1F";
        test += "woot, up to 2.2.1/1.1.1/1.1.1";
        test += "\x01";
        test += "here we are at 3.1.1/1.1.1.1.1";
        test += "\x01\x01";
        test += "getting closer to our target now 5.1.1/1.1.1/1.1.1";
        test += "\x1F\x1F\x1F\x1F";
        test += "\x1E\x1E\x1E\x1E";
        test += "here we go! 5.5.5/1.1.1/1.1.1";
        test += "\x1D\x1D\x1D";
        test += "\x1A\x1A\x1A";
        test += "this test appears at 5.5.5/4.1.4/1.1.1";
        test += "\x1C\x1C\x1C\x1C\x1C";
        test += "\x19\x19\x19\x19";
        test += "\x1A\x1A\x1A\x1A\x1A\x1A";
        test += "\x19\x19\x19\x19";
        test += "\x17\x17\x17\x17\x17";
        test += "here's a test at 5.5.5/4.6.7/5.1.6";
        test += "\x17";
        test += "\x19\x19\x19\x19";
        test += "\x18\x18\x18\x18";
        test += "\x17\x17\x17\x17\x17\x17\x17\x17";
        test += "Expected Test Pattern Alpha Whisky Tango Foxtrot";

        assert_eq!(
            fetch(&test, coord("5.5.5/4.6.7/9.5.9")),
            "Expected Test Pattern Alpha Whisky Tango Foxtrot"
        );
        assert_eq!(
            fetch(&test, coord("5.5.5/4.6.7/5.1.6")),
            "here's a test at 5.5.5/4.6.7/5.1.6"
        );
    }
}
