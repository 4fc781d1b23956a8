//! Tokenizer and detokenizer: the bridge between flat streams and ordered
//! (coordinate, text) pairs.
//!
//! Key behaviors:
//!
//! 1. **Breaks before content collapse.** A break byte seen before any text
//!    has accumulated only advances the walker; runs of consecutive breaks
//!    become a single coordinate jump with no empty scrolls in between.
//!
//! 2. **Line breaks are content.** `\n` separates lines within a scroll and
//!    never terminates one.
//!
//! 3. **Monotonic coordinates.** Breaks only advance the walker, so the
//!    token sequence produced by [`phokenize`] is already in coordinate
//!    order; no sort is needed.
//!
//! [`dephokenize`] inverts the scan, emitting the minimal separator run for
//! each coordinate delta and skipping empty scrolls entirely. That pruning
//! is what makes [`normalize`] canonical.

use crate::breaks::Dimension;
use crate::coordinate::Coordinate;

/// A scroll of text tagged with the coordinate at which it begins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Phoken {
    pub coord: Coordinate,
    pub scroll: String,
}

impl Phoken {
    pub fn new(coord: Coordinate, scroll: &str) -> Phoken {
        return Phoken {
            coord,
            scroll: scroll.to_string(),
        };
    }
}

/// One step of the scanning loop: the scroll read off the front of the
/// stream, the coordinate the next scroll starts at, and the unconsumed
/// remainder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollStep<'a> {
    pub token: Phoken,
    pub next: Coordinate,
    pub remaining: &'a str,
}

/// Scan a single scroll off the front of `phext`, starting the walker at
/// `start`.
///
/// Text accumulates until a structural break arrives *and* at least one
/// character has already been gathered; breaks seen earlier advance the
/// walker silently. The returned token carries the coordinate its text
/// begins at, `next` is where the following call should resume, and
/// `remaining` is the unread tail of the stream.
pub fn next_scroll(phext: &str, start: Coordinate) -> ScrollStep<'_> {
    let mut location = start;
    let mut begin = start;
    let mut output = String::new();
    let mut consumed = phext.len();

    for (index, byte) in phext.char_indices() {
        if let Some(dimension) = Dimension::classify(byte) {
            location.apply_break(dimension);
            if !output.is_empty() {
                consumed = index + byte.len_utf8();
                break;
            }
        } else {
            begin = location;
            output.push(byte);
        }
    }

    return ScrollStep {
        token: Phoken {
            coord: begin,
            scroll: output,
        },
        next: location,
        remaining: &phext[consumed..],
    };
}

/// Decode a stream into its ordered token sequence.
pub fn phokenize(phext: &str) -> Vec<Phoken> {
    let mut result = Vec::new();
    let mut coord = Coordinate::home();
    let mut temp = phext;

    loop {
        let step = next_scroll(temp, coord);
        if step.token.scroll.is_empty() {
            break;
        }
        coord = step.next;
        temp = step.remaining;
        result.push(step.token);
        if temp.is_empty() {
            break;
        }
    }

    return result;
}

/// Encode an ordered token sequence back into a minimal stream.
///
/// Tokens with empty text are skipped entirely, so detokenizing never
/// produces empty scrolls or redundant separator runs.
pub fn dephokenize(tokens: &[Phoken]) -> String {
    let mut result = String::new();
    let mut coord = Coordinate::home();
    for token in tokens {
        if token.scroll.is_empty() {
            continue;
        }
        result.push_str(&coord.advance_to(token.coord));
        result.push_str(&token.scroll);
    }
    return result;
}

/// Canonicalize a stream: drop empty scrolls and collapse every break run
/// to the minimal separator implied by its coordinate delta. Idempotent.
pub fn normalize(phext: &str) -> String {
    return dephokenize(&phokenize(phext));
}
