//! Coordinate-addressed editing: create, overwrite, splice, and delete
//! scrolls within a stream.

use crate::coordinate::Coordinate;
use crate::locator::get_subspace_coordinates;
use crate::tokenizer::normalize;
use crate::tokenizer::phokenize;

/// A pair of coordinates bounding a contiguous span of subspace. No
/// ordering is enforced at construction; consumers clamp a reversed range
/// instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Range {
    pub fn new(start: Coordinate, end: Coordinate) -> Range {
        return Range { start, end };
    }
}

/// Insert `scroll` at `location`.
///
/// Whether this creates a new scroll or appends to an existing one falls
/// out of the locator: an exact match splices the text onto the end of the
/// scroll already there, while a miss synthesizes the separators from the
/// nearest coordinate below and creates the scroll from nothing.
pub fn insert(phext: &str, location: Coordinate, scroll: &str) -> String {
    let parts = get_subspace_coordinates(phext, location);
    let mut subspace_coordinate = parts.insertion;
    let fixup = subspace_coordinate.advance_to(location);

    let (left, right) = phext.split_at(parts.end);
    let mut result = String::with_capacity(phext.len() + fixup.len() + scroll.len());
    result.push_str(left);
    result.push_str(&fixup);
    result.push_str(scroll);
    result.push_str(right);
    return result;
}

/// Overwrite the scroll at `location` with `scroll`, creating it if
/// absent.
///
/// Token-level rebuild: tokens before the location pass through, the token
/// at the location is replaced, and when no token matches, the new text is
/// emitted just before the first token beyond the location (or at the end
/// of the stream). An empty `scroll` deletes the target rather than
/// leaving a blank scroll behind.
pub fn replace(phext: &str, location: Coordinate, scroll: &str) -> String {
    let phokens = phokenize(phext);
    let mut coord = Coordinate::home();
    let mut result = String::new();
    let mut inserted = scroll.is_empty();

    for ith in &phokens {
        if ith.coord == location {
            if !inserted {
                result.push_str(&coord.advance_to(location));
                result.push_str(scroll);
                inserted = true;
            }
        } else {
            if !inserted && ith.coord > location {
                result.push_str(&coord.advance_to(location));
                result.push_str(scroll);
                inserted = true;
            }
            if !ith.scroll.is_empty() {
                result.push_str(&coord.advance_to(ith.coord));
                result.push_str(&ith.scroll);
            }
        }
    }

    if !inserted {
        result.push_str(&coord.advance_to(location));
        result.push_str(scroll);
    }

    return result;
}

/// Delete the scroll at `location` and canonicalize the result.
pub fn remove(phext: &str, location: Coordinate) -> String {
    let phase1 = replace(phext, location, "");
    return normalize(&phase1);
}

/// Replace every scroll whose coordinate falls within `location`
/// (inclusive at both ends) with `scroll`.
///
/// Coarser than [`replace`]: the locator resolves each endpoint to a byte
/// offset and the whole span between them is spliced out in one cut. An
/// end offset beyond the stream clamps to the stream length; a reversed
/// range clamps to an empty span at `start`.
pub fn range_replace(phext: &str, location: Range, scroll: &str) -> String {
    let parts_start = get_subspace_coordinates(phext, location.start);
    let parts_end = get_subspace_coordinates(phext, location.end);
    let max = phext.len();
    let start = parts_start.start.min(max);
    let end = parts_end.end.min(max).max(start);

    let mut result = String::with_capacity(start + scroll.len() + (max - end));
    result.push_str(&phext[..start]);
    result.push_str(scroll);
    result.push_str(&phext[end..]);
    return result;
}
