//! Cross-document combination: merge two streams scroll by scroll, or
//! subtract one stream's coordinates from another.

use crate::coordinate::Coordinate;
use crate::tokenizer::Phoken;
use crate::tokenizer::phokenize;

/// Advance `coord` to the token's coordinate and append its text, returning
/// the emitted bytes. Shared by [`merge`] and [`subtract`] so separators
/// are synthesized exactly once per coordinate transition.
fn append_scroll(token: &Phoken, coord: &mut Coordinate) -> String {
    let mut output = coord.advance_to(token.coord);
    output.push_str(&token.scroll);
    return output;
}

/// Interleave two streams in coordinate order.
///
/// A sorted merge-join over both token sequences: the side with the lower
/// coordinate advances; on a tie both sides emit at that coordinate, left
/// text before right. A single running coordinate is shared across both
/// inputs, so coordinates unique to one side pass through unchanged and
/// shared coordinates concatenate.
pub fn merge(left: &str, right: &str) -> String {
    let tl = phokenize(left);
    let tr = phokenize(right);
    let mut tli = 0;
    let mut tri = 0;
    let mut result = String::new();
    let mut coord = Coordinate::home();

    loop {
        let have_left = tli < tl.len();
        let have_right = tri < tr.len();

        let left_first = have_left && have_right && tl[tli].coord <= tr[tri].coord;
        let right_first = have_left && have_right && tr[tri].coord <= tl[tli].coord;

        let pick_left = have_left && (!have_right || left_first);
        let pick_right = have_right && (!have_left || right_first);

        if pick_left {
            result.push_str(&append_scroll(&tl[tli], &mut coord));
            coord = tl[tli].coord;
            tli += 1;
        }
        if pick_right {
            result.push_str(&append_scroll(&tr[tri], &mut coord));
            coord = tr[tri].coord;
            tri += 1;
        }

        if !pick_left && !pick_right {
            break;
        }
    }

    return result;
}

/// Keep the scrolls of `left` whose coordinates do not appear in `right`.
///
/// This removes whole scrolls by address, not text spans: a coordinate
/// present in both documents drops the left scroll regardless of content.
pub fn subtract(left: &str, right: &str) -> String {
    let pl = phokenize(left);
    let pr = phokenize(right);
    let mut result = String::new();
    let mut pri = 0;
    let mut coord = Coordinate::home();

    for token in &pl {
        while pri < pr.len() && pr[pri].coord < token.coord {
            pri += 1;
        }
        if pri < pr.len() && pr[pri].coord == token.coord {
            pri += 1;
            continue;
        }
        result.push_str(&append_scroll(token, &mut coord));
    }

    return result;
}
