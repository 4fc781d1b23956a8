//! The index builder: a coordinate-to-byte-offset table over a document,
//! itself serialized as a phext stream.

use crate::coordinate::Coordinate;
use crate::locator::fetch;
use crate::tokenizer::Phoken;
use crate::tokenizer::dephokenize;
use crate::tokenizer::phokenize;

/// Compute the absolute byte offset of every scroll in the document,
/// returned as tokens whose text is the offset rendered in decimal.
///
/// The running offset accounts for the separator bytes synthesized between
/// scrolls as well as the scroll text itself, so each entry points at the
/// first byte of its scroll in the normalized stream.
pub fn index_phokens(phext: &str) -> Vec<Phoken> {
    let phokens = phokenize(phext);
    let mut offset = 0;
    let mut coord = Coordinate::home();
    let mut output = Vec::with_capacity(phokens.len());

    for token in &phokens {
        let delims = coord.advance_to(token.coord);
        offset += delims.len();
        output.push(Phoken {
            coord,
            scroll: offset.to_string(),
        });
        offset += token.scroll.len();
    }

    return output;
}

/// Serialize the offset table as an on-stream table of contents.
pub fn index(phext: &str) -> String {
    return dephokenize(&index_phokens(phext));
}

/// Look up the byte offset of the scroll at `coord`, falling back to the
/// nearest preceding entry when no exact match exists. Returns `0` when
/// the table is empty.
pub fn offset(phext: &str, coord: Coordinate) -> usize {
    let output = index_phokens(phext);

    let mut best = Coordinate::home();
    for phoken in &output {
        if phoken.coord <= coord {
            best = phoken.coord;
        }
    }

    let table = dephokenize(&output);
    return fetch(&table, best).parse().unwrap_or(0);
}
