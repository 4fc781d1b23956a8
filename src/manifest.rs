//! Per-scroll content digests, layered on top of the tokenizer.
//!
//! The digest algorithm is a collaborator choice, not part of the wire
//! contract: the manifest's structure (one fixed-width digest per scroll,
//! at that scroll's coordinate) is what matters. We hash with blake3 and
//! render lowercase hex.

use crate::tokenizer::dephokenize;
use crate::tokenizer::phokenize;

/// Hash a scroll's content into a fixed-width hex digest.
pub fn checksum(scroll: &str) -> String {
    return blake3::hash(scroll.as_bytes()).to_hex().to_string();
}

/// Replace every scroll with the checksum of its content, preserving
/// coordinates. The result is itself a phext stream.
pub fn manifest(phext: &str) -> String {
    let mut phokens = phokenize(phext);
    for token in &mut phokens {
        token.scroll = checksum(&token.scroll);
    }
    return dephokenize(&phokens);
}
