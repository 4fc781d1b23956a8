//! Navigation views over a document: short summaries, HTML and plain-text
//! scroll listings, and a per-scroll phonetic score. All of these are thin
//! compositions over the tokenizer with no invariants of their own.

use crate::coordinate::Coordinate;
use crate::tokenizer::phokenize;

/// Summarize a document: the first line of its first scroll, truncated to
/// 32 characters with a trailing ellipsis. Empty input has no summary.
pub fn create_summary(phext: &str) -> String {
    if phext.is_empty() {
        return String::from("No Summary");
    }

    let parts = phokenize(phext);
    let text = match parts.first() {
        Some(token) => token.scroll.split('\n').next().unwrap_or("").to_string(),
        None => return String::from("No Summary"),
    };

    let mut result: String = text.chars().take(32).collect();
    if result.len() < phext.len() {
        result.push_str("...");
    }
    return result;
}

/// Render an HTML navigation list, one link per scroll. Each link is
/// `urlbase` followed by the scroll's url-encoded coordinate, labelled
/// with the address and a summary of the scroll.
pub fn navmap(urlbase: &str, phext: &str) -> String {
    let phokens = phokenize(phext);
    let mut result = String::new();

    if !phokens.is_empty() {
        result.push_str("<ul>\n");
    }
    for phoken in &phokens {
        let urle = phoken.coord.to_urlencoded();
        let address = phoken.coord.to_string();
        let summary = create_summary(&phoken.scroll);
        result.push_str(&format!(
            "<li><a href=\"{urlbase}{urle}\">{address} {summary}</a></li>\n"
        ));
    }
    if !phokens.is_empty() {
        result.push_str("</ul>\n");
    }

    return result;
}

/// Render a plain-text navigation list, one `* address: summary` line per
/// scroll.
pub fn textmap(phext: &str) -> String {
    let phokens = phokenize(phext);
    let mut result = String::new();
    for phoken in &phokens {
        result.push_str(&format!(
            "* {}: {}\n",
            phoken.coord,
            create_summary(&phoken.scroll)
        ));
    }
    return result;
}

/// Phonetic weight of a scroll: 1 plus the soundex letter-class values of
/// its characters, folded into `[0, 99)`.
pub fn soundex_internal(buffer: &str) -> u32 {
    let mut value = 1;
    for c in buffer.chars() {
        value += match c {
            'b' | 'p' | 'f' | 'v' => 1,
            'c' | 's' | 'k' | 'g' | 'j' | 'q' | 'x' | 'z' => 2,
            'd' | 't' => 3,
            'l' => 4,
            'm' | 'n' => 5,
            'r' => 6,
            _ => 0,
        };
    }
    return value % 99;
}

/// Map every scroll to its phonetic weight, serialized at the scroll's
/// coordinate.
pub fn soundex_v1(phext: &str) -> String {
    let phokens = phokenize(phext);
    let mut result = String::new();
    let mut coord = Coordinate::home();
    for token in &phokens {
        let soundex = soundex_internal(&token.scroll);
        result.push_str(&coord.advance_to(token.coord));
        result.push_str(&soundex.to_string());
    }
    return result;
}
