use super::interleave;
use crate::derived::lists;
use crate::tiers::Tiers;

const WHITESPACE: [char; 3] = [' ', '\n', '\t'];
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Printable characters, one per tier.
///
/// Lowercase letters come first and are interleaved with whitespace, which
/// is interleaved with digits, then uppercase, then punctuation.
pub fn chars() -> Tiers<char> {
    Tiers::from_sequence(|| {
        interleave(
            'a'..='z',
            interleave(
                WHITESPACE,
                interleave('0'..='9', interleave('A'..='Z', PUNCTUATION.chars())),
            ),
        )
    })
}

/// Strings over [`chars`]; a string's size is its length plus the sizes of
/// its characters.
pub fn strings() -> Tiers<String> {
    lists(&chars()).map(|cs| cs.into_iter().collect::<String>())
}
