//! Partial-reveal hint generation.

use rand::seq::SliceRandom;

/// Placeholder glyph for masked letters.
const MASK: char = '*';

/// Round half away from zero for non-negative values.
fn round_half_up(x: f64) -> usize {
    (x + 0.5).floor() as usize
}

/// Produce a partially revealed form of an answer.
///
/// Every Unicode letter is masked with `*`; spaces, digits and
/// punctuation pass through untouched. `round_half_up(letters × fraction)`
/// of the masked letters (at least one) are then revealed at uniformly
/// shuffled positions. An answer with no letters is returned as-is.
pub fn hint(answer: &str, fraction: f64) -> String {
    let chars: Vec<char> = answer.chars().collect();
    let mut masked: Vec<char> = chars
        .iter()
        .map(|&c| if c.is_alphabetic() { MASK } else { c })
        .collect();

    let num_letters = chars.iter().filter(|c| c.is_alphabetic()).count();
    if num_letters == 0 {
        return masked.into_iter().collect();
    }

    let mut to_reveal = round_half_up(num_letters as f64 * fraction);
    if to_reveal == 0 {
        to_reveal = 1;
    }

    let mut positions: Vec<usize> = (0..chars.len()).collect();
    positions.shuffle(&mut rand::rng());

    let mut revealed = 0;
    for i in positions {
        if chars[i].is_alphabetic() {
            masked[i] = chars[i];
            revealed += 1;
            if revealed >= to_reveal {
                break;
            }
        }
    }

    masked.into_iter().collect()
}
