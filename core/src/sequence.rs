//! The merge law: two tiles of value `v` combine into `round(v * φ)`.
//!
//! Starting at 1 this walks 1, 2, 3, 5, 8, 13, 21, ... which is the Fibonacci
//! sequence without the duplicated leading one.

use crate::TileValue;

/// Golden ratio, `(1 + √5) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Value produced by merging two tiles of `value`.
///
/// Rounds half up, saturating at [`TileValue::MAX`].
pub fn next_value(value: TileValue) -> TileValue {
    // float to int casts saturate, adding one half then truncating rounds to nearest
    (value as f64 * PHI + 0.5) as TileValue
}

/// Iterates the sequence starting at `first`, stops once the next value would overflow.
pub fn values_from(first: TileValue) -> impl Iterator<Item = TileValue> {
    core::iter::successors(Some(first), |&value| {
        let next = next_value(value);
        (next > value && next < TileValue::MAX).then_some(next)
    })
}

/// Whether `value` can appear on a grid whose tiles start at `initial`.
///
/// Late-game spawns may also produce `next_value(initial)`, which is itself a member.
pub fn is_sequence_value(value: TileValue, initial: TileValue) -> bool {
    value == 0 || values_from(initial).take_while(|&v| v <= value).any(|v| v == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn next_value_follows_fibonacci_steps() {
        let pairs = [
            (1, 2),
            (2, 3),
            (3, 5),
            (5, 8),
            (8, 13),
            (13, 21),
            (21, 34),
            (34, 55),
            (55, 89),
            (89, 144),
            (144, 233),
        ];
        for (value, expected) in pairs {
            assert_eq!(next_value(value), expected, "next_value({value})");
        }
    }

    #[test]
    fn winning_tile_is_eleventh_term() {
        assert_eq!(values_from(1).nth(10), Some(144));
        assert!(is_sequence_value(144, 1));
    }

    #[test]
    fn sequence_stays_strictly_increasing() {
        let values: Vec<_> = values_from(1).collect();

        assert!(values.len() > 40);
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn membership() {
        assert!(is_sequence_value(0, 1));
        assert!(is_sequence_value(89, 1));
        assert!(!is_sequence_value(7, 1));
    }
}
