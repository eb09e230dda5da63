//! Static QWERTY adjacency model.
//!
//! Near neighbors are the horizontally adjacent keys on the same row; far
//! neighbors are the touching keys on the rows above and below. Characters
//! without an entry (digits) have no neighbors.

/// Relative likelihood that the typed letter was the intended one.
pub const SAME_WEIGHT: f64 = 0.75;
/// Relative likelihood of a slip to a near neighbor.
pub const NEAR_WEIGHT: f64 = 0.08;
/// Relative likelihood of a slip to a far neighbor.
pub const FAR_WEIGHT: f64 = 0.03;

/// (near, far) neighbors of a key. Weights do not sum to 1; they are
/// relative scores, not a distribution.
pub fn neighbors(letter: char) -> (&'static [char], &'static [char]) {
    match letter {
        'q' => (&['w'], &['a', 's']),
        'w' => (&['q', 'e'], &['a', 's', 'd']),
        'e' => (&['w', 'r'], &['s', 'd', 'f']),
        'r' => (&['e', 't'], &['d', 'f', 'g']),
        't' => (&['r', 'y'], &['f', 'g', 'h']),
        'y' => (&['t', 'u'], &['g', 'h', 'j']),
        'u' => (&['y', 'i'], &['h', 'j', 'k']),
        'i' => (&['u', 'o'], &['j', 'k', 'l']),
        'o' => (&['i', 'p'], &['k', 'l']),
        'p' => (&['o'], &['l']),
        'a' => (&['s'], &['q', 'w', 'z']),
        's' => (&['a', 'd'], &['w', 'e', 'z', 'x']),
        'd' => (&['s', 'f'], &['e', 'r', 'x', 'c']),
        'f' => (&['d', 'g'], &['r', 't', 'c', 'v']),
        'g' => (&['f', 'h'], &['t', 'y', 'v', 'b']),
        'h' => (&['g', 'j'], &['y', 'u', 'b', 'n']),
        'j' => (&['h', 'k'], &['u', 'i', 'n', 'm']),
        'k' => (&['j', 'l'], &['i', 'o', 'm']),
        'l' => (&['k'], &['o', 'p']),
        'z' => (&['x'], &['a', 's']),
        'x' => (&['z', 'c'], &['s', 'd']),
        'c' => (&['x', 'v'], &['d', 'f']),
        'v' => (&['c', 'b'], &['f', 'g']),
        'b' => (&['v', 'n'], &['g', 'h']),
        'n' => (&['b', 'm'], &['h', 'j']),
        'm' => (&['n'], &['j', 'k']),
        _ => (&[], &[]),
    }
}
