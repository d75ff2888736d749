//! The 5×13 composition table of the point–interval calculus.
//!
//! `COMPOSITION[a][b]` is the relation between point t and interval Z given
//! basic point–interval relation `a` between t and Y and basic
//! interval–interval relation `b` between Y and Z. Cells are point–interval
//! relations; columns follow the interval calculus order `p m o F D s e S d
//! f O M P`, rows the point order `b c i t a`.

/// Compile-time letter-string-to-mask conversion for point–interval cells.
const fn rel(s: &str) -> u16 {
    let bytes = s.as_bytes();
    let mut mask = 0u16;
    let mut i = 0;
    while i < bytes.len() {
        mask |= 1u16 << ordinal(bytes[i]);
        i += 1;
    }
    mask
}

const fn ordinal(letter: u8) -> u16 {
    match letter {
        b'b' => 0,
        b'c' => 1,
        b'i' => 2,
        b't' => 3,
        b'a' => 4,
        _ => panic!("unknown point-interval relation letter in composition table"),
    }
}

#[rustfmt::skip]
pub(crate) static COMPOSITION: [[u16; 13]; 5] = [
    // row b (before the interval)
    [rel("b"), rel("b"), rel("b"), rel("b"), rel("b"), rel("b"), rel("b"), rel("b"),
     rel("bci"), rel("bci"), rel("bci"), rel("bci"), rel("bcita")],
    // row c (commences the interval)
    [rel("b"), rel("b"), rel("b"), rel("b"), rel("b"), rel("c"), rel("c"), rel("c"),
     rel("i"), rel("i"), rel("i"), rel("t"), rel("a")],
    // row i (in the interval)
    [rel("b"), rel("b"), rel("bci"), rel("bci"), rel("bcita"), rel("i"), rel("i"), rel("ita"),
     rel("i"), rel("i"), rel("ita"), rel("a"), rel("a")],
    // row t (terminates the interval)
    [rel("b"), rel("c"), rel("i"), rel("t"), rel("a"), rel("i"), rel("t"), rel("a"),
     rel("i"), rel("t"), rel("a"), rel("a"), rel("a")],
    // row a (after the interval)
    [rel("bcita"), rel("ita"), rel("ita"), rel("a"), rel("a"), rel("ita"), rel("a"), rel("a"),
     rel("ita"), rel("a"), rel("a"), rel("a"), rel("a")],
];

#[cfg(test)]
mod tests {
    use super::COMPOSITION;

    #[test]
    fn test_identity_column() {
        // Composing with the interval EQUALS column (ordinal 6) is a no-op.
        for i in 0..5 {
            assert_eq!(COMPOSITION[i][6], 1u16 << i);
        }
    }

    #[test]
    fn test_no_cell_is_empty() {
        for row in COMPOSITION.iter() {
            for &cell in row.iter() {
                assert_ne!(cell, 0);
            }
        }
    }

    #[test]
    fn test_terminates_row_tracks_the_end() {
        // t = Y.end, so each cell is exactly where Y's end sits relative
        // to Z under the column relation.
        use crate::allen::AllenRelation as A;
        use crate::point::PointIntervalRelation as P;
        let expectations = [
            (A::PRECEDES, P::BEFORE),
            (A::MEETS, P::COMMENCES),
            (A::OVERLAPS, P::IN),
            (A::FINISHED_BY, P::TERMINATES),
            (A::CONTAINS, P::AFTER),
            (A::EQUALS, P::TERMINATES),
            (A::MET_BY, P::AFTER),
        ];
        for (allen, expected) in expectations {
            let cell = COMPOSITION[3][allen.ordinal().unwrap()];
            assert_eq!(cell, expected.mask(), "t . {allen}");
        }
    }
}
