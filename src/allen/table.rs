//! The 13×13 composition table of the interval calculus.
//!
//! Published domain knowledge, transcribed verbatim from Allen (1983),
//! Figure 4. Cells are written as letter strings and converted to masks at
//! compile time, so a transcription typo in a letter fails the build.

/// Converts a string of basic-relation letters to a mask. `const` so the
/// table below is fully baked at compile time; an unknown letter panics the
/// compilation.
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
        b'p' => 0,
        b'm' => 1,
        b'o' => 2,
        b'F' => 3,
        b'D' => 4,
        b's' => 5,
        b'e' => 6,
        b'S' => 7,
        b'd' => 8,
        b'f' => 9,
        b'O' => 10,
        b'M' => 11,
        b'P' => 12,
        _ => panic!("unknown basic relation letter in composition table"),
    }
}

/// `COMPOSITION[a][b]` is the relation between X and Z given basic
/// relations `a` between X and Y and `b` between Y and Z. Rows and columns
/// are in canonical ordinal order `p m o F D s e S d f O M P`.
#[rustfmt::skip]
pub(crate) static COMPOSITION: [[u16; 13]; 13] = [
    // row p (precedes)
    [rel("p"), rel("p"), rel("p"), rel("p"), rel("p"), rel("p"), rel("p"), rel("p"),
     rel("pmosd"), rel("pmosd"), rel("pmosd"), rel("pmosd"), rel("pmoFDseSdfOMP")],
    // row m (meets)
    [rel("p"), rel("p"), rel("p"), rel("p"), rel("p"), rel("m"), rel("m"), rel("m"),
     rel("osd"), rel("osd"), rel("osd"), rel("Fef"), rel("DSOMP")],
    // row o (overlaps)
    [rel("p"), rel("p"), rel("pmo"), rel("pmo"), rel("pmoFD"), rel("o"), rel("o"), rel("oFD"),
     rel("osd"), rel("osd"), rel("oFDseSdfO"), rel("DSO"), rel("DSOMP")],
    // row F (finished by)
    [rel("p"), rel("m"), rel("o"), rel("F"), rel("D"), rel("o"), rel("F"), rel("D"),
     rel("osd"), rel("Fef"), rel("DSO"), rel("DSO"), rel("DSOMP")],
    // row D (contains)
    [rel("pmoFD"), rel("oFD"), rel("oFD"), rel("D"), rel("D"), rel("oFD"), rel("D"), rel("D"),
     rel("oFDseSdfO"), rel("DSO"), rel("DSO"), rel("DSO"), rel("DSOMP")],
    // row s (starts)
    [rel("p"), rel("p"), rel("pmo"), rel("pmo"), rel("pmoFD"), rel("s"), rel("s"), rel("seS"),
     rel("d"), rel("d"), rel("dfO"), rel("M"), rel("P")],
    // row e (equals)
    [rel("p"), rel("m"), rel("o"), rel("F"), rel("D"), rel("s"), rel("e"), rel("S"),
     rel("d"), rel("f"), rel("O"), rel("M"), rel("P")],
    // row S (started by)
    [rel("pmoFD"), rel("oFD"), rel("oFD"), rel("D"), rel("D"), rel("seS"), rel("S"), rel("S"),
     rel("dfO"), rel("O"), rel("O"), rel("M"), rel("P")],
    // row d (during)
    [rel("p"), rel("p"), rel("pmosd"), rel("pmosd"), rel("pmoFDseSdfOMP"), rel("d"), rel("d"), rel("dfOMP"),
     rel("d"), rel("d"), rel("dfOMP"), rel("P"), rel("P")],
    // row f (finishes)
    [rel("p"), rel("m"), rel("osd"), rel("Fef"), rel("DSOMP"), rel("d"), rel("f"), rel("OMP"),
     rel("d"), rel("f"), rel("OMP"), rel("P"), rel("P")],
    // row O (overlapped by)
    [rel("pmoFD"), rel("oFD"), rel("oFDseSdfO"), rel("DSO"), rel("DSOMP"), rel("dfO"), rel("O"), rel("OMP"),
     rel("dfO"), rel("O"), rel("OMP"), rel("P"), rel("P")],
    // row M (met by)
    [rel("pmoFD"), rel("seS"), rel("dfO"), rel("M"), rel("P"), rel("dfO"), rel("M"), rel("P"),
     rel("dfO"), rel("M"), rel("P"), rel("P"), rel("P")],
    // row P (preceded by)
    [rel("pmoFDseSdfOMP"), rel("dfOMP"), rel("dfOMP"), rel("P"), rel("P"), rel("dfOMP"), rel("P"), rel("P"),
     rel("dfOMP"), rel("P"), rel("P"), rel("P"), rel("P")],
];

#[cfg(test)]
mod tests {
    use super::COMPOSITION;
    use crate::allen::AllenRelation;

    #[test]
    fn test_identity_row_and_column() {
        // Composing with EQUALS (ordinal 6) changes nothing, in either order.
        for i in 0..13 {
            assert_eq!(COMPOSITION[6][i], 1u16 << i, "e . {i}");
            assert_eq!(COMPOSITION[i][6], 1u16 << i, "{i} . e");
        }
    }

    #[test]
    fn test_converse_symmetry() {
        // (a . b)^-1 == b^-1 . a^-1 must hold cell by cell; this catches
        // most transcription slips.
        for a in 0..13usize {
            for b in 0..13usize {
                let cell = AllenRelation::from_mask(COMPOSITION[a][b]);
                let mirrored =
                    AllenRelation::from_mask(COMPOSITION[12 - b][12 - a]);
                assert_eq!(
                    cell.converse(),
                    mirrored,
                    "converse symmetry broken at row {a}, column {b}"
                );
            }
        }
    }

    #[test]
    fn test_no_cell_is_empty() {
        // Two consistent basic relations always admit at least one
        // possibility for the outer pair.
        for row in COMPOSITION.iter() {
            for &cell in row.iter() {
                assert_ne!(cell, 0);
            }
        }
    }
}
