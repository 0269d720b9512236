//! Letter shape library
//!
//! Static 5x5 occupancy grids for A-Z, row-major with the top row first
//! (screen coordinates). A 1 marks a solid cell. Lookups never fail:
//! anything outside A-Z resolves to the default grid.

/// One letter shape: `GRID_ROWS` rows of `GRID_COLS` cells
pub type LetterGrid = [[u8; 5]; 5];

pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;

static GRIDS: [LetterGrid; 26] = [
    [[0, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 1, 1, 1, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1]], // A
    [[1, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 1, 1, 1, 0]], // B
    [[0, 1, 1, 1, 1], [1, 0, 0, 0, 0], [1, 0, 0, 0, 0], [1, 0, 0, 0, 0], [0, 1, 1, 1, 1]], // C
    [[1, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 1, 1, 1, 0]], // D
    [[1, 1, 1, 1, 1], [1, 0, 0, 0, 0], [1, 1, 1, 1, 0], [1, 0, 0, 0, 0], [1, 1, 1, 1, 1]], // E
    [[1, 1, 1, 1, 1], [1, 0, 0, 0, 0], [1, 1, 1, 1, 0], [1, 0, 0, 0, 0], [1, 0, 0, 0, 0]], // F
    [[0, 1, 1, 1, 1], [1, 0, 0, 0, 0], [1, 0, 0, 1, 1], [1, 0, 0, 0, 1], [0, 1, 1, 1, 0]], // G
    [[1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 1, 1, 1, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1]], // H
    [[0, 1, 1, 1, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0], [0, 1, 1, 1, 0]], // I
    [[0, 0, 1, 1, 1], [0, 0, 0, 1, 0], [0, 0, 0, 1, 0], [1, 0, 0, 1, 0], [0, 1, 1, 0, 0]], // J
    [[1, 0, 0, 0, 1], [1, 0, 0, 1, 0], [1, 1, 1, 0, 0], [1, 0, 0, 1, 0], [1, 0, 0, 0, 1]], // K
    [[1, 0, 0, 0, 0], [1, 0, 0, 0, 0], [1, 0, 0, 0, 0], [1, 0, 0, 0, 0], [1, 1, 1, 1, 1]], // L
    [[1, 0, 0, 0, 1], [1, 1, 0, 1, 1], [1, 0, 1, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1]], // M
    [[1, 0, 0, 0, 1], [1, 1, 0, 0, 1], [1, 0, 1, 0, 1], [1, 0, 0, 1, 1], [1, 0, 0, 0, 1]], // N
    [[0, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [0, 1, 1, 1, 0]], // O
    [[1, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 1, 1, 1, 0], [1, 0, 0, 0, 0], [1, 0, 0, 0, 0]], // P
    [[0, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 1, 0], [0, 1, 1, 0, 1]], // Q
    [[1, 1, 1, 1, 0], [1, 0, 0, 0, 1], [1, 1, 1, 1, 0], [1, 0, 0, 1, 0], [1, 0, 0, 0, 1]], // R
    [[0, 1, 1, 1, 0], [1, 0, 0, 0, 0], [0, 1, 1, 1, 0], [0, 0, 0, 0, 1], [0, 1, 1, 1, 0]], // S
    [[1, 1, 1, 1, 1], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0]], // T
    [[1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [0, 1, 1, 1, 0]], // U
    [[1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [0, 1, 0, 1, 0], [0, 0, 1, 0, 0]], // V
    [[1, 0, 0, 0, 1], [1, 0, 0, 0, 1], [1, 0, 1, 0, 1], [1, 0, 1, 0, 1], [0, 1, 0, 1, 0]], // W
    [[1, 0, 0, 0, 1], [0, 1, 0, 1, 0], [0, 0, 1, 0, 0], [0, 1, 0, 1, 0], [1, 0, 0, 0, 1]], // X
    [[1, 0, 0, 0, 1], [0, 1, 0, 1, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0], [0, 0, 1, 0, 0]], // Y
    [[1, 1, 1, 1, 1], [0, 0, 0, 1, 0], [0, 0, 1, 0, 0], [0, 1, 0, 0, 0], [1, 1, 1, 1, 1]], // Z
];

/// Grid for a letter. Case-insensitive; anything outside A-Z gets the
/// 'A' grid so a block is always buildable.
pub fn shape_of(letter: char) -> &'static LetterGrid {
    let index = match letter.to_ascii_uppercase() {
        c @ 'A'..='Z' => (c as u8 - b'A') as usize,
        _ => 0,
    };
    &GRIDS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_of_known_letter() {
        let h = shape_of('H');
        // Crossbar row is fully solid, top row only the stems
        assert_eq!(h[2], [1, 1, 1, 1, 1]);
        assert_eq!(h[0], [1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_shape_of_is_case_insensitive() {
        assert_eq!(shape_of('q'), shape_of('Q'));
    }

    #[test]
    fn test_shape_of_unknown_falls_back() {
        assert_eq!(shape_of('?'), shape_of('A'));
        assert_eq!(shape_of('7'), shape_of('A'));
    }

    #[test]
    fn test_every_grid_has_solid_cells() {
        for letter in 'A'..='Z' {
            let solid: usize = shape_of(letter)
                .iter()
                .flatten()
                .filter(|&&cell| cell == 1)
                .count();
            assert!(solid > 0, "letter {} has no solid cells", letter);
        }
    }
}
