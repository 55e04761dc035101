use super::geometry::{BOARD_COLS, BOARD_ROWS};

/// One complete board state: exactly [`BOARD_ROWS`] lines of [`BOARD_COLS`]
/// uppercase characters. Normalization happens once at construction; missing
/// trailing lines render as blank rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    cells: [[char; BOARD_COLS]; BOARD_ROWS],
}

impl Scene {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = [[' '; BOARD_COLS]; BOARD_ROWS];
        for (row, line) in lines.into_iter().take(BOARD_ROWS).enumerate() {
            for (col, ch) in line.as_ref().chars().take(BOARD_COLS).enumerate() {
                cells[row][col] = ch.to_ascii_uppercase();
            }
        }
        Self { cells }
    }

    pub fn blank() -> Self {
        Self::new(std::iter::empty::<&str>())
    }

    /// Character at (row, col); `None` outside the board.
    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn short_lines_are_right_padded() {
        let scene = Scene::new(["HI"]);
        assert_eq!(scene.lines().next().unwrap(), "HI        ");
    }

    #[test]
    fn long_lines_are_truncated_to_board_width() {
        let scene = Scene::new(["ABCDEFGHIJKLMN"]);
        assert_eq!(scene.lines().next().unwrap(), "ABCDEFGHIJ");
    }

    #[test]
    fn lowercase_is_folded() {
        let scene = Scene::new(["hello"]);
        assert_eq!(scene.char_at(0, 0), Some('H'));
        assert_eq!(scene.char_at(0, 4), Some('O'));
    }

    #[test]
    fn char_at_is_none_outside_the_board() {
        let scene = Scene::new(["HI"]);
        assert_eq!(scene.char_at(BOARD_ROWS, 0), None);
        assert_eq!(scene.char_at(0, BOARD_COLS), None);
    }

    #[test]
    fn missing_lines_are_blank_rows() {
        let scene = Scene::new(["ONLY"]);
        assert_eq!(scene.lines().count(), BOARD_ROWS);
        for line in scene.lines().skip(1) {
            assert_eq!(line, " ".repeat(BOARD_COLS));
        }
    }

    #[test]
    fn extra_lines_are_ignored() {
        let scene = Scene::new(["A", "B", "C", "D", "E"]);
        assert_eq!(scene.char_at(3, 0), Some('D'));
        assert_eq!(scene, Scene::new(["A", "B", "C", "D"]));
    }

    #[test]
    fn padded_input_is_equivalent() {
        assert_eq!(Scene::new(["CAT"]), Scene::new(["CAT       "]));
    }
}
