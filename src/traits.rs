pub mod puzzle {
    use colored::Colorize;
    use crate::puzzle::Puzzle;
    use crate::tile::Tile;

    pub trait DebugPrintable {
        /// Box drawn grid; with `manhattan_distance` each cell shows its
        /// tile's distance from home instead of the tile.
        fn pretty_print(&self, manhattan_distance: bool) -> String;
    }

    impl DebugPrintable for Puzzle {
        fn pretty_print(&self, manhattan_distance: bool) -> String {
            let size = self.size();
            let width = (size * size).to_string().len().max(1);
            let rule = |left: &str, mid: &str, right: &str| -> String {
                let segments: Vec<String> = (0..size).map(|_| "─".repeat(width + 2)).collect();
                format!("{}{}{}", left, segments.join(mid), right)
            };

            let mut lines: Vec<String> = Vec::with_capacity(2 * size + 1);
            lines.push(rule("┌", "┬", "┐"));

            for (row_idx, row) in self.rows().enumerate() {
                let mut line = String::from("│");
                for (col_idx, tile) in row.iter().enumerate() {
                    let cell = if manhattan_distance {
                        let idx = row_idx * size + col_idx;
                        format!("{:>width$}", self.manhattan_distance(idx), width = width)
                    } else {
                        match tile {
                            Tile::Space => format!("{:>width$}", "", width = width).on_green().to_string(),
                            Tile::Value(value) => format!("{:>width$}", value, width = width),
                        }
                    };
                    line.push_str(&format!(" {} │", cell));
                }
                lines.push(line);

                if row_idx < size - 1 {
                    lines.push(rule("├", "┼", "┤"));
                }
            }

            lines.push(rule("└", "┴", "┘"));
            lines.join("\n")
        }
    }


    /// Lower bound on the number of moves left to reach the solved arrangement.
    pub trait Heuristic {
        fn get_heuristic(&self) -> u32;
    }

    impl Puzzle {
        /// L1 distance between the tile at `idx` and its solved cell; 0 for the blank.
        pub fn manhattan_distance(&self, idx: usize) -> u32 {
            let size = self.size();
            let value = match self.tiles().get(idx).and_then(Tile::value) {
                Some(value) => value as usize,
                None => return 0,
            };

            let current_row = idx / size;
            let current_col = idx % size;
            let solved_row = (value - 1) / size;
            let solved_col = (value - 1) % size;

            (current_row.abs_diff(solved_row) + current_col.abs_diff(solved_col)) as u32
        }
    }

    impl Heuristic for Puzzle {
        fn get_heuristic(&self) -> u32 {
            (0..self.tiles().len())
                .map(|idx| self.manhattan_distance(idx))
                .sum()
        }
    }
}
