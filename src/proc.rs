use crate::grid::{Cell, Grid};

/// Computes the generation that follows `grid`.
///
/// Every cell is decided from the same input snapshot, and the result is
/// written into fresh storage, so no cell ever sees a neighbor that was
/// already updated in this pass.
pub fn next_generation(grid: &Grid) -> Grid {
    let (w, h) = grid.dimensions();
    let mut cells = Vec::with_capacity(w * h);

    for y in 0..h {
        for x in 0..w {
            let alive = grid.neighbors_unchecked(x, y).alive();
            cells.push(produce_value(grid.get(x, y), alive));
        }
    }

    Grid::from_cells(w, h, cells)
}

/// The rule for one cell. Branches are checked in order, first match wins.
pub fn produce_value(current: Cell, num_alive: usize) -> Cell {
    if num_alive < 2 {
        // underpopulation
        Cell::Dead
    } else if num_alive > 3 {
        // overpopulation
        Cell::Dead
    } else if current == Cell::Dead && num_alive == 3 {
        // reproduction
        Cell::Alive
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_cells(g: &Grid) -> Vec<(usize, usize)> {
        let (w, h) = g.dimensions();
        let mut v = vec![];
        for y in 0..h {
            for x in 0..w {
                if g.cell_at(x, y).unwrap().is_alive() {
                    v.push((x, y));
                }
            }
        }
        v
    }

    #[test_log::test]
    fn rule_table() {
        use Cell::*;
        for n in 0..=8 {
            let from_dead = produce_value(Dead, n);
            let from_alive = produce_value(Alive, n);
            match n {
                0 | 1 => assert_eq!((from_dead, from_alive), (Dead, Dead)),
                2 => assert_eq!((from_dead, from_alive), (Dead, Alive)),
                3 => assert_eq!((from_dead, from_alive), (Alive, Alive)),
                _ => assert_eq!((from_dead, from_alive), (Dead, Dead)),
            }
        }
    }

    #[test_log::test]
    fn isolated_cell_dies() {
        let g = Grid::new(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
        let next = next_generation(&g);
        assert_eq!(next.population(), 0);
    }

    #[test_log::test]
    fn crowded_cell_dies() {
        // centre has 4 alive neighbors
        let g = Grid::new(&[[1u8, 0, 1], [0, 1, 0], [1, 0, 1]]).unwrap();
        let next = next_generation(&g);
        assert_eq!(next.cell_at(1, 1), Ok(Cell::Dead));

        // a dead centre with 4 neighbors stays dead
        let g = Grid::new(&[[1u8, 0, 1], [0, 0, 0], [1, 0, 1]]).unwrap();
        assert_eq!(next_generation(&g).cell_at(1, 1), Ok(Cell::Dead));
    }

    #[test_log::test]
    fn dead_cell_with_three_is_born() {
        let g = Grid::new(&[[1u8, 1, 0], [1, 0, 0], [0, 0, 0]]).unwrap();
        let next = next_generation(&g);
        assert_eq!(next.cell_at(1, 1), Ok(Cell::Alive));
        // block completes into a still life
        assert_eq!(alive_cells(&next), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(next_generation(&next), next);
    }

    #[test_log::test]
    fn corner_uses_in_bounds_neighbors_only() {
        let g = Grid::new(&[[1u8, 1, 0], [1, 0, 0], [0, 0, 0]]).unwrap();
        // (0, 0) has exactly its right, bottom and bottom-right neighbors
        assert_eq!(g.neighbors(0, 0).unwrap().alive(), 2);
        assert_eq!(next_generation(&g).cell_at(0, 0), Ok(Cell::Alive));

        let lone = Grid::new(&[[1u8, 0], [0, 0]]).unwrap();
        assert_eq!(next_generation(&lone).population(), 0);
    }

    #[test_log::test]
    fn update_is_synchronous() {
        // An in-place pass in row order would kill (1, 0) first and then
        // starve (2, 0); the snapshot rule turns the row into a column.
        let g = Grid::new(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
        let next = next_generation(&g);
        assert_eq!(alive_cells(&next), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test_log::test]
    fn keeps_dimensions() {
        let g = Grid::new(&[[1u8, 0, 1, 1, 0, 1, 0]; 3]).unwrap();
        assert_eq!(next_generation(&g).dimensions(), (7, 3));
    }

    #[test_log::test]
    fn input_is_untouched() {
        let g = Grid::new(&[[0u8, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
        let before = g.clone();
        let next = next_generation(&g);
        assert_eq!(g, before);
        assert_ne!(next, g);
    }
}
