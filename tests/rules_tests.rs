use colony::cell::Age;
use colony::display::Display;
use colony::grid::Grid;
use colony::rules;
use proptest::prelude::*;

/// Counts neighbors the slow way, straight from the definition
fn reference_count(grid: &Grid, row: usize, col: usize) -> usize {
    let mut n = 0;

    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }

            let (r, c) = (row as isize + dr, col as isize + dc);
            if r < 0 || c < 0 {
                continue;
            }

            if let Ok(age) = grid.get(r as usize, c as usize) {
                if age > 0 {
                    n += 1;
                }
            }
        }
    }

    n
}

fn grid_strategy() -> impl Strategy<Value = Grid> {
    (1usize..10, 1usize..10)
        .prop_flat_map(|(rows, cols)| {
            let age = prop_oneof![3 => Just(0 as Age), 2 => 1 as Age..30];

            prop::collection::vec(prop::collection::vec(age, cols), rows)
        })
        .prop_map(|rows| Grid::from_rows(rows).unwrap())
}

#[derive(Default)]
struct Recorder {
    draws: Vec<(usize, usize, Age)>,
    repaints: usize,
}

impl Display for Recorder {
    fn set_dimensions(&mut self, _rows: usize, _cols: usize) {}

    fn draw_cell_at(&mut self, row: usize, col: usize, age: Age) {
        self.draws.push((row, col, age));
    }

    fn repaint(&mut self) -> std::io::Result<()> {
        self.repaints += 1;
        Ok(())
    }
}

proptest! {
    #[test]
    fn dimensions_are_preserved(grid in grid_strategy()) {
        let next = rules::next_generation(&grid);

        prop_assert_eq!(next.num_rows(), grid.num_rows());
        prop_assert_eq!(next.num_cols(), grid.num_cols());
    }

    #[test]
    fn every_cell_follows_the_rules(grid in grid_strategy()) {
        let next = rules::next_generation(&grid);

        for (row, col, age) in grid.cells() {
            let n = reference_count(&grid, row, col);
            let got = next[(row, col)];

            match n {
                0 | 1 => prop_assert_eq!(got, 0),
                2 if age == 0 => prop_assert_eq!(got, 0),
                2 => prop_assert_eq!(got, age + 1),
                3 if age == 0 => prop_assert_eq!(got, 1),
                3 => prop_assert_eq!(got, age + 1),
                _ => prop_assert_eq!(got, 0),
            }
        }
    }

    #[test]
    fn neighbor_count_matches_definition(grid in grid_strategy()) {
        for (row, col, _) in grid.cells() {
            prop_assert_eq!(
                rules::count_neighbors(&grid, row, col) as usize,
                reference_count(&grid, row, col)
            );
        }
    }

    #[test]
    fn dead_grids_stay_dead(rows in 0usize..20, cols in 0usize..20) {
        let grid = Grid::new(rows, cols);

        prop_assert_eq!(rules::next_generation(&grid), grid);
    }

    #[test]
    fn every_cell_is_drawn_once(grid in grid_strategy()) {
        let mut next = Grid::default();
        let mut recorder = Recorder::default();

        rules::compute_next(&grid, &mut next, &mut recorder);

        prop_assert_eq!(recorder.draws.len(), grid.num_rows() * grid.num_cols());
        prop_assert_eq!(recorder.repaints, 0);

        for (row, col, age) in recorder.draws {
            prop_assert_eq!(next[(row, col)], age);
        }
    }
}

#[test]
fn lone_corner_cell_dies() {
    for (row, col) in [(0, 0), (0, 3), (3, 0), (3, 3)] {
        let mut grid = Grid::new(4, 4);
        grid[(row, col)] = 1;

        let next = rules::next_generation(&grid);

        assert_eq!(next.population(), 0, "corner ({row}, {col})");
    }
}

#[test]
fn corner_counts_at_most_three() {
    let grid = Grid::from_rows(vec![vec![1; 4]; 4]).unwrap();

    assert_eq!(rules::count_neighbors(&grid, 0, 0), 3);
    assert_eq!(rules::count_neighbors(&grid, 3, 3), 3);
}

#[test]
fn edges_do_not_wrap() {
    // A column on the left edge and one on the right edge would be neighbors on a torus
    let grid = Grid::from_rows(vec![
        vec![1, 0, 0, 1],
        vec![1, 0, 0, 1],
        vec![1, 0, 0, 1],
    ])
    .unwrap();

    assert_eq!(rules::count_neighbors(&grid, 1, 0), 2);
    assert_eq!(rules::count_neighbors(&grid, 1, 3), 2);
}

#[test]
fn blinker() {
    let horizontal = Grid::from_rows(vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]).unwrap();

    let vertical = rules::next_generation(&horizontal);
    assert_eq!(
        vertical,
        Grid::from_rows(vec![vec![0, 1, 0], vec![0, 2, 0], vec![0, 1, 0]]).unwrap()
    );

    let back = rules::next_generation(&vertical);
    assert_eq!(
        back,
        Grid::from_rows(vec![vec![0, 0, 0], vec![1, 3, 1], vec![0, 0, 0]]).unwrap()
    );
}

#[test]
fn crowded_center_dies() {
    let grid = Grid::from_rows(vec![vec![1, 1, 1], vec![1, 5, 1], vec![0, 0, 0]]).unwrap();

    let next = rules::next_generation(&grid);

    assert_eq!(next[(1, 1)], 0);
}
