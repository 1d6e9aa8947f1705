//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the zusi-translate project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Minimum-cost assignment (Munkres / Hungarian method)
//!
//! Given an n x m matrix of non-negative costs, pair every row with a
//! distinct column so that the sum of the chosen costs is minimal. A
//! rectangular matrix is padded with zero-cost rows or columns to a square
//! one; pairs involving padding are dropped from the result.
//!
//! Zeros are searched row by row, left to right, so equal-cost solutions are
//! always resolved the same way for the same matrix.

/// Cost of one row/column pairing
pub type Cost = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mark {
    None,
    Star,
    Prime,
}

struct Munkres {
    n: usize,
    cost: Vec<Vec<Cost>>,
    marks: Vec<Vec<Mark>>,
    row_covered: Vec<bool>,
    col_covered: Vec<bool>,
}

enum Step {
    CoverStarredColumns,
    PrimeZeros,
    AugmentPath(usize, usize),
    AdjustCosts,
    Done,
}

impl Munkres {
    fn new(matrix: &[Vec<Cost>], n: usize) -> Self {
        let cost = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| matrix.get(i).and_then(|row| row.get(j)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        Munkres {
            n,
            cost,
            marks: vec![vec![Mark::None; n]; n],
            row_covered: vec![false; n],
            col_covered: vec![false; n],
        }
    }

    fn clear_covers(&mut self) {
        self.row_covered.iter_mut().for_each(|c| *c = false);
        self.col_covered.iter_mut().for_each(|c| *c = false);
    }

    /// Subtract each row's minimum from the row
    fn reduce_rows(&mut self) {
        for row in &mut self.cost {
            if let Some(&min) = row.iter().min() {
                row.iter_mut().for_each(|c| *c -= min);
            }
        }
    }

    /// Star a zero in every row and column where possible
    fn star_zeros(&mut self) {
        for i in 0..self.n {
            for j in 0..self.n {
                if self.cost[i][j] == 0 && !self.row_covered[i] && !self.col_covered[j] {
                    self.marks[i][j] = Mark::Star;
                    self.row_covered[i] = true;
                    self.col_covered[j] = true;
                }
            }
        }
        self.clear_covers();
    }

    fn cover_starred_columns(&mut self) -> Step {
        let mut count = 0;
        for i in 0..self.n {
            for j in 0..self.n {
                if self.marks[i][j] == Mark::Star && !self.col_covered[j] {
                    self.col_covered[j] = true;
                    count += 1;
                }
            }
        }
        if count >= self.n {
            Step::Done
        } else {
            Step::PrimeZeros
        }
    }

    fn find_uncovered_zero(&self) -> Option<(usize, usize)> {
        (0..self.n)
            .filter(|&i| !self.row_covered[i])
            .find_map(|i| {
                (0..self.n)
                    .find(|&j| !self.col_covered[j] && self.cost[i][j] == 0)
                    .map(|j| (i, j))
            })
    }

    fn find_in_row(&self, row: usize, mark: Mark) -> Option<usize> {
        (0..self.n).find(|&j| self.marks[row][j] == mark)
    }

    fn find_in_col(&self, col: usize, mark: Mark) -> Option<usize> {
        (0..self.n).find(|&i| self.marks[i][col] == mark)
    }

    fn prime_zeros(&mut self) -> Step {
        loop {
            let Some((row, col)) = self.find_uncovered_zero() else {
                return Step::AdjustCosts;
            };
            self.marks[row][col] = Mark::Prime;
            match self.find_in_row(row, Mark::Star) {
                Some(star_col) => {
                    self.row_covered[row] = true;
                    self.col_covered[star_col] = false;
                }
                None => return Step::AugmentPath(row, col),
            }
        }
    }

    /// Flip stars and primes along the alternating path starting at a prime
    fn augment_path(&mut self, row: usize, col: usize) -> Step {
        let mut path = vec![(row, col)];
        loop {
            let (_, col) = path[path.len() - 1];
            let Some(star_row) = self.find_in_col(col, Mark::Star) else {
                break;
            };
            path.push((star_row, col));
            // A starred zero's row always holds the prime that moved its cover
            let Some(prime_col) = self.find_in_row(star_row, Mark::Prime) else {
                break;
            };
            path.push((star_row, prime_col));
        }

        for &(i, j) in &path {
            self.marks[i][j] = if self.marks[i][j] == Mark::Star {
                Mark::None
            } else {
                Mark::Star
            };
        }

        self.clear_covers();
        for mark in self.marks.iter_mut().flatten() {
            if *mark == Mark::Prime {
                *mark = Mark::None;
            }
        }
        Step::CoverStarredColumns
    }

    /// Add the smallest uncovered cost to covered rows, subtract it from uncovered columns
    fn adjust_costs(&mut self) -> Step {
        let mut min = Cost::MAX;
        for i in (0..self.n).filter(|&i| !self.row_covered[i]) {
            for j in (0..self.n).filter(|&j| !self.col_covered[j]) {
                min = min.min(self.cost[i][j]);
            }
        }
        for i in 0..self.n {
            for j in 0..self.n {
                if self.row_covered[i] {
                    self.cost[i][j] += min;
                }
                if !self.col_covered[j] {
                    self.cost[i][j] -= min;
                }
            }
        }
        Step::PrimeZeros
    }

    fn solve(&mut self) {
        self.reduce_rows();
        self.star_zeros();
        let mut step = Step::CoverStarredColumns;
        loop {
            step = match step {
                Step::CoverStarredColumns => self.cover_starred_columns(),
                Step::PrimeZeros => self.prime_zeros(),
                Step::AugmentPath(row, col) => self.augment_path(row, col),
                Step::AdjustCosts => self.adjust_costs(),
                Step::Done => break,
            };
        }
    }
}

/// Solve the assignment problem for a rectangular cost matrix.
///
/// Returns `(row, column)` pairs in row order. Every row gets a column when
/// there are at least as many columns as rows; otherwise the surplus rows
/// are left out.
pub fn compute(matrix: &[Vec<Cost>]) -> Vec<(usize, usize)> {
    let rows = matrix.len();
    let cols = matrix.iter().map(Vec::len).max().unwrap_or(0);
    let n = rows.max(cols);
    if n == 0 {
        return Vec::new();
    }

    let mut munkres = Munkres::new(matrix, n);
    munkres.solve();

    (0..rows)
        .filter_map(|i| {
            (0..cols)
                .find(|&j| munkres.marks[i][j] == Mark::Star)
                .map(|j| (i, j))
        })
        .collect()
}

/// Sum of the costs of an assignment
pub fn total_cost(matrix: &[Vec<Cost>], pairs: &[(usize, usize)]) -> Cost {
    pairs.iter().map(|&(i, j)| matrix[i][j]).sum()
}
