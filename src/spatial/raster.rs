//! Bresenham stepping between lattice indices

/// Iterator over the lattice cells visited by a Bresenham line
///
/// Yields every cell from `start` through `end` inclusive. Each step advances
/// whichever axis the accumulated error favors, possibly both at once.
#[derive(Debug, Clone)]
pub struct LineWalk {
    current: [i64; 2],
    end: [i64; 2],
    delta: [i64; 2],
    step: [i64; 2],
    error: i64,
    finished: bool,
}

impl LineWalk {
    /// Start a walk from `start` to `end`
    pub const fn new(start: [i64; 2], end: [i64; 2]) -> Self {
        let di = (end[0] - start[0]).abs();
        let dj = (end[1] - start[1]).abs();
        let si = if start[0] < end[0] { 1 } else { -1 };
        let sj = if start[1] < end[1] { 1 } else { -1 };

        Self {
            current: start,
            end,
            delta: [di, dj],
            step: [si, sj],
            error: di - dj,
            finished: false,
        }
    }
}

impl Iterator for LineWalk {
    type Item = [i64; 2];

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let cell = self.current;
        if cell == self.end {
            self.finished = true;
            return Some(cell);
        }

        let [di, dj] = self.delta;
        let doubled = 2 * self.error;
        if doubled > -dj {
            self.error -= dj;
            self.current[0] += self.step[0];
        }
        if doubled < di {
            self.error += di;
            self.current[1] += self.step[1];
        }

        Some(cell)
    }
}

/// Cells visited on the way from `start` to `end`, both inclusive
pub fn line_cells(start: [i64; 2], end: [i64; 2]) -> Vec<[i64; 2]> {
    LineWalk::new(start, end).collect()
}
