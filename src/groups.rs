use log::debug;

use crate::data::{neighbor_pos_of, CellSet, Pos};

pub type GroupCount = usize;

/// Counts maximal 4-connected groups by draining an owned occupancy set.
///
/// Repeatedly picks an arbitrary remaining cell and removes everything
/// reachable from it; each drained region is one group. Traversal uses an
/// explicit heap-allocated work stack instead of recursion: a single group can
/// legitimately span the whole board, so the maximum region size must be
/// bounded by memory, not by call-stack depth.
pub struct GroupCounter {
    /// Cells still filled and unassigned. Shrinks monotonically to empty.
    remaining: CellSet,
    /// Work stack, reused across regions.
    stack: Vec<Pos>,
}

impl GroupCounter {
    pub fn new(cells: CellSet) -> Self {
        Self {
            remaining: cells,
            stack: Vec::new(),
        }
    }

    /// Remove `seed` and every cell 4-connected to it. Returns the region size.
    fn remove_connected(&mut self, seed: Pos) -> usize {
        let mut size = 0;
        self.stack.push(seed);
        while let Some(pos) = self.stack.pop() {
            // A cell can be pushed once per already-visited neighbor; later
            // pops find it gone and skip it.
            if !self.remaining.remove(&pos) {
                continue;
            }
            size += 1;

            for direction in 0..4 {
                let neighbor = neighbor_pos_of(pos, direction);
                if self.remaining.contains(&neighbor) {
                    self.stack.push(neighbor);
                }
            }
        }
        size
    }

    pub fn run(mut self) -> GroupCount {
        let mut groups = 0;
        // Which cell seeds a region does not affect the count, so the set's
        // arbitrary iteration order is fine.
        while let Some(&seed) = self.remaining.iter().next() {
            let size = self.remove_connected(seed);
            debug!("Group {groups} seeded at {seed} with {size} cells");
            groups += 1;
        }
        groups
    }
}

/// Count the maximal 4-connected groups in `cells`.
///
/// Takes the set by value and consumes it; pass a clone if the cells are
/// needed afterwards. Total over any finite set: empty (0 groups), sparse and
/// non-rectangular layouts, and negative coordinates are all valid.
pub fn count_groups(cells: CellSet) -> GroupCount {
    GroupCounter::new(cells).run()
}

/// Recursive counterpart to [`count_groups`]. Same contract and result, but
/// traversal depth grows with region size, so large highly-connected boards
/// can overflow the call stack. Kept for comparison; not the default.
pub fn count_groups_recursive(mut cells: CellSet) -> GroupCount {
    fn remove_connected(remaining: &mut CellSet, pos: Pos) {
        remaining.remove(&pos);
        for direction in 0..4 {
            let neighbor = neighbor_pos_of(pos, direction);
            if remaining.contains(&neighbor) {
                remove_connected(remaining, neighbor);
            }
        }
    }

    let mut groups = 0;
    while let Some(&seed) = cells.iter().next() {
        remove_connected(&mut cells, seed);
        groups += 1;
    }
    groups
}
