use std::collections::HashSet;

use glam::IVec2;

/// Grid position, `x` being the column and `y` the row. Zero-based; negative
/// coordinates are legal, the board has no intrinsic bounding box.
pub type Pos = IVec2;

/// One of the four cardinal neighbour directions, numbered clockwise from north.
pub type Direction = usize;

/// All cells that are filled and not yet attributed to a group.
pub type CellSet = HashSet<Pos>;

pub fn neighbor_pos_of(pos: Pos, direction: Direction) -> Pos {
    pos + match direction {
        0 => Pos::new(0, -1),
        1 => Pos::new(1, 0),
        2 => Pos::new(0, 1),
        3 => Pos::new(-1, 0),
        _ => panic!("Direction should be 0-3, got {direction}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_the_four_cardinal_cells() {
        let center = Pos::new(3, 7);
        let neighbors: HashSet<Pos> = (0..4).map(|d| neighbor_pos_of(center, d)).collect();
        let expected = HashSet::from([
            Pos::new(3, 6),
            Pos::new(4, 7),
            Pos::new(3, 8),
            Pos::new(2, 7),
        ]);
        assert_eq!(neighbors, expected);
    }
}
