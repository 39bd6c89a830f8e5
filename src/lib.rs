pub mod data;
pub mod generator;
pub mod groups;
pub mod pattern;

pub use data::{CellSet, Pos};
pub use generator::random_pattern;
pub use groups::{count_groups, count_groups_recursive, GroupCount, GroupCounter};
pub use pattern::{parse_pattern, render_pattern, PatternError};
