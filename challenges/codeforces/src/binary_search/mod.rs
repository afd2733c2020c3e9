// Binary search problems module
// Add problem modules here as they are implemented

pub mod wooden_toy_festival;

use crate::TaskGroup;

pub fn tasks() -> TaskGroup {
    TaskGroup::new("binary_search").add("wooden_toy_festival", wooden_toy_festival::solve)
}
