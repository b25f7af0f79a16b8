use gdbind_runtime::{try_cast, EngineClass};

use crate::Node;

impl Node {
    /// Direct children in tree order, internal ones excluded.
    pub fn children(&self) -> Vec<Node> {
        let count = i32::try_from(self.get_child_count(false)).unwrap_or(i32::MAX);
        (0..count).filter_map(|idx| self.get_child(idx, false)).collect()
    }

    /// First direct child whose runtime class is `T` or derives from it.
    pub fn find_child_of<T: EngineClass>(&self) -> Option<T> {
        self.children().iter().find_map(|child| try_cast::<T>(child))
    }
}
