//! Depth-first expansion of result nodes into `(level, node)` pairs.

use std::slice;

use crate::nodes::{ResultItem, ResultNode};

/// Walk `roots` depth-first, yielding each root at `start_level` and every
/// generation of children one level deeper than its parent.
///
/// Sibling order is preserved and each node is yielded exactly once. The
/// walk is lazy; nothing is visited until the iterator is advanced.
pub fn linearize<'a, I>(start_level: usize, roots: I) -> Linearize<'a>
where
    I: IntoIterator<Item = &'a dyn ResultNode>,
{
    Linearize {
        start_level,
        roots: roots.into_iter().collect::<Vec<_>>().into_iter(),
        stack: Vec::new(),
    }
}

/// Iterator returned by [`linearize`].
#[derive(Debug)]
pub struct Linearize<'a> {
    start_level: usize,
    roots: std::vec::IntoIter<&'a dyn ResultNode>,
    /// Pending siblings per open generation, with their level.
    stack: Vec<(usize, slice::Iter<'a, ResultItem>)>,
}

impl<'a> Linearize<'a> {
    fn descend(&mut self, level: usize, node: &'a dyn ResultNode) {
        let children = node.children();
        if !children.is_empty() {
            self.stack.push((level, children.iter()));
        }
    }
}

impl<'a> Iterator for Linearize<'a> {
    type Item = (usize, &'a dyn ResultNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((level, siblings)) = self.stack.last_mut() {
            let level = *level;
            match siblings.next() {
                Some(child) => {
                    self.descend(level + 1, child);
                    return Some((level, child as &dyn ResultNode));
                }
                None => {
                    self.stack.pop();
                }
            }
        }

        let root = self.roots.next()?;
        self.descend(self.start_level + 1, root);
        Some((self.start_level, root))
    }
}
