//! Paths and the reconstruction of Paths from parent links.

use crate::{Point, PointMap};
use std::fmt;
use std::ops::Deref;

/// a Type to represent the Cost of walking a Path
pub type Cost = usize;

/// A sequence of Points from a start to a goal (both inclusive) and the total Cost of walking it.
///
/// Derefs to a slice of the Points.
///
/// ## Examples
/// ```
/// # use grid_search_lab::path::Path;
/// let path = Path::new(vec![(0, 0), (0, 1), (1, 1)], 2);
///
/// assert_eq!(path.cost(), 2);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], (1, 1));
/// assert_eq!(path.first(), Some(&(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// the total Cost of the Path
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// the Points of the Path, in walking order
    pub fn points(&self) -> &[P] {
        &self.path
    }

    /// consumes the Path, returning its Points
    pub fn into_points(self) -> Vec<P> {
        self.path
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: fmt::Debug> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{:?}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {:?}", p)?;
            }
            Ok(())
        }
    }
}

/// Walks the parent links from `end` back to the Point without a parent and returns the
/// Points in start to `end` order.
///
/// Every step of a grid search costs `1`, so the Cost of the Path is its length minus one.
///
/// Returns `None` if `end` has no entry in `parents`.
///
/// ```
/// # use grid_search_lab::{path::reconstruct_path, PointMap};
/// let mut parents = PointMap::default();
/// parents.insert((0, 0), None);
/// parents.insert((0, 1), Some((0, 0)));
/// parents.insert((1, 1), Some((0, 1)));
///
/// let path = reconstruct_path(&parents, (1, 1)).unwrap();
/// assert_eq!(path.points(), &[(0, 0), (0, 1), (1, 1)]);
/// assert_eq!(path.cost(), 2);
///
/// assert!(reconstruct_path(&parents, (5, 5)).is_none());
/// ```
pub fn reconstruct_path(parents: &PointMap<Option<Point>>, end: Point) -> Option<Path<Point>> {
    let mut steps = vec![end];
    let mut current = *parents.get(&end)?;

    while let Some(prev) = current {
        steps.push(prev);
        current = parents.get(&prev).copied().flatten();
    }
    steps.reverse();

    let cost = steps.len() - 1;
    Some(Path::new(steps, cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_display() {
        let path = Path::new(vec![(0, 0), (0, 1)], 1);

        assert_eq!(&format!("{}", path), "Path[Cost = 1]: (0, 0) -> (0, 1)");
    }

    #[test]
    fn path_display_empty() {
        let path = Path::new(Vec::<Point>::new(), 0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }

    #[test]
    fn reconstruct_start_only() {
        let mut parents = PointMap::default();
        parents.insert((3, 4), None);

        let path = reconstruct_path(&parents, (3, 4)).unwrap();
        assert_eq!(path.points(), &[(3, 4)]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn reconstruct_ignores_other_branches() {
        let mut parents = PointMap::default();
        parents.insert((1, 1), None);
        parents.insert((1, 2), Some((1, 1)));
        parents.insert((1, 0), Some((1, 1)));
        parents.insert((0, 0), Some((1, 0)));
        parents.insert((2, 2), Some((1, 2)));

        let path = reconstruct_path(&parents, (0, 0)).unwrap();
        assert_eq!(path.points(), &[(1, 1), (1, 0), (0, 0)]);
        assert_eq!(path.into_points().len(), 3);
    }
}
