//! Non-owning sequence view.
//!
//! Extracting from a range-strategy container does not yield a single
//! element; it yields a [`View`] pairing the container's own begin/end
//! cursors. The pipeline hands the whole view to the transformation in one
//! call: there is no per-element mapping, and nothing is materialized or
//! copied.

use core::ops::Deref;

/// A borrow of a sequence container, presented as the unit of extraction.
///
/// The view's lifetime is bounded by the container it borrows; its iteration
/// is exactly the container's own.
pub struct View<'a, C: ?Sized> {
    range: &'a mut C,
}

impl<'a, C: ?Sized> View<'a, C> {
    pub(crate) fn new(range: &'a mut C) -> Self {
        View { range }
    }

    /// Iterate the viewed elements by reference.
    pub fn iter<'s>(&'s self) -> <&'s C as IntoIterator>::IntoIter
    where
        &'s C: IntoIterator,
    {
        (&*self.range).into_iter()
    }

    /// Iterate the viewed elements by exclusive reference.
    pub fn iter_mut<'s>(&'s mut self) -> <&'s mut C as IntoIterator>::IntoIter
    where
        &'s mut C: IntoIterator,
    {
        (&mut *self.range).into_iter()
    }

    /// Whether the viewed sequence has no elements.
    pub fn is_empty<'s>(&'s self) -> bool
    where
        &'s C: IntoIterator,
    {
        self.iter().next().is_none()
    }
}

impl<'a, C: ?Sized> Deref for View<'a, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.range
    }
}

impl<'a, C: ?Sized> IntoIterator for View<'a, C>
where
    &'a mut C: IntoIterator,
{
    type Item = <&'a mut C as IntoIterator>::Item;
    type IntoIter = <&'a mut C as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.range.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_iterates_the_container_itself() {
        let mut data = [1, 2, 3];
        let view = View::new(&mut data);
        assert!(view.iter().copied().eq([1, 2, 3]));
    }

    #[test]
    fn view_mutation_writes_through() {
        let mut data = [1, 2, 3];
        let mut view = View::new(&mut data);
        for v in view.iter_mut() {
            *v += 10;
        }
        assert_eq!(data, [11, 12, 13]);
    }

    #[test]
    fn emptiness_mirrors_the_container() {
        let mut empty: [i32; 0] = [];
        assert!(View::new(&mut empty).is_empty());
        let mut full = [1];
        assert!(!View::new(&mut full).is_empty());
    }
}
