//! Extensions over slices and vectors.

/// Collects the present values of `elements`, dropping every `None` and
/// keeping the relative order of the rest.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::extension::compact;
///
/// let values = compact([None, Some("a"), Some("b"), None]);
/// assert_eq!(values, vec!["a", "b"]);
/// ```
pub fn compact<T, I>(elements: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    elements.into_iter().flatten().collect()
}

/// Returns the first `Some` produced by `producers`, invoking them in order.
///
/// Producers after the first one that yields `Some` are not invoked.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::extension::lazy_first;
///
/// fn cached() -> Option<i32> { None }
/// fn computed() -> Option<i32> { Some(2) }
/// fn expensive() -> Option<i32> { panic!("never evaluated") }
///
/// let producers: [fn() -> Option<i32>; 3] = [cached, computed, expensive];
/// assert_eq!(lazy_first(producers), Some(2));
/// ```
pub fn lazy_first<T, F, I>(producers: I) -> Option<T>
where
    F: FnOnce() -> Option<T>,
    I: IntoIterator<Item = F>,
{
    producers.into_iter().find_map(|producer| producer())
}

/// Compaction of sequences of optionals.
pub trait CompactExtension<T> {
    /// Returns the present values, dropping every `None`.
    fn compact(&self) -> Vec<T>;
}

impl<T: Clone> CompactExtension<T> for [Option<T>] {
    #[inline]
    fn compact(&self) -> Vec<T> {
        compact(self.iter().cloned())
    }
}

/// Read-only helpers over slices.
pub trait SliceExtension<T> {
    /// Returns the element at `index`, or `None` when `index` is negative or
    /// out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::extension::SliceExtension;
    ///
    /// let letters = ['a', 'b'];
    /// assert_eq!(letters.lift(1), Some(&'b'));
    /// assert_eq!(letters.lift(2), None);
    /// assert_eq!(letters.lift(-1), None);
    /// ```
    fn lift(&self, index: isize) -> Option<&T>;

    /// Returns the first element satisfying `predicate`.
    fn find_first<P>(&self, predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool;

    /// Returns the suffix starting at `start`, or an empty slice when `start`
    /// is past the end.
    fn tail(&self, start: usize) -> &[T];

    /// Returns the element following the first occurrence of `element`.
    ///
    /// Only meaningful for slices of unique elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::extension::SliceExtension;
    ///
    /// let steps = ["draft", "review", "published"];
    /// assert_eq!(steps.next_after(&"draft"), Some(&"review"));
    /// assert_eq!(steps.next_after(&"published"), None);
    /// assert_eq!(steps.previous_before(&"review"), Some(&"draft"));
    /// assert_eq!(steps.previous_before(&"draft"), None);
    /// ```
    fn next_after(&self, element: &T) -> Option<&T>
    where
        T: PartialEq;

    /// Returns the element preceding the first occurrence of `element`.
    ///
    /// Only meaningful for slices of unique elements.
    fn previous_before(&self, element: &T) -> Option<&T>
    where
        T: PartialEq;
}

impl<T> SliceExtension<T> for [T] {
    #[inline]
    fn lift(&self, index: isize) -> Option<&T> {
        usize::try_from(index)
            .ok()
            .and_then(|position| self.get(position))
    }

    #[inline]
    fn find_first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(*element))
    }

    #[inline]
    fn tail(&self, start: usize) -> &[T] {
        self.get(start..).unwrap_or_default()
    }

    fn next_after(&self, element: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        let position = self.iter().position(|item| item == element)?;
        self.get(position + 1)
    }

    fn previous_before(&self, element: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        let position = self.iter().position(|item| item == element)?;
        position.checked_sub(1).and_then(|previous| self.get(previous))
    }
}

/// In-place removal helpers over vectors.
pub trait VecExtension<T> {
    /// Removes and returns the first element satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::extension::VecExtension;
    ///
    /// let mut numbers = vec![1, 4, 6, 7];
    /// assert_eq!(numbers.remove_first_where(|number| number % 2 == 0), Some(4));
    /// assert_eq!(numbers, vec![1, 6, 7]);
    /// ```
    fn remove_first_where<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool;

    /// Removes and returns the first occurrence of `element`.
    fn remove_element(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq;
}

impl<T> VecExtension<T> for Vec<T> {
    fn remove_first_where<P>(&mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let position = self.iter().position(predicate)?;
        Some(self.remove(position))
    }

    fn remove_element(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        self.remove_first_where(|item| item == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_compact_keeps_order() {
        let values: Vec<Option<i32>> = vec![Some(3), None, Some(1), None, Some(2)];
        assert_eq!(values.compact(), vec![3, 1, 2]);
        assert_eq!(compact(values), vec![3, 1, 2]);
    }

    #[rstest]
    fn test_compact_all_none_is_empty() {
        let values: [Option<u8>; 2] = [None, None];
        assert!(values.compact().is_empty());
    }

    #[rstest]
    #[case::first(0, Some(10))]
    #[case::last(2, Some(30))]
    #[case::past_end(3, None)]
    #[case::negative(-1, None)]
    #[case::far_negative(isize::MIN, None)]
    fn test_lift(#[case] index: isize, #[case] expected: Option<i32>) {
        let numbers = [10, 20, 30];
        assert_eq!(numbers.lift(index).copied(), expected);
    }

    #[rstest]
    fn test_find_first_returns_earliest_match() {
        let words = ["apple", "avocado", "banana"];
        assert_eq!(words.find_first(|word| word.starts_with('a')), Some(&"apple"));
        assert_eq!(words.find_first(|word| word.starts_with('z')), None);
    }

    #[rstest]
    #[case::start(0, vec![1, 2, 3])]
    #[case::middle(1, vec![2, 3])]
    #[case::end(3, vec![])]
    #[case::past_end(9, vec![])]
    fn test_tail(#[case] start: usize, #[case] expected: Vec<i32>) {
        let numbers = [1, 2, 3];
        assert_eq!(numbers.tail(start), expected.as_slice());
    }

    #[rstest]
    fn test_neighbours_of_absent_element() {
        let numbers = [1, 2, 3];
        assert_eq!(numbers.next_after(&9), None);
        assert_eq!(numbers.previous_before(&9), None);
    }

    #[rstest]
    fn test_remove_element_removes_first_occurrence_only() {
        let mut numbers = vec![1, 2, 1, 3];
        assert_eq!(numbers.remove_element(&1), Some(1));
        assert_eq!(numbers, vec![2, 1, 3]);
        assert_eq!(numbers.remove_element(&9), None);
        assert_eq!(numbers, vec![2, 1, 3]);
    }

    #[rstest]
    fn test_lazy_first_stops_at_first_some() {
        let calls = Cell::new(0);
        let counter = &calls;
        let producer = move |value: Option<i32>| {
            move || {
                counter.set(counter.get() + 1);
                value
            }
        };
        let result = lazy_first([producer(None), producer(Some(5)), producer(Some(6))]);
        assert_eq!(result, Some(5));
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn test_lazy_first_of_nothing_is_none() {
        let producers: Vec<fn() -> Option<i32>> = Vec::new();
        assert_eq!(lazy_first(producers), None);
    }
}
