//! Fluent element-by-element sequence construction.

/// A fluent builder for assembling a sequence one element at a time.
///
/// The built sequence preserves insertion order, so it can stand in for any
/// ordered source in the suite.
///
/// # Example
///
/// ```
/// use iterflow::builders::SequenceBuilder;
///
/// let seq = SequenceBuilder::new()
///     .add("One")
///     .add("Two")
///     .add("Three")
///     .build();
///
/// assert_eq!(seq, ["One", "Two", "Three"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceBuilder<T> {
    elements: Vec<T>,
}

impl<T> SequenceBuilder<T> {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append a single element.
    #[must_use]
    pub fn add(mut self, element: T) -> Self {
        self.elements.push(element);
        self
    }

    /// Append every element of `values`, in order.
    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.elements.extend(values);
        self
    }

    /// Append `count` clones of `element`.
    ///
    /// # Example
    ///
    /// ```
    /// use iterflow::builders::SequenceBuilder;
    ///
    /// let seq = SequenceBuilder::new().add_repeated(7, 3).build();
    /// assert_eq!(seq, [7, 7, 7]);
    /// ```
    #[must_use]
    pub fn add_repeated(mut self, element: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.elements
            .extend(std::iter::repeat_n(element, count));
        self
    }

    /// Number of elements added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether nothing has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finish building and return the sequence.
    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.elements
    }
}

// Specialized methods for numeric element types
impl<T: From<i32>> SequenceBuilder<T> {
    /// Append every value of `range`, in order.
    ///
    /// # Example
    ///
    /// ```
    /// use iterflow::builders::SequenceBuilder;
    ///
    /// let seq = SequenceBuilder::<i32>::new().add_range(1..=5).build();
    /// assert_eq!(seq, [1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: std::ops::RangeInclusive<i32>) -> Self {
        self.elements.extend(range.map(T::from));
        self
    }
}

impl<T> IntoIterator for SequenceBuilder<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
