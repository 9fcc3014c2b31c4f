//! Side-effect probes for observing pipeline evaluation.

use std::fmt::Display;
use std::fmt::Write as _;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A thread-safe recorder of pipeline side effects.
///
/// `EvalProbe` counts how many times a stage ran and keeps an ordered text
/// log of what flowed through it. Threaded through `inspect`, `map`, or
/// `for_each` closures, it makes laziness, short-circuit consumption, and
/// parallel interleaving observable in assertions.
///
/// The hit counter and the log are updated independently; when both are
/// recorded from multiple threads, the counter is exact while the log order
/// reflects whatever interleaving actually happened.
///
/// # Example
///
/// ```
/// use iterflow::probe::EvalProbe;
///
/// let probe = EvalProbe::new();
/// let found = ["One", "Two", "Three"]
///     .iter()
///     .inspect(|_| probe.mark())
///     .find(|w| w.starts_with('T'));
///
/// assert_eq!(found, Some(&"Two"));
/// assert_eq!(probe.hits(), 2); // "Three" was never consumed
/// ```
#[derive(Debug, Default)]
pub struct EvalProbe {
    hits: AtomicUsize,
    log: Mutex<String>,
}

impl EvalProbe {
    /// Create a probe with zero hits and an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hits: AtomicUsize::new(0),
            log: Mutex::new(String::new()),
        }
    }

    /// Record one hit without logging anything.
    pub fn mark(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    /// Record one hit and append `item` to the log.
    pub fn record(&self, item: impl Display) {
        self.mark();
        let mut log = self.log.lock().expect("probe log poisoned");
        // write! to a String is infallible
        let _ = write!(log, "{item}");
    }

    /// Number of hits recorded so far.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// The log contents, in the order they were appended.
    #[must_use]
    pub fn log(&self) -> String {
        self.log.lock().expect("probe log poisoned").clone()
    }

    /// Clear the counter and the log.
    ///
    /// # Example
    ///
    /// ```
    /// use iterflow::probe::EvalProbe;
    ///
    /// let probe = EvalProbe::new();
    /// probe.record("One");
    /// probe.reset();
    /// assert_eq!(probe.hits(), 0);
    /// assert_eq!(probe.log(), "");
    /// ```
    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
        self.log.lock().expect("probe log poisoned").clear();
    }
}
