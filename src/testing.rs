//! Orders for exercising the heap's sift paths: one that panics on demand and
//! one that counts how often it is consulted. Also a per-thread log capture.

use crate::TotalOrder;
use core::cell::{Cell, RefCell};
use core::cmp::Ordering;

/// Delegates to [`Ord`], but panics once its budget of comparisons is spent.
#[derive(Debug)]
pub(crate) struct PanicAfter {
    budget: Cell<usize>,
}

impl PanicAfter {
    pub(crate) fn new(budget: usize) -> Self {
        PanicAfter { budget: Cell::new(budget) }
    }

    pub(crate) fn refill(&self, budget: usize) {
        self.budget.set(budget);
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for PanicAfter {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        match self.budget.get() {
            0 => panic!("comparison budget exhausted"),
            left => self.budget.set(left - 1),
        }
        this.cmp(that)
    }
}

/// Delegates to [`Ord`], recording every comparison made.
#[derive(Debug, Default)]
pub(crate) struct Counting {
    count: Cell<usize>,
}

impl Counting {
    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }

    pub(crate) fn reset(&self) {
        self.count.set(0);
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for Counting {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self.count.set(self.count.get() + 1);
        this.cmp(that)
    }
}

thread_local! {
    static RECORDS: RefCell<Option<Vec<String>>> = RefCell::new(None);
}

/// Forwards records to whichever capture is running on the current thread.
struct ThreadLogger;

impl log::Log for ThreadLogger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|records| {
            if let Some(records) = records.borrow_mut().as_mut() {
                records.push(record.args().to_string());
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: ThreadLogger = ThreadLogger;

/// Runs `f`, returning its result and the messages it logged.
pub(crate) fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    // Fails harmlessly once another test has installed the logger.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);

    RECORDS.with(|records| *records.borrow_mut() = Some(Vec::new()));
    let result = f();
    let records = RECORDS.with(|records| records.borrow_mut().take()).unwrap_or_default();
    (result, records)
}
