//! # Test Registry
//!
//! An ordered, append-only collection of [`TestEntry`] values.
//!
//! There are two ways to hold one:
//!
//! - an explicit [`Registry`] value, built and run by the caller;
//! - the process-wide registry behind [`register`] and [`snapshot`], seeded on
//!   first access from every test declared with [`lite_test!`](crate::lite_test).
//!
//! Registry invariant: entries are never reordered or removed. The runner
//! executes them in exactly the order they were appended.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

use crate::declare::{declared, TestDescriptor};
use crate::errors::AssertionFailure;

/// What every test body returns. `Err` means an assertion failed.
pub type TestResult = Result<(), AssertionFailure>;

/// A test body: zero arguments, may signal failure.
pub type TestFn = dyn Fn() -> TestResult + Send + Sync;

/// Where a test was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A named test body plus its registration metadata.
///
/// Cloning is cheap: the body is shared behind an `Arc`.
#[derive(Clone)]
pub struct TestEntry {
    name: Cow<'static, str>,
    action: Arc<TestFn>,
    location: Option<SourceLocation>,
}

impl TestEntry {
    pub fn new<N, F>(name: N, action: F) -> Self
    where
        N: Into<Cow<'static, str>>,
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            action: Arc::new(action),
            location: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> Option<SourceLocation> {
        self.location
    }

    /// Runs the test body once.
    pub fn call(&self) -> TestResult {
        (self.action)()
    }
}

impl fmt::Debug for TestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestEntry")
            .field("name", &self.name)
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl From<&'static TestDescriptor> for TestEntry {
    fn from(descriptor: &'static TestDescriptor) -> Self {
        TestEntry::new(descriptor.name, descriptor.func).with_location(descriptor.location())
    }
}

/// Ordered collection of test entries.
///
/// # Thread Safety
/// Not synchronized. The process-wide instance is wrapped in a `Mutex`; wrap
/// your own if you share one between threads.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<TestEntry>,
}

impl Registry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding every test declared with `lite_test!`,
    /// ordered by source file and then by declaration line.
    pub fn from_declared() -> Self {
        let mut registry = Self::new();
        for descriptor in declared() {
            registry.register_entry(TestEntry::from(descriptor));
        }
        registry
    }

    /// Appends a test. Names are neither deduplicated nor validated.
    pub fn register<N, F>(&mut self, name: N, action: F)
    where
        N: Into<Cow<'static, str>>,
        F: Fn() -> TestResult + Send + Sync + 'static,
    {
        self.register_entry(TestEntry::new(name, action));
    }

    pub fn register_entry(&mut self, entry: TestEntry) {
        tracing::debug!(test = entry.name(), position = self.entries.len(), "registered test");
        self.entries.push(entry);
    }

    /// All entries in registration order.
    pub fn entries(&self) -> &[TestEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a TestEntry;
    type IntoIter = std::slice::Iter<'a, TestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// PROCESS-WIDE REGISTRY
// ============================================================================

lazy_static! {
    static ref GLOBAL_REGISTRY: Mutex<Registry> = Mutex::new(Registry::from_declared());
}

// A panic while the lock is held cannot leave a half-appended entry behind.
fn global() -> MutexGuard<'static, Registry> {
    GLOBAL_REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Appends a test to the process-wide registry, after all declared tests.
pub fn register<N, F>(name: N, action: F)
where
    N: Into<Cow<'static, str>>,
    F: Fn() -> TestResult + Send + Sync + 'static,
{
    global().register(name, action);
}

/// A copy of the process-wide registry's entries, in registration order.
///
/// The lock is released before this returns, so test bodies run from the
/// snapshot may themselves call [`register`]; such tests run on the next
/// invocation.
pub fn snapshot() -> Vec<TestEntry> {
    global().entries().to_vec()
}
