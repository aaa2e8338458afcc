//! Mock capability oracle for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::device::CapabilityOracle;

/// Per-query call counts recorded by [`MockCapabilityOracle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryCounts {
    pub hevc: usize,
    pub hevc_main10: usize,
    pub avc_high10: usize,
}

/// Mock implementation of the CapabilityOracle trait.
///
/// Clones share state, so a test can keep one handle while the compiler
/// owns another:
/// - Control each capability answer
/// - Count how often each query was asked
///
/// # Example
///
/// ```rust,ignore
/// use playcaps_core::testing::MockCapabilityOracle;
///
/// let oracle = MockCapabilityOracle::with_hevc(true, false);
/// let compiler = ProfileCompiler::new(oracle.clone(), classifier);
/// compiler.compile(&request)?;
///
/// assert_eq!(oracle.query_counts().hevc, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCapabilityOracle {
    hevc: Arc<AtomicBool>,
    hevc_main10: Arc<AtomicBool>,
    avc_high10: Arc<AtomicBool>,
    hevc_queries: Arc<AtomicUsize>,
    hevc_main10_queries: Arc<AtomicUsize>,
    avc_high10_queries: Arc<AtomicUsize>,
}

impl MockCapabilityOracle {
    /// Create a mock oracle that supports nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock oracle with the given HEVC answers.
    pub fn with_hevc(hevc: bool, hevc_main10: bool) -> Self {
        let oracle = Self::new();
        oracle.set_hevc(hevc);
        oracle.set_hevc_main10(hevc_main10);
        oracle
    }

    pub fn set_hevc(&self, supported: bool) {
        self.hevc.store(supported, Ordering::SeqCst);
    }

    pub fn set_hevc_main10(&self, supported: bool) {
        self.hevc_main10.store(supported, Ordering::SeqCst);
    }

    pub fn set_avc_high10(&self, supported: bool) {
        self.avc_high10.store(supported, Ordering::SeqCst);
    }

    /// Get the number of times each query was asked.
    pub fn query_counts(&self) -> QueryCounts {
        QueryCounts {
            hevc: self.hevc_queries.load(Ordering::SeqCst),
            hevc_main10: self.hevc_main10_queries.load(Ordering::SeqCst),
            avc_high10: self.avc_high10_queries.load(Ordering::SeqCst),
        }
    }

    /// Reset all query counts.
    pub fn clear_counts(&self) {
        self.hevc_queries.store(0, Ordering::SeqCst);
        self.hevc_main10_queries.store(0, Ordering::SeqCst);
        self.avc_high10_queries.store(0, Ordering::SeqCst);
    }
}

impl CapabilityOracle for MockCapabilityOracle {
    fn supports_hevc(&self) -> bool {
        self.hevc_queries.fetch_add(1, Ordering::SeqCst);
        self.hevc.load(Ordering::SeqCst)
    }

    fn supports_hevc_main10(&self) -> bool {
        self.hevc_main10_queries.fetch_add(1, Ordering::SeqCst);
        self.hevc_main10.load(Ordering::SeqCst)
    }

    fn supports_avc_high10(&self) -> bool {
        self.avc_high10_queries.fetch_add(1, Ordering::SeqCst);
        self.avc_high10.load(Ordering::SeqCst)
    }
}
