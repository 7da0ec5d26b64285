//! Configuration options for the extraction pipeline.
//!
//! The `Options` struct carries the small configuration surface shared
//! between the core and the external gallery/map renderers.

/// Configuration options for observation collection.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use lepigallery::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     days_threshold: 90,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Recency window in days for `is_recent`.
    ///
    /// Informational only; the pipeline never filters on it.
    ///
    /// Default: `365`
    pub days_threshold: i64,

    /// Images per gallery row, consumed by the external gallery renderer.
    ///
    /// Default: `6`
    pub images_per_row: usize,

    /// Records per gallery page, consumed by the external gallery renderer.
    ///
    /// Default: `100`
    pub species_per_page: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            days_threshold: 365,
            images_per_row: 6,
            species_per_page: 100,
        }
    }
}
