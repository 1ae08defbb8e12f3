//! Result types for cleaning output.
//!
//! The cleaned tree is returned in place; this module only defines the
//! per-pass counters reported alongside it.

use serde::{Deserialize, Serialize};

/// Per-pass counts of nodes touched by one `clean` run.
///
/// A second run over an already cleaned tree reports all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    /// Comment nodes detached.
    pub comments: usize,

    /// `script`/`style` elements detached.
    pub scripts: usize,

    /// Structural noise elements detached.
    pub noise: usize,

    /// Elements detached by the attribute blacklist.
    pub attribute_filtered: usize,

    /// Elements detached by the keyword filter.
    pub keyword_filtered: usize,

    /// Offending attributes dropped from protected containers.
    pub attributes_dropped: usize,

    /// Drop-cap elements replaced by their text.
    pub drop_caps: usize,

    /// Inline formatting elements unwrapped.
    pub inline_unwrapped: usize,

    /// `span` elements unwrapped inside paragraphs.
    pub spans_unwrapped: usize,

    /// Wanted tags renamed to `p`.
    pub paragraphs_renamed: usize,

    /// Paragraphs synthesized around loose runs.
    pub paragraphs_created: usize,
}

impl CleanStats {
    /// Total number of nodes touched across all passes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.comments
            + self.scripts
            + self.noise
            + self.attribute_filtered
            + self.keyword_filtered
            + self.attributes_dropped
            + self.drop_caps
            + self.inline_unwrapped
            + self.spans_unwrapped
            + self.paragraphs_renamed
            + self.paragraphs_created
    }

    /// True when the run changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.total() == 0
    }
}
