//! Status returned by behavior nodes.

use std::fmt;

/// The result of evaluating a node or task for one tick.
///
/// # Frame-based Semantics
///
/// A tick is one external time step (usually one frame). Work that spans
/// several frames reports [`Status::Running`] and is resumed on the next tick
/// from where it left off, instead of being restarted from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action ran to completion.
    Success,

    /// The behavior is still in progress and wants to be ticked again.
    Running,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` for `Success` and `Failure`, the two outcomes that end
    /// an activation.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }

    /// Lowercase name used in log fields.
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Running => "running",
            Status::Failure => "failure",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
