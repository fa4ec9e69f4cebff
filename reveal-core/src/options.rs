//! Configuration of a [`VisibilityToggler`].
//!
//! [`VisibilityToggler`]: crate::toggler::VisibilityToggler

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What happens to the presentation flag when the target stops intersecting.
///
/// Converts from and into `bool`, where `true` is [`Continuous`], matching the
/// `reset` option of the configuration record.
///
/// [`Continuous`]: Self::Continuous
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "bool", into = "bool"))]
pub enum ResetPolicy {
    /// The flag follows every intersection change.
    #[default]
    Continuous,
    /// The flag is set the first time the target intersects and never cleared afterwards.
    OneShotLatch,
}

impl ResetPolicy {
    /// Whether leaving the intersecting state clears the flag.
    #[inline]
    pub fn resets(self) -> bool {
        matches!(self, Self::Continuous)
    }
}

impl From<bool> for ResetPolicy {
    fn from(reset: bool) -> Self {
        if reset {
            Self::Continuous
        } else {
            Self::OneShotLatch
        }
    }
}

impl From<ResetPolicy> for bool {
    fn from(policy: ResetPolicy) -> Self {
        policy.resets()
    }
}

/// Options used when attaching a toggler to an element.
///
/// Every field defaults on its own, so a partially specified record is filled in with
/// [`Options::DEFAULT_THRESHOLD`] and [`ResetPolicy::Continuous`] as needed.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Minimum visible fraction of the target required to count as intersecting.
    ///
    /// Not validated here; the platform rejects values outside `[0, 1]`.
    pub threshold: f64,
    /// Whether the flag is cleared again once the target leaves the viewport.
    pub reset: ResetPolicy,
}

impl Options {
    pub const DEFAULT_THRESHOLD: f64 = 0.3;

    /// Sets [`Options::threshold`].
    #[inline]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets [`Options::reset`]. Accepts either a [`ResetPolicy`] or a `bool`.
    #[inline]
    pub fn with_reset(mut self, reset: impl Into<ResetPolicy>) -> Self {
        self.reset = reset.into();
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self { threshold: Self::DEFAULT_THRESHOLD, reset: ResetPolicy::default() }
    }
}
