//! The visibility toggler state machine.
//!
//! A [`VisibilityToggler`] is attached to one [`PresentationTarget`] and is fed the intersection
//! reports that the platform delivers for it. It does not talk to the platform itself: a backend
//! registers the target with its observation facility and forwards every delivered batch to
//! [`VisibilityToggler::notify_batch()`].

use std::cell::Cell;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::options::{Options, ResetPolicy};
use crate::target::PresentationTarget;

/// Lifecycle of a [`VisibilityToggler`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// Observing; the flag follows the reported intersection changes.
    #[default]
    Active,
    /// Terminal. No further mutation of the flag happens.
    Destroyed,
}

/// A single intersection report for the observed target.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Whether the target intersects the root by at least the configured threshold.
    pub is_intersecting: bool,
    /// Visible fraction of the target at the time of the report, in `[0, 1]`.
    ///
    /// Informational only, the decision is taken on [`is_intersecting`](Self::is_intersecting).
    pub intersection_ratio: f64,
}

impl IntersectionEntry {
    /// A report without ratio information.
    pub fn new(is_intersecting: bool) -> Self {
        Self { is_intersecting, intersection_ratio: if is_intersecting { 1.0 } else { 0.0 } }
    }
}

/// What a report did to the flag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The flag was set.
    Shown,
    /// The flag was cleared.
    Hidden,
    /// The target is not intersecting and the flag was left as is, see
    /// [`ResetPolicy::OneShotLatch`].
    Unchanged,
    /// The toggler was destroyed, nothing happened.
    Ignored,
}

/// Reflects whether a target intersects the viewport as a presentation flag on that target.
pub struct VisibilityToggler<T> {
    target: T,
    options: Options,
    state: Cell<State>,
}

impl<T: PresentationTarget> VisibilityToggler<T> {
    /// Creates an [`Active`](State::Active) toggler. The flag is left untouched until the first
    /// report arrives.
    pub fn new(target: T, options: Options) -> Self {
        tracing::debug!(threshold = options.threshold, reset = ?options.reset, "attaching toggler");
        Self { target, options, state: Cell::new(State::Active) }
    }

    /// Applies a single report.
    pub fn notify(&self, entry: IntersectionEntry) -> Transition {
        if self.state.get() == State::Destroyed {
            tracing::trace!(?entry, "report after destroy ignored");
            return Transition::Ignored;
        }

        let transition = if entry.is_intersecting {
            self.target.set_visible(true);
            Transition::Shown
        } else {
            match self.options.reset {
                ResetPolicy::Continuous => {
                    self.target.set_visible(false);
                    Transition::Hidden
                },
                ResetPolicy::OneShotLatch => Transition::Unchanged,
            }
        };

        tracing::trace!(ratio = entry.intersection_ratio, ?transition, "applied report");
        transition
    }

    /// Applies every report of a batch, independently and in delivery order.
    ///
    /// Returns the transition of the last report, or `None` for an empty batch.
    pub fn notify_batch<I>(&self, entries: I) -> Option<Transition>
    where
        I: IntoIterator<Item = IntersectionEntry>,
    {
        entries.into_iter().fold(None, |_, entry| Some(self.notify(entry)))
    }

    /// Reads the flag from the target.
    pub fn is_visible(&self) -> bool {
        self.target.is_visible()
    }
}

impl<T> VisibilityToggler<T> {
    /// Moves to [`State::Destroyed`].
    ///
    /// Returns `false` when the toggler was already destroyed, in which case nothing happens.
    pub fn destroy(&self) -> bool {
        let was_active = self.state.replace(State::Destroyed) == State::Active;
        if was_active {
            tracing::debug!("toggler destroyed");
        }
        was_active
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state.get()
    }

    /// Whether reports are still applied.
    pub fn is_active(&self) -> bool {
        self.state.get() == State::Active
    }

    /// Options the toggler was attached with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The target the flag lives on.
    pub fn target(&self) -> &T {
        &self.target
    }
}

impl<T: fmt::Debug> fmt::Debug for VisibilityToggler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityToggler")
            .field("target", &self.target)
            .field("options", &self.options)
            .field("state", &self.state.get())
            .finish()
    }
}
