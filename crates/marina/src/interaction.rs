//! Discrete interaction state.
//!
//! Each item moves through `Idle -> Hovered -> Clicked -> Idle`, driven
//! entirely by input events; nothing in here animates. The clicked phase is
//! a transient flash armed with a token so that a timed expiry can only
//! revert the press that created it. A dock-wide `loading` latch suppresses
//! every new activation while one action is in flight, without touching
//! magnification.

use tracing::debug;

/// Discrete interaction phase of a single item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not under the pointer.
    #[default]
    Idle,
    /// Under the pointer and eligible for activation.
    Hovered,
    /// Recently activated; reverts when the flash expires.
    Clicked,
}

/// Per-item interaction phases plus the dock-wide loading latch.
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    phases: Vec<Phase>,
    flash_tokens: Vec<u64>,
    next_token: u64,
    loading: bool,
}

impl InteractionTracker {
    /// Creates a tracker for `count` items, all idle.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            phases: vec![Phase::Idle; count],
            flash_tokens: vec![0; count],
            next_token: 0,
            loading: false,
        }
    }

    /// Resizes phase storage when the tool list changes. New items start
    /// idle; surviving indices keep their phase.
    pub fn set_tool_count(&mut self, count: usize) {
        self.phases.resize(count, Phase::Idle);
        self.flash_tokens.resize(count, 0);
    }

    /// Number of tracked items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Returns true when no items are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Whether an action is currently in flight dock-wide.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Sets the dock-wide loading latch. While set, every new activation
    /// is a no-op; hover and magnification are unaffected.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// The phase of the item at `index` (out-of-range reads as idle).
    #[must_use]
    pub fn phase(&self, index: usize) -> Phase {
        self.phases.get(index).copied().unwrap_or_default()
    }

    /// Whether the item at `index` is hovered.
    #[must_use]
    pub fn is_hovered(&self, index: usize) -> bool {
        self.phase(index) == Phase::Hovered
    }

    /// Whether the item at `index` is in its click flash.
    #[must_use]
    pub fn is_clicked(&self, index: usize) -> bool {
        self.phase(index) == Phase::Clicked
    }

    /// Moves hover to `target` (or clears it when `None`).
    ///
    /// Disabled items never become hovered. An item in its click flash
    /// keeps flashing; the flash expiry re-reads hover truth when it
    /// lands.
    pub fn hover(&mut self, target: Option<usize>, enabled: &[bool]) {
        for (i, phase) in self.phases.iter_mut().enumerate() {
            if *phase == Phase::Clicked {
                continue;
            }
            let eligible = target == Some(i) && enabled.get(i).copied().unwrap_or(false);
            *phase = if eligible { Phase::Hovered } else { Phase::Idle };
        }
    }

    /// Attempts to press the item at `index`.
    ///
    /// Returns the flash token on success. Disabled items, out-of-range
    /// indices, and any press while the dock is loading are silent no-ops.
    /// Pressing an already-flashing item re-arms the flash; the newer
    /// token wins.
    pub fn press(&mut self, index: usize, enabled: &[bool]) -> Option<u64> {
        if self.loading {
            debug!(index, "press ignored: action in flight");
            return None;
        }
        if index >= self.phases.len() || !enabled.get(index).copied().unwrap_or(false) {
            debug!(index, "press ignored: disabled or unknown item");
            return None;
        }

        self.phases[index] = Phase::Clicked;
        self.next_token = self.next_token.wrapping_add(1);
        self.flash_tokens[index] = self.next_token;
        Some(self.next_token)
    }

    /// Ends a click flash.
    ///
    /// Only the token returned by the arming press can expire the flash;
    /// stale tokens are ignored. The item reverts to hovered or idle based
    /// on `hovered`, the current hover truth.
    pub fn expire(&mut self, index: usize, token: u64, hovered: Option<usize>) {
        if index >= self.phases.len() {
            return;
        }
        if self.flash_tokens[index] != token || self.phases[index] != Phase::Clicked {
            return;
        }
        self.phases[index] = if hovered == Some(index) {
            Phase::Hovered
        } else {
            Phase::Idle
        };
    }
}
