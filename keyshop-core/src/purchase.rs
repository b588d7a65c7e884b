//! Purchase button protocol for a key card.
//!
//! The widget asks for a ticket before dispatching an add, then resolves the
//! ticket with the outcome. Tickets issued before the last `props_changed`
//! or a newer `begin` are ignored, so late resolutions and timer callbacks
//! cannot clobber the current state.
use serde::{Deserialize, Serialize};

use crate::cart::AddStatus;

/// Delay before a `JustAdded` button returns to idle.
pub const RESET_DELAY_MS: u32 = 1500;

pub const ADDING_LABEL: &str = "Adding...";
pub const ADDED_LABEL: &str = "Added \u{2714}";
pub const IN_CART_LABEL: &str = "In Cart";

pub const STATUS_ADDING: &str = "Adding to cart.";
pub const STATUS_ADDED: &str = "Item successfully added to cart.";
pub const STATUS_ALREADY_IN_CART: &str = "Item is already in your cart.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PurchasePhase {
    #[default]
    Idle,
    Adding,
    JustAdded,
    AlreadyInCart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseOutcome {
    Added,
    AlreadyInCart,
}

impl From<AddStatus> for PurchaseOutcome {
    fn from(status: AddStatus) -> Self {
        match status {
            AddStatus::Added => Self::Added,
        }
    }
}

/// Generation token tying an async step back to the `begin` that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PurchaseTicket(u64);

/// What the widget should do after a resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveEffect {
    /// Stale ticket; nothing changed
    Ignored,
    /// Show particles and schedule `reset` after [`RESET_DELAY_MS`]
    ScheduleReset(PurchaseTicket),
    /// Settle without a reset
    Settled,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchaseButton {
    phase: PurchasePhase,
    generation: u64,
}

impl PurchaseButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> PurchasePhase {
        self.phase
    }

    /// Start an add. Refused while one is already in flight.
    pub fn begin(&mut self) -> Option<PurchaseTicket> {
        if self.phase == PurchasePhase::Adding {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = PurchasePhase::Adding;
        Some(PurchaseTicket(self.generation))
    }

    pub fn resolve(&mut self, ticket: PurchaseTicket, outcome: PurchaseOutcome) -> ResolveEffect {
        if !self.is_current(ticket) || self.phase != PurchasePhase::Adding {
            return ResolveEffect::Ignored;
        }
        match outcome {
            PurchaseOutcome::Added => {
                self.phase = PurchasePhase::JustAdded;
                ResolveEffect::ScheduleReset(ticket)
            }
            PurchaseOutcome::AlreadyInCart => {
                self.phase = PurchasePhase::AlreadyInCart;
                ResolveEffect::Settled
            }
        }
    }

    /// Return to idle if `ticket` is still current. Returns whether it applied.
    pub fn reset(&mut self, ticket: PurchaseTicket) -> bool {
        if !self.is_current(ticket) || self.phase != PurchasePhase::JustAdded {
            return false;
        }
        self.phase = PurchasePhase::Idle;
        true
    }

    /// The card now shows a different offer: go idle and drop pending work.
    pub fn props_changed(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = PurchasePhase::Idle;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.phase == PurchasePhase::Adding
    }

    #[must_use]
    pub fn shows_particles(&self) -> bool {
        self.phase == PurchasePhase::JustAdded
    }

    /// Button text, with `buy_text` used while idle.
    #[must_use]
    pub fn label<'a>(&self, buy_text: &'a str) -> &'a str {
        match self.phase {
            PurchasePhase::Idle => buy_text,
            PurchasePhase::Adding => ADDING_LABEL,
            PurchasePhase::JustAdded => ADDED_LABEL,
            PurchasePhase::AlreadyInCart => IN_CART_LABEL,
        }
    }

    /// Text for the polite live region.
    #[must_use]
    pub const fn status_message(&self) -> &'static str {
        match self.phase {
            PurchasePhase::Idle => "",
            PurchasePhase::Adding => STATUS_ADDING,
            PurchasePhase::JustAdded => STATUS_ADDED,
            PurchasePhase::AlreadyInCart => STATUS_ALREADY_IN_CART,
        }
    }

    fn is_current(&self, ticket: PurchaseTicket) -> bool {
        ticket.0 == self.generation
    }
}

/// Bounding box in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Centre of `button` relative to `card`, as `(top, left)`.
#[must_use]
pub fn particle_origin(button: Rect, card: Rect) -> (f64, f64) {
    (
        button.top - card.top + button.height / 2.0,
        button.left - card.left + button.width / 2.0,
    )
}
