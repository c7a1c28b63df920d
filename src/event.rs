//! Scan events and the hook they are delivered to

use core::ops::BitOr;

use crate::keystate::ButtonState;

/// Outcome of a single scan tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    None = 0x0,
    Released = 0x1,
    Pressed = 0x2,
}

impl Event {
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Set of events a sink wants to hear about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventMask(u8);

impl EventMask {
    pub const NONE: EventMask = EventMask(0);
    pub const RELEASED: EventMask = EventMask(Event::Released.bits());
    pub const PRESSED: EventMask = EventMask(Event::Pressed.bits());
    pub const ALL: EventMask = EventMask(Event::Released.bits() | Event::Pressed.bits());

    /// `Event::None` is never contained
    pub const fn contains(self, event: Event) -> bool {
        self.0 & event.bits() != 0
    }
}

impl Default for EventMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl BitOr for EventMask {
    type Output = EventMask;

    fn bitor(self, rhs: EventMask) -> EventMask {
        EventMask(self.0 | rhs.0)
    }
}

impl From<Event> for EventMask {
    fn from(event: Event) -> Self {
        EventMask(event.bits())
    }
}

/// Receives masked events synchronously from inside `Scanner::step`.
///
/// `button` is the state after the transition, so a release is reported with
/// [`ButtonState::Idle`].
pub trait EventSink {
    fn notify(&mut self, event: Event, button: ButtonState);
}

/// Sink that ignores everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSink;

impl EventSink for NoSink {
    fn notify(&mut self, _event: Event, _button: ButtonState) {}
}

impl<F: FnMut(Event, ButtonState)> EventSink for F {
    fn notify(&mut self, event: Event, button: ButtonState) {
        self(event, button)
    }
}
