//! Scanner configuration

use embedded_hal::digital::v2::PinState;

use crate::event::EventMask;

/// Fewest rows or columns a matrix may have
pub const MIN_LINES: usize = 2;

/// Level a row reads while its key is closed and its column is energized.
///
/// With open-drain columns and pulled-up rows this is [`ActiveLevel::Low`];
/// with push-pull columns and pulled-down rows it is [`ActiveLevel::High`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    #[default]
    Low,
    High,
}

impl ActiveLevel {
    /// Returns the `(on, off)` pin states for this polarity
    pub fn signals(self) -> (PinState, PinState) {
        match self {
            ActiveLevel::Low => (PinState::Low, PinState::High),
            ActiveLevel::High => (PinState::High, PinState::Low),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScannerConfig {
    pub active_level: ActiveLevel,
    /// Events forwarded to the sink; all events are still returned from `step`
    pub event_mask: EventMask,
}

impl ScannerConfig {
    pub const fn new(active_level: ActiveLevel, event_mask: EventMask) -> Self {
        ScannerConfig {
            active_level,
            event_mask,
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self::new(ActiveLevel::Low, EventMask::ALL)
    }
}
