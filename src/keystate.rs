//! Latched key state and its transitions

use crate::event::Event;

/// A matrix position, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key {
    pub column: usize,
    pub row: usize,
}

impl Key {
    pub const fn new(column: usize, row: usize) -> Self {
        Key { column, row }
    }

    /// 1-based `(col, row)`
    pub fn coordinates(&self) -> (u32, u32) {
        (self.column as u32 + 1, self.row as u32 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    #[default]
    Idle,
    Pressed(Key),
}

impl ButtonState {
    /// Latches `key`, replacing whatever was latched before.
    ///
    /// Returns `Pressed` unless `key` was already the latched one. A
    /// different key replacing a latched one is reported as `Pressed` only;
    /// the old key gets no `Released`.
    pub fn press(&mut self, key: Key) -> Event {
        let previous = core::mem::replace(self, ButtonState::Pressed(key));
        if previous == *self {
            Event::None
        } else {
            Event::Pressed
        }
    }

    /// Clears the latch after a sweep that found nothing
    pub fn release(&mut self) -> Event {
        match core::mem::take(self) {
            ButtonState::Pressed(_) => Event::Released,
            ButtonState::Idle => Event::None,
        }
    }

    pub fn get_key(&self) -> Option<Key> {
        match self {
            ButtonState::Idle => None,
            ButtonState::Pressed(key) => Some(*key),
        }
    }

    /// 1-based `(col, row)` of the latched key, `(0, 0)` when idle
    pub fn coordinates(&self) -> (u32, u32) {
        self.get_key().map_or((0, 0), |key| key.coordinates())
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ButtonState::Idle)
    }
}
