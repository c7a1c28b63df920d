//! Incremental key matrix scanning for small microcontrollers.
//!
//! One column is energized per tick; a full sweep of the matrix is spread
//! over `COLS` calls to [`matrix::Scanner::step`], so the caller's timer
//! interrupt or main loop never blocks on a scan.
#![no_std]

#[macro_use]
mod fmt;

pub mod config;
pub mod error;
pub mod event;
pub mod keystate;
pub mod matrix;

#[cfg(test)]
mod mock;

pub use config::{ActiveLevel, ScannerConfig};
pub use error::Error;
pub use event::{Event, EventMask, EventSink, NoSink};
pub use keystate::{ButtonState, Key};
pub use matrix::Scanner;
