//! Scans a keyboard matrix one column per tick

use embedded_hal::digital::v2::{InputPin, OutputPin, PinState};
use heapless::Vec;

use crate::config::{ScannerConfig, MIN_LINES};
use crate::error::Error;
use crate::event::{Event, EventSink};
use crate::keystate::{ButtonState, Key};

/// Present only once `init` has succeeded
#[derive(Debug)]
struct ScanState {
    on: PinState,
    off: PinState,
    /// Column energized between ticks
    scan_column: usize,
    button: ButtonState,
}

/// Single-key matrix scanner.
///
/// Columns are outputs, rows are inputs. Each [`Scanner::step`] samples the
/// rows of the one energized column and then moves on, so noticing a new
/// press takes up to `columns` ticks and noticing a release takes exactly one
/// empty sweep. Only one key is tracked: the first row found active wins and
/// the sweep restarts at column 0 after every detection.
///
/// All access goes through `&mut self`; driving the same scanner from two
/// interrupt contexts has to be serialised by the caller.
pub struct Scanner<ColumnPinT, RowPinT, SinkT, const COLS: usize, const ROWS: usize> {
    columns: Vec<ColumnPinT, COLS>,
    rows: Vec<RowPinT, ROWS>,
    config: ScannerConfig,
    sink: SinkT,
    state: Option<ScanState>,
}

impl<ColumnPinT, RowPinT, SinkT, const COLS: usize, const ROWS: usize>
    Scanner<ColumnPinT, RowPinT, SinkT, COLS, ROWS>
{
    /// Takes ownership of already configured pins. No pin is touched until
    /// [`Scanner::init`].
    pub fn new(
        columns: Vec<ColumnPinT, COLS>,
        rows: Vec<RowPinT, ROWS>,
        config: ScannerConfig,
        sink: SinkT,
    ) -> Self {
        Scanner {
            columns,
            rows,
            config,
            sink,
            state: None,
        }
    }

    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    pub fn sink(&self) -> &SinkT {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut SinkT {
        &mut self.sink
    }

    /// Gives back the pins and the sink
    pub fn release(self) -> (Vec<ColumnPinT, COLS>, Vec<RowPinT, ROWS>, SinkT) {
        (self.columns, self.rows, self.sink)
    }
}

impl<E, ColumnPinT, RowPinT, SinkT, const COLS: usize, const ROWS: usize>
    Scanner<ColumnPinT, RowPinT, SinkT, COLS, ROWS>
where
    ColumnPinT: OutputPin<Error = E>,
    RowPinT: InputPin<Error = E>,
    SinkT: EventSink,
{
    /// Validates the matrix, de-energizes every column and energizes column 0.
    ///
    /// May be called again to re-synchronise; any latched key is forgotten.
    /// On failure the scanner is left uninitialized.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.state = None;

        if self.columns.len() < MIN_LINES || self.rows.len() < MIN_LINES {
            warn!(
                "rejecting {}x{} matrix",
                self.columns.len(),
                self.rows.len()
            );
            return Err(Error::InvalidParams);
        }

        let (on, off) = self.config.active_level.signals();
        for column in self.columns.iter_mut() {
            column.set_state(off).map_err(Error::Pin)?;
        }
        self.columns[0].set_state(on).map_err(Error::Pin)?;

        self.state = Some(ScanState {
            on,
            off,
            scan_column: 0,
            button: ButtonState::Idle,
        });
        debug!(
            "scanning {}x{} matrix",
            self.columns.len(),
            self.rows.len()
        );
        Ok(())
    }

    /// 1-based `(col, row)` of the latched key, `(0, 0)` if none
    pub fn current_button(&self) -> Result<(u32, u32), Error<E>> {
        Ok(self.button_state()?.coordinates())
    }

    pub fn button_state(&self) -> Result<ButtonState, Error<E>> {
        self.state
            .as_ref()
            .map(|state| state.button)
            .ok_or(Error::NotInitialized)
    }

    /// Index of the column that is energized right now
    pub fn scan_column(&self) -> Result<usize, Error<E>> {
        self.state
            .as_ref()
            .map(|state| state.scan_column)
            .ok_or(Error::NotInitialized)
    }

    /// Runs one tick: samples the energized column, classifies the result and
    /// energizes the column for the next tick.
    ///
    /// The sink is called before returning if the event is in the configured
    /// mask. The returned event is never filtered.
    pub fn step(&mut self) -> Result<Event, Error<E>> {
        let state = self.state.as_mut().ok_or(Error::NotInitialized)?;
        let columns = self.columns.len();

        if state.scan_column >= columns {
            debug!("scan column {} out of range, resyncing", state.scan_column);
            state.scan_column = 0;
            self.columns[0].set_state(state.on).map_err(Error::Pin)?;
            return Ok(Event::None);
        }

        let mut detected = None;
        for (row, input) in self.rows.iter().enumerate() {
            if read_level(input).map_err(Error::Pin)? == state.on {
                detected = Some(Key::new(state.scan_column, row));
                break;
            }
        }

        self.columns[state.scan_column]
            .set_state(state.off)
            .map_err(Error::Pin)?;

        let event = match detected {
            Some(key) => {
                state.scan_column = 0;
                state.button.press(key)
            }
            None => {
                state.scan_column += 1;
                if state.scan_column == columns {
                    state.scan_column = 0;
                    state.button.release()
                } else {
                    Event::None
                }
            }
        };

        self.columns[state.scan_column]
            .set_state(state.on)
            .map_err(Error::Pin)?;

        if event != Event::None {
            trace!("{} -> {}", event, state.button);
        }
        if self.config.event_mask.contains(event) {
            self.sink.notify(event, state.button);
        }

        Ok(event)
    }
}

fn read_level<E, RowPinT: InputPin<Error = E>>(input: &RowPinT) -> Result<PinState, E> {
    Ok(input.is_high()?.into())
}
