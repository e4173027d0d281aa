use crate::error::{ConfigError, Error};
use crate::memory::MemoryTable;
use crate::notification::{Notification, Notifier};
use crate::parse;
use crate::picker::{RandomPicker, SlotPicker};
use crate::view::TableView;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulatorConfig {
    /// Number of cells. Fixed for the lifetime of the simulator.
    pub size: usize,
    /// Seed for the slot picker. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            size: MemoryTable::DEFAULT_SIZE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MemoryState {
    /// At least one empty cell, writes are accepted.
    Available,
    /// Every cell holds a value until the next reset.
    Full,
}

/// The memory widget: the table, its two input fields and the address
/// chosen for the next write.
///
/// Every mutation refreshes the pending target before returning, so
/// [`RamSimulator::pending_target`] and [`RamSimulator::state`] are always
/// current.
pub struct RamSimulator {
    table: MemoryTable,
    pending_target: Option<usize>,
    value_input: String,
    address_input: String,
    picker: Box<dyn SlotPicker>,
    notifier: Box<dyn Notifier>,
}

impl RamSimulator {
    pub fn new<N: Notifier + 'static>(
        config: SimulatorConfig,
        notifier: N,
    ) -> Result<Self, ConfigError> {
        let picker: Box<dyn SlotPicker> = match config.seed {
            Some(seed) => Box::new(RandomPicker::seeded(seed)),
            None => Box::new(RandomPicker::from_entropy()),
        };
        Self::with_picker(config.size, picker, notifier)
    }

    pub fn with_picker<P: SlotPicker + 'static, N: Notifier + 'static>(
        size: usize,
        picker: P,
        notifier: N,
    ) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::EmptyMemory);
        }

        let mut simulator = Self {
            table: MemoryTable::new(size),
            pending_target: None,
            value_input: String::new(),
            address_input: String::new(),
            picker: Box::new(picker),
            notifier: Box::new(notifier),
        };
        simulator.recompute_pending_target();
        log::info!("Simulator: {size} cells ready.");

        Ok(simulator)
    }

    pub fn table(&self) -> &MemoryTable {
        &self.table
    }

    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    pub fn is_full(&self) -> bool {
        self.table.is_full()
    }

    pub fn state(&self) -> MemoryState {
        if self.is_full() {
            MemoryState::Full
        } else {
            MemoryState::Available
        }
    }

    pub fn value_input(&self) -> &str {
        &self.value_input
    }

    pub fn address_input(&self) -> &str {
        &self.address_input
    }

    pub fn set_value_input(&mut self, text: &str) {
        self.value_input = text.to_string();
    }

    pub fn set_address_input(&mut self, text: &str) {
        self.address_input = text.to_string();
    }

    /// Writes `raw_value` into the pending target.
    ///
    /// Input that is not a number is ignored without a notification, as is
    /// a write while no target is pending. Returns the address written.
    pub fn write(&mut self, raw_value: &str) -> Option<usize> {
        let value = match parse::value(raw_value) {
            Ok(value) => value,
            Err(error) => {
                log::debug!("Simulator: write ignored, {error}.");
                return None;
            }
        };
        let address = self.pending_target.take()?;

        self.table.write(address, value);
        self.value_input.clear();
        log::debug!("Simulator: wrote {value} to {address:#06x}.");

        self.recompute_pending_target();
        Some(address)
    }

    /// The "Assign" button: writes the contents of the value field.
    pub fn assign(&mut self) -> Option<usize> {
        let raw_value = self.value_input.clone();
        self.write(&raw_value)
    }

    /// Reports the value stored at `raw_address` through the notifier.
    pub fn read(&mut self, raw_address: &str) -> Result<Option<i64>, Error> {
        match parse::address(raw_address, self.table.len()) {
            Ok(address) => {
                let value = self.table.read(address);
                self.notifier.notify(Notification::value_at(address, value));
                Ok(value)
            }
            Err(error) => {
                self.notifier.notify(Notification::invalid_address());
                Err(error)
            }
        }
    }

    /// Reads the address currently in the address field.
    pub fn lookup(&mut self) -> Result<Option<i64>, Error> {
        let raw_address = self.address_input.clone();
        self.read(&raw_address)
    }

    /// Empties every cell and both input fields.
    pub fn reset(&mut self) {
        self.table.clear();
        self.value_input.clear();
        self.address_input.clear();
        log::debug!("Simulator: memory freed.");

        self.recompute_pending_target();
    }

    /// Chooses the next write target among the empty cells, or signals that
    /// memory is full.
    pub fn recompute_pending_target(&mut self) -> Option<usize> {
        if self.table.is_full() {
            self.pending_target = None;
            log::warn!("Simulator: memory full.");
            self.notifier.notify(Notification::memory_full());
            return None;
        }

        let free = self.table.free_addresses();
        self.pending_target = self.picker.pick(&free);
        if let Some(address) = self.pending_target {
            log::debug!("Simulator: next write goes to {address:#06x}.");
        }
        self.pending_target
    }

    pub fn view(&self) -> TableView {
        TableView::new(&self.table, &self.value_input)
    }
}
