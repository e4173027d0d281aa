/// A single addressable slot of the simulated memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemoryCell {
    pub address: usize,
    pub value: Option<i64>,
}

impl MemoryCell {
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Flat memory of a fixed number of cells. Cell `i` always has address `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryTable {
    cells: Vec<MemoryCell>,
}

impl MemoryTable {
    pub const DEFAULT_SIZE: usize = 8;

    pub fn new(size: usize) -> Self {
        Self {
            cells: (0..size)
                .map(|address| MemoryCell {
                    address,
                    value: None,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(MemoryCell::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn cells(&self) -> &[MemoryCell] {
        &self.cells
    }

    pub fn contains(&self, address: usize) -> bool {
        address < self.cells.len()
    }

    /// Value stored at `address`, `None` when the cell is empty or out of range.
    pub fn read(&self, address: usize) -> Option<i64> {
        self.cells.get(address).and_then(|cell| cell.value)
    }

    pub fn write(&mut self, address: usize, value: i64) {
        match self.cells.get_mut(address) {
            Some(cell) => cell.value = Some(value),
            None => {
                log::warn!(
                    "Memory: write of {value} to out of range address {address:#06x} ignored."
                );
            }
        }
    }

    /// Addresses of all empty cells, ascending.
    pub fn free_addresses(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(|cell| cell.address)
            .collect()
    }

    pub fn occupied(&self) -> usize {
        self.cells.len() - self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.value = None;
        }
    }
}

impl Default for MemoryTable {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
