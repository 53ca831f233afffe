//! Locked register map over both register spaces.
//!
//! The indexed (second-layer) space is reached by writing the target address
//! to `INDEX_ADD` and then reading or writing `INDEX_DATA`. That pair, and
//! every read-modify-write, must not interleave with another user of the
//! same bus, so each primitive here holds the bus lock for its whole
//! transaction.

use spin::{Mutex, MutexGuard};

use super::registers as reg;
use super::RegisterBus;
use crate::constants::FULL_MASK;
use crate::error::{Error, Result};

/// Register map for one codec instance.
pub struct Registers<B> {
    bus: Mutex<B>,
}

impl<B: RegisterBus> Registers<B> {
    pub fn new(bus: B) -> Self {
        Self {
            bus: Mutex::new(bus),
        }
    }

    /// Consume the map and return the bus.
    pub fn release(self) -> B {
        self.bus.into_inner()
    }

    fn lock(&self) -> MutexGuard<'_, B> {
        self.bus.lock()
    }

    // ── Primary space ──────────────────────────────────────────────────

    pub fn read(&self, register: u8) -> Result<u16, B::Error> {
        self.lock().read(register).map_err(Error::Bus)
    }

    pub fn write(&self, register: u8, value: u16) -> Result<(), B::Error> {
        self.lock().write(register, value).map_err(Error::Bus)
    }

    /// Read-modify-write: `new = (old & !mask) | (value & mask)`.
    ///
    /// The write is skipped when `new == old`. Returns whether a write was
    /// issued.
    pub fn update_bits(&self, register: u8, mask: u16, value: u16) -> Result<bool, B::Error> {
        let mut bus = self.lock();
        let old = bus.read(register).map_err(Error::Bus)?;
        let new = (old & !mask) | (value & mask);
        if new == old {
            return Ok(false);
        }
        bus.write(register, new).map_err(Error::Bus)?;
        Ok(true)
    }

    // ── Indexed space ──────────────────────────────────────────────────

    /// Write a second-layer register.
    pub fn write_indexed(&self, index: u8, value: u16) -> Result<(), B::Error> {
        index_write(&mut *self.lock(), index, value)
    }

    /// Read a second-layer register.
    pub fn read_indexed(&self, index: u8) -> Result<u16, B::Error> {
        index_read(&mut *self.lock(), index)
    }

    /// Masked write to a second-layer register.
    ///
    /// A zero mask issues nothing. A full mask is a plain write. Anything
    /// else reads, merges `(old & !mask) | (value & mask)` and writes back
    /// under one hold of the bus lock.
    pub fn write_indexed_masked(&self, index: u8, value: u16, mask: u16) -> Result<(), B::Error> {
        if mask == 0 {
            return Ok(());
        }
        let mut bus = self.lock();
        if mask == FULL_MASK {
            return index_write(&mut *bus, index, value);
        }
        let old = index_read(&mut *bus, index)?;
        index_write(&mut *bus, index, (old & !mask) | (value & mask))
    }
}

fn index_write<B: RegisterBus>(bus: &mut B, index: u8, value: u16) -> Result<(), B::Error> {
    bus.write(reg::INDEX_ADD, u16::from(index)).map_err(Error::Bus)?;
    bus.write(reg::INDEX_DATA, value).map_err(Error::Bus)
}

fn index_read<B: RegisterBus>(bus: &mut B, index: u8) -> Result<u16, B::Error> {
    bus.write(reg::INDEX_ADD, u16::from(index)).map_err(Error::Bus)?;
    bus.read(reg::INDEX_DATA).map_err(Error::Bus)
}
