//! Register-file mock shared by the unit and integration tests.
//!
//! Emulates the primary register space and the indexed space behind
//! `INDEX_ADD` / `INDEX_DATA`, and records every transaction in order.
//! Clones share state, so a test keeps one handle for inspection while the
//! driver owns another. A clone can also stand in as the driver's delay, in
//! which case waits land in the same log as the bus traffic.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use rt5631_tweaks::codec::registers as reg;
use rt5631_tweaks::codec::RegisterBus;

/// One recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Read(u8),
    Write(u8, u16),
    /// Wait in nanoseconds.
    Delay(u32),
}

/// Injected bus failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

struct State {
    regs: [u16; 256],
    index: [u16; 256],
    index_ptr: u8,
    log: Vec<Op>,
    fail_at: Option<usize>,
}

/// Emulated RT5631 register file.
#[derive(Clone)]
pub struct RegisterFile {
    state: Arc<Mutex<State>>,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                regs: [0; 256],
                index: [0; 256],
                index_ptr: 0,
                log: Vec::new(),
                fail_at: None,
            })),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    /// Preset a primary register without logging.
    pub fn set(&self, register: u8, value: u16) {
        self.with_state(|s| s.regs[register as usize] = value);
    }

    /// Preset an indexed register without logging.
    pub fn set_index(&self, register: u8, value: u16) {
        self.with_state(|s| s.index[register as usize] = value);
    }

    pub fn get(&self, register: u8) -> u16 {
        self.with_state(|s| s.regs[register as usize])
    }

    pub fn get_index(&self, register: u8) -> u16 {
        self.with_state(|s| s.index[register as usize])
    }

    /// Fail the transaction with this zero-based position in the log.
    pub fn fail_at(&self, position: usize) {
        self.with_state(|s| s.fail_at = Some(position));
    }

    pub fn log(&self) -> Vec<Op> {
        self.with_state(|s| s.log.clone())
    }

    pub fn clear_log(&self) {
        self.with_state(|s| s.log.clear());
    }

    /// All writes in order.
    pub fn writes(&self) -> Vec<(u8, u16)> {
        self.log()
            .into_iter()
            .filter_map(|op| match op {
                Op::Write(r, v) => Some((r, v)),
                Op::Read(_) | Op::Delay(_) => None,
            })
            .collect()
    }

    /// Values written to one register, in order.
    pub fn writes_to(&self, register: u8) -> Vec<u16> {
        self.writes()
            .into_iter()
            .filter(|(r, _)| *r == register)
            .map(|(_, v)| v)
            .collect()
    }

    fn check_fault(s: &mut State) -> Result<(), BusFault> {
        if s.fail_at == Some(s.log.len()) {
            return Err(BusFault);
        }
        Ok(())
    }
}

impl RegisterBus for RegisterFile {
    type Error = BusFault;

    fn read(&mut self, register: u8) -> Result<u16, Self::Error> {
        self.with_state(|s| {
            Self::check_fault(s)?;
            s.log.push(Op::Read(register));
            Ok(if register == reg::INDEX_DATA {
                s.index[s.index_ptr as usize]
            } else {
                s.regs[register as usize]
            })
        })
    }

    fn write(&mut self, register: u8, value: u16) -> Result<(), Self::Error> {
        self.with_state(|s| {
            Self::check_fault(s)?;
            s.log.push(Op::Write(register, value));
            match register {
                reg::INDEX_ADD => s.index_ptr = value as u8,
                reg::INDEX_DATA => s.index[s.index_ptr as usize] = value,
                _ => {}
            }
            s.regs[register as usize] = value;
            Ok(())
        })
    }
}

impl DelayNs for RegisterFile {
    fn delay_ns(&mut self, ns: u32) {
        self.with_state(|s| s.log.push(Op::Delay(ns)));
    }
}
