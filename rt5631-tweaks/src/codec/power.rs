//! Shared DAC/interface power domain.
//!
//! The ADC and DAC paths both need the I2S interface clock and the DAC
//! reference. [`SharedPower`] counts how many paths hold the domain and only
//! switches it on the first acquire and off on the last release. It does not
//! deduplicate callers; each path holds a [`PowerClaim`] that makes its own
//! acquire/release pair idempotent.

use super::registers as reg;
use super::{RegisterBus, Registers};
use crate::error::Result;

/// Reference-counted shared power domain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SharedPower {
    count: u32,
    pll_in_use: bool,
}

impl SharedPower {
    pub const fn new(pll_in_use: bool) -> Self {
        Self {
            count: 0,
            pll_in_use,
        }
    }

    /// Number of paths currently holding the domain.
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn pll_in_use(&self) -> bool {
        self.pll_in_use
    }

    pub fn set_pll_in_use(&mut self, in_use: bool) {
        self.pll_in_use = in_use;
    }

    /// Take one reference on the domain.
    ///
    /// The count only moves once every transaction has succeeded.
    pub fn acquire<B: RegisterBus>(&mut self, regs: &Registers<B>) -> Result<(), B::Error> {
        let count = self.count + 1;
        if count == 1 {
            regs.update_bits(
                reg::PWR_MANAG_ADD1,
                reg::PWR_MAIN_I2S_EN | reg::PWR_DAC_REF,
                reg::PWR_MAIN_I2S_EN | reg::PWR_DAC_REF,
            )?;
            log::info!("shared power domain engaged");
        }

        // Routing can change between acquisitions, so check on every call.
        let mux = regs.read(reg::SPK_MONO_HP_OUT_CTRL)?;
        if mux & reg::HP_L_MUX_SEL_DAC_L == 0 {
            regs.update_bits(reg::PWR_MANAG_ADD1, reg::PWR_DAC_L_TO_MIXER, reg::PWR_DAC_L_TO_MIXER)?;
        }
        if mux & reg::HP_R_MUX_SEL_DAC_R == 0 {
            regs.update_bits(reg::PWR_MANAG_ADD1, reg::PWR_DAC_R_TO_MIXER, reg::PWR_DAC_R_TO_MIXER)?;
        }

        if self.pll_in_use {
            regs.update_bits(reg::PWR_MANAG_ADD2, reg::PWR_PLL1, reg::PWR_PLL1)?;
        }
        self.count = count;
        Ok(())
    }

    /// Drop one reference on the domain.
    ///
    /// The PLL is gated by every release, whatever the remaining count.
    pub fn release<B: RegisterBus>(&mut self, regs: &Registers<B>) -> Result<(), B::Error> {
        let Some(count) = self.count.checked_sub(1) else {
            log::warn!("shared power released with no holder");
            return Ok(());
        };

        if count == 0 {
            regs.update_bits(
                reg::PWR_MANAG_ADD1,
                reg::PWR_MAIN_I2S_EN
                    | reg::PWR_DAC_REF
                    | reg::PWR_DAC_L_TO_MIXER
                    | reg::PWR_DAC_R_TO_MIXER,
                0,
            )?;
            log::info!("shared power domain released");
        }
        if self.pll_in_use {
            regs.update_bits(reg::PWR_MANAG_ADD2, reg::PWR_PLL1, 0)?;
        }
        self.count = count;
        Ok(())
    }
}

/// One path's hold on the shared domain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PowerClaim {
    engaged: bool,
}

impl PowerClaim {
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Acquire unless this path already holds the domain.
    pub fn engage<B: RegisterBus>(
        &mut self,
        power: &mut SharedPower,
        regs: &Registers<B>,
    ) -> Result<(), B::Error> {
        if self.engaged {
            return Ok(());
        }
        power.acquire(regs)?;
        self.engaged = true;
        Ok(())
    }

    /// Release if this path holds the domain.
    pub fn disengage<B: RegisterBus>(
        &mut self,
        power: &mut SharedPower,
        regs: &Registers<B>,
    ) -> Result<(), B::Error> {
        if !self.engaged {
            return Ok(());
        }
        power.release(regs)?;
        self.engaged = false;
        Ok(())
    }
}
