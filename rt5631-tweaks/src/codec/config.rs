//! Driver configuration.

use super::eq::{PresetTable, PRESETS};
use super::profile::VariantProfile;
use crate::constants::ADC_SETTLE_US;

/// Tunables for one [`Rt5631`](super::Rt5631) instance.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Delay between ADC power-up and releasing its soft mute.
    pub adc_settle_us: u32,
    /// The codec clock is derived from PLL1, which then follows the shared
    /// power domain.
    pub pll_in_use: bool,
    /// Calibration override; `None` uses the built-in table for the board.
    pub profile: Option<&'static VariantProfile>,
    pub presets: &'static PresetTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            adc_settle_us: ADC_SETTLE_US,
            pll_in_use: false,
            profile: None,
            presets: &PRESETS,
        }
    }
}

impl Config {
    pub fn with_profile(mut self, profile: &'static VariantProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_adc_settle_us(mut self, us: u32) -> Self {
        self.adc_settle_us = us;
        self
    }

    pub fn with_pll(mut self, in_use: bool) -> Self {
        self.pll_in_use = in_use;
        self
    }
}
