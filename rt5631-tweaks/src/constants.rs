/// Number of EQ coefficient registers driven by a preset (indexed 0x00..=0x0F).
pub const EQ_COEFFICIENTS: usize = 16;

/// Number of EQ presets exposed through the mode control.
pub const EQ_MODE_COUNT: usize = 13;

/// All-ones mask for a 16-bit register.
pub const FULL_MASK: u16 = 0xffff;

/// Default delay between ADC power-up and clearing its soft mute, in microseconds.
pub const ADC_SETTLE_US: u32 = 1_000;

/// DAPM event bits as delivered by the widget power framework.
pub const DAPM_PRE_PMU: u32 = 0x1;
pub const DAPM_POST_PMU: u32 = 0x2;
pub const DAPM_PRE_PMD: u32 = 0x4;
pub const DAPM_POST_PMD: u32 = 0x8;
