//! Hardware EQ presets and the sequence that loads them.
//!
//! Each preset is a 16-entry coefficient bank for the indexed registers
//! `EQ_BW_LOP..=EQ_HPF_GAIN`, a control word for `EQ_CTRL`, and the EQ input
//! and output volumes. The values are board calibration data and are not
//! derived here.

use super::registers as reg;
use super::{RegisterBus, Registers};
use crate::constants::{EQ_COEFFICIENTS, EQ_MODE_COUNT};
use crate::error::Result;

/// EQ preset selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EqMode {
    /// Flat response; EQ block and band enables off.
    #[default]
    Normal = 0,
    Club = 1,
    Dance = 2,
    Live = 3,
    Pop = 4,
    Rock = 5,
    Oppo = 6,
    Treble = 7,
    Bass = 8,
    /// Speaker tuning for the TF201.
    Tf201 = 9,
    /// Speaker tuning for the TF300TG.
    Tf300Tg = 10,
    /// Speaker tuning for the TF700T.
    Tf700T = 11,
    /// Speaker tuning for the TF300TL.
    Tf300Tl = 12,
}

impl EqMode {
    /// Every mode, in control-index order.
    pub const ALL: [EqMode; EQ_MODE_COUNT] = [
        EqMode::Normal,
        EqMode::Club,
        EqMode::Dance,
        EqMode::Live,
        EqMode::Pop,
        EqMode::Rock,
        EqMode::Oppo,
        EqMode::Treble,
        EqMode::Bass,
        EqMode::Tf201,
        EqMode::Tf300Tg,
        EqMode::Tf700T,
        EqMode::Tf300Tl,
    ];

    /// Enumerated-control item names, in control-index order.
    pub const NAMES: [&'static str; EQ_MODE_COUNT] = [
        "NORMAL", "CLUB", "DANCE", "LIVE", "POP", "ROCK", "OPPO", "TREBLE", "BASS", "TF201",
        "TF300TG", "TF700T", "TF300TL",
    ];

    /// Look up a mode by control index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Control index of this mode.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }
}

/// One EQ preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqPreset {
    pub mode: EqMode,
    pub coefficients: [u16; EQ_COEFFICIENTS],
    /// `EQ_CTRL` band enables. Bit 15 selects which polarity the high
    /// control bits settle to after loading.
    pub control: u16,
    pub input_volume: u16,
    pub output_volume: u16,
}

impl EqPreset {
    const fn new(
        mode: EqMode,
        coefficients: [u16; EQ_COEFFICIENTS],
        control: u16,
        input_volume: u16,
        output_volume: u16,
    ) -> Self {
        Self {
            mode,
            coefficients,
            control,
            input_volume,
            output_volume,
        }
    }
}

/// A full preset table, indexed by [`EqMode`].
pub type PresetTable = [EqPreset; EQ_MODE_COUNT];

/// Built-in ASUS presets.
#[rustfmt::skip]
pub static PRESETS: PresetTable = [
    // coefficient index:    0x0,    0x1,    0x2,    0x3,    0x4,    0x5,    0x6,    0x7,    0x8,    0x9,    0xA,    0xB,    0xC,    0xD,    0xE,    0xF
    EqPreset::new(EqMode::Normal,  [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], 0x0000, 0x8000, 0x0003),
    EqPreset::new(EqMode::Club,    [0x1C10, 0x0000, 0xC1CC, 0x1E5D, 0x0699, 0xCD48, 0x188D, 0x0699, 0xC3B6, 0x1CD0, 0x0699, 0x0436, 0x0000, 0x0000, 0x0000, 0x0000], 0x000E, 0x8000, 0x0003),
    EqPreset::new(EqMode::Dance,   [0x1F2C, 0x095B, 0xC071, 0x1F95, 0x0616, 0xC96E, 0x1B11, 0xFC91, 0xDCF2, 0x1194, 0xFAF2, 0x0436, 0x0000, 0x0000, 0x0000, 0x0000], 0x000F, 0x8000, 0x0003),
    EqPreset::new(EqMode::Live,    [0x1EB5, 0xFCB6, 0xC24A, 0x1DF8, 0x0E7C, 0xC883, 0x1C10, 0x0699, 0xDA41, 0x1561, 0x0295, 0x0436, 0x0000, 0x0000, 0x0000, 0x0000], 0x000F, 0x8000, 0x0003),
    EqPreset::new(EqMode::Pop,     [0x1EB5, 0xFCB6, 0xC1D4, 0x1E5D, 0x0E23, 0xD92E, 0x16E6, 0xFCB6, 0x0000, 0x0969, 0xF988, 0x0436, 0x0000, 0x0000, 0x0000, 0x0000], 0x000F, 0x8000, 0x0003),
    EqPreset::new(EqMode::Rock,    [0x1EB5, 0xFCB6, 0xC071, 0x1F95, 0x0424, 0xC30A, 0x1D27, 0xF900, 0x0C5D, 0x0FC7, 0x0E23, 0x0436, 0x0000, 0x0000, 0x0000, 0x0000], 0x000F, 0x8000, 0x0003),
    EqPreset::new(EqMode::Oppo,    [0x0000, 0x0000, 0xCA4A, 0x17F8, 0x0FEC, 0xCA4A, 0x17F8, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], 0x000F, 0x8000, 0x0003),
    EqPreset::new(EqMode::Treble,  [0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x188D, 0x1699, 0x0000, 0x0000, 0x0000], 0x0010, 0x8000, 0x0003),
    EqPreset::new(EqMode::Bass,    [0x1A43, 0x0C00, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000, 0x0000], 0x0001, 0x8000, 0x0003),
    EqPreset::new(EqMode::Tf201,   [0x0264, 0xFE43, 0xC111, 0x1EF8, 0x1D18, 0xC1EC, 0x1E61, 0xFA19, 0xC6B1, 0x1B54, 0x0FEC, 0x0D41, 0x095B, 0xC0B6, 0x1F4C, 0x1FA5], 0x403F, 0x8003, 0x0004),
    EqPreset::new(EqMode::Tf300Tg, [0x1CD0, 0x1D18, 0xC21C, 0x1E30, 0xF900, 0xC2C8, 0x1EC4, 0x095B, 0xCA22, 0x1C10, 0x1830, 0xF76D, 0x0FEC, 0xC130, 0x1ED6, 0x1F69], 0x403F, 0x8004, 0x0005),
    EqPreset::new(EqMode::Tf700T,  [0x0264, 0xFE43, 0xC0E5, 0x1F2C, 0x0C73, 0xC19B, 0x1EB2, 0xFA19, 0xC5FC, 0x1C10, 0x095B, 0x1561, 0x0699, 0xC18B, 0x1E7F, 0x1F3D], 0x402A, 0x8003, 0x0005),
    EqPreset::new(EqMode::Tf300Tl, [0x1CD0, 0x1D18, 0xC21C, 0x1E30, 0xF900, 0xC2C8, 0x1EC4, 0x095B, 0xCA22, 0x1C10, 0x1830, 0xF76D, 0x0FEC, 0xC130, 0x1ED6, 0x1F69], 0x403F, 0x8004, 0x0005),
];

/// Load `mode` from `presets` into the hardware EQ.
///
/// `adc_clock_in_use` tells whether the left ADC clock is needed by the
/// capture path. The EQ can only be programmed with that clock running, so
/// it is switched on for the load and switched back off afterwards unless
/// capture needs it.
pub fn apply_eq<B: RegisterBus>(
    regs: &Registers<B>,
    presets: &PresetTable,
    mode: EqMode,
    adc_clock_in_use: bool,
) -> Result<(), B::Error> {
    let preset = &presets[mode.index()];

    if mode == EqMode::Normal {
        // Coefficients first so the bank is flat before the block is disabled.
        write_coefficients(regs, preset)?;
        regs.update_bits(reg::EQ_CTRL, reg::EQ_BAND_MASK, 0)?;
        regs.write_indexed_masked(reg::EQ_PRE_VOL_CTRL, 0, reg::EQ_PRE_VOL_EN)?;
        log::info!("EQ disabled");
        return Ok(());
    }

    regs.update_bits(reg::PWR_MANAG_ADD1, reg::PWR_ADC_L_CLK, reg::PWR_ADC_L_CLK)?;
    regs.write_indexed_masked(reg::EQ_PRE_VOL_CTRL, reg::EQ_PRE_VOL_EN, reg::EQ_PRE_VOL_EN)?;
    regs.write(reg::EQ_CTRL, reg::EQ_BLOCK_EN)?;
    write_coefficients(regs, preset)?;
    regs.write_indexed(reg::EQ_PRE_VOL_CTRL, preset.input_volume)?;
    regs.write_indexed(reg::EQ_POST_VOL_CTRL, preset.output_volume)?;
    regs.write(reg::EQ_CTRL, preset.control | reg::EQ_HIGH_BITS)?;
    // Unverified on hardware whether this second write matters; keep both.
    let settle = if preset.control & reg::EQ_BLOCK_EN != 0 {
        reg::EQ_BLOCK_EN
    } else {
        0
    };
    regs.update_bits(reg::EQ_CTRL, reg::EQ_HIGH_BITS, settle)?;

    if !adc_clock_in_use {
        regs.update_bits(reg::PWR_MANAG_ADD1, reg::PWR_ADC_L_CLK, 0)?;
    }
    log::info!("EQ preset {} applied", mode.name());
    Ok(())
}

fn write_coefficients<B: RegisterBus>(regs: &Registers<B>, preset: &EqPreset) -> Result<(), B::Error> {
    for (index, value) in (reg::EQ_BW_LOP..=reg::EQ_HPF_GAIN).zip(preset.coefficients) {
        regs.write_indexed(index, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::mock::{BusFault, Op, RegisterFile};
    use crate::error::Error;

    fn map() -> (Registers<RegisterFile>, RegisterFile) {
        let file = RegisterFile::new();
        (Registers::new(file.clone()), file)
    }

    fn coefficient_bank(file: &RegisterFile) -> [u16; EQ_COEFFICIENTS] {
        let mut bank = [0; EQ_COEFFICIENTS];
        for (i, slot) in bank.iter_mut().enumerate() {
            *slot = file.get_index(i as u8);
        }
        bank
    }

    #[test]
    fn table_is_indexed_by_mode() {
        for (i, preset) in PRESETS.iter().enumerate() {
            assert_eq!(preset.mode.index(), i);
            assert_eq!(EqMode::from_index(i), Some(preset.mode));
        }
        assert_eq!(EqMode::from_index(EQ_MODE_COUNT), None);
    }

    #[test]
    fn exactly_one_flat_preset() {
        let flat: Vec<_> = PRESETS
            .iter()
            .filter(|p| p.coefficients.iter().all(|&c| c == 0) && p.control & reg::EQ_BAND_MASK == 0)
            .collect();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].mode, EqMode::Normal);
    }

    #[test]
    fn apply_loads_bank_and_volumes() {
        let (regs, file) = map();
        apply_eq(&regs, &PRESETS, EqMode::Tf201, false).unwrap();

        assert_eq!(coefficient_bank(&file), PRESETS[9].coefficients);
        assert_eq!(file.get_index(reg::EQ_PRE_VOL_CTRL), 0x8003);
        assert_eq!(file.get_index(reg::EQ_POST_VOL_CTRL), 0x0004);
        // Priming write, then control word with both high bits, then settle.
        assert_eq!(file.writes_to(reg::EQ_CTRL), [0x8000, 0xC03F, 0x003F]);
        assert_eq!(file.get(reg::EQ_CTRL), 0x003F);
    }

    #[test]
    fn apply_primes_control_before_coefficients() {
        let (regs, file) = map();
        apply_eq(&regs, &PRESETS, EqMode::Club, false).unwrap();
        let writes = file.writes();
        let prime = writes
            .iter()
            .position(|w| *w == (reg::EQ_CTRL, reg::EQ_BLOCK_EN))
            .unwrap();
        let first_coefficient = writes
            .iter()
            .position(|w| *w == (reg::INDEX_ADD, u16::from(reg::EQ_BW_LOP)))
            .unwrap();
        assert!(prime < first_coefficient);
    }

    #[test]
    fn adc_clock_is_restored_when_unused() {
        let (regs, file) = map();
        apply_eq(&regs, &PRESETS, EqMode::Rock, false).unwrap();
        assert_eq!(
            file.writes_to(reg::PWR_MANAG_ADD1),
            [reg::PWR_ADC_L_CLK, 0]
        );
    }

    #[test]
    fn adc_clock_is_left_on_for_capture() {
        let (regs, file) = map();
        file.set(reg::PWR_MANAG_ADD1, reg::PWR_ADC_L_CLK);
        apply_eq(&regs, &PRESETS, EqMode::Rock, true).unwrap();
        assert!(file.writes_to(reg::PWR_MANAG_ADD1).is_empty());
        assert_eq!(file.get(reg::PWR_MANAG_ADD1), reg::PWR_ADC_L_CLK);
    }

    #[test]
    fn normal_resets_bank_and_enables() {
        for mode in EqMode::ALL {
            let (regs, file) = map();
            apply_eq(&regs, &PRESETS, mode, false).unwrap();
            apply_eq(&regs, &PRESETS, EqMode::Normal, false).unwrap();
            assert_eq!(coefficient_bank(&file), [0; EQ_COEFFICIENTS], "{mode:?}");
            assert_eq!(file.get(reg::EQ_CTRL) & reg::EQ_BAND_MASK, 0, "{mode:?}");
            assert_eq!(file.get_index(reg::EQ_PRE_VOL_CTRL) & reg::EQ_PRE_VOL_EN, 0);
        }
    }

    #[test]
    fn normal_writes_coefficients_before_disable() {
        let (regs, file) = map();
        file.set(reg::EQ_CTRL, 0x003F);
        apply_eq(&regs, &PRESETS, EqMode::Normal, false).unwrap();
        let log = file.log();
        let last_coefficient = log
            .iter()
            .rposition(|op| *op == Op::Write(reg::INDEX_ADD, u16::from(reg::EQ_HPF_GAIN)))
            .unwrap();
        let disable = log
            .iter()
            .position(|op| *op == Op::Write(reg::EQ_CTRL, 0))
            .unwrap();
        assert!(last_coefficient < disable);
    }

    #[test]
    fn bus_error_stops_sequence() {
        let (regs, file) = map();
        file.fail_at(3);
        let result = apply_eq(&regs, &PRESETS, EqMode::Pop, false);
        assert_eq!(result, Err(Error::Bus(BusFault)));
        assert_eq!(file.log().len(), 3);
        assert!(file.writes_to(reg::EQ_CTRL).is_empty());
    }
}
