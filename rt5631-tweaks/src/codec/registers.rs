//! RT5631 register addresses and bitfield definitions.
//!
//! Primary registers are 8-bit addresses holding 16-bit values. A second,
//! paged register file (EQ coefficients and volumes among others) is reached
//! through the [`INDEX_ADD`] / [`INDEX_DATA`] pair.

// ── I2C address ────────────────────────────────────────────────────────────

/// Default 7-bit I2C address.
pub const I2C_ADDR: u8 = 0x1A;

// ── Primary register space ─────────────────────────────────────────────────

pub const RESET: u8 = 0x00;

/// Speaker output volume.
/// - Bit 15   : L_MUTE
/// - Bits 13:8: L_VOL
/// - Bit 7    : R_MUTE
/// - Bits 5:0 : R_VOL
pub const SPK_OUT_VOL: u8 = 0x02;
pub const HP_OUT_VOL: u8 = 0x04;
pub const MONO_AXO_1_2_VOL: u8 = 0x06;
pub const AUX_IN_VOL: u8 = 0x0A;
pub const STEREO_DAC_VOL_1: u8 = 0x0C;
pub const MIC_CTRL_1: u8 = 0x0E;
pub const STEREO_DAC_VOL_2: u8 = 0x10;

/// ADC control 1.
/// - Bit 15  : ADC_L_MUTE (soft mute)
/// - Bit 7   : ADC_R_MUTE (soft mute)
/// - Bits 7:0: capture boost / gain (low five bits on most boards)
pub const ADC_CTRL_1: u8 = 0x12;
pub const ADC_REC_MIXER: u8 = 0x14;
pub const ADC_CTRL_2: u8 = 0x16;
pub const VDAC_DIG_VOL: u8 = 0x18;
pub const OUTMIXER_L_CTRL: u8 = 0x1A;
pub const OUTMIXER_R_CTRL: u8 = 0x1C;
pub const AXO1MIXER_CTRL: u8 = 0x1E;
pub const AXO2MIXER_CTRL: u8 = 0x20;
pub const MIC_CTRL_2: u8 = 0x22;
pub const DIG_MIC_CTRL: u8 = 0x24;
pub const MONO_INPUT_VOL: u8 = 0x26;
pub const SPK_MIXER_CTRL: u8 = 0x28;
pub const SPK_MONO_OUT_CTRL: u8 = 0x2A;

/// Speaker / mono / headphone output mux.
/// - Bit 11: HP_L_MUX_SEL (1 = DAC_L)
/// - Bit 10: HP_R_MUX_SEL (1 = DAC_R)
pub const SPK_MONO_HP_OUT_CTRL: u8 = 0x2C;
pub const SDP_CTRL: u8 = 0x34;
pub const MONO_SDP_CTRL: u8 = 0x36;
pub const STEREO_AD_DA_CLK_CTRL: u8 = 0x38;

/// Power management 1.
/// - Bit 15: MAIN_I2S_EN
/// - Bit 12: CLASS_D
/// - Bit 11: ADC_L_CLK
/// - Bit 10: ADC_R_CLK
/// - Bit  9: DAC_L_CLK
/// - Bit  8: DAC_R_CLK
/// - Bit  7: DAC_REF
/// - Bit  6: DAC_L_TO_MIXER
/// - Bit  5: DAC_R_TO_MIXER
pub const PWR_MANAG_ADD1: u8 = 0x3A;

/// Power management 2.
/// - Bit 15: PLL1
pub const PWR_MANAG_ADD2: u8 = 0x3B;
pub const PWR_MANAG_ADD3: u8 = 0x3C;

/// Power management 4.
/// - Bit 15: SPK_L_VOL
/// - Bit 14: SPK_R_VOL
pub const PWR_MANAG_ADD4: u8 = 0x3E;

/// General purpose control (speaker amp ratio gain lives in bits 14:12).
pub const GEN_PUR_CTRL_REG: u8 = 0x40;
pub const GLOBAL_CLK_CTRL: u8 = 0x42;
pub const PLL_CTRL: u8 = 0x44;
pub const INT_ST_IRQ_CTRL_1: u8 = 0x48;
pub const INT_ST_IRQ_CTRL_2: u8 = 0x4A;
pub const GPIO_CTRL: u8 = 0x4C;
pub const MISC_CTRL: u8 = 0x52;
pub const DEPOP_FUN_CTRL_1: u8 = 0x54;
pub const DEPOP_FUN_CTRL_2: u8 = 0x56;
pub const JACK_DET_CTRL: u8 = 0x5A;
pub const SOFT_VOL_CTRL: u8 = 0x5C;

/// ALC control 1 (attack / recovery time).
pub const ALC_CTRL_1: u8 = 0x64;
/// ALC control 2 (gain offset).
pub const ALC_CTRL_2: u8 = 0x65;

/// ALC control 3.
/// - Bits 15:12: ALC enable and path select (0x2 = disabled, DAC path)
/// - Bits  4:0 : limit level
pub const ALC_CTRL_3: u8 = 0x66;
pub const PSEUDO_SPATL_CTRL: u8 = 0x68;

/// Indexed register address select.
pub const INDEX_ADD: u8 = 0x6A;
/// Indexed register data window.
pub const INDEX_DATA: u8 = 0x6C;

/// Hardware EQ control.
/// - Bit 15  : EQ block enable
/// - Bit 14  : EQ coefficient update
/// - Bits 5:0: LP, BP1, BP2, BP3, HP1, HP2 band enables
pub const EQ_CTRL: u8 = 0x6E;
pub const VENDOR_ID: u8 = 0x7A;
pub const VENDOR_ID1: u8 = 0x7C;
pub const VENDOR_ID2: u8 = 0x7E;

// ── PWR_MANAG_ADD1 bits ────────────────────────────────────────────────────

pub const PWR_MAIN_I2S_EN: u16 = 1 << 15;
pub const PWR_CLASS_D: u16 = 1 << 12;
pub const PWR_ADC_L_CLK: u16 = 1 << 11;
pub const PWR_ADC_R_CLK: u16 = 1 << 10;
pub const PWR_DAC_L_CLK: u16 = 1 << 9;
pub const PWR_DAC_R_CLK: u16 = 1 << 8;
pub const PWR_DAC_REF: u16 = 1 << 7;
pub const PWR_DAC_L_TO_MIXER: u16 = 1 << 6;
pub const PWR_DAC_R_TO_MIXER: u16 = 1 << 5;

/// Both DAC channel clocks; the DAC is "fully powered" when both are set.
pub const PWR_DAC_CLK_MASK: u16 = PWR_DAC_L_CLK | PWR_DAC_R_CLK;

// ── PWR_MANAG_ADD2 / ADD4 bits ─────────────────────────────────────────────

pub const PWR_PLL1: u16 = 1 << 15;
pub const PWR_SPK_L_VOL: u16 = 1 << 15;
pub const PWR_SPK_R_VOL: u16 = 1 << 14;

// ── SPK_OUT_VOL fields ─────────────────────────────────────────────────────

pub const L_MUTE: u16 = 1 << 15;
pub const L_VOL: u16 = 0x3f << 8;
pub const R_MUTE: u16 = 1 << 7;
pub const R_VOL: u16 = 0x3f;

// ── SPK_MONO_HP_OUT_CTRL fields ────────────────────────────────────────────

pub const HP_L_MUX_SEL_DAC_L: u16 = 1 << 11;
pub const HP_R_MUX_SEL_DAC_R: u16 = 1 << 10;

// ── ADC_CTRL_1 fields ──────────────────────────────────────────────────────

/// Left and right ADC soft-mute bits.
pub const ADC_SOFT_MUTE: u16 = 0x8080;

// ── ALC_CTRL_3 fields ──────────────────────────────────────────────────────

pub const ALC_ENABLE_MASK: u16 = 0xf000;
pub const ALC_DISABLED: u16 = 0x2000;

// ── EQ_CTRL fields ─────────────────────────────────────────────────────────

pub const EQ_BLOCK_EN: u16 = 1 << 15;
pub const EQ_UPDATE: u16 = 1 << 14;
/// Both high control bits written together with a preset's control word.
pub const EQ_HIGH_BITS: u16 = EQ_BLOCK_EN | EQ_UPDATE;
/// LP/BP/HP band enables.
pub const EQ_BAND_MASK: u16 = 0x003f;

// ── Indexed register space ─────────────────────────────────────────────────

pub const EQ_BW_LOP: u8 = 0x00;
pub const EQ_GAIN_LOP: u8 = 0x01;
pub const EQ_FC_BP1: u8 = 0x02;
pub const EQ_BW_BP1: u8 = 0x03;
pub const EQ_GAIN_BP1: u8 = 0x04;
pub const EQ_FC_BP2: u8 = 0x05;
pub const EQ_BW_BP2: u8 = 0x06;
pub const EQ_GAIN_BP2: u8 = 0x07;
pub const EQ_FC_BP3: u8 = 0x08;
pub const EQ_BW_BP3: u8 = 0x09;
pub const EQ_GAIN_BP3: u8 = 0x0A;
pub const EQ_BW_HIP: u8 = 0x0B;
pub const EQ_GAIN_HIP: u8 = 0x0C;
pub const EQ_HPF_A1: u8 = 0x0D;
pub const EQ_HPF_A2: u8 = 0x0E;
pub const EQ_HPF_GAIN: u8 = 0x0F;

/// EQ input volume; bit 15 is the pre-volume enable.
pub const EQ_PRE_VOL_CTRL: u8 = 0x11;
/// EQ output volume.
pub const EQ_POST_VOL_CTRL: u8 = 0x12;

pub const EQ_PRE_VOL_EN: u16 = 1 << 15;

/// Diagnostic/calibration index written on some boards after speaker events.
pub const DIAG_INDEX: u8 = 0x48;

// ── Initial register table ─────────────────────────────────────────────────

/// Registers written once at attach, in order.
///
/// Speaker and headphone volume from their mixers at 0 dB, record mixer
/// from Mic1/Mic2 with 44 dB boost, DAC into the output and speaker mixers,
/// speaker amp ratio gain 1.99x, headphone zero-cross, Mic1 differential,
/// ALC attack 170 ms with a -6 dBFS limit on the DAC path.
pub const INIT_REGISTERS: [(u8, u16); 17] = [
    (ADC_CTRL_1, 0x8080),
    (SPK_OUT_VOL, 0xc7c7),
    (HP_OUT_VOL, 0xc5c5),
    (MONO_AXO_1_2_VOL, 0xe040),
    (ADC_REC_MIXER, 0xb0f0),
    (MIC_CTRL_2, 0x6600),
    (OUTMIXER_L_CTRL, 0xdfc0),
    (OUTMIXER_R_CTRL, 0xdfc0),
    (SPK_MIXER_CTRL, 0xd8d8),
    (SPK_MONO_OUT_CTRL, 0x6c00),
    (GEN_PUR_CTRL_REG, 0x7e00),
    (SPK_MONO_HP_OUT_CTRL, 0x0000),
    (MIC_CTRL_1, 0x8000),
    (INT_ST_IRQ_CTRL_2, 0x0f18),
    (ALC_CTRL_1, 0x0b00),
    (ALC_CTRL_3, 0x2410),
    (AXO2MIXER_CTRL, 0x8860),
];
