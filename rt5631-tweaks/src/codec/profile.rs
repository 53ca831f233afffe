//! Per-board calibration tables.
//!
//! Every board-specific register payload lives here as data. The power
//! handlers pick sequences out of a [`VariantProfile`] and never branch on
//! the board themselves.

use super::board::{Variant, TF700T_PCB_ER1};
use super::eq::EqMode;
use super::path::CaptureSource;
use super::registers as reg;

/// Unconditional register write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegWrite {
    pub reg: u8,
    pub value: u16,
}

/// Masked register update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedWrite {
    pub reg: u8,
    pub mask: u16,
    pub value: u16,
}

/// Speaker channel volumes, already positioned in the `L_VOL` / `R_VOL` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeakerVolume {
    pub left: u16,
    pub right: u16,
}

/// Calibration for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantProfile {
    /// ALC setup while the speaker is playing.
    pub alc_playback: &'static [RegWrite],
    /// ALC setup for digital-microphone capture.
    pub alc_capture_dmic: &'static [RegWrite],
    /// ALC setup for analog (headset) microphone capture.
    pub alc_capture_amic: &'static [RegWrite],
    /// Preset loaded when the speaker powers up with the DAC running.
    pub speaker_eq: EqMode,
    pub speaker_volume: Option<SpeakerVolume>,
    /// Volume that replaces `speaker_volume` on one PCB revision.
    pub speaker_volume_override: Option<(u8, SpeakerVolume)>,
    pub amic_gain: MaskedWrite,
    pub dmic_gain: MaskedWrite,
    /// Re-apply `amic_gain` when the ADC powers up on the analog mic.
    pub amic_gain_at_power_up: bool,
    /// Indexed register written and read back after speaker events.
    pub diagnostic: Option<RegWrite>,
}

const fn w(reg: u8, value: u16) -> RegWrite {
    RegWrite { reg, value }
}

const fn adc_gain(mask: u16, value: u16) -> MaskedWrite {
    MaskedWrite {
        reg: reg::ADC_CTRL_1,
        mask,
        value,
    }
}

const ALC_PLAYBACK_TF201: [RegWrite; 4] = [
    w(reg::GEN_PUR_CTRL_REG, 0x6e00),
    w(reg::ALC_CTRL_1, 0x0b00),
    w(reg::ALC_CTRL_2, 0x0000),
    w(reg::ALC_CTRL_3, 0x6410),
];

const ALC_PLAYBACK_TF300: [RegWrite; 4] = [
    w(reg::GEN_PUR_CTRL_REG, 0x6e00),
    w(reg::ALC_CTRL_1, 0x0b00),
    w(reg::ALC_CTRL_2, 0x0000),
    w(reg::ALC_CTRL_3, 0x6510),
];

const ALC_PLAYBACK_TF700T: [RegWrite; 4] = [
    w(reg::GEN_PUR_CTRL_REG, 0x7e00),
    w(reg::ALC_CTRL_1, 0x0307),
    w(reg::ALC_CTRL_2, 0x0000),
    w(reg::ALC_CTRL_3, 0x6510),
];

const ALC_DMIC: [RegWrite; 3] = [
    w(reg::ALC_CTRL_1, 0x0207),
    w(reg::ALC_CTRL_2, 0x0006),
    w(reg::ALC_CTRL_3, 0xe09a),
];

const ALC_AMIC: [RegWrite; 3] = [
    w(reg::ALC_CTRL_1, 0x0207),
    w(reg::ALC_CTRL_2, 0x0004),
    w(reg::ALC_CTRL_3, 0xe084),
];

const ALC_DMIC_TF700T: [RegWrite; 3] = [
    w(reg::ALC_CTRL_1, 0x0207),
    w(reg::ALC_CTRL_2, 0x000e),
    w(reg::ALC_CTRL_3, 0xe099),
];

const ALC_AMIC_TF700T: [RegWrite; 3] = [
    w(reg::ALC_CTRL_1, 0x0207),
    w(reg::ALC_CTRL_2, 0x000a),
    w(reg::ALC_CTRL_3, 0xe090),
];

const DIAGNOSTIC: RegWrite = w(reg::DIAG_INDEX, 0xF73C);

const SPEAKER_0700: SpeakerVolume = SpeakerVolume {
    left: 0x0700,
    right: 0x0007,
};

/// Headset boost 0 dB, DMIC boost 22.5 dB.
const AMIC_GAIN: MaskedWrite = adc_gain(0x001f, 0x0000);
const DMIC_GAIN: MaskedWrite = adc_gain(0x001f, 0x000f);

pub static TF201: VariantProfile = VariantProfile {
    alc_playback: &ALC_PLAYBACK_TF201,
    alc_capture_dmic: &ALC_DMIC,
    alc_capture_amic: &ALC_AMIC,
    speaker_eq: EqMode::Tf201,
    speaker_volume: Some(SPEAKER_0700),
    speaker_volume_override: None,
    amic_gain: AMIC_GAIN,
    dmic_gain: DMIC_GAIN,
    amic_gain_at_power_up: false,
    diagnostic: None,
};

pub static TF300TG: VariantProfile = VariantProfile {
    alc_playback: &ALC_PLAYBACK_TF300,
    alc_capture_dmic: &ALC_DMIC,
    alc_capture_amic: &ALC_AMIC,
    speaker_eq: EqMode::Tf300Tg,
    speaker_volume: Some(SPEAKER_0700),
    speaker_volume_override: None,
    amic_gain: AMIC_GAIN,
    dmic_gain: DMIC_GAIN,
    amic_gain_at_power_up: false,
    diagnostic: Some(DIAGNOSTIC),
};

pub static TF300TL: VariantProfile = VariantProfile {
    alc_playback: &ALC_PLAYBACK_TF300,
    alc_capture_dmic: &ALC_DMIC,
    alc_capture_amic: &ALC_AMIC,
    speaker_eq: EqMode::Tf300Tl,
    speaker_volume: None,
    speaker_volume_override: None,
    amic_gain: AMIC_GAIN,
    dmic_gain: DMIC_GAIN,
    amic_gain_at_power_up: false,
    diagnostic: Some(DIAGNOSTIC),
};

pub static TF700T: VariantProfile = VariantProfile {
    alc_playback: &ALC_PLAYBACK_TF700T,
    alc_capture_dmic: &ALC_DMIC_TF700T,
    alc_capture_amic: &ALC_AMIC_TF700T,
    speaker_eq: EqMode::Tf700T,
    speaker_volume: Some(SpeakerVolume {
        left: 0x0600,
        right: 0x0006,
    }),
    // ER1 boards: -7.5 dB
    speaker_volume_override: Some((
        TF700T_PCB_ER1,
        SpeakerVolume {
            left: 0x0d00,
            right: 0x000d,
        },
    )),
    amic_gain: adc_gain(0x001f, 0x0005),
    dmic_gain: adc_gain(0x00ff, 0x0013),
    amic_gain_at_power_up: true,
    diagnostic: Some(DIAGNOSTIC),
};

pub static GENERIC: VariantProfile = VariantProfile {
    alc_playback: &[],
    alc_capture_dmic: &ALC_DMIC,
    alc_capture_amic: &ALC_AMIC,
    speaker_eq: EqMode::Tf201,
    speaker_volume: None,
    speaker_volume_override: None,
    amic_gain: AMIC_GAIN,
    dmic_gain: DMIC_GAIN,
    amic_gain_at_power_up: false,
    diagnostic: None,
};

impl VariantProfile {
    /// Built-in calibration for a board.
    pub fn for_variant(variant: Variant) -> &'static VariantProfile {
        match variant {
            Variant::Tf201 => &TF201,
            Variant::Tf300Tg => &TF300TG,
            Variant::Tf300Tl => &TF300TL,
            Variant::Tf700T => &TF700T,
            Variant::Other => &GENERIC,
        }
    }

    pub fn alc_capture(&self, source: CaptureSource) -> &'static [RegWrite] {
        match source {
            CaptureSource::DigitalMic => self.alc_capture_dmic,
            CaptureSource::AnalogMic => self.alc_capture_amic,
        }
    }

    pub fn capture_gain(&self, source: CaptureSource) -> MaskedWrite {
        match source {
            CaptureSource::DigitalMic => self.dmic_gain,
            CaptureSource::AnalogMic => self.amic_gain,
        }
    }

    /// Speaker volume for a given PCB revision.
    pub fn speaker_volume_for(&self, pcb_revision: u8) -> Option<SpeakerVolume> {
        match self.speaker_volume_override {
            Some((revision, volume)) if revision == pcb_revision => Some(volume),
            _ => self.speaker_volume,
        }
    }
}
