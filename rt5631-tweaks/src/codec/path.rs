//! Power transition events and the paths they target.

use crate::constants::{DAPM_POST_PMD, DAPM_POST_PMU, DAPM_PRE_PMD, DAPM_PRE_PMU};

/// Widget power transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerEvent {
    PrePowerUp,
    PostPowerUp,
    PrePowerDown,
    PostPowerDown,
}

impl PowerEvent {
    /// Decode a raw DAPM event bit. Anything else is `None`.
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            DAPM_PRE_PMU => Some(Self::PrePowerUp),
            DAPM_POST_PMU => Some(Self::PostPowerUp),
            DAPM_PRE_PMD => Some(Self::PrePowerDown),
            DAPM_POST_PMD => Some(Self::PostPowerDown),
            _ => None,
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            Self::PrePowerUp => DAPM_PRE_PMU,
            Self::PostPowerUp => DAPM_POST_PMU,
            Self::PrePowerDown => DAPM_PRE_PMD,
            Self::PostPowerDown => DAPM_POST_PMD,
        }
    }
}

/// Power-managed path with its own event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Path {
    SpeakerLeft,
    SpeakerRight,
    Adc,
    Dac,
}

impl Path {
    /// Map a speaker amplifier widget name to its channel.
    pub fn from_widget_name(name: &str) -> Option<Self> {
        match name {
            "SPKL Amp" => Some(Self::SpeakerLeft),
            "SPKR Amp" => Some(Self::SpeakerRight),
            _ => None,
        }
    }

    pub fn is_speaker(self) -> bool {
        matches!(self, Self::SpeakerLeft | Self::SpeakerRight)
    }
}

/// Microphone feeding the capture path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureSource {
    #[default]
    DigitalMic,
    /// Headset microphone.
    AnalogMic,
}

impl CaptureSource {
    /// Decode the user control value: non-zero selects the headset
    /// microphone, zero the digital microphone.
    pub fn from_control(value: bool) -> Self {
        if value {
            Self::AnalogMic
        } else {
            Self::DigitalMic
        }
    }

    /// Value reported back through the user control.
    pub fn control_value(self) -> bool {
        self == Self::AnalogMic
    }

    /// Source for a board-level "digital mic fitted" flag.
    pub fn from_dmic(dmic: bool) -> Self {
        Self::from_control(!dmic)
    }

    pub fn is_dmic(self) -> bool {
        self == Self::DigitalMic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_events_decode() {
        assert_eq!(PowerEvent::from_raw(0x1), Some(PowerEvent::PrePowerUp));
        assert_eq!(PowerEvent::from_raw(0x2), Some(PowerEvent::PostPowerUp));
        assert_eq!(PowerEvent::from_raw(0x4), Some(PowerEvent::PrePowerDown));
        assert_eq!(PowerEvent::from_raw(0x8), Some(PowerEvent::PostPowerDown));
        assert_eq!(PowerEvent::PostPowerDown.raw(), 0x8);
    }

    #[test]
    fn unknown_raw_events_are_rejected() {
        for raw in [0, 0x3, 0x10, 0x80, u32::MAX] {
            assert_eq!(PowerEvent::from_raw(raw), None);
        }
    }

    #[test]
    fn widget_names() {
        assert_eq!(Path::from_widget_name("SPKL Amp"), Some(Path::SpeakerLeft));
        assert_eq!(Path::from_widget_name("SPKR Amp"), Some(Path::SpeakerRight));
        assert_eq!(Path::from_widget_name("HPL Amp"), None);
        assert!(Path::SpeakerRight.is_speaker());
        assert!(!Path::Adc.is_speaker());
    }

    #[test]
    fn capture_source_defaults_to_dmic() {
        assert_eq!(CaptureSource::default(), CaptureSource::DigitalMic);
        assert!(CaptureSource::default().is_dmic());
        assert_eq!(CaptureSource::from_dmic(false), CaptureSource::AnalogMic);
        assert!(!CaptureSource::from_dmic(false).is_dmic());
    }

    #[test]
    fn control_value_one_selects_headset_mic() {
        assert_eq!(CaptureSource::from_control(true), CaptureSource::AnalogMic);
        assert_eq!(CaptureSource::from_control(false), CaptureSource::DigitalMic);
        for source in [CaptureSource::DigitalMic, CaptureSource::AnalogMic] {
            assert_eq!(CaptureSource::from_control(source.control_value()), source);
        }
    }
}
