//! Board identification.
//!
//! Which Transformer model the codec sits on decides the ALC, speaker gain
//! and EQ calibration. The lookup itself belongs to the platform; the driver
//! only sees it through [`BoardIdentity`].

use embedded_hal::digital::OutputPin;

/// Hardware variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    Tf201,
    Tf300Tg,
    Tf300Tl,
    Tf700T,
    /// Any board without its own calibration.
    Other,
}

/// TF700T board revision with the quieter speaker trim.
pub const TF700T_PCB_ER1: u8 = 0x3;

/// Label of the codec 3.3 V supply switch on the TF700T.
pub const POWER_SWITCH_LABEL: &str = "rt5631_3v3_power_control";

/// Source of the board variant and PCB revision.
pub trait BoardIdentity {
    fn variant(&self) -> Variant;
    fn pcb_revision(&self) -> u8;
}

/// Fixed board identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Board {
    pub variant: Variant,
    pub pcb_revision: u8,
}

impl Board {
    pub const fn new(variant: Variant, pcb_revision: u8) -> Self {
        Self {
            variant,
            pcb_revision,
        }
    }

    /// Snapshot any identity source.
    pub fn probe(identity: &impl BoardIdentity) -> Self {
        Self::new(identity.variant(), identity.pcb_revision())
    }
}

impl BoardIdentity for Board {
    fn variant(&self) -> Variant {
        self.variant
    }

    fn pcb_revision(&self) -> u8 {
        self.pcb_revision
    }
}

/// Switch on the codec's 3.3 V supply where the board gates it.
///
/// Only the TF700T routes the supply through a GPIO; on other boards this
/// touches nothing.
pub fn power_switch_init<P: OutputPin>(board: &impl BoardIdentity, pin: &mut P) -> Result<(), P::Error> {
    if board.variant() != Variant::Tf700T {
        return Ok(());
    }
    pin.set_high()?;
    log::info!("{} driven high", POWER_SWITCH_LABEL);
    Ok(())
}
