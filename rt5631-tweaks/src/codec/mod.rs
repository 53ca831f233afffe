//! RT5631 codec driver module.
//!
//! Covers the parts of the RT5631 driver that ASUS tuned per board: the
//! indexed register protocol, the hardware EQ presets, the shared DAC power
//! domain and the speaker/ADC/DAC power handlers with their ALC programs.
//! Clocking, DAI formats and jack detection belong to the core codec driver.

pub mod board;
mod bus;
mod config;
pub mod eq;
#[cfg(test)]
#[path = "../../tests/common/mod.rs"]
mod mock;
mod path;
pub mod power;
pub mod profile;
mod regmap;
pub mod registers;
mod rt5631;

pub use board::{power_switch_init, Board, BoardIdentity, Variant, TF700T_PCB_ER1};
pub use bus::{I2cBus, RegisterBus};
pub use config::Config;
pub use eq::{apply_eq, EqMode, EqPreset, PresetTable, PRESETS};
pub use path::{CaptureSource, Path, PowerEvent};
pub use power::{PowerClaim, SharedPower};
pub use profile::{MaskedWrite, RegWrite, SpeakerVolume, VariantProfile};
pub use regmap::Registers;
pub use rt5631::Rt5631;
