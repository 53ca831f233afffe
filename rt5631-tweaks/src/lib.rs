//! # rt5631-tweaks
//!
//! A `no_std` driver layer for the board-specific behaviour of the Realtek
//! RT5631 audio codec on ASUS Transformer tablets (TF201, TF300TG, TF300TL,
//! TF700T). It sits next to a core codec driver and owns the parts ASUS
//! tuned per board.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Bus | [`codec::RegisterBus`] / [`codec::I2cBus`] | Primary 16-bit register access |
//! | Register map | [`codec::Registers`] | Bus lock, `update_bits`, indexed register protocol |
//! | Calibration | [`codec::eq`] / [`codec::profile`] | EQ presets and per-board ALC, gain and volume tables |
//! | Power | [`codec::power`] | Reference-counted shared DAC/interface power |
//! | Driver | [`codec::Rt5631`] | Speaker, ADC and DAC power event handlers |
//! | Trait | [`control`] | [`MixerControl`](control::MixerControl) user controls |
//!
//! ## Quick start
//!
//! ```ignore
//! use rt5631_tweaks::codec::*;
//! use rt5631_tweaks::control::MixerControl;
//!
//! let board = Board::new(Variant::Tf700T, pcb_revision);
//! power_switch_init(&board, &mut codec_3v3_pin)?;
//!
//! let codec = Rt5631::new(I2cBus::new(i2c), delay, &board);
//! codec.init()?;
//!
//! // From the widget power framework:
//! codec.power_event_raw(Path::SpeakerLeft, event)?;
//!
//! // From user space:
//! codec.set_eq_mode(EqMode::Rock.index())?;
//! codec.set_capture_source(CaptureSource::AnalogMic)?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | `defmt::Format` on the public enums |

#![cfg_attr(not(test), no_std)]

// Crate path used by the register-file mock shared with tests/.
#[cfg(test)]
extern crate self as rt5631_tweaks;

pub mod codec;
pub mod constants;
pub mod control;
pub mod error;

pub use error::{Error, Result};
