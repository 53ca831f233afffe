//! RT5631 path power handlers.
//!
//! The widget power framework drives four handlers (left speaker, right
//! speaker, ADC, DAC) through pre/post power-up/down events. They share one
//! `CodecState`: the ALC program depends on whether the speaker, the
//! capture path or both are active, and the EQ load depends on whether the
//! capture path holds the left ADC clock.
//!
//! Every entry point takes `&self`. The state lock is held for the whole
//! body of a handler or control, and the register map takes the bus lock
//! underneath it, never the other way round.
//!
//! # Example
//!
//! ```ignore
//! let codec = Rt5631::new(I2cBus::new(i2c), delay, &Board::new(Variant::Tf700T, pcb));
//! codec.init()?;
//! codec.power_event(Path::Adc, PowerEvent::PrePowerUp)?;
//! codec.set_eq_mode(EqMode::Rock.index())?;
//! ```

use embedded_hal::delay::DelayNs;
use spin::Mutex;

use super::board::{Board, BoardIdentity};
use super::config::Config;
use super::eq::{apply_eq, EqMode, PresetTable};
use super::path::{CaptureSource, Path, PowerEvent};
use super::power::{PowerClaim, SharedPower};
use super::profile::{MaskedWrite, RegWrite, SpeakerVolume, VariantProfile};
use super::registers as reg;
use super::{RegisterBus, Registers};
use crate::control::MixerControl;
use crate::error::{Error, Result};

// ── Shared state ───────────────────────────────────────────────────────────

/// Runtime flags shared by all path handlers.
///
/// | Field | Written by | Read by |
/// |-------|------------|---------|
/// | `speaker_on` | speaker | speaker |
/// | `speaker_engaged` | speaker | ADC, DAC, capture control |
/// | `adc_capturing` | ADC | speaker, DAC |
/// | `adc_clock_in_use` | ADC | speaker, EQ control |
/// | `capture` | capture control | speaker, ADC |
/// | `eq_mode` | EQ control | EQ control |
/// | `power`, claims | ADC, DAC | ADC, DAC |
#[derive(Debug, Default)]
struct CodecState {
    /// Per-channel enable, indexed by `Channel`.
    speaker_on: [bool; 2],
    speaker_engaged: bool,
    adc_capturing: bool,
    adc_clock_in_use: bool,
    capture: CaptureSource,
    eq_mode: EqMode,
    power: SharedPower,
    adc_claim: PowerClaim,
    dac_claim: PowerClaim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Left = 0,
    Right = 1,
}

impl Channel {
    fn volume_field(self) -> u16 {
        match self {
            Self::Left => reg::L_VOL,
            Self::Right => reg::R_VOL,
        }
    }

    fn mute(self) -> u16 {
        match self {
            Self::Left => reg::L_MUTE,
            Self::Right => reg::R_MUTE,
        }
    }

    fn power(self) -> u16 {
        match self {
            Self::Left => reg::PWR_SPK_L_VOL,
            Self::Right => reg::PWR_SPK_R_VOL,
        }
    }

    fn volume(self, volume: SpeakerVolume) -> u16 {
        match self {
            Self::Left => volume.left,
            Self::Right => volume.right,
        }
    }
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// RT5631 codec instance.
///
/// Generic over the register bus and a delay provider. The delay is only
/// used for the ADC settle time.
pub struct Rt5631<B, D> {
    regs: Registers<B>,
    delay: Mutex<D>,
    state: Mutex<CodecState>,
    board: Board,
    profile: &'static VariantProfile,
    presets: &'static PresetTable,
    adc_settle_us: u32,
}

impl<B, D> Rt5631<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    /// Create a driver with the default configuration for `board`.
    pub fn new(bus: B, delay: D, board: &impl BoardIdentity) -> Self {
        Self::with_config(bus, delay, board, Config::default())
    }

    pub fn with_config(bus: B, delay: D, board: &impl BoardIdentity, config: Config) -> Self {
        let board = Board::probe(board);
        Self {
            regs: Registers::new(bus),
            delay: Mutex::new(delay),
            state: Mutex::new(CodecState {
                power: SharedPower::new(config.pll_in_use),
                ..CodecState::default()
            }),
            board,
            profile: config
                .profile
                .unwrap_or_else(|| VariantProfile::for_variant(board.variant)),
            presets: config.presets,
            adc_settle_us: config.adc_settle_us,
        }
    }

    /// Write the initial register table.
    pub fn init(&self) -> Result<(), B::Error> {
        for (register, value) in reg::INIT_REGISTERS {
            self.regs.write(register, value)?;
        }
        log::info!("RT5631 initial registers written for {:?}", self.board.variant);
        Ok(())
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn profile(&self) -> &'static VariantProfile {
        self.profile
    }

    /// The locked register map, for code sharing the codec's bus.
    pub fn registers(&self) -> &Registers<B> {
        &self.regs
    }

    /// Whether PLL1 follows the shared power domain.
    pub fn set_pll_in_use(&self, in_use: bool) {
        self.state.lock().power.set_pll_in_use(in_use);
    }

    /// Number of paths holding the shared power domain.
    pub fn shared_power_holders(&self) -> u32 {
        self.state.lock().power.count()
    }

    /// Consume the driver and return the bus and delay.
    pub fn release(self) -> (B, D) {
        (self.regs.release(), self.delay.into_inner())
    }

    // ── Event dispatch ─────────────────────────────────────────────────

    /// Run the handler for `path`.
    ///
    /// The first failing bus transaction aborts the handler and is
    /// returned; flags already updated by the handler stay updated.
    pub fn power_event(&self, path: Path, event: PowerEvent) -> Result<(), B::Error> {
        let mut st = self.state.lock();
        match path {
            Path::SpeakerLeft => self.speaker_event(&mut st, Channel::Left, event),
            Path::SpeakerRight => self.speaker_event(&mut st, Channel::Right, event),
            Path::Adc => self.adc_event(&mut st, event),
            Path::Dac => self.dac_event(&mut st, event),
        }
    }

    /// Same as [`power_event`](Self::power_event) for a raw DAPM event
    /// value. Unknown values are ignored.
    pub fn power_event_raw(&self, path: Path, raw: u32) -> Result<(), B::Error> {
        match PowerEvent::from_raw(raw) {
            Some(event) => self.power_event(path, event),
            None => {
                log::debug!("{:?}: ignoring event {:#x}", path, raw);
                Ok(())
            }
        }
    }

    // ── Speaker ────────────────────────────────────────────────────────

    fn speaker_event(&self, st: &mut CodecState, channel: Channel, event: PowerEvent) -> Result<(), B::Error> {
        match event {
            PowerEvent::PostPowerUp => self.speaker_up(st, channel)?,
            PowerEvent::PrePowerDown => self.speaker_down(st, channel)?,
            PowerEvent::PostPowerDown => {}
            PowerEvent::PrePowerUp => return Ok(()),
        }
        self.diagnostic()
    }

    fn speaker_up(&self, st: &mut CodecState, channel: Channel) -> Result<(), B::Error> {
        let dac_powered = self.dac_fully_powered()?;

        st.speaker_engaged = true;
        log::debug!("speaker up: playback ALC");
        self.write_sequence(self.profile.alc_playback)?;

        if dac_powered {
            self.regs
                .update_bits(reg::PWR_MANAG_ADD1, reg::PWR_MAIN_I2S_EN, reg::PWR_MAIN_I2S_EN)?;
            apply_eq(&self.regs, self.presets, self.profile.speaker_eq, st.adc_clock_in_use)?;
        }

        if st.speaker_on[channel as usize] {
            return Ok(());
        }
        if let Some(volume) = self.profile.speaker_volume_for(self.board.pcb_revision) {
            self.regs
                .update_bits(reg::SPK_OUT_VOL, channel.volume_field(), channel.volume(volume))?;
        }
        self.regs
            .update_bits(reg::PWR_MANAG_ADD4, channel.power(), channel.power())?;
        self.regs
            .update_bits(reg::PWR_MANAG_ADD1, reg::PWR_CLASS_D, reg::PWR_CLASS_D)?;
        self.regs.update_bits(reg::SPK_OUT_VOL, channel.mute(), 0)?;
        st.speaker_on[channel as usize] = true;
        log::info!("speaker {:?} on", channel);
        Ok(())
    }

    fn speaker_down(&self, st: &mut CodecState, channel: Channel) -> Result<(), B::Error> {
        let dac_powered = self.dac_fully_powered()?;

        st.speaker_engaged = false;
        if st.adc_capturing {
            log::debug!("speaker down: capture ALC");
            self.write_sequence(self.profile.alc_capture(st.capture))?;
        } else {
            self.disable_alc()?;
        }

        // EQ off before the amplifier rail collapses.
        if dac_powered {
            apply_eq(&self.regs, self.presets, EqMode::Normal, st.adc_clock_in_use)?;
        }

        if st.speaker_on[channel as usize] {
            self.regs
                .update_bits(reg::SPK_OUT_VOL, channel.mute(), channel.mute())?;
            self.regs.update_bits(reg::PWR_MANAG_ADD4, channel.power(), 0)?;
            st.speaker_on[channel as usize] = false;
            log::info!("speaker {:?} off", channel);
        }
        if st.speaker_on == [false, false] {
            self.regs.update_bits(reg::PWR_MANAG_ADD1, reg::PWR_CLASS_D, 0)?;
        }
        Ok(())
    }

    fn dac_fully_powered(&self) -> Result<bool, B::Error> {
        let pwr = self.regs.read(reg::PWR_MANAG_ADD1)?;
        Ok(pwr & reg::PWR_DAC_CLK_MASK == reg::PWR_DAC_CLK_MASK)
    }

    /// Board diagnostic write and read-back after speaker events.
    fn diagnostic(&self) -> Result<(), B::Error> {
        let Some(RegWrite { reg: index, value }) = self.profile.diagnostic else {
            return Ok(());
        };
        self.regs.write_indexed(index, value)?;
        let readback = self.regs.read_indexed(index)?;
        log::debug!("codec index {:#04x} = {:#06x}", index, readback);
        Ok(())
    }

    // ── ADC ────────────────────────────────────────────────────────────

    fn adc_event(&self, st: &mut CodecState, event: PowerEvent) -> Result<(), B::Error> {
        match event {
            PowerEvent::PrePowerUp => st.adc_claim.engage(&mut st.power, &self.regs),
            PowerEvent::PostPowerUp => {
                st.adc_clock_in_use = true;
                st.adc_capturing = true;
                if !st.speaker_engaged {
                    log::debug!("ADC up: capture ALC for {:?}", st.capture);
                    self.write_sequence(self.profile.alc_capture(st.capture))?;
                    if st.capture == CaptureSource::AnalogMic && self.profile.amic_gain_at_power_up {
                        self.update(self.profile.amic_gain)?;
                    }
                }
                self.delay.lock().delay_us(self.adc_settle_us);
                self.regs.update_bits(reg::ADC_CTRL_1, reg::ADC_SOFT_MUTE, 0)?;
                Ok(())
            }
            PowerEvent::PrePowerDown => {
                st.adc_capturing = false;
                if !st.speaker_engaged {
                    self.disable_alc()?;
                }
                self.regs
                    .update_bits(reg::ADC_CTRL_1, reg::ADC_SOFT_MUTE, reg::ADC_SOFT_MUTE)?;
                Ok(())
            }
            PowerEvent::PostPowerDown => {
                st.adc_clock_in_use = false;
                st.adc_claim.disengage(&mut st.power, &self.regs)
            }
        }
    }

    // ── DAC ────────────────────────────────────────────────────────────

    fn dac_event(&self, st: &mut CodecState, event: PowerEvent) -> Result<(), B::Error> {
        match event {
            PowerEvent::PrePowerUp => st.dac_claim.engage(&mut st.power, &self.regs),
            PowerEvent::PrePowerDown if !st.speaker_engaged && !st.adc_capturing => self.disable_alc(),
            PowerEvent::PostPowerDown => st.dac_claim.disengage(&mut st.power, &self.regs),
            _ => Ok(()),
        }
    }

    // ── Private helpers ────────────────────────────────────────────────

    fn write_sequence(&self, sequence: &[RegWrite]) -> Result<(), B::Error> {
        for w in sequence {
            self.regs.write(w.reg, w.value)?;
        }
        Ok(())
    }

    fn update(&self, w: MaskedWrite) -> Result<bool, B::Error> {
        self.regs.update_bits(w.reg, w.mask, w.value)
    }

    fn disable_alc(&self) -> Result<(), B::Error> {
        self.regs
            .update_bits(reg::ALC_CTRL_3, reg::ALC_ENABLE_MASK, reg::ALC_DISABLED)?;
        log::debug!("ALC disabled");
        Ok(())
    }
}

// ── MixerControl trait implementation ──────────────────────────────────────

impl<B, D> MixerControl for Rt5631<B, D>
where
    B: RegisterBus,
    D: DelayNs,
{
    type Error = Error<B::Error>;

    fn eq_mode(&self) -> usize {
        self.state.lock().eq_mode.index()
    }

    fn set_eq_mode(&self, index: usize) -> Result<bool, B::Error> {
        let mode = EqMode::from_index(index).ok_or(Error::InvalidMode(index))?;
        let mut st = self.state.lock();
        if st.eq_mode == mode {
            return Ok(false);
        }
        apply_eq(&self.regs, self.presets, mode, st.adc_clock_in_use)?;
        st.eq_mode = mode;
        log::info!("EQ mode set to {}", mode.name());
        Ok(true)
    }

    fn capture_source(&self) -> CaptureSource {
        self.state.lock().capture
    }

    fn set_capture_source(&self, source: CaptureSource) -> Result<(), B::Error> {
        let mut st = self.state.lock();
        st.capture = source;
        if !st.speaker_engaged {
            log::debug!("capture ALC for {:?}", source);
            self.write_sequence(self.profile.alc_capture(source))?;
        }
        self.update(self.profile.capture_gain(source))?;
        log::info!("capture source {:?}", source);
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
