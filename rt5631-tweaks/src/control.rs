use crate::codec::CaptureSource;

/// User-facing mixer controls of a codec.
///
/// Setters take `&self`: the controls can be reached from several user
/// requests at once, so implementations serialize internally.
pub trait MixerControl {
    /// Error type for control operations.
    type Error;

    /// Index of the active EQ preset.
    fn eq_mode(&self) -> usize;

    /// Select an EQ preset by index.
    ///
    /// Returns `Ok(false)` without touching the hardware when `index` is
    /// already active, and `Ok(true)` once a new preset has been loaded.
    fn set_eq_mode(&self, index: usize) -> Result<bool, Self::Error>;

    /// Microphone currently feeding the capture path.
    fn capture_source(&self) -> CaptureSource;

    /// Switch the capture microphone and its gain.
    fn set_capture_source(&self, source: CaptureSource) -> Result<(), Self::Error>;
}
