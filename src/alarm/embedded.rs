//! Bundled alarm sound.
//!
//! The default alarm is compiled into the binary so the timer works with
//! no on-disk assets. A `--sound-path` override bypasses this entirely.

/// The bundled alarm sound: a short two-tone siren sweep,
/// WAV (16-bit PCM, 22.05 kHz, mono).
pub const EMBEDDED_ALARM: &[u8] = include_bytes!("../../assets/alarm.wav");

/// Returns the bundled alarm sound data.
#[must_use]
pub const fn embedded_alarm() -> &'static [u8] {
    EMBEDDED_ALARM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_alarm_is_not_empty() {
        assert!(!embedded_alarm().is_empty());
    }

    #[test]
    fn test_embedded_alarm_is_wav() {
        let data = embedded_alarm();
        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WAVE");
        assert_eq!(&data[12..16], b"fmt ");
    }

    #[test]
    fn test_embedded_alarm_contains_samples() {
        // Header alone is 44 bytes; anything beyond that is audio data.
        assert!(embedded_alarm().len() > 44);
    }
}
