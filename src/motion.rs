//! Scripted motion for the demo scene's animated objects.

/// Sinusoidal vertical bobbing: `sin(elapsed * frequency) * amplitude`.
///
/// Evaluated from an elapsed-seconds clock, so the motion is a pure
/// function of time — no per-frame integration state to drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bobbing {
    /// Peak offset from the rest position.
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
}

impl Bobbing {
    /// Create a bobbing motion with the given amplitude and frequency.
    #[must_use]
    pub fn new(amplitude: f32, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Offset from the rest position at `elapsed` seconds.
    #[inline]
    #[must_use]
    pub fn offset(&self, elapsed: f32) -> f32 {
        (elapsed * self.frequency).sin() * self.amplitude
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn starts_at_rest() {
        let bob = Bobbing::new(1.5, 0.8);
        assert_eq!(bob.offset(0.0), 0.0);
    }

    #[test]
    fn peaks_at_quarter_period() {
        let bob = Bobbing::new(1.5, 0.8);
        let quarter_period = FRAC_PI_2 / 0.8;
        assert!((bob.offset(quarter_period) - 1.5).abs() < 1e-5);
    }

    #[test]
    fn stays_within_amplitude() {
        let bob = Bobbing::new(1.5, 1.4);
        for i in 0..200 {
            let t = i as f32 * 0.137;
            assert!(bob.offset(t).abs() <= 1.5 + 1e-6);
        }
    }

    #[test]
    fn higher_frequency_moves_sooner() {
        let slow = Bobbing::new(1.5, 0.3);
        let fast = Bobbing::new(1.5, 1.4);
        assert!(fast.offset(0.5) > slow.offset(0.5));
    }
}
