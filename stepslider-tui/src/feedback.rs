//! Snap feedback — the terminal stand-in for a haptic pulse.
//!
//! The generator is armed once and reused for every snap; `prepare` arms it
//! ahead of first use so the first pulse carries no setup cost.

use std::io::{self, Write};

/// BEL. Most terminals render it as a bell or a visual flash.
const PULSE: &[u8] = b"\x07";

#[derive(Debug, Default)]
pub struct FeedbackGenerator {
    armed: bool,
}

impl FeedbackGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Emit one pulse into `sink`, arming on first use if needed.
    pub fn pulse(&mut self, sink: &mut impl Write) -> io::Result<()> {
        if !self.armed {
            self.armed = true;
        }
        sink.write_all(PULSE)?;
        sink.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_emits_a_bel() {
        let mut generator = FeedbackGenerator::new();
        let mut sink = Vec::new();
        generator.pulse(&mut sink).unwrap();
        assert_eq!(sink, b"\x07");
    }

    #[test]
    fn pulse_arms_on_first_use() {
        let mut generator = FeedbackGenerator::new();
        assert!(!generator.is_armed());
        generator.pulse(&mut Vec::new()).unwrap();
        assert!(generator.is_armed());
    }

    #[test]
    fn prepare_arms_ahead_of_use() {
        let mut generator = FeedbackGenerator::new();
        generator.prepare();
        assert!(generator.is_armed());
    }
}
