use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub trait PacingRng {
    // Uniform in [0, 1)
    fn unit(&mut self) -> f64;
}

#[derive(Debug)]
pub struct RevealRng {
    rng: StdRng,
}

impl Default for RevealRng {
    fn default() -> Self {
        RevealRng {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PacingRng for RevealRng {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// Reveal delay is base_ms + u1 * u2 * spread_ms
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PacingConfig {
    pub base_ms: u32,
    pub spread_ms: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            base_ms: 1000,
            spread_ms: 1000,
        }
    }
}

impl PacingConfig {
    pub fn reveal_delay<R: PacingRng>(&self, rng: &mut R) -> Duration {
        let skew = rng.unit() * rng.unit();
        let ms = f64::from(self.base_ms) + skew * f64::from(self.spread_ms);
        Duration::from_secs_f64(ms / 1000.0)
    }
}
