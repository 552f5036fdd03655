//! The power-law weighting of deck win rates.

use decklens_core::config::WeightConfig;

/// The neutral win rate assigned to zero-game decks under the `neutral`
/// policy: break-even for a 4-player pod.
pub const NEUTRAL_WIN_RATE: f64 = 0.25;

/// Parameters of the power-law weight transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightParams {
    /// Win rate that maps to weight zero.
    pub center: f64,
    /// Exponent applied to the distance from the center.
    pub power: f64,
}

impl Default for WeightParams {
    fn default() -> Self {
        Self {
            center: 0.25,
            power: 2.0,
        }
    }
}

impl WeightParams {
    pub fn from_config(config: &WeightConfig) -> Self {
        Self {
            center: config.effective_center(),
            power: config.effective_power(),
        }
    }

    /// Signed power-law transform of a win rate.
    ///
    /// Zero exactly at the center; suppresses decks near break-even and
    /// amplifies strong over- and under-performance, preserving sign so
    /// losing decks pull card scores negative.
    pub fn weight(&self, win_rate: f64) -> f64 {
        let shifted = win_rate - self.center;
        if shifted == 0.0 {
            return 0.0;
        }
        shifted.signum() * shifted.abs().powf(self.power)
    }
}
