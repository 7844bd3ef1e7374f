//! Channel to x-position mapping
//!
//! Maps a channel number to its horizontal center and occupied span in
//! plot units. 2.4 GHz channels are evenly spaced; 5 GHz uses one offset
//! for channels up to 64 and another above, with the gap channel parked
//! between the two sub-bands.

use crate::model::{RadioBand, GAP_CHANNEL};
use serde::{Deserialize, Serialize};

/// Center of 2.4 GHz channel 1
const TWO_GHZ_FIRST_CENTER: f64 = 22.0;
/// Distance between adjacent 2.4 GHz channel centers
const TWO_GHZ_SPACING: f64 = 5.0;
/// Highest channel of the low 5 GHz sub-band
const FIVE_GHZ_LOW_LAST: i32 = 64;
const FIVE_GHZ_LOW_OFFSET: f64 = 20.0;
const FIVE_GHZ_HIGH_OFFSET: f64 = 48.0;
/// Sits between channel 64 (44) and channel 100 (52)
const FIVE_GHZ_GAP_POSITION: f64 = 48.0;

/// Horizontal span a channel occupies, in plot units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChannelBounds {
    pub min: f64,
    pub max: f64,
}

impl ChannelBounds {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Horizontal center of `channel` in plot units.
///
/// Channels outside the band's valid set still produce a deterministic
/// value; callers validate before drawing.
pub fn center_position(channel: i32, band: RadioBand) -> f64 {
    match band {
        RadioBand::TwoPointFourGHz => {
            TWO_GHZ_FIRST_CENTER + (channel - 1) as f64 * TWO_GHZ_SPACING
        }
        RadioBand::FiveGHz => {
            if channel == GAP_CHANNEL {
                FIVE_GHZ_GAP_POSITION
            } else if channel <= FIVE_GHZ_LOW_LAST {
                channel as f64 - FIVE_GHZ_LOW_OFFSET
            } else {
                channel as f64 - FIVE_GHZ_HIGH_OFFSET
            }
        }
    }
}

/// Span occupied by `channel` at the given bandwidth.
///
/// On 2.4 GHz the bandwidth in MHz is reused directly as plot-unit width.
/// On 5 GHz each side extends by a tenth of the bandwidth. The gap channel
/// has zero width.
pub fn bounds(channel: i32, bandwidth_mhz: f64, band: RadioBand) -> ChannelBounds {
    let center = center_position(channel, band);
    let half_width = match band {
        RadioBand::TwoPointFourGHz => bandwidth_mhz / 2.0,
        RadioBand::FiveGHz if channel == GAP_CHANNEL => 0.0,
        RadioBand::FiveGHz => bandwidth_mhz / 10.0,
    };
    ChannelBounds {
        min: center - half_width,
        max: center + half_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_ghz_centers() {
        assert_eq!(center_position(1, RadioBand::TwoPointFourGHz), 22.0);
        assert_eq!(center_position(6, RadioBand::TwoPointFourGHz), 47.0);
        assert_eq!(center_position(14, RadioBand::TwoPointFourGHz), 87.0);
    }

    #[test]
    fn test_two_ghz_bounds() {
        let b = bounds(6, 20.0, RadioBand::TwoPointFourGHz);
        assert_eq!(b, ChannelBounds { min: 37.0, max: 57.0 });
        assert_eq!(b.width(), 20.0);

        let wide = bounds(1, 40.0, RadioBand::TwoPointFourGHz);
        assert_eq!(wide.min, 2.0);
        assert_eq!(wide.max, 42.0);
    }

    #[test]
    fn test_five_ghz_regimes() {
        assert_eq!(center_position(36, RadioBand::FiveGHz), 16.0);
        assert_eq!(center_position(64, RadioBand::FiveGHz), 44.0);
        assert_eq!(center_position(100, RadioBand::FiveGHz), 52.0);
        assert_eq!(center_position(165, RadioBand::FiveGHz), 117.0);
    }

    #[test]
    fn test_five_ghz_wide_channel() {
        let b = bounds(100, 160.0, RadioBand::FiveGHz);
        assert_eq!(b.min, 36.0);
        assert_eq!(b.max, 68.0);
    }

    #[test]
    fn test_gap_between_sub_bands() {
        let gap = center_position(GAP_CHANNEL, RadioBand::FiveGHz);
        assert!(gap > center_position(64, RadioBand::FiveGHz));
        assert!(gap < center_position(100, RadioBand::FiveGHz));
    }

    #[test]
    fn test_every_axis_channel_fits_the_axis() {
        for band in [RadioBand::TwoPointFourGHz, RadioBand::FiveGHz] {
            let max_x = band.max_x_index() as f64;
            for channel in band.channels() {
                let b = bounds(channel, 20.0, band);
                assert!(b.min >= 0.0, "{} ch {} starts at {}", band, channel, b.min);
                assert!(b.max <= max_x, "{} ch {} ends at {}", band, channel, b.max);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_two_ghz_uniform_spacing(channel in 1i32..14) {
            let step = center_position(channel + 1, RadioBand::TwoPointFourGHz)
                - center_position(channel, RadioBand::TwoPointFourGHz);
            prop_assert_eq!(step, 5.0);
        }

        #[test]
        fn prop_five_ghz_low_regime(channel in 36i32..=64) {
            prop_assert_eq!(center_position(channel, RadioBand::FiveGHz), channel as f64 - 20.0);
        }

        #[test]
        fn prop_five_ghz_high_regime(channel in 65i32..=165) {
            prop_assert_eq!(center_position(channel, RadioBand::FiveGHz), channel as f64 - 48.0);
        }

        #[test]
        fn prop_gap_has_zero_width(bandwidth in 0.0f64..320.0) {
            let b = bounds(GAP_CHANNEL, bandwidth, RadioBand::FiveGHz);
            let center = center_position(GAP_CHANNEL, RadioBand::FiveGHz);
            prop_assert_eq!(b.min, center);
            prop_assert_eq!(b.max, center);
        }

        #[test]
        fn prop_bounds_symmetric_about_center(channel in 1i32..=14, bandwidth in 5.0f64..80.0) {
            let b = bounds(channel, bandwidth, RadioBand::TwoPointFourGHz);
            let center = center_position(channel, RadioBand::TwoPointFourGHz);
            prop_assert!(((center - b.min) - (b.max - center)).abs() < 1e-9);
        }
    }
}
