//! Network record to curve conversion
//!
//! Combines the channel mapping and the signal scale into the three
//! anchor points of a record's curve, in plot units with the origin at the
//! plot's top-left corner.

use crate::band;
use crate::model::*;
use crate::signal;

/// Converts records into curve geometry for one band and ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCoordinateConverter {
    band: RadioBand,
    ceiling: AxisCeiling,
}

impl ChannelCoordinateConverter {
    /// Create a converter; band and ceiling are fixed afterwards
    pub fn new(band: RadioBand, ceiling: AxisCeiling) -> Self {
        Self { band, ceiling }
    }

    pub fn band(&self) -> RadioBand {
        self.band
    }

    pub fn ceiling(&self) -> AxisCeiling {
        self.ceiling
    }

    /// y of the zero-signal baseline that curve edges sit on
    pub fn baseline(&self) -> f64 {
        self.ceiling.max_index() as f64
    }

    /// Curve anchors for a record
    pub fn curve_for(&self, record: &NetworkRecord) -> CurveGeometry {
        curve_for(record, self.band, self.ceiling)
    }
}

/// Curve anchors for `record`: edges on the baseline, peak at the channel
/// center and signal depth.
pub fn curve_for(record: &NetworkRecord, band: RadioBand, ceiling: AxisCeiling) -> CurveGeometry {
    let baseline = ceiling.max_index() as f64;
    let bounds = band::bounds(record.channel, record.bandwidth_mhz, band);

    CurveGeometry {
        start: PlotUnitPoint::new(bounds.min, baseline),
        mid: PlotUnitPoint::new(
            band::center_position(record.channel, band),
            signal::y_position(record.signal_dbm, ceiling),
        ),
        end: PlotUnitPoint::new(bounds.max, baseline),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_two_ghz_channel_six() {
        let record = NetworkRecord::new("home", 6, -65.0, 20.0);
        let curve = curve_for(&record, RadioBand::TwoPointFourGHz, AxisCeiling::Zero);

        assert_eq!(curve.start, PlotUnitPoint::new(37.0, 10.0));
        assert_eq!(curve.mid, PlotUnitPoint::new(47.0, 6.5));
        assert_eq!(curve.end, PlotUnitPoint::new(57.0, 10.0));
    }

    #[test]
    fn test_five_ghz_channel_hundred() {
        let converter =
            ChannelCoordinateConverter::new(RadioBand::FiveGHz, AxisCeiling::NegativeTwenty);
        let curve = converter.curve_for(&NetworkRecord::new("office", 100, -72.0, 160.0));

        assert_eq!(curve.start.x, 36.0);
        assert_eq!(curve.mid.x, 52.0);
        assert_eq!(curve.end.x, 68.0);
        assert_eq!(curve.start.y, 8.0);
        assert!((curve.mid.y - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_baseline_follows_ceiling() {
        let converter =
            ChannelCoordinateConverter::new(RadioBand::TwoPointFourGHz, AxisCeiling::NegativeTen);
        assert_eq!(converter.baseline(), 9.0);
        let curve = converter.curve_for(&NetworkRecord::new("x", 1, -40.0, 20.0));
        assert_eq!(curve.start.y, 9.0);
        assert_eq!(curve.end.y, 9.0);
    }

    #[test]
    fn test_display() {
        let curve = curve_for(
            &NetworkRecord::new("a", 1, -50.0, 20.0),
            RadioBand::TwoPointFourGHz,
            AxisCeiling::Zero,
        );
        assert_eq!(curve.to_string(), "start: (12, 10), mid: (22, 5), end: (32, 10)");
    }

    fn any_band() -> impl Strategy<Value = RadioBand> {
        prop_oneof![Just(RadioBand::TwoPointFourGHz), Just(RadioBand::FiveGHz)]
    }

    fn any_ceiling() -> impl Strategy<Value = AxisCeiling> {
        prop_oneof![
            Just(AxisCeiling::Zero),
            Just(AxisCeiling::NegativeTen),
            Just(AxisCeiling::NegativeTwenty),
        ]
    }

    proptest! {
        #[test]
        fn prop_curve_matches_components(
            band in any_band(),
            ceiling in any_ceiling(),
            channel_index in 0usize..14,
            signal in -100.0f64..0.0,
            bandwidth in prop_oneof![Just(20.0), Just(40.0), Just(80.0), Just(160.0)],
        ) {
            let channel = band.channels()[channel_index];
            let record = NetworkRecord::new("net", channel, signal, bandwidth);
            let curve = curve_for(&record, band, ceiling);
            let bounds = band::bounds(channel, bandwidth, band);

            prop_assert_eq!(curve.mid.y, signal::y_position(signal, ceiling));
            prop_assert_eq!(curve.mid.x, band::center_position(channel, band));
            prop_assert_eq!(curve.start.x, bounds.min);
            prop_assert_eq!(curve.end.x, bounds.max);
            prop_assert!(curve.start.x <= curve.mid.x && curve.mid.x <= curve.end.x);
        }
    }
}
