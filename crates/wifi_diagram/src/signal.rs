//! Signal strength to y-position mapping

use crate::model::AxisCeiling;

/// Vertical plot-unit position for a signal strength in dBm.
///
/// One plot unit per 10 dB, measured down from the ceiling, so stronger
/// signals get smaller y. Values outside the ceiling's range are not
/// clamped and land outside the plot area.
pub fn y_position(signal_dbm: f64, ceiling: AxisCeiling) -> f64 {
    (-signal_dbm - ceiling.offset()) / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_ceiling() {
        assert_eq!(y_position(0.0, AxisCeiling::Zero), 0.0);
        assert_eq!(y_position(-100.0, AxisCeiling::Zero), 10.0);
        assert_eq!(y_position(-65.0, AxisCeiling::Zero), 6.5);
    }

    #[test]
    fn test_offset_ceilings() {
        assert_eq!(y_position(-50.0, AxisCeiling::NegativeTen), 4.0);
        assert_eq!(y_position(-20.0, AxisCeiling::NegativeTwenty), 0.0);
        assert_eq!(y_position(-100.0, AxisCeiling::NegativeTwenty), 8.0);
    }

    #[test]
    fn test_no_clamping() {
        assert_eq!(y_position(-5.0, AxisCeiling::NegativeTwenty), -1.5);
        assert_eq!(y_position(-110.0, AxisCeiling::Zero), 11.0);
    }

    proptest! {
        #[test]
        fn prop_floor_is_baseline(ceiling in prop_oneof![
            Just(AxisCeiling::Zero),
            Just(AxisCeiling::NegativeTen),
            Just(AxisCeiling::NegativeTwenty),
        ]) {
            prop_assert_eq!(y_position(-100.0, ceiling), ceiling.max_index() as f64);
        }

        #[test]
        fn prop_stronger_signal_is_higher(a in -100.0f64..0.0, b in -100.0f64..0.0) {
            prop_assume!(a > b);
            prop_assert!(y_position(a, AxisCeiling::Zero) < y_position(b, AxisCeiling::Zero));
        }
    }
}
