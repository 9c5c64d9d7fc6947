//! Fixed-point angles and the time-to-angle conversions.

use crate::time::ClockTime;

/// Angle units in one full turn (360 degrees).
pub const FULL_TURN: u32 = 0x10000;

/// An angle in fixed-point units, always within `[0, FULL_TURN)`.
///
/// Zero points at 12 o'clock and angles grow clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(u32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const QUARTER: Angle = Angle(FULL_TURN / 4);
    pub const HALF: Angle = Angle(FULL_TURN / 2);

    /// Raw units, in `[0, FULL_TURN)`.
    pub fn units(self) -> u32 {
        self.0
    }

    /// Approximate value in degrees, for display.
    pub fn degrees(self) -> f64 {
        f64::from(self.0) * 360.0 / f64::from(FULL_TURN)
    }
}

impl From<u32> for Angle {
    fn from(units: u32) -> Self {
        Self(units % FULL_TURN)
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::from(self.0 + rhs.0)
    }
}

/// Hour hand position: 12-hour dial with minute-of-hour progress.
pub fn hour_angle(time: ClockTime) -> Angle {
    let minutes = (time.hour() % 12) * 60 + time.minute();
    Angle::from(FULL_TURN * minutes / 720)
}

/// Minute hand position: minute of hour with second-of-minute progress.
pub fn minute_angle(time: ClockTime) -> Angle {
    let seconds = time.minute() * 60 + time.second();
    Angle::from(FULL_TURN * seconds / 3600)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn at(hour: u32, minute: u32, second: u32) -> ClockTime {
        ClockTime::new(hour, minute, second).unwrap()
    }

    #[test]
    fn test_midnight() {
        assert_eq!(hour_angle(at(0, 0, 0)), Angle::ZERO);
        assert_eq!(minute_angle(at(0, 0, 0)), Angle::ZERO);
    }

    #[test]
    fn test_six_oclock_is_half_turn() {
        assert_eq!(hour_angle(at(6, 0, 0)), Angle::HALF);
        assert_eq!(hour_angle(at(18, 0, 0)), Angle::HALF);
    }

    #[test]
    fn test_three_oclock_is_quarter_turn() {
        assert_eq!(hour_angle(at(3, 0, 0)), Angle::QUARTER);
    }

    #[test]
    fn test_half_past_is_half_turn() {
        assert_eq!(minute_angle(at(0, 30, 0)), Angle::HALF);
    }

    #[test]
    fn test_hour_angle_wraps_at_noon() {
        let before = hour_angle(at(11, 59, 0));
        assert_eq!(before.units(), FULL_TURN * 719 / 720);
        assert_eq!(hour_angle(at(12, 0, 0)), Angle::ZERO);
    }

    #[test]
    fn test_hour_angle_truncates() {
        // 65536 / 720 = 91.02..., truncated per minute of progress.
        assert_eq!(hour_angle(at(0, 1, 0)).units(), 91);
    }

    #[test]
    fn test_angle_wraps() {
        assert_eq!(Angle::from(FULL_TURN + 5).units(), 5);
        assert_eq!(Angle::HALF + Angle::HALF, Angle::ZERO);
    }

    #[test]
    fn test_degrees() {
        assert_eq!(Angle::QUARTER.degrees(), 90.0);
        assert_eq!(Angle::HALF.degrees(), 180.0);
    }

    fn clock_time() -> impl Strategy<Value = ClockTime> {
        (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| at(h, m, s))
    }

    proptest! {
        #[test]
        fn prop_angles_in_range(time in clock_time()) {
            prop_assert!(hour_angle(time).units() < FULL_TURN);
            prop_assert!(minute_angle(time).units() < FULL_TURN);
        }

        #[test]
        fn prop_minute_angle_ignores_hour(time in clock_time(), other in 0u32..24) {
            let shifted = at(other, time.minute(), time.second());
            prop_assert_eq!(minute_angle(time), minute_angle(shifted));
        }

        #[test]
        fn prop_hour_angle_non_decreasing(hour in 0u32..12, minute in 0u32..59) {
            let now = hour_angle(at(hour, minute, 0));
            let next = hour_angle(at(hour, minute + 1, 0));
            prop_assert!(now <= next);
        }

        #[test]
        fn prop_hour_angle_twelve_hour_period(time in clock_time()) {
            let other = at((time.hour() + 12) % 24, time.minute(), time.second());
            prop_assert_eq!(hour_angle(time), hour_angle(other));
        }
    }
}
