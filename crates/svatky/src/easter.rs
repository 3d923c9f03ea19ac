use crate::date::CalendarDate;
use crate::CelebrationError;

/// First full year of the Gregorian calendar.
pub const FIRST_GREGORIAN_YEAR: i32 = 1583;
pub const LAST_SUPPORTED_YEAR: i32 = 9999;

/// Gregorian Easter Sunday for `year` (anonymous Meeus/Jones/Butcher computus).
///
/// Every operand is non-negative inside the supported range, so Rust's
/// truncating `/` and `%` are the floor division and modulo the algorithm needs.
pub fn easter_sunday(year: i32) -> Result<CalendarDate, CelebrationError> {
    if !(FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR).contains(&year) {
        return Err(CelebrationError::InvalidYear(year));
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    let month = n / 31;
    let day = n % 31 + 1;

    CalendarDate::from_ymd(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;

    fn ymd(date: CalendarDate) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    #[test]
    fn known_easter_sundays() {
        let cases = [
            (1583, 4, 10),
            (1818, 3, 22),
            (1943, 4, 25),
            (2000, 4, 23),
            (2019, 4, 21),
            (2024, 3, 31),
            (2025, 4, 20),
            (2026, 4, 5),
            (2038, 4, 25),
            (2285, 3, 22),
        ];
        for (year, month, day) in cases {
            let easter = easter_sunday(year).expect("supported year");
            assert_eq!(ymd(easter), (year, month, day), "Easter {year}");
        }
    }

    #[test]
    fn always_a_sunday_between_march_22_and_april_25() {
        for year in FIRST_GREGORIAN_YEAR..=LAST_SUPPORTED_YEAR {
            let easter = easter_sunday(year).expect("supported year");
            assert_eq!(easter.weekday(), Weekday::Sun, "Easter {year}");
            let (_, month, day) = ymd(easter);
            assert!(
                (month == 3 && day >= 22) || (month == 4 && day <= 25),
                "Easter {year} out of bounds: {easter}"
            );
        }
    }

    #[test]
    fn rejects_years_outside_gregorian_range() {
        for year in [i32::MIN, -1, 0, 1582, 10_000, i32::MAX] {
            assert!(matches!(
                easter_sunday(year),
                Err(CelebrationError::InvalidYear(y)) if y == year
            ));
        }
    }
}
