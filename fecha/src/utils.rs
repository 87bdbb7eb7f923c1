pub fn is_leap_year(y: i64) -> bool {
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

pub fn days_in_month(m: u32, y: i64) -> u32 {
    static DIM: [u8;12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    debug_assert!(m > 0 && m <= 12);
    // check when february has 29 days
    if m == 2 && is_leap_year(y) { return 29; }
    DIM[(m - 1) as usize] as u32
}

/// Year and month `n` months away from (`y`, `m`). Years are not range checked.
pub fn shift_months(y: i64, m: u32, n: i64) -> (i64, u32) {
    let total = (y * 12 + m as i64 - 1).saturating_add(n);
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2, 2012), 29);
        assert_eq!(days_in_month(2, 2013), 28);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(6, 2015), 30);
        assert_eq!(days_in_month(12, 2015), 31);
    }

    #[test]
    fn test_shift_months() {
        assert_eq!(shift_months(2015, 1, -1), (2014, 12));
        assert_eq!(shift_months(2015, 1, -2), (2014, 11));
        assert_eq!(shift_months(2015, 6, -13), (2014, 5));
        assert_eq!(shift_months(2016, 12, 1), (2017, 1));
        assert_eq!(shift_months(2016, 3, -27), (2013, 12));
        assert_eq!(shift_months(2016, 1, 12), (2017, 1));
        assert_eq!(shift_months(2016, 5, 0), (2016, 5));
    }
}
