use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// First day of every calendar month between start and end, oldest first
pub fn get_months_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if start > end {
        return Vec::new();
    }
    let mut months = Vec::new();
    let mut current = first_of_month(start);
    let last = first_of_month(end);
    while current <= last {
        months.push(current);
        if let Some(next) = current.checked_add_months(Months::new(1)) {
            current = next;
        } else {
            break;
        }
    }
    months
}

/// The calendar-month bucket key a date falls into, formatted YYYY-MM
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Midnight at the start of the given day
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// The inclusive end-of-day bound, 23:59:59.999
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_moment = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_moment)
}

/// Last calendar day of the month the given date falls into
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_months_between_spans_year_boundary() {
        let months = get_months_between(day(2023, 11, 15), day(2024, 2, 3));
        assert_eq!(
            months,
            vec![
                day(2023, 11, 1),
                day(2023, 12, 1),
                day(2024, 1, 1),
                day(2024, 2, 1)
            ]
        );
    }

    #[test]
    fn test_months_between_empty_when_inverted() {
        assert!(get_months_between(day(2024, 3, 1), day(2024, 2, 1)).is_empty());
    }

    #[test]
    fn test_last_of_month_handles_leap_february() {
        assert_eq!(last_of_month(day(2024, 2, 10)), day(2024, 2, 29));
        assert_eq!(last_of_month(day(2023, 2, 10)), day(2023, 2, 28));
        assert_eq!(last_of_month(day(2024, 12, 31)), day(2024, 12, 31));
    }

    #[test]
    fn test_end_of_day_is_inclusive_bound() {
        let bound = end_of_day(day(2024, 3, 31));
        assert_eq!(bound.to_string(), "2024-03-31 23:59:59.999");
    }

    #[test]
    fn test_month_key_format() {
        assert_eq!(month_key(day(2024, 3, 5)), "2024-03");
    }
}
