use chrono::{DateTime, Datelike as _, Days, FixedOffset, NaiveDate};

use crate::entities::{DateBucket, DateInterval};

use super::utils::local_midnight;

pub struct DateBucketResolver;

impl DateBucketResolver {
    /// Resolves a period selector against `now`. "Local" midnight is taken in
    /// the offset carried by `now`.
    ///
    /// `None` means no date constraint: either no period was selected, or a
    /// custom range is missing one of its bounds (an incomplete range must
    /// never hide records).
    pub fn resolve(bucket: &DateBucket, now: DateTime<FixedOffset>) -> Option<DateInterval> {
        let today = now.date_naive();
        let start_date = match bucket {
            DateBucket::None => return None,
            DateBucket::Custom {
                from: Some(from),
                to: Some(to),
            } => {
                return Some(DateInterval {
                    start: *from,
                    end: *to,
                })
            }
            DateBucket::Custom { .. } => return None,
            DateBucket::Today => today,
            DateBucket::ThisWeek => {
                // ISO week: Sunday belongs to the week started six days earlier.
                today - Days::new(today.weekday().num_days_from_monday() as u64)
            }
            DateBucket::ThisMonth => today
                .with_day(1)
                .expect("day 1 of an existing month is always valid"),
            DateBucket::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1)
                .expect("January 1 of an existing year is always valid"),
        };
        Some(DateInterval {
            start: local_midnight(start_date, now.offset()),
            end: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .unwrap()
    }

    #[test]
    fn today_starts_at_midnight() {
        let now = at(2024, 3, 6, 15, 30);
        let i = DateBucketResolver::resolve(&DateBucket::Today, now).unwrap();
        assert_eq!(i.start, at(2024, 3, 6, 0, 0));
        assert_eq!(i.end, now);
    }

    #[test]
    fn week_on_sunday_starts_previous_monday() {
        let now = at(2024, 3, 10, 12, 0); // Sunday.
        let i = DateBucketResolver::resolve(&DateBucket::ThisWeek, now).unwrap();
        assert_eq!(i.start, at(2024, 3, 4, 0, 0));
        assert_eq!(i.end, now);
        assert!(!i.contains(&at(2024, 3, 3, 23, 59)));
        assert!(i.contains(&at(2024, 3, 4, 0, 0)));
    }

    #[test]
    fn week_on_monday_starts_same_day() {
        let now = at(2024, 3, 4, 9, 0);
        let i = DateBucketResolver::resolve(&DateBucket::ThisWeek, now).unwrap();
        assert_eq!(i.start, at(2024, 3, 4, 0, 0));
    }

    #[test]
    fn month_and_year_start_on_first_day() {
        let now = at(2024, 3, 10, 12, 0);
        let month = DateBucketResolver::resolve(&DateBucket::ThisMonth, now).unwrap();
        assert_eq!(month.start, at(2024, 3, 1, 0, 0));
        let year = DateBucketResolver::resolve(&DateBucket::ThisYear, now).unwrap();
        assert_eq!(year.start, at(2024, 1, 1, 0, 0));
        assert_eq!(year.end, now);
    }

    #[test]
    fn midnight_is_taken_in_the_offset_of_now() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let now = plus_one.with_ymd_and_hms(2024, 3, 6, 0, 30, 0).unwrap();
        let i = DateBucketResolver::resolve(&DateBucket::Today, now).unwrap();
        assert_eq!(
            i.start,
            plus_one.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn incomplete_custom_range_is_unconstrained() {
        let now = at(2024, 3, 10, 12, 0);
        let to = Some(at(2024, 3, 1, 0, 0));
        assert_eq!(
            DateBucketResolver::resolve(&DateBucket::custom(None, to), now),
            None
        );
        assert_eq!(
            DateBucketResolver::resolve(&DateBucket::custom(to, None), now),
            None
        );
        assert_eq!(DateBucketResolver::resolve(&DateBucket::None, now), None);
    }

    #[test]
    fn complete_custom_range_is_used_as_is() {
        let now = at(2024, 3, 10, 12, 0);
        let from = at(2024, 1, 1, 0, 0);
        let to = at(2024, 2, 1, 0, 0);
        let i = DateBucketResolver::resolve(&DateBucket::custom(Some(from), Some(to)), now)
            .unwrap();
        assert_eq!(i, DateInterval { start: from, end: to });
        assert!(i.contains(&from));
        assert!(i.contains(&to));
    }
}
