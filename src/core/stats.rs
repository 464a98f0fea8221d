//! Earnings aggregation for the `stats` command: bucket a shift snapshot
//! by week, month or year, in chronological order.

use crate::models::shift::Shift;
use crate::utils::date::week_start;
use chrono::Datelike;
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatsView {
    Week,
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EarningsBucket {
    pub label: String,
    pub earnings: f64,
    pub hours: f64,
}

/// Group shift earnings under a view-dependent label. Buckets come back
/// oldest first, keyed by the bucket's representative date.
pub fn bucket_earnings(shifts: &[Shift], view: StatsView) -> Vec<EarningsBucket> {
    // (sort key, bucket)
    let mut buckets: Vec<(String, EarningsBucket)> = Vec::new();

    for shift in shifts {
        let (key, label) = match view {
            StatsView::Year => (
                shift.date.format("%Y").to_string(),
                shift.date.format("%Y").to_string(),
            ),
            StatsView::Month => (
                shift.date.format("%Y-%m").to_string(),
                shift.date.format("%b %Y").to_string(),
            ),
            StatsView::Week => {
                let monday = week_start(shift.date);
                (
                    monday.format("%Y-%m-%d").to_string(),
                    format!("w/c {:02}/{:02}", monday.day(), monday.month()),
                )
            }
        };

        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, b)) => {
                b.earnings += shift.total_earnings;
                b.hours += shift.hours;
            }
            None => buckets.push((
                key,
                EarningsBucket {
                    label,
                    earnings: shift.total_earnings,
                    hours: shift.hours,
                },
            )),
        }
    }

    buckets.sort_by(|a, b| a.0.cmp(&b.0));
    buckets.into_iter().map(|(_, b)| b).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn shift(date: &str, earnings: f64, hours: f64) -> Shift {
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let mut s = Shift::new("default", d, None, None, hours, 0.0, earnings, 1, 1);
        s.total_earnings = earnings;
        s
    }

    #[test]
    fn yearly_buckets_accumulate() {
        let shifts = vec![
            shift("2024-05-10", 100.0, 8.0),
            shift("2024-01-02", 50.0, 4.0),
            shift("2023-12-30", 25.0, 2.0),
        ];
        let buckets = bucket_earnings(&shifts, StatsView::Year);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "2023");
        assert_eq!(buckets[0].earnings, 25.0);
        assert_eq!(buckets[1].label, "2024");
        assert_eq!(buckets[1].earnings, 150.0);
    }

    #[test]
    fn monthly_buckets_are_chronological() {
        let shifts = vec![
            shift("2024-05-10", 100.0, 8.0),
            shift("2024-04-01", 40.0, 3.0),
            shift("2024-05-20", 60.0, 5.0),
        ];
        let buckets = bucket_earnings(&shifts, StatsView::Month);
        assert_eq!(buckets[0].label, "Apr 2024");
        assert_eq!(buckets[1].label, "May 2024");
        assert_eq!(buckets[1].earnings, 160.0);
        assert_eq!(buckets[1].hours, 13.0);
    }

    #[test]
    fn weekly_buckets_start_monday() {
        // 2024-05-15 (Wed) and 2024-05-13 (Mon) share the week of 13/05;
        // 2024-05-12 (Sun) belongs to the previous week.
        let shifts = vec![
            shift("2024-05-15", 10.0, 1.0),
            shift("2024-05-13", 20.0, 2.0),
            shift("2024-05-12", 5.0, 1.0),
        ];
        let buckets = bucket_earnings(&shifts, StatsView::Week);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].label, "w/c 06/05");
        assert_eq!(buckets[1].label, "w/c 13/05");
        assert_eq!(buckets[1].earnings, 30.0);
    }
}
