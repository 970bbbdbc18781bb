//! Recurrence expansion.
//!
//! Turns one recurring [`TemplateEvent`] into the concrete [`Occurrence`]s
//! that fall inside a query window. Expansion steps forward from a candidate
//! near the window start instead of computing occurrences in closed form, so
//! short months and leap years need no special casing. Iteration counts are a
//! function of the window length only, which keeps every expansion finite.
//!
//! This is part of the Functional Core - all functions are pure with no side effects.

use chrono::{Datelike, NaiveDate};

use super::dates::{
    add_days, add_months, date_from_ymd, inclusive_day_count, shift_month, weekday_of,
};
use super::error::ExpandError;
use super::recurrence::{RecurrenceKind, RecurrenceRule};
use super::types::{Occurrence, TemplateEvent};
use crate::storage::DateRange;

/// Extra stepping iterations past the window length, so stepping still
/// reaches the window end when months are short.
const STEP_MARGIN: i64 = 3;

/// How many times the monthly base may retreat looking for a valid date.
const MAX_MONTH_RETREATS: i32 = 12;

/// Expands a recurring template into its occurrences within `window`.
///
/// Occurrences are returned in date order. Every occurrence lies inside the
/// window and on or before the template's `repeat_till`, when set.
pub fn expand(
    template: &TemplateEvent,
    window: DateRange,
) -> Result<Vec<Occurrence>, ExpandError> {
    let rule = recurrence_rule(template)?;

    let dates = match rule.kind {
        RecurrenceKind::Yearly => yearly_dates(template.anchor_date(), window),
        RecurrenceKind::Monthly => monthly_dates(template.anchor_date(), window),
        RecurrenceKind::Weekly => weekly_dates(template.anchor_date(), window),
        RecurrenceKind::Daily => daily_dates(template.anchor_date(), &rule, window),
    };

    Ok(dates
        .into_iter()
        .filter(|date| template.repeat_till.is_none_or(|till| *date <= till))
        .map(|date| Occurrence::at_date(template, date))
        .collect())
}

fn recurrence_rule(template: &TemplateEvent) -> Result<RecurrenceRule, ExpandError> {
    if !template.is_recurring {
        return Err(ExpandError::NotRecurring(template.id.to_string()));
    }
    template
        .recurrence
        .ok_or_else(|| ExpandError::MissingRecurrence(template.id.to_string()))
}

/// Same month and day in every year the window touches.
///
/// Years where the anchor day does not exist (Feb 29 outside leap years)
/// produce nothing. Dates before the anchor are not filtered out.
fn yearly_dates(anchor: NaiveDate, window: DateRange) -> Vec<NaiveDate> {
    (window.start.year()..=window.end.year())
        .filter_map(|year| date_from_ymd(year, anchor.month(), anchor.day()).ok())
        .filter(|date| window.contains(*date))
        .collect()
}

/// Same day of month, month after month.
///
/// Stepping starts from the anchor day in the window's first month. When
/// that day does not exist there, the base retreats to the nearest earlier
/// month where it does. Later months are reached with [`add_months`] from
/// that base, so a day-31 event lands on the last day of shorter months.
fn monthly_dates(anchor: NaiveDate, window: DateRange) -> Vec<NaiveDate> {
    let Some(base) = monthly_base(anchor.day(), window.start) else {
        return Vec::new();
    };

    let iterations = ceil_div(window.day_count(), 30) + STEP_MARGIN;

    (0..iterations)
        .map_while(|i| add_months(base, i as i32))
        .filter(|date| window.contains(*date) && *date >= anchor)
        .collect()
}

fn monthly_base(day: u32, window_start: NaiveDate) -> Option<NaiveDate> {
    (0..=MAX_MONTH_RETREATS).find_map(|back| {
        let (year, month) = shift_month(window_start.year(), window_start.month(), -back);
        date_from_ymd(year, month, day).ok()
    })
}

/// Same weekday as the anchor, every seven days.
///
/// The first candidate is the anchor's weekday within the week of the window
/// start, which may fall before the window and is then skipped. Candidates
/// outside the representable date range are dropped.
fn weekly_dates(anchor: NaiveDate, window: DateRange) -> Vec<NaiveDate> {
    let offset = weekday_of(anchor) as i64 - weekday_of(window.start) as i64;

    let iterations = ceil_div(window.day_count(), 7) + STEP_MARGIN;

    (0..iterations)
        .filter_map(|i| add_days(window.start, offset + i * 7))
        .filter(|date| window.contains(*date) && *date >= anchor)
        .collect()
}

/// Every day of the window whose weekday is enabled in the rule's mask.
fn daily_dates(anchor: NaiveDate, rule: &RecurrenceRule, window: DateRange) -> Vec<NaiveDate> {
    (0..inclusive_day_count(window.start, window.end))
        .map_while(|i| add_days(window.start, i))
        .filter(|date| *date >= anchor && rule.weekday_mask.is_set_index(weekday_of(*date)))
        .collect()
}

fn ceil_div(value: i64, divisor: i64) -> i64 {
    (value + divisor - 1) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Weekday};

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        make_date(year, month, day).and_hms_opt(hour, min, 0).unwrap()
    }

    fn window(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange::new(start, end).unwrap()
    }

    fn recurring(starts_on: NaiveDateTime, rule: RecurrenceRule) -> TemplateEvent {
        TemplateEvent::new("alice", "Recurring", starts_on).recurring(rule)
    }

    fn dates(occurrences: &[Occurrence]) -> Vec<NaiveDate> {
        occurrences.iter().map(Occurrence::date).collect()
    }

    // ------------------------------------------------------------------
    // Yearly
    // ------------------------------------------------------------------

    #[test]
    fn test_yearly_emits_once_per_year_in_window() {
        let template = recurring(make_datetime(2020, 5, 10, 18, 0), RecurrenceRule::yearly());
        let result = expand(
            &template,
            window(make_date(2021, 1, 1), make_date(2023, 12, 31)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2021, 5, 10), make_date(2022, 5, 10), make_date(2023, 5, 10)]
        );
        assert!(result
            .iter()
            .all(|o| o.starts_on.time() == template.anchor_time()));
    }

    #[test]
    fn test_yearly_leap_day_only_in_leap_years() {
        let template = recurring(make_datetime(2020, 2, 29, 10, 0), RecurrenceRule::yearly());
        let result = expand(
            &template,
            window(make_date(2021, 1, 1), make_date(2024, 12, 31)),
        )
        .unwrap();

        assert_eq!(dates(&result), vec![make_date(2024, 2, 29)]);
    }

    #[test]
    fn test_yearly_skips_dates_outside_window() {
        let template = recurring(make_datetime(2020, 12, 25, 0, 0), RecurrenceRule::yearly());
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 12, 24)),
        )
        .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_yearly_does_not_filter_before_anchor() {
        let template = recurring(make_datetime(2030, 7, 4, 12, 0), RecurrenceRule::yearly());
        let result = expand(
            &template,
            window(make_date(2024, 7, 1), make_date(2024, 7, 31)),
        )
        .unwrap();

        assert_eq!(dates(&result), vec![make_date(2024, 7, 4)]);
    }

    // ------------------------------------------------------------------
    // Monthly
    // ------------------------------------------------------------------

    #[test]
    fn test_monthly_same_day_each_month() {
        let template = recurring(make_datetime(2024, 1, 15, 9, 0), RecurrenceRule::monthly());
        let result = expand(
            &template,
            window(make_date(2024, 3, 1), make_date(2024, 5, 31)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2024, 3, 15), make_date(2024, 4, 15), make_date(2024, 5, 15)]
        );
    }

    #[test]
    fn test_monthly_day_31_window_in_february_does_not_fail() {
        let template = recurring(make_datetime(2023, 1, 31, 9, 0), RecurrenceRule::monthly());
        let result = expand(
            &template,
            window(make_date(2023, 2, 1), make_date(2023, 2, 28)),
        )
        .unwrap();

        // The base falls back to Jan 31; stepping one month lands on the last day of February.
        assert_eq!(dates(&result), vec![make_date(2023, 2, 28)]);
    }

    #[test]
    fn test_monthly_day_31_across_short_months() {
        let template = recurring(make_datetime(2024, 1, 31, 9, 0), RecurrenceRule::monthly());
        let result = expand(
            &template,
            window(make_date(2024, 2, 1), make_date(2024, 5, 31)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![
                make_date(2024, 2, 29),
                make_date(2024, 3, 31),
                make_date(2024, 4, 30),
                make_date(2024, 5, 31),
            ]
        );
    }

    #[test]
    fn test_monthly_never_precedes_anchor() {
        let template = recurring(make_datetime(2024, 3, 10, 9, 0), RecurrenceRule::monthly());
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 4, 30)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2024, 3, 10), make_date(2024, 4, 10)]
        );
    }

    #[test]
    fn test_monthly_base_retreats_across_year() {
        assert_eq!(
            monthly_base(31, make_date(2024, 2, 10)),
            Some(make_date(2024, 1, 31))
        );
        assert_eq!(
            monthly_base(31, make_date(2024, 4, 1)),
            Some(make_date(2024, 3, 31))
        );
        assert_eq!(
            monthly_base(15, make_date(2024, 1, 1)),
            Some(make_date(2024, 1, 15))
        );
    }

    // ------------------------------------------------------------------
    // Weekly
    // ------------------------------------------------------------------

    #[test]
    fn test_weekly_reanchors_to_template_weekday() {
        // 2024-01-03 is a Wednesday, 2024-02-05 is a Monday.
        let template = recurring(make_datetime(2024, 1, 3, 17, 0), RecurrenceRule::weekly());
        let result = expand(
            &template,
            window(make_date(2024, 2, 5), make_date(2024, 2, 25)),
        )
        .unwrap();

        assert_eq!(result[0].starts_on.weekday(), Weekday::Wed);
        assert_eq!(
            dates(&result),
            vec![make_date(2024, 2, 7), make_date(2024, 2, 14), make_date(2024, 2, 21)]
        );
    }

    #[test]
    fn test_weekly_first_candidate_before_window_is_skipped() {
        // Anchor on a Monday, window starts on a Thursday.
        let template = recurring(make_datetime(2024, 1, 1, 8, 0), RecurrenceRule::weekly());
        let result = expand(
            &template,
            window(make_date(2024, 1, 11), make_date(2024, 1, 22)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2024, 1, 15), make_date(2024, 1, 22)]
        );
    }

    #[test]
    fn test_weekly_never_precedes_anchor() {
        let template = recurring(make_datetime(2024, 1, 17, 8, 0), RecurrenceRule::weekly());
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 1, 31)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2024, 1, 17), make_date(2024, 1, 24), make_date(2024, 1, 31)]
        );
    }

    // ------------------------------------------------------------------
    // Daily
    // ------------------------------------------------------------------

    #[test]
    fn test_daily_mask_mon_wed_fri_over_two_weeks() {
        let rule = RecurrenceRule::daily(&[Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        let template = recurring(make_datetime(2024, 1, 1, 7, 30), rule);
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 1, 14)),
        )
        .unwrap();

        assert_eq!(result.len(), 6);
        assert!(result.iter().all(|o| matches!(
            o.starts_on.weekday(),
            Weekday::Mon | Weekday::Wed | Weekday::Fri
        )));
    }

    #[test]
    fn test_daily_with_empty_mask_emits_nothing() {
        let rule = RecurrenceRule::daily(&[]);
        let template = recurring(make_datetime(2024, 1, 1, 7, 30), rule);
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 1, 31)),
        )
        .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_daily_never_precedes_anchor() {
        let rule = RecurrenceRule {
            kind: RecurrenceKind::Daily,
            weekday_mask: crate::calendar::WeekdayMask::all(),
        };
        let template = recurring(make_datetime(2024, 1, 10, 7, 30), rule);
        let result = expand(
            &template,
            window(make_date(2024, 1, 8), make_date(2024, 1, 12)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2024, 1, 10), make_date(2024, 1, 11), make_date(2024, 1, 12)]
        );
    }

    // ------------------------------------------------------------------
    // Shared behaviour
    // ------------------------------------------------------------------

    #[test]
    fn test_repeat_till_is_inclusive() {
        let template = recurring(make_datetime(2024, 1, 1, 9, 0), RecurrenceRule::weekly())
            .repeat_till(make_date(2024, 1, 15));
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 1, 31)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2024, 1, 1), make_date(2024, 1, 8), make_date(2024, 1, 15)]
        );
    }

    #[test]
    fn test_repeat_till_day_before_excludes_occurrence() {
        let template = recurring(make_datetime(2024, 1, 1, 9, 0), RecurrenceRule::weekly())
            .repeat_till(make_date(2024, 1, 14));
        let result = expand(
            &template,
            window(make_date(2024, 1, 15), make_date(2024, 1, 15)),
        )
        .unwrap();

        assert!(result.is_empty());
    }

    #[test]
    fn test_repeat_till_applies_to_yearly() {
        let template = recurring(make_datetime(2020, 6, 1, 9, 0), RecurrenceRule::yearly())
            .repeat_till(make_date(2022, 6, 1));
        let result = expand(
            &template,
            window(make_date(2021, 1, 1), make_date(2023, 12, 31)),
        )
        .unwrap();

        assert_eq!(
            dates(&result),
            vec![make_date(2021, 6, 1), make_date(2022, 6, 1)]
        );
    }

    #[test]
    fn test_end_time_is_restamped() {
        let template = recurring(make_datetime(2024, 1, 2, 9, 0), RecurrenceRule::weekly())
            .with_end(make_datetime(2024, 1, 2, 10, 30));
        let result = expand(
            &template,
            window(make_date(2024, 1, 9), make_date(2024, 1, 9)),
        )
        .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].starts_on, make_datetime(2024, 1, 9, 9, 0));
        assert_eq!(result[0].ends_on, Some(make_datetime(2024, 1, 9, 10, 30)));
    }

    #[test]
    fn test_every_occurrence_inside_window() {
        let rules = [
            RecurrenceRule::yearly(),
            RecurrenceRule::monthly(),
            RecurrenceRule::weekly(),
            RecurrenceRule::daily(&[Weekday::Tue, Weekday::Sat]),
        ];
        let range = window(make_date(2024, 1, 20), make_date(2025, 3, 10));

        for rule in rules {
            let template = recurring(make_datetime(2023, 1, 31, 12, 0), rule);
            let result = expand(&template, range).unwrap();
            assert!(!result.is_empty(), "{:?} produced nothing", rule.kind);
            assert!(result.iter().all(|o| range.contains(o.date())));
        }
    }

    #[test]
    fn test_window_at_end_of_date_range() {
        let range = window(NaiveDate::MAX - chrono::Duration::days(40), NaiveDate::MAX);
        let rules = [
            RecurrenceRule::yearly(),
            RecurrenceRule::monthly(),
            RecurrenceRule::weekly(),
            RecurrenceRule::daily(&[Weekday::Mon, Weekday::Thu]),
        ];

        for rule in rules {
            let template = recurring(make_datetime(2024, 1, 1, 9, 0), rule);
            let result = expand(&template, range).unwrap();
            assert!(result.iter().all(|o| range.contains(o.date())));
        }

        let weekly = recurring(make_datetime(2024, 1, 1, 9, 0), RecurrenceRule::weekly());
        let last_week = window(NaiveDate::MAX - chrono::Duration::days(6), NaiveDate::MAX);
        let result = expand(&weekly, last_week).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].starts_on.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_window_at_start_of_date_range() {
        // The anchor filter drops everything, but stepping must not overflow.
        let range = window(NaiveDate::MIN, NaiveDate::MIN + chrono::Duration::days(20));
        for rule in [RecurrenceRule::monthly(), RecurrenceRule::weekly()] {
            let template = recurring(make_datetime(2024, 1, 3, 9, 0), rule);
            assert_eq!(expand(&template, range), Ok(Vec::new()));
        }
    }

    #[test]
    fn test_monthly_stops_at_end_of_date_range() {
        let range = window(NaiveDate::MAX - chrono::Duration::days(60), NaiveDate::MAX);
        let template = recurring(make_datetime(2024, 1, 1, 9, 0), RecurrenceRule::monthly());
        let result = expand(&template, range).unwrap();

        let mut days = dates(&result);
        days.dedup();
        assert_eq!(days.len(), result.len());
        assert!(result.iter().all(|o| o.date().day() == 1));
    }

    #[test]
    fn test_non_recurring_template_is_rejected() {
        let template = TemplateEvent::new("alice", "Once", make_datetime(2024, 1, 1, 9, 0));
        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 1, 31)),
        );

        assert_eq!(
            result,
            Err(ExpandError::NotRecurring(template.id.to_string()))
        );
    }

    #[test]
    fn test_missing_rule_is_rejected() {
        let mut template = TemplateEvent::new("alice", "Broken", make_datetime(2024, 1, 1, 9, 0));
        template.is_recurring = true;

        let result = expand(
            &template,
            window(make_date(2024, 1, 1), make_date(2024, 1, 31)),
        );

        assert_eq!(
            result,
            Err(ExpandError::MissingRecurrence(template.id.to_string()))
        );
    }
}
