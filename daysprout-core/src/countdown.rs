//! Countdown arithmetic: day distances, recurrence projection, and the
//! unit formatting behind the tap-to-cycle countdown display.
//!
//! Every function here is pure: "now" comes in as an argument, nothing
//! reads the clock, nothing mutates the event collection.

use chrono::{Duration, Months, NaiveDate, NaiveDateTime};

use crate::event::{CountdownMode, RepeatRule};

/// Signed day distance between a target and `today`.
///
/// Both sides are truncated to midnight before differencing, so the
/// time-of-day an event carries (for reminders) never shifts the count.
/// Positive means strictly in the future, zero means today.
pub fn days_difference(target: NaiveDateTime, today: NaiveDate) -> i64 {
    (target.date() - today).num_days()
}

/// Whether an event's target lies strictly before today's midnight.
pub fn is_past(target: NaiveDateTime, today: NaiveDate) -> bool {
    days_difference(target, today) < 0
}

/// Project a recurring event's anchor forward to its next occurrence.
///
/// Advances `base` one recurrence unit at a time until the candidate's
/// date is strictly after `today`. `RepeatRule::None` returns the anchor
/// unchanged. Month and year steps use calendar arithmetic, so day-of-month
/// overflow clamps (Jan 31 + 1 month lands on the last day of February).
pub fn next_occurrence(base: NaiveDateTime, rule: RepeatRule, today: NaiveDate) -> NaiveDateTime {
    if rule == RepeatRule::None {
        return base;
    }

    let mut next = base;
    while next.date() <= today {
        next = match advance_by_rule(next, rule) {
            Some(stepped) => stepped,
            // Date arithmetic overflow; bail out with what we have.
            None => return next,
        };
    }
    next
}

/// One recurrence step. `None` only on datetime overflow.
pub(crate) fn advance_by_rule(from: NaiveDateTime, rule: RepeatRule) -> Option<NaiveDateTime> {
    match rule {
        RepeatRule::None => Some(from),
        RepeatRule::Daily => from.checked_add_signed(Duration::days(1)),
        RepeatRule::Weekly => from.checked_add_signed(Duration::days(7)),
        RepeatRule::Monthly => from.checked_add_months(Months::new(1)),
        RepeatRule::Yearly => from.checked_add_months(Months::new(12)),
    }
}

/// Units the countdown display can cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMode {
    Days,
    MonthsDays,
    WeeksDays,
}

impl UnitMode {
    pub fn label(&self) -> &'static str {
        match self {
            UnitMode::Days => "days",
            UnitMode::MonthsDays => "months & days",
            UnitMode::WeeksDays => "weeks & days",
        }
    }
}

/// Which units a given distance may be displayed in.
///
/// The order is the cycle order of the display: days → months & days →
/// weeks & days, wrapping. Short distances only ever show plain days.
pub fn available_unit_modes(total_days: i64) -> Vec<UnitMode> {
    if total_days > 30 {
        vec![UnitMode::Days, UnitMode::MonthsDays, UnitMode::WeeksDays]
    } else if total_days > 7 {
        vec![UnitMode::Days, UnitMode::WeeksDays]
    } else {
        vec![UnitMode::Days]
    }
}

/// Render an absolute day distance in the requested unit.
///
/// `MonthsDays` uses a fixed 30-day month, not calendar months. Segment
/// omission is deliberately asymmetric between the two split modes: a zero
/// weeks segment never appears, and a zero days remainder is dropped
/// unless it is the only thing to show.
pub fn format_distance(total_days: i64, mode: UnitMode) -> String {
    let total = total_days.abs();

    match mode {
        UnitMode::Days => pluralize(total, "day"),
        UnitMode::MonthsDays => {
            let months = total / 30;
            let days = total % 30;
            let mut parts = Vec::new();
            if months > 0 {
                parts.push(pluralize(months, "month"));
            }
            if days > 0 || parts.is_empty() {
                parts.push(pluralize(days, "day"));
            }
            parts.join(" ")
        }
        UnitMode::WeeksDays => {
            let weeks = total / 7;
            let days = total % 7;
            let mut parts = Vec::new();
            if weeks > 0 {
                parts.push(pluralize(weeks, "week"));
            }
            if days > 0 {
                parts.push(pluralize(days, "day"));
            }
            if parts.is_empty() {
                parts.push(pluralize(0, "day"));
            }
            parts.join(" ")
        }
    }
}

/// "left" or "passed" for a signed, polarity-adjusted day count.
///
/// Backward mode inverts which sign reads as elapsed: a backward counter
/// with a non-negative count has already passed its anchor.
pub fn distance_suffix(mode: CountdownMode, display_days: i64) -> &'static str {
    match mode {
        CountdownMode::Backward => {
            if display_days >= 0 { "passed" } else { "left" }
        }
        CountdownMode::Forward => {
            if display_days >= 0 { "left" } else { "passed" }
        }
    }
}

fn pluralize(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}
