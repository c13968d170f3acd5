use maintbase::engine::recurrence::RecurrenceInterval;

use super::support::date;

#[test]
fn annual_occurrences_across_three_years() {
    let dates: Vec<_> = RecurrenceInterval::Annually
        .occurrences_in_range(date(2024, 3, 1), date(2024, 1, 1), date(2026, 12, 31))
        .collect();
    assert_eq!(
        dates,
        vec![date(2024, 3, 1), date(2025, 3, 1), date(2026, 3, 1)]
    );
}

#[test]
fn monthly_over_a_calendar_year_yields_twelve() {
    let dates: Vec<_> = RecurrenceInterval::Monthly
        .occurrences_in_range(date(2025, 1, 15), date(2025, 1, 1), date(2025, 12, 31))
        .collect();
    assert_eq!(dates.len(), 12);
    assert_eq!(dates[0], date(2025, 1, 15));
    assert_eq!(dates[11], date(2025, 12, 15));
}

#[test]
fn once_yields_anchor_only_when_in_range() {
    let inside: Vec<_> = RecurrenceInterval::Once
        .occurrences_in_range(date(2025, 6, 1), date(2025, 1, 1), date(2025, 12, 31))
        .collect();
    assert_eq!(inside, vec![date(2025, 6, 1)]);

    let outside: Vec<_> = RecurrenceInterval::Once
        .occurrences_in_range(date(2026, 6, 1), date(2025, 1, 1), date(2025, 12, 31))
        .collect();
    assert!(outside.is_empty());
}

#[test]
fn anchor_before_range_skips_forward() {
    let dates: Vec<_> = RecurrenceInterval::Monthly
        .occurrences_in_range(date(2024, 1, 10), date(2024, 6, 1), date(2024, 8, 31))
        .collect();
    assert_eq!(
        dates,
        vec![date(2024, 6, 10), date(2024, 7, 10), date(2024, 8, 10)]
    );
}

#[test]
fn anchor_past_range_yields_nothing() {
    let dates: Vec<_> = RecurrenceInterval::Quarterly
        .occurrences_in_range(date(2027, 1, 1), date(2025, 1, 1), date(2025, 12, 31))
        .collect();
    assert!(dates.is_empty());
}

#[test]
fn month_end_anchors_clamp() {
    assert_eq!(
        RecurrenceInterval::Monthly.advance(date(2024, 1, 31)),
        Some(date(2024, 2, 29))
    );
    assert_eq!(
        RecurrenceInterval::Monthly.advance(date(2025, 1, 31)),
        Some(date(2025, 2, 28))
    );
}

#[test]
fn period_lengths_match_intervals() {
    let cases = [
        (RecurrenceInterval::Monthly, 1),
        (RecurrenceInterval::Quarterly, 3),
        (RecurrenceInterval::SemiAnnually, 6),
        (RecurrenceInterval::Annually, 12),
        (RecurrenceInterval::BiAnnually, 24),
        (RecurrenceInterval::Quadrennially, 48),
    ];
    for (interval, months) in cases {
        assert_eq!(interval.period_months(), Some(months));
        assert!(interval.is_recurring());
    }
    assert_eq!(RecurrenceInterval::Once.period_months(), None);
    assert!(!RecurrenceInterval::Once.is_recurring());
}

#[test]
fn wire_strings_round_trip_through_from_str() {
    for raw in [
        "ONCE",
        "MONTHLY",
        "QUARTERLY",
        "SEMI_ANNUALLY",
        "ANNUALLY",
        "BI_ANNUALLY",
        "QUADRENNIALLY",
    ] {
        let interval: RecurrenceInterval = raw.parse().expect("known interval");
        assert_eq!(interval.as_str(), raw);
    }
}

#[test]
fn unknown_interval_fails_fast() {
    let err = "FORTNIGHTLY".parse::<RecurrenceInterval>().unwrap_err();
    assert!(err.to_string().contains("FORTNIGHTLY"));
}

#[test]
fn expansion_is_restartable() {
    let build = || {
        RecurrenceInterval::Quarterly
            .occurrences_in_range(date(2025, 2, 1), date(2025, 1, 1), date(2026, 12, 31))
            .collect::<Vec<_>>()
    };
    assert_eq!(build(), build());
}
