use maintbase::engine::policy::EffectivePolicy;
use maintbase::engine::rollover::{acknowledge_event, replacement_reset};

use super::support::{date, event};

#[test]
fn replacement_reset_installs_today_and_schedules_the_next_swap() {
    let policy = EffectivePolicy {
        lead_time_weeks: 4,
        battery_life_months: 24,
    };
    let reset = replacement_reset(&policy, date(2026, 8, 6)).expect("reset");
    assert_eq!(reset.install_date, date(2026, 8, 6));
    assert_eq!(reset.next_replacement_date, date(2028, 8, 6));
}

#[test]
fn replacement_reset_honors_the_group_lifecycle() {
    let policy = EffectivePolicy {
        lead_time_weeks: 4,
        battery_life_months: 36,
    };
    let reset = replacement_reset(&policy, date(2026, 1, 31)).expect("reset");
    assert_eq!(reset.next_replacement_date, date(2029, 1, 31));
}

#[test]
fn acknowledging_a_recurring_event_advances_one_period() {
    let e = event("e1", "Annual inspection", "2026-03-01", "ANNUALLY");
    let next = acknowledge_event(&e).expect("advance");
    assert_eq!(next, Some(date(2027, 3, 1)));
}

#[test]
fn acknowledging_a_one_off_event_yields_nothing_to_store() {
    let e = event("e1", "Handover audit", "2026-03-01", "ONCE");
    let next = acknowledge_event(&e).expect("advance");
    assert_eq!(next, None);
}

#[test]
fn acknowledging_an_event_with_a_bad_interval_fails() {
    let e = event("e1", "Mystery check", "2026-03-01", "WEEKLY");
    assert!(acknowledge_event(&e).is_err());
}
