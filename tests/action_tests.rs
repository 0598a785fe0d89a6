//! Tests for the workflow action contract

mod common;

use attended_checkin::action::{
    ActionAttributes, ActionComponent, ActionContext, CheckInStateProvider,
    SelectByMultipleAttended,
};
use attended_checkin::models::*;
use attended_checkin::SelectorConfig;
use common::*;

fn action_for(harness: &Harness) -> SelectByMultipleAttended {
    SelectByMultipleAttended::new(harness.store.clone(), harness.occupancy.clone())
}

fn balanced_pair() -> Person {
    Person::selected(1).with_group_type(
        CandidateGroupType::new(1)
            .with_group(CandidateGroup::new(10).with_location(room(100, &[1])))
            .with_group(CandidateGroup::new(11).with_location(room(110, &[1]))),
    )
}

#[test]
fn test_missing_state_fails_without_selecting() {
    let harness = Harness::new(Vec::new());
    let mut entity: Option<CheckInState> = None;

    let result = action_for(&harness).execute(&mut entity, &ActionContext::default());

    assert!(!result.success);
    assert_eq!(result.error_messages.len(), 1);
    assert!(result.error_messages[0].starts_with("Check-in state unavailable"));
    assert!(result.summary.is_none());
}

#[test]
fn test_executes_against_attached_state() {
    let harness = Harness::new(vec![attendance(1, 1, 10, 100, 1, at(last_sunday(), 9))]);
    let mut entity = Some(session(vec![balanced_pair()]));
    let context = ActionContext::default().with_today(today());

    let result = action_for(&harness).execute(&mut entity, &context);

    assert!(result.success);
    assert!(result.error_messages.is_empty());
    assert_eq!(result.summary.map(|s| s.selections.len()), Some(1));

    let state = entity.check_in_state().unwrap();
    assert!(state.families[0].people[0].group_types[0].groups[0].selected);
}

#[test]
fn test_string_attribute_enables_group_balancing() {
    let harness = Harness::new(vec![attendance(1, 1, 10, 100, 1, at(last_sunday(), 9))])
        .with_counts(&[(100, 5), (110, 1)]);
    let attributes = ActionAttributes::empty().with("RoomBalanceByGroup", "True");
    let context = ActionContext::new(attributes).with_today(today());
    let mut state = session(vec![balanced_pair()]);

    let result = action_for(&harness).execute(&mut state, &context);

    assert!(result.success);
    let groups = &state.families[0].people[0].group_types[0].groups;
    assert!(!groups[0].selected);
    assert!(groups[1].selected);
}

#[test]
fn test_blank_attribute_falls_back_to_config() {
    let harness = Harness::new(vec![attendance(1, 1, 10, 100, 1, at(last_sunday(), 9))])
        .with_counts(&[(100, 5), (110, 1)]);
    let action = action_for(&harness).with_config(SelectorConfig {
        room_balance_by_group: true,
        ..SelectorConfig::default()
    })
    .unwrap();
    let attributes = ActionAttributes::empty().with("RoomBalanceByGroup", "");
    let context = ActionContext::new(attributes).with_today(today());
    let mut state = session(vec![balanced_pair()]);

    action.execute(&mut state, &context);

    assert!(state.families[0].people[0].group_types[0].groups[1].selected);
}

#[test]
fn test_configured_lookback_is_applied() {
    let harness = Harness::new(vec![attendance(1, 1, 10, 100, 1, at(day(2026, 7, 5), 9))]);
    let action = action_for(&harness).with_config(SelectorConfig {
        lookback_months: 2,
        ..SelectorConfig::default()
    })
    .unwrap();
    let context = ActionContext::default().with_today(today());
    let mut state = session(vec![balanced_pair()]);

    let result = action.execute(&mut state, &context);

    assert!(result.success);
    assert_eq!(result.summary.map(|s| s.people_without_history), Some(1));
    assert!(!state.families[0].people[0].has_selection());
}

#[test]
fn test_zero_month_lookback_config_is_rejected() {
    let harness = Harness::new(Vec::new());

    let error = action_for(&harness)
        .with_config(SelectorConfig {
            lookback_months: 0,
            ..SelectorConfig::default()
        })
        .unwrap_err();

    assert!(error.to_string().contains("lookback_months"));
}

#[test]
fn test_result_serializes_for_host() {
    let harness = Harness::new(Vec::new());
    let mut entity: Option<CheckInState> = None;

    let result = action_for(&harness).execute(&mut entity, &ActionContext::default());
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["success"], serde_json::json!(false));
    assert!(json["error_messages"].is_array());
}
