//! Tests for the query predicate evaluator.
//!
//! Covers:
//! - Empty term matches everything
//! - Case-insensitive multi-field OR semantics
//! - Constraint admit/reject per facet
//! - Calendar-month date windows
//! - AND composition of all facets

use super::*;
use crate::model::{Business, BusinessKind, BusinessStatus, User, UserStatus};
use chrono::TimeZone;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 6, 12, 0, 0).unwrap()
}

fn user_query() -> FilterQuery<UserStatus, crate::model::NoKind> {
    FilterQuery::default()
}

// ===== Term matching =====

#[test]
fn empty_term_matches_every_record() {
    let user = User::sample("u1", "Asha Rao", UserStatus::Active);
    assert!(matches(&user, &user_query(), now()));
}

#[test]
fn whitespace_term_is_treated_as_empty() {
    let user = User::sample("u1", "Asha Rao", UserStatus::Active);
    let mut query = user_query();
    query.term = "   ".to_string();
    assert!(matches(&user, &query, now()));
}

#[test]
fn term_matches_case_insensitively() {
    let user = User::sample("u1", "Asha Rao", UserStatus::Active);
    let mut query = user_query();
    query.term = "ASHA".to_string();
    assert!(matches(&user, &query, now()));
}

#[test]
fn term_matches_any_field_or_semantics() {
    let user = User::sample("u1", "Asha Rao", UserStatus::Active);
    // Email matches even though the name does not contain the term.
    let mut query = user_query();
    query.term = "asha.rao@example".to_string();
    assert!(matches(&user, &query, now()));
}

#[test]
fn term_with_no_field_match_rejects() {
    let user = User::sample("u1", "Asha Rao", UserStatus::Active);
    let mut query = user_query();
    query.term = "priya".to_string();
    assert!(!matches(&user, &query, now()));
}

#[test]
fn missing_optional_fields_never_panic() {
    // Business with every optional field absent.
    let biz = Business::sample("b1", "Quiet Shop", BusinessStatus::Pending);
    let mut query: FilterQuery<BusinessStatus, BusinessKind> = FilterQuery::default();
    query.term = "quiet".to_string();
    assert!(matches(&biz, &query, now()));
}

// ===== Status and kind facets =====

#[test]
fn status_constraint_pins_exactly_one_value() {
    let blocked = User::sample("u1", "Asha Rao", UserStatus::Blocked);
    let active = User::sample("u2", "Ben Dsouza", UserStatus::Active);
    let mut query = user_query();
    query.status = Constraint::Only(UserStatus::Blocked);
    assert!(matches(&blocked, &query, now()));
    assert!(!matches(&active, &query, now()));
}

#[test]
fn kind_constraint_filters_business_type() {
    let mut product = Business::sample("b1", "Gadget Hut", BusinessStatus::Active);
    product.kind = BusinessKind::Product;
    let mut service = Business::sample("b2", "Spa Corner", BusinessStatus::Active);
    service.kind = BusinessKind::Service;

    let mut query: FilterQuery<BusinessStatus, BusinessKind> = FilterQuery::default();
    query.kind = Constraint::Only(BusinessKind::Service);
    assert!(matches(&service, &query, now()));
    assert!(!matches(&product, &query, now()));
}

// ===== Date windows =====

#[test]
fn past_week_cutoff_is_seven_days() {
    let cutoff = DateWindow::PastWeek.cutoff(now()).expect("cutoff");
    assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 10, 30, 12, 0, 0).unwrap());
}

#[test]
fn past_month_subtracts_a_calendar_month() {
    let cutoff = DateWindow::PastMonth.cutoff(now()).expect("cutoff");
    assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 10, 6, 12, 0, 0).unwrap());
}

#[test]
fn month_arithmetic_clamps_to_month_end() {
    // One calendar month before Mar 31 is Feb 29 (leap year), not "minus 30 days".
    let end_of_march = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
    let cutoff = DateWindow::PastMonth.cutoff(end_of_march).expect("cutoff");
    assert_eq!(cutoff, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
}

#[test]
fn any_time_has_no_cutoff() {
    assert_eq!(DateWindow::AnyTime.cutoff(now()), None);
}

#[test]
fn record_on_cutoff_boundary_passes() {
    let mut user = User::sample("u1", "Asha Rao", UserStatus::Active);
    user.joined_at = Utc.with_ymd_and_hms(2024, 10, 30, 12, 0, 0).unwrap();
    let mut query = user_query();
    query.window = DateWindow::PastWeek;
    assert!(matches(&user, &query, now()));
}

#[test]
fn record_before_cutoff_rejects() {
    let mut user = User::sample("u1", "Asha Rao", UserStatus::Active);
    user.joined_at = Utc.with_ymd_and_hms(2024, 10, 30, 11, 59, 59).unwrap();
    let mut query = user_query();
    query.window = DateWindow::PastWeek;
    assert!(!matches(&user, &query, now()));
}

// ===== Composition =====

#[test]
fn predicate_is_the_and_of_all_facets() {
    let mut user = User::sample("u1", "Asha Rao", UserStatus::Active);
    user.joined_at = now() - Duration::days(2);

    let mut query = user_query();
    query.term = "asha".to_string();
    query.status = Constraint::Only(UserStatus::Active);
    query.window = DateWindow::PastWeek;
    assert!(matches(&user, &query, now()));

    // Flipping any single facet makes the whole predicate false.
    let mut wrong_status = query.clone();
    wrong_status.status = Constraint::Only(UserStatus::Blocked);
    assert!(!matches(&user, &wrong_status, now()));

    let mut wrong_term = query.clone();
    wrong_term.term = "nobody".to_string();
    assert!(!matches(&user, &wrong_term, now()));

    user.joined_at = now() - Duration::days(30);
    assert!(!matches(&user, &query, now()));
}

#[test]
fn default_query_is_empty() {
    assert!(user_query().is_empty());
    let mut query = user_query();
    query.window = DateWindow::PastQuarter;
    assert!(!query.is_empty());
}

#[test]
fn evaluation_is_pure_and_repeatable() {
    // Same inputs, same output: idempotence over whole collections is
    // exercised in tests/property_tests.rs.
    let user = User::sample("u1", "Asha Rao", UserStatus::Active);
    let mut query = user_query();
    query.term = "rao".to_string();
    let first = matches(&user, &query, now());
    let second = matches(&user, &query, now());
    assert_eq!(first, second);
}
