//! Aggregation properties checked against backend-shaped JSON.

use cz_core::Amount;
use cz_core::entities::{Deduction, PaymentRecord};
use cz_core::ledger::{
    CollectionTotals, CollectionView, DashboardSummary, MinAmount, deduction_total,
    filter_by_min_amount,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn people(value: serde_json::Value) -> Vec<PaymentRecord> {
    serde_json::from_value(value).expect("people should decode")
}

fn deductions(value: serde_json::Value) -> Vec<Deduction> {
    serde_json::from_value(value).expect("deductions should decode")
}

fn mixed_people() -> Vec<PaymentRecord> {
    people(json!([
        {"_id": "1", "name": "A", "amount": 100, "status": "Paid"},
        {"_id": "2", "name": "B", "amount": 50, "status": "Unpaid"},
        {"_id": "3", "name": "C", "amount": 20, "status": "Pending"}
    ]))
}

#[test]
fn reference_example_totals() {
    let totals = CollectionTotals::from_records(&mixed_people());
    assert_eq!(
        totals,
        CollectionTotals {
            total_cash: Amount::from(100),
            total_credit: Amount::from(50),
            total_pending: Amount::from(20),
            count: 3,
        }
    );
}

#[test]
fn credit_status_with_credit_flag_is_counted_once() {
    let records = people(json!([
        {"_id": "1", "name": "A", "amount": 70, "status": "Credit", "credit": true}
    ]));
    let totals = CollectionTotals::from_records(&records);
    assert_eq!(totals.total_credit, Amount::from(70));
    assert_eq!(totals.total_cash, Amount::ZERO);
    assert_eq!(totals.total_pending, Amount::ZERO);
}

#[test]
fn flagged_records_never_reach_cash_or_pending() {
    let records = people(json!([
        {"_id": "1", "name": "A", "amount": 10, "status": "Paid", "credit": true},
        {"_id": "2", "name": "B", "amount": 20, "status": "Pending", "credit": true},
        {"_id": "3", "name": "C", "amount": 30, "credit": "yes"}
    ]));
    let totals = CollectionTotals::from_records(&records);
    assert_eq!(totals.total_credit, Amount::from(60));
    assert_eq!(totals.total_cash, Amount::ZERO);
    assert_eq!(totals.total_pending, Amount::ZERO);
}

#[test]
fn pools_never_exceed_the_grand_total() {
    let records = people(json!([
        {"_id": "1", "name": "A", "amount": 10, "status": "Paid"},
        {"_id": "2", "name": "B", "amount": 20, "status": "Credit", "credit": true},
        {"_id": "3", "name": "C", "amount": 30, "status": "Unpaid", "credit": true},
        {"_id": "4", "name": "D", "amount": 40, "status": "Pending"},
        {"_id": "5", "name": "E", "amount": 50, "status": "Pending", "credit": 1},
        {"_id": "6", "name": "F", "amount": 60}
    ]));
    let totals = CollectionTotals::from_records(&records);
    let grand: Amount = records.iter().map(|r| r.amount).sum();
    let pooled = totals.total_cash + totals.total_credit + totals.total_pending;
    assert_eq!(pooled, Amount::from(150));
    assert!(pooled <= grand);
    assert_eq!(totals.count, 6);
}

#[test]
fn non_numeric_amounts_coerce_to_zero() {
    let records = people(json!([
        {"_id": "1", "name": "A", "amount": "abc", "status": "Paid"},
        {"_id": "2", "name": "B", "status": "Paid"},
        {"_id": "3", "name": "C", "amount": "25", "status": "Paid"}
    ]));
    let totals = CollectionTotals::from_records(&records);
    assert_eq!(totals.total_cash, Amount::from(25));
    assert_eq!(totals.count, 3);
}

#[test]
fn deduction_example_total() {
    let items = deductions(json!([
        {"_id": "d1", "name": "Cups", "amount": 30},
        {"_id": "d2", "name": "Junk", "amount": "abc"}
    ]));
    assert_eq!(deduction_total(&items), Amount::from(30));
}

#[test]
fn empty_inputs_balance_to_zero() {
    let summary = DashboardSummary::from_records(&[], &[]);
    assert_eq!(summary, DashboardSummary::default());
    assert_eq!(summary.balance, Amount::ZERO);
}

#[test]
fn dashboard_balance_is_paid_minus_deductions() {
    let items = deductions(json!([
        {"_id": "d1", "name": "Cups", "amount": 30},
        {"_id": "d2", "name": "Banner", "amount": "45.5"}
    ]));
    let summary = DashboardSummary::from_records(&mixed_people(), &items);
    assert_eq!(summary.total_collections_count, 3);
    assert_eq!(summary.total_paid, Amount::from(100));
    assert_eq!(summary.total_due, Amount::from(50));
    assert_eq!(summary.total_pending, Amount::from(20));
    assert_eq!(summary.total_deductions_count, 2);
    assert_eq!(summary.total_deductions, Amount::coerce("75.5"));
    assert_eq!(summary.balance, Amount::coerce("24.5"));
}

#[test]
fn dashboard_agrees_with_collection_view() {
    let records = mixed_people();
    let dashboard = DashboardSummary::from_records(&records, &[]);
    let collection = CollectionTotals::from_records(&records);
    assert_eq!(dashboard.total_paid, collection.total_cash);
    assert_eq!(dashboard.total_due, collection.total_credit);
    assert_eq!(dashboard.total_pending, collection.total_pending);
}

#[test]
fn zero_threshold_keeps_everything() {
    let records = people(json!([
        {"_id": "1", "name": "A", "amount": 0, "status": "Paid"},
        {"_id": "2", "name": "B", "amount": "abc", "status": "Paid"},
        {"_id": "3", "name": "C", "amount": 5, "status": "Paid"}
    ]));
    let kept = filter_by_min_amount(&records, MinAmount::default());
    assert_eq!(kept.len(), records.len());
}

#[test]
fn threshold_above_all_amounts_keeps_nothing() {
    let records = mixed_people();
    let threshold = MinAmount::new(Amount::from(101)).expect("valid threshold");
    assert!(filter_by_min_amount(&records, threshold).is_empty());
}

#[test]
fn view_rows_are_filtered_but_totals_are_not() {
    let records = mixed_people();
    let view = CollectionView::build(&records, MinAmount::new(Amount::from(30)).expect("valid"));
    let names: Vec<&str> = view.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(view.totals.total_pending, Amount::from(20));
    assert_eq!(view.totals.count, 3);
}

#[test]
fn huge_amounts_saturate_instead_of_aborting() {
    let records = people(json!([
        {"_id": "a", "name": "A", "amount": 5e28, "status": "Paid"},
        {"_id": "b", "name": "B", "amount": 5e28, "status": "Paid"}
    ]));
    let items = deductions(json!([{"_id": "d1", "name": "Hall", "amount": -5e28}]));
    let summary = DashboardSummary::from_records(&records, &items);
    assert_eq!(summary.total_paid, Amount::MAX);
    assert_eq!(summary.balance, Amount::MAX);
}
