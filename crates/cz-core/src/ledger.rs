//! Collection and deduction aggregation.
//!
//! Every figure the console shows is a reduction over the records fetched for
//! one event. Records are pooled by their normalized [`PaymentStatus`], so a
//! record lands in at most one of cash, due, or pending.
//!
//! [`PaymentStatus`]: crate::enums::PaymentStatus

use serde::Serialize;

use crate::amount::Amount;
use crate::entities::{Deduction, PaymentRecord};
use crate::enums::CashPool;
use crate::errors::CoreError;

/// Totals for the collection view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionTotals {
    /// Realized cash (status Paid, no credit flag).
    pub total_cash: Amount,
    /// Money owed (Credit, Unpaid, or legacy credit flag).
    pub total_credit: Amount,
    pub total_pending: Amount,
    /// Number of records, including ones that fall in no pool.
    pub count: usize,
}

impl CollectionTotals {
    #[must_use]
    pub fn from_records(records: &[PaymentRecord]) -> Self {
        let mut totals = Self {
            count: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.status.pool() {
                Some(CashPool::Cash) => totals.total_cash += record.amount,
                Some(CashPool::Due) => totals.total_credit += record.amount,
                Some(CashPool::Pending) => totals.total_pending += record.amount,
                None => {}
            }
        }
        totals
    }
}

/// Sum of all deduction amounts.
#[must_use]
pub fn deduction_total(deductions: &[Deduction]) -> Amount {
    deductions.iter().map(|d| d.amount).sum()
}

/// Totals for the deduction view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeductionSummary {
    /// Realized cash of the event's collections.
    pub total_collection: Amount,
    pub total_deductions: Amount,
    pub count: usize,
    /// Cash left after expenses. Credit and pending pools are not touched.
    pub balance: Amount,
}

impl DeductionSummary {
    #[must_use]
    pub fn compute(collection_cash: Amount, deductions: &[Deduction]) -> Self {
        let total_deductions = deduction_total(deductions);
        Self {
            total_collection: collection_cash,
            total_deductions,
            count: deductions.len(),
            balance: collection_cash - total_deductions,
        }
    }
}

/// Spend within one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
    pub count: usize,
}

/// Per-category totals, in order of first appearance.
#[must_use]
pub fn category_breakdown(deductions: &[Deduction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for deduction in deductions {
        if let Some(entry) = totals
            .iter_mut()
            .find(|entry| entry.category == deduction.category)
        {
            entry.total += deduction.amount;
            entry.count += 1;
        } else {
            totals.push(CategoryTotal {
                category: deduction.category.clone(),
                total: deduction.amount,
                count: 1,
            });
        }
    }
    totals
}

/// Balance summary for the dashboard, computed from raw records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_collections_count: usize,
    pub total_paid: Amount,
    pub total_due: Amount,
    pub total_pending: Amount,
    pub total_deductions_count: usize,
    pub total_deductions: Amount,
    pub balance: Amount,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_records(people: &[PaymentRecord], deductions: &[Deduction]) -> Self {
        let collections = CollectionTotals::from_records(people);
        let total_deductions = deduction_total(deductions);
        Self {
            total_collections_count: collections.count,
            total_paid: collections.total_cash,
            total_due: collections.total_credit,
            total_pending: collections.total_pending,
            total_deductions_count: deductions.len(),
            total_deductions,
            balance: collections.total_cash - total_deductions,
        }
    }
}

/// Minimum-amount threshold for the collection view. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MinAmount(Amount);

impl MinAmount {
    pub fn new(threshold: Amount) -> Result<Self, CoreError> {
        if threshold.is_negative() {
            return Err(CoreError::Validation(format!(
                "minimum amount must not be negative (got {threshold})"
            )));
        }
        Ok(Self(threshold))
    }

    #[must_use]
    pub const fn value(self) -> Amount {
        self.0
    }
}

/// Records with `amount >= threshold`, as a borrowed view over the fetched set.
#[must_use]
pub fn filter_by_min_amount(records: &[PaymentRecord], threshold: MinAmount) -> Vec<&PaymentRecord> {
    records
        .iter()
        .filter(|record| record.amount >= threshold.value())
        .collect()
}

/// What the collection view renders: totals over every record, rows filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView<'a> {
    pub totals: CollectionTotals,
    pub min_amount: MinAmount,
    pub rows: Vec<&'a PaymentRecord>,
}

impl<'a> CollectionView<'a> {
    #[must_use]
    pub fn build(records: &'a [PaymentRecord], min_amount: MinAmount) -> Self {
        Self {
            totals: CollectionTotals::from_records(records),
            min_amount,
            rows: filter_by_min_amount(records, min_amount),
        }
    }
}
