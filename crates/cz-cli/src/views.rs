//! Row types shared by list views and text reports.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

use cz_core::Amount;
use cz_core::entities::{
    AdminAccount, AuditLogEntry, Deduction, Event, ExpenseCategory, PaymentRecord,
};
use cz_core::wire::display_date;

use crate::output::TableRow;

/// `1500` as `1,500`. Fractions are kept as-is.
#[must_use]
pub fn grouped(amount: Amount) -> String {
    let text = amount.to_string();
    let (sign, unsigned) = text
        .strip_prefix('-')
        .map_or(("", text.as_str()), |rest| ("-", rest));
    let (whole, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(w, f)| (w, Some(f)));

    let mut out = String::with_capacity(text.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    match fraction {
        Some(fraction) => format!("{sign}{out}.{fraction}"),
        None => format!("{sign}{out}"),
    }
}

/// A grouped amount with the configured currency symbol in front.
#[must_use]
pub fn money(symbol: &str, amount: Amount) -> String {
    if symbol.is_empty() {
        grouped(amount)
    } else {
        format!("{symbol} {}", grouped(amount))
    }
}

#[must_use]
pub fn local_time(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

const fn active_label(active: bool) -> &'static str {
    if active { "active" } else { "inactive" }
}

#[derive(Debug, Serialize)]
pub struct CollectionRow {
    pub index: usize,
    pub id: String,
    pub date: Option<NaiveDate>,
    pub name: String,
    pub amount: Amount,
    pub method: String,
    pub status: String,
}

impl CollectionRow {
    #[must_use]
    pub fn numbered(records: &[&PaymentRecord]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(idx, record)| Self {
                index: idx + 1,
                id: record.id.clone(),
                date: record.date,
                name: record.name.clone(),
                amount: record.amount,
                method: record.payment_method.to_string(),
                status: record.status.label().to_string(),
            })
            .collect()
    }
}

impl TableRow for CollectionRow {
    fn headers() -> &'static [&'static str] {
        &["#", "Date", "Name", "Amount", "Method", "Status", "ID"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            display_date(self.date),
            self.name.clone(),
            grouped(self.amount),
            self.method.clone(),
            self.status.clone(),
            self.id.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct DeductionRow {
    pub index: usize,
    pub id: String,
    pub date: Option<NaiveDate>,
    pub name: String,
    pub category: String,
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DeductionRow {
    #[must_use]
    pub fn numbered(deductions: &[Deduction]) -> Vec<Self> {
        deductions
            .iter()
            .enumerate()
            .map(|(idx, deduction)| Self {
                index: idx + 1,
                id: deduction.id.clone(),
                date: deduction.date,
                name: deduction.name.clone(),
                category: deduction.category.clone(),
                amount: deduction.amount,
                description: deduction.description.clone(),
            })
            .collect()
    }
}

impl TableRow for DeductionRow {
    fn headers() -> &'static [&'static str] {
        &["#", "Date", "Expense Name", "Category", "Amount", "ID"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            display_date(self.date),
            self.name.clone(),
            self.category.clone(),
            grouped(self.amount),
            self.id.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct EventRow {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    /// Marks the event stored in the session.
    pub selected: bool,
}

impl EventRow {
    #[must_use]
    pub fn list(events: &[Event], selected: Option<&str>) -> Vec<Self> {
        events
            .iter()
            .map(|event| Self {
                id: event.id.clone(),
                name: event.name.clone(),
                is_active: event.is_active,
                selected: selected == Some(event.id.as_str()),
            })
            .collect()
    }
}

impl TableRow for EventRow {
    fn headers() -> &'static [&'static str] {
        &["", "ID", "Name", "Status"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            (if self.selected { "*" } else { "" }).to_string(),
            self.id.clone(),
            self.name.clone(),
            active_label(self.is_active).to_string(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
}

impl CategoryRow {
    /// Event names come from the populated reference, else from `events`.
    #[must_use]
    pub fn list(categories: &[ExpenseCategory], events: &[Event]) -> Vec<Self> {
        categories
            .iter()
            .map(|category| {
                let event_id = category.event.as_ref().map(|e| e.id.clone());
                let event_name = category
                    .event
                    .as_ref()
                    .and_then(|e| e.name.clone())
                    .or_else(|| {
                        event_id
                            .as_deref()
                            .and_then(|id| Event::find(events, id))
                            .map(|e| e.name.clone())
                    });
                Self {
                    id: category.id.clone(),
                    name: category.name.clone(),
                    event_id,
                    event_name,
                }
            })
            .collect()
    }
}

impl TableRow for CategoryRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Event"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.event_name
                .clone()
                .or_else(|| self.event_id.clone())
                .unwrap_or_else(|| "-".to_string()),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct AdminRow {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    pub is_active: bool,
    pub assigned_event_ids: Vec<String>,
    pub assigned_events: String,
}

impl AdminRow {
    /// Assignments that arrive as bare ids are named from `events`.
    #[must_use]
    pub fn list(admins: &[AdminAccount], events: &[Event]) -> Vec<Self> {
        admins
            .iter()
            .map(|admin| {
                let names = if admin.assigned_events.iter().all(|e| e.name.is_some()) {
                    admin.assigned_event_names()
                } else {
                    let names = admin
                        .assigned_events
                        .iter()
                        .map(|e| {
                            e.name.clone().unwrap_or_else(|| {
                                Event::find(events, &e.id)
                                    .map_or_else(|| e.id.clone(), |ev| ev.name.clone())
                            })
                        })
                        .collect::<Vec<_>>();
                    names.join(", ")
                };
                Self {
                    id: admin.id.clone(),
                    username: admin.username.clone(),
                    email: admin.email.clone(),
                    is_active: admin.is_active,
                    assigned_event_ids: admin.assigned_event_ids(),
                    assigned_events: names,
                }
            })
            .collect()
    }
}

impl TableRow for AdminRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "Username", "Email", "Status", "Assigned Events"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.username.clone(),
            self.email.clone().unwrap_or_else(|| "-".to_string()),
            active_label(self.is_active).to_string(),
            self.assigned_events.clone(),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct AuditRow {
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub action: String,
    pub target: String,
    pub details: String,
}

impl AuditRow {
    #[must_use]
    pub fn list(entries: &[AuditLogEntry]) -> Vec<Self> {
        entries
            .iter()
            .map(|entry| Self {
                timestamp: entry.timestamp,
                user: entry.performed_by().to_string(),
                action: entry.action.clone(),
                target: entry.target.clone(),
                details: entry.details_text(),
            })
            .collect()
    }
}

impl TableRow for AuditRow {
    fn headers() -> &'static [&'static str] {
        &["Time", "User", "Action", "Target", "Details"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            local_time(self.timestamp),
            self.user.clone(),
            self.action.clone(),
            self.target.clone(),
            self.details.clone(),
        ]
    }
}
