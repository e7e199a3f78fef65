use serde::{Deserialize, Serialize};

use crate::query::{Chronological, Keyed, Queryable};

#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct Expense {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bank_account_id: Option<i64>,
}

/// Form output for creating or updating an expense. The owning user id is
/// attached by the caller, not the form.
#[derive(Clone, PartialEq, Debug)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl ExpenseDraft {
    pub fn into_expense(self, id: i64, user_id: i64) -> Expense {
        Expense {
            id,
            user_id,
            amount: self.amount,
            category: self.category,
            date: self.date,
            time: None,
            description: self.description,
            bank_account_id: None,
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct Income {
    pub id: i64,
    pub source: String,
    pub amount: f64,
    pub date: String,
    pub bank_account_id: i64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Clone, PartialEq, Debug)]
pub struct IncomeDraft {
    pub source: String,
    pub amount: f64,
    pub date: String,
    pub bank_account_id: i64,
    pub notes: String,
}

impl IncomeDraft {
    pub fn into_income(self, id: i64) -> Income {
        Income {
            id,
            source: self.source,
            amount: self.amount,
            date: self.date,
            bank_account_id: self.bank_account_id,
            notes: self.notes,
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct BankAccount {
    pub id: i64,
    pub user_id: i64,
    pub bank_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub account_type: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub balance: f64,
}

impl BankAccount {
    /// Preferred display label: alias when set, bank name otherwise.
    pub fn label(&self) -> &str {
        if self.alias.trim().is_empty() {
            &self.bank_name
        } else {
            &self.alias
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct BankAccountDraft {
    pub bank_name: String,
    pub routing_number: String,
    pub account_number: String,
    pub account_type: String,
    pub alias: String,
}

impl BankAccountDraft {
    pub fn into_account(self, id: i64, user_id: i64, balance: f64) -> BankAccount {
        BankAccount {
            id,
            user_id,
            bank_name: self.bank_name,
            routing_number: self.routing_number,
            account_number: self.account_number,
            account_type: self.account_type,
            alias: self.alias,
            balance,
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: u32,
}

#[derive(Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
}

/// Server-paginated expense listing.
#[derive(Clone, PartialEq, Deserialize)]
pub struct ExpensePage {
    pub expenses: Vec<Expense>,
    pub total: u32,
    pub per_page: u32,
}

impl ExpensePage {
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 1;
        }
        ((self.total + self.per_page - 1) / self.per_page).max(1)
    }
}

pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "🍔",
        "Travel" => "✈️",
        "Bills" => "💡",
        _ => "💸",
    }
}

pub const EXPENSE_CATEGORIES: [&str; 4] = ["Food", "Travel", "Bills", "Other"];

impl Keyed for Expense {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Chronological for Expense {
    fn date(&self) -> &str {
        &self.date
    }

    fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }
}

impl Queryable for Expense {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.category, &self.description]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn account_id(&self) -> Option<i64> {
        self.bank_account_id
    }
}

impl Keyed for Income {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Chronological for Income {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Queryable for Income {
    fn text_fields(&self) -> Vec<&str> {
        vec![&self.source, &self.notes]
    }

    fn account_id(&self) -> Option<i64> {
        Some(self.bank_account_id)
    }
}

impl Keyed for BankAccount {
    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_decodes_backend_json() {
        let raw = r#"{
            "id": 7,
            "user_id": 1,
            "amount": 42.5,
            "category": "Food",
            "date": "2024-03-01",
            "description": "groceries"
        }"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.id, 7);
        assert_eq!(expense.amount, 42.5);
        assert_eq!(expense.time, None);
        assert_eq!(expense.bank_account_id, None);
    }

    #[test]
    fn login_response_decodes() {
        let raw = r#"{"access_token":"t","user_id":1}"#;
        let resp: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.access_token, "t");
        assert_eq!(resp.user_id, 1);
    }

    #[test]
    fn income_notes_default_to_empty() {
        let raw = r#"{"id":3,"source":"Salary","amount":1000.0,"date":"2024-01-15","bank_account_id":2}"#;
        let income: Income = serde_json::from_str(raw).unwrap();
        assert_eq!(income.notes, "");
    }

    #[test]
    fn expense_page_rounds_total_pages_up() {
        let page = ExpensePage {
            expenses: vec![],
            total: 21,
            per_page: 10,
        };
        assert_eq!(page.total_pages(), 3);

        let exact = ExpensePage {
            expenses: vec![],
            total: 20,
            per_page: 10,
        };
        assert_eq!(exact.total_pages(), 2);

        let empty = ExpensePage {
            expenses: vec![],
            total: 0,
            per_page: 10,
        };
        assert_eq!(empty.total_pages(), 1);
    }

    #[test]
    fn category_icons_cover_known_and_fallback() {
        assert_eq!(category_icon("Food"), "🍔");
        assert_eq!(category_icon("Rent"), "💸");
    }

    #[test]
    fn account_label_prefers_alias() {
        let account = BankAccount {
            id: 1,
            user_id: 1,
            bank_name: "First National".to_string(),
            routing_number: "123456789".to_string(),
            account_number: "12345678".to_string(),
            account_type: "checking".to_string(),
            alias: "Emergency fund".to_string(),
            balance: 0.0,
        };
        assert_eq!(account.label(), "Emergency fund");
    }
}
