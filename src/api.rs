//! Typed client for the `/api/v1` backend. One attempt per call: no retry,
//! no timeout. Any non-2xx response surfaces as `ApiError::Status` carrying
//! the raw body text.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    BankAccount, BankAccountDraft, Expense, ExpenseDraft, ExpensePage, Income, IncomeDraft,
    LoginResponse, User, UserDraft,
};
use crate::session::Session;

const API_BASE: &str = "/api/v1";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode response: {0}")]
    Decode(String),
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

fn expenses_path(page: u32, per_page: u32) -> String {
    format!("/expenses?page={}&per_page={}", page, per_page)
}

fn accounts_path(user_id: i64) -> String {
    format!("/bank-accounts/user/{}", user_id)
}

fn incomes_path(user_id: i64) -> String {
    format!("/bank-accounts/users/{}/incomes", user_id)
}

async fn into_checked(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    web_sys::console::error_1(&format!("server response ({}): {}", status, body).into());
    Err(ApiError::Status { status, body })
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = into_checked(resp).await?;
    resp.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[derive(Clone, PartialEq)]
pub struct ApiClient {
    token: Option<String>,
}

impl ApiClient {
    /// Client for unauthenticated calls (login, signup).
    pub fn anonymous() -> Self {
        ApiClient { token: None }
    }

    pub fn new(session: &Session) -> Self {
        ApiClient {
            token: Some(session.token.clone()),
        }
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self
            .with_headers(Request::get(&url(path)))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(resp).await
    }

    async fn send_body<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let request = self
            .with_headers(builder)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        read_json(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let resp = self
            .with_headers(Request::delete(&url(path)))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        into_checked(resp).await?;
        Ok(())
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send_body(Request::post(&url("/auth/login")), &body)
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let resp = self
            .with_headers(Request::post(&url("/auth/logout")))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        into_checked(resp).await?;
        Ok(())
    }

    // --- users ---

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        age: u32,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = serde_json::json!({
            "name": name,
            "email": email,
            "age": age,
            "password": password,
        });
        self.send_body(Request::post(&url("/users")), &body).await
    }

    pub async fn fetch_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{}", id)).await
    }

    pub async fn update_user(&self, id: i64, draft: &UserDraft) -> Result<User, ApiError> {
        let body = serde_json::json!({
            "name": draft.name,
            "email": draft.email,
            "age": draft.age,
        });
        self.send_body(Request::put(&url(&format!("/users/{}", id))), &body)
            .await
    }

    // --- expenses ---

    pub async fn list_expenses(&self, page: u32, per_page: u32) -> Result<ExpensePage, ApiError> {
        self.get_json(&expenses_path(page, per_page)).await
    }

    pub async fn create_expense(
        &self,
        user_id: i64,
        draft: &ExpenseDraft,
    ) -> Result<Expense, ApiError> {
        let body = serde_json::json!({
            "user_id": user_id,
            "amount": draft.amount,
            "category": draft.category,
            "date": draft.date,
            "description": draft.description,
        });
        self.send_body(Request::post(&url("/expenses")), &body).await
    }

    pub async fn update_expense(
        &self,
        id: i64,
        user_id: i64,
        draft: &ExpenseDraft,
    ) -> Result<Expense, ApiError> {
        let body = serde_json::json!({
            "user_id": user_id,
            "amount": draft.amount,
            "category": draft.category,
            "date": draft.date,
            "description": draft.description,
        });
        self.send_body(Request::put(&url(&format!("/expenses/{}", id))), &body)
            .await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/expenses/{}", id)).await
    }

    // --- bank accounts ---

    pub async fn list_bank_accounts(&self, user_id: i64) -> Result<Vec<BankAccount>, ApiError> {
        self.get_json(&accounts_path(user_id)).await
    }

    pub async fn create_bank_account(
        &self,
        user_id: i64,
        draft: &BankAccountDraft,
    ) -> Result<BankAccount, ApiError> {
        let body = serde_json::json!({
            "user_id": user_id,
            "bank_name": draft.bank_name,
            "routing_number": draft.routing_number,
            "account_number": draft.account_number,
            "account_type": draft.account_type,
            "alias": draft.alias,
        });
        self.send_body(Request::post(&url("/bank-accounts")), &body)
            .await
    }

    pub async fn update_bank_account(
        &self,
        id: i64,
        draft: &BankAccountDraft,
    ) -> Result<BankAccount, ApiError> {
        let body = serde_json::json!({
            "bank_name": draft.bank_name,
            "routing_number": draft.routing_number,
            "account_number": draft.account_number,
            "account_type": draft.account_type,
            "alias": draft.alias,
        });
        self.send_body(
            Request::put(&url(&format!("/bank-accounts/{}", id))),
            &body,
        )
        .await
    }

    pub async fn delete_bank_account(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/bank-accounts/{}", id)).await
    }

    // --- incomes ---

    pub async fn list_incomes(&self, user_id: i64) -> Result<Vec<Income>, ApiError> {
        self.get_json(&incomes_path(user_id)).await
    }

    pub async fn create_income(&self, draft: &IncomeDraft) -> Result<Income, ApiError> {
        let body = serde_json::json!({
            "source": draft.source,
            "amount": draft.amount,
            "date": draft.date,
            "bank_account_id": draft.bank_account_id,
            "notes": draft.notes,
        });
        self.send_body(Request::post(&url("/incomes")), &body).await
    }

    pub async fn update_income(&self, id: i64, draft: &IncomeDraft) -> Result<Income, ApiError> {
        let body = serde_json::json!({
            "source": draft.source,
            "amount": draft.amount,
            "date": draft.date,
            "bank_account_id": draft.bank_account_id,
            "notes": draft.notes,
        });
        self.send_body(Request::put(&url(&format!("/incomes/{}", id))), &body)
            .await
    }

    pub async fn delete_income(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/incomes/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_backend_routes() {
        assert_eq!(url("/auth/login"), "/api/v1/auth/login");
        assert_eq!(expenses_path(2, 10), "/expenses?page=2&per_page=10");
        assert_eq!(accounts_path(7), "/bank-accounts/user/7");
        assert_eq!(incomes_path(7), "/bank-accounts/users/7/incomes");
    }

    #[test]
    fn status_error_carries_raw_body() {
        let err = ApiError::Status {
            status: 422,
            body: r#"{"error":"Missing required fields"}"#.to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("422"));
        assert!(rendered.contains("Missing required fields"));
    }
}
