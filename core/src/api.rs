//! Backend contract. The dashboard only ever reaches the REST backend
//! through [`FinanceApi`], so the store and controller can run against an
//! in-memory double in tests and against `gloo-net` in the browser.

use async_trait::async_trait;
use shared::{
    Account, Created, EntityId, ErrorBody, Goal, GoalUpdate, Investment, NewAccount, NewGoal,
    NewInvestment, NewTransaction, Transaction,
};

use crate::error::DashboardError;

/// The four backend collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Accounts,
    Transactions,
    Investments,
    Goals,
}

impl Collection {
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Accounts => "/conti",
            Collection::Transactions => "/transazioni",
            Collection::Investments => "/investimenti",
            Collection::Goals => "/obiettivi",
        }
    }
}

/// Builds request URLs against a base such as `http://localhost:5000/api`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Endpoint {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET`/`POST` target for a collection
    pub fn collection(&self, collection: Collection) -> String {
        format!("{}{}", self.base_url, collection.path())
    }

    /// Collection URL with an optional `?limit=` query
    pub fn list(&self, collection: Collection, limit: Option<u32>) -> String {
        let limit_param = limit.map(|l| format!("?limit={}", l)).unwrap_or_default();
        format!("{}{}", self.collection(collection), limit_param)
    }

    /// `PUT`/`DELETE` target for one item
    pub fn item(&self, collection: Collection, id: &EntityId) -> String {
        format!("{}/{}", self.collection(collection), id)
    }
}

/// Maps a non-2xx response to an error, pulling `detail` out of the body
/// when it parses as JSON.
pub fn error_from_response(status: u16, body: &str) -> DashboardError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message());
    DashboardError::Http { status, detail }
}

/// Operations the dashboard needs from the backend.
///
/// `?Send` because the browser implementation holds JS futures.
#[async_trait(?Send)]
pub trait FinanceApi {
    async fn list_accounts(&self) -> Result<Vec<Account>, DashboardError>;
    async fn list_transactions(&self, limit: Option<u32>) -> Result<Vec<Transaction>, DashboardError>;
    async fn list_investments(&self) -> Result<Vec<Investment>, DashboardError>;
    async fn list_goals(&self) -> Result<Vec<Goal>, DashboardError>;

    async fn create_account(&self, request: &NewAccount) -> Result<Created, DashboardError>;
    async fn create_transaction(&self, request: &NewTransaction) -> Result<Created, DashboardError>;
    async fn create_investment(&self, request: &NewInvestment) -> Result<Created, DashboardError>;
    async fn create_goal(&self, request: &NewGoal) -> Result<Created, DashboardError>;

    /// Partial update, `PUT /obiettivi/{id}`
    async fn update_goal(&self, id: &EntityId, update: &GoalUpdate) -> Result<(), DashboardError>;

    async fn delete(&self, collection: Collection, id: &EntityId) -> Result<(), DashboardError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let endpoint = Endpoint::new("http://localhost:5000/api/");

        assert_eq!(endpoint.collection(Collection::Accounts), "http://localhost:5000/api/conti");
        assert_eq!(
            endpoint.list(Collection::Transactions, Some(100)),
            "http://localhost:5000/api/transazioni?limit=100"
        );
        assert_eq!(
            endpoint.list(Collection::Goals, None),
            "http://localhost:5000/api/obiettivi"
        );
        assert_eq!(
            endpoint.item(Collection::Investments, &EntityId::Number(4)),
            "http://localhost:5000/api/investimenti/4"
        );
    }

    #[test]
    fn test_error_from_response_reads_detail() {
        let err = error_from_response(400, r#"{"detail": "Fondi insufficienti"}"#);
        assert_eq!(
            err,
            DashboardError::Http {
                status: 400,
                detail: Some("Fondi insufficienti".to_string())
            }
        );

        let html = error_from_response(502, "<html>Bad gateway</html>");
        assert_eq!(
            html,
            DashboardError::Http {
                status: 502,
                detail: None
            }
        );
    }
}
