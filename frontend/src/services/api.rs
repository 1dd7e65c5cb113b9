use async_trait::async_trait;
use finance_hub_core::api::{error_from_response, Collection, Endpoint, FinanceApi};
use finance_hub_core::DashboardError;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    Account, Created, EntityId, Goal, GoalUpdate, Investment, NewAccount, NewGoal, NewInvestment,
    NewTransaction, Transaction,
};

/// REST client for the finance hub backend, built on `gloo-net`
#[derive(Clone, PartialEq)]
pub struct GlooApi {
    endpoint: Endpoint,
}

impl GlooApi {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            endpoint: Endpoint::new(base_url),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DashboardError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn post_json<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<Created, DashboardError> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| DashboardError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, DashboardError> {
        let response = Self::check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| DashboardError::Decode(e.to_string()))
    }

    /// Passes 2xx responses through and turns anything else into an error
    async fn check(response: Response) -> Result<Response, DashboardError> {
        if response.ok() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(error_from_response(response.status(), &body))
    }
}

#[async_trait(?Send)]
impl FinanceApi for GlooApi {
    async fn list_accounts(&self) -> Result<Vec<Account>, DashboardError> {
        self.get_json(&self.endpoint.collection(Collection::Accounts)).await
    }

    async fn list_transactions(&self, limit: Option<u32>) -> Result<Vec<Transaction>, DashboardError> {
        self.get_json(&self.endpoint.list(Collection::Transactions, limit)).await
    }

    async fn list_investments(&self) -> Result<Vec<Investment>, DashboardError> {
        self.get_json(&self.endpoint.collection(Collection::Investments)).await
    }

    async fn list_goals(&self) -> Result<Vec<Goal>, DashboardError> {
        self.get_json(&self.endpoint.collection(Collection::Goals)).await
    }

    async fn create_account(&self, request: &NewAccount) -> Result<Created, DashboardError> {
        self.post_json(&self.endpoint.collection(Collection::Accounts), request).await
    }

    async fn create_transaction(&self, request: &NewTransaction) -> Result<Created, DashboardError> {
        self.post_json(&self.endpoint.collection(Collection::Transactions), request).await
    }

    async fn create_investment(&self, request: &NewInvestment) -> Result<Created, DashboardError> {
        self.post_json(&self.endpoint.collection(Collection::Investments), request).await
    }

    async fn create_goal(&self, request: &NewGoal) -> Result<Created, DashboardError> {
        self.post_json(&self.endpoint.collection(Collection::Goals), request).await
    }

    async fn update_goal(&self, id: &EntityId, update: &GoalUpdate) -> Result<(), DashboardError> {
        let response = Request::put(&self.endpoint.item(Collection::Goals, id))
            .json(update)
            .map_err(|e| DashboardError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }

    async fn delete(&self, collection: Collection, id: &EntityId) -> Result<(), DashboardError> {
        let response = Request::delete(&self.endpoint.item(collection, id))
            .send()
            .await
            .map_err(|e| DashboardError::Network(e.to_string()))?;
        Self::check(response).await.map(|_| ())
    }
}
