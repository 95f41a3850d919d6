//! User data API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;

/// Options for deleting labeled user data.
#[derive(Debug, Clone, Default)]
pub struct DeleteUserDataOptions {
    /// Customer ID the data was labeled with.
    pub customer_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteUserDataOptions {
    /// Options for `customer_id`.
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }
}

/// User data API client.
pub struct UserDataApi {
    client: AssistantClient,
}

impl UserDataApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// Delete all data associated with a customer ID.
    ///
    /// The service accepts the request and deletes asynchronously.
    pub async fn delete(&self, options: DeleteUserDataOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete("/v1/user_data")
            .query_required("customer_id", &options.customer_id)
            .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
