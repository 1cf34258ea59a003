use ai_ox_common::{Endpoint, HttpMethod, RequestBody};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Straico, StraicoRequestError, response::Envelope};

/// Account information of the credential's owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Remaining coin balance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coins: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Straico {
    /// Fetch information about the account the API key belongs to.
    pub async fn user_info(&self) -> Result<Envelope<UserInfo>, StraicoRequestError> {
        let endpoint = Endpoint::new("v0/user", HttpMethod::Get).with_json_headers();

        self.request_helper()
            .json("user_info", &endpoint, RequestBody::Empty)
            .await
    }
}
