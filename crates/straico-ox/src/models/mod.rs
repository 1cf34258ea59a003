pub mod response;

pub use self::response::Model;

use ai_ox_common::{Endpoint, HttpMethod, RequestBody};

use crate::{Straico, StraicoRequestError, error::FETCHING_MODELS, response::Envelope};

const MODELS_URL: &str = "v1/models";

impl Straico {
    /// List the models available to the account.
    ///
    /// Unlike the other operations, a failure status is reported as
    /// `"Error fetching models: <status text>"`.
    ///
    /// # Example
    /// ```rust,no_run
    /// # use straico_ox::Straico;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Straico::load_from_env()?;
    /// let models = client.list_models().await?;
    /// for model in models.data {
    ///     println!("{}", model.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_models(&self) -> Result<Envelope<Vec<Model>>, StraicoRequestError> {
        let endpoint = Endpoint::new(MODELS_URL, HttpMethod::Get).with_json_headers();

        self.request_helper()
            .json_with_context("list_models", &endpoint, RequestBody::Empty, FETCHING_MODELS)
            .await
    }
}
