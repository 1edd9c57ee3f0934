//! List and describe the various models available in the API.

use serde::{Deserialize, Serialize};

use crate::{
    client::OpenAiClient, endpoints, ApiResponseOrError, DeletionStatus, Extra, ListResponse,
};

/// A model offering. Fields the API adds later are kept in `extra`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Model {
    /// The model identifier, which can be referenced in the API endpoints.
    pub id: String,
    pub object: String,
    /// The Unix timestamp (in seconds) when the model was created.
    pub created: u64,
    /// The organization that owns the model.
    pub owned_by: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl OpenAiClient {
    pub async fn list_models(&self) -> ApiResponseOrError<ListResponse<Model>> {
        self.get(endpoints::LIST_MODELS.render(&[])?).await
    }

    pub async fn retrieve_model(&self, model: &str) -> ApiResponseOrError<Model> {
        self.get(endpoints::RETRIEVE_MODEL.render(&[model])?).await
    }

    /// Deletes a fine-tuned model. You must have the Owner role in your organization.
    pub async fn delete_model(&self, model: &str) -> ApiResponseOrError<DeletionStatus> {
        self.delete(endpoints::DELETE_MODEL.render(&[model])?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_keeps_unknown_fields() {
        let value = json!({
            "id": "gpt-4o-mini",
            "object": "model",
            "created": 1721172741,
            "owned_by": "system",
            "root": "gpt-4o-mini"
        });
        let model: Model = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(model.owned_by, "system");
        assert_eq!(model.extra.get("root"), Some(&json!("gpt-4o-mini")));
        assert_eq!(serde_json::to_value(&model).unwrap(), value);
    }

    #[test]
    fn model_list() {
        let list: ListResponse<Model> = serde_json::from_value(json!({
            "object": "list",
            "data": [
                { "id": "babbage-002", "object": "model", "created": 1692634615, "owned_by": "system" },
                { "id": "ft:gpt-4o-mini:acme::9a", "object": "model", "created": 1720000000, "owned_by": "user-abc" }
            ]
        }))
        .unwrap();
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[1].owned_by, "user-abc");
    }
}
