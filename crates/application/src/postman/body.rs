//! Request body encoding.

use scrivener_domain::{EndpointMetadata, PostmanBody, PostmanFormDataParam, example_to_string};
use serde_json::{Map, Value as JsonValue};

/// Content type that switches the body to form-data mode.
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Chooses a body mode per endpoint and serializes its parameters.
pub struct BodyEncoder;

impl BodyEncoder {
    /// Encodes the endpoint's body, or returns `None` if it has no body
    /// parameters.
    #[must_use]
    pub fn encode(endpoint: &EndpointMetadata) -> Option<PostmanBody> {
        if endpoint.body_parameters.is_empty() {
            return None;
        }

        if endpoint.content_type().as_deref() == Some(MULTIPART_FORM_DATA) {
            Some(Self::form_data(endpoint))
        } else {
            Some(Self::raw(endpoint))
        }
    }

    fn raw(endpoint: &EndpointMetadata) -> PostmanBody {
        let fields: Map<String, JsonValue> = endpoint
            .clean_body_parameters
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        // `{:#}` is serde_json's pretty printer
        PostmanBody::raw_json(format!("{:#}", JsonValue::Object(fields)))
    }

    fn form_data(endpoint: &EndpointMetadata) -> PostmanBody {
        let text = endpoint
            .clean_body_parameters
            .iter()
            .map(|(key, value)| PostmanFormDataParam::Text {
                key: key.clone(),
                value: example_to_string(value),
            });
        let files = endpoint
            .file_parameters
            .keys()
            .map(|key| PostmanFormDataParam::File {
                key: key.clone(),
                src: Vec::new(),
            });

        PostmanBody::Formdata {
            formdata: text.chain(files).collect(),
        }
    }
}
