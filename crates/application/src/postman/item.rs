//! Request items.

use scrivener_domain::{EndpointMetadata, PostmanAuth, PostmanItem, PostmanRequest};

use super::body::BodyEncoder;
use super::headers::HeaderResolver;
use super::url_object::UrlObjectBuilder;

/// Composes the URL, header, body and auth parts into one request item.
#[derive(Debug, Clone)]
pub struct EndpointItemBuilder {
    urls: UrlObjectBuilder,
}

impl EndpointItemBuilder {
    /// Creates an item builder for the given collection base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            urls: UrlObjectBuilder::new(base_url),
        }
    }

    /// Builds the request item for one endpoint.
    ///
    /// Endpoints must list at least one method; an empty list yields an
    /// empty method string.
    #[must_use]
    pub fn build(&self, endpoint: &EndpointMetadata) -> PostmanItem {
        tracing::trace!(uri = %endpoint.uri, "building request item");

        let description = endpoint
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        // Authenticated endpoints inherit the collection auth.
        let auth = (!endpoint.authenticated).then_some(PostmanAuth::NoAuth);

        PostmanItem {
            name: endpoint.display_name().to_string(),
            request: PostmanRequest {
                url: self.urls.build(endpoint),
                method: endpoint.method().unwrap_or_default().to_string(),
                header: HeaderResolver::resolve(&endpoint.headers),
                body: BodyEncoder::encode(endpoint),
                description,
                auth,
            },
            response: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scrivener_domain::{PostmanBody, PostmanHeader};
    use serde_json::json;

    #[test]
    fn test_name_falls_back_to_uri() {
        let builder = EndpointItemBuilder::new("http://localhost");
        let untitled = builder.build(&EndpointMetadata::new("GET", "users/{id}"));
        assert_eq!(untitled.name, "users/{id}");

        let titled = builder.build(&EndpointMetadata::new("GET", "users").with_title("List users"));
        assert_eq!(titled.name, "List users");
    }

    #[test]
    fn test_first_method_is_used() {
        let mut endpoint = EndpointMetadata::new("PUT", "users/{id}");
        endpoint.methods.push("PATCH".to_string());

        let item = EndpointItemBuilder::new("http://localhost").build(&endpoint);
        assert_eq!(item.request.method, "PUT");
    }

    #[test]
    fn test_unauthenticated_endpoint_forces_noauth() {
        let builder = EndpointItemBuilder::new("http://localhost");

        let public = builder.build(&EndpointMetadata::new("GET", "status"));
        assert_eq!(public.request.auth, Some(PostmanAuth::NoAuth));

        let mut endpoint = EndpointMetadata::new("GET", "me");
        endpoint.authenticated = true;
        let private = builder.build(&endpoint);
        assert_eq!(private.request.auth, None);
    }

    #[test]
    fn test_item_composition() {
        let mut endpoint = EndpointMetadata::new("POST", "users")
            .with_title("Create user")
            .with_header("Content-Type", "application/json")
            .with_body_parameter("name", json!("a"));
        endpoint.description = Some("Creates a user.".to_string());

        let item = EndpointItemBuilder::new("https://api.example.com").build(&endpoint);

        assert_eq!(item.request.url.raw, "https://{{baseUrl}}/users");
        assert_eq!(
            item.request.header,
            vec![
                PostmanHeader::new("Content-Type", "application/json"),
                PostmanHeader::new("Accept", "application/json"),
            ]
        );
        assert!(matches!(item.request.body, Some(PostmanBody::Raw { .. })));
        assert_eq!(item.request.description.as_deref(), Some("Creates a user."));
        assert!(item.response.is_empty());
    }

    #[test]
    fn test_absent_body_and_description() {
        let mut endpoint = EndpointMetadata::new("GET", "users");
        endpoint.description = Some(String::new());

        let item = EndpointItemBuilder::new("http://localhost").build(&endpoint);
        assert_eq!(item.request.body, None);
        assert_eq!(item.request.description, None);
    }
}
