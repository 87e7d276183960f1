//! End-to-end tests for collection export.
//!
//! These tests drive the full pipeline: YAML config and JSON endpoint
//! metadata in, rendered Postman collection out.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use scrivener_domain::{Grouping, PostmanAuth, PostmanBody, PostmanCollection};
use scrivener_infrastructure::{
    AppUrlResolver, ConfigFormat, PostmanExporter, from_json, load_config,
};
use serde_json::{Value as JsonValue, json};
use url::Url;

const CONFIG: &str = r#"
title: Shop API
description: Public endpoints of the shop.
base_url: https://shop.example.com
auth:
  enabled: true
  in: header
  name: X-Api-Key
postman:
  overrides:
    info.version: "3.1.0"
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn grouping() -> Grouping {
    serde_json::from_value(json!({
        "Users": [
            {
                "uri": "users",
                "methods": ["GET", "HEAD"],
                "title": "List users",
                "groupDescription": "Manage users.",
                "queryParameters": {
                    "ids": {"example": [3, 5], "type": "integer[]", "description": "<i>Filter</i> by id"},
                    "search": {"example": "john doe", "type": "string"},
                    "sort": {"example": "", "type": "string"}
                }
            },
            {
                "uri": "users/{user}/avatar/{size?}",
                "methods": ["POST"],
                "title": "",
                "authenticated": true,
                "groupDescription": "Not used.",
                "headers": {"Content-Type": "multipart/form-data", "X-Tenant": "@{{tenant}}"},
                "urlParameters": {
                    "user": {"example": 42, "type": "integer", "required": true, "description": "The user."},
                    "team": {"example": "core", "type": "string"}
                },
                "bodyParameters": {"caption": {"type": "string"}},
                "cleanBodyParameters": {"caption": "Me"},
                "fileParameters": {"avatar": {}}
            }
        ],
        "Health": [
            {"uri": "health", "methods": ["GET"], "title": "Ping", "bodyParameters": {"echo": {}}, "cleanBodyParameters": {"echo": "hi"}}
        ]
    }))
    .unwrap()
}

fn export() -> (JsonValue, PostmanCollection) {
    init_tracing();
    let config = load_config(CONFIG, ConfigFormat::Yaml).unwrap();
    let content =
        PostmanExporter::export(&grouping(), &config, &AppUrlResolver::default()).unwrap();
    (from_json(&content).unwrap(), from_json(&content).unwrap())
}

#[test]
fn test_envelope_and_overrides() {
    let (document, collection) = export();

    let keys: Vec<&str> = document.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["variable", "info", "item", "auth"]);
    assert_eq!(document["info"]["version"], json!("3.1.0"));

    assert_eq!(collection.variable[0].key, "baseUrl");
    assert_eq!(collection.variable[0].value, "shop.example.com");
    assert_eq!(collection.info.name, "Shop API");
    assert_eq!(collection.info.description, "Public endpoints of the shop.");
    assert_eq!(
        document["auth"],
        json!({
            "type": "apikey",
            "apikey": [
                {"key": "in", "value": "header", "type": "string"},
                {"key": "key", "value": "X-Api-Key", "type": "string"}
            ]
        })
    );
    assert!(matches!(collection.auth, PostmanAuth::ApiKey { .. }));
}

#[test]
fn test_folders_and_items() {
    let (_, collection) = export();

    let folders: Vec<(&str, &str, usize)> = collection
        .item
        .iter()
        .map(|f| (f.name.as_str(), f.description.as_str(), f.item.len()))
        .collect();
    assert_eq!(folders, vec![("Users", "Manage users.", 2), ("Health", "", 1)]);

    let list = &collection.item[0].item[0];
    assert_eq!(list.name, "List users");
    assert_eq!(list.request.method, "GET");
    assert_eq!(list.request.auth, Some(PostmanAuth::NoAuth));
    assert_eq!(list.request.body, None);

    let query: Vec<(&str, &str, &str, bool)> = list
        .request
        .url
        .query
        .iter()
        .map(|q| (q.key.as_str(), q.value.as_str(), q.description.as_str(), q.disabled))
        .collect();
    assert_eq!(
        query,
        vec![
            ("ids[0]", "3", "Filter by id", false),
            ("ids[1]", "5", "Filter by id", false),
            ("search", "john+doe", "", false),
            ("sort", "", "", true),
        ]
    );

    let avatar = &collection.item[0].item[1];
    assert_eq!(avatar.name, "users/{user}/avatar/{size?}");
    assert_eq!(avatar.request.auth, None);
    assert_eq!(avatar.request.url.path, "users/:user/avatar/:size");
    assert_eq!(avatar.request.url.variable.len(), 1);
    assert_eq!(avatar.request.url.variable[0].key, "user");
    assert_eq!(avatar.request.url.variable[0].value, "42");
    assert_eq!(avatar.request.header[1].value, "{{tenant}}");
    assert_eq!(avatar.request.header[2].key, "Accept");
    assert!(matches!(avatar.request.body, Some(PostmanBody::Formdata { .. })));

    let ping = &collection.item[1].item[0];
    let Some(PostmanBody::Raw { raw, .. }) = &ping.request.body else {
        panic!("expected raw body");
    };
    assert_eq!(serde_json::from_str::<JsonValue>(raw).unwrap(), json!({"echo": "hi"}));
}

#[test]
fn test_raw_urls_match_structured_fields() {
    let (_, collection) = export();
    let host = &collection.variable[0].value;

    for item in collection.item.iter().flat_map(|folder| &folder.item) {
        let url = &item.request.url;
        let resolved = url.raw.replace(&url.host, host);
        let parsed = Url::parse(&resolved).unwrap();

        assert_eq!(parsed.scheme(), url.protocol);
        assert_eq!(parsed.host_str(), Some(host.as_str()));
        assert_eq!(parsed.path(), format!("/{}", url.path));

        let parsed_keys: Vec<String> = parsed.query_pairs().map(|(k, _)| k.into_owned()).collect();
        let structured_keys: Vec<String> = url.query.iter().map(|q| q.key.clone()).collect();
        assert_eq!(parsed_keys, structured_keys);
    }
}

#[test]
fn test_each_export_gets_new_id() {
    let (first, _) = export();
    let (second, _) = export();
    assert_ne!(first["info"]["_postman_id"], second["info"]["_postman_id"]);
}
