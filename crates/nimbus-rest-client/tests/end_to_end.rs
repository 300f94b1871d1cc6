// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! End-to-end scenarios against a scripted transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nimbus_api_contract::{
    IncidentRelatedObject, IncidentServiceCreateAttributes, IncidentServiceCreateData,
    IncidentServiceCreateRequest, IncidentServiceIncludedItems, IncidentServiceType,
};
use nimbus_rest_client::incident_services::{
    GetIncidentServiceOptionalParams, ListIncidentServicesOptionalParams,
};
use nimbus_rest_client::{
    ApiClient, AuthConfig, Configuration, HttpRequest, HttpResponse, HttpTransport,
    IncidentServicesApi, TransportError,
};

/// Replays a fixed sequence of responses and records the requests it saw.
struct ScriptedTransport {
    responses: Mutex<Vec<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    fn new(mut responses: Vec<HttpResponse>) -> Self {
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| TransportError::Other("no scripted response left".to_string()))
    }
}

fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: body.as_bytes().to_vec(),
    }
}

fn incident_api(transport: Arc<ScriptedTransport>) -> IncidentServicesApi {
    let mut config = Configuration::new();
    for operation in [
        "v2.CreateIncidentService",
        "v2.GetIncidentService",
        "v2.ListIncidentServices",
    ] {
        config.set_unstable_operation_enabled(operation, true);
    }
    IncidentServicesApi::new(Arc::new(ApiClient::with_transport(
        config,
        AuthConfig::new().with_api_key("key-1"),
        transport,
    )))
}

#[tokio::test]
async fn test_create_then_fetch_with_included_users() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        json_response(
            201,
            r#"{"data":{"id":"svc-1","type":"services","attributes":{"name":"payments"}}}"#,
        ),
        json_response(
            200,
            r#"{
                "data": {"id": "svc-1", "type": "services", "attributes": {"name": "payments"}},
                "included": [
                    {"id": "u-1", "type": "users", "attributes": {"handle": "ada", "name": null}},
                    {"id": "t-1", "type": "teams"}
                ]
            }"#,
        ),
    ]));
    let api = incident_api(transport.clone());

    let created = api
        .create_incident_service(IncidentServiceCreateRequest::new(
            IncidentServiceCreateData::new(IncidentServiceType::Services)
                .with_attributes(IncidentServiceCreateAttributes::new("payments".into())),
        ))
        .await
        .unwrap();
    assert_eq!(created.status, 201);
    let service_id = created.entity.into_typed().unwrap().data.id;

    let fetched = api
        .get_incident_service(
            &service_id,
            GetIncidentServiceOptionalParams::default()
                .with_include(IncidentRelatedObject::Users),
        )
        .await
        .unwrap();
    let response = fetched.entity.into_typed().unwrap();
    let included = response.included.unwrap();
    assert_eq!(included.len(), 2);
    match &included[0] {
        IncidentServiceIncludedItems::User(user) => {
            let attributes = user.attributes.as_ref().unwrap();
            assert_eq!(attributes.handle.as_deref(), Some("ada"));
            // Explicit null name survives distinct from absent.
            assert!(attributes.name.is_set());
            assert_eq!(attributes.name.as_ref(), None);
        }
        other => panic!("expected user, got {other:?}"),
    }
    assert!(matches!(
        included[1],
        IncidentServiceIncludedItems::UnparsedObject(_)
    ));

    let requests = transport.recorded();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.path(), "/api/v2/services");
    assert_eq!(requests[1].url.path(), "/api/v2/services/svc-1");
    assert_eq!(requests[1].url.query(), Some("include=users"));
    for request in &requests {
        assert_eq!(request.header("NB-API-KEY"), Some("key-1"));
        assert_eq!(request.header("Accept"), Some("application/json"));
    }
}

#[tokio::test]
async fn test_list_pages_through_offsets() {
    let transport = Arc::new(ScriptedTransport::new(vec![
        json_response(
            200,
            r#"{
                "data": [{"id": "svc-1", "type": "services"}],
                "meta": {"pagination": {"offset": 0, "next_offset": 1, "size": 1}}
            }"#,
        ),
        json_response(
            200,
            r#"{
                "data": [{"id": "svc-2", "type": "services"}],
                "meta": {"pagination": {"offset": 1, "size": 1}}
            }"#,
        ),
    ]));
    let api = incident_api(transport.clone());

    let first = api
        .list_incident_services(ListIncidentServicesOptionalParams::default().with_page_size(1))
        .await
        .unwrap();
    let first_page = first.entity.into_typed().unwrap();
    let next_offset = first_page
        .meta
        .unwrap()
        .pagination
        .unwrap()
        .next_offset
        .unwrap();

    let second = api
        .list_incident_services(
            ListIncidentServicesOptionalParams::default()
                .with_page_size(1)
                .with_page_offset(next_offset),
        )
        .await
        .unwrap();
    let second_page = second.entity.into_typed().unwrap();
    assert_eq!(second_page.data[0].id, "svc-2");
    assert!(second_page.meta.unwrap().pagination.unwrap().next_offset.is_none());

    let requests = transport.recorded();
    assert_eq!(requests[0].url.query(), Some("page%5Bsize%5D=1"));
    assert_eq!(
        requests[1].url.query(),
        Some("page%5Bsize%5D=1&page%5Boffset%5D=1")
    );
}

#[tokio::test]
async fn test_enabled_unstable_operation_emits_warning_and_proceeds() {
    // Install a real subscriber so the unstable-operation warning and the
    // per-request debug events go through the full tracing pipeline.
    let _ = tracing_subscriber::fmt()
        .with_env_filter("nimbus_rest_client=debug")
        .with_test_writer()
        .try_init();

    let transport = Arc::new(ScriptedTransport::new(vec![json_response(
        200,
        r#"{"data":{"id":"svc-1","type":"services"}}"#,
    )]));
    let api = incident_api(transport.clone());

    let response = api
        .get_incident_service("svc-1", GetIncidentServiceOptionalParams::default())
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(transport.recorded().len(), 1);
}

#[tokio::test]
async fn test_transport_failure_surfaces_unchanged() {
    let transport = Arc::new(ScriptedTransport::new(vec![]));
    let api = incident_api(transport);

    let err = api
        .list_incident_services(ListIncidentServicesOptionalParams::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        nimbus_rest_client::RestClientError::Transport(TransportError::Other(_))
    ));
}
