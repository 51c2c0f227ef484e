use crate::modules::employees::adapters::outbound::employee_store::EmployeeStore;
use crate::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use crate::modules::employees::core::employee::Employee;
use crate::modules::employees::core::policy::StatusPolicy;
use crate::modules::employees::core::status::StatusValue;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn registers_updates_and_lists_employees() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = router(AppState::new(store.clone(), StatusPolicy::default()));

    let (status, _) = send(
        &app,
        json_request(
            "POST",
            "/employees",
            serde_json::json!({ "name": "Ada", "email": "ada@example.com", "status": "InOffice" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, view) = send(
        &app,
        json_request(
            "POST",
            "/webhooks/slack",
            serde_json::json!({
                "email": "ada@example.com",
                "command": "/ooo",
                "commandType": "set-message",
                "text": "at the dentist",
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["status"]["statusType"], "OutOfOffice");

    let (status, list) = send(
        &app,
        Request::get("/employees").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["status"]["statusType"], "OutOfOffice");
    assert_eq!(list[0]["message"], "at the dentist");

    let (status, log) = send(
        &app,
        Request::get("/employees/ada@example.com/log")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let statuses: Vec<&str> = log
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["InOffice", "OutOfOffice"]);
}

#[tokio::test]
async fn rolls_over_stale_statuses_and_writes_them_back() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let stale = Employee {
        id: "e-1".into(),
        name: "Bob".into(),
        email: "bob@example.com".into(),
        status: StatusValue::Wfh,
        default_status: StatusValue::InOffice,
        message: String::new(),
        date_modified: Utc::now() - Duration::days(3),
    };
    store.insert(stale).await.unwrap();
    let state = AppState::new(store.clone(), StatusPolicy::default());

    let listed = state.list_handler.handle(Utc::now()).await.unwrap();
    assert_eq!(listed.employees[0].status.status_type, StatusValue::InOffice);
    listed.correction.join().await.unwrap();

    let stored = store.find_by_email("bob@example.com").await.unwrap().unwrap();
    assert_eq!(stored.status, StatusValue::InOffice);
    assert_eq!(store.list_log_by_email("bob@example.com").await.unwrap().len(), 1);
}

#[tokio::test]
async fn serves_the_graphql_schema() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = router(AppState::new(store, StatusPolicy::default()));

    let (status, registered) = send(
        &app,
        json_request(
            "POST",
            "/gql",
            serde_json::json!({
                "query": r#"mutation { registerEmployee(name: "Ada", email: "ada@example.com", status: "WFH") { email statusType isDefault } }"#,
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(registered["data"]["registerEmployee"]["statusType"], "WFH");
    assert_eq!(registered["data"]["registerEmployee"]["isDefault"], true);

    let (_, updated) = send(
        &app,
        json_request(
            "POST",
            "/gql",
            serde_json::json!({
                "query": r#"mutation { updateStatus(email: "ada@example.com", status: "Sick") { statusType } }"#,
            }),
        ),
    )
    .await;
    assert_eq!(updated["data"]["updateStatus"]["statusType"], "Sick");

    let (_, listed) = send(
        &app,
        json_request(
            "POST",
            "/gql",
            serde_json::json!({
                "query": r#"{ employees { email statusType } statusLog(email: "ada@example.com") { status } }"#,
            }),
        ),
    )
    .await;
    assert_eq!(listed["data"]["employees"][0]["statusType"], "Sick");
    assert_eq!(listed["data"]["statusLog"].as_array().unwrap().len(), 2);

    let (_, rejected) = send(
        &app,
        json_request(
            "POST",
            "/gql",
            serde_json::json!({
                "query": r#"mutation { updateStatus(email: "ada@example.com", status: "Beach") { statusType } }"#,
            }),
        ),
    )
    .await;
    assert!(rejected["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("not a valid status type"));
}

#[tokio::test]
async fn filters_employees_and_the_log_through_graphql() {
    let store = Arc::new(InMemoryEmployeeStore::new());
    let app = router(AppState::new(store, StatusPolicy::default()));

    for (name, email, status) in [
        ("Ada", "ada@example.com", "WFH"),
        ("Grace", "grace@example.com", "InOffice"),
    ] {
        let (status_code, _) = send(
            &app,
            json_request(
                "POST",
                "/employees",
                serde_json::json!({ "name": name, "email": email, "status": status }),
            ),
        )
        .await;
        assert_eq!(status_code, StatusCode::OK);
    }

    let from = (Utc::now() - Duration::hours(1)).to_rfc3339();
    let to = (Utc::now() + Duration::hours(1)).to_rfc3339();
    let (status, filtered) = send(
        &app,
        json_request(
            "POST",
            "/gql",
            serde_json::json!({
                "query": r#"query ($from: String!, $to: String!) {
                    wfh: employees(status: "WFH") { email }
                    grace: employees(name: "Grace") { statusType }
                    statusLogBetween(from: $from, to: $to) { employeeEmail }
                }"#,
                "variables": { "from": from, "to": to },
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["data"]["wfh"], serde_json::json!([{ "email": "ada@example.com" }]));
    assert_eq!(filtered["data"]["grace"][0]["statusType"], "InOffice");
    assert_eq!(filtered["data"]["statusLogBetween"].as_array().unwrap().len(), 2);

    let (_, rejected) = send(
        &app,
        json_request(
            "POST",
            "/gql",
            serde_json::json!({ "query": r#"{ employees(status: "Beach") { email } }"# }),
        ),
    )
    .await;
    assert!(rejected["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("not a valid status type"));
}

