//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use clientes_core::{
    normalize, ApiError, ClienteId, ClientesClient, Customer, CustomerUpdate, HttpMethod,
    HttpRequest, HttpResponse, NewCustomer, Normalized,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

fn client() -> ClientesClient {
    ClientesClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Build an `HttpResponse` from a `simulated_response` object.
fn simulated(sim: &Value) -> HttpResponse {
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        status_text: sim["status_text"].as_str().unwrap_or_default().to_string(),
        headers: sim["content_type"]
            .as_str()
            .map(|ct| vec![("Content-Type".to_string(), ct.to_string())])
            .unwrap_or_default(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn input_id(case: &Value) -> ClienteId {
    case["input_id"].as_i64().unwrap()
}

/// Check method, URL and (when listed) headers and JSON body.
fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    if let Some(headers) = expected.get("headers") {
        let expected_headers: Vec<(String, String)> = headers
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");
    }

    match expected.get("body") {
        Some(body) => {
            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

/// Check an error against an `expected_error` object.
fn check_error(name: &str, err: ApiError, expected: &Value) {
    if let Some(kind) = expected.get("unexpected_body") {
        match err {
            ApiError::UnexpectedBody { found, .. } => {
                assert_eq!(found, kind.as_str().unwrap(), "{name}: found")
            }
            other => panic!("{name}: expected UnexpectedBody, got {other:?}"),
        }
        return;
    }
    match err {
        ApiError::Status {
            status, message, ..
        } => {
            assert_eq!(u64::from(status), expected["status"].as_u64().unwrap(), "{name}: status");
            assert_eq!(message.as_deref(), expected["message"].as_str(), "{name}: message");
        }
        other => panic!("{name}: expected Status error, got {other:?}"),
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_customers();
        check_request(name, &req, &case["expected_request"]);

        let customers = c.parse_list_customers(simulated(&case["simulated_response"])).unwrap();
        let expected: Vec<Customer> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(customers, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_get_customer(input_id(&case));
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_customer(simulated(&case["simulated_response"]));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: Customer = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: NewCustomer = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_customer(&input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let customer = c.parse_create_customer(simulated(&case["simulated_response"])).unwrap();
        let expected: Customer = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(customer, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CustomerUpdate = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_customer(input_id(&case), &input).unwrap();
        check_request(name, &req, &case["expected_request"]);

        let customer = c.parse_update_customer(simulated(&case["simulated_response"])).unwrap();
        let expected: Customer = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(customer, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_delete_customer(input_id(&case));
        check_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_customer(simulated(&case["simulated_response"]));
        if let Some(expected_error) = case.get("expected_error") {
            check_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected = match &case["expected_result"] {
                Value::Null => Normalized::Null,
                value => Normalized::Json(value.clone()),
            };
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[test]
fn normalize_test_vectors() {
    for case in cases(include_str!("../../test-vectors/normalize.json")) {
        let name = case["name"].as_str().unwrap();
        let expected = &case["expected"];
        let result = normalize(simulated(&case["response"]));

        match expected["kind"].as_str().unwrap() {
            "null" => assert_eq!(result.unwrap(), Normalized::Null, "{name}"),
            "json" => assert_eq!(result.unwrap(), Normalized::Json(expected["value"].clone()), "{name}"),
            "text" => assert_eq!(
                result.unwrap(),
                Normalized::Text(expected["value"].as_str().unwrap().to_string()),
                "{name}"
            ),
            "error" => {
                let err = result.unwrap_err();
                assert!(
                    err.to_string().contains(expected["status_text"].as_str().unwrap()),
                    "{name}: display"
                );
                check_error(name, err, expected);
            }
            other => panic!("{name}: unknown kind: {other}"),
        }
    }
}
