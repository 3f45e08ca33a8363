use actix_web::{http::header, test};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
#[macro_use]
mod helpers;

use helpers::*;

fn decimal(value: &Value) -> Decimal {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("expected a decimal string, got {}", value))
}

#[actix_web::test]
async fn test_create_invoice_for_india() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(invoice_payload("IN"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let invoice: Value = test::read_body_json(resp).await;
    assert_eq!(invoice["country"], "IN");
    assert_eq!(invoice["currency"], "INR");
    assert_eq!(invoice["locale"], "en-IN");
    assert_eq!(invoice["status"], "draft");
    assert_eq!(decimal(&invoice["subtotal"]), dec!(1300));
    assert_eq!(decimal(&invoice["totalTax"]), dec!(180));
    assert_eq!(decimal(&invoice["total"]), dec!(1480));
    assert_eq!(invoice["taxes"][0]["taxType"], "GST");
    assert_eq!(invoice["notes"], "Thank you for your business");
    assert!(invoice["invoiceNumber"]
        .as_str()
        .unwrap()
        .starts_with("SKV-IN-"));
}

#[actix_web::test]
async fn test_explicit_country_overrides_client_country() {
    let app = init_app!();

    let mut payload = invoice_payload("GB");
    payload["country"] = json!("HU");

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(payload)
        .to_request();
    let invoice: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(invoice["country"], "HU");
    assert_eq!(invoice["currency"], "EUR");
    assert_eq!(decimal(&invoice["totalTax"]), dec!(270));
}

#[actix_web::test]
async fn test_submitted_line_total_is_ignored() {
    let app = init_app!();

    let mut payload = invoice_payload("AE");
    payload["items"][0]["lineTotal"] = json!(1);

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(payload)
        .to_request();
    let invoice: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(decimal(&invoice["items"][0]["lineTotal"]), dec!(1000));
}

#[actix_web::test]
async fn test_invalid_invoice_lists_every_error() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(json!({
            "items": [{ "description": "", "quantity": 0, "unitPrice": -1 }],
            "client": { "name": "", "email": "bad", "address": [], "country": "" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
    assert_eq!(
        body["error"]["details"],
        json!([
            "Item 1: Description is required",
            "Item 1: Quantity must be greater than 0",
            "Item 1: Unit price cannot be negative",
            "Client name is required",
            "Valid email address is required",
            "Client address is required",
            "Client country is required"
        ])
    );
}

#[actix_web::test]
async fn test_out_of_range_amounts_are_400() {
    let app = init_app!();

    let mut payload = invoice_payload("AE");
    payload["items"] = json!([{
        "description": "Mainland Company Setup",
        "quantity": "79228162514264337593543950335",
        "unitPrice": "2"
    }]);

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["error"]["details"],
        json!(["Item 1: Line total is out of range"])
    );

    // each line fits, their sum does not
    let mut payload = invoice_payload("AE");
    let line = json!({
        "description": "Free Zone License",
        "quantity": 1,
        "unitPrice": "40000000000000000000000000000"
    });
    payload["items"] = json!([line.clone(), line]);

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Invoice amounts are out of range");
}

#[actix_web::test]
async fn test_malformed_json_is_400() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"items\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_document_download() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(invoice_payload("HU"))
        .to_request();
    let invoice: Value = test::call_and_read_body_json(&app, req).await;
    let number = invoice["invoiceNumber"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/invoice/pdf")
        .set_json(&invoice)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        format!("attachment; filename=\"{}.html\"", number).as_str()
    );
    assert!(resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .starts_with("text/html"));

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains(&number));
    assert!(html.contains("Fizetési határidő: 30 nap"));
    assert!(html.contains("1\u{a0}570,00\u{a0}€"));
}

#[actix_web::test]
async fn test_document_requires_invoice_id() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(invoice_payload("GB"))
        .to_request();
    let mut invoice: Value = test::call_and_read_body_json(&app, req).await;
    invoice["id"] = json!("");

    let req = test::TestRequest::post()
        .uri("/invoice/pdf")
        .set_json(&invoice)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/invoice/pdf")
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_send_invoice_email() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(invoice_payload("AE"))
        .to_request();
    let invoice: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/invoice/email")
        .set_json(json!({ "invoice": invoice, "recipientEmail": "accounts@example.ae" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Invoice sent successfully");
    assert_eq!(body["details"]["invoiceNumber"], invoice["invoiceNumber"]);
    assert_eq!(body["details"]["recipient"], "accounts@example.ae");
    assert!(body["details"]["sentAt"].is_string());
}

#[actix_web::test]
async fn test_send_invoice_email_rejects_bad_input() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/invoice")
        .set_json(invoice_payload("AE"))
        .to_request();
    let invoice: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/invoice/email")
        .set_json(json!({ "invoice": invoice, "recipientEmail": "not-an-email" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["message"], "Invalid email address");

    let req = test::TestRequest::post()
        .uri("/invoice/email")
        .set_json(json!({ "invoice": invoice }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_web::test]
async fn test_responses_carry_request_id() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header(("X-Request-ID", "trace-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("x-request-id").unwrap(), "trace-42");
}
