//! Contrato HTTP de la API, ejecutado contra cualquier backend de almacenamiento.
//!
//! Cada función asume una base de datos vacía.

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

use super::{delete, get, post, put, today};

pub async fn create_company_derives_slug(app: &Router) {
    let (status, body) = post(app, "/companies", json!({ "name": "Apple Inc" })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "company": { "code": "apple-inc", "name": "Apple Inc", "description": null } })
    );
}

pub async fn company_lifecycle(app: &Router) {
    let (status, _) = post(
        app,
        "/companies",
        json!({ "name": "IBM", "description": "Big blue" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(app, "/companies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "companies": [{ "code": "ibm", "name": "IBM" }] }));

    let (status, body) = get(app, "/companies/ibm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "company": [{ "code": "ibm", "name": "IBM", "description": "Big blue" }],
            "industries": []
        })
    );

    let (status, body) = put(
        app,
        "/companies/ibm",
        json!({ "name": "IBM Corp", "description": "Bigger blue" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "company": { "code": "ibm", "name": "IBM Corp", "description": "Bigger blue" } })
    );

    let (status, body) = delete(app, "/companies/ibm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, body) = get(app, "/companies/ibm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No such company: ibm", "status": 404 }));
}

pub async fn missing_company_is_not_found(app: &Router) {
    let (status, body) = put(app, "/companies/nope", json!({ "name": "Nope" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No such company: nope");

    let (status, body) = delete(app, "/companies/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

pub async fn duplicate_company_is_conflict(app: &Router) {
    post(app, "/companies", json!({ "name": "Apple Inc" })).await;
    let (status, body) = post(app, "/companies", json!({ "name": "Apple Inc" })).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Company already exists: apple-inc");
    assert_eq!(body["status"], 409);
}

pub async fn company_slug_transliterates_accents(app: &Router) {
    let (status, body) = post(app, "/companies", json!({ "name": "Café Noir" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["company"]["code"], "cafe-noir");
    assert_eq!(body["company"]["name"], "Café Noir");

    let (status, body) = post(app, "/companies", json!({ "name": "Zürich AG" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["company"]["code"], "zurich-ag");

    let (status, _) = get(app, "/companies/cafe-noir").await;
    assert_eq!(status, StatusCode::OK);
}

pub async fn company_can_share_another_company_name(app: &Router) {
    post(app, "/companies", json!({ "name": "Apple Inc" })).await;
    post(app, "/companies", json!({ "name": "IBM" })).await;

    let (status, body) = put(app, "/companies/ibm", json!({ "name": "Apple Inc" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "company": { "code": "ibm", "name": "Apple Inc", "description": null } })
    );

    let (status, body) = get(app, "/companies/apple-inc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company"][0]["name"], "Apple Inc");
}

pub async fn invalid_company_body_is_bad_request(app: &Router) {
    let (status, body) = post(app, "/companies", json!({ "description": "no name" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, _) = post(app, "/companies", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(app, "/companies", json!({ "name": "!!!" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

pub async fn industries_and_associations(app: &Router) {
    post(app, "/companies", json!({ "name": "Apple Inc" })).await;

    let (status, body) = post(app, "/industries", json!({ "industry": "Consumer Electronics" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "industry": { "code": "consumer-electronics", "industry": "Consumer Electronics" } })
    );

    let (status, body) = get(app, "/industries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "industries": [{ "code": "consumer-electronics", "industry": "Consumer Electronics" }] })
    );

    let (status, body) = post(
        app,
        "/industries/consumer-electronics",
        json!({ "company_code": "apple-inc" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "industry": { "comp_code": "apple-inc", "indus_code": "consumer-electronics" } })
    );

    let (_, body) = get(app, "/companies/apple-inc").await;
    assert_eq!(body["industries"], json!(["Consumer Electronics"]));

    let (status, body) = get(app, "/industries/consumer-electronics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["industry"]["companies"], json!(["apple-inc"]));

    let (status, _) = post(
        app,
        "/industries/consumer-electronics",
        json!({ "company_code": "apple-inc" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = post(
        app,
        "/industries/consumer-electronics",
        json!({ "company_code": "nope" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);

    let (status, body) = get(app, "/industries/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No such industry: nope");
}

pub async fn invoice_lifecycle(app: &Router) {
    post(
        app,
        "/companies",
        json!({ "name": "Apple Inc", "description": "Maker of OSX." }),
    )
    .await;

    let (status, body) = post(app, "/invoices", json!({ "comp_code": "apple-inc", "amt": 100 })).await;
    assert_eq!(status, StatusCode::OK);
    let invoice = &body["invoice"];
    assert_eq!(invoice["comp_code"], "apple-inc");
    assert_eq!(invoice["amt"], json!(100.0));
    assert_eq!(invoice["paid"], false);
    assert_eq!(invoice["add_date"], today());
    assert!(invoice["paid_date"].is_null());
    let id = invoice["id"].as_i64().unwrap();

    let (status, body) = get(app, "/invoices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "invoices": [{ "id": id, "comp_code": "apple-inc" }] }));

    let (status, body) = get(app, &format!("/invoices/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["invoice"]["company"],
        json!({ "code": "apple-inc", "name": "Apple Inc", "description": "Maker of OSX." })
    );
    assert_eq!(body["invoice"]["id"], id);
    assert_eq!(body["invoice"]["amt"], json!(100.0));

    let (status, body) = delete(app, &format!("/invoices/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, _) = get(app, &format!("/invoices/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

pub async fn invoice_payment_transitions(app: &Router) {
    post(app, "/companies", json!({ "name": "Apple Inc" })).await;
    let (_, body) = post(app, "/invoices", json!({ "comp_code": "apple-inc", "amt": 100 })).await;
    let uri = format!("/invoices/{}", body["invoice"]["id"]);

    let (status, body) = put(app, &uri, json!({ "amt": 100, "paid": true })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["paid"], true);
    assert_eq!(body["invoice"]["paid_date"], today());
    let first_stamp = body["invoice"]["paid_date"].clone();

    let (status, body) = put(app, &uri, json!({ "amt": 150, "paid": true })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["paid_date"], first_stamp);
    assert_eq!(body["invoice"]["amt"], json!(150.0));

    let (status, body) = put(app, &uri, json!({ "amt": 150, "paid": false })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["paid"], false);
    assert!(body["invoice"]["paid_date"].is_null());
}

pub async fn invoice_amount_rounds_half_away_from_zero(app: &Router) {
    post(app, "/companies", json!({ "name": "Apple Inc" })).await;

    let (status, body) = post(app, "/invoices", json!({ "comp_code": "apple-inc", "amt": "0.125" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["amt"], json!(0.13));

    let uri = format!("/invoices/{}", body["invoice"]["id"]);
    let (status, body) = put(app, &uri, json!({ "amt": "2.675", "paid": false })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["invoice"]["amt"], json!(2.68));
}

pub async fn missing_invoice_is_not_found(app: &Router) {
    let (status, body) = get(app, "/invoices/9999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "No such invoice: 9999999", "status": 404 }));

    let (status, body) = put(app, "/invoices/9999999", json!({ "amt": 10, "paid": true })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No such invoice: 9999999");

    let (status, _) = delete(app, "/invoices/9999999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(app, "/invoices/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No such invoice: abc");
}

pub async fn invoice_for_unknown_company_fails(app: &Router) {
    let (status, body) = post(app, "/invoices", json!({ "comp_code": "nope", "amt": 100 })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);

    let (status, _) = post(app, "/invoices", json!({ "comp_code": "nope", "amt": -1 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

pub async fn deleting_company_cascades(app: &Router) {
    post(app, "/companies", json!({ "name": "Apple Inc" })).await;
    post(app, "/industries", json!({ "industry": "Tech" })).await;
    post(app, "/industries/tech", json!({ "company_code": "apple-inc" })).await;
    let (_, body) = post(app, "/invoices", json!({ "comp_code": "apple-inc", "amt": 100 })).await;
    let id = body["invoice"]["id"].clone();

    let (status, _) = delete(app, "/companies/apple-inc").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(app, &format!("/invoices/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(app, "/industries/tech").await;
    assert_eq!(body["industry"]["companies"], json!([]));
}
