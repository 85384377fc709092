//! API integration tests
//!
//! These run against a live server with a scratch database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000/api";

async fn post_car_booking(client: &Client, payload: Value) -> reqwest::Response {
    client
        .post(format!("{}/car-booking", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/test", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Backend API is running successfully!");
}

#[tokio::test]
#[ignore]
async fn test_car_booking_gets_status_and_source_defaults() {
    let client = Client::new();

    let response = post_car_booking(
        &client,
        json!({
            "name": "A",
            "phone": "1",
            "pickup": "X",
            "drop": "Y",
            "date": "2024-01-01",
            "vehicleType": "Sedan"
        }),
    )
    .await;

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["carBooking"]["status"], "New");
    assert_eq!(body["carBooking"]["source"], "Car Booking Page");

    // Cleanup
    let id = body["carBooking"]["id"].as_str().expect("No booking id");
    let _ = client
        .delete(format!("{}/admin/car-bookings/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_car_booking_missing_required_field_is_rejected() {
    let client = Client::new();

    // No vehicleType
    let response = post_car_booking(
        &client,
        json!({
            "name": "A",
            "phone": "1",
            "pickup": "X",
            "drop": "Y",
            "date": "2024-01-01"
        }),
    )
    .await;

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_tour_booking_created_with_new_status() {
    let client = Client::new();

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({ "name": "Asha", "phone": "9000000000" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["booking"]["status"], "New");

    let id = body["booking"]["id"].as_str().expect("No booking id");
    let _ = client
        .delete(format!("{}/admin/bookings/{}", BASE_URL, id))
        .send()
        .await;
}

#[tokio::test]
#[ignore]
async fn test_admin_bookings_are_newest_first() {
    let client = Client::new();

    let mut ids = Vec::new();
    for name in ["first", "second", "third"] {
        let response = client
            .post(format!("{}/bus-booking", BASE_URL))
            .json(&json!({
                "name": name,
                "phone": "1",
                "pickup": "X",
                "drop": "Y",
                "date": "2024-01-01"
            }))
            .send()
            .await
            .expect("Failed to send request");
        let body: Value = response.json().await.expect("Failed to parse response");
        ids.push(
            body["busBooking"]["id"]
                .as_str()
                .expect("No booking id")
                .to_string(),
        );
    }

    let response = client
        .get(format!("{}/admin/bus-bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let bookings: Vec<Value> = response.json().await.expect("Failed to parse response");
    let positions: Vec<usize> = ids
        .iter()
        .map(|id| {
            bookings
                .iter()
                .position(|b| b["id"].as_str() == Some(id))
                .expect("created booking missing from listing")
        })
        .collect();

    // Later submissions appear earlier in the list
    assert!(positions[0] > positions[1]);
    assert!(positions[1] > positions[2]);

    for id in ids {
        let _ = client
            .delete(format!("{}/admin/bus-bookings/{}", BASE_URL, id))
            .send()
            .await;
    }
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_id_still_succeeds() {
    let client = Client::new();

    let response = client
        .delete(format!(
            "{}/admin/bookings/00000000-0000-0000-0000-000000000000",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
}

#[tokio::test]
#[ignore]
async fn test_setting_an_offer_twice_keeps_only_the_second() {
    let client = Client::new();

    for title in ["First offer", "Second offer"] {
        let response = client
            .post(format!("{}/admin/offer", BASE_URL))
            .json(&json!({ "title": title, "image": "/img/offer.jpg" }))
            .send()
            .await
            .expect("Failed to send request");
        assert!(response.status().is_success());
    }

    let response = client
        .get(format!("{}/offer", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let offer: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(offer["title"], "Second offer");
    assert_eq!(offer["isActive"], true);
    assert_eq!(offer["delay"], 10);
}

#[tokio::test]
#[ignore]
async fn test_contact_submission_is_stored_verbatim() {
    let client = Client::new();

    let response = client
        .post(format!("{}/contact", BASE_URL))
        .json(&json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "message": "Do you run weekend tours?"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let listing = client
        .get(format!("{}/admin/contacts", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let contacts: Vec<Value> = listing.json().await.expect("Failed to parse response");
    let latest = contacts.first().expect("No contacts stored");
    assert_eq!(latest["email"], "ravi@example.com");
}

#[tokio::test]
#[ignore]
async fn test_dashboard_counts_add_up() {
    let client = Client::new();

    let response = client
        .get(format!("{}/admin/dashboard-counts", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let counts: Value = response.json().await.expect("Failed to parse response");
    let tour = counts["tourBookings"].as_i64().expect("tourBookings");
    let car = counts["carBookings"].as_i64().expect("carBookings");
    let bus = counts["busBookings"].as_i64().expect("busBookings");
    assert_eq!(
        counts["totalNewActionable"].as_i64().expect("total"),
        tour + car + bus
    );
    assert!(counts["contacts"].is_number());
    assert!(counts["packages"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_create_and_delete_package() {
    let client = Client::new();

    let response = client
        .post(format!("{}/admin/packages", BASE_URL))
        .json(&json!({
            "title": "Goa Getaway",
            "category": "Beach",
            "price": 19999,
            "duration": "4D/3N",
            "places": "Goa, Gokarna",
            "image": "/img/goa.jpg"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    let id = body["pkg"]["id"].as_str().expect("No package id");

    let response = client
        .delete(format!("{}/admin/packages/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
}
