//! Integration tests for the typed admin API methods.
//!
//! These tests verify the request each method sends and the client-side
//! flows built on top of them: login, payment-status find-or-create, and
//! cart checkout.

use std::sync::{Arc, Mutex};

use serde_json::json;
use shop_admin::api::{
    CustomerStatus, CustomerUpdate, NewReward, NewShipping, OrderStatus, OrderUpdate,
    PaymentStatus, ShippingStatus,
};
use shop_admin::storage::MemoryStore;
use shop_admin::{
    AdminApi, AdminConfig, ApiBaseUrl, ApiError, BearerToken, CartItem, CartManager,
    LoggingNavigator, Navigator, OrderRef, TokenManager,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates an API client for `server` with `token` stored, if any.
fn create_api(server: &MockServer, token: Option<&str>) -> AdminApi {
    let config = AdminConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let tokens = TokenManager::new(Arc::new(MemoryStore::new()));
    if let Some(token) = token {
        tokens.set(&BearerToken::new(token).unwrap()).unwrap();
    }
    AdminApi::new(&config, tokens, Arc::new(LoggingNavigator)).unwrap()
}

/// Navigator that remembers every redirect.
#[derive(Debug, Default)]
struct RecordingNavigator {
    pages: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, page: &str) {
        self.pages.lock().unwrap().push(page.to_string());
    }
}

fn my_order(id: i64, amount: &str, payment_method: &str) -> serde_json::Value {
    json!({
        "id": id,
        "order_id": format!("ORD-{id:04}"),
        "payment_method": payment_method,
        "status": "pending",
        "total_amount": amount,
        "created_at": "2024-06-01T12:00:00"
    })
}

fn payment(id: i64, order_db_id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "payment_id": format!("PAY-{id}"),
        "order_id": format!("ORD-{order_db_id:04}"),
        "order_db_id": order_db_id,
        "payment_method": "GCash",
        "status": status,
        "amount": "250.00"
    })
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_login_stores_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/json"))
        .and(body_json(json!({"username": "admin", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "jwt-abc", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "admin",
            "email": "admin@example.com",
            "shop_name": "Corner Shop",
            "created_at": "2024-01-01T00:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, None);
    let token = api.login("admin", "secret").await.unwrap();
    assert_eq!(token.token_type, "bearer");
    assert!(api.tokens().is_authenticated().unwrap());

    let user = api.get_current_user().await.unwrap();
    assert_eq!(user.shop_name.as_deref(), Some("Corner Shop"));

    api.logout().unwrap();
    assert!(!api.tokens().is_authenticated().unwrap());
}

#[tokio::test]
async fn test_failed_login_is_unauthorized_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login/json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect username or password"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = AdminConfig::builder()
        .base_url(ApiBaseUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let tokens = TokenManager::new(Arc::new(MemoryStore::new()));
    let navigator = Arc::new(RecordingNavigator::default());
    let api = AdminApi::new(&config, tokens, navigator.clone()).unwrap();

    let error = api.login("admin", "wrong").await.unwrap_err();

    assert!(matches!(error, ApiError::Unauthorized));
    assert!(!api.tokens().is_authenticated().unwrap());
    assert_eq!(*navigator.pages.lock().unwrap(), vec!["Sign-In.html".to_string()]);
}

// ============================================================================
// Resource mappings
// ============================================================================

#[tokio::test]
async fn test_update_customer_sends_partial_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/customers/3"))
        .and(body_json(json!({"status": "inactive"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "customer_id": "CUST-003",
            "name": "Ana Cruz",
            "email": "ana@example.com",
            "address": null,
            "phone": null,
            "status": "inactive",
            "created_at": "2024-05-01T08:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let update = CustomerUpdate {
        status: Some(CustomerStatus::Inactive),
        ..CustomerUpdate::default()
    };
    let customer = api.update_customer(3, &update).await.unwrap();

    assert_eq!(customer.status, "inactive");
}

#[tokio::test]
async fn test_delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/items/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    api.delete_item(5).await.unwrap();
}

#[tokio::test]
async fn test_update_shipping_status_sends_only_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/shipping/8"))
        .and(body_json(json!({"status": "delivered"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 8,
            "shipping_id": "SHP-008",
            "order_id": 21,
            "courier": "LBC",
            "address": "Makati",
            "status": "delivered",
            "created_at": "2024-06-02T09:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let record = api
        .update_shipping_status(8, ShippingStatus::Delivered)
        .await
        .unwrap();

    assert_eq!(record.order_id, OrderRef::Id(21));
}

#[tokio::test]
async fn test_update_order_and_list_orders() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/orders/2"))
        .and(body_json(json!({"status": "completed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2,
            "order_id": "ORD-0002",
            "customer_id": 1,
            "item_id": 4,
            "payment_method": "COD",
            "status": "completed",
            "created_at": "2024-06-01T12:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 2,
            "order_id": "ORD-0002",
            "customer_name": "Ana Cruz",
            "item_name": "Mug",
            "customer_address": "N/A",
            "payment_method": "COD",
            "status": "completed",
            "created_at": "2024-06-01T12:00:00"
        }])))
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let update = OrderUpdate {
        status: Some(OrderStatus::Completed),
    };
    let order = api.update_order(2, &update).await.unwrap();
    assert_eq!(order.item_id, Some(4));

    let orders = api.get_orders().await.unwrap();
    assert_eq!(orders[0].customer_name, "Ana Cruz");
}

#[tokio::test]
async fn test_create_reward_and_validate_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/rewards/"))
        .and(body_json(json!({
            "reward_id": "RWD-010",
            "type": "Percentage",
            "code": "SUMMER 10",
            "discount": 10.0,
            "validity_period": "2025-08-31"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 10,
            "reward_id": "RWD-010",
            "type": "Percentage",
            "code": "SUMMER 10",
            "discount": "10.00",
            "validity_period": "2025-08-31T00:00:00",
            "status": "valid",
            "created_at": "2025-06-01T00:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/rewards/validate/SUMMER%2010"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "valid": true,
            "reward_id": "RWD-010",
            "type": "Percentage",
            "discount": 10.0,
            "validity_period": "2025-08-31"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let reward = NewReward {
        reward_id: "RWD-010".to_string(),
        reward_type: "Percentage".to_string(),
        code: "SUMMER 10".to_string(),
        discount: 10.0,
        validity_period: chrono::NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
    };
    let created = api.create_reward(&reward).await.unwrap();
    assert_eq!(created.status, "valid");

    let validation = api.validate_reward_code("SUMMER 10").await.unwrap();
    assert!(validation.valid);
}

#[tokio::test]
async fn test_dashboard_stats_and_chart_payloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_orders": 12,
            "active_orders": 4,
            "to_ship": 2,
            "total_revenue": "15230.50",
            "total_customers": 9,
            "total_items": 20
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/rating-distribution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"5": 3, "4": 1})))
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let stats = api.get_dashboard_stats().await.unwrap();
    assert_eq!(stats.to_ship, 2);
    assert!((stats.total_revenue - 15230.5).abs() < f64::EPSILON);

    let distribution = api.get_rating_distribution().await.unwrap();
    assert_eq!(distribution["5"], 3);
}

#[tokio::test]
async fn test_shipping_record_create_fetch_and_delete() {
    let server = MockServer::start().await;
    let record = json!({
        "id": 12,
        "shipping_id": "SHP-012",
        "order_id": 21,
        "courier": "J&T",
        "address": "Quezon City",
        "status": "preparing",
        "created_at": "2024-06-03T10:00:00"
    });
    Mock::given(method("POST"))
        .and(path("/api/shipping/"))
        .and(body_json(json!({
            "shipping_id": "SHP-012",
            "order_id": 21,
            "courier": "J&T",
            "address": "Quezon City"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(record.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/shipping/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/shipping/12"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let shipping = NewShipping {
        shipping_id: "SHP-012".to_string(),
        order_id: 21,
        courier: "J&T".to_string(),
        address: "Quezon City".to_string(),
    };
    let created = api.create_shipping(&shipping).await.unwrap();
    assert_eq!(created.id, 12);

    let fetched = api.get_shipping_record(12).await.unwrap();
    assert_eq!(fetched.order_id, OrderRef::Id(21));
    assert_eq!(fetched.status, "preparing");

    api.delete_shipping(12).await.unwrap();
}

#[tokio::test]
async fn test_get_and_delete_payment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 30,
            "payment_id": "PAY-30",
            "order_id": 17,
            "payment_method": "GCash",
            "status": "paid",
            "amount": "250.00",
            "created_at": "2024-06-05T09:30:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/payments/30"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let payment = api.get_payment(30).await.unwrap();
    assert_eq!(payment.order_id, OrderRef::Id(17));
    assert!((payment.amount - 250.0).abs() < f64::EPSILON);

    api.delete_payment(30).await.unwrap();
}

#[tokio::test]
async fn test_get_review_and_missing_review() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/reviews/6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 6,
            "item_id": 4,
            "customer_name": "Ben Reyes",
            "rating": "4.5",
            "comment": "Sturdy",
            "created_at": "2024-06-04T15:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/reviews/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Review not found"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let review = api.get_review(6).await.unwrap();
    assert_eq!(review.item_id, Some(4));
    assert!((review.rating - 4.5).abs() < f64::EPSILON);

    let error = api.get_review(7).await.unwrap_err();
    assert_eq!(error.status_code(), Some(404));
    assert_eq!(error.to_string(), "Review not found");
}

#[tokio::test]
async fn test_dashboard_lists_send_limit_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/top-items"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Mug", "count": 9},
            {"name": "Cap", "count": 4},
            {"name": "Tee", "count": 2}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/recent-reviews"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "item_name": "Mug",
            "customer_name": "Ben Reyes",
            "rating": 5.0,
            "comment": null,
            "created_at": "2024-06-04T15:00:00"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let top = api.get_top_items(Some(3)).await.unwrap();
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].name, "Mug");

    let recent = api.get_recent_reviews(Some(3)).await.unwrap();
    assert_eq!(recent[0].customer_name, "Ben Reyes");
}

#[tokio::test]
async fn test_dashboard_lists_without_limit_send_no_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/dashboard/top-items"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    assert!(api.get_top_items(None).await.unwrap().is_empty());

    let received = server.received_requests().await.unwrap();
    assert!(received[0].url.query().is_none());
}

// ============================================================================
// Payment status find-or-create
// ============================================================================

#[tokio::test]
async fn test_update_payment_status_updates_existing_payment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/my-payments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([payment(31, 16, "pending"), payment(30, 17, "pending")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/payments/30"))
        .and(body_json(json!({"status": "paid"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(payment(30, 17, "paid")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payments/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/my-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let updated = api
        .update_payment_status(17, PaymentStatus::Paid)
        .await
        .unwrap();

    assert_eq!(updated.id, 30);
    assert_eq!(updated.status, "paid");
}

#[tokio::test]
async fn test_update_payment_status_matches_order_db_id_not_payment_id() {
    let server = MockServer::start().await;
    // Payment 17 belongs to order 3; order 17 has no payment yet.
    Mock::given(method("GET"))
        .and(path("/api/payments/my-payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([payment(17, 3, "paid")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/my-orders"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([my_order(3, "99.00", "COD"), my_order(17, "450.00", "Maya")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/payments/17"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payments/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 40,
            "payment_id": "PAY-1718000000000",
            "order_id": 17,
            "amount": "450.00",
            "payment_method": "Maya",
            "status": "paid",
            "created_at": "2024-06-10T10:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let created = api
        .update_payment_status(17, PaymentStatus::Paid)
        .await
        .unwrap();
    assert_eq!(created.id, 40);

    let received = server.received_requests().await.unwrap();
    let post = received
        .iter()
        .find(|request| request.method.to_string() == "POST")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&post.body).unwrap();

    assert_eq!(body["order_id"], 17);
    assert_eq!(body["amount"], 450.0);
    assert_eq!(body["payment_method"], "Maya");
    assert_eq!(body["status"], "paid");
    assert!(body["payment_id"].as_str().unwrap().starts_with("PAY-"));
}

#[tokio::test]
async fn test_update_payment_status_unknown_order_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/payments/my-payments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/orders/my-orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([my_order(1, "10.00", "COD")])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payments/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let error = api
        .update_payment_status(99, PaymentStatus::Paid)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ApiError::NotFound {
            resource: "Order",
            id: 99
        }
    ));
}

// ============================================================================
// Cart checkout
// ============================================================================

#[tokio::test]
async fn test_checkout_cart_places_one_order_per_line() {
    let server = MockServer::start().await;
    for (item_id, quantity, order_id) in [(1, 2, 100), (2, 1, 101)] {
        Mock::given(method("POST"))
            .and(path("/api/orders/checkout"))
            .and(body_json(json!({
                "item_id": item_id,
                "quantity": quantity,
                "payment_method": "GCash",
                "shipping_method": "Standard"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(my_order(order_id, "100.00", "GCash")))
            .expect(1)
            .mount(&server)
            .await;
    }

    let api = create_api(&server, Some("tok"));
    let cart = CartManager::new(Arc::new(MemoryStore::new()));
    cart.add_item(&CartItem::new(1, "Mug", 50.0), 2).unwrap();
    cart.add_item(&CartItem::new(2, "Cap", 100.0), 1).unwrap();

    let orders = api.checkout_cart(&cart, "GCash", "Standard").await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].id, 101);
    assert!(cart.get_cart().unwrap().is_empty());
}

#[tokio::test]
async fn test_checkout_cart_stops_at_first_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders/checkout"))
        .and(body_json(json!({
            "item_id": 1,
            "quantity": 1,
            "payment_method": "COD",
            "shipping_method": "Express"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(my_order(200, "50.00", "COD")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/orders/checkout"))
        .and(body_json(json!({
            "item_id": 2,
            "quantity": 1,
            "payment_method": "COD",
            "shipping_method": "Express"
        })))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Out of stock"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server, Some("tok"));
    let cart = CartManager::new(Arc::new(MemoryStore::new()));
    for id in 1..=3 {
        cart.add_item(&CartItem::new(id, format!("Item {id}"), 10.0), 1)
            .unwrap();
    }

    let error = api
        .checkout_cart(&cart, "COD", "Express")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Out of stock");

    let remaining: Vec<i64> = cart
        .get_cart()
        .unwrap()
        .iter()
        .map(|entry| entry.item.id)
        .collect();
    assert_eq!(remaining, vec![2, 3]);

    // Only the first two lines were attempted.
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
