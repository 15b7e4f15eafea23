//! End-to-end tests for the HTTP API
//!
//! Each test drives a fresh in-memory router through `axum-test`.

use axum::http::StatusCode;
use axum_test::TestServer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use domain_portfolio::Portfolio;
use interface_api::{config::ApiConfig, router, AppState};
use test_utils::{assert_decimal_approx_eq, HoldingFixtures, IdFixtures};

fn server() -> TestServer {
    server_with(AppState::new(ApiConfig::default()))
}

fn server_with(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

fn seeded_server() -> TestServer {
    let portfolio = Portfolio::from_holdings(HoldingFixtures::mixed()).unwrap();
    server_with(AppState::with_portfolio(ApiConfig::default(), portfolio))
}

fn decimal(value: &Value) -> Decimal {
    value
        .as_str()
        .unwrap_or_else(|| panic!("expected decimal string, got {}", value))
        .parse()
        .unwrap()
}

fn holding_body(name: &str, category: &str, cost_basis: u64, current_value: u64) -> Value {
    json!({
        "name": name,
        "symbol": name.to_uppercase(),
        "category": category,
        "cost_basis": cost_basis,
        "units": 10,
        "unit_price": cost_basis / 10,
        "acquired_on": "2024-01-15",
        "current_value": current_value,
    })
}

// ============================================================================
// Health Tests
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = server().get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let response = server().get("/api/v1/portfolio").await;

        response.assert_status_ok();
        assert!(response.headers().contains_key("x-request-id"));
    }
}

// ============================================================================
// Portfolio Tests
// ============================================================================

mod portfolio_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_portfolio() {
        let body = server().get("/api/v1/portfolio").await.json::<Value>();

        assert_eq!(body["holdings"].as_array().unwrap().len(), 0);
        assert_eq!(decimal(&body["snapshot"]["total_value"]), Decimal::ZERO);
        assert_eq!(body["snapshot"]["holding_count"], 0);
        assert_eq!(body["snapshot"]["display"]["total_gain_loss_percent"], "0.00%");
    }

    #[tokio::test]
    async fn test_add_two_holdings_scenario() {
        let server = server();

        server
            .post("/api/v1/portfolio/holdings")
            .json(&holding_body("Reliance", "equity", 50000, 55000))
            .await
            .assert_status(StatusCode::CREATED);
        let response = server
            .post("/api/v1/portfolio/holdings")
            .json(&holding_body("Nifty", "mutual_funds", 30000, 32000))
            .await;

        response.assert_status(StatusCode::CREATED);
        let snapshot = &response.json::<Value>()["snapshot"];
        assert_eq!(decimal(&snapshot["total_value"]), dec!(87000));
        assert_eq!(decimal(&snapshot["total_investment"]), dec!(80000));
        assert_eq!(decimal(&snapshot["total_gain_loss"]), dec!(7000));
        assert_eq!(decimal(&snapshot["total_gain_loss_percent"]), dec!(8.75));
        assert_eq!(snapshot["display"]["total_value"], "₹87,000");
        assert_eq!(snapshot["display"]["total_gain_loss_percent"], "+8.75%");
    }

    #[tokio::test]
    async fn test_add_duplicate_identifier_conflicts() {
        let server = seeded_server();
        let mut body = holding_body("Copy", "equity", 100, 100);
        body["id"] = json!(IdFixtures::reliance());

        let response = server.post("/api/v1/portfolio/holdings").json(&body).await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(response.json::<Value>()["error"], "conflict");
    }

    #[tokio::test]
    async fn test_add_negative_cost_is_unprocessable() {
        let mut body = holding_body("Broken", "bond", 100, 100);
        body["cost_basis"] = json!(-5);

        let response = server().post("/api/v1/portfolio/holdings").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_overflowing_holding_is_rejected_and_portfolio_kept() {
        let server = seeded_server();
        let mut body = holding_body("Penny", "equity", 10, 10);
        body["cost_basis"] = json!("0.0000000000000000000000000001");
        body["current_value"] = json!("10000000000");

        let response = server.post("/api/v1/portfolio/holdings").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], "validation_error");

        let portfolio = server.get("/api/v1/portfolio").await;
        portfolio.assert_status_ok();
        let portfolio = portfolio.json::<Value>();
        assert_eq!(portfolio["holdings"].as_array().unwrap().len(), 3);
        assert_eq!(portfolio["snapshot"]["holding_count"], 3);
        assert_eq!(decimal(&portfolio["snapshot"]["total_value"]), dec!(106000));
    }

    #[tokio::test]
    async fn test_holdings_whose_total_overflows_are_rejected() {
        let server = seeded_server();
        let mut body = holding_body("Whale", "bond", 10, 10);
        body["cost_basis"] = json!(Decimal::MAX.to_string());
        body["current_value"] = json!(Decimal::MAX.to_string());

        server
            .post("/api/v1/portfolio/holdings")
            .json(&body)
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

        let snapshot = &server.get("/api/v1/portfolio").await.json::<Value>()["snapshot"];
        assert_eq!(snapshot["holding_count"], 3);
        assert_eq!(decimal(&snapshot["total_investment"]), dec!(100000));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = server().post("/api/v1/portfolio/holdings").text("{not json").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_remove_and_not_found() {
        let server = seeded_server();
        let id = IdFixtures::reliance();
        let path = format!("/api/v1/portfolio/holdings/{}", id.as_uuid());

        let response = server.delete(&path).await;
        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["snapshot"]["holding_count"], 2);
        assert_eq!(decimal(&body["snapshot"]["total_value"]), dec!(51000));

        let again = server.delete(&path).await;
        again.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(again.json::<Value>()["error"], "not_found");
    }

    #[tokio::test]
    async fn test_unparsable_identifier_is_bad_request() {
        server()
            .delete("/api/v1/portfolio/holdings/not-a-uuid")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_replaces_holding() {
        let server = seeded_server();
        let id = IdFixtures::government_bond();

        let response = server
            .put(&format!("/api/v1/portfolio/holdings/{}", id.as_uuid()))
            .json(&holding_body("Government Bond 2030", "bond", 20000, 21000))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        let bond = &body["holdings"][2];
        assert_eq!(bond["id"], json!(id));
        assert_eq!(decimal(&bond["gain_loss"]), dec!(1000));
        assert_eq!(decimal(&body["snapshot"]["total_value"]), dec!(108000));
    }

    #[tokio::test]
    async fn test_replace_with_duplicates_leaves_state() {
        let server = seeded_server();
        let mut first = holding_body("A", "equity", 100, 100);
        let mut second = holding_body("B", "equity", 200, 200);
        first["id"] = json!("3f0d8e2a-6c1b-4a57-9d0e-2b8f6c4a1e11");
        second["id"] = json!("3f0d8e2a-6c1b-4a57-9d0e-2b8f6c4a1e11");

        let response = server
            .put("/api/v1/portfolio/holdings")
            .json(&json!({ "holdings": [first, second] }))
            .await;

        response.assert_status(StatusCode::CONFLICT);
        let body = server.get("/api/v1/portfolio").await.json::<Value>();
        assert_eq!(body["snapshot"]["holding_count"], 3);
    }

    #[tokio::test]
    async fn test_replace_with_empty_clears() {
        let server = seeded_server();

        let response = server
            .put("/api/v1/portfolio/holdings")
            .json(&json!({ "holdings": [] }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["snapshot"]["holding_count"], 0);
    }

    #[tokio::test]
    async fn test_valuations_are_all_or_nothing() {
        let server = seeded_server();
        let id = IdFixtures::reliance();

        let rejected = server
            .post("/api/v1/portfolio/valuations")
            .json(&json!({ "valuations": [
                { "id": id, "current_value": 60000 },
                { "id": IdFixtures::unknown_holding(), "current_value": 1 },
            ]}))
            .await;
        rejected.assert_status(StatusCode::NOT_FOUND);

        let unchanged = server.get("/api/v1/portfolio").await.json::<Value>();
        assert_eq!(decimal(&unchanged["holdings"][0]["current_value"]), dec!(55000));

        let accepted = server
            .post("/api/v1/portfolio/valuations")
            .json(&json!({ "valuations": [{ "id": id, "current_value": 60000 }] }))
            .await;
        accepted.assert_status_ok();
        assert_eq!(decimal(&accepted.json::<Value>()["snapshot"]["total_value"]), dec!(111000));
    }

    #[tokio::test]
    async fn test_insights() {
        let body = seeded_server().get("/api/v1/portfolio/insights").await.json::<Value>();

        assert_eq!(body["best_performer"]["symbol"], "RELIANCE");
        assert_eq!(body["diversity"], 3);
        let allocation = body["allocation"].as_array().unwrap();
        assert_eq!(allocation.len(), 3);
        assert_eq!(allocation[0]["category"], "equity");
        assert_eq!(allocation[0]["label"], "Stocks");
    }

    #[tokio::test]
    async fn test_empty_insights() {
        let body = server().get("/api/v1/portfolio/insights").await.json::<Value>();

        assert!(body["best_performer"].is_null());
        assert_eq!(body["diversity"], 0);
        assert_eq!(body["allocation"].as_array().unwrap().len(), 0);
    }
}

// ============================================================================
// SIP Tests
// ============================================================================

mod sip_tests {
    use super::*;

    fn params(contribution: u64, rate: i64, years: u32) -> Value {
        json!({
            "monthly_contribution": contribution,
            "annual_return_rate": rate,
            "duration_years": years,
        })
    }

    #[tokio::test]
    async fn test_standard_projection() {
        let response = server().post("/api/v1/sip/projections").json(&params(10000, 12, 10)).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(decimal(&body["total_investment"]), dec!(1200000));
        assert_decimal_approx_eq(decimal(&body["total_value"]), dec!(2323390.76), dec!(0.01));
        assert_eq!(body["display"]["total_investment"], "₹12,00,000");
        assert_eq!(body["display"]["total_value"], "₹23,23,390.76");
        assert_eq!(body["yearly"].as_array().unwrap().len(), 10);
        assert_eq!(body["chart"]["years"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_default_limits_reject_out_of_range_input() {
        let server = server();

        for body in [params(10000, 0, 10), params(100, 12, 10), params(10000, 12, 60)] {
            let response = server.post("/api/v1/sip/projections").json(&body).await;
            response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        }
    }

    #[tokio::test]
    async fn test_configured_limits_allow_zero_rate() {
        let config = ApiConfig {
            sip_min_annual_return: Decimal::ZERO,
            ..ApiConfig::default()
        };
        let server = server_with(AppState::new(config));

        let response = server.post("/api/v1/sip/projections").json(&params(10000, 0, 10)).await;

        response.assert_status_ok();
        assert_eq!(decimal(&response.json::<Value>()["total_value"]), dec!(1200000));
    }

    #[tokio::test]
    async fn test_overflowing_projection_is_unprocessable() {
        let body = json!({
            "monthly_contribution": (Decimal::MAX / dec!(2)).to_string(),
            "annual_return_rate": 12,
            "duration_years": 1,
        });

        let response = server().post("/api/v1/sip/projections").json(&body).await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.json::<Value>()["error"], "validation_error");
    }

    #[tokio::test]
    async fn test_save_list_and_remove_plans() {
        let server = server();

        let saved = server.post("/api/v1/sip/plans").json(&params(5000, 12, 5)).await;
        saved.assert_status(StatusCode::CREATED);
        assert_eq!(saved.json::<Value>()["index"], 0);
        server.post("/api/v1/sip/plans").json(&params(8000, 10, 15)).await;

        server.delete("/api/v1/sip/plans/0").await.assert_status(StatusCode::NO_CONTENT);

        let plans = server.get("/api/v1/sip/plans").await.json::<Value>();
        let plans = plans.as_array().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0]["index"], 0);
        assert_eq!(plans[0]["parameters"]["duration_years"], 15);
    }

    #[tokio::test]
    async fn test_remove_missing_plan() {
        server()
            .delete("/api/v1/sip/plans/5")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}

// ============================================================================
// Forecast Tests
// ============================================================================

mod forecast_tests {
    use super::*;

    #[tokio::test]
    async fn test_forecast_with_starting_value() {
        let response = server()
            .get("/api/v1/forecasts/1Y")
            .add_query_param("starting_value", "100000")
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["period"], "1Y");
        assert_eq!(body["months"], 12);
        assert_eq!(decimal(&body["expected_annual_return"]), dec!(12.3));
        assert_eq!(decimal(&body["confidence"]), dec!(85));
        assert_eq!(body["points"].as_array().unwrap().len(), 13);
        assert_eq!(body["points"][0]["label"], "Now");
    }

    #[tokio::test]
    async fn test_forecast_defaults_to_portfolio_value() {
        let body = seeded_server().get("/api/v1/forecasts/6M").await.json::<Value>();

        assert_eq!(decimal(&body["starting_value"]), dec!(106000));
        assert_eq!(body["display_starting_value"], "₹1,06,000");
    }

    #[tokio::test]
    async fn test_forecast_from_maximum_value_is_unprocessable() {
        server()
            .get("/api/v1/forecasts/5Y")
            .add_query_param("starting_value", Decimal::MAX.to_string())
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_period() {
        server()
            .get("/api/v1/forecasts/3Y")
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

// ============================================================================
// Goal Tests
// ============================================================================

mod goal_tests {
    use super::*;

    fn goal_body(target: u64, current: u64) -> Value {
        json!({
            "title": "Dream Home",
            "target_amount": target,
            "current_amount": current,
            "target_date": "2030-03-31",
            "category": "Real Estate",
        })
    }

    #[tokio::test]
    async fn test_create_update_remove_goal() {
        let server = server();

        let created = server.post("/api/v1/goals").json(&goal_body(2000000, 500000)).await;
        created.assert_status(StatusCode::CREATED);
        let created = created.json::<Value>();
        assert_eq!(decimal(&created["progress_percent"]), dec!(25));
        assert_eq!(created["category"], "Real Estate");
        assert_eq!(created["display"]["remaining_amount"], "₹15,00,000");

        let id = created["id"].as_str().unwrap().to_string();
        let updated = server
            .put(&format!("/api/v1/goals/{}", id))
            .json(&goal_body(2000000, 2500000))
            .await;
        updated.assert_status_ok();
        let updated = updated.json::<Value>();
        assert_eq!(decimal(&updated["progress_percent"]), dec!(100));
        assert_eq!(updated["is_achieved"], true);

        server
            .delete(&format!("/api/v1/goals/{}", id))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let goals = server.get("/api/v1/goals").await.json::<Value>();
        assert_eq!(goals.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_invalid_goal_is_unprocessable() {
        server()
            .post("/api/v1/goals")
            .json(&goal_body(0, 0))
            .await
            .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_update_missing_goal() {
        server()
            .put("/api/v1/goals/3f0d8e2a-6c1b-4a57-9d0e-2b8f6c4a1e11")
            .json(&goal_body(1000, 0))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
