#[cfg(test)]
mod integration_tests {
    use crate::schemas::AppState;
    use crate::simulation::Simulation;
    use crate::test_utils::test_utils::{
        StubBehavior, sample_forecast, setup_test_app, setup_test_app_state,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ApiResponse, MiningSummary, TeamOverview, TransactionDto};
    use serde_json::json;

    #[tokio::test]
    async fn test_health_check() {
        // Setup test server
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        // Send GET request to health endpoint
        let response = server.get("/health").await;

        // Verify response
        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["generation_provider"], "stub");
    }

    #[tokio::test]
    async fn test_get_wallet_summary() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/wallet").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<MiningSummary> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Wallet summary retrieved successfully");

        // The sample session is active, so the effective rate includes the
        // base rate plus boosts.
        assert!(body.data.session_active);
        assert!(body.data.mining_rate > body.data.base_rate);
        assert!(body.data.session_ends_at.is_some());
    }

    #[tokio::test]
    async fn test_team_overview_counts_are_consistent() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/team").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<TeamOverview> = response.json();
        let team = body.data;

        assert_eq!(team.size as usize, team.members.len());
        assert!(team.active_members <= team.size);
        assert!(team.pending_members <= team.size - team.active_members);

        // Combined boost is the sum of active members' contributions.
        let expected: f64 = team
            .members
            .iter()
            .filter(|m| m.status == "active")
            .map(|m| m.contribution_rate)
            .sum();
        assert!((team.combined_boost - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_get_node_status() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/node").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["success"].as_bool().unwrap());
        assert!(body["data"]["uptime_percent"].as_f64().unwrap() > 0.0);
        assert!(body["data"]["version"].as_str().unwrap().contains('.'));
    }

    #[tokio::test]
    async fn test_transactions_respect_limit_and_ordering() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let limited = server.get("/api/v1/transactions?limit=5").await;
        limited.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<TransactionDto>> = limited.json();
        assert_eq!(body.data.len(), 5);

        let full = server.get("/api/v1/transactions").await;
        full.assert_status(StatusCode::OK);
        let full_body: ApiResponse<Vec<TransactionDto>> = full.json();
        assert!(full_body.data.len() > 5);
        assert!(
            full_body
                .data
                .windows(2)
                .all(|w| w[0].timestamp >= w[1].timestamp)
        );
    }

    #[tokio::test]
    async fn test_forecast_passes_generation_through_unchanged() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/forecast")
            .json(&json!({
                "currentRate": 0.02,
                "teamSize": 20,
                "activeTeamMembers": 5,
                "question": "How can I double my rate?"
            }))
            .await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["success"].as_bool().unwrap());
        assert_eq!(body["message"], "Forecast generated successfully");

        // Identity pass-through: the card shows exactly what the model said.
        let data = &body["data"];
        assert_eq!(data["insight"], "You have strong team potential.");
        assert_eq!(data["strategy"][0], "Invite 5 more active members");
        assert_eq!(data["strategy"][1], "Join a security circle");
        assert_eq!(data["forecast"]["newMiningRate"], "0.35 π/hr");
        assert_eq!(data["forecast"]["timeline"], "within 6 weeks");
    }

    #[tokio::test]
    async fn test_forecast_empty_generation_maps_to_bad_gateway() {
        let app = setup_test_app(StubBehavior::Empty);
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/forecast")
            .json(&json!({
                "currentRate": 0.02,
                "teamSize": 20,
                "activeTeamMembers": 5,
                "question": "How can I double my rate?"
            }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "EMPTY_GENERATION");
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_forecast_provider_failure_maps_to_bad_gateway() {
        let app = setup_test_app(StubBehavior::Fail("connection refused".to_string()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/forecast")
            .json(&json!({
                "currentRate": 0.02,
                "teamSize": 20,
                "activeTeamMembers": 5,
                "question": "How can I double my rate?"
            }))
            .await;

        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = response.json();
        assert_eq!(body["code"], "GENERATION_UNAVAILABLE");
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("connection refused")
        );
    }

    #[tokio::test]
    async fn test_forecast_rejects_active_members_exceeding_team_size() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/forecast")
            .json(&json!({
                "currentRate": 0.02,
                "teamSize": 5,
                "activeTeamMembers": 20,
                "question": "How can I double my rate?"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forecast_rejects_empty_question() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/forecast")
            .json(&json!({
                "currentRate": 0.02,
                "teamSize": 20,
                "activeTeamMembers": 5,
                "question": ""
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forecast_rejects_negative_rate() {
        let app = setup_test_app(StubBehavior::Succeed(sample_forecast()));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/v1/forecast")
            .json(&json!({
                "currentRate": -0.5,
                "teamSize": 20,
                "activeTeamMembers": 5,
                "question": "How can I double my rate?"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_simulated_outage_maps_to_service_unavailable() {
        // Full failure rate: every mock fetch fails, forecast is untouched.
        let state = AppState {
            simulation: Simulation {
                delay_ms: 0,
                failure_rate: 1.0,
            },
            ..setup_test_app_state(StubBehavior::Succeed(sample_forecast()))
        };
        let server = TestServer::new(crate::router::create_router(state)).unwrap();

        let response = server.get("/api/v1/wallet").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    }
}
