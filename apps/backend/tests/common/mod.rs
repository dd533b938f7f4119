//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext wrapping an in-memory application state and test server
//! - Helper functions for signing in and scheduling topics
//!
//! Everything runs in process; no external services are required.

#![allow(dead_code)]

pub mod fixtures;

use axum::http::HeaderValue;
use axum_test::TestServer;
use chrono::NaiveDate;
use serde_json::Value;

use prepmate_backend::config::Config;
use prepmate_backend::{router, AppState};

/// Test context holding the application state and a server bound to it.
pub struct TestContext {
    pub state: AppState,
    pub server: TestServer,
}

impl TestContext {
    /// Create a context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context with a custom configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(&config);
        let server = TestServer::new(router(state.clone())).expect("Failed to start test server");
        Self { state, server }
    }

    /// Sign in a test user and return its token.
    pub fn sign_in(&self) -> String {
        self.state
            .sessions
            .create_session("Test Student", "student@example.com")
            .expect("Failed to create test session")
            .token
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value")
    }

    /// Complete a topic through the API and return the created revisions.
    pub async fn complete_topic(
        &self,
        token: &str,
        topic_id: &str,
        topic_name: &str,
        subject: &str,
        completed_on: NaiveDate,
    ) -> Vec<Value> {
        let response = self
            .server
            .post("/api/topics/complete")
            .add_header(
                axum::http::header::AUTHORIZATION,
                Self::auth_header_value(token),
            )
            .json(&fixtures::complete_topic_request(
                topic_id,
                topic_name,
                subject,
                Some(completed_on),
            ))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        body["revisions"].as_array().cloned().unwrap_or_default()
    }
}
