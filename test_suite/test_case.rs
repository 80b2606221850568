//! Test case scaffolding for the integration tests
//!
//! Each test spawns its own application instance with the in-memory person
//! directory and terminates it gracefully at the end of the test.
use std::{thread::JoinHandle, time::Duration};

use tokio::sync::oneshot;

use infra::{AppState, memory::repositories::MemoryPersonRepository};
use settings::AppSettings;

use crate::helpers::{TestApp, configure_test_app, spawn_app};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Test case for integration tests
pub struct TestCase {
    pub app_state: AppState,
    app_handle: JoinHandle<()>,
    shutdown_signal: oneshot::Sender<()>,
    log: bool,
    pub http_client: reqwest::Client,
}

impl TestCase {
    pub async fn begin(app_settings: AppSettings, log: bool) -> Self {
        let app = configure_test_app(app_settings).await;
        let TestApp {
            app_settings,
            listener,
        } = app;
        let app_state = AppState {
            app_settings,
            person_repository: MemoryPersonRepository::with_sample_directory(),
        };
        let (app_handle, shutdown_signal) = spawn_app(app_state.clone(), listener).await;
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();
        Self {
            app_state,
            app_handle,
            shutdown_signal,
            log,
            http_client,
        }
    }

    pub async fn end(self) {
        if self.log {
            println!("Sending graceful shutdown signal...");
        }
        self.shutdown_signal.send(()).unwrap();
        if self.log {
            println!("Waiting for server to gracefully shutdown...");
        }
        self.app_handle.join().unwrap();
        if self.log {
            println!("Server has gracefully shutdown.");
        }
    }

    pub fn origin(&self) -> String {
        format!(
            "{}://{}:{}",
            self.app_state.app_settings.http.protocol,
            self.app_state.app_settings.http.host,
            self.app_state.app_settings.http.port,
        )
    }

    pub async fn find_person(
        &self,
        document_type: &str,
        document_number: &str,
    ) -> reqwest::Response {
        let uri = format!("{}/api/v1/user", self.origin());
        self.http_client
            .get(&uri)
            .query(&[
                ("documentType", document_type),
                ("documentNumber", document_number),
            ])
            .send()
            .await
            .unwrap()
    }

    pub async fn find_person_without_params(&self) -> reqwest::Response {
        let uri = format!("{}/api/v1/user", self.origin());
        self.http_client.get(&uri).send().await.unwrap()
    }
}
