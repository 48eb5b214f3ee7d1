#[cfg(test)]
pub mod test_utils {
    use crate::config::Settings;
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::http::{StatusCode, header};
    use axum::{Json, Router, routing::post};
    use common::{ClientConfig, Revision};
    use serde_json::Value;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    ///
    /// # Returns
    ///
    /// A guard that will clean up the subscriber when dropped.
    pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Settings as the CLI would resolve them, pointed at `api_url`.
    pub fn test_settings(api_url: &str, revision: Revision) -> Settings {
        Settings {
            api_url: Some(api_url.to_string()),
            revision,
            bmi_source: None,
            bind_address: "127.0.0.1:0".to_string(),
            static_dir: PathBuf::from("workspace/frontend/dist"),
        }
    }

    /// Create axum app for testing
    pub fn setup_test_app(client_config: ClientConfig, static_dir: PathBuf) -> Router {
        create_router(AppState { client_config, static_dir })
    }

    /// Request bodies the mock predictor has received, in arrival order.
    #[derive(Clone, Default)]
    pub struct Received(Arc<Mutex<Vec<Value>>>);

    impl Received {
        pub fn bodies(&self) -> Vec<Value> {
            self.0.lock().unwrap().clone()
        }
    }

    /// Serves `POST /predict` on a loopback port, answering every call with
    /// `status` and `body`. Returns the base URL.
    pub async fn spawn_mock_predictor(status: StatusCode, body: &'static str) -> (String, Received) {
        let received = Received::default();
        let recorder = received.clone();

        let app = Router::new().route(
            "/predict",
            post(move |Json(payload): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    recorder.0.lock().unwrap().push(payload);
                    (status, [(header::CONTENT_TYPE, "application/json")], body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", address), received)
    }

    /// Base URL of a loopback port nothing listens on.
    pub async fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", address)
    }
}
