#[cfg(test)]
mod integration_tests {
    use crate::cli::commands::{PredictArgs, predict, print_schema};
    use crate::client::PredictionClient;
    use crate::config::{DEFAULT_BIND_ADDRESS, Settings, SettingsError};
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{
        init_test_tracing, refused_url, setup_test_app, spawn_mock_predictor, test_settings,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{BmiSource, ClientConfig, PredictionError, Revision, Schema, SubmitConfig};
    use compute::conclude;
    use config::{File, FileFormat};
    use std::collections::BTreeSet;

    const LOW_RISK: &str = r#"{"Prediction": "Low risk"}"#;

    fn submit_config(api_url: &str, revision: Revision) -> SubmitConfig {
        ClientConfig {
            api_url: Some(api_url.to_string()),
            revision,
            bmi_source: None,
        }
        .resolve()
    }

    // ===================== Prediction client =====================

    #[tokio::test]
    async fn test_client_sends_schema_keys_and_reads_prediction() {
        let _guard = init_test_tracing();
        let (url, received) = spawn_mock_predictor(StatusCode::OK, LOW_RISK).await;

        for revision in Revision::ALL {
            let submit = submit_config(&url, revision);
            let request = submit.new_form().collect();
            let response = PredictionClient::new(&submit.api_url)
                .predict(&request)
                .await
                .unwrap();
            assert_eq!(response.prediction, "Low risk");
        }

        let bodies = received.bodies();
        assert_eq!(bodies.len(), 3);
        for (body, revision) in bodies.iter().zip(Revision::ALL) {
            let sent: BTreeSet<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
            let expected: BTreeSet<&str> = Schema::for_revision(revision).keys().collect();
            assert_eq!(sent, expected, "keys sent for {}", revision);
        }
    }

    #[tokio::test]
    async fn test_client_classifies_failures() {
        let _guard = init_test_tracing();
        let request = submit_config("http://unused", Revision::Compact).new_form().collect();

        let (url, _) = spawn_mock_predictor(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": "boom"}"#).await;
        let err = PredictionClient::new(&url).predict(&request).await.unwrap_err();
        assert!(matches!(err, PredictionError::Status { status: 500, .. }));

        let (url, _) = spawn_mock_predictor(StatusCode::OK, "<html>not json</html>").await;
        let err = PredictionClient::new(&url).predict(&request).await.unwrap_err();
        assert!(matches!(err, PredictionError::Decode(_)));

        let (url, _) = spawn_mock_predictor(StatusCode::OK, r#"{"prediction": "Low risk"}"#).await;
        let err = PredictionClient::new(&url).predict(&request).await.unwrap_err();
        assert!(matches!(err, PredictionError::UnexpectedFormat(_)));

        let err = PredictionClient::new(&refused_url().await).predict(&request).await.unwrap_err();
        assert!(matches!(err, PredictionError::Transport(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_inline_and_next_submit_works() {
        let _guard = init_test_tracing();
        let down = submit_config(&refused_url().await, Revision::Full);
        let request = down.new_form().collect();

        let result = PredictionClient::new(&down.api_url).predict(&request).await;
        let cause = match &result {
            Err(PredictionError::Transport(cause)) => cause.clone(),
            other => panic!("expected a transport error, got {:?}", other),
        };
        assert!(!cause.is_empty());

        let outcome = conclude(&down.schema, &request, result).unwrap();
        let message = outcome.message().unwrap();
        assert!(message.starts_with("Error connecting to the API: "));
        assert!(message.contains(&cause));

        let (url, _) = spawn_mock_predictor(StatusCode::OK, LOW_RISK).await;
        let up = submit_config(&url, Revision::Full);
        let result = PredictionClient::new(&up.api_url).predict(&request).await;
        let outcome = conclude(&up.schema, &request, result).unwrap();
        assert_eq!(outcome.report().unwrap().prediction, "Low risk");
    }

    // ===================== predict command =====================

    #[tokio::test]
    async fn test_predict_renders_prediction_and_charts() {
        let _guard = init_test_tracing();
        let (url, received) = spawn_mock_predictor(StatusCode::OK, LOW_RISK).await;
        let settings = test_settings(&url, Revision::Extended);

        let dir = tempfile::tempdir().unwrap();
        let charts = dir.path().join("report.html");
        let args = PredictArgs {
            set: vec![
                ("SleepHours".to_string(), "6.5".to_string()),
                ("HadAsthma".to_string(), "true".to_string()),
            ],
            charts: Some(charts.clone()),
            ..Default::default()
        };

        let output = predict(&settings, args).await.unwrap();
        assert!(output.starts_with("Prediction\n----------\nLow risk\n"));
        assert!(output.contains("- Health Days (last 30 days)"));
        assert!(output.contains("- Sleep Hours"));
        assert!(output.contains("- Risk Factors"));

        let body = &received.bodies()[0];
        assert_eq!(body["SleepHours"], 6.5);
        assert_eq!(body["HadAsthma"], true);

        let page = std::fs::read_to_string(&charts).unwrap();
        assert!(page.contains("Low risk"));
        assert_eq!(page.matches("Plotly.newPlot(").count(), 4);
    }

    #[tokio::test]
    async fn test_predict_reads_input_file_then_set() {
        let _guard = init_test_tracing();
        let (url, received) = spawn_mock_predictor(StatusCode::OK, LOW_RISK).await;
        let settings = test_settings(&url, Revision::Compact);

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("answers.json");
        std::fs::write(
            &input,
            r#"{"Sex": "Male", "HeightInMeters": 1.8, "HadDiabetes": true, "PhysicalHealthDays": 4}"#,
        )
        .unwrap();

        let args = PredictArgs {
            input: Some(input),
            set: vec![("HadDiabetes".to_string(), "false".to_string())],
            json: true,
            ..Default::default()
        };
        let output = predict(&settings, args).await.unwrap();

        let outcome: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(outcome["status"], "rendered");
        assert_eq!(outcome["prediction"], "Low risk");

        let body = &received.bodies()[0];
        assert_eq!(body["Sex"], "Male");
        assert_eq!(body["HeightInMeters"], 1.8);
        assert_eq!(body["HadDiabetes"], false);
        assert_eq!(body["PhysicalHealthDays"], 4);
    }

    #[tokio::test]
    async fn test_predict_rejects_bad_input() {
        let _guard = init_test_tracing();
        let settings = test_settings("http://unused", Revision::Compact);

        let unknown = PredictArgs {
            set: vec![("ChestScan".to_string(), "true".to_string())],
            ..Default::default()
        };
        assert!(predict(&settings, unknown).await.is_err());

        let not_an_option = PredictArgs {
            set: vec![("Sex".to_string(), "Unknown".to_string())],
            ..Default::default()
        };
        assert!(predict(&settings, not_an_option).await.is_err());
    }

    #[tokio::test]
    async fn test_predict_missing_key_inline_for_full() {
        let _guard = init_test_tracing();
        let (url, _) = spawn_mock_predictor(StatusCode::OK, r#"{"label": 1}"#).await;

        for revision in [Revision::Full, Revision::Extended] {
            let output = predict(&test_settings(&url, revision), PredictArgs::default())
                .await
                .unwrap();
            assert_eq!(output, "Unexpected response format from the API\n");
        }
    }

    #[tokio::test]
    async fn test_predict_missing_key_propagates_for_compact() {
        let _guard = init_test_tracing();
        let (url, _) = spawn_mock_predictor(StatusCode::OK, r#"{"label": 1}"#).await;

        let err = predict(&test_settings(&url, Revision::Compact), PredictArgs::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PredictionError>(),
            Some(PredictionError::UnexpectedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_predict_status_error_inline() {
        let _guard = init_test_tracing();
        let (url, _) = spawn_mock_predictor(StatusCode::SERVICE_UNAVAILABLE, "{}").await;

        let output = predict(&test_settings(&url, Revision::Full), PredictArgs::default())
            .await
            .unwrap();
        assert_eq!(
            output,
            format!(
                "Error connecting to the API: 503 Server Error: Service Unavailable for url: {}/predict\n",
                url
            )
        );
    }

    #[tokio::test]
    async fn test_predict_full_without_risk_factors_notes_it() {
        let _guard = init_test_tracing();
        let (url, _) = spawn_mock_predictor(StatusCode::OK, LOW_RISK).await;

        let set = Schema::for_revision(Revision::Full)
            .risk_factors()
            .map(|field| (field.key.to_string(), "false".to_string()))
            .collect();
        let args = PredictArgs { set, ..Default::default() };

        let output = predict(&test_settings(&url, Revision::Full), args).await.unwrap();
        assert!(output.contains("- Health Days Overview"));
        assert!(!output.contains("- Present Risk Factors"));
        assert!(output.contains("No risk factors selected."));
    }

    // ===================== schema command =====================

    #[test]
    fn test_schema_lists_fields_with_defaults() {
        let mut settings = test_settings("http://unused", Revision::Full);
        let json: serde_json::Value = serde_json::from_str(&print_schema(&settings).unwrap()).unwrap();
        assert_eq!(json["revision"], "full");
        assert_eq!(json["bmi_source"], "supplied");

        let fields = json["fields"].as_array().unwrap();
        let age = fields.iter().find(|f| f["key"] == "AgeCategory").unwrap();
        assert_eq!(age["widget"], "select");
        assert_eq!(age["default"], "Age 35 to 39");

        settings.override_with(None, Some(Revision::Compact), None).unwrap();
        let json: serde_json::Value = serde_json::from_str(&print_schema(&settings).unwrap()).unwrap();
        let toggles = json["fields"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|f| f["widget"] == "toggle")
            .count();
        assert_eq!(toggles, 5);
    }

    // ===================== settings =====================

    fn settings_from_toml(toml: &str) -> Result<Settings, SettingsError> {
        let builder = Settings::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));
        Settings::from_builder(builder)
    }

    #[test]
    fn test_settings_defaults() {
        let settings = settings_from_toml("").unwrap();
        assert_eq!(settings.revision, Revision::Full);
        assert_eq!(settings.api_url, None);
        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(
            settings.client_config().resolve().api_url,
            Revision::Full.default_api_url()
        );
    }

    #[test]
    fn test_settings_from_file() {
        let settings = settings_from_toml(
            r#"
            api_url = "http://predictor.internal:9000"
            revision = "extended"
            bmi_source = "supplied"
            "#,
        )
        .unwrap();
        assert_eq!(settings.revision, Revision::Extended);
        assert_eq!(settings.bmi_source, Some(BmiSource::Supplied));
        assert_eq!(
            settings.client_config().resolve().predict_url(),
            "http://predictor.internal:9000/predict"
        );
    }

    #[test]
    fn test_settings_rejects_invalid_values() {
        assert!(matches!(
            settings_from_toml(r#"api_url = "not a url""#),
            Err(SettingsError::Invalid(_))
        ));
        assert!(matches!(
            settings_from_toml(r#"revision = "minimal""#),
            Err(SettingsError::Load(_))
        ));

        let mut settings = settings_from_toml("").unwrap();
        assert!(settings.override_with(Some("nope".to_string()), None, None).is_err());
    }

    // ===================== serve router =====================

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app(ClientConfig::default(), "missing".into());
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let health: HealthResponse = response.json();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_client_config_endpoint() {
        let config = ClientConfig {
            api_url: Some("http://predictor.internal:9000".to_string()),
            revision: Revision::Compact,
            bmi_source: None,
        };
        let server = TestServer::new(setup_test_app(config.clone(), "missing".into())).unwrap();

        let response = server.get("/api/client-config").await;

        response.assert_status(StatusCode::OK);
        let served: ClientConfig = response.json();
        assert_eq!(served, config);
    }

    #[tokio::test]
    async fn test_frontend_served_with_index_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<title>Heart Disease Prediction App</title>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('ok');").unwrap();

        let server = TestServer::new(setup_test_app(ClientConfig::default(), dir.path().into())).unwrap();

        let asset = server.get("/app.js").await;
        asset.assert_status(StatusCode::OK);
        assert!(asset.text().contains("console.log"));

        let page = server.get("/any/client/route").await;
        page.assert_status(StatusCode::OK);
        assert!(page.text().contains("Heart Disease Prediction App"));
    }
}
