use axum::{Router, extract::State, http::StatusCode, response::IntoResponse};
use bayfront_site::config::{
    AssetSettings, EmailSettings, NotifySettings, RecaptchaSettings, ServerSettings, Settings,
};
use bayfront_site::startup::Application;
use std::sync::{Arc, Mutex};

pub struct TestApp {
    pub address: String,
}

/// Settings with the server on a random port, assets rooted at the test
/// fixtures, and every outbound integration off.
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        assets: AssetSettings {
            dir: "tests/fixtures/public".to_string(),
        },
        recaptcha: RecaptchaSettings::default(),
        email: EmailSettings::default(),
        notify: NotifySettings::default(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_settings()).await
    }

    pub async fn spawn_with(settings: Settings) -> Self {
        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address }
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: String,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Stand-in for an outbound collaborator (webhook, email API, siteverify):
/// answers every request with a canned status and body, recording the raw
/// request bodies it saw.
pub struct Stub {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Stub {
    pub async fn spawn(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
            requests: requests.clone(),
        };

        let router = Router::new().fallback(record_request).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub listener");
        let url = format!("http://{}", listener.local_addr().expect("stub address"));

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self { url, requests }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record_request(State(state): State<StubState>, body: String) -> impl IntoResponse {
    state.requests.lock().unwrap().push(body);
    (state.status, state.body.clone())
}
