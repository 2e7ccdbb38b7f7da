use dashboard::{create_router, AppState, DashboardApp, Dataset, ViewSpec};
use serde_json::{json, Value};
use std::sync::Arc;

const SAMPLE: &str = "\
country,year,continent,gdpPercap,lifeExp
Afghanistan,1952,Asia,779,28.8
Albania,1952,Europe,1601,59.6
Afghanistan,1957,Asia,820,30.3
";

/// Serves the gapminder dashboard on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let dataset = Arc::new(Dataset::from_csv_str(SAMPLE).unwrap());
    let app = DashboardApp::gapminder(ViewSpec::gapminder().bind(dataset).unwrap()).unwrap();
    let router = create_router(Arc::new(AppState::new(app)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn update_body(value: Value) -> Value {
    json!({
        "output": "graph-with-slider.figure",
        "inputs": [{"id": "year-slider", "property": "value", "value": value}]
    })
}

#[tokio::test]
async fn health_check() {
    let base = spawn_server().await;
    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn index_page_served() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{}/", base)).await.unwrap();
    assert!(response.status().is_success());
    let html = response.text().await.unwrap();
    assert!(html.contains("<title>Gapminder</title>"));
    assert!(html.contains("/_dash-update-component"));
}

#[tokio::test]
async fn layout_and_dependencies() {
    let base = spawn_server().await;

    let layout: Value = reqwest::get(format!("{}/_dash-layout", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slider = &layout["layout"]["children"][1];
    assert_eq!(slider["type"], "Slider");
    assert_eq!(slider["props"]["id"], "year-slider");
    assert_eq!(slider["props"]["value"], 1952.0);
    assert_eq!(slider["props"]["stops"], json!([1952.0, 1957.0]));

    let deps: Value = reqwest::get(format!("{}/_dash-dependencies", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(deps[0]["output"], "graph-with-slider.figure");
    assert_eq!(deps[0]["inputs"][0], json!({"id": "year-slider", "property": "value"}));
}

#[tokio::test]
async fn update_component_returns_figure() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let body: Value = client
        .post(format!("{}/_dash-update-component", base))
        .json(&update_body(json!(1952)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let figure = &body["response"]["graph-with-slider"]["figure"];
    let names: Vec<&str> = figure["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|trace| trace["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Asia", "Europe"]);
    assert_eq!(figure["layout"]["hovermode"], "closest");
}

#[tokio::test]
async fn update_component_without_matches() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/_dash-update-component", base))
        .json(&update_body(json!(1999)))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["response"]["graph-with-slider"]["figure"]["data"], json!([]));
}

#[tokio::test]
async fn update_component_rejects_bad_requests() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/_dash-update-component", base))
        .json(&json!({
            "output": "other-graph.figure",
            "inputs": [{"id": "year-slider", "property": "value", "value": 1952}]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .post(format!("{}/_dash-update-component", base))
        .json(&update_body(json!("1952")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "InvalidParameter");
}

#[tokio::test]
async fn figure_endpoint() {
    let base = spawn_server().await;

    let figure: Value = reqwest::get(format!("{}/figure?value=1957", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(figure["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(figure["data"][0]["text"], json!(["Afghanistan"]));

    // Defaults to the slider's initial position
    let figure: Value = reqwest::get(format!("{}/figure", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(figure["data"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn malformed_requests_return_json_errors() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = reqwest::get(format!("{}/figure?value=abc", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "InvalidParameter");
    assert!(body["message"].as_str().unwrap().contains("query string"));

    let response = client
        .post(format!("{}/_dash-update-component", base))
        .json(&json!({"output": "graph-with-slider.figure"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "InvalidParameter");
    assert!(body["message"].as_str().unwrap().contains("inputs"));
}
