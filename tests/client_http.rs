use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use filmoteka::models::MovieId;
use filmoteka::{CatalogApi, CatalogClient, CatalogView, ListKind};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub backend");
    });
    format!("http://{addr}")
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let title = params.get("title").cloned().unwrap_or_default();
    if title.is_empty() {
        return Json(json!([]));
    }
    Json(json!([
        { "id": 1, "title": title, "year": 2021, "rating": 8.1 },
        { "id": 2, "title": "Untitled", "year": null, "rating": null }
    ]))
}

async fn all_movies() -> Json<Value> {
    Json(json!([
        { "id": 1, "title": "Dune", "year": 2021, "rating": 8.1 },
        { "id": 3, "title": "Sicario", "year": 2015 }
    ]))
}

async fn details(Path(id): Path<i64>) -> impl IntoResponse {
    if id != 1 {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "movie": { "id": 1, "title": "Dune", "year": 2021, "rating": 8.1, "labels": ["Movie"] },
            "actors": [{ "id": 10, "name": "Timothée Chalamet", "labels": ["Person"] }],
            "directors": [{ "id": 11, "name": "Denis Villeneuve", "labels": ["Person"] }],
            "genres": [{ "id": 12, "labels": ["Genre"] }]
        })),
    )
}

async fn similar(Path(id): Path<i64>) -> Json<Value> {
    if id != 1 {
        return Json(json!([]));
    }
    Json(json!([{ "id": 3, "title": "Sicario", "year": 2015, "rating": 7.6 }]))
}

fn healthy_backend() -> Router {
    Router::new()
        .route("/api/movies", get(search))
        .route("/api/movies/all", get(all_movies))
        .route("/api/movies/:id", get(details))
        .route("/api/movies/:id/similar", get(similar))
}

fn loosely_typed_backend() -> Router {
    Router::new()
        .route(
            "/api/movies/all",
            get(|| async {
                Json(json!([
                    { "id": 1, "title": "Dune", "year": 2021, "rating": 8.1 },
                    { "id": 2, "title": "Alien", "year": 1979.0, "rating": "8.5" }
                ]))
            }),
        )
        .route(
            "/api/movies/:id",
            get(|| async {
                Json(json!({
                    "movie": { "title": "Heat", "year": 1995.0, "rating": "8.3" },
                    "actors": [{ "name": "Al Pacino" }]
                }))
            }),
        )
        .route("/api/movies/:id/similar", get(|| async { Json(json!([])) }))
}

fn failing_backend() -> Router {
    Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR })
}

fn garbled_backend() -> Router {
    Router::new().fallback(|| async { (StatusCode::OK, "<html>not json</html>") })
}

#[tokio::test]
async fn decodes_successful_responses() {
    let base = spawn_backend(healthy_backend()).await;
    let client = CatalogClient::new(&base).unwrap();

    let all = client.all_movies().await.expect("catalog loads");
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].rating, None);

    let details = client
        .movie_details(&MovieId::Number(1))
        .await
        .expect("details load");
    assert_eq!(details.movie.unwrap().title.as_deref(), Some("Dune"));
    assert_eq!(details.actors.unwrap()[0].display_name(), "Timothée Chalamet");

    let similar = client.similar_movies(&MovieId::Number(1)).await;
    assert_eq!(similar.len(), 1);
    assert_eq!(similar[0].id, MovieId::Number(3));
}

#[tokio::test]
async fn float_years_and_string_ratings_still_render() {
    let base = spawn_backend(loosely_typed_backend()).await;
    let client = CatalogClient::new(&base).unwrap();
    let mut view = CatalogView::new(Arc::new(client));

    view.bootstrap().await;
    assert_eq!(
        view.page().catalog.texts(),
        vec!["Dune (2021) ocena: 8.1", "Alien (1979) ocena: 8.5"]
    );

    assert!(view.click(ListKind::Catalog, 1).await);
    let details = &view.page().details;
    assert!(details.visible);
    assert_eq!(details.title, "Heat");
    assert_eq!(details.subtitle, "Rok: 1995 | Ocena: 8.3");
}

#[tokio::test]
async fn search_title_is_url_encoded() {
    let base = spawn_backend(healthy_backend()).await;
    let client = CatalogClient::new(&base).unwrap();

    let results = client.search_movies("Tom & Jerry: 100% #1?").await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].title.as_deref(), Some("Tom & Jerry: 100% #1?"));
}

#[tokio::test]
async fn missing_movie_yields_none() {
    let base = spawn_backend(healthy_backend()).await;
    let client = CatalogClient::new(&base).unwrap();

    assert!(client.movie_details(&MovieId::Number(404)).await.is_none());
}

#[tokio::test]
async fn server_errors_degrade_to_empty_values() {
    let base = spawn_backend(failing_backend()).await;
    let client = CatalogClient::new(&base).unwrap();
    let id = MovieId::Number(1);

    assert!(client.search_movies("Dune").await.is_empty());
    assert!(client.movie_details(&id).await.is_none());
    assert!(client.similar_movies(&id).await.is_empty());
    assert!(client.all_movies().await.is_none());
}

#[tokio::test]
async fn invalid_json_degrades_to_empty_values() {
    let base = spawn_backend(garbled_backend()).await;
    let client = CatalogClient::new(&base).unwrap();
    let id = MovieId::Number(1);

    assert!(client.search_movies("Dune").await.is_empty());
    assert!(client.movie_details(&id).await.is_none());
    assert!(client.similar_movies(&id).await.is_empty());
    assert!(client.all_movies().await.is_none());
}

#[tokio::test]
async fn unreachable_backend_degrades_to_empty_values() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = CatalogClient::new(&format!("http://{addr}")).unwrap();

    assert!(client.search_movies("Dune").await.is_empty());
    assert!(client.all_movies().await.is_none());
}

#[tokio::test]
async fn browsing_against_live_backend() {
    let base = spawn_backend(healthy_backend()).await;
    let client = CatalogClient::new(&base).unwrap();
    let mut view = CatalogView::new(Arc::new(client));

    view.bootstrap().await;
    assert_eq!(
        view.page().catalog.texts(),
        vec!["Dune (2021) ocena: 8.1", "Sicario (2015)"]
    );

    assert!(view.click(ListKind::Catalog, 0).await);
    let page = view.page();
    assert!(page.details.visible);
    assert_eq!(page.details.directors.texts(), vec!["Denis Villeneuve"]);
    assert_eq!(
        page.details.genres.texts(),
        vec![r#"{"id":12,"labels":["Genre"]}"#]
    );
    assert_eq!(page.similar.texts(), vec!["Sicario (2015) ocena: 7.6"]);

    assert!(view.click(ListKind::Catalog, 1).await);
    let page = view.page();
    assert!(page.details_wrapper_visible);
    assert!(!page.details.visible);
    assert_eq!(page.similar.texts(), vec!["Brak podobnych filmów."]);
}
