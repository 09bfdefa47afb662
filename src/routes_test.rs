use super::*;
use imago_client::util::assets::{base_path, figure_url};
use std::path::Path;

async fn spawn_router(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

fn figures_fixture(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("imago-site-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create fixture dir");
    std::fs::write(dir.join("teaser.jpg"), b"not really a jpeg").expect("write fixture");
    dir
}

fn config_for(figures_dir: &Path, base_path: &str) -> SiteConfig {
    SiteConfig { port: 0, figures_dir: figures_dir.to_path_buf(), base_path: base_path.to_owned() }
}

#[test]
fn figures_mount_joins_base_and_dir() {
    assert_eq!(figures_mount("/"), "/figures");
    assert_eq!(figures_mount("/imago/"), "/imago/figures");
}

#[test]
fn figures_mount_falls_back_for_absolute_base() {
    assert_eq!(figures_mount("https://cdn.example.org/imago/"), "/figures");
}

#[tokio::test]
async fn healthz_returns_ok() {
    let dir = figures_fixture("health");
    let base = spawn_router(static_routes(&config_for(&dir, "/"))).await;
    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn figure_is_served_under_root_base_path() {
    let dir = figures_fixture("root");
    let base = spawn_router(static_routes(&config_for(&dir, "/"))).await;
    let resp = reqwest::get(format!("{base}/figures/teaser.jpg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.bytes().await.unwrap().as_ref(), b"not really a jpeg");
}

#[tokio::test]
async fn figure_is_served_under_sub_path() {
    let dir = figures_fixture("sub");
    let base = spawn_router(static_routes(&config_for(&dir, "/imago/"))).await;
    let resp = reqwest::get(format!("{base}/imago/figures/teaser.jpg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let resp = reqwest::get(format!("{base}/figures/teaser.jpg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_figure_is_not_found() {
    let dir = figures_fixture("missing");
    let base = spawn_router(static_routes(&config_for(&dir, "/"))).await;
    let resp = reqwest::get(format!("{base}/figures/bystander.jpg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn figure_url_emitted_by_page_resolves() {
    let dir = figures_fixture("emitted");
    let fixture_dir = dir.to_string_lossy().into_owned();
    let config = SiteConfig::from_lookup(|key| (key == "FIGURES_DIR").then(|| fixture_dir.clone())).unwrap();
    let base = spawn_router(static_routes(&config)).await;

    let emitted = figure_url(&base_path(), "teaser.jpg");
    let resp = reqwest::get(format!("{base}{emitted}")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}
