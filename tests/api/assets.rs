use crate::helper::{get_client, spawn_app};

#[tokio::test]
async fn the_site_is_served_at_the_root() {
    let app = spawn_app().await;

    let response = get_client()
        .get(format!("{}/", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<div id="root">"#));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_index() {
    let app = spawn_app().await;

    let response = get_client()
        .get(format!("{}/projects/some-project", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert!(body.contains(r#"<div id="root">"#));
}

#[tokio::test]
async fn nothing_but_the_api_is_served_without_a_static_dir() {
    let app = crate::helper::spawn_app_with(|config| config.application.static_dir = None).await;

    let response = get_client()
        .get(format!("{}/", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(404, response.status().as_u16());
}
