
use reqwest::StatusCode;

use boruto_types::ApplicationError;

use crate::test_utils::tests::setup_web_app;

#[tokio::test]
async fn test_root_welcome_message() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    let res = client.get(format!("{base_url}/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.text().await.unwrap();
    assert_eq!(body, "Welcome to Boruto Api");

    Ok(())
}

#[tokio::test]
async fn test_unmatched_route_is_plain_text_not_found() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    let res = client
        .get(format!("{base_url}/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Unmatched routes answer with plain text, not the JSON envelope.
    let body = res.text().await.unwrap();
    assert_eq!(body, "Page not found");

    Ok(())
}

#[tokio::test]
async fn test_nested_unknown_route_is_not_found() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    let res = client
        .get(format!("{base_url}/boruto/heroes/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.text().await.unwrap(), "Page not found");

    Ok(())
}
