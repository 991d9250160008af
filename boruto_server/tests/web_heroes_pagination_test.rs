
use reqwest::StatusCode;
use serde_json::Value;

use boruto_types::ApplicationError;
use boruto_web::ApiResponse;

use crate::test_utils::tests::setup_web_app;

#[tokio::test]
async fn test_heroes_default_page() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    let res = client
        .get(format!("{base_url}/boruto/heroes"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: ApiResponse = res.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, "ok");
    assert_eq!(body.prev_page, None);
    assert_eq!(body.next_page, Some(2));

    let names: Vec<&str> = body.heroes.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Sasuke", "Naruto", "Sakura"]);

    Ok(())
}

#[tokio::test]
async fn test_heroes_all_pages() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    let expected_names = [
        vec!["Sasuke", "Naruto", "Sakura"],
        vec!["Kakashi", "Konohamaru", "Boruto"],
        vec!["Sarada", "Mitsuki", "Orochimaru"],
        vec!["Shikadai", "Inojin", "Chocho"],
        vec!["Mirai", "Iwabe", "Metal Lee"],
    ];

    for page in 1..=5i32 {
        let res = client
            .get(format!("{base_url}/boruto/heroes?page={page}"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: ApiResponse = res.json().await.unwrap();
        assert!(body.success);
        assert_eq!(body.message, "ok");

        let expected_prev = if page > 1 { Some(page - 1) } else { None };
        let expected_next = if page < 5 { Some(page + 1) } else { None };
        assert_eq!(body.prev_page, expected_prev);
        assert_eq!(body.next_page, expected_next);

        let names: Vec<&str> = body.heroes.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, expected_names[(page - 1) as usize]);
    }

    Ok(())
}

#[tokio::test]
async fn test_heroes_page_links_absent_on_the_wire() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    let res = client
        .get(format!("{base_url}/boruto/heroes?page=1"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert!(body.get("prevPage").is_none());
    assert_eq!(body["nextPage"], 2);

    let res = client
        .get(format!("{base_url}/boruto/heroes?page=5"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["prevPage"], 4);
    assert!(body.get("nextPage").is_none());

    Ok(())
}

#[tokio::test]
async fn test_heroes_page_out_of_range() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    for page in ["0", "6", "-1", "100"] {
        let res = client
            .get(format!("{base_url}/boruto/heroes?page={page}"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: ApiResponse = res.json().await.unwrap();
        assert!(!body.success);
        assert_eq!(body.message, "Heroes not found");
        assert!(body.heroes.is_empty());
        assert_eq!(body.prev_page, None);
        assert_eq!(body.next_page, None);
    }

    Ok(())
}

#[tokio::test]
async fn test_heroes_non_numeric_page() -> Result<(), ApplicationError> {
    let (client, base_url) = setup_web_app().await?;

    for page in ["invalid", "one", "2.5", ""] {
        let res = client
            .get(format!("{base_url}/boruto/heroes?page={page}"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let body: ApiResponse = res.json().await.unwrap();
        assert!(!body.success);
        assert_eq!(body.message, "Only numbers allowed");
        assert!(body.heroes.is_empty());
    }

    Ok(())
}
