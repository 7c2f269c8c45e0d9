//! Integration tests for the color lookup HTTP API.

use reqwest::StatusCode;

mod common;

/// Pull the hex values out of a swatch body, checking the overall shape.
fn swatch_hexes(body: &str) -> (String, String) {
    let rest = body
        .strip_prefix("<h1 style=\"color: ")
        .expect("body should start with the styled heading");
    let (style_hex, rest) = rest.split_once('"').expect("style attribute should close");
    let rest = rest.strip_prefix(" >").expect("space before closing bracket");
    let text_hex = rest.strip_suffix("</h1>").expect("heading should close");
    (style_hex.to_string(), text_hex.to_string())
}

fn is_lowercase_hex(hex: &str) -> bool {
    hex.len() == 7
        && hex.starts_with('#')
        && hex[1..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}

#[tokio::test]
async fn test_red_renders_exact_fragment() {
    let (addr, _shutdown) = common::start_server().await;
    let res = reqwest::get(format!("http://{}/css/red", addr)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"), "{}", content_type);
    assert_eq!(
        res.text().await.unwrap(),
        "<h1 style=\"color: #ff0000\" >#ff0000</h1>"
    );
}

#[tokio::test]
async fn test_cornflowerblue_renders_exact_fragment() {
    let (addr, _shutdown) = common::start_server().await;
    let res = reqwest::get(format!("http://{}/css/cornflowerblue", addr))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.text().await.unwrap(),
        "<h1 style=\"color: #6495ed\" >#6495ed</h1>"
    );
}

#[tokio::test]
async fn test_recognized_names_use_one_hex_in_both_positions() {
    let (addr, _shutdown) = common::start_server().await;

    for name in ["blue", "rebeccapurple", "darkslategrey", "white"] {
        let res = reqwest::get(format!("http://{}/css/{}", addr, name))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "name: {}", name);

        let body = res.text().await.unwrap();
        let (style_hex, text_hex) = swatch_hexes(&body);
        assert_eq!(style_hex, text_hex, "name: {}", name);
        assert!(is_lowercase_hex(&style_hex), "name: {} hex: {}", name, style_hex);
    }
}

#[tokio::test]
async fn test_unknown_name_is_a_deterministic_404() {
    let (addr, _shutdown) = common::start_server().await;
    let url = format!("http://{}/css/notacolor123", addr);

    let first = reqwest::get(&url).await.unwrap();
    assert_eq!(first.status(), StatusCode::NOT_FOUND);
    let first_body = first.text().await.unwrap();

    let second = reqwest::get(&url).await.unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    assert_eq!(second.text().await.unwrap(), first_body);

    // The process survives the failed lookup.
    let after = reqwest::get(format!("http://{}/css/red", addr)).await.unwrap();
    assert_eq!(after.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let (addr, _shutdown) = common::start_server().await;
    let url = format!("http://{}/css/teal", addr);

    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_concurrent_requests_do_not_interfere() {
    let (addr, _shutdown) = common::start_server().await;

    let red = reqwest::get(format!("http://{}/css/red", addr));
    let blue = reqwest::get(format!("http://{}/css/blue", addr));
    let (red, blue) = tokio::join!(red, blue);

    assert_eq!(
        red.unwrap().text().await.unwrap(),
        "<h1 style=\"color: #ff0000\" >#ff0000</h1>"
    );
    assert_eq!(
        blue.unwrap().text().await.unwrap(),
        "<h1 style=\"color: #0000ff\" >#0000ff</h1>"
    );
}
