//! CLI integration tests against the built-in catalog and dataset files

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// 利用者の設定ファイル・環境変数に影響されないコマンド
fn storefront() -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.env("STOREFRONT_CONFIG", "/nonexistent/storefront/config.toml")
        .env_remove("STOREFRONT_API_URL")
        .env_remove("STOREFRONT_TOKEN")
        .env_remove("STOREFRONT_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_search_clothing_price_range() {
    storefront()
        .args([
            "search",
            "--category",
            "Clothing",
            "--min-price",
            "60",
            "--max-price",
            "100",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Shoes\""))
        .stdout(predicate::str::contains("\"title\": \"Jacket\""))
        .stdout(predicate::str::contains("\"title\": \"Shirt\"").not())
        .stdout(predicate::str::contains("\"total_count\": 6"));
}

#[test]
fn test_search_text_and_sort() {
    storefront()
        .args(["search", "-q", "sh", "--preset", "priceDesc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shampoo"))
        .stdout(predicate::str::contains("Shoes"))
        .stdout(predicate::str::contains("Showing 1-4 of"));
}

#[test]
fn test_search_out_of_range_page() {
    storefront()
        .args(["search", "--page", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 9 is out of range"));
}

#[test]
fn test_search_no_matches() {
    storefront()
        .args(["search", "-q", "spaceship"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products matched"));
}

#[test]
fn test_search_invalid_preset() {
    storefront()
        .args(["search", "--preset", "newest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[VAL001]"));
}

#[test]
fn test_suggest_prefix() {
    storefront()
        .args(["suggest", "sh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shirt"))
        .stdout(predicate::str::contains("Shoes"));
}

#[test]
fn test_suggest_blank_term() {
    storefront()
        .args(["suggest", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions"));
}

#[test]
fn test_show_product() {
    storefront()
        .args(["show", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shoes"))
        .stdout(predicate::str::contains("$80.00"));
}

#[test]
fn test_show_unknown_product() {
    storefront()
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CAT001]"))
        .stderr(predicate::str::contains("Product not found: 999"));
}

#[test]
fn test_categories() {
    storefront()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beauty & Health"))
        .stdout(predicate::str::contains("Accessories"));
}

#[test]
fn test_search_with_dataset_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"id": 1, "title": "Kayak", "category": "Sports", "price": 450.0}},
            {{"id": 2, "title": "Paddle", "category": "Sports", "price": 45.0}}
        ]"#
    )
    .unwrap();

    storefront()
        .args(["search", "--sort", "title", "--order", "desc", "--json", "--data"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Paddle"))
        .stdout(predicate::str::contains("\"total_count\": 2"));
}

#[test]
fn test_invalid_dataset_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    storefront()
        .args(["categories", "--data"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[CAT002]"));
}
