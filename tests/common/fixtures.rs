//! Shared test fixtures
//!
//! Article builders and canned API responses.

use screener::core::models::{Article, Summary, SummaryCounts};

/// Articles titled "A", "B", "C", ... on consecutive sheet rows starting at 2
pub fn articles(n: usize) -> Vec<Article> {
    (0..n)
        .map(|i| {
            let title = char::from(b'A' + u8::try_from(i % 26).unwrap()).to_string();
            let mut article = Article::new(i as u64 + 2, title);
            article.row_number = Some(i as u64 + 2);
            article
        })
        .collect()
}

/// A summary with one included, one excluded and one pending article
pub fn sample_summary() -> Summary {
    Summary {
        counts: SummaryCounts {
            total: 3,
            reviewed: 2,
            included: 1,
            excluded: 1,
            pending: 1,
        },
        ..Summary::default()
    }
}

/// `getArticles` response body for `n` articles
pub fn articles_body(n: usize) -> String {
    let rows: Vec<serde_json::Value> = (0..n)
        .map(|i| {
            serde_json::json!({
                "rowIndex": i + 2,
                "rowNumber": i + 2,
                "sheetUrl": format!("https://sheets.example/d/abc/edit#gid=0&range=A{}", i + 2),
                "title": format!("Article {}", i + 1),
                "author": "Doe, J.; Roe, R.",
                "year": 2020 + i,
                "source": "Scopus",
                "publication": "Journal of Trust",
                "publicationType": "Journal Article",
                "doi": format!("10.1000/{}", i + 1),
                "url": "",
                "abstract": "An abstract."
            })
        })
        .collect();
    serde_json::json!({ "articles": rows }).to_string()
}

/// `getSummary` response body
pub fn summary_body() -> String {
    serde_json::json!({
        "summary": {"total": 3, "reviewed": 2, "included": 1, "excluded": 1, "pending": 1},
        "reviewed": [
            {"title": "Article 1", "author": "Doe", "year": 2020, "rowNumber": 2, "decision": 1, "note": "Good Article"},
            {"title": "Article 2", "author": "Roe", "year": 2021, "rowNumber": 3, "decision": 0, "note": "not relevant"}
        ],
        "pending": [
            {"title": "Article 3", "author": "Poe", "year": 2022, "rowNumber": 4}
        ]
    })
    .to_string()
}
