//! Common test helpers and utilities shared across the test suite.

use optlist::{MemoryCollection, Row};

/// Creates the standard article fixture rows used across tests.
pub fn article_rows() -> Vec<Row> {
    vec![
        Row::new()
            .with("id", 1)
            .with("title", "Annual Report")
            .with("alias", "annual-report"),
        Row::new()
            .with("id", 2)
            .with("title", "Board Meeting")
            .with("alias", ""),
        Row::new()
            .with("id", 3)
            .with("title", "Summer Festival")
            .with("alias", ""),
    ]
}

/// Creates a collection over the standard article fixture.
pub fn article_collection() -> MemoryCollection {
    MemoryCollection::from_rows(article_rows())
}

/// Creates a two-row collection with a duplicated identifier.
#[allow(dead_code)]
pub fn duplicate_id_collection() -> MemoryCollection {
    MemoryCollection::from_rows(vec![
        Row::new().with("id", 7).with("title", "first"),
        Row::new().with("id", 7).with("title", "second"),
    ])
}
