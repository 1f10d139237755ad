use thiserror::Error;

/// Errors from reading the relational catalog.
///
/// Connection and query failures are kept distinct so callers can tell a
/// catalog outage apart from schema drift in the catalog queries themselves.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog connection error: {0}")]
    Connection(String),

    #[error("catalog query error: {0}")]
    Query(String),
}

/// Errors from embedding computation or vector index persistence.
///
/// Either variant aborts an index build. Because the build deletes the prior
/// index before embedding, a failed build leaves no index behind.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("embedding error: {0}")]
    Embedding(String),

    #[error("index store error: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::Connection("refused".to_string());
        assert_eq!(err.to_string(), "catalog connection error: refused");

        let err = CatalogError::Query("relation does not exist".to_string());
        assert_eq!(err.to_string(), "catalog query error: relation does not exist");
    }

    #[test]
    fn test_index_error_display() {
        let err = IndexError::Embedding("model not loaded".to_string());
        assert_eq!(err.to_string(), "embedding error: model not loaded");

        let err = IndexError::Store("table missing".to_string());
        assert_eq!(err.to_string(), "index store error: table missing");
    }
}
