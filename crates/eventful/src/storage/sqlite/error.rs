//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `CacheError` from `eventful_core::storage`.

use eventful_core::storage::CacheError;

/// Maps a rusqlite error to a CacheError.
///
/// # Error Mapping
///
/// - Cannot open / not a database → `CacheError::ConnectionFailed`
/// - Column type mismatches → `CacheError::InvalidData`
/// - All other errors → `CacheError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error) -> CacheError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::CannotOpen | rusqlite::ErrorCode::NotADatabase
            ) =>
        {
            CacheError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::InvalidColumnType(..) | rusqlite::Error::FromSqlConversionFailure(..) => {
            CacheError::InvalidData(err.to_string())
        }

        _ => CacheError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a CacheError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> CacheError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err),
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            CacheError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => CacheError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            CacheError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_invalid_column_type_maps_to_invalid_data() {
        let rusqlite_err = rusqlite::Error::InvalidColumnType(
            1,
            "title".to_string(),
            rusqlite::types::Type::Null,
        );
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite_err);

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            CacheError::InvalidData(_)
        ));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        assert!(matches!(
            map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed),
            CacheError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_other_error_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            CacheError::QueryFailed(_)
        ));
    }
}
