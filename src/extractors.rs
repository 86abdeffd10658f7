use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::Deserialize;

/// Query parameters for dashboard requests
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// City name from the search box
    pub city: Option<String>,
}

/// Extracts the searched city from either the path or the query string
///
/// Checks path first, then falls back to `?city=`. Blank values are kept as-is;
/// the dashboard service decides what an empty search means.
#[derive(Debug)]
pub struct CityParam(pub Option<String>);

impl CityParam {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for CityParam
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(Path(city)) = Path::<String>::from_request_parts(parts, state).await {
            return Ok(CityParam(Some(city)));
        }

        if let Ok(Query(query)) = Query::<DashboardQuery>::from_request_parts(parts, state).await {
            return Ok(CityParam(query.city));
        }

        // No city provided - the service falls back to its default
        Ok(CityParam(None))
    }
}
