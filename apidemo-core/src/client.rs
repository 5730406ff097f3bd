use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    config::Endpoints,
    error::ApiError,
    model::{
        Coordinates, CurrentWeather, Post, Ticker, Todo, User, UserId, WireForecast, WireGeocoding,
        WirePost, WireTicker, WireTodo, WireUser, parse_body,
    },
    transport::{HttpRequest, HttpResponse, Transport},
};

/// Typed access to the fake-data, ticker, geocoding and forecast APIs.
///
/// Endpoints are validated once at construction; every call is a single GET
/// through `T`.
#[derive(Debug)]
pub struct ApiClient<T> {
    fake_api: Url,
    tickers: Url,
    geocoding: Url,
    forecast: Url,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(endpoints: &Endpoints, transport: T) -> Result<Self, ApiError> {
        Ok(Self {
            fake_api: parse_endpoint(&endpoints.fake_api)?,
            tickers: parse_endpoint(&endpoints.tickers)?,
            geocoding: parse_endpoint(&endpoints.geocoding)?,
            forecast: parse_endpoint(&endpoints.forecast)?,
            transport,
        })
    }

    /// `GET {fake_api}/users/{id}`
    pub async fn user(&self, id: &str) -> Result<User, ApiError> {
        let url = join_segments(&self.fake_api, &["users", id])?;
        self.fetch::<WireUser, User>(HttpRequest::get(url)).await
    }

    /// `GET {fake_api}/posts?userId={user_id}`
    pub async fn posts_by_user(&self, user_id: &str) -> Result<Vec<Post>, ApiError> {
        let url = join_segments(&self.fake_api, &["posts"])?;
        self.fetch_list::<WirePost, Post>(HttpRequest::get(url).query("userId", user_id)).await
    }

    /// `GET {fake_api}/todos?completed={true|false}`
    pub async fn todos_by_status(&self, completed: bool) -> Result<Vec<Todo>, ApiError> {
        let url = join_segments(&self.fake_api, &["todos"])?;
        self.fetch_list::<WireTodo, Todo>(HttpRequest::get(url).query("completed", completed))
            .await
    }

    /// `GET {fake_api}/todos?userId={user_id}`
    pub async fn todos_by_user(&self, user_id: &UserId) -> Result<Vec<Todo>, ApiError> {
        let url = join_segments(&self.fake_api, &["todos"])?;
        self.fetch_list::<WireTodo, Todo>(HttpRequest::get(url).query("userId", user_id.as_str()))
            .await
    }

    /// `GET {tickers}/{coin_id}`
    pub async fn ticker(&self, coin_id: &str) -> Result<Ticker, ApiError> {
        let url = join_segments(&self.tickers, &[coin_id])?;
        self.fetch::<WireTicker, Ticker>(HttpRequest::get(url)).await
    }

    /// Resolve a place name to its first match. `Ok(None)` means no match.
    pub async fn geocode(&self, name: &str) -> Result<Option<Coordinates>, ApiError> {
        let request = HttpRequest::get(self.geocoding.as_str())
            .query("name", name)
            .query("count", 1)
            .query("language", "en")
            .query("format", "json");

        let response = self.send(&request).await?;
        parse_body::<WireGeocoding>(&response.body)?.first_match()
    }

    pub async fn current_weather(&self, at: &Coordinates) -> Result<CurrentWeather, ApiError> {
        let request = HttpRequest::get(self.forecast.as_str())
            .query("latitude", at.latitude)
            .query("longitude", at.longitude)
            .query("current_weather", "true");

        self.fetch::<WireForecast, CurrentWeather>(request).await
    }

    /// Unchecked GET of a path under the fake-data API; any status is returned as-is.
    pub async fn raw(&self, path: &str) -> Result<(String, HttpResponse), ApiError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let url = join_segments(&self.fake_api, &segments)?;
        let response = self.transport.get(&HttpRequest::get(url.clone())).await?;
        Ok((url, response))
    }

    async fn fetch<W, M>(&self, request: HttpRequest) -> Result<M, ApiError>
    where
        W: DeserializeOwned,
        M: TryFrom<W, Error = ApiError>,
    {
        let response = self.send(&request).await?;
        M::try_from(parse_body::<W>(&response.body)?)
    }

    async fn fetch_list<W, M>(&self, request: HttpRequest) -> Result<Vec<M>, ApiError>
    where
        W: DeserializeOwned,
        M: TryFrom<W, Error = ApiError>,
    {
        let response = self.send(&request).await?;
        parse_body::<Vec<W>>(&response.body)?.into_iter().map(M::try_from).collect()
    }

    /// Perform the request and reject anything but 200.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.transport.get(request).await?;

        if !response.is_ok() {
            tracing::warn!(url = %request.url, status = response.status, "non-success status");
            return Err(ApiError::NotFound { status: response.status });
        }

        Ok(response)
    }
}

pub(crate) fn parse_endpoint(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw).map_err(|_| ApiError::InvalidEndpoint(raw.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidEndpoint(raw.to_string()));
    }
    Ok(url)
}

/// Append percent-encoded path segments to `base`.
fn join_segments(base: &Url, segments: &[&str]) -> Result<String, ApiError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(raw: &str) -> Url {
        parse_endpoint(raw).unwrap()
    }

    #[test]
    fn join_appends_under_existing_path() {
        let url = join_segments(&base("https://api.coinpaprika.com/v1/tickers"), &["btc-bitcoin"]);
        assert_eq!(url.unwrap(), "https://api.coinpaprika.com/v1/tickers/btc-bitcoin");
    }

    #[test]
    fn join_ignores_trailing_slash_on_base() {
        let url = join_segments(&base("http://localhost:3000/"), &["users", "1"]);
        assert_eq!(url.unwrap(), "http://localhost:3000/users/1");
    }

    #[test]
    fn join_escapes_user_text() {
        let url = join_segments(&base("http://localhost:3000"), &["users", "1/../admin"]);
        assert_eq!(url.unwrap(), "http://localhost:3000/users/1%2F..%2Fadmin");
    }

    #[test]
    fn rejects_unusable_endpoints() {
        assert!(matches!(parse_endpoint("not a url"), Err(ApiError::InvalidEndpoint(_))));
        assert!(matches!(parse_endpoint("mailto:me@example.com"), Err(ApiError::InvalidEndpoint(_))));
    }
}
