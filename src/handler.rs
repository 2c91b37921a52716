use std::convert::Infallible;
use std::path::PathBuf;
use warp::{http::StatusCode, Filter, Rejection, Reply};

type Result<T> = std::result::Result<T, Rejection>;

pub async fn health_handler() -> Result<impl Reply> {
    Ok(StatusCode::OK)
}

// Unknown GET paths fall back to index.html
pub fn routes(
    static_dir: PathBuf,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health").and_then(health_handler);
    let index = static_dir.join("index.html");
    let assets = warp::get().and(warp::fs::dir(static_dir));
    let fallback = warp::get().and(warp::fs::file(index));
    health_route.or(assets).or(fallback)
}

pub async fn recover(_err: Rejection) -> std::result::Result<impl Reply, Infallible> {
    Ok(StatusCode::NOT_FOUND)
}
