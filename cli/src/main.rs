use clap::{Parser, Subcommand};
use reqwest::header::{AUTHORIZATION, COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use serde_json::Value;

const REFRESH_COOKIE_NAME: &str = "refresh_token";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing access token; pass --access-token or set AUTHGATE_ACCESS_TOKEN")]
    MissingAccessToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("server returned {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "authgate-cli", about = "authgate JWT auth API CLI")]
struct Cli {
    #[arg(long, env = "AUTHGATE_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "AUTHGATE_ACCESS_TOKEN")]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    access_token: Option<String>,
}

impl CliContext {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/healthz`.
    Ping,
    /// Log in and print the access token plus the refresh cookie value.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "AUTHGATE_PASSWORD")]
        password: String,
    },
    /// Exchange a refresh token for a new access token.
    Refresh {
        #[arg(long, env = "AUTHGATE_REFRESH_TOKEN")]
        refresh_token: String,
    },
    /// Ask the server to expire the refresh cookie.
    Logout,
    /// Show the user behind the access token (`/auth/me`).
    Me,
    /// List the demo user directory (`/api/users`).
    Users,
    /// List the demo product catalog (`/api/products`).
    Products,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, access_token: cli.access_token };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login { username, password } => run_login(&ctx, &username, &password).await,
        Command::Refresh { refresh_token } => run_refresh(&ctx, &refresh_token).await,
        Command::Logout => {
            let json = send(reqwest::Client::new().post(ctx.url("/auth/logout"))).await?.1;
            print_json(&json)
        }
        Command::Me => bearer_get(&ctx, "/auth/me").await,
        Command::Users => bearer_get(&ctx, "/api/users").await,
        Command::Products => bearer_get(&ctx, "/api/products").await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let response = reqwest::Client::new().get(cli.url("/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_login(cli: &CliContext, username: &str, password: &str) -> Result<(), CliError> {
    let request = reqwest::Client::new()
        .post(cli.url("/auth/login"))
        .json(&serde_json::json!({ "username": username, "password": password }));
    let (headers, mut json) = send(request).await?;

    let refresh_token = refresh_token_from_set_cookie(
        headers.get_all(SET_COOKIE).iter().filter_map(|v| v.to_str().ok()),
    );
    if let (Some(map), Some(token)) = (json.as_object_mut(), refresh_token) {
        map.insert(REFRESH_COOKIE_NAME.to_owned(), Value::String(token));
    }
    print_json(&json)
}

async fn run_refresh(cli: &CliContext, refresh_token: &str) -> Result<(), CliError> {
    let cookie = HeaderValue::from_str(&format!("{REFRESH_COOKIE_NAME}={refresh_token}"))?;
    let request = reqwest::Client::new().post(cli.url("/auth/refresh")).header(COOKIE, cookie);
    let json = send(request).await?.1;
    print_json(&json)
}

async fn bearer_get(cli: &CliContext, path: &str) -> Result<(), CliError> {
    let token = cli.access_token.as_deref().ok_or(CliError::MissingAccessToken)?;
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, bearer_header(token)?);

    let client = reqwest::Client::builder().default_headers(headers).build()?;
    let json = send(client.get(cli.url(path))).await?.1;
    print_json(&json)
}

/// Send a request and decode the JSON body, mapping non-2xx to
/// [`CliError::ServerError`] with the server's `detail` when present.
async fn send(request: reqwest::RequestBuilder) -> Result<(HeaderMap, Value), CliError> {
    let response = request.send().await?;
    let status = response.status();
    let headers = response.headers().clone();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: error_message(&value) });
    }
    Ok((headers, value))
}

fn bearer_header(token: &str) -> Result<HeaderValue, CliError> {
    Ok(HeaderValue::from_str(&format!("Bearer {token}"))?)
}

fn error_message(body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .map_or_else(|| body.to_string(), ToOwned::to_owned)
}

fn refresh_token_from_set_cookie<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<String> {
    values.into_iter().find_map(|cookie| {
        let pair = cookie.split(';').next()?.trim();
        let (name, value) = pair.split_once('=')?;
        (name == REFRESH_COOKIE_NAME && !value.is_empty()).then(|| value.to_owned())
    })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
