//! Statement loader implementation.

use crate::{
    Result,
    error::DataError,
    types::{BalanceSheet, CashFlowStatement, IncomeStatement, StatementKind, StatementSet},
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{env, io::ErrorKind, path::PathBuf};
use tracing::{debug, info, warn};

/// Data root used when nothing is configured.
pub const DEFAULT_DATA_ROOT: &str = "DATA";

/// Environment variable naming the data root.
pub const DATA_ROOT_ENV: &str = "FUNDUS_DATA_ROOT";

/// Where the per-ticker statement exports live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Local directory containing one sub-directory per ticker.
    Directory(PathBuf),
    /// Base URL serving the same layout, without a trailing slash.
    Http(String),
}

impl DataSource {
    /// Parse a data root string.
    ///
    /// Roots starting with `http://` or `https://` are served over HTTP,
    /// anything else is a local directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is blank.
    pub fn parse(root: &str) -> Result<Self> {
        let root = root.trim();
        if root.is_empty() {
            return Err(DataError::InvalidRoot("data root is empty".to_string()));
        }

        if root.starts_with("http://") || root.starts_with("https://") {
            Ok(Self::Http(root.trim_end_matches('/').to_string()))
        } else {
            Ok(Self::Directory(PathBuf::from(root)))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Directory(PathBuf::from(DEFAULT_DATA_ROOT))
    }
}

/// Loader configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Data root.
    pub source: DataSource,
}

impl ClientConfig {
    /// Build a configuration from the `FUNDUS_DATA_ROOT` environment variable.
    ///
    /// This will also load from a `.env` file if present. An unset variable
    /// falls back to [`DEFAULT_DATA_ROOT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set but blank.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        match env::var(DATA_ROOT_ENV) {
            Ok(root) => Ok(Self {
                source: DataSource::parse(&root)?,
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}

/// Loads the three annual statement exports for a ticker.
#[derive(Debug, Clone)]
pub struct StatementClient {
    client: Client,
    source: DataSource,
}

impl StatementClient {
    /// Create a new loader with the given configuration.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            source: config.source,
        }
    }

    /// Create a new loader from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured data root is invalid.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// The configured data root.
    #[must_use]
    pub const fn source(&self) -> &DataSource {
        &self.source
    }

    /// Trim and uppercase a ticker.
    ///
    /// Tickers become a path segment under the data root, so separators and
    /// `..` are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidTicker`] for blank input or input that is
    /// not a single path segment.
    pub fn normalize_ticker(ticker: &str) -> Result<String> {
        let ticker = ticker.trim().to_uppercase();
        if ticker.is_empty() || ticker.contains(['/', '\\']) || ticker.contains("..") {
            return Err(DataError::InvalidTicker);
        }
        Ok(ticker)
    }

    /// Path of a statement export relative to the data root.
    #[must_use]
    pub fn statement_path(ticker: &str, kind: StatementKind) -> String {
        format!("{ticker}/{}", kind.file_name())
    }

    async fn read(&self, ticker: &str, kind: StatementKind) -> Result<String> {
        let path = Self::statement_path(ticker, kind);
        let not_found = || DataError::NotFound {
            ticker: ticker.to_string(),
        };

        match &self.source {
            DataSource::Directory(root) => {
                let file = root.join(&path);
                debug!(path = %file.display(), %kind, "reading statement file");
                match tokio::fs::read_to_string(&file).await {
                    Ok(text) => Ok(text),
                    Err(e) if e.kind() == ErrorKind::NotFound => Err(not_found()),
                    Err(source) => Err(DataError::Io { path: file, source }),
                }
            }
            DataSource::Http(base) => {
                let url = format!("{base}/{path}");
                debug!(%url, %kind, "fetching statement");
                let response = self.client.get(&url).send().await?;

                if !response.status().is_success() {
                    debug!(%url, status = %response.status(), "statement request refused");
                    return Err(not_found());
                }

                Ok(response.text().await?)
            }
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        ticker: &str,
        kind: StatementKind,
    ) -> Result<Vec<T>> {
        let text = self.read(ticker, kind).await?;
        serde_json::from_str(&text).map_err(|source| DataError::Json {
            path: Self::statement_path(ticker, kind),
            source,
        })
    }

    /// Get annual income statements for a ticker, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is blank or the export cannot be read.
    pub async fn income_statement(&self, ticker: &str) -> Result<Vec<IncomeStatement>> {
        let ticker = Self::normalize_ticker(ticker)?;
        self.fetch(&ticker, StatementKind::Income).await
    }

    /// Get annual cash flow statements for a ticker, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is blank or the export cannot be read.
    pub async fn cash_flow(&self, ticker: &str) -> Result<Vec<CashFlowStatement>> {
        let ticker = Self::normalize_ticker(ticker)?;
        self.fetch(&ticker, StatementKind::CashFlow).await
    }

    /// Get annual balance sheets for a ticker, in provider order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is blank or the export cannot be read.
    pub async fn balance_sheet(&self, ticker: &str) -> Result<Vec<BalanceSheet>> {
        let ticker = Self::normalize_ticker(ticker)?;
        self.fetch(&ticker, StatementKind::BalanceSheet).await
    }

    /// Load all three statements for a ticker.
    ///
    /// The exports are read concurrently. If any one fails the whole load
    /// fails and nothing is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered.
    pub async fn load(&self, ticker: &str) -> Result<StatementSet> {
        let ticker = Self::normalize_ticker(ticker)?;

        let loaded = tokio::try_join!(
            self.fetch::<IncomeStatement>(&ticker, StatementKind::Income),
            self.fetch::<CashFlowStatement>(&ticker, StatementKind::CashFlow),
            self.fetch::<BalanceSheet>(&ticker, StatementKind::BalanceSheet),
        );

        match loaded {
            Ok((income, cash_flow, balance_sheet)) => {
                info!(
                    %ticker,
                    income = income.len(),
                    cash_flow = cash_flow.len(),
                    balance_sheet = balance_sheet.len(),
                    "loaded annual statements"
                );
                Ok(StatementSet {
                    ticker,
                    income,
                    cash_flow,
                    balance_sheet,
                })
            }
            Err(e) => {
                warn!(%ticker, error = %e, "statement load failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INCOME: &str = r#"[
        {"calendarYear": "2022", "revenue": 200, "netIncome": 20},
        {"calendarYear": "2021", "revenue": 150, "netIncome": -5}
    ]"#;
    const CASH_FLOW: &str = r#"[{"calendarYear": "2022", "freeCashFlow": 12}]"#;
    const BALANCE: &str = r#"[{"calendarYear": 2022, "totalDebt": 40, "totalEquity": 80}]"#;

    fn write_ticker(root: &std::path::Path, ticker: &str, files: &[(StatementKind, &str)]) {
        let dir = root.join(ticker);
        fs::create_dir_all(&dir).unwrap();
        for (kind, body) in files {
            fs::write(dir.join(kind.file_name()), body).unwrap();
        }
    }

    fn directory_client(root: &std::path::Path) -> StatementClient {
        StatementClient::new(ClientConfig {
            source: DataSource::Directory(root.to_path_buf()),
        })
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            DataSource::parse("https://example.com/DATA/").unwrap(),
            DataSource::Http("https://example.com/DATA".to_string())
        );
        assert_eq!(
            DataSource::parse(" ./DATA ").unwrap(),
            DataSource::Directory(PathBuf::from("./DATA"))
        );
        assert!(matches!(
            DataSource::parse("   "),
            Err(DataError::InvalidRoot(_))
        ));
        assert_eq!(
            DataSource::default(),
            DataSource::Directory(PathBuf::from("DATA"))
        );
    }

    #[test]
    fn test_normalize_ticker() {
        assert_eq!(StatementClient::normalize_ticker("  aapl ").unwrap(), "AAPL");
        assert_eq!(StatementClient::normalize_ticker("brk.b").unwrap(), "BRK.B");
        assert!(matches!(
            StatementClient::normalize_ticker(" "),
            Err(DataError::InvalidTicker)
        ));
    }

    #[test]
    fn test_ticker_cannot_leave_data_root() {
        for ticker in ["../x", "..", "a/b", "a\\b", "/etc"] {
            assert!(
                matches!(
                    StatementClient::normalize_ticker(ticker),
                    Err(DataError::InvalidTicker)
                ),
                "{ticker} accepted"
            );
        }
    }

    #[tokio::test]
    async fn test_traversal_ticker_rejected_before_read() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("DATA");
        fs::create_dir_all(&root).unwrap();
        write_ticker(
            dir.path(),
            "OUTSIDE",
            &[
                (StatementKind::Income, INCOME),
                (StatementKind::CashFlow, CASH_FLOW),
                (StatementKind::BalanceSheet, BALANCE),
            ],
        );

        let err = directory_client(&root).load("../outside").await.unwrap_err();
        assert!(matches!(err, DataError::InvalidTicker));
    }

    #[test]
    fn test_statement_path() {
        assert_eq!(
            StatementClient::statement_path("MSFT", StatementKind::BalanceSheet),
            "MSFT/balance_sheet_statement_annual.json"
        );
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_ticker(
            dir.path(),
            "ACME",
            &[
                (StatementKind::Income, INCOME),
                (StatementKind::CashFlow, CASH_FLOW),
                (StatementKind::BalanceSheet, BALANCE),
            ],
        );

        let set = directory_client(dir.path()).load("acme").await.unwrap();
        assert_eq!(set.ticker, "ACME");
        assert_eq!(set.income.len(), 2);
        assert_eq!(set.income[1].net_income, Some(-5.0));
        assert_eq!(set.cash_flow[0].free_cash_flow, Some(12.0));
        assert_eq!(set.balance_sheet[0].total_equity, Some(80.0));
    }

    #[tokio::test]
    async fn test_missing_file_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        write_ticker(
            dir.path(),
            "ACME",
            &[
                (StatementKind::Income, INCOME),
                (StatementKind::BalanceSheet, BALANCE),
            ],
        );

        let err = directory_client(dir.path()).load("ACME").await.unwrap_err();
        assert!(matches!(err, DataError::NotFound { ref ticker } if ticker == "ACME"));
        assert_eq!(err.to_string(), "Data not found for ACME");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        write_ticker(
            dir.path(),
            "ACME",
            &[
                (StatementKind::Income, "{not json"),
                (StatementKind::CashFlow, CASH_FLOW),
                (StatementKind::BalanceSheet, BALANCE),
            ],
        );

        let err = directory_client(dir.path()).load("ACME").await.unwrap_err();
        assert!(matches!(
            err,
            DataError::Json { ref path, .. } if path == "ACME/income_statement_annual.json"
        ));
    }

    #[tokio::test]
    async fn test_blank_ticker_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = directory_client(dir.path()).load("").await.unwrap_err();
        assert!(matches!(err, DataError::InvalidTicker));
    }

    #[tokio::test]
    async fn test_single_statement_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/DATA/ACME/income_statement_annual.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(INCOME))
            .mount(&server)
            .await;

        let client = StatementClient::new(ClientConfig {
            source: DataSource::parse(&format!("{}/DATA", server.uri())).unwrap(),
        });
        let income = client.income_statement("acme").await.unwrap();
        assert_eq!(income.len(), 2);
        assert_eq!(income[0].calendar_year, Some(2022));
    }

    #[tokio::test]
    async fn test_load_over_http() {
        let server = MockServer::start().await;
        for (kind, body) in StatementKind::ALL.into_iter().zip([INCOME, CASH_FLOW, BALANCE]) {
            Mock::given(method("GET"))
                .and(path(format!("/ACME/{}", kind.file_name())))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .mount(&server)
                .await;
        }

        let client = StatementClient::new(ClientConfig {
            source: DataSource::parse(&server.uri()).unwrap(),
        });
        let set = client.load("ACME").await.unwrap();
        assert_eq!(set.income.len(), 2);
        assert_eq!(set.cash_flow.len(), 1);
        assert_eq!(set.balance_sheet.len(), 1);
    }

    #[tokio::test]
    async fn test_http_404_fails_whole_load() {
        let server = MockServer::start().await;
        for (kind, body) in [
            (StatementKind::Income, INCOME),
            (StatementKind::BalanceSheet, BALANCE),
        ] {
            Mock::given(method("GET"))
                .and(path(format!("/ACME/{}", kind.file_name())))
                .respond_with(ResponseTemplate::new(200).set_body_string(body))
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(path("/ACME/cash_flow_statement_annual.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = StatementClient::new(ClientConfig {
            source: DataSource::parse(&server.uri()).unwrap(),
        });
        let err = client.load("ACME").await.unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));
    }
}
