//! Quote Client: asks the quote server for the latest USD/BRL bid and writes it to a
//! local file as `Dólar: <bid>`.
//!
//! Usage example (CLI):
//! ```bash
//! usdbrl_client --server-url http://localhost:8080/cotacao --output ./cotacao.txt
//! ```
//!
//! The run is single-shot and strictly sequential: fetch, then persist, then exit. Any
//! failure ends the process with the error, and a failed fetch never touches the output
//! file.
mod args;
mod fetcher;
mod writer;

use crate::args::Args;
use crate::fetcher::fetch_quote;
use crate::writer::persist_quote;
use clap::Parser;
use usdbrl_common::QuoteError;
use usdbrl_common::Result;

/// Fetch the bid and write it to the configured output file.
async fn run(args: &Args) -> Result<()> {
    let quote = fetch_quote(&args.server_url, args.timeout()).await?;
    persist_quote(&args.output, &quote)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    run(&args).await?;
    println!("Arquivo criado com sucesso!");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cotacao"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn args_for(server_url: String, output: &Path) -> Args {
        Args {
            server_url,
            timeout_ms: 300,
            output: output.to_path_buf(),
        }
    }

    #[test_log::test(tokio::test)]
    async fn test_run_writes_bid_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");
        let mock_server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.01"}"#))
                .await;

        run(&args_for(format!("{}/cotacao", mock_server.uri()), &output))
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 5.01");
    }

    #[test_log::test(tokio::test)]
    async fn test_slow_server_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");
        let template = ResponseTemplate::new(200)
            .set_body_string(r#"{"bid":"5.01"}"#)
            .set_delay(Duration::from_millis(800));
        let mock_server = create_mock_server(template).await;

        let result = run(&args_for(format!("{}/cotacao", mock_server.uri()), &output)).await;

        assert!(matches!(result, Err(QuoteError::DeadlineExceeded(_))));
        assert!(!output.exists());
    }

    #[test_log::test(tokio::test)]
    async fn test_unreachable_server_keeps_previous_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");
        fs::write(&output, "Dólar: 4.87").unwrap();

        let result = run(&args_for("http://127.0.0.1:1/cotacao".to_string(), &output)).await;

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "Dólar: 4.87");
    }

    #[test_log::test(tokio::test)]
    async fn test_server_failure_status_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("cotacao.txt");
        let mock_server = create_mock_server(ResponseTemplate::new(500)).await;

        let result = run(&args_for(format!("{}/cotacao", mock_server.uri()), &output)).await;

        assert!(matches!(result, Err(QuoteError::Status(500))));
        assert!(!output.exists());
    }
}
