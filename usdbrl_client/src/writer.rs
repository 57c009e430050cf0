//! Writing the received bid to the local result file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use usdbrl_common::BidResponse;
use usdbrl_common::Result;

/// Human-readable line written to the result file, without a trailing newline.
pub fn format_line(quote: &BidResponse) -> String {
    format!("Dólar: {}", quote.bid)
}

/// Create or truncate `path` and write the single formatted line.
pub fn persist_quote(path: &Path, quote: &BidResponse) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(format_line(quote).as_bytes())?;
    info!("Bid {} written to {}", quote.bid, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn bid(value: &str) -> BidResponse {
        BidResponse {
            bid: value.to_string(),
        }
    }

    #[test]
    fn writes_single_line_without_trailing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cotacao.txt");

        persist_quote(&path, &bid("5.01")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.01");
    }

    #[test]
    fn truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cotacao.txt");
        fs::write(&path, "Dólar: 4.999999999\nstale line\n").unwrap();

        persist_quote(&path, &bid("5.01")).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Dólar: 5.01");
    }

    #[test]
    fn fails_when_directory_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("cotacao.txt");

        assert!(persist_quote(&path, &bid("5.01")).is_err());
    }
}
