use tokio::io::{AsyncBufReadExt, BufReader};

/// Read newline-delimited frames from stdin, one callback per non-empty
/// line. Runs until stdin closes.
pub async fn watch_stdin<F>(mut on_text: F) -> Result<(), anyhow::Error>
where
    F: FnMut(String) + Send + 'static,
{
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            on_text(line.to_string());
        }
    }

    Ok(())
}
