use std::{str::FromStr, time::Duration};

use sqlx::{mysql::{MySqlConnectOptions, MySqlPoolOptions}, MySqlPool};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Opens a MySQL pool, retrying while the server is still coming up.
///
/// Gives up after `max_retries` failed attempts and returns the last error.
pub async fn connect_with_retry(database_url: &str, max_retries: u32) -> Result<MySqlPool, sqlx::Error> {
    let connect_options = MySqlConnectOptions::from_str(database_url)?;
    let mut retries = 0;

    loop {
        match MySqlPoolOptions::new()
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(connect_options.clone())
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) if retries < max_retries => {
                retries += 1;
                tracing::warn!(attempt = retries, max_retries, error = %e, "MySQL not ready yet");
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                tracing::error!(max_retries, error = %e, "giving up on MySQL connection");
                return Err(e);
            }
        }
    }
}
