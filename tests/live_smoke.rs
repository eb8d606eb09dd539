use std::sync::Arc;

use coinjar_api_client::auth::EnvCredentials;
use coinjar_api_client::rest::CoinJarRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("COINJAR_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_read_only_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = CoinJarRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let user = client.account().await?;
    assert!(!user.uuid.is_empty());
    user.available_balance_decimal()?;

    let transactions = client.list_transactions(5, 0).await?;
    assert!(transactions.len() <= 5);

    let rate = client.fair_rate("AUD").await?;
    rate.spot_decimal()?;

    Ok(())
}
