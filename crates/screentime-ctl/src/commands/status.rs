use anyhow::Result;
use screentime_common::AuthorizationStatus;
use screentime_provider::UsageBridge;

pub async fn show(bridge: &UsageBridge) -> Result<()> {
    let auth = bridge.authorization_status().await?;

    println!("Screen Time Status");
    println!("==================");
    println!();
    println!("Provider:      {}", bridge.provider_name());
    println!("Supported:     {}", if bridge.is_supported() { "yes" } else { "no" });
    println!("Authorization: {}", auth.status);

    Ok(())
}

pub async fn authorize(bridge: &UsageBridge) -> Result<()> {
    let result = bridge.authorize().await?;

    if result.granted {
        println!("Screen time access granted.");
    } else {
        println!("Screen time access not granted (status: {}).", result.status);
        if result.status == AuthorizationStatus::Denied {
            println!(
                "Grant permission in Settings > Screen Time > See All App & Website Activity to track usage."
            );
        }
    }

    Ok(())
}

pub async fn select(bridge: &UsageBridge) -> Result<()> {
    let result = bridge.select_apps().await?;
    println!(
        "Selected {} apps and {} categories for monitoring.",
        result.app_count, result.category_count
    );
    Ok(())
}

pub async fn monitor(bridge: &UsageBridge) -> Result<()> {
    let result = bridge.start_monitoring().await?;
    if result.success {
        println!("Monitoring started.");
    } else {
        println!("{} provider did not start monitoring.", bridge.provider_name());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use screentime_provider::{MockProvider, UnsupportedProvider};

    #[tokio::test]
    async fn test_mock_commands_succeed() {
        let bridge = UsageBridge::new(Box::new(MockProvider::new()));
        assert!(show(&bridge).await.is_ok());
        assert!(authorize(&bridge).await.is_ok());
        assert!(select(&bridge).await.is_ok());
        assert!(monitor(&bridge).await.is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_commands() {
        let bridge = UsageBridge::new(Box::new(UnsupportedProvider::new()));
        assert!(show(&bridge).await.is_ok());
        assert!(authorize(&bridge).await.is_err());
        assert!(select(&bridge).await.is_err());
        assert!(monitor(&bridge).await.is_err());
    }
}
