//! Storefront entry point.

use app::walkthrough::{self, Repositories};
use app::{Config, init_tracing};
use domain::{Console, DomainError, init_shared_dispatcher};

#[tokio::main]
async fn main() -> Result<(), DomainError> {
    // 1. Configuration and tracing
    let config = Config::from_env();
    init_tracing(&config);
    tracing::info!(
        dispatch_policy = %config.dispatch_policy,
        "starting storefront walkthrough"
    );

    // 2. Shared dispatcher and storage
    let dispatcher = init_shared_dispatcher(config.dispatch_policy);
    let repositories = Repositories::default();

    // 3. Run
    let summary = walkthrough::run(dispatcher, &Console::stdout(), &repositories).await?;

    tracing::info!(
        customer_id = %summary.customer_id,
        order_id = %summary.order_id,
        total = %summary.total,
        reward_points = summary.reward_points,
        status = %summary.status,
        "walkthrough finished"
    );
    Ok(())
}
