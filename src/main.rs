use chrono::{Duration, Utc};
use tracing::{error, info, Instrument};

use storefront::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem, SystemError};
use storefront::domain::{
    Credentials, DeliveryAddress, OrderCreate, OrderStatus, PaymentMethod, PaymentStatus, ProductCreate,
    UserCreate,
};
use storefront::listing::SortOption;
use storefront::view::PageView;

struct Seeded {
    user_id: String,
    delivered_order_id: String,
    fresh_order_id: String,
}

async fn seed(system: &StorefrontSystem) -> Result<Seeded, SystemError> {
    let user_id = system
        .user_client
        .create_user(UserCreate::new("Ada", "ada@example.com"))
        .await?;

    let now = Utc::now();
    let catalog = [
        ("Aged Facebook Account (2015)", "Facebook Logs", 15_000.0, 20),
        ("Instagram 10k Followers", "Instagram Logs", 45_000.0, 2),
        ("NordVPN 1 Year", "VPN Accounts", 7_000.0, 1),
        ("Netflix Premium 4K", "Streaming Accounts", 4_500.0, 12),
        ("ChatGPT Plus (1 month)", "AI / ChatGPT Accounts", 18_000.0, 5),
    ];
    for (name, category, price, age_days) in catalog {
        let product = ProductCreate::new(name, category, price, now - Duration::days(age_days))
            .with_images(vec![format!("https://cdn.example.com/{}.png", category.to_lowercase().replace(' ', "-"))]);
        system.product_client.create_product(product).await?;
    }

    let address = DeliveryAddress {
        street: "12 Allen Avenue".to_string(),
        city: "Ikeja".to_string(),
        state: "Lagos".to_string(),
    };

    let mut delivered = OrderCreate::new(&user_id, "ChatGPT Plus (1 month)", "AI / ChatGPT Accounts", 18_000.0, now - Duration::days(4));
    delivered.status = OrderStatus::Delivered;
    delivered.payment_status = PaymentStatus::Completed;
    delivered.payment_method = PaymentMethod::Paystack;
    delivered.delivery_address = address.clone();
    delivered.credentials = Some(Credentials {
        email: "plus-4471@example.com".to_string(),
        password: "change-me-on-login".to_string(),
    });
    let delivered_order_id = system.order_client.create_order(delivered).await?;

    let mut shipped = OrderCreate::new(&user_id, "NordVPN 1 Year", "VPN Accounts", 7_000.0, now - Duration::days(1));
    shipped.status = OrderStatus::Shipped;
    shipped.payment_status = PaymentStatus::Completed;
    shipped.delivery_address = address.clone();
    system.order_client.create_order(shipped).await?;

    let mut fresh = OrderCreate::new(&user_id, "Netflix Premium 4K", "Streaming Accounts", 4_500.0, now);
    fresh.delivery_address = address;
    fresh.images = (1..=5).map(|i| format!("https://cdn.example.com/netflix-{i}.png")).collect();
    let fresh_order_id = system.order_client.create_order(fresh).await?;

    info!(%user_id, "Seed data loaded");
    Ok(Seeded { user_id, delivered_order_id, fresh_order_id })
}

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = StorefrontConfig::load()?;
    setup_tracing(&config.log);

    info!("Starting storefront demo");
    let system = StorefrontSystem::new(config);

    let seeded = seed(&system).instrument(tracing::info_span!("seed")).await?;

    let visitor = system.storefront(None);
    if let PageView::Redirect { to } = visitor.orders_page(&visitor.orders_selection()).await {
        info!(%to, "Anonymous visitor redirected");
    }

    let shopper = system.storefront(Some(&seeded.user_id));

    let span = tracing::info_span!("shop");
    async {
        let selection = shopper.shop_selection().sort(SortOption::PriceLow);
        match shopper.shop_page(&selection).await {
            PageView::Ready(page) => {
                for card in &page.products {
                    info!(name = %card.name, price = %card.price, new = card.is_new, "Listing");
                }
            }
            other => error!(?other, "Shop page unavailable"),
        }
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("orders");
    async {
        match shopper.orders_page(&shopper.orders_selection()).await {
            PageView::Ready(page) => {
                for card in &page.cards {
                    let progress: Vec<&str> = card
                        .timeline
                        .steps()
                        .iter()
                        .map(|step| if step.completed { step.label } else { "·" })
                        .collect();
                    info!(
                        reference = %card.reference,
                        name = %card.name,
                        price = %card.price,
                        payment = card.payment_badge.label,
                        progress = ?progress,
                        can_cancel = card.can_cancel,
                        "Order"
                    );
                }
            }
            other => error!(?other, "Orders page unavailable"),
        }

        match shopper.cancel_order(&seeded.fresh_order_id).await {
            Ok(card) => info!(reference = %card.reference, terminal = card.timeline.is_terminal(), "Cancelled"),
            Err(e) => error!(error = %e, "Cancellation failed"),
        }

        if let PageView::Ready(details) = shopper.order_details(&seeded.delivered_order_id).await {
            info!(
                status = details.status_badge.label,
                placed_at = %details.placed_at,
                has_credentials = details.credentials.is_some(),
                "Order details"
            );
        }
    }
    .instrument(span)
    .await;

    drop(visitor);
    drop(shopper);
    system.shutdown().await?;

    info!("Storefront demo completed");
    Ok(())
}
