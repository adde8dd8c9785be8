//! Walkthrough: browse the seeded catalog, fill a cart and place an order

use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🍽️  Storefront Walkthrough\n");

    let config = StorefrontConfig::default_config();
    let catalog = InMemoryCatalog::seeded()?;
    let notifier = TracingNotifier;
    let navigator = TracingNavigator;

    // Listing: every restaurant, best rated first
    let listing = config.listing_state();
    print_page(&listing, catalog.restaurants());

    let Transition { state: listing, effects } = listing.next_page(catalog.restaurants());
    dispatch(&effects, &notifier, &navigator);
    print_page(&listing, catalog.restaurants());

    // Filters reset the page
    let listing = listing
        .with_category(Some("Italian".to_string()))
        .with_sort(SortKey::NameAsc);
    println!("🔎 Cuisines: {}", catalog.cuisines().join(", "));
    print_page(&listing, catalog.restaurants());

    // Dish page: customise and add to cart
    let burger = catalog
        .find_dish("gourmet-ember-burger")
        .ok_or_else(|| anyhow::anyhow!("seed catalog has no burger"))?;
    let order = DishOrder::for_dish(burger).change_quantity(1);
    let Transition { state: cart, effects } = order.add_to_cart(burger, catalog.cart().clone())?;
    dispatch(&effects, &notifier, &navigator);

    let cart = cart.change_quantity("dish2", -5);
    let totals = cart.totals();
    println!("\n🛒 Cart ({} lines)", cart.len());
    for line in cart.lines() {
        println!("   {} x{} = {}", line.name, line.quantity, line.total());
    }
    println!("   Total: {}\n", totals.total);

    // Checkout: the first advance fails, then the form is filled step by step
    let Transition { state: checkout, effects } = config.checkout_state().advance();
    dispatch(&effects, &notifier, &navigator);
    for (field, message) in checkout.errors().iter() {
        println!("   ❌ {}: {}", field, message);
    }

    let checkout = checkout
        .edit(|form| {
            form.address.street = "123 Main St".to_string();
            form.address.city = "Anytown".to_string();
            form.address.state = "CA".to_string();
            form.address.zip = "90210".to_string();
        })
        .advance()
        .state
        .with_delivery_mode(DeliveryMode::Scheduled)
        .edit(|form| {
            form.delivery = DeliveryTiming::Scheduled {
                at: "2026-10-20T18:30".to_string(),
            }
        })
        .advance()
        .state
        .edit(|form| {
            form.payment = Payment::Card(CardDetails {
                holder: "John Doe".to_string(),
                number: "4242424242424242".to_string(),
                expiry: "12/29".to_string(),
                cvc: "123".to_string(),
            })
        })
        .advance()
        .state;

    let review = checkout.review();
    println!("\n📋 {}", checkout.step());
    println!("   Address:  {}", review.address);
    println!("   Delivery: {}", review.delivery);
    println!("   Payment:  {}", review.payment);

    match checkout.submit() {
        SubmitOutcome::Placed {
            submission,
            transition,
        } => {
            dispatch(&transition.effects, &notifier, &navigator);
            println!("\n✅ Order {} placed", submission.order_id);
            println!("{}", serde_json::to_string_pretty(&submission)?);
        }
        SubmitOutcome::Rejected(transition) => {
            dispatch(&transition.effects, &notifier, &navigator);
            println!("\n❌ Order rejected");
        }
    }

    Ok(())
}

fn print_page(listing: &ListingState, restaurants: &[Restaurant]) {
    let view = listing.view(restaurants);
    println!(
        "📄 Page {}/{} ({} matches, sorted by {})",
        view.pagination.page,
        view.pagination.total_pages,
        view.pagination.total,
        listing.sort_key().label()
    );
    for r in &view.data {
        println!(
            "   {:<30} {:<14} ⭐ {}  {:<4} {}",
            r.name,
            r.cuisine,
            r.rating,
            r.price_tier.label(),
            r.delivery_time
        );
    }
    println!();
}
