use solid_recipe::animals::{Animal, Bird, Dog, Fish, Flyable, Swimmable};
use solid_recipe::lifecycle::{setup_tracing, AccountSystem};
use solid_recipe::model::Product;
use solid_recipe::shapes::{AreaCalculator, Circle, Rectangle, Shape, Square};
use solid_recipe::shipping::{ExpressShipping, ShippingCalculator, StandardShipping};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting SOLID recipe demo");

    // Dependency inversion + single responsibility: registration
    let system = AccountSystem::from_env();

    let span = tracing::info_span!("registration");
    async {
        let account = system
            .user_service
            .register_user("alice", "pw123")
            .await
            .map_err(|e| e.to_string())?;
        info!(username = %account.username(), "User registered");

        if let Err(e) = system.user_service.register_user("", "pw123").await {
            error!(error = %e, "Registration rejected");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Liskov substitution + open/closed: areas
    let calculator = AreaCalculator::new();
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Rectangle::new(3.0, 5.0)),
        Box::new(Square::new(4.0)),
        Box::new(Circle::new(2.0)),
    ];
    for shape in &shapes {
        println!("{} area: {:.3}", shape.name(), calculator.calculate_area(shape.as_ref()));
    }
    println!("total area: {:.3}", calculator.total_area(&shapes));

    // Open/closed: shipping strategies
    let parcel = Product::new("Book", 10.0);
    let standard = ShippingCalculator::new(StandardShipping);
    let express = ShippingCalculator::new(ExpressShipping);
    println!(
        "{} ({} kg): standard {:.2}, express {:.2}",
        parcel.name,
        parcel.weight,
        standard.calculate_shipping_cost(&parcel),
        express.calculate_shipping_cost(&parcel)
    );

    // Interface segregation: only the capable animals fly or swim
    let dog = Dog::new("Rex");
    let bird = Bird::new("Tweety");
    let fish = Fish::new("Nemo");
    for activity in [dog.eat(), dog.sleep(), bird.fly(), fish.swim()] {
        println!("{activity}");
    }

    info!(accounts = system.store.len().await, "Demo completed");
    Ok(())
}
