use prodcat::models::{BankAccount, Book, Car, Dog, Engine, Vector2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    println!("--- Bank account ---");
    let mut account = BankAccount::new("123456789", "Zhang San", 1000.50);
    println!("{}", account);
    account.deposit(500.75)?;
    account.withdraw(200.20)?;
    if let Err(e) = account.withdraw(2000.00) {
        println!("Withdrawal refused: {}", e);
    }
    println!("{}", account);
    println!("{}", BankAccount::new("987654321", "Li Si", -100.0));

    println!("\n--- Books ---");
    let mut primer = Book::new("C++ Primer", "Stanley B. Lippman", 2012);
    let mut effective = Book::new("Effective C++", "Scott Meyers", 2005);
    println!("Live books: {}", Book::live_count());
    primer.borrow_book()?;
    if let Err(e) = primer.borrow_book() {
        println!("{}", e);
    }
    primer.return_book()?;
    effective.set_publication_year(2006)?;
    println!("{}\n{}", primer, effective);
    {
        let scratch = Book::default();
        println!("{} (live books: {})", scratch, Book::live_count());
    }
    println!("Live books after scope: {}", Book::live_count());

    println!("\n--- Dogs ---");
    let mut buddy = Dog::new("Buddy", 3);
    println!("{}", buddy);
    println!("{}", buddy.bark());
    buddy.set_age(4)?;
    if let Err(e) = buddy.set_age(0) {
        println!("{}", e);
    }
    println!("{}", buddy);

    println!("\n--- Cars ---");
    let v8 = Engine::new("V8", 450);
    let mustang = Car::new("Mustang", "Red", v8.clone());
    let tesla = Car::with_engine_spec("Tesla Model S", "Black", "Electric", 762);
    for car in [&mustang, &tesla] {
        println!("{}", car);
        car.start()?;
        car.stop();
    }
    if let Err(e) = Car::new("Shell", "Grey", Engine::default()).start() {
        println!("{}", e);
    }

    println!("\n--- Vectors ---");
    let v1 = Vector2D::new(3.0, 4.0);
    let v4 = Vector2D::new(1.0, -2.0);
    println!("{} (magnitude {:.2})", v1, v1.magnitude());
    println!("{} + {} = {}", v1, v4, v1 + v4);
    println!("{} == {} ? {}", v1, v4, v1 == v4);

    Ok(())
}
