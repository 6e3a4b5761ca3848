use book_dispatch::utils::logger;
use book_dispatch::{Action, Book, Command};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_cli_logger(false);

    let book = Book::sample();
    let commands = [
        Command::new(Action::Display, "reverse"),
        Command::new(Action::Serialize, "xml"),
    ];

    match book_dispatch::run(&book, &commands)? {
        Some(serialized) => println!("{}", serialized),
        None => println!("None"),
    }

    Ok(())
}
