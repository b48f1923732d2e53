//! Walks through adding, removing and modifying characters, dumping the
//! name table along the way. Set `RUST_LOG=debug` to see table growth.

use probing_dict::{CharacterDatabase, TableError};

fn main() -> Result<(), TableError> {
    env_logger::init();

    let mut db = CharacterDatabase::new()?;
    db.add_character("FB", 5, 10, 1.0)?;
    db.add_character("Ea", 100, 200, 0.0)?;
    db.add_character("Daegon", 50, 67, 0.5)?;
    db.add_character("Gandalf", 20, 20, 0.7)?;
    print!("{}", db.index().dump());
    println!();

    db.remove_character("Daegon");
    print!("{}", db.index().dump());
    println!();
    for character in db.characters() {
        println!("{character}");
    }
    println!();

    if let Some(gandalf) = db.get_character_mut("Gandalf") {
        println!("Gandalf before change");
        println!("{gandalf}");
        println!();
        gandalf.change(-0.5)?;
        gandalf.injure(60)?;
        gandalf.heal(20)?;
        println!("Gandalf after change");
        println!("{gandalf}");
    }
    Ok(())
}
