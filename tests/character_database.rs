use probing_dict::{CharacterDatabase, TableError};

fn seeded() -> CharacterDatabase {
    let mut db = CharacterDatabase::new().expect("default capacity is valid");
    db.add_character("FB", 5, 10, 1.0).unwrap();
    db.add_character("Ea", 100, 200, 0.0).unwrap();
    db.add_character("Daegon", 50, 67, 0.5).unwrap();
    db.add_character("Gandalf", 20, 20, 0.7).unwrap();
    db
}

#[test]
fn add_lookup_remove() {
    let mut db = seeded();
    assert_eq!(db.len(), 4);
    assert_eq!(db.index().capacity(), 11);
    assert_eq!(db.get_character("Daegon").map(|c| c.weight()), Some(67));

    let removed = db.remove_character("Daegon").expect("present");
    assert_eq!(removed.height(), 50);
    assert!(db.get_character("Daegon").is_none());
    assert!(db.remove_character("Daegon").is_none());
    assert_eq!(db.len(), 3);

    let names: Vec<&str> = db.characters().map(|c| c.name()).collect();
    assert_eq!(names, ["FB", "Ea", "Gandalf"]);
}

#[test]
fn mutate_through_lookup() {
    let mut db = seeded();
    let gandalf = db.get_character_mut("Gandalf").unwrap();
    gandalf.change(-0.5).unwrap();
    gandalf.injure(60).unwrap();
    gandalf.heal(20).unwrap();

    let gandalf = db.get_character("Gandalf").unwrap();
    assert_eq!(gandalf.health(), 60);
    assert_eq!(gandalf.moral_align(), 0.2);
    assert_eq!(
        gandalf.to_string(),
        "Name: Gandalf, Height: 20, Weight: 20, Health: 60 Moral Alignment: 0.2"
    );
}

#[test]
fn invalid_amounts_surface_as_errors() {
    let mut db = seeded();
    let fb = db.get_character_mut("FB").unwrap();
    assert!(matches!(fb.heal(0), Err(TableError::InvalidArgument(_))));
    assert!(matches!(fb.injure(-1), Err(TableError::InvalidArgument(_))));
    assert!(matches!(fb.change(0.5), Err(TableError::InvalidArgument(_))));
}

#[test]
fn many_characters_grow_the_index() {
    let mut db = CharacterDatabase::new().unwrap();
    for i in 0..100 {
        assert_eq!(db.add_character(&format!("hero{i}"), 180, 80, 0.5), Ok(i));
    }
    assert!(db.index().capacity() >= 200);
    db.index().verify().unwrap();
    for i in (0..100).step_by(3) {
        db.remove_character(&format!("hero{i}")).unwrap();
    }
    for i in 0..100 {
        let found = db.get_character(&format!("hero{i}")).is_some();
        assert_eq!(found, i % 3 != 0, "hero{i}");
    }
    // Re-adding a removed name appends a fresh row.
    assert_eq!(db.add_character("hero0", 170, 70, 0.1), Ok(100));
    assert_eq!(db.get_character("hero0").unwrap().height(), 170);
}
