use small_lookup::core::Keyed;
use small_lookup::{seed_entries, Directory, Entry, Person, Pet};
use std::sync::Arc;

/// 規格場景:Alice、Bob 與 Bob 的寵物 Missile
fn scenario_entries() -> Vec<Entry> {
    let alice = Arc::new(Person::new("Alice".to_string(), 56));
    let bob = Arc::new(Person::new("Bob".to_string(), 9));
    let missile = Pet::new("Missile".to_string(), Arc::clone(&bob), 56);

    vec![Entry::Person(alice), Entry::Person(bob), Entry::Pet(missile)]
}

#[test]
fn test_scenario_alice_hits_and_renders() {
    let directory = Directory::from_entries(scenario_entries());

    let entry = directory.get("Alice").expect("Alice is in the directory");
    assert_eq!(entry.to_string(), "Alice (56)");
}

#[test]
fn test_scenario_cat_misses() {
    let directory = Directory::from_entries(scenario_entries());

    assert!(directory.get("Cat").is_none());
}

#[test]
fn test_scenario_missile_renders_with_owner_reference() {
    let directory = Directory::from_entries(scenario_entries());

    let entry = directory.get("Missile").expect("Missile is in the directory");
    assert_eq!(entry.to_string(), "Missile (56), owned by Bob");

    match entry {
        Entry::Pet(pet) => assert_eq!(pet.owner.name, "Bob"),
        other => panic!("expected a pet entry, got {:?}", other),
    }
}

#[test]
fn test_pet_owner_is_the_same_person_as_the_directory_entry() {
    let directory = Directory::from_entries(seed_entries());

    let bob = match directory.get("Bob") {
        Some(Entry::Person(person)) => Arc::clone(person),
        other => panic!("expected Bob as a person entry, got {:?}", other),
    };
    let missile_owner = match directory.get("Missile") {
        Some(Entry::Pet(pet)) => Arc::clone(&pet.owner),
        other => panic!("expected Missile as a pet entry, got {:?}", other),
    };

    // one shared allocation, not two copies of Bob
    assert!(Arc::ptr_eq(&bob, &missile_owner));
}

#[test]
fn test_last_entry_wins_for_every_duplicated_key() {
    let young_bob = Entry::Person(Arc::new(Person::new("Bob".to_string(), 9)));
    let old_bob = Entry::Person(Arc::new(Person::new("Bob".to_string(), 72)));
    let alice = Entry::Person(Arc::new(Person::new("Alice".to_string(), 56)));

    let entries = vec![young_bob, alice.clone(), old_bob.clone()];
    let directory = Directory::from_entries(entries);

    assert_eq!(directory.len(), 2);
    assert_eq!(directory.get("Bob"), Some(&old_bob));
    assert_eq!(directory.get("Alice"), Some(&alice));
}

#[test]
fn test_every_seed_entry_is_reachable_by_its_key() {
    let entries = seed_entries();
    let directory = Directory::from_entries(entries.clone());

    for entry in &entries {
        assert_eq!(directory.get(entry.key()), Some(entry));
    }
}
