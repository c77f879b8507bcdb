use crate::domain::ports::Keyed;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: String, age: u32) -> Self {
        Self { name, age }
    }
}

impl Keyed for Person {
    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}

/// A pet holds a shared handle to its owner; dropping the pet never
/// affects the owner's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    pub name: String,
    pub owner: Arc<Person>,
    pub age: u32,
}

impl Pet {
    pub fn new(name: String, owner: Arc<Person>, age: u32) -> Self {
        Self { name, owner, age }
    }
}

impl Keyed for Pet {
    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}), owned by {}", self.name, self.age, self.owner.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Person(Arc<Person>),
    Pet(Pet),
}

impl Keyed for Entry {
    fn key(&self) -> &str {
        match self {
            Entry::Person(person) => person.key(),
            Entry::Pet(pet) => pet.key(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Person(person) => person.fmt(f),
            Entry::Pet(pet) => pet.fmt(f),
        }
    }
}

/// Outcome of the race between the query loop and the session deadline.
/// Renders as the exact line the session prints on termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionSignal {
    TimedOut,
    Ended,
}

impl fmt::Display for SessionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // leading newline breaks out of a pending "Enter: " prompt
            SessionSignal::TimedOut => write!(f, "\nTimed out!"),
            SessionSignal::Ended => write!(f, "Session ended"),
        }
    }
}
