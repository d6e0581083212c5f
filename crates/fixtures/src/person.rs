use std::sync::Arc;
use vista_model::{ViewModel, object};

/// A person with separate first and last names.
#[derive(Debug, Clone)]
pub struct Person {
    first_name: String,
    last_name: String,
    age: u32,
}

#[object(normalizable, name = "Person")]
impl Person {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub const fn age(&self) -> u32 {
        self.age
    }
}

impl Person {
    #[must_use]
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into(), age }
    }
}

/// Joins the name parts and abbreviates the keys.
#[derive(Debug)]
pub struct PersonViewModel {
    person: Arc<Person>,
}

impl ViewModel for PersonViewModel {
    type Entity = Person;

    fn from_entity(person: Arc<Person>) -> Self {
        Self { person }
    }
}

#[object(view_model, name = "PersonViewModel")]
impl PersonViewModel {
    #[field(rename = "n")]
    pub fn name(&self) -> String {
        format!("{} {}", self.person.first_name, self.person.last_name)
    }

    #[field(rename = "a")]
    pub fn age(&self) -> u32 {
        self.person.age
    }
}
