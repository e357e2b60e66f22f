// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::animal::Animal;
use crate::person::Person;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice".to_string(), 25))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob".to_string(), 30))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie".to_string(), 35))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane".to_string(), 40))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal::new("Dog".to_string(), 4))
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal::new("Spider".to_string(), 8))
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal::new("Bird".to_string(), 2))
}

pub fn person(name: String, age: u32) -> TestData {
    TestData::Person(Person::new(name, age))
}

pub fn animal(name: String, legs: u32) -> TestData {
    TestData::Animal(Animal::new(name, legs))
}
