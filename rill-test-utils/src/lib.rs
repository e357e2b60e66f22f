// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures shared across the rill workspace.

pub mod animal;
pub mod helpers;
pub mod person;
pub mod probe;
pub mod test_data;

pub use self::animal::Animal;
pub use self::helpers::{assert_elements, assert_empty, panic_if_called};
pub use self::person::Person;
pub use self::probe::{Probe, ProbeMonitor};
pub use self::test_data::TestData;
