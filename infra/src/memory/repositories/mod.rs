mod person;

pub use person::*;
