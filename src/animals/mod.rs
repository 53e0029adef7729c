//! Segregated animal capabilities.
//!
//! Instead of one wide `Animal` trait with `fly` and `swim` that most types
//! would have to stub out, each ability is its own trait. A type implements
//! only what it can actually do:
//!
//! | Type | [`Animal`] | [`Flyable`] | [`Swimmable`] |
//! |------|:---:|:---:|:---:|
//! | [`Dog`]  | ✓ | | |
//! | [`Bird`] | ✓ | ✓ | |
//! | [`Fish`] | ✓ | | ✓ |

use std::fmt;
use tracing::debug;

/// What an animal did in response to a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Eating,
    Sleeping,
    Flying,
    Swimming,
}

/// The outcome of asking an animal to do something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub animal: String,
    pub behavior: Behavior,
}

impl Activity {
    fn new(animal: &str, behavior: Behavior) -> Self {
        debug!(animal, ?behavior, "Activity");
        Self {
            animal: animal.to_string(),
            behavior,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.behavior {
            Behavior::Eating => "eating",
            Behavior::Sleeping => "sleeping",
            Behavior::Flying => "flying",
            Behavior::Swimming => "swimming",
        };
        write!(f, "{} is {}", self.animal, verb)
    }
}

/// Abilities every animal has.
///
/// `eat` and `sleep` are provided methods; implementors only name themselves.
pub trait Animal {
    fn name(&self) -> &str;

    fn eat(&self) -> Activity {
        Activity::new(self.name(), Behavior::Eating)
    }

    fn sleep(&self) -> Activity {
        Activity::new(self.name(), Behavior::Sleeping)
    }
}

/// Something that can fly. Unrelated to [`Animal`]: a drone flies too.
pub trait Flyable {
    fn fly(&self) -> Activity;
}

/// Something that can swim.
pub trait Swimmable {
    fn swim(&self) -> Activity;
}

macro_rules! animal {
    ($(#[$doc:meta])* $ty:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            pub name: String,
        }

        impl $ty {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }
        }

        impl Animal for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

animal!(
    /// Eats and sleeps; cannot fly or swim.
    Dog
);
animal!(
    /// Eats, sleeps and flies.
    Bird
);
animal!(
    /// Eats, sleeps and swims.
    Fish
);

impl Flyable for Bird {
    fn fly(&self) -> Activity {
        Activity::new(&self.name, Behavior::Flying)
    }
}

impl Swimmable for Fish {
    fn swim(&self) -> Activity {
        Activity::new(&self.name, Behavior::Swimming)
    }
}
