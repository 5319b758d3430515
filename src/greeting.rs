//! Greeting dispatch — the `Greeting` selector, the `Person` record, and [`greet`].
//!
//! Output format is fixed: `"<Salutation>, <name>!\n"`. An absent person is a
//! silent no-op.

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::AppError;

/// Which salutation to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Greeting {
    #[default]
    Hello,
    Goodbye,
}

impl Greeting {
    /// Literal prefix of the output line.
    pub fn salutation(self) -> &'static str {
        match self {
            Greeting::Hello => "Hello",
            Greeting::Goodbye => "Goodbye",
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::Hello => f.write_str("hello"),
            Greeting::Goodbye => f.write_str("goodbye"),
        }
    }
}

impl FromStr for Greeting {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hello" => Ok(Greeting::Hello),
            "goodbye" => Ok(Greeting::Goodbye),
            _ => Err(AppError::Greeting(format!(
                "unknown greeting '{s}' (expected 'hello' or 'goodbye')"
            ))),
        }
    }
}

/// A person to greet. Owned by the caller; [`greet`] only borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Write the salutation line for `person` to `out`.
///
/// `None` writes nothing. The name is passed through verbatim, including an
/// empty one.
pub fn greet_to<W: Write>(
    out: &mut W,
    greeting: Greeting,
    person: Option<&Person>,
) -> io::Result<()> {
    let Some(person) = person else {
        return Ok(());
    };
    writeln!(out, "{}, {}!", greeting.salutation(), person.name())
}

/// Print the salutation line for `person` to standard output.
///
/// Does nothing when `person` is `None`. Write failures are logged, not returned.
pub fn greet(greeting: Greeting, person: Option<&Person>) {
    if person.is_none() {
        debug!(%greeting, "no person given, nothing to print");
        return;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = greet_to(&mut out, greeting, person).and_then(|()| out.flush()) {
        warn!(%greeting, "failed to write greeting to stdout: {e}");
    }
}
