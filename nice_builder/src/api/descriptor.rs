use std::borrow::Cow;

use crate::api::options::{Alias, ArgOptions, FlagOptions};
use crate::api::value::Value;
use crate::model::Necessity;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Behaviour to produce the usage text of a flag/argument.
pub trait Usager {
    /// The usage text.
    fn usage(&self) -> Cow<'_, str>;
}

impl Usager for String {
    fn usage(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl Usager for &'static str {
    fn usage(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

/// A registered flag: a named value, specified via `--LONG` or `-S` on the Cli.
///
/// Built once from the final [`FlagOptions`]; the descriptor itself is never re-configured.
/// A parser writes into the bound value via [`Flag::value_mut`].
pub struct Flag<'a> {
    value: Box<dyn Value + 'a>,
    short: Option<char>,
    long: Option<String>,
    aliases: Vec<Alias>,
    usage: Option<Box<dyn Usager>>,
    necessity: Necessity,
}

impl<'a> Flag<'a> {
    /// Create a flag bound to `value`.
    ///
    /// ### Example
    /// ```
    /// # use nice_builder as nice;
    /// use nice::{with_short, Flag, FlagOptions, Scalar, Scalable};
    ///
    /// let mut verbose: bool = false;
    /// let options = FlagOptions::new("verbose", &[&with_short('v')]);
    /// let flag = Flag::new(Scalar::new(&mut verbose).typed(bool::TYPE_NAME), options);
    ///
    /// assert_eq!(flag.to_string(), "Flag(bool,-v/--verbose)");
    /// ```
    pub fn new(value: impl Value + 'a, options: FlagOptions) -> Self {
        let FlagOptions {
            short,
            long,
            aliases,
            usage,
            necessity,
        } = options;
        let flag = Self {
            value: Box::new(value),
            short,
            long,
            aliases,
            usage: usage.map(|u| Box::new(u) as Box<dyn Usager>),
            necessity,
        };
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built {flag}.");
        }
        flag
    }

    /// The bound value.
    pub fn value(&self) -> &dyn Value {
        self.value.as_ref()
    }

    /// The bound value, for writing parsed input.
    pub fn value_mut(&mut self) -> &mut (dyn Value + 'a) {
        self.value.as_mut()
    }

    /// The short name.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The alternate long names.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// The usage text.
    pub fn usage(&self) -> Option<Cow<'_, str>> {
        self.usage.as_ref().map(|u| u.usage())
    }

    /// The necessity, as specified.
    pub fn necessity(&self) -> Necessity {
        self.necessity
    }

    /// The type tag of the bound value, or `""` when it has none.
    pub fn type_name(&self) -> &str {
        match self.value.typer() {
            Some(typer) => typer.type_name(),
            None => "",
        }
    }

    /// Whether the flag must be specified.
    /// Only [`Necessity::Required`] is required; an unset necessity reads as optional.
    pub fn required(&self) -> bool {
        self.necessity == Necessity::Required
    }
}

impl<'a> std::fmt::Display for Flag<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Flag({}", self.type_name())?;

        if let Some(short) = &self.short {
            write!(f, ",-{short}")?;
        }

        if let Some(long) = &self.long {
            let separator = if self.short.is_some() { "/" } else { "," };
            write!(f, "{separator}--{long}")?;
        }

        write!(f, ")")
    }
}

impl<'a> std::fmt::Debug for Flag<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flag")
            .field("type", &self.type_name())
            .field("short", &self.short)
            .field("long", &self.long)
            .field("aliases", &self.aliases)
            .field("usage", &self.usage())
            .field("necessity", &self.necessity)
            .finish()
    }
}

/// A registered positional argument.
pub struct Arg<'a> {
    value: Box<dyn Value + 'a>,
    name: Option<String>,
    usage: Option<Box<dyn Usager>>,
    necessity: Necessity,
}

impl<'a> Arg<'a> {
    /// Create an argument bound to `value`.
    pub fn new(value: impl Value + 'a, options: ArgOptions) -> Self {
        let ArgOptions {
            name,
            usage,
            necessity,
        } = options;
        let arg = Self {
            value: Box::new(value),
            name,
            usage: usage.map(|u| Box::new(u) as Box<dyn Usager>),
            necessity,
        };
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Built {arg}.");
        }
        arg
    }

    /// The bound value.
    pub fn value(&self) -> &dyn Value {
        self.value.as_ref()
    }

    /// The bound value, for writing parsed input.
    pub fn value_mut(&mut self) -> &mut (dyn Value + 'a) {
        self.value.as_mut()
    }

    /// The name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The usage text.
    pub fn usage(&self) -> Option<Cow<'_, str>> {
        self.usage.as_ref().map(|u| u.usage())
    }

    /// The necessity, as specified.
    pub fn necessity(&self) -> Necessity {
        self.necessity
    }

    /// The type tag of the bound value, or `""` when it has none.
    pub fn type_name(&self) -> &str {
        match self.value.typer() {
            Some(typer) => typer.type_name(),
            None => "",
        }
    }

    /// Whether the argument must be specified.
    /// Arguments are required unless explicitly [`Necessity::Optional`].
    pub fn required(&self) -> bool {
        self.necessity != Necessity::Optional
    }
}

impl<'a> std::fmt::Display for Arg<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arg({},{})",
            self.type_name(),
            self.name.as_deref().unwrap_or_default()
        )
    }
}

impl<'a> std::fmt::Debug for Arg<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arg")
            .field("type", &self.type_name())
            .field("name", &self.name)
            .field("usage", &self.usage())
            .field("necessity", &self.necessity)
            .finish()
    }
}
