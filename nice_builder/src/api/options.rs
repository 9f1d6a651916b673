use crate::api::applier::{ArgOptionApplier, FlagOptionApplier};
use crate::model::Necessity;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An alternate long name for a flag (ex: `--dry` for `--dry-run`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias(
    /// The long name, without the leading `--`.
    pub String,
);

impl From<&str> for Alias {
    fn from(value: &str) -> Self {
        Alias(value.to_string())
    }
}

impl From<String> for Alias {
    fn from(value: String) -> Self {
        Alias(value)
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The configuration of a flag, accumulated option by option.
///
/// A `FlagOptions` is also an option itself (a *bundle*): applying it copies over each of its set fields.
/// * `short`, `long` & `usage` are copied only when set.
/// * `aliases` are appended (never de-duplicated).
/// * `necessity` always overwrites.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{with_short, Alias, FlagOptions, Necessity};
///
/// let bundle = FlagOptions {
///     usage: Some("Preview without writing.".to_string()),
///     aliases: vec!["dry".into()],
///     ..FlagOptions::default()
/// };
/// let options = FlagOptions::new("dry-run", &[&with_short('n'), &bundle]);
///
/// assert_eq!(options.short, Some('n'));
/// assert_eq!(options.long, Some("dry-run".to_string()));
/// assert_eq!(options.aliases, vec![Alias::from("dry")]);
/// assert_eq!(options.necessity, Necessity::Unset);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOptions {
    /// The single character name (ex: `-v`).
    pub short: Option<char>,
    /// The long name (ex: `--verbose`).
    pub long: Option<String>,
    /// Alternate long names.
    pub aliases: Vec<Alias>,
    /// The usage text.
    pub usage: Option<String>,
    /// Optional if unset.
    pub necessity: Necessity,
}

impl FlagOptions {
    /// Build the options for the flag `name`, then apply each option in order.
    ///
    /// A one character `name` becomes the short name, anything longer becomes the long name.
    /// An empty `name` sets neither; one of the options should.
    pub fn new(name: &str, options: &[&dyn FlagOptionApplier]) -> Self {
        let mut flag_options = Self::default();
        flag_options.apply_name(name);
        flag_options.apply_options(options);
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Flag '{name}' options: {flag_options:?}.");
        }
        flag_options
    }

    fn apply_name(&mut self, name: &str) {
        let mut characters = name.chars();
        match (characters.next(), characters.next()) {
            (Some(short), None) => {
                self.short.replace(short);
            }
            (Some(_), Some(_)) => {
                self.long.replace(name.to_string());
            }
            (None, _) => {
                // Nothing to infer.
            }
        }
    }

    /// Apply each option in order, onto these options.
    pub fn apply_options(&mut self, options: &[&dyn FlagOptionApplier]) {
        for option in options {
            option.flag_option_apply(self);
        }
    }
}

impl FlagOptionApplier for FlagOptions {
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        if let Some(short) = self.short {
            options.short.replace(short);
        }

        if let Some(long) = self.long.as_ref().filter(|l| !l.is_empty()) {
            options.long.replace(long.clone());
        }

        options.aliases.extend(self.aliases.iter().cloned());

        if let Some(usage) = self.usage.as_ref().filter(|u| !u.is_empty()) {
            options.usage.replace(usage.clone());
        }

        options.necessity = self.necessity;
    }
}

/// The configuration of a positional argument, accumulated option by option.
///
/// Like [`FlagOptions`], an `ArgOptions` is also an option bundle.
/// `name` & `usage` are copied only when set, while `necessity` always overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgOptions {
    /// The argument name (ex: `FILE`).
    pub name: Option<String>,
    /// The usage text.
    pub usage: Option<String>,
    /// Left as-is here; [`Arg::required`](crate::Arg::required) reads unset as required.
    pub necessity: Necessity,
}

impl ArgOptions {
    /// Build the options for the argument `name`, then apply each option in order.
    pub fn new(name: &str, options: &[&dyn ArgOptionApplier]) -> Self {
        let mut arg_options = Self::default();
        arg_options.apply_name(name);
        arg_options.apply_options(options);
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Arg '{name}' options: {arg_options:?}.");
        }
        arg_options
    }

    fn apply_name(&mut self, name: &str) {
        if !name.is_empty() {
            self.name.replace(name.to_string());
        }
    }

    /// Apply each option in order, onto these options.
    pub fn apply_options(&mut self, options: &[&dyn ArgOptionApplier]) {
        for option in options {
            option.arg_option_apply(self);
        }
    }
}

impl ArgOptionApplier for ArgOptions {
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        if let Some(name) = self.name.as_ref().filter(|n| !n.is_empty()) {
            options.name.replace(name.clone());
        }

        if let Some(usage) = self.usage.as_ref().filter(|u| !u.is_empty()) {
            options.usage.replace(usage.clone());
        }

        options.necessity = self.necessity;
    }
}
