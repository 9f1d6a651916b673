use crate::api::options::{Alias, ArgOptions, FlagOptions};

/// Behaviour to configure a flag.
///
/// Any type may become a flag option by implementing this trait; there is nothing to register.
pub trait FlagOptionApplier {
    /// Mutate the flag options under construction.
    fn flag_option_apply(&self, options: &mut FlagOptions);
}

/// Behaviour to configure a positional argument.
pub trait ArgOptionApplier {
    /// Mutate the argument options under construction.
    fn arg_option_apply(&self, options: &mut ArgOptions);
}

// A missing applier is skipped, exactly as if it were left out of the option list.
impl<A: FlagOptionApplier> FlagOptionApplier for Option<A> {
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        if let Some(applier) = self {
            applier.flag_option_apply(options);
        }
    }
}

impl<A: ArgOptionApplier> ArgOptionApplier for Option<A> {
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        if let Some(applier) = self {
            applier.arg_option_apply(options);
        }
    }
}

impl<A: FlagOptionApplier + ?Sized> FlagOptionApplier for &A {
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        (**self).flag_option_apply(options);
    }
}

impl<A: ArgOptionApplier + ?Sized> ArgOptionApplier for &A {
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        (**self).arg_option_apply(options);
    }
}

impl<A: FlagOptionApplier + ?Sized> FlagOptionApplier for Box<A> {
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        (**self).flag_option_apply(options);
    }
}

impl<A: ArgOptionApplier + ?Sized> ArgOptionApplier for Box<A> {
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        (**self).arg_option_apply(options);
    }
}

/// A flag option from a plain function or closure.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{FlagOptionFn, FlagOptions};
///
/// let hidden_usage = FlagOptionFn(|o: &mut FlagOptions| o.usage = None);
/// let options = FlagOptions::new("secret", &[&hidden_usage]);
/// assert_eq!(options.usage, None);
/// ```
pub struct FlagOptionFn<F>(
    /// The function applied to the options.
    pub F,
)
where
    F: Fn(&mut FlagOptions);

impl<F> FlagOptionApplier for FlagOptionFn<F>
where
    F: Fn(&mut FlagOptions),
{
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        (self.0)(options);
    }
}

/// An argument option from a plain function or closure.
pub struct ArgOptionFn<F>(
    /// The function applied to the options.
    pub F,
)
where
    F: Fn(&mut ArgOptions);

impl<F> ArgOptionApplier for ArgOptionFn<F>
where
    F: Fn(&mut ArgOptions),
{
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        (self.0)(options);
    }
}

/// An option that does nothing.
/// Useful as a placeholder where an option is expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopOption;

impl FlagOptionApplier for NoopOption {
    fn flag_option_apply(&self, _options: &mut FlagOptions) {
        // Do nothing.
    }
}

impl ArgOptionApplier for NoopOption {
    fn arg_option_apply(&self, _options: &mut ArgOptions) {
        // Do nothing.
    }
}

/// See [`NoopOption`].
pub fn with_noop() -> NoopOption {
    NoopOption
}

/// The usage text option.
///
/// An empty usage leaves the existing usage untouched; it never clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageOption(
    /// The usage text.
    pub String,
);

impl FlagOptionApplier for UsageOption {
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        if !self.0.is_empty() {
            options.usage.replace(self.0.clone());
        }
    }
}

impl ArgOptionApplier for UsageOption {
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        if !self.0.is_empty() {
            options.usage.replace(self.0.clone());
        }
    }
}

/// Document the usage text of a flag/argument.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{with_usage, FlagOptions};
///
/// let options = FlagOptions::new("verbose", &[&with_usage("Enable verbose output."), &with_usage("")]);
/// assert_eq!(options.usage, Some("Enable verbose output.".to_string()));
/// ```
pub fn with_usage(usage: impl Into<String>) -> UsageOption {
    UsageOption(usage.into())
}

/// Set the short name of a flag, replacing any previous short name.
pub fn with_short(short: char) -> FlagOptionFn<impl Fn(&mut FlagOptions)> {
    FlagOptionFn(move |o: &mut FlagOptions| {
        o.short.replace(short);
    })
}

/// Set the long name of a flag, replacing any previous long name.
/// An empty `long` clears it.
pub fn with_long(long: impl Into<String>) -> FlagOptionFn<impl Fn(&mut FlagOptions)> {
    let long: String = long.into();
    FlagOptionFn(move |o: &mut FlagOptions| {
        o.long = Some(long.clone()).filter(|l| !l.is_empty());
    })
}

/// Set the aliases of a flag, replacing any previous aliases.
///
/// Use a [`FlagOptions`] bundle to append instead.
pub fn with_aliases<I, A>(aliases: I) -> FlagOptionFn<impl Fn(&mut FlagOptions)>
where
    I: IntoIterator<Item = A>,
    A: Into<Alias>,
{
    let aliases: Vec<Alias> = aliases.into_iter().map(|a| a.into()).collect();
    FlagOptionFn(move |o: &mut FlagOptions| {
        o.aliases = aliases.clone();
    })
}

/// Set the name of an argument, replacing any previous name.
/// An empty `name` clears it.
pub fn with_name(name: impl Into<String>) -> ArgOptionFn<impl Fn(&mut ArgOptions)> {
    let name: String = name.into();
    ArgOptionFn(move |o: &mut ArgOptions| {
        o.name = Some(name.clone()).filter(|n| !n.is_empty());
    })
}
