use crate::api::{ArgOptionApplier, ArgOptions, FlagOptionApplier, FlagOptions};

/// Whether a flag/argument must be specified on the Cli.
///
/// `Necessity` is itself an option applier, so it may be passed positionally alongside the other options:
/// ```
/// # use nice_builder as nice;
/// use nice::{FlagOptions, Necessity};
///
/// let options = FlagOptions::new("verbose", &[&Necessity::Optional, &Necessity::Required]);
/// assert_eq!(options.necessity, Necessity::Required);
/// ```
///
/// Unlike every other option, applying a `Necessity` always overwrites the previous one.
/// The last `Necessity` in an option list wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Necessity {
    /// Not specified.
    /// Reads as optional on a [`Flag`](crate::Flag), and as required on an [`Arg`](crate::Arg).
    #[default]
    Unset,
    /// May be omitted.
    Optional,
    /// Must be specified.
    Required,
}

impl std::fmt::Display for Necessity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl FlagOptionApplier for Necessity {
    fn flag_option_apply(&self, options: &mut FlagOptions) {
        options.necessity = *self;
    }
}

impl ArgOptionApplier for Necessity {
    fn arg_option_apply(&self, options: &mut ArgOptions) {
        options.necessity = *self;
    }
}
