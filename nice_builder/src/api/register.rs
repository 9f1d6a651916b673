use crate::api::applier::{ArgOptionApplier, FlagOptionApplier};
use crate::api::descriptor::{Arg, Flag};
use crate::api::options::{ArgOptions, FlagOptions};
use crate::api::value::{Scalable, Scalar, Shared};

/// Behaviour to accept built descriptors.
///
/// The registrar owns all validation (ex: duplicate names); see [`Registry`](crate::Registry) for a reference implementation.
pub trait Register<'a> {
    /// The registrar specific failure.
    type Error;

    /// Register a flag.
    fn register_flag(&mut self, flag: Flag<'a>) -> Result<(), Self::Error>;

    /// Register a positional argument.
    fn register_arg(&mut self, arg: Arg<'a>) -> Result<(), Self::Error>;
}

/// Register a flag bound to `variable`.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{flag_var, with_usage, Registry};
///
/// let mut level: u8 = 1;
/// let mut registry = Registry::default();
/// flag_var(&mut registry, &mut level, "level", &[&with_usage("The log level.")]).unwrap();
///
/// registry.flag_by_long_mut("level").unwrap().value_mut().set("3").unwrap();
/// drop(registry);
/// assert_eq!(level, 3);
/// ```
pub fn flag_var<'a, T, R>(
    register: &mut R,
    variable: &'a mut T,
    name: &str,
    options: &[&dyn FlagOptionApplier],
) -> Result<(), R::Error>
where
    T: Scalable,
    R: Register<'a> + ?Sized,
{
    let options = FlagOptions::new(name, options);
    let value = Scalar::new(variable).typed(T::TYPE_NAME);
    register.register_flag(Flag::new(value, options))
}

/// Register a flag bound to a freshly allocated zero value, returning the handle to it.
///
/// A registration error is discarded; use [`flag_var`] to observe it.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{flag, Registry};
///
/// let mut registry = Registry::default();
/// let verbose = flag::<bool, _>(&mut registry, "verbose", &[]);
///
/// registry.flag_by_long_mut("verbose").unwrap().value_mut().set("true").unwrap();
/// assert!(*verbose.borrow());
/// ```
pub fn flag<'a, T, R>(register: &mut R, name: &str, options: &[&dyn FlagOptionApplier]) -> Shared<T>
where
    T: Scalable,
    R: Register<'a> + ?Sized,
{
    let variable: Shared<T> = Shared::default();
    let options = FlagOptions::new(name, options);
    let value = Scalar::shared(variable.clone()).typed(T::TYPE_NAME);
    let _ = register.register_flag(Flag::new(value, options));
    variable
}

/// Register a positional argument bound to `variable`.
pub fn arg_var<'a, T, R>(
    register: &mut R,
    variable: &'a mut T,
    name: &str,
    options: &[&dyn ArgOptionApplier],
) -> Result<(), R::Error>
where
    T: Scalable,
    R: Register<'a> + ?Sized,
{
    let options = ArgOptions::new(name, options);
    let value = Scalar::new(variable).typed(T::TYPE_NAME);
    register.register_arg(Arg::new(value, options))
}

/// Register a positional argument bound to a freshly allocated zero value, returning the handle to it.
///
/// A registration error is discarded; use [`arg_var`] to observe it.
pub fn arg<'a, T, R>(register: &mut R, name: &str, options: &[&dyn ArgOptionApplier]) -> Shared<T>
where
    T: Scalable,
    R: Register<'a> + ?Sized,
{
    let variable: Shared<T> = Shared::default();
    let options = ArgOptions::new(name, options);
    let value = Scalar::shared(variable.clone()).typed(T::TYPE_NAME);
    let _ = register.register_arg(Arg::new(value, options));
    variable
}

// Per-type shorthands for the most common flag types.
macro_rules! typed_flags {
    ($($t:ty => $var_fn:ident, $flag_fn:ident);* $(;)?) => {
        $(
            #[doc = concat!("Register a `", stringify!($t), "` flag bound to `variable`. See [`flag_var`].")]
            pub fn $var_fn<'a, R>(
                register: &mut R,
                variable: &'a mut $t,
                name: &str,
                options: &[&dyn FlagOptionApplier],
            ) -> Result<(), R::Error>
            where
                R: Register<'a> + ?Sized,
            {
                flag_var(register, variable, name, options)
            }

            #[doc = concat!("Register a freshly allocated `", stringify!($t), "` flag. See [`flag`].")]
            pub fn $flag_fn<'a, R>(
                register: &mut R,
                name: &str,
                options: &[&dyn FlagOptionApplier],
            ) -> Shared<$t>
            where
                R: Register<'a> + ?Sized,
            {
                flag::<$t, R>(register, name, options)
            }
        )*
    };
}

typed_flags! {
    bool => bool_var, bool_flag;
    String => string_var, string_flag;
    i64 => int_var, int_flag;
}

/// A registrar that accepts (or rejects) everything, recording what it was given.
///
/// *Available using 'unit_test' crate feature only.*
#[cfg(any(test, feature = "unit_test"))]
#[derive(Debug, Default)]
pub struct Recorder<'a> {
    /// Every flag offered, in order (including rejected ones).
    pub flags: Vec<Flag<'a>>,
    /// Every argument offered, in order (including rejected ones).
    pub args: Vec<Arg<'a>>,
    /// When set, every registration fails with this message.
    pub reject: Option<String>,
}

#[cfg(any(test, feature = "unit_test"))]
impl<'a> Register<'a> for Recorder<'a> {
    type Error = String;

    fn register_flag(&mut self, flag: Flag<'a>) -> Result<(), Self::Error> {
        self.flags.push(flag);
        match &self.reject {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }

    fn register_arg(&mut self, arg: Arg<'a>) -> Result<(), Self::Error> {
        self.args.push(arg);
        match &self.reject {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::applier::{with_short, with_usage};
    use crate::model::Necessity;

    #[test]
    fn flag_var_registers() {
        let mut verbose: bool = false;
        let mut recorder = Recorder::default();
        bool_var(
            &mut recorder,
            &mut verbose,
            "verbose",
            &[
                &with_short('v'),
                &with_usage("enable verbose output"),
                &Necessity::Required,
            ],
        )
        .unwrap();

        assert_eq!(recorder.flags.len(), 1);
        let flag = &mut recorder.flags[0];
        assert_eq!(flag.short(), Some('v'));
        assert_eq!(flag.long(), Some("verbose"));
        assert_eq!(flag.usage().as_deref(), Some("enable verbose output"));
        assert_eq!(flag.type_name(), "bool");
        assert!(flag.required());
        assert_eq!(flag.to_string(), "Flag(bool,-v/--verbose)");

        flag.value_mut().set("true").unwrap();
        drop(recorder);
        assert!(verbose);
    }

    #[test]
    fn flag_var_propagates_error() {
        let mut count: i64 = 0;
        let mut recorder = Recorder {
            reject: Some("duplicate".to_string()),
            ..Recorder::default()
        };
        let result = int_var(&mut recorder, &mut count, "count", &[]);
        assert_eq!(result, Err("duplicate".to_string()));
    }

    #[test]
    fn flag_discards_error() {
        let mut recorder = Recorder {
            reject: Some("duplicate".to_string()),
            ..Recorder::default()
        };
        let name = string_flag(&mut recorder, "name", &[&with_short('n')]);
        assert_eq!(*name.borrow(), "");

        recorder.flags[0].value_mut().set("nice").unwrap();
        assert_eq!(*name.borrow(), "nice");
    }

    #[test]
    fn flag_zero_value() {
        let mut recorder = Recorder::default();
        let count = int_flag(&mut recorder, "c", &[]);
        let verbose = bool_flag(&mut recorder, "verbose", &[]);
        let ratio = flag::<f64, _>(&mut recorder, "ratio", &[]);

        assert_eq!(*count.borrow(), 0);
        assert!(!*verbose.borrow());
        assert_eq!(*ratio.borrow(), 0.0);
        assert_eq!(recorder.flags[0].short(), Some('c'));
        assert_eq!(recorder.flags[0].type_name(), "i64");
        assert_eq!(recorder.flags[2].type_name(), "f64");
    }

    #[test]
    fn arg_var_registers() {
        let mut path: String = String::default();
        let mut recorder = Recorder::default();
        arg_var(&mut recorder, &mut path, "PATH", &[&with_usage("The path.")]).unwrap();

        let arg = &mut recorder.args[0];
        assert_eq!(arg.name(), Some("PATH"));
        assert_eq!(arg.usage().as_deref(), Some("The path."));
        assert_eq!(arg.necessity(), Necessity::Unset);
        assert!(arg.required());

        arg.value_mut().set("/etc").unwrap();
        drop(recorder);
        assert_eq!(path, "/etc");
    }

    #[test]
    fn arg_discards_error() {
        let mut recorder = Recorder {
            reject: Some("nope".to_string()),
            ..Recorder::default()
        };
        let count = arg::<u32, _>(&mut recorder, "COUNT", &[&Necessity::Optional]);

        assert_eq!(recorder.args.len(), 1);
        assert!(!recorder.args[0].required());
        recorder.args[0].value_mut().set("12").unwrap();
        assert_eq!(*count.borrow(), 12);
    }
}
