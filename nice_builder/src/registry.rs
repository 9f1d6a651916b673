use std::collections::HashMap;
use thiserror::Error;

use crate::api::{Arg, Flag, Register};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reasons [`Registry`] refuses a descriptor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Register error: flag has neither a short nor a long name.")]
    /// The flag cannot be addressed on the Cli.
    NamelessFlag,

    #[error("Register error: argument has no name.")]
    /// The argument cannot be referred to.
    NamelessArg,

    #[error("Register error: cannot duplicate the flag '-{0}'.")]
    /// Another flag already uses this short name.
    DuplicateShort(char),

    #[error("Register error: cannot duplicate the flag '--{0}'.")]
    /// Another flag already uses this long name (or alias).
    DuplicateLong(String),

    #[error("Register error: cannot duplicate the argument '{0}'.")]
    /// Another argument already uses this name.
    DuplicateArg(String),
}

/// A flag/argument table which validates names on registration.
///
/// Flags are addressable by short name, long name, and alias.
/// Arguments keep their registration order, which is their positional order.
///
/// ### Example
/// ```
/// # use nice_builder as nice;
/// use nice::{bool_var, with_short, Registry, RegisterError};
///
/// let mut verbose: bool = false;
/// let mut loud: bool = false;
/// let mut registry = Registry::default();
/// bool_var(&mut registry, &mut verbose, "verbose", &[&with_short('v')]).unwrap();
///
/// let result = bool_var(&mut registry, &mut loud, "v", &[]);
/// assert_eq!(result, Err(RegisterError::DuplicateShort('v')));
/// ```
#[derive(Debug, Default)]
pub struct Registry<'a> {
    flags: Vec<Flag<'a>>,
    shorts: HashMap<char, usize>,
    longs: HashMap<String, usize>,
    args: Vec<Arg<'a>>,
    arg_names: HashMap<String, usize>,
}

impl<'a> Registry<'a> {
    /// The registered flags, in registration order.
    pub fn flags(&self) -> &[Flag<'a>] {
        &self.flags
    }

    /// The registered arguments, in positional order.
    pub fn args(&self) -> &[Arg<'a>] {
        &self.args
    }

    /// Find a flag by its short name.
    pub fn flag_by_short(&self, short: char) -> Option<&Flag<'a>> {
        self.shorts.get(&short).map(|i| &self.flags[*i])
    }

    /// Find a flag by its long name or one of its aliases.
    pub fn flag_by_long(&self, long: &str) -> Option<&Flag<'a>> {
        self.longs.get(long).map(|i| &self.flags[*i])
    }

    /// Find a flag by its short name, to write into its value.
    pub fn flag_by_short_mut(&mut self, short: char) -> Option<&mut Flag<'a>> {
        match self.shorts.get(&short) {
            Some(i) => self.flags.get_mut(*i),
            None => None,
        }
    }

    /// Find a flag by its long name or one of its aliases, to write into its value.
    pub fn flag_by_long_mut(&mut self, long: &str) -> Option<&mut Flag<'a>> {
        match self.longs.get(long) {
            Some(i) => self.flags.get_mut(*i),
            None => None,
        }
    }

    /// Find an argument by its name.
    pub fn arg_by_name(&self, name: &str) -> Option<&Arg<'a>> {
        self.arg_names.get(name).map(|i| &self.args[*i])
    }

    /// The argument at `position`, to write into its value.
    pub fn arg_mut(&mut self, position: usize) -> Option<&mut Arg<'a>> {
        self.args.get_mut(position)
    }

    /// The required flags & arguments, by display name (ex: `--verbose`, `FILE`).
    pub fn required(&self) -> Vec<String> {
        let flags = self
            .flags
            .iter()
            .filter(|f| f.required())
            .filter_map(|f| {
                f.long()
                    .map(|long| format!("--{long}"))
                    .or_else(|| f.short().map(|short| format!("-{short}")))
            });
        let args = self
            .args
            .iter()
            .filter(|a| a.required())
            .filter_map(|a| a.name().map(str::to_string));
        flags.chain(args).collect()
    }

    fn check_flag(&self, flag: &Flag<'a>) -> Result<(), RegisterError> {
        if flag.short().is_none() && flag.long().is_none() {
            return Err(RegisterError::NamelessFlag);
        }

        if let Some(short) = flag.short() {
            if self.shorts.contains_key(&short) {
                return Err(RegisterError::DuplicateShort(short));
            }
        }

        let mut longs: Vec<&str> = Vec::default();
        longs.extend(flag.long());
        longs.extend(flag.aliases().iter().map(|a| a.0.as_str()));

        for (i, long) in longs.iter().enumerate() {
            // An alias may collide with the flag's own names, or another of its aliases.
            if self.longs.contains_key(*long) || longs[..i].contains(long) {
                return Err(RegisterError::DuplicateLong(long.to_string()));
            }
        }

        Ok(())
    }
}

impl<'a> Register<'a> for Registry<'a> {
    type Error = RegisterError;

    fn register_flag(&mut self, flag: Flag<'a>) -> Result<(), Self::Error> {
        if let Err(error) = self.check_flag(&flag) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Rejected {flag}: {error}");
            }
            return Err(error);
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered {flag}.");
        }

        let index = self.flags.len();
        if let Some(short) = flag.short() {
            self.shorts.insert(short, index);
        }

        for long in flag.long().into_iter().chain(flag.aliases().iter().map(|a| a.0.as_str())) {
            self.longs.insert(long.to_string(), index);
        }

        self.flags.push(flag);
        Ok(())
    }

    fn register_arg(&mut self, arg: Arg<'a>) -> Result<(), Self::Error> {
        let name = match arg.name() {
            Some(name) => name.to_string(),
            None => return Err(RegisterError::NamelessArg),
        };

        if self.arg_names.contains_key(&name) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Rejected {arg}: duplicate name.");
            }
            return Err(RegisterError::DuplicateArg(name));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registered {arg}.");
        }

        self.arg_names.insert(name, self.args.len());
        self.args.push(arg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        arg, arg_var, bool_flag, bool_var, flag, int_var, string_flag, with_aliases, with_long,
        with_short, FlagOptions,
    };
    use crate::model::Necessity;
    use rstest::rstest;

    #[test]
    fn register_flags() {
        let mut registry = Registry::default();
        let verbose = bool_flag(&mut registry, "verbose", &[&with_short('v')]);
        let name = string_flag(&mut registry, "n", &[&with_long("name")]);

        assert_eq!(registry.flags().len(), 2);
        assert_eq!(
            registry.flag_by_short('v').map(|f| f.to_string()),
            Some("Flag(bool,-v/--verbose)".to_string())
        );
        assert_eq!(
            registry.flag_by_long("name").map(|f| f.to_string()),
            Some("Flag(string,-n/--name)".to_string())
        );

        registry
            .flag_by_short_mut('v')
            .unwrap()
            .value_mut()
            .set("true")
            .unwrap();
        registry
            .flag_by_long_mut("name")
            .unwrap()
            .value_mut()
            .set("abc")
            .unwrap();
        assert!(*verbose.borrow());
        assert_eq!(*name.borrow(), "abc");
    }

    #[test]
    fn register_nameless_flag() {
        let mut count: i64 = 0;
        let mut registry = Registry::default();
        let result = int_var(&mut registry, &mut count, "", &[]);
        assert_matches!(result, Err(RegisterError::NamelessFlag));
        assert!(registry.flags().is_empty());
    }

    #[rstest]
    #[case("v", "v", RegisterError::DuplicateShort('v'))]
    #[case("verbose", "verbose", RegisterError::DuplicateLong("verbose".to_string()))]
    fn register_duplicate_flag(
        #[case] first: &str,
        #[case] second: &str,
        #[case] expected: RegisterError,
    ) {
        let mut a: bool = false;
        let mut b: bool = false;
        let mut registry = Registry::default();
        bool_var(&mut registry, &mut a, first, &[]).unwrap();
        let result = bool_var(&mut registry, &mut b, second, &[]);

        assert_eq!(result, Err(expected));
        assert_eq!(registry.flags().len(), 1);
    }

    #[test]
    fn register_aliases() {
        let mut registry = Registry::default();
        let dry_run = bool_flag(&mut registry, "dry-run", &[&with_aliases(["dry"])]);

        assert_eq!(
            registry.flag_by_long("dry").and_then(|f| f.long()),
            Some("dry-run")
        );
        registry
            .flag_by_long_mut("dry")
            .unwrap()
            .value_mut()
            .set("true")
            .unwrap();
        assert!(*dry_run.borrow());
    }

    #[test]
    fn register_alias_collision() {
        let mut a: bool = false;
        let mut b: bool = false;
        let mut c: bool = false;
        let mut registry = Registry::default();
        bool_var(&mut registry, &mut a, "dry-run", &[]).unwrap();

        let result = bool_var(&mut registry, &mut b, "preview", &[&with_aliases(["dry-run"])]);
        assert_matches!(result, Err(RegisterError::DuplicateLong(long)) => {
            assert_eq!(long, "dry-run");
        });

        // Bundles append without de-duplicating; the registry is the one to refuse.
        let bundle = FlagOptions {
            aliases: vec!["dry".into()],
            ..FlagOptions::default()
        };
        let result = bool_var(&mut registry, &mut c, "preview", &[&bundle, &bundle]);
        assert_eq!(result, Err(RegisterError::DuplicateLong("dry".to_string())));
        assert_eq!(registry.flags().len(), 1);
    }

    #[test]
    fn register_args() {
        let mut source: String = String::default();
        let mut registry = Registry::default();
        arg_var(&mut registry, &mut source, "SOURCE", &[]).unwrap();
        let count = arg::<u32, _>(&mut registry, "COUNT", &[&Necessity::Optional]);

        assert_eq!(
            registry.args().iter().map(|a| a.to_string()).collect::<Vec<_>>(),
            vec!["Arg(string,SOURCE)", "Arg(u32,COUNT)"]
        );
        assert!(registry.arg_by_name("SOURCE").unwrap().required());
        assert!(!registry.arg_by_name("COUNT").unwrap().required());

        registry.arg_mut(1).unwrap().value_mut().set("4").unwrap();
        assert_eq!(*count.borrow(), 4);

        registry.arg_mut(0).unwrap().value_mut().set("in.txt").unwrap();
        drop(registry);
        assert_eq!(source, "in.txt");
    }

    #[test]
    fn register_duplicate_arg() {
        let mut a: String = String::default();
        let mut b: String = String::default();
        let mut c: String = String::default();
        let mut registry = Registry::default();
        arg_var(&mut registry, &mut a, "FILE", &[]).unwrap();

        assert_eq!(
            arg_var(&mut registry, &mut b, "FILE", &[]),
            Err(RegisterError::DuplicateArg("FILE".to_string()))
        );
        assert_eq!(
            arg_var(&mut registry, &mut c, "", &[]),
            Err(RegisterError::NamelessArg)
        );
    }

    #[test]
    fn required() {
        let mut registry = Registry::default();
        flag::<bool, _>(&mut registry, "v", &[&Necessity::Required]);
        flag::<bool, _>(&mut registry, "quiet", &[&Necessity::Optional]);
        flag::<bool, _>(&mut registry, "force", &[&Necessity::Required]);
        arg::<String, _>(&mut registry, "FILE", &[]);
        arg::<String, _>(&mut registry, "OUT", &[&Necessity::Optional]);

        assert_eq!(registry.required(), vec!["-v", "--force", "FILE"]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RegisterError::DuplicateShort('v').to_string(),
            "Register error: cannot duplicate the flag '-v'."
        );
        assert_eq!(
            RegisterError::DuplicateLong("verbose".to_string()).to_string(),
            "Register error: cannot duplicate the flag '--verbose'."
        );
    }
}
