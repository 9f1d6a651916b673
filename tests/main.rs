use nice::{
    bool_var, int_flag, string_var, with_aliases, with_short, with_usage, FlagOptions, Necessity,
    RegisterError, Registry,
};

#[macro_use]
extern crate assert_matches;

#[test]
fn registry_compiles() {
    Registry::default();
}

#[test]
fn declare_and_write() {
    let mut verbose: bool = false;
    let mut output: String = String::default();
    let mut registry = Registry::default();

    bool_var(
        &mut registry,
        &mut verbose,
        "verbose",
        &[&with_short('v'), &with_usage("enable verbose output"), &Necessity::Required],
    )
    .unwrap();
    string_var(
        &mut registry,
        &mut output,
        "output",
        &[&with_short('o'), &with_aliases(["out"])],
    )
    .unwrap();
    let jobs = int_flag(&mut registry, "j", &[&with_usage("Parallel jobs.")]);

    assert_eq!(
        registry.flags().iter().map(|f| f.to_string()).collect::<Vec<_>>(),
        vec!["Flag(bool,-v/--verbose)", "Flag(string,-o/--output)", "Flag(i64,-j)"]
    );
    assert_eq!(registry.required(), vec!["--verbose"]);

    registry.flag_by_short_mut('v').unwrap().value_mut().set("true").unwrap();
    registry.flag_by_long_mut("out").unwrap().value_mut().set("a.txt").unwrap();
    registry.flag_by_short_mut('j').unwrap().value_mut().set("8").unwrap();
    assert_matches!(
        registry.flag_by_short_mut('j').unwrap().value_mut().set("eight"),
        Err(_)
    );

    assert_eq!(*jobs.borrow(), 8);
    drop(registry);
    assert!(verbose);
    assert_eq!(output, "a.txt");
}

#[test]
fn dry_run_bundle() {
    let mut dry_run: bool = false;
    let mut preview: bool = false;
    let mut registry = Registry::default();
    let common = FlagOptions {
        aliases: vec!["dry".into()],
        usage: Some("Do not write anything.".to_string()),
        ..FlagOptions::default()
    };

    bool_var(&mut registry, &mut dry_run, "dry-run", &[&with_usage(""), &common, &Necessity::Optional])
        .unwrap();
    let flag = registry.flag_by_long("dry").unwrap();
    assert_eq!(flag.long(), Some("dry-run"));
    assert_eq!(flag.usage().as_deref(), Some("Do not write anything."));
    assert!(!flag.required());

    let result = bool_var(&mut registry, &mut preview, "preview", &[&common]);
    assert_eq!(result, Err(RegisterError::DuplicateLong("dry".to_string())));
}
