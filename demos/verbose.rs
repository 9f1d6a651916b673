use nice::{bool_var, int_flag, string_var, with_short, with_usage, Necessity, Registry};

fn main() {
    let mut verbose: bool = false;
    let mut name: String = "world".to_string();
    let mut registry = Registry::default();

    bool_var(
        &mut registry,
        &mut verbose,
        "verbose",
        &[&with_short('v'), &with_usage("Enable verbose output.")],
    )
    .unwrap();
    string_var(
        &mut registry,
        &mut name,
        "name",
        &[&with_short('n'), &with_usage("Who to greet."), &Necessity::Optional],
    )
    .unwrap();
    let repeat = int_flag(&mut registry, "r", &[&with_usage("How many times to greet.")]);

    for flag in registry.flags() {
        println!(
            "{:<30} {}",
            flag.to_string(),
            flag.usage().unwrap_or_default()
        );
    }

    // Stand-in for a parser: write `--name nice -r 2 -v`.
    let assignments: [(&str, &str); 3] = [("name", "nice"), ("r", "2"), ("verbose", "true")];
    for (key, token) in assignments {
        let mut characters = key.chars();
        let flag = match (characters.next(), characters.next()) {
            (Some(short), None) => registry.flag_by_short_mut(short),
            _ => registry.flag_by_long_mut(key),
        };
        if let Some(flag) = flag {
            if let Err(e) = flag.value_mut().set(token) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    let repeat = *repeat.borrow();
    drop(registry);
    for _ in 0..repeat {
        println!("Hello, {name}!");
    }
    if verbose {
        println!("Greeted {repeat} time(s).");
    }
}
