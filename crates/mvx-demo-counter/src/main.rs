#![forbid(unsafe_code)]

//! Counter demo: registers the `"counter"` view-model factory, creates an
//! instance, and drives it the way a host bridge would — property
//! listeners, action dispatch, and a final state snapshot.

mod cli;
mod counter;

use mvx::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(error) = run(cli::parse()) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

fn run(config: cli::Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = ViewModelRegistry::new();
    counter::register(&mut registry);

    let vm = registry.create("counter")?;
    println!("created {} (types: {:?})", vm.id(), registry.registered_types());

    if !config.quiet {
        for name in ["count", "isEven", "message"] {
            vm.add_listener(name, |name, value| {
                println!("  changed {name} -> {value:?}");
            });
        }
    }

    for _ in 0..config.steps {
        vm.dispatch("increment", None)?;
    }
    let delta = Value::from(5i64);
    vm.dispatch("addNumber", Some(&delta))?;
    let message = Value::from(format!("counted to {}", vm.get_prop("count").as_int()?));
    vm.dispatch("setMessage", Some(&message))?;

    let snapshot = vm.state();
    if config.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("final state: {snapshot:?}");
    }
    Ok(())
}
