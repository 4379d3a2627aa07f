#![cfg(feature = "cli")]

use std::process::ExitCode;

use clap::arg;
use tracing_subscriber::EnvFilter;
use walnut_registry::{RegistryKeys, Service, keys::DEFAULT_ROOT, rr::Name};

fn main() -> ExitCode {
    match registry() {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn registry() -> Result<(), ()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = clap::Command::new("walnut-registry")
        .about("Translate between registry keys, domain names and DNS records")
        .subcommand_required(true)
        .args([arg!(--root <ROOT> "Registry root prefix").default_value(DEFAULT_ROOT)])
        .subcommand(
            clap::Command::new("path")
                .about("Print the registry key for a domain name")
                .arg(arg!(<NAME> "Domain name"))
                .arg(arg!(--wildcard "Cut the key off at the first wildcard label")),
        )
        .subcommand(
            clap::Command::new("domain")
                .about("Print the domain name for a registry key")
                .arg(arg!(<KEY> "Registry key")),
        )
        .subcommand(
            clap::Command::new("records")
                .about("Print the records synthesized for a registry value")
                .arg(arg!(<NAME> "Owner name of the records").value_parser(clap::value_parser!(Name)))
                .arg(arg!(<KEY> "Registry key the value was read from"))
                .arg(arg!(<JSON> "Registry value")),
        );

    let args = app.get_matches();
    let root: &String = args.get_one("root").expect("root has a default");
    let keys = RegistryKeys::new(root.as_str());
    tracing::debug!(root = keys.root(), "using registry root");

    match args.subcommand() {
        Some(("path", matches)) => {
            let name: &String = matches.get_one("NAME").expect("NAME is required");
            if matches.get_flag("wildcard") {
                let (key, wildcard) = keys.path_with_wildcard(name);
                println!("{key}{}", if wildcard { " (wildcard)" } else { "" });
            } else {
                println!("{}", keys.path(name));
            }
        }
        Some(("domain", matches)) => {
            let key: &String = matches.get_one("KEY").expect("KEY is required");
            println!("{}", keys.domain(key));
        }
        Some(("records", matches)) => {
            let name = matches.get_one::<Name>("NAME").expect("NAME is required");
            let key: &String = matches.get_one("KEY").expect("KEY is required");
            let value: &String = matches.get_one("JSON").expect("JSON is required");
            if let Err(error) = print_records(name, key, value) {
                eprintln!("Error synthesizing records for {key}:");
                eprintln!("{error}");
                return Err(());
            }
        }
        _ => unreachable!("clap crimes?"),
    }

    Ok(())
}

fn print_records(name: &Name, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::from_json(key, value.as_bytes())?;
    tracing::debug!(?service, "decoded service");

    match service.address() {
        Some(address) => println!("{}", service.address_record(name.clone(), address)),
        None => {
            let target = service.host_name()?;
            println!("{}", service.srv(name.clone(), service.weight)?);
            println!("{}", service.cname(name.clone(), target));
        }
    }

    if !service.text.is_empty() {
        println!("{}", service.txt(name.clone()));
    }

    Ok(())
}
