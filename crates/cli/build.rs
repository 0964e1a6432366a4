use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("examen")
        .version("1.0.0")
        .author("Examen Contributors")
        .about("Check HTML documents for required elements")
        .arg(
            clap::arg!(-c --checks <FILE> "Path to the JSON checks file")
                .value_name("FILE")
                .default_value("checks.json")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(-f --file <FILE> "Path to a local HTML file, or '-' for stdin").value_name("FILE"))
        .arg(clap::arg!(-u --url <URL> "URL of an HTML page to fetch").value_name("URL"))
        .arg(
            clap::arg!(-o --output <FORMAT> "Output format (json, text)")
                .value_name("FORMAT")
                .default_value("json"),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("30"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-v --verbose "Enable progress logging on stderr"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "examen", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "examen", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "examen", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "examen", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
