use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("linktitle")
        .version(env!("CARGO_PKG_VERSION"))
        .author("linktitle contributors")
        .about("Print titles for links found in chat messages")
        .arg(clap::arg!([MESSAGE] ... "Message text, one argument per message, or '-' to read lines from stdin"))
        .arg(clap::arg!(-c --channel <CHANNEL> "Channel the messages are posted in").default_value("#linktitle"))
        .arg(
            clap::arg!(--config_dir <DIR> "Directory holding title.toml (default: platform config dir)")
                .value_name("DIR")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-s --style <STYLE> "Reply style (plain, irc)")
                .value_name("STYLE")
                .default_value("plain")
                .value_parser(["plain", "irc"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds"))
        .arg(clap::arg!(--user_agent <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(--reddit "Enable the Reddit command"))
        .arg(clap::arg!(-f --force "Ignore channel, extension and domain blacklists"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "linktitle", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "linktitle", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "linktitle", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "linktitle", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
