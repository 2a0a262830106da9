use anyhow::Context;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::process::Command as ProcessCommand;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Workspace helper tasks")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the built-in fixers in pipeline order.
    ListFixers,
    /// Create an empty golden fixture layout under tests/fixtures/<name>.
    InitFixture { name: String },
    /// Bless golden fixtures (overwrite expected outputs).
    BlessFixtures,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::ListFixers => {
            for meta in catalogfix_domain::builtin_fixer_metas() {
                println!("{:<12} {:<18} {}", meta.key, meta.section, meta.description);
            }
        }
        Command::InitFixture { name } => {
            let dir = format!("tests/fixtures/{name}");
            fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;
            fs::write(
                format!("{dir}/input.json"),
                "{\n  \"columns\": [\"description\", \"costprice\", \"vatrate\"],\n  \"rows\": []\n}\n",
            )?;
            fs::write(format!("{dir}/config.toml"), "round_decimals = false\n")?;
            println!("initialized {dir}/{{input.json,config.toml}}");
        }
        Command::BlessFixtures => {
            let status = ProcessCommand::new("cargo")
                .args(["test", "-p", "catalogfix-domain", "--test", "golden_fixtures"])
                .env("CATALOGFIX_BLESS", "1")
                .status()
                .context("run golden fixture blessing")?;
            if !status.success() {
                anyhow::bail!("bless-fixtures failed");
            }
        }
    }
    Ok(())
}
