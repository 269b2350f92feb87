use std::io::Write;

use clap::ArgMatches;
use clap_complete::Shell;
use tracing::info;

use crate::app::build_cli;

pub(crate) fn handle_completions_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<Shell>("shell")
        .copied()
        .ok_or("Shell argument is required")?;

    write_completions(shell, &mut std::io::stdout().lock());

    info!(event = "cli.completions_generated", shell = %shell);
    Ok(())
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = build_cli();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();

        assert!(script.contains("pickset"));
        for subcommand in ["show", "apply", "export", "restore", "sample-config"] {
            assert!(script.contains(subcommand), "missing {}", subcommand);
        }
    }
}
