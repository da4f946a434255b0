use assert_cmd::Command;

/// Helper to get a Command for the topreco binary.
#[allow(deprecated)]
fn topreco_cmd() -> Command {
    Command::cargo_bin("topreco").unwrap()
}

#[test]
fn help_works() {
    topreco_cmd().arg("--help").assert().success();
}

#[test]
fn subcommand_help_works() {
    for sub in ["cmssw-base", "data-path", "timestamp", "match", "select", "schema"] {
        topreco_cmd().args([sub, "--help"]).assert().success();
    }
}
