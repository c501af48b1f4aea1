use assert_cmd::cargo::cargo_bin_cmd;

fn help_text() -> String {
    let assert = cargo_bin_cmd!("pyboot").arg("--help").assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 help")
}

#[test]
fn help_lists_search_order_and_exit_codes() {
    let help = help_text();
    assert!(help.contains("Search order:"), "{help}");
    assert!(help.contains("4 interpreter failed to start"), "{help}");
}

#[test]
fn help_warns_that_json_shares_stdout_with_the_interpreter() {
    let help = help_text();
    assert!(help.contains("use --json --dry-run when the output is parsed"), "{help}");
    assert!(help.contains("add --dry-run for parseable output"), "{help}");
}
