mod helpers;

use helpers::run_binary;

#[test]
fn scripted_session_through_the_binary() {
    let res = run_binary(
        &["play", "--hands", "2", "--seed", "8", "--stack", "400"],
        "fold\nfold\n",
        &[],
    );
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.starts_with("play: hands=2 stack=400"));
    assert!(res.stdout.contains("Hands played: 2"));

    let finals = res
        .stdout
        .lines()
        .find_map(|l| l.strip_prefix("Final stacks: "))
        .expect("final stacks line");
    let total: u32 = finals
        .split(", ")
        .map(|s| s.rsplit(' ').next().unwrap().parse::<u32>().unwrap())
        .sum();
    assert_eq!(total, 800);
}

#[test]
fn quitting_mid_hand_exits_cleanly() {
    let res = run_binary(&["play", "--seed", "3"], "q\n", &[]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert!(res.stdout.contains("Hand abandoned."));
    assert!(res.stdout.contains("Hands played: 0"));
}

#[test]
fn log_filter_comes_from_the_environment() {
    let quiet = run_binary(&["play", "--hands", "1", "--seed", "3"], "fold\n", &[]);
    assert!(!quiet.stderr.contains("hand finished"));

    let loud = run_binary(
        &["play", "--hands", "1", "--seed", "3"],
        "fold\n",
        &[("HOLDEM_LOG", "holdem_engine=info")],
    );
    assert_eq!(loud.exit_code, 0);
    assert!(loud.stderr.contains("hand finished"));
    assert!(!loud.stdout.contains("hand finished"));
}

#[test]
fn invalid_stack_flag_fails_before_dealing() {
    let res = run_binary(&["play", "--stack", "0"], "", &[]);
    assert_eq!(res.exit_code, 2);
    assert!(!res.stdout.contains("Hand #1"));
}
