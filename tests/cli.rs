#[cfg(target_os = "macos")]
#[test]
fn prints_a_single_space_number() {
    let output = test_bin::get_test_bin!("current-space")
        .env("RUST_LOG", "off")
        .output()
        .expect("run current-space");

    assert!(output.status.success(), "exit status: {:?}", output.status);
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {stdout:?}");

    let number: i64 = lines[0].parse().expect("integer output");
    assert!(number == -1 || number >= 1, "unexpected number {number}");
}

#[cfg(not(target_os = "macos"))]
#[test]
fn prints_minus_one_without_a_window_server() {
    let output = test_bin::get_test_bin!("current-space")
        .env("RUST_LOG", "off")
        .output()
        .expect("run current-space");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "-1\n");
}
