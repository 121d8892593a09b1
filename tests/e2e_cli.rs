mod support;

use std::process::Output;

use tempfile::tempdir;

use support::{count_lines_containing, run_loadtester, spawn_http_server, unreachable_url};

fn describe(output: &Output) -> String {
    format!(
        "status: {:?}\nstdout: {}\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn e2e_legacy_flags_against_responsive_server() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadtester(
        dir.path(),
        [
            format!("-url={}", url),
            "-n=10".to_owned(),
            "-c=2".to_owned(),
            "-method=GET".to_owned(),
            "-timeout=5".to_owned(),
        ],
    )?;
    if !output.status.success() {
        return Err(describe(&output));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    for expected in [
        "Load Test Results:",
        "Total Requests: 10",
        "Concurrency Level: 2",
        "Time taken: ",
        "Requests per second: ",
    ] {
        if !stdout.contains(expected) {
            return Err(format!("Missing '{}'\n{}", expected, describe(&output)));
        }
    }
    let completed = count_lines_containing(&stderr, "Request completed with status 200");
    if completed != 10 {
        return Err(format!(
            "Expected 10 completion lines, got {}\n{}",
            completed,
            describe(&output)
        ));
    }
    if server.hits() != 10 {
        return Err(format!("Server saw {} requests", server.hits()));
    }
    Ok(())
}

#[test]
fn e2e_stdout_carries_only_the_summary() -> Result<(), String> {
    let (url, _server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadtester(dir.path(), ["--url", url.as_str(), "-n", "3", "-c", "1"])?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    if lines.len() != 6 || lines.first() != Some(&"") {
        return Err(format!("Unexpected stdout shape: {:?}", lines));
    }
    Ok(())
}

#[test]
fn e2e_empty_url_is_fatal() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadtester(dir.path(), ["-url=", "-n=5"])?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stdout.contains("Load Test Results") {
        return Err(format!("Summary printed on fatal error\n{}", describe(&output)));
    }
    if !stderr.contains("URL is required") {
        return Err(format!("Missing fatal log line\n{}", describe(&output)));
    }
    if stderr.contains("Worker ") {
        return Err(format!("Workers ran on fatal error\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_missing_url_is_fatal() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadtester(dir.path(), Vec::<String>::new())?;
    if output.status.success() {
        return Err(format!("Expected failure\n{}", describe(&output)));
    }
    if !String::from_utf8_lossy(&output.stderr).contains("URL is required") {
        return Err(format!("Missing fatal log line\n{}", describe(&output)));
    }
    Ok(())
}

#[test]
fn e2e_unreachable_target_still_prints_summary() -> Result<(), String> {
    let url = unreachable_url()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;

    let output = run_loadtester(
        dir.path(),
        ["--url", url.as_str(), "-n", "5", "-c", "2", "--timeout", "2"],
    )?;
    if !output.status.success() {
        return Err(format!("Per-request errors changed the exit code\n{}", describe(&output)));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.contains("Total Requests: 5") {
        return Err(format!("Missing summary\n{}", describe(&output)));
    }
    let errors = count_lines_containing(&stderr, "Request error");
    if errors != 5 {
        return Err(format!(
            "Expected 5 error lines, got {}\n{}",
            errors,
            describe(&output)
        ));
    }
    Ok(())
}

#[test]
fn e2e_default_config_file_is_used() -> Result<(), String> {
    let (url, server) = spawn_http_server()?;
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let config = format!("url = \"{}\"\nrequests = 4\nconcurrency = 3\n", url);
    std::fs::write(dir.path().join("loadtester.toml"), config)
        .map_err(|err| format!("write config failed: {}", err))?;

    let output = run_loadtester(dir.path(), Vec::<String>::new())?;
    if !output.status.success() {
        return Err(describe(&output));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("Total Requests: 4") || !stdout.contains("Concurrency Level: 3") {
        return Err(format!("Config file was not applied\n{}", describe(&output)));
    }
    if server.hits() != 4 {
        return Err(format!("Server saw {} requests", server.hits()));
    }
    Ok(())
}
