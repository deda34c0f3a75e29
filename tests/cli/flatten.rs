use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, SAMPLE_DATASET, output_with_stdin, stderr, stdout};

#[test]
fn test_flatten_sample_dataset() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let output = test.flatten_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_snapshot!(stdout(&output), @r#"
    [
      {
        "address": "0xab5801a7d398351b8be11c439e05c5b3259aec9b",
        "label": "binance",
        "type": "cex"
      },
      {
        "address": "0x28c6c06298d514db089934071355e5743bf21d60",
        "label": "binance",
        "type": "cex"
      },
      {
        "address": "0x2910543af39aba0cd09dbb2d50200b3e800a63d2",
        "label": "kraken",
        "type": "cex"
      }
    ]
    "#);
    assert_eq!(
        stderr(&output),
        "\u{26a0}\u{fe0f} Skipped Broken \u{2014} value was not an array\n"
    );

    Ok(())
}

#[test]
fn test_bare_invocation_flattens() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let bare = test.command().output()?;
    let explicit = test.flatten_command().output()?;

    assert!(bare.status.success());
    assert_eq!(stdout(&bare), stdout(&explicit));

    Ok(())
}

#[test]
fn test_flatten_output_ends_with_newline() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let out = stdout(&test.flatten_command().output()?);

    assert!(out.ends_with("]\n"));
    assert!(out.contains("\n  {\n    \"address\""));

    Ok(())
}

#[test]
fn test_flatten_empty_mapping() -> Result<()> {
    let test = CliTest::with_file(
        "dataset.json",
        r#"{ "ethereum": { "walletsByExchange": {} } }"#,
    )?;

    let output = test.flatten_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[]\n");
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_flatten_to_file() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let output = test
        .flatten_command()
        .args(["--output", "out/flat.json"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Wrote 3 records to out/flat.json\n");

    let written: Value = serde_json::from_str(&test.read_file("out/flat.json")?)?;
    assert_eq!(written.as_array().map(Vec::len), Some(3));

    Ok(())
}

#[test]
fn test_flatten_from_stdin_with_root_pointer() -> Result<()> {
    let test = CliTest::new()?;
    let mut cmd = test.flatten_command();
    cmd.args(["--dataset", "-", "--pointer", ""]);

    let output = output_with_stdin(cmd, r#"{ "A": ["0xAA", "0xBB"], "B": ["0xCC"] }"#)?;

    assert!(output.status.success());
    let records: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(
        records,
        serde_json::json!([
            { "address": "0xaa", "label": "a", "type": "cex" },
            { "address": "0xbb", "label": "a", "type": "cex" },
            { "address": "0xcc", "label": "b", "type": "cex" }
        ])
    );

    Ok(())
}

#[test]
fn test_flatten_uses_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".cexflatrc.json",
        r#"{ "dataset": "vendor/wallets.json", "walletsPointer": "/exchanges" }"#,
    )?;
    test.write_file("vendor/wallets.json", r#"{ "exchanges": { "OKX": ["0xA1"] } }"#)?;

    let output = test.flatten_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\"label\": \"okx\""));

    Ok(())
}

#[test]
fn test_flatten_verbose() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let output = test.flatten_command().arg("-v").output()?;

    assert!(stderr(&output).ends_with("Flattened 3 records from 3 labels (1 skipped)\n"));

    Ok(())
}

#[test]
fn test_flatten_missing_dataset() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.flatten_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("Error: Failed to read dataset: ./dataset.json"));

    Ok(())
}

#[test]
fn test_flatten_missing_wallets_pointer() -> Result<()> {
    let test = CliTest::with_file("dataset.json", r#"{ "bitcoin": {} }"#)?;

    let output = test.flatten_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Dataset has no value at \"/ethereum/walletsByExchange\""));

    Ok(())
}

#[test]
fn test_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let output = test.flatten_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert!(
        stderr(&output)
            .starts_with("Note: No .cexflatrc.json found, using default configuration\n")
    );

    Ok(())
}

#[test]
fn test_verbose_with_config_file_has_no_note() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;
    test.write_file(".cexflatrc.json", "{}")?;

    let output = test.flatten_command().arg("--verbose").output()?;

    assert!(output.status.success());
    assert!(!stderr(&output).contains("Note:"));

    Ok(())
}

#[test]
fn test_quiet_run_has_no_note() -> Result<()> {
    let test = CliTest::with_file("dataset.json", SAMPLE_DATASET)?;

    let output = test.flatten_command().output()?;

    assert!(!stderr(&output).contains("Note:"));

    Ok(())
}
