// codeboard-core/tests/bundler_tests.rs

use codeboard_core::bundler::{banner_header, bundle_str, FsSourceProvider, ScanRules};
use codeboard_core::{bundle_template, BundleConfig, BundleConfigBuilder, CoreError};
use std::fs;
use tempfile::tempdir;

fn banner() -> String {
    format!("// {}", "~".repeat(64))
}

fn js_rules() -> ScanRules {
    ScanRules::new(vec!["js".to_string()], 30)
}

#[test]
fn test_template_without_blocks_is_copied_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let template = "/**\n * header\n */\n// ~ short\nfunction load() {}\n";
    fs::write(dir.path().join("Template.js"), template)?;

    let config = BundleConfig::new(dir.path().join("Template.js"), dir.path().join("Out.js"));
    let report = bundle_template(&config)?;

    assert_eq!(fs::read_to_string(dir.path().join("Out.js"))?, template);
    assert!(report.inlined.is_empty());
    assert_eq!(report.bytes_written, template.len() as u64);
    Ok(())
}

#[test]
fn test_single_block_is_replaced() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let b = banner();
    let before = "// PUBLIC OBJECTS\n\n";
    let after = "\n// trailer\n";
    let template = format!("{before}{b}\n// EngineCore.js\n{b}\nstale();\n{b}{after}");
    fs::write(dir.path().join("Template.js"), &template)?;
    fs::write(dir.path().join("EngineCore.js"), "function core() {}")?;

    let config = BundleConfig::new(dir.path().join("Template.js"), dir.path().join("Out.js"));
    bundle_template(&config)?;

    let expected = format!(
        "{before}{}function core() {{}}\n\n{b}{after}",
        banner_header("EngineCore.js")
    );
    assert_eq!(fs::read_to_string(dir.path().join("Out.js"))?, expected);
    Ok(())
}

#[test]
fn test_engine_style_template() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let b = banner();
    let names = ["EngineCore.js", "EngineUtilities.js", "EngineLayers.js"];

    let mut template = String::from("// CONTRACTED FUNCTIONS\n// load()\n\n");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            template.push('\n');
        }
        template.push_str(&format!("{b}\n// {name}\n{b}\n"));
        fs::write(dir.path().join(name), format!("// {name} body\n"))?;
    }
    fs::write(dir.path().join("TemplateCodeboardEngine.js"), &template)?;

    let config = BundleConfigBuilder::new()
        .template_path(dir.path().join("TemplateCodeboardEngine.js"))
        .output_path(dir.path().join("CodeboardEngine.js"))
        .build();
    let report = bundle_template(&config)?;

    let mut expected = String::from("// CONTRACTED FUNCTIONS\n// load()\n\n");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            expected.push('\n');
        }
        expected.push_str(&banner_header(name));
        expected.push_str(&format!("// {name} body\n\n"));
    }

    assert_eq!(fs::read_to_string(dir.path().join("CodeboardEngine.js"))?, expected);
    assert_eq!(
        report.inlined.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
        names.to_vec()
    );
    assert_eq!(report.inlined[0].line, 4);
    assert_eq!(report.bytes_written, expected.len() as u64);
    Ok(())
}

#[test]
fn test_bundling_is_repeatable() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let b = banner();
    fs::write(
        dir.path().join("Template.js"),
        format!("{b}\n// A.js\n{b}\n\n{b}\n// A.js\n{b}\n"),
    )?;
    fs::write(dir.path().join("A.js"), "const a = 1;\n")?;

    let config = BundleConfig::new(dir.path().join("Template.js"), dir.path().join("Out.js"));
    bundle_template(&config)?;
    let first = fs::read(dir.path().join("Out.js"))?;
    bundle_template(&config)?;
    let second = fs::read(dir.path().join("Out.js"))?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_bundled_output_can_be_rebundled() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let b = banner();
    // A closing banner after the last block keeps its body from running to EOF.
    let template = format!("head\n{b}\n// A.js\n{b}\n\n{b}\n// B.js\n{b}\n\n{b}\n");
    fs::write(dir.path().join("A.js"), "a();\nmore();")?;
    fs::write(dir.path().join("B.js"), "b();\n")?;

    let sources = FsSourceProvider::new(dir.path());
    let once = String::from_utf8(bundle_str(&template, &js_rules(), &sources)?)?;
    let twice = String::from_utf8(bundle_str(&once, &js_rules(), &sources)?)?;

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_binary_sources_are_copied_verbatim() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let b = banner();
    let raw = vec![0xff, 0x00, b'\r', b'\n', 0xfe];
    fs::write(dir.path().join("blob.js"), &raw)?;

    let template = format!("{b}\n// blob.js\n{b}\n");
    let out = bundle_str(&template, &js_rules(), &FsSourceProvider::new(dir.path()))?;

    let mut expected = banner_header("blob.js").into_bytes();
    expected.extend_from_slice(&raw);
    expected.push(b'\n');
    assert_eq!(out, expected);
    Ok(())
}

#[test]
fn test_base_dir_override() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let sources_dir = dir.path().join("engine");
    fs::create_dir(&sources_dir)?;
    fs::write(sources_dir.join("A.js"), "a")?;

    let b = banner();
    fs::write(dir.path().join("Template.js"), format!("{b}\n// A.js\n{b}\n"))?;

    let config = BundleConfigBuilder::new()
        .template_path(dir.path().join("Template.js"))
        .output_path(dir.path().join("Out.js"))
        .base_dir(&sources_dir)
        .build();
    bundle_template(&config)?;

    let expected = format!("{}a\n", banner_header("A.js"));
    assert_eq!(fs::read_to_string(dir.path().join("Out.js"))?, expected);
    Ok(())
}

#[test]
fn test_missing_template_leaves_output_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config = BundleConfig::new(dir.path().join("Missing.js"), dir.path().join("Out.js"));

    match bundle_template(&config) {
        Err(CoreError::TemplateRead { path, .. }) => assert!(path.ends_with("Missing.js")),
        other => panic!("Unexpected result: {:?}", other),
    }
    assert!(!dir.path().join("Out.js").exists());
    Ok(())
}

#[test]
fn test_missing_reference_leaves_partial_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let b = banner();
    fs::write(dir.path().join("A.js"), "a")?;
    fs::write(
        dir.path().join("Template.js"),
        format!("head\n{b}\n// A.js\n{b}\n\n{b}\n// Gone.js\n{b}\ntail\n"),
    )?;

    let config = BundleConfig::new(dir.path().join("Template.js"), dir.path().join("Out.js"));
    match bundle_template(&config) {
        Err(CoreError::ReferenceRead { name, .. }) => assert_eq!(name, "Gone.js"),
        other => panic!("Unexpected result: {:?}", other),
    }

    let partial = fs::read_to_string(dir.path().join("Out.js"))?;
    assert_eq!(partial, format!("head\n{}a\n\n", banner_header("A.js")));
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_before_io() {
    let config = BundleConfig::new("same.js", "same.js");
    assert!(matches!(bundle_template(&config), Err(CoreError::Config(_))));
}
