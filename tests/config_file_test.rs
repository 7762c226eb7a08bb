use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use ui_utils::utils::validation::Validate;
use ui_utils::{IntervalSampler, MarkupRewriter, TomlConfig, UtilsError};

#[test]
fn test_config_file_drives_rewriter_and_sampler() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[markup]
images_width = 320

[sampler]
intervals = [[0.0, 1.0], [2.0, 3.0]]
seed = 99
count = 5
"#
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    let out = MarkupRewriter::new(config.markup_options()).rewrite("http://a.io/p.svg");
    assert!(out.contains("<img width=\"320\" src=\"http://a.io/p.svg\" />"));

    let set = config.sampler.interval_set()?;
    let seed = config.sampler.seed.expect("seed set in file");
    let first = IntervalSampler::from_seed(seed).sample_n(&set, config.sample_count() as usize);
    let again = IntervalSampler::from_seed(seed).sample_n(&set, config.sample_count() as usize);
    assert_eq!(first.len(), 5);
    assert_eq!(first, again);
    assert!(first.iter().all(|v| set.contains(*v)));

    Ok(())
}

#[test]
fn test_env_var_substitution() -> Result<()> {
    std::env::set_var("UI_UTILS_TEST_IMAGE_HEIGHT", "48");
    let config =
        TomlConfig::from_toml_str("[markup]\nimages_height = ${UI_UTILS_TEST_IMAGE_HEIGHT}\n")?;
    assert_eq!(config.markup_options().images_height, Some(48));
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = TomlConfig::from_file("/definitely/not/here/ui-utils.toml").unwrap_err();
    assert!(matches!(err, UtilsError::IoError(_)));
}
