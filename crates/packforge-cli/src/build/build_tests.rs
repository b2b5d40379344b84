#![allow(non_snake_case)]

use super::*;
use packforge_core::SideOverrides;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn create_jar(dir: &Path, name: &str, descriptor: Option<&str>) {
    fs::create_dir_all(dir).unwrap();
    let mut zip = ZipWriter::new(File::create(dir.join(name)).unwrap());
    let options = SimpleFileOptions::default();
    if let Some(descriptor) = descriptor {
        zip.start_file("mcmod.info", options).unwrap();
        zip.write_all(descriptor.as_bytes()).unwrap();
    }
    zip.start_file("Main.class", options).unwrap();
    zip.write_all(b"class").unwrap();
    zip.finish().unwrap();
}

fn options(temp_dir: &TempDir, config: PackConfig) -> BuildOptions {
    let input = temp_dir.path().join("input");
    fs::create_dir_all(&input).unwrap();
    BuildOptions {
        input_dir: input,
        output_dir: temp_dir.path().join("output"),
        config,
        build_time: 1_700_000_000,
    }
}

fn read_manifest(options: &BuildOptions) -> Value {
    let json = fs::read_to_string(options.pack_dir().join(MANIFEST_FILE)).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn run___empty_input___writes_minimal_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());

    let summary = run(&options).unwrap();

    assert_eq!(summary.plugins, 0);
    assert_eq!(summary.config_files, None);
    assert_eq!(read_manifest(&options), serde_json::json!({"mcversion": "1.6.4"}));
    assert!(!options.pack_dir().join(CONFIG_BUNDLE_FILE).exists());
}

#[test]
fn run___resets_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    let stale = options.output_dir.join("stale.txt");
    fs::create_dir_all(&options.output_dir).unwrap();
    fs::write(&stale, "old").unwrap();

    run(&options).unwrap();

    assert!(!stale.exists());
    assert!(options.pack_dir().join(MANIFEST_FILE).exists());
}

#[test]
fn run___plugins_ordered_by_file_name() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    let mods = options.input_dir.join(FORGE_MODS_DIR);
    create_jar(&mods, "zeta.jar", Some(r#"{"modid": "zeta"}"#));
    create_jar(&mods, "alpha.jar", Some(r#"{"modid": "alpha"}"#));
    create_jar(&mods, "mid.jar", None);

    run(&options).unwrap();

    let manifest = read_manifest(&options);
    let ids: Vec<&str> = manifest["mods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["modid"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["alpha", "mid.jar", "zeta"]);
}

#[test]
fn run___side_overrides_applied() {
    let temp_dir = TempDir::new().unwrap();
    let config = PackConfig {
        sides: SideOverrides {
            client: vec!["minimap.jar".to_string(), "both.jar".to_string()],
            server: vec!["backup.jar".to_string(), "both.jar".to_string()],
        },
        ..PackConfig::default()
    };
    let options = options(&temp_dir, config);
    let mods = options.input_dir.join(FORGE_MODS_DIR);
    for name in ["backup.jar", "both.jar", "core.jar", "minimap.jar"] {
        create_jar(&mods, name, None);
    }

    run(&options).unwrap();

    let manifest = read_manifest(&options);
    let sides: Vec<Option<&str>> = manifest["mods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.get("side").and_then(Value::as_str))
        .collect();
    assert_eq!(sides, [Some("server"), None, None, Some("client")]);
}

#[test]
fn run___additional_arguments_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = PackConfig {
        additional_arguments: Some("-Xmx3G".to_string()),
        platform_version: "1.7.10".to_string(),
        ..PackConfig::default()
    };
    let options = options(&temp_dir, config);

    run(&options).unwrap();

    let manifest = read_manifest(&options);
    assert_eq!(manifest["additionalArguments"], "-Xmx3G");
    assert_eq!(manifest["mcversion"], "1.7.10");
}

#[test]
fn run___blank_library_line___fails_without_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    fs::write(
        options.input_dir.join(LIBRARIES_FILE),
        "org.foo:bar:1.0\n\norg.foo:baz:2.0\n",
    )
    .unwrap();

    let err = run(&options).unwrap_err();

    assert!(format!("{err:#}").contains("malformed library coordinate"));
    assert!(!options.pack_dir().join(MANIFEST_FILE).exists());
}

#[test]
fn run___non_archive_plugin___fails_without_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    let mods = options.input_dir.join(FORGE_MODS_DIR);
    create_jar(&mods, "good.jar", None);
    fs::write(mods.join("notes.txt"), "not a jar").unwrap();

    let err = run(&options).unwrap_err();

    assert!(format!("{err:#}").contains("notes.txt"));
    assert!(!options.pack_dir().join(MANIFEST_FILE).exists());
}

#[test]
fn run___tweaks_keep_line_order() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    fs::write(
        options.input_dir.join(TWEAKS_FILE),
        "b.Tweaker\n  a.Tweaker  \n",
    )
    .unwrap();

    let summary = run(&options).unwrap();

    assert_eq!(summary.tweaks, 2);
    assert_eq!(
        read_manifest(&options)["tweakClasses"],
        serde_json::json!(["b.Tweaker", "a.Tweaker"])
    );
}

#[test]
fn run___empty_config_directory___writes_empty_archive() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    fs::create_dir_all(options.input_dir.join(CONFIG_DIR)).unwrap();

    let summary = run(&options).unwrap();

    assert_eq!(summary.config_files, Some(0));
    let manifest = read_manifest(&options);
    assert_eq!(manifest["config"]["file"], "config.zip");
    assert_eq!(manifest["config"]["version"], 1_700_000_000);
}

#[test]
fn run___config_path_is_a_file___skips_config_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    fs::write(options.input_dir.join(CONFIG_DIR), "not a directory").unwrap();

    let summary = run(&options).unwrap();

    assert_eq!(summary.config_files, None);
    assert_eq!(read_manifest(&options).get("config"), None);
    assert!(!options.pack_dir().join(CONFIG_BUNDLE_FILE).exists());
}

#[test]
fn run___libraries_keep_classifier_and_url() {
    let temp_dir = TempDir::new().unwrap();
    let options = options(&temp_dir, PackConfig::default());
    fs::write(
        options.input_dir.join(LIBRARIES_FILE),
        "  org.foo:bar:1.0:natives:http://repo.example.com/maven  \norg.foo:baz:2.0\n",
    )
    .unwrap();

    run(&options).unwrap();

    assert_eq!(
        read_manifest(&options)["libraries"],
        serde_json::json!([
            {
                "group": "org.foo",
                "name": "bar",
                "version": "1.0",
                "classifier": "natives",
                "url": "http://repo.example.com/maven"
            },
            {"group": "org.foo", "name": "baz", "version": "2.0"}
        ])
    );
}

#[test]
fn BuildSummary___display___lists_counts() {
    let summary = BuildSummary {
        plugins: 2,
        libraries: 1,
        tweaks: 0,
        config_files: Some(3),
        manifest_path: PathBuf::from("output/modpack/latest/pack.json"),
    };

    let text = summary.to_string();

    assert!(text.contains("Plugins: 2"));
    assert!(text.contains("Config files: 3"));
    assert!(text.contains("output/modpack/latest/pack.json"));
}

#[test]
fn BuildOptions___new___stamps_current_time() {
    let options = BuildOptions::new(
        PathBuf::from("input"),
        PathBuf::from("output"),
        PackConfig::default(),
    );

    assert!(options.build_time > 1_600_000_000);
    assert_eq!(options.pack_dir(), Path::new("output").join(PACK_DIR));
}
