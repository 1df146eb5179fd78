// End-to-end tests for the Android icon set generator
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use app_icon_gen::icon_gen::{
    run_android, GeneratorConfig, IconMode, RunStatus, ANDROID_ICONS,
};
use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock error")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("app-icon-gen-android-{tag}-{nanos}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_logo(config: &GeneratorConfig) {
    let source = config.source_path();
    std::fs::create_dir_all(source.parent().expect("source dir")).expect("create assets dir");
    RgbaImage::from_pixel(512, 512, Rgba([240, 90, 20, 255]))
        .save_with_format(&source, ImageFormat::Png)
        .expect("save logo");
}

fn run(config: &GeneratorConfig) -> (RunStatus, String) {
    let mut out = Vec::new();
    let status = run_android(config.clone(), &mut out).expect("stdout write");
    (status, String::from_utf8(out).expect("utf8 output"))
}

fn read_outputs(root: &Path) -> Vec<Vec<u8>> {
    ANDROID_ICONS
        .iter()
        .map(|spec| std::fs::read(root.join(spec.path)).expect("read icon"))
        .collect()
}

#[test]
fn every_entry_is_written_at_its_exact_size() {
    let root = unique_temp_dir("sizes");
    let config = GeneratorConfig::with_root(&root);
    write_logo(&config);

    let (status, output) = run(&config);
    assert_eq!(status, RunStatus::Completed);

    for spec in ANDROID_ICONS.iter() {
        let path = root.join(spec.path);
        let icon = image::open(&path).expect("decode icon");
        assert_eq!(icon.dimensions(), (spec.size, spec.size), "{}", spec.path);
        assert!(output.contains(&format!(
            "Created: {} ({}x{})",
            path.display(),
            spec.size,
            spec.size
        )));
    }

    assert!(output.starts_with("Generating Android icons...\n"));
    assert!(output.contains("✅ All Android icons generated successfully!"));
    assert!(output.contains("1. Run: flutter clean"));

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn adaptive_foregrounds_are_transparent_outside_the_logo() {
    let root = unique_temp_dir("adaptive");
    let config = GeneratorConfig::with_root(&root);
    write_logo(&config);

    let (status, _) = run(&config);
    assert_eq!(status, RunStatus::Completed);

    for spec in ANDROID_ICONS
        .iter()
        .filter(|spec| spec.mode == IconMode::AdaptiveForeground)
    {
        let icon = image::open(root.join(spec.path)).expect("decode icon").to_rgba8();
        let logo = (spec.size as f64 * 0.6).round() as u32;
        let offset = (spec.size - logo) / 2;
        let region = offset..offset + logo;

        for (x, y, pixel) in icon.enumerate_pixels() {
            if !(region.contains(&x) && region.contains(&y)) {
                assert_eq!(pixel[3], 0, "{} ({x},{y})", spec.path);
            }
        }
        let center = spec.size / 2;
        assert!(icon.get_pixel(center, center)[3] > 0);
    }

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn reference_example_places_65px_logo_at_offset_21() {
    let root = unique_temp_dir("example");
    let config = GeneratorConfig::with_root(&root);
    write_logo(&config);

    run(&config);

    let icon = image::open(root.join("android/app/src/main/res/mipmap-mdpi/ic_launcher_foreground.png"))
        .expect("decode icon")
        .to_rgba8();
    assert_eq!(icon.dimensions(), (108, 108));
    assert_eq!(icon.get_pixel(20, 54)[3], 0);
    assert!(icon.get_pixel(21, 54)[3] > 0);
    assert!(icon.get_pixel(85, 54)[3] > 0);
    assert_eq!(icon.get_pixel(86, 54)[3], 0);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn second_run_produces_identical_bytes() {
    let root = unique_temp_dir("idempotent");
    let config = GeneratorConfig::with_root(&root);
    write_logo(&config);

    run(&config);
    let first = read_outputs(&root);
    run(&config);
    let second = read_outputs(&root);

    assert_eq!(first, second);

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn missing_source_writes_nothing_and_names_the_path() {
    let root = unique_temp_dir("missing");
    let config = GeneratorConfig::with_root(&root);

    let (status, output) = run(&config);

    assert_eq!(status, RunStatus::MissingInput);
    assert!(output.contains(&config.source_path().display().to_string()));
    assert!(output.starts_with("Error: "));
    assert!(!root.join("android").exists());

    let _ = std::fs::remove_dir_all(root);
}

#[test]
fn blocked_density_directory_fails_only_that_density() {
    let root = unique_temp_dir("blocked");
    let config = GeneratorConfig::with_root(&root);
    write_logo(&config);

    let res_dir = root.join("android/app/src/main/res");
    std::fs::create_dir_all(&res_dir).expect("create res dir");
    std::fs::write(res_dir.join("mipmap-hdpi"), b"not a directory").expect("write blocker");

    let (status, output) = run(&config);

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(output.matches("Failed: ").count(), 2);
    assert!(output.contains("mipmap-hdpi"));
    assert!(output.contains("❌ 2 of 10 Android outputs failed"));
    assert!(res_dir.join("mipmap-xxxhdpi/ic_launcher_foreground.png").exists());

    let _ = std::fs::remove_dir_all(root);
}
