//! Test fixtures: master SVGs and the expected output table

/// Full-bleed square; every pixel of an unpadded render is opaque
pub const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100"><rect width="100" height="100" fill="#3366ff"/></svg>"##;

/// 2:1 artwork, letterboxed when fitted into a square
pub const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100"><rect width="200" height="100" fill="#ff0000"/></svg>"##;

pub const IOS_SET: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";
pub const MACOS_SET: &str = "macos/Runner/Assets.xcassets/AppIcon.appiconset";
pub const WINDOWS_ICO: &str = "windows/runner/resources/app_icon.ico";

/// Every PNG a full run writes, with its pixel size
pub fn expected_pngs() -> Vec<(String, u32)> {
    let mut files: Vec<(String, u32)> = vec![
        ("android/app/src/main/res/mipmap-mdpi/ic_launcher.png".into(), 48),
        ("android/app/src/main/res/mipmap-hdpi/ic_launcher.png".into(), 72),
        ("android/app/src/main/res/mipmap-xhdpi/ic_launcher.png".into(), 96),
        ("android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png".into(), 144),
        ("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png".into(), 192),
    ];

    let ios = [
        ("20x20@1x", 20),
        ("20x20@2x", 40),
        ("20x20@3x", 60),
        ("29x29@1x", 29),
        ("29x29@2x", 58),
        ("29x29@3x", 87),
        ("40x40@1x", 40),
        ("40x40@2x", 80),
        ("40x40@3x", 120),
        ("60x60@2x", 120),
        ("60x60@3x", 180),
        ("76x76@1x", 76),
        ("76x76@2x", 152),
        ("83.5x83.5@2x", 167),
    ];
    for (label, size) in ios {
        files.push((format!("{IOS_SET}/Icon-App-{label}.png"), size));
    }
    files.push((format!("{IOS_SET}/Icon-App-1024x1024.png"), 1024));

    files.extend([
        ("web/icons/Icon-192.png".to_string(), 192),
        ("web/icons/Icon-512.png".to_string(), 512),
        ("web/icons/Icon-maskable-192.png".to_string(), 192),
        ("web/icons/Icon-maskable-512.png".to_string(), 512),
        ("web/favicon.png".to_string(), 16),
    ]);

    for size in [16, 32, 64, 128, 256, 512, 1024] {
        files.push((format!("{MACOS_SET}/app_icon_{size}.png"), size));
    }

    files.push(("linux/icon.png".to_string(), 64));
    files
}
