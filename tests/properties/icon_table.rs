//! Property tests for icon specs and the per-platform table.

use std::collections::HashSet;

use proptest::prelude::*;

use appicons::domain::entities::IconSpec;
use appicons::domain::services::catalog;

proptest! {
    /// PROPERTY: whole-point specs scale exactly.
    #[test]
    fn property_integer_points_scale_exactly(points in 1u32..=1024, scale in 1u32..=3) {
        let spec = IconSpec::new(points as f32).scaled(scale);
        prop_assert_eq!(spec.pixels(), points * scale);
    }

    /// PROPERTY: half-point specs round to the nearest pixel.
    #[test]
    fn property_half_points_round(points in 1u32..=512, scale in 1u32..=3) {
        let spec = IconSpec::new(points as f32 + 0.5).scaled(scale);
        let expected = ((points as f64 + 0.5) * scale as f64).round() as u32;
        prop_assert_eq!(spec.pixels(), expected);
    }
}

#[test]
fn ios_filenames_are_unique() {
    let names: Vec<String> = catalog::IOS
        .iter()
        .flat_map(|set| set.specs())
        .map(|spec| catalog::ios_filename(&spec))
        .collect();
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(names.len(), 15);
    assert_eq!(unique.len(), names.len());
}

#[test]
fn macos_filenames_collide_only_on_equal_pixels() {
    let specs: Vec<IconSpec> = catalog::MACOS.iter().flat_map(|set| set.specs()).collect();
    for a in &specs {
        for b in &specs {
            if catalog::macos_filename(a) == catalog::macos_filename(b) {
                assert_eq!(a.pixels(), b.pixels());
            }
        }
    }
}
