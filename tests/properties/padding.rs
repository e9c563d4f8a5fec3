//! Property tests for safe-zone padding geometry.

use proptest::prelude::*;

use appicons::Padding;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: margin + inner + margin always reconstructs the full edge.
    #[test]
    fn property_geometry_partitions_the_edge(size in 1u32..=4096) {
        if let Some(g) = Padding::MASKABLE.geometry(size) {
            prop_assert_eq!(g.margin * 2 + g.inner, size);
            prop_assert!(g.inner > 0);
        }
    }

    /// PROPERTY: the maskable margin is the rounded 10% of the edge.
    #[test]
    fn property_maskable_margin_is_rounded_tenth(size in 1u32..=4096) {
        let expected = (size as f64 * 0.1).round() as u32;
        if let Some(g) = Padding::MASKABLE.geometry(size) {
            prop_assert_eq!(g.margin, expected);
        }
    }

    /// PROPERTY: no padding leaves the whole edge to the art.
    #[test]
    fn property_none_is_identity(size in 1u32..=4096) {
        let g = Padding::NONE.geometry(size).unwrap();
        prop_assert_eq!(g.margin, 0);
        prop_assert_eq!(g.inner, size);
    }

    /// PROPERTY: any valid fraction yields a geometry or None, never a panic.
    #[test]
    fn property_any_fraction_never_panics(fraction in 0.0f32..0.5, size in 0u32..=u32::MAX) {
        let padding = Padding::new(fraction).unwrap();
        let _ = padding.geometry(size);
    }
}
