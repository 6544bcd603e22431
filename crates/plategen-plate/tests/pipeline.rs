use plategen_core::Point2;
use plategen_layout::LayoutError;
use plategen_plate::{
    generate_plate, render_plate, ConfigError, Plate, PlateConfig, PlateError, Primitive,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn extent(prims: &[Primitive]) -> (Decimal, Decimal, Decimal, Decimal) {
    let points: Vec<Point2> = prims
        .iter()
        .filter_map(|p| match p {
            Primitive::Line(l) => Some([l.start, l.end]),
            Primitive::Arc(_) => None,
        })
        .flatten()
        .collect();
    let min_x = points.iter().map(|p| p.x).min().unwrap();
    let max_x = points.iter().map(|p| p.x).max().unwrap();
    let min_y = points.iter().map(|p| p.y).min().unwrap();
    let max_y = points.iter().map(|p| p.y).max().unwrap();
    (min_x, max_x, min_y, max_y)
}

#[test]
fn flat_two_row_layout_end_to_end() {
    let doc = json!([[{"w": 2}, "A", "B"], [{"w": 3}, "C"]]);
    let mut plate = Plate::default();
    let summary = generate_plate(&doc, &PlateConfig::default(), &mut plate).unwrap();

    assert_eq!(summary.keys, 3);
    assert_eq!(summary.primitives, plate.primitives.len());
    let bounds = summary.bounds.unwrap();
    assert_eq!(bounds.width(), dec!(57.15));
    assert_eq!(bounds.height(), dec!(38.1));
    assert_eq!(plate.bounds, summary.bounds);

    // First key: 2u, so a switch cutout plus two stabilizers. The cutout comes first.
    let (min_x, max_x, min_y, max_y) = extent(&plate.primitives[..8]);
    assert_eq!(max_x - min_x, dec!(14));
    assert_eq!(max_y - min_y, dec!(14));
    assert_eq!((min_x + max_x) / dec!(2), dec!(19.05));
    assert_eq!((min_y + max_y) / dec!(2), dec!(-9.525));

    // 2u + 1u + 3u: switch cutouts for all, stabilizers for the 2u and 3u keys.
    assert_eq!(plate.primitives.len(), 3 * 8 + 2 * 16);
}

#[test]
fn first_unit_key_cutout_is_centered_in_its_cell() {
    let doc = json!([["A", "B"], ["C"]]);
    let mut plate = Plate::default();
    generate_plate(&doc, &PlateConfig::default(), &mut plate).unwrap();
    let (min_x, max_x, min_y, max_y) = extent(&plate.primitives[..8]);
    assert_eq!((min_x, max_x), (dec!(2.525), dec!(16.525)));
    assert_eq!((min_y, max_y), (dec!(-16.525), dec!(-2.525)));
}

#[test]
fn configuration_is_checked_before_the_layout() {
    let doc = json!("not a layout");
    let config = PlateConfig {
        cutout_type: "topre".into(),
        ..PlateConfig::default()
    };
    let mut plate = Plate::default();
    let err = generate_plate(&doc, &config, &mut plate).unwrap_err();
    assert!(matches!(
        err,
        PlateError::Config(ConfigError::UnknownFootprint(_))
    ));
    assert!(plate.primitives.is_empty());
}

#[test]
fn prevalidated_settings_render_the_same_plate() {
    let doc = json!([[{"w": 6.25}, "Space"], [{"r": 15, "rx": 1}, "A"]]);
    let config = PlateConfig {
        stab_type: "alps-aek".into(),
        ..PlateConfig::default()
    };

    let mut direct = Plate::default();
    let expected = generate_plate(&doc, &config, &mut direct).unwrap();

    let settings = config.validate().unwrap();
    let mut split = Plate::default();
    let summary = render_plate(&doc, settings, &mut split).unwrap();

    assert_eq!(summary, expected);
    assert_eq!(split.primitives, direct.primitives);
    assert_eq!(split.bounds, direct.bounds);
}

#[test]
fn layout_errors_reach_nothing() {
    let doc = json!([["A", "B"], ["C", ["D"]]]);
    let mut plate = Plate::default();
    let err = generate_plate(&doc, &PlateConfig::default(), &mut plate).unwrap_err();
    assert!(matches!(
        err,
        PlateError::Layout(LayoutError::NestedRow { row: 1, index: 1 })
    ));
    assert!(plate.primitives.is_empty());
    assert!(plate.bounds.is_none());
}

#[test]
fn empty_layout_has_no_bounds() {
    let mut plate = Plate::default();
    let summary = generate_plate(&json!([]), &PlateConfig::default(), &mut plate).unwrap();
    assert_eq!(summary.keys, 0);
    assert_eq!(summary.bounds, None);
    assert!(plate.primitives.is_empty());
}

#[test]
fn alps_stabilizers_follow_their_own_table() {
    let config = PlateConfig {
        cutout_type: "alps".into(),
        stab_type: "alps-at101".into(),
        ..PlateConfig::default()
    };
    let mut plate = Plate::default();
    generate_plate(&json!([[{"w": 2.75}, "Shift"]]), &config, &mut plate).unwrap();
    let center = dec!(2.75) * dec!(19.05) / dec!(2);
    let (min_x, max_x, _, _) = extent(&plate.primitives);
    assert_eq!(min_x, center - dec!(20.5) - dec!(1.335));
    assert_eq!(max_x, center + dec!(20.5) + dec!(1.335));
}

proptest! {
    #[test]
    fn rotated_cutout_keeps_its_shape(hundredths in -18000i64..18000) {
        let angle = Decimal::new(hundredths, 2);
        let doc = json!([[{"_rc": angle.to_string()}, "A"]]);
        let mut plate = Plate::default();
        generate_plate(&doc, &PlateConfig::default(), &mut plate).unwrap();

        let center = Point2::new(dec!(9.525), dec!(-9.525));
        let eps = dec!(0.0000000001);
        for primitive in &plate.primitives {
            match primitive {
                Primitive::Arc(arc) => {
                    // Fillet centers sit 6.5 mm in from both edges.
                    let dx = arc.center.x - center.x;
                    let dy = arc.center.y - center.y;
                    let d2 = dx * dx + dy * dy;
                    prop_assert!((d2 - dec!(84.5)).abs() <= eps, "{}", d2);
                    prop_assert_eq!(arc.end_angle - arc.start_angle, dec!(90));
                }
                Primitive::Line(line) => {
                    let dx = line.end.x - line.start.x;
                    let dy = line.end.y - line.start.y;
                    let len2 = dx * dx + dy * dy;
                    prop_assert!((len2 - dec!(169)).abs() <= eps, "{}", len2);
                }
            }
        }
    }
}
