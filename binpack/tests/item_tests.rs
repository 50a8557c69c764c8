#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use float_cmp::approx_eq;
    use itertools::Itertools;
    use rand::prelude::SmallRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    use binpack::PackError;
    use binpack::entities::{Item, Packer3D, PickStrategy};
    use binpack::geometry::Transformation;
    use binpack::geometry::geo_enums::Orientation;
    use binpack::geometry::geo_traits::CollidesWith;
    use binpack::geometry::primitives::{Cuboid, Point};
    use binpack::schematic::schematic_pick;

    fn single_item(w: f64, h: f64, d: f64) -> anyhow::Result<Item<&'static str>> {
        let mut packer = Packer3D::new();
        let id = packer.add_item("item", w, h, d, None)?;
        let item = packer.item(id).ok_or(anyhow!("{id:?} missing"))?;
        Ok(item.clone())
    }

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            approx_eq!(f64, actual.x(), expected.x(), epsilon = 1e-9)
                && approx_eq!(f64, actual.y(), expected.y(), epsilon = 1e-9)
                && approx_eq!(f64, actual.z(), expected.z(), epsilon = 1e-9),
            "{actual} != {expected}"
        );
    }

    #[test_case(Orientation::Whd, (2.0, 3.0, 5.0))]
    #[test_case(Orientation::Hwd, (3.0, 2.0, 5.0))]
    #[test_case(Orientation::Hdw, (3.0, 5.0, 2.0))]
    #[test_case(Orientation::Dhw, (5.0, 3.0, 2.0))]
    #[test_case(Orientation::Dwh, (5.0, 2.0, 3.0))]
    #[test_case(Orientation::Wdh, (2.0, 5.0, 3.0))]
    fn orientation_permutes_dimensions(
        orientation: Orientation,
        expected: (f64, f64, f64),
    ) -> anyhow::Result<()> {
        let mut item = single_item(2.0, 3.0, 5.0)?;
        item.set_orientation(orientation);
        assert_eq!(item.dimensions(), expected);
        assert_eq!(item.volume(), 30.0);
        Ok(())
    }

    #[test]
    fn dimensions_are_a_permutation() -> anyhow::Result<()> {
        let mut item = single_item(7.0, 1.5, 4.0)?;
        for orientation in Orientation::ALL {
            item.set_orientation(orientation);
            let (w, h, d) = item.dimensions();
            let sorted = [w, h, d].into_iter().sorted_by(f64::total_cmp).collect_vec();
            assert_eq!(sorted, vec![1.5, 4.0, 7.0]);
            assert_eq!(item.volume(), 42.0);
        }
        assert_eq!(Orientation::ALL.iter().unique().count(), 6);
        Ok(())
    }

    #[test]
    fn bounding_box_follows_mutations() -> anyhow::Result<()> {
        let mut item = single_item(1.0, 2.0, 3.0)?;
        assert_eq!(item.bounding_box(), Cuboid::from_corner(Point(0.0, 0.0, 0.0), (1.0, 2.0, 3.0)));

        item.set_position(Point(1.0, 1.0, 1.0));
        assert_eq!(item.bounding_box().max_corner(), Point(2.0, 3.0, 4.0));
        // repeated reads hit the cache
        assert_eq!(item.bounding_box(), item.bounding_box());

        item.set_orientation(Orientation::Dwh);
        let fresh = Cuboid::from_corner(item.position(), item.dimensions());
        assert_eq!(item.bounding_box(), fresh);
        assert_eq!(item.bounding_box().max_corner(), Point(4.0, 2.0, 3.0));
        Ok(())
    }

    #[test]
    fn copies_keep_their_own_geometry() -> anyhow::Result<()> {
        let original = single_item(1.0, 2.0, 3.0)?;
        let mut copy = original.clone();
        copy.set_orientation(Orientation::Hwd);
        copy.set_position(Point(5.0, 0.0, 0.0));

        assert_eq!(original.orientation(), Orientation::Whd);
        assert_eq!(original.position(), Point(0.0, 0.0, 0.0));
        assert!(copy.shares_payload_with(&original));
        Ok(())
    }

    #[test]
    fn first_fitting_orientation_wins() -> anyhow::Result<()> {
        let mut packer = Packer3D::<&str>::new();
        packer.add_bin("flat", 2.0, 1.0, 3.0, None)?;
        let id = packer.add_item("bar", 1.0, 3.0, 2.0, None)?;

        let mut rng = SmallRng::seed_from_u64(0);
        packer.pack(PickStrategy::BiggerFirst, &mut rng)?;

        // the first four orientations stick out of the bin
        let item = packer.item(id).ok_or(anyhow!("{id:?} missing"))?;
        assert_eq!(item.orientation(), Orientation::Dwh);
        assert_eq!(item.dimensions(), (2.0, 1.0, 3.0));
        Ok(())
    }

    #[test]
    fn translation_for_original_orientation() -> anyhow::Result<()> {
        let mut item = single_item(2.0, 3.0, 4.0)?;
        item.set_position(Point(1.0, 2.0, 3.0));
        let t = item.transformation()?;

        assert_eq!(t, Transformation::from_translation(Point(1.0, 2.0, 3.0)));
        assert_point_eq(t.transform_point(Point(0.0, 0.0, 0.0)), Point(1.0, 2.0, 3.0));
        assert_point_eq(t.transform_point(Point(2.0, 3.0, 4.0)), Point(3.0, 5.0, 7.0));
        Ok(())
    }

    #[test]
    fn rotation_for_swapped_orientation() -> anyhow::Result<()> {
        let mut item = single_item(2.0, 3.0, 1.0)?;
        item.set_orientation(Orientation::Hwd);
        item.set_position(Point(1.0, 0.0, 0.0));
        let t = item.transformation()?;

        // the modelled footprint [0, 2] x [0, 3] lands on the bounding box [1, 4] x [0, 2]
        assert_point_eq(t.transform_point(Point(2.0, 0.0, 0.0)), Point(4.0, 2.0, 0.0));
        assert_point_eq(t.transform_point(Point(0.0, 3.0, 0.0)), Point(1.0, 0.0, 0.0));
        assert_point_eq(t.transform_point(Point(2.0, 3.0, 1.0)), Point(1.0, 2.0, 1.0));
        let bbox = item.bounding_box();
        assert_eq!((bbox.x_min, bbox.x_max, bbox.y_min, bbox.y_max), (1.0, 4.0, 0.0, 2.0));
        Ok(())
    }

    #[test_case(Orientation::Hdw)]
    #[test_case(Orientation::Dhw)]
    #[test_case(Orientation::Dwh)]
    #[test_case(Orientation::Wdh)]
    fn transformation_not_supported(orientation: Orientation) -> anyhow::Result<()> {
        let mut item = single_item(2.0, 3.0, 1.0)?;
        item.set_orientation(orientation);
        assert_eq!(
            item.transformation(),
            Err(PackError::UnsupportedOrientation(orientation))
        );
        Ok(())
    }

    #[test]
    fn transformations_compose() {
        let t = Transformation::from_z_rotation(std::f64::consts::PI)
            .then(&Transformation::from_translation(Point(1.0, 1.0, 0.0)));
        assert_point_eq(t.transform_point(Point(1.0, 0.0, 0.0)), Point(0.0, 1.0, 0.0));
        assert_eq!(Transformation::default(), Transformation::identity());
        assert_ne!(t, Transformation::identity());
        assert_eq!(t.matrix()[3], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test_case(Point(2.0, 0.0, 0.0), false; "touching face")]
    #[test_case(Point(2.0, 2.0, 2.0), false; "touching corner")]
    #[test_case(Point(1.9, 0.0, 0.0), true; "overlap")]
    #[test_case(Point(-1.0, -1.0, -1.0), true; "overlap from below")]
    #[test_case(Point(0.0, 0.0, 5.0), false; "apart")]
    fn cuboid_collisions(corner: Point, collides: bool) {
        let a = Cuboid::from_corner(Point(0.0, 0.0, 0.0), (2.0, 2.0, 2.0));
        let b = Cuboid::from_corner(corner, (2.0, 2.0, 2.0));
        assert_eq!(a.collides_with(&b), collides);
        assert_eq!(b.collides_with(&a), collides);
    }

    #[test]
    fn pick_yields_a_permutation() -> anyhow::Result<()> {
        let mut rng = SmallRng::seed_from_u64(0);
        for n in [1, 2, 5, 17, 64] {
            let items = (0..n).collect_vec();
            let schema = (0..n).map(|_| rng.random::<f64>()).collect_vec();
            let picked = schematic_pick(items.clone(), schema)?;
            assert_eq!(picked.len(), n);
            assert_eq!(picked.into_iter().sorted().collect_vec(), items);
        }
        Ok(())
    }

    #[test]
    fn every_permutation_is_reachable() -> anyhow::Result<()> {
        let mut items = vec!['a', 'b', 'c'];
        let mut rng = SmallRng::seed_from_u64(0);
        items.shuffle(&mut rng);
        // pick values addressing the remaining position of each element directly
        let schema = items
            .iter()
            .scan(vec!['a', 'b', 'c'], |remaining, c| {
                let index = remaining.iter().position(|r| r == c)?;
                let value = match remaining.len() {
                    1 => 0.0,
                    n => index as f64 / (n - 1) as f64,
                };
                remaining.remove(index);
                Some(value)
            })
            .collect_vec();
        assert_eq!(schematic_pick(['a', 'b', 'c'], schema)?, items);
        Ok(())
    }
}
