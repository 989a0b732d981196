//! Tests for rectangle finding and the extraction fallback ladder

#[cfg(test)]
mod tests {
    use pixsvg::algorithm::extraction::{Extraction, extract_at, find_rectangle};
    use pixsvg::algorithm::shape::Shape;
    use pixsvg::spatial::{ClaimedMask, Pixel, PixelGrid};

    const W: Pixel = Pixel::opaque(255, 255, 255);
    const R: Pixel = Pixel::opaque(255, 0, 0);
    const K: Pixel = Pixel::opaque(0, 0, 0);

    fn grid(rows: &[&str]) -> PixelGrid {
        let rows = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'W' => W,
                        'R' => R,
                        _ => K,
                    })
                    .collect()
            })
            .collect();
        PixelGrid::from_rows(rows).unwrap()
    }

    fn mask_for(g: &PixelGrid) -> ClaimedMask {
        ClaimedMask::new(g.width(), g.height())
    }

    // Tests a solid block is found as one rectangle
    // Verified by stopping height growth after the first row
    #[test]
    fn test_find_rectangle_solid_block() {
        let g = grid(&["WWR", "WWR", "RRR"]);
        let rect = find_rectangle(&g, &mask_for(&g), 0, 0, W);

        assert_eq!(rect, Some(Shape::new(0, 0, 2, 2, W)));
    }

    // Tests width is fixed by the seed row even when a narrower rectangle is taller
    // Verified by shrinking width to the narrowest following row
    #[test]
    fn test_find_rectangle_fixes_width_first() {
        let g = grid(&["WW", "W.", "W."]);
        let rect = find_rectangle(&g, &mask_for(&g), 0, 0, W);

        assert_eq!(rect, Some(Shape::new(0, 0, 2, 1, W)));
    }

    // Tests wider rows below do not widen the rectangle
    // Verified by measuring following rows up to the grid width
    #[test]
    fn test_find_rectangle_caps_following_rows() {
        let g = grid(&["WW.", "WWW", "WWW"]);
        let rect = find_rectangle(&g, &mask_for(&g), 0, 0, W);

        assert_eq!(rect, Some(Shape::new(0, 0, 2, 3, W)));
    }

    // Tests claimed cells in a following row stop height growth
    // Verified by ignoring the mask during height growth
    #[test]
    fn test_find_rectangle_stops_at_claimed_row() {
        let g = grid(&["WW", "WW", "WW"]);
        let mut mask = mask_for(&g);
        mask.claim(1, 2);

        let rect = find_rectangle(&g, &mask, 0, 0, W);
        assert_eq!(rect, Some(Shape::new(0, 0, 2, 2, W)));
    }

    // Tests no rectangle is reported for a claimed or mismatched seed
    // Verified by returning a 1x1 shape for a zero-width run
    #[test]
    fn test_find_rectangle_none_for_bad_seed() {
        let g = grid(&["WR"]);
        let mut mask = mask_for(&g);

        assert_eq!(find_rectangle(&g, &mask, 0, 0, R), None);
        mask.claim(0, 0);
        assert_eq!(find_rectangle(&g, &mask, 0, 0, W), None);
    }

    // Tests the ladder takes the rectangle rule for an unclaimed seed, even a 1x1 one
    // Verified by preferring the vertical run rule
    #[test]
    fn test_extract_at_prefers_rectangle() {
        let g = grid(&["WR", "WR"]);
        let mask = mask_for(&g);

        let column = extract_at(&g, &mask, 0, 0);
        assert_eq!(column, Some(Extraction::Rectangle(Shape::new(0, 0, 1, 2, W))));

        let g = grid(&["WR"]);
        let single = extract_at(&g, &mask_for(&g), 0, 0);
        assert_eq!(single, Some(Extraction::Rectangle(Shape::new(0, 0, 1, 1, W))));
    }

    // Tests claimed or out-of-range seeds produce nothing
    // Verified by skipping the claimed check
    #[test]
    fn test_extract_at_rejects_claimed_and_outside() {
        let g = grid(&["WW"]);
        let mut mask = mask_for(&g);
        mask.claim(1, 0);

        assert_eq!(extract_at(&g, &mask, 1, 0), None);
        assert_eq!(extract_at(&g, &mask, 5, 0), None);
    }

    // Tests every variant exposes its shape and a readable kind
    // Verified by returning a default shape from the accessor
    #[test]
    fn test_extraction_accessors() {
        let shape = Shape::new(1, 2, 3, 4, R);
        let variants = [
            (Extraction::Rectangle(shape), "rectangle"),
            (Extraction::VerticalRun(shape), "vertical run"),
            (Extraction::HorizontalRun(shape), "horizontal run"),
            (Extraction::SinglePixel(shape), "single pixel"),
        ];

        for (extraction, kind) in variants {
            assert_eq!(extraction.shape(), shape);
            assert_eq!(extraction.kind(), kind);
        }
    }
}
