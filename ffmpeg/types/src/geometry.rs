/*!
    Frame geometry and downscale planning.
*/

use std::fmt;

/**
    Width and height of a frame, in pixels.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /**
        Create new dimensions.
    */
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /**
        Returns the longer of the two sides.
    */
    pub const fn longest_side(self) -> u32 {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }

    /**
        Returns true if both sides are at most `max_dimension`.
    */
    pub const fn fits_within(self, max_dimension: u32) -> bool {
        self.width <= max_dimension && self.height <= max_dimension
    }

    /**
        Plan the geometry of a downscale bounded by `max_dimension`.

        Dimensions that already fit are returned unchanged; images are never
        upscaled. Otherwise both sides are multiplied by the single factor
        `max_dimension / longest_side` and floored, so the aspect ratio is
        preserved and the longest side lands exactly on the bound. Neither
        side is ever planned below one pixel.

        `max_dimension` must be at least 1.

        The math is exact integer arithmetic, so a side can come out one
        pixel larger than a floating-point scale factor would give, where
        the float product lands just below a whole number.
    */
    pub fn fit_within(self, max_dimension: u32) -> Self {
        if self.fits_within(max_dimension) {
            return self;
        }

        // Integer math keeps floor(side * max / longest) exact.
        let longest = u64::from(self.longest_side());
        let max = u64::from(max_dimension);
        let scale = |side: u32| -> u32 {
            let scaled = u64::from(side) * max / longest;
            (scaled as u32).max(1)
        };

        Self {
            width: scale(self.width),
            height: scale(self.height),
        }
    }

    /**
        Calculate the aspect ratio (width / height).
    */
    pub fn aspect_ratio(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fit_within_halves_landscape() {
        let planned = Dimensions::new(4000, 2000).fit_within(1000);
        assert_eq!(planned, Dimensions::new(1000, 500));
    }

    #[test]
    fn fit_within_portrait() {
        let planned = Dimensions::new(1200, 3000).fit_within(1568);
        assert_eq!(planned, Dimensions::new(627, 1568));
    }

    #[test]
    fn fit_within_never_upscales() {
        let dims = Dimensions::new(100, 100);
        assert_eq!(dims.fit_within(1000), dims);
        assert_eq!(dims.fit_within(100), dims);
    }

    #[test]
    fn fit_within_exactly_one_side_over() {
        let planned = Dimensions::new(1001, 10).fit_within(1000);
        assert_eq!(planned, Dimensions::new(1000, 9));
    }

    #[test]
    fn fit_within_floors_degenerate_side_to_one() {
        let planned = Dimensions::new(100_000, 1).fit_within(10);
        assert_eq!(planned, Dimensions::new(10, 1));

        let planned = Dimensions::new(3, 5000).fit_within(1);
        assert_eq!(planned, Dimensions::new(1, 1));
    }

    #[test]
    fn dimensions_display() {
        assert_eq!(Dimensions::new(640, 480).to_string(), "640x480");
    }

    proptest! {
        #[test]
        fn planned_sides_are_bounded_and_nonzero(
            w in 1u32..20_000,
            h in 1u32..20_000,
            max in 1u32..4_096,
        ) {
            let planned = Dimensions::new(w, h).fit_within(max);
            prop_assert!(planned.width >= 1 && planned.height >= 1);
            prop_assert!(planned.longest_side() <= max);
            prop_assert!(planned.width <= w && planned.height <= h);
        }

        #[test]
        fn planned_geometry_keeps_aspect_ratio(
            w in 100u32..20_000,
            h in 100u32..20_000,
            max in 100u32..4_096,
        ) {
            let source = Dimensions::new(w, h);
            let planned = source.fit_within(max);
            if planned != source {
                prop_assert_eq!(planned.longest_side(), max);
                // Flooring moves the short side by less than one pixel.
                let short = f64::from(source.width.min(source.height));
                let expected = short * f64::from(max) / f64::from(source.longest_side());
                let actual = f64::from(planned.width.min(planned.height));
                prop_assert!((expected - actual).abs() < 1.0);
            }
        }
    }
}
