use rasterkit::{fill_polygon, FillOutcome, Pixfmt, Polygon, RenderingBase};
use rasterkit::{Rgb8, Rgba8, Source};

fn white_base(w: usize, h: usize) -> RenderingBase<Rgb8> {
    let pix = Pixfmt::<Rgb8>::new(w, h);
    let mut ren_base = RenderingBase::new(pix);
    ren_base.clear(Rgba8::white());
    ren_base
}

const ORANGE: Rgba8 = Rgba8 { r: 255, g: 127, b: 0, a: 255 };

#[test]
fn t00_rectangle_exact_interior() {
    let mut ren_base = white_base(10, 10);
    let rect = Polygon::from_xy(&[(2., 3.), (8., 3.), (8., 7.), (2., 7.)], ORANGE);
    let report = fill_polygon(&rect, &mut ren_base);

    assert_eq!(report.outcome, FillOutcome::Filled);
    assert_eq!(report.odd_scanlines, 0);
    // x in [2,8) and y in [3,7); right and bottom edges excluded
    assert_eq!(report.pixels_filled, 24);
    for y in 0..10 {
        for x in 0..10 {
            let inside = (2..8).contains(&x) && (3..7).contains(&y);
            let want = if inside { ORANGE } else { Rgba8::white() };
            assert_eq!(ren_base.pixf.get((x, y)), want, "pixel ({},{})", x, y);
        }
    }
}

#[test]
fn t00_fractional_rectangle() {
    let mut ren_base = white_base(10, 10);
    let rect = Polygon::from_xy(&[(1.5, 1.5), (6.5, 1.5), (6.5, 4.5), (1.5, 4.5)], ORANGE);
    let report = fill_polygon(&rect, &mut ren_base);

    // spans run floor(1.5)=1 to floor(6.5)=6 exclusive, on scanlines 2..=4
    assert_eq!(report.pixels_filled, 15);
    assert_eq!(ren_base.pixf.get((1, 2)), ORANGE);
    assert_eq!(ren_base.pixf.get((5, 4)), ORANGE);
    assert_eq!(ren_base.pixf.get((0, 2)), Rgba8::white());
    assert_eq!(ren_base.pixf.get((6, 2)), Rgba8::white());
    assert_eq!(ren_base.pixf.get((1, 1)), Rgba8::white());
    assert_eq!(ren_base.pixf.get((1, 5)), Rgba8::white());
}

#[test]
fn t00_diamond_span_symmetry() {
    let mut ren_base = white_base(11, 11);
    let diamond = Polygon::from_xy(&[(5., 0.), (10., 5.), (5., 10.), (0., 5.)], ORANGE);
    let report = fill_polygon(&diamond, &mut ren_base);

    // rows delimited by the +-1 slopes: 0,2,4,6,8,10,8,6,4,2,0 pixels
    assert_eq!(report.outcome, FillOutcome::Filled);
    assert_eq!(report.pixels_filled, 50);
    assert_eq!(report.odd_scanlines, 0);

    // the widest row spans [0,10)
    assert_eq!(ren_base.pixf.get((0, 5)), ORANGE);
    assert_eq!(ren_base.pixf.get((9, 5)), ORANGE);
    assert_eq!(ren_base.pixf.get((10, 5)), Rgba8::white());
    // the apex span [5,5) is empty
    assert_eq!(ren_base.pixf.get((5, 0)), Rgba8::white());
    assert_eq!(ren_base.pixf.get((4, 1)), ORANGE);
}

#[test]
fn t00_horizontal_edges_contribute_nothing() {
    // same trapezoid twice; the second with its top edge split in two
    // collinear horizontal pieces, which must not change the fill
    let mut base_a = white_base(20, 12);
    let trap = Polygon::from_xy(&[(4., 2.), (15., 2.), (18., 9.), (1., 9.)], ORANGE);
    let report_a = fill_polygon(&trap, &mut base_a);

    let mut base_b = white_base(20, 12);
    let split = Polygon::from_xy(
        &[(4., 2.), (9., 2.), (15., 2.), (18., 9.), (1., 9.)],
        ORANGE,
    );
    let report_b = fill_polygon(&split, &mut base_b);

    assert_eq!(report_a.pixels_filled, report_b.pixels_filled);
    assert_eq!(report_a.odd_scanlines, 0);
    assert_eq!(report_b.odd_scanlines, 0);
    for y in 0..12 {
        for x in 0..20 {
            assert_eq!(
                base_a.pixf.get((x, y)),
                base_b.pixf.get((x, y)),
                "pixel ({},{})",
                x,
                y
            );
        }
    }
}

#[test]
fn t00_star_polygon() {
    let mut ren_base = white_base(200, 200);
    let star = Polygon::from_xy(
        &[
            (100., 10.),
            (120., 72.),
            (186., 72.),
            (136., 112.),
            (153., 173.),
            (100., 138.),
            (47., 173.),
            (64., 112.),
            (14., 72.),
            (80., 72.),
        ],
        ORANGE,
    );
    let report = fill_polygon(&star, &mut ren_base);

    assert_eq!(report.outcome, FillOutcome::Filled);
    assert_eq!(report.odd_scanlines, 0);
    assert!(report.pixels_filled > 5000);
    assert!(report.pixels_filled < 200 * 200);

    let pix = &ren_base.pixf;
    // the wide row joining the two horizontal arms spans [14,186)
    assert_eq!(pix.get((14, 72)), ORANGE);
    assert_eq!(pix.get((100, 72)), ORANGE);
    assert_eq!(pix.get((185, 72)), ORANGE);
    assert_eq!(pix.get((13, 72)), Rgba8::white());
    assert_eq!(pix.get((186, 72)), Rgba8::white());

    // just below the top vertex the spike is one pixel wide
    assert_eq!(pix.get((99, 11)), ORANGE);
    assert_eq!(pix.get((100, 11)), Rgba8::white());
    // the apex span itself is empty
    assert_eq!(pix.get((100, 10)), Rgba8::white());

    // below the center dip the fill splits into the two legs
    assert_eq!(pix.get((60, 140)), ORANGE);
    assert_eq!(pix.get((100, 140)), Rgba8::white());
    assert_eq!(pix.get((140, 140)), ORANGE);

    // leg tips end one scanline above their lowest vertices
    assert_eq!(pix.get((47, 172)), ORANGE);
    assert_eq!(pix.get((47, 173)), Rgba8::white());
    assert_eq!(pix.get((153, 173)), Rgba8::white());

    // corners untouched
    assert_eq!(pix.get((0, 0)), Rgba8::white());
    assert_eq!(pix.get((199, 199)), Rgba8::white());
}

#[test]
fn t00_polygon_partly_off_image() {
    // triangle poking in from the upper-left; writes are clipped
    let mut ren_base = white_base(8, 8);
    let tri = Polygon::from_xy(&[(-4., -4.), (6., -4.), (-4., 6.)], ORANGE);
    let report = fill_polygon(&tri, &mut ren_base);

    assert_eq!(report.outcome, FillOutcome::Filled);
    // the hypotenuse runs from (6,-4) to (-4,6): x + y = 2, and only the
    // corner pixels with x + y <= 1 survive the exclusive span ends
    assert_eq!(report.pixels_filled, 3);
    assert_eq!(ren_base.pixf.get((0, 0)), ORANGE);
    assert_eq!(ren_base.pixf.get((1, 0)), ORANGE);
    assert_eq!(ren_base.pixf.get((0, 1)), ORANGE);
    assert_eq!(ren_base.pixf.get((1, 1)), Rgba8::white());
    assert_eq!(ren_base.pixf.get((2, 1)), Rgba8::white());
    assert_eq!(ren_base.pixf.get((7, 7)), Rgba8::white());
}
