use super::*;

fn plot() -> PlotBox {
    PlotBox::inset(120.0, 70.0, 10.0)
}

#[test]
fn inset_applies_padding_on_both_sides() {
    let plot = plot();
    assert_eq!(plot.width, 100.0);
    assert_eq!(plot.height, 50.0);
    assert_eq!(plot.right(), 110.0);
    assert_eq!(plot.bottom(), 60.0);
}

#[test]
fn inset_never_collapses_to_zero() {
    let plot = PlotBox::inset(10.0, 10.0, 20.0);
    assert_eq!(plot.width, 1.0);
    assert_eq!(plot.height, 1.0);
}

#[test]
fn y_for_risk_inverts_axis() {
    let plot = plot();
    assert_eq!(plot.y_for_risk(0), 60.0);
    assert_eq!(plot.y_for_risk(100), 10.0);
    assert_eq!(plot.y_for_risk(50), 35.0);
    assert_eq!(plot.y_for_risk(400), 10.0);
}

#[test]
fn fraction_at_and_x_at_round_trip() {
    let plot = plot();
    assert_eq!(plot.fraction_at(plot.x_at(0.25)), 0.25);
    assert_eq!(plot.fraction_at(0.0), 0.0);
    assert_eq!(plot.fraction_at(500.0), 1.0);
}

#[test]
fn series_points_span_plot_width() {
    let plot = plot();
    let points = series_points(&[0, 50, 100], &plot);
    assert_eq!(points, vec![(10.0, 60.0), (60.0, 35.0), (110.0, 10.0)]);
}

#[test]
fn single_point_series_is_centered() {
    let points = series_points(&[40], &plot());
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].0, 60.0);
}
