//! Rendering tests against the plotters bitmap backend

use gearscope_viz::{ChartRenderer, ChartSpec, PlottersRenderer, SeriesColor, SeriesSpec};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn wave(len: usize, amplitude: f64) -> Vec<Option<f64>> {
    (0..len)
        .map(|i| Some(amplitude * (i as f64 / 8.0).sin()))
        .collect()
}

fn comparison(reference: Vec<Option<f64>>, uploaded: Vec<Option<f64>>) -> ChartSpec {
    ChartSpec::new("Sensor 1 – vibration [mm] along x-axis")
        .x_label("Time (index)")
        .y_label("Vibration (mm)")
        .with_series(SeriesSpec::new("No Fault", SeriesColor::Blue, reference))
        .with_series(SeriesSpec::new("root_crack gear fault", SeriesColor::Red, uploaded))
}

#[test]
fn test_render_two_series_as_png() {
    let renderer = PlottersRenderer::new(320, 240).unwrap();
    let image = renderer.render(&comparison(wave(200, 1.0), wave(200, 3.0))).unwrap();

    assert_eq!(image.mime_type, "image/png");
    assert_eq!((image.width, image.height), (320, 240));
    assert_eq!(&image.bytes[..8], &PNG_SIGNATURE);
    assert!(image.to_data_uri().starts_with("data:image/png;base64,iVBORw0KGgo"));
}

#[test]
fn test_render_empty_series() {
    let renderer = PlottersRenderer::default();
    let image = renderer.render(&comparison(vec![], vec![])).unwrap();
    assert_eq!(&image.bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_render_series_with_warm_up_gap() {
    let mut smoothed = wave(50, 2.0);
    for value in smoothed.iter_mut().take(9) {
        *value = None;
    }
    let renderer = PlottersRenderer::default();
    assert!(renderer.render(&comparison(smoothed.clone(), smoothed)).is_ok());
}

#[test]
fn test_repeated_renders_are_independent() {
    let renderer = PlottersRenderer::new(200, 150).unwrap();
    let spec = comparison(wave(64, 1.0), wave(64, 1.5));
    let first = renderer.render(&spec).unwrap();
    for _ in 0..20 {
        let again = renderer.render(&spec).unwrap();
        assert_eq!(again.bytes, first.bytes);
    }
}
