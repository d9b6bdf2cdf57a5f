use specgen_core::domain::{
    BroadeningError, ExecutionMode, SpectrumInput, SpectrumTag, TransitionSet,
};
use specgen_core::modules::{
    BroadeningConfig, BroadeningPlan, broaden_spectrum, parse_spectrum_source,
};
use specgen_core::numerics::{IntensityScale, LineShape, build_grid, gaussian, lorentzian};

fn single_transition(tag: SpectrumTag, energy: f64, intensity: f64) -> SpectrumInput {
    SpectrumInput::new(
        tag,
        TransitionSet::from_columns(vec![energy], vec![intensity]).expect("transition"),
    )
}

fn riemann_sum(kernel: impl Fn(f64) -> f64, start: f64, end: f64, samples: usize) -> f64 {
    let step = (end - start) / samples as f64;
    (0..=samples)
        .map(|index| kernel(start + step * index as f64) * step)
        .sum()
}

#[test]
fn discretized_kernels_integrate_to_unity() {
    for sigma in [0.01, 0.2, 1.0, 7.5] {
        let integral = riemann_sum(
            |x| gaussian(sigma, x, 3.0).expect("gaussian"),
            3.0 - 10.0 * sigma,
            3.0 + 10.0 * sigma,
            50_000,
        );
        assert!(
            (integral - 1.0).abs() <= 1.0e-3,
            "sigma={sigma} integral={integral:.15e}"
        );
    }

    for gamma in [0.01, 0.2, 1.0, 7.5] {
        let integral = riemann_sum(
            |x| lorentzian(gamma, x, -2.0).expect("lorentzian"),
            -2.0 - 2_000.0 * gamma,
            -2.0 + 2_000.0 * gamma,
            2_000_000,
        );
        assert!(
            (integral - 1.0).abs() <= 1.0e-3,
            "gamma={gamma} integral={integral:.15e}"
        );
    }
}

#[test]
fn single_gaussian_transition_peaks_at_its_energy() {
    let input = single_transition(SpectrumTag::Abs, 10.0, 2.0);
    let config = BroadeningConfig::new(LineShape::gaussian(0.25).expect("kernel"));
    let spectrum = broaden_spectrum(&input, config).expect("broadened");

    let (peak_index, peak) = spectrum
        .points
        .iter()
        .enumerate()
        .max_by(|(_, left), (_, right)| left.intensity.total_cmp(&right.intensity))
        .expect("non-empty curve");
    let nearest_index = spectrum
        .points
        .iter()
        .enumerate()
        .min_by(|(_, left), (_, right)| {
            (left.energy - 10.0).abs().total_cmp(&(right.energy - 10.0).abs())
        })
        .map(|(index, _)| index)
        .expect("non-empty curve");

    assert_eq!(peak_index, nearest_index);
    let expected = 2.0 * gaussian(0.25, 10.0, 10.0).expect("gaussian")
        / IntensityScale::Absorption.factor(10.0);
    assert!(
        (peak.intensity - expected).abs() <= 1.0e-6 * expected,
        "expected={expected:.15e} actual={:.15e}",
        peak.intensity
    );
}

#[test]
fn grid_contains_quadrature_plus_one_points() {
    for num_points in [1, 10, 999, 1000, 2048] {
        let grid = build_grid(&[1.5, 2.5, 2.0], 0.1, 5, num_points).expect("grid");
        assert_eq!(grid.points().count(), num_points + 1);

        let input = SpectrumInput::new(
            SpectrumTag::Ir,
            TransitionSet::from_columns(vec![1.5, 2.5, 2.0], vec![1.0, 1.0, 1.0])
                .expect("transitions"),
        );
        let config = BroadeningConfig::new(LineShape::lorentzian(0.1).expect("kernel"))
            .with_num_points(num_points);
        let spectrum = broaden_spectrum(&input, config).expect("broadened");
        assert_eq!(spectrum.points.len(), num_points + 1);
    }
}

#[test]
fn absorption_gaussian_check_integral_is_unity() {
    let input = single_transition(SpectrumTag::Abs, 10.0, 1.0);
    let config = BroadeningConfig::new(LineShape::gaussian(1.0).expect("kernel"))
        .with_num_points(1000)
        .with_padding_factor(5);

    let check = broaden_spectrum(&input, config)
        .expect("broadened")
        .check_integral()
        .expect("check integral");

    assert!((check - 1.0).abs() <= 0.01, "check={check:.15e}");
}

#[test]
fn dichroism_gaussian_check_integral_is_unity() {
    let input = single_transition(SpectrumTag::Ecd, 10.0, 1.0);
    let config = BroadeningConfig::new(LineShape::gaussian(1.0).expect("kernel"));

    let check = broaden_spectrum(&input, config)
        .expect("broadened")
        .check_integral()
        .expect("check integral");

    assert!((check - 1.0).abs() <= 0.01, "check={check:.15e}");
}

#[test]
fn truncated_lorentzian_tails_are_reported_not_corrected() {
    let input = single_transition(SpectrumTag::Abs, 10.0, 1.0);
    let config = BroadeningConfig::new(LineShape::lorentzian(1.0).expect("kernel"));

    let check = broaden_spectrum(&input, config)
        .expect("broadened")
        .check_integral()
        .expect("check integral");

    // five widths of padding keep only (2/pi) * atan(10) of a Lorentzian
    assert!(check > 0.90 && check < 0.97, "check={check:.15e}");
}

#[test]
fn emission_is_rejected_before_any_grid_work() {
    for tag in [SpectrumTag::Em, SpectrumTag::Cpl] {
        let input = single_transition(tag, 2.0, 1.0);
        for kernel in [
            LineShape::gaussian(0.1).expect("gaussian"),
            LineShape::lorentzian(0.1).expect("lorentzian"),
        ] {
            // a zero quadrature would fail later; the emission check has to win
            let config = BroadeningConfig::new(kernel).with_num_points(0);
            let error = BroadeningPlan::new(&input, config).expect_err("emission");
            assert!(
                matches!(error, BroadeningError::UnsupportedSpectrumType { .. }),
                "tag={tag} got {error:?}"
            );
            assert!(matches!(
                broaden_spectrum(&input, BroadeningConfig::new(kernel)),
                Err(BroadeningError::UnsupportedSpectrumType { .. })
            ));
        }
    }
}

#[test]
fn zero_intensity_sum_fails_only_at_normalization() {
    let input = parse_spectrum_source("#2 cd\n5.0 1.0\n5.4 -1.0\n").expect("parse");
    let config = BroadeningConfig::new(LineShape::lorentzian(0.2).expect("kernel"));

    let spectrum = broaden_spectrum(&input, config).expect("curve is computable");
    assert_eq!(spectrum.points.len(), 1001);
    assert_eq!(
        spectrum.check_integral(),
        Err(BroadeningError::DivisionByZero {
            quantity: "total transition intensity",
        })
    );
}

#[test]
fn identical_inputs_produce_identical_outputs() {
    let source = "#4 vcd\n1020.0 12.5\n1100.0 -4.0\n1100.0 2.0\n1250.0 7.75\n";
    let kernel = LineShape::lorentzian(8.0).expect("kernel");

    for execution in [
        ExecutionMode::Serial,
        ExecutionMode::Partitioned { partitions: 6 },
    ] {
        let config = BroadeningConfig::new(kernel).with_execution(execution);
        let first_input = parse_spectrum_source(source).expect("parse");
        let second_input = parse_spectrum_source(source).expect("parse");

        let first = broaden_spectrum(&first_input, config).expect("first run");
        let second = broaden_spectrum(&second_input, config).expect("second run");
        assert_eq!(first.points, second.points);

        let first_check = first.check_integral().expect("first check");
        let second_check = second.check_integral().expect("second check");
        assert_eq!(first_check.to_bits(), second_check.to_bits());
    }
}
