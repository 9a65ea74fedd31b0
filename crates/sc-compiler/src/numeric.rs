/// Canonical text for offsets and steps: integers without a decimal point,
/// everything else rounded to two decimals with trailing zeros dropped.
pub fn render_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value.fract() == 0.0 {
        return normalize_zero(format!("{}", value));
    }

    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    normalize_zero(trimmed.to_string())
}

fn normalize_zero(text: String) -> String {
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod numeric_tests {
    use super::*;

    #[test]
    fn renders_canonical_forms() {
        assert_eq!(render_number(3.0), "3");
        assert_eq!(render_number(1.5), "1.5");
        assert_eq!(render_number(2.0), "2");
        assert_eq!(render_number(0.333), "0.33");
        assert_eq!(render_number(-0.25), "-0.25");
        assert_eq!(render_number(1.999), "2");
        assert_eq!(render_number(-12.0), "-12");
        assert_eq!(render_number(0.1), "0.1");
    }

    #[test]
    fn negative_zero_and_non_finite_render_as_zero() {
        assert_eq!(render_number(-0.0), "0");
        assert_eq!(render_number(-0.001), "0");
        assert_eq!(render_number(f64::NAN), "0");
        assert_eq!(render_number(f64::INFINITY), "0");
    }

    #[test]
    fn render_is_idempotent_through_parse() {
        let samples = [
            0.0, 1.0, -1.0, 0.5, 0.005, 0.015, 2.675, -3.14159, 100.125, 1e-9, 123456.789,
            -0.004, 7.0 / 3.0,
        ];
        for value in samples {
            let once = render_number(value);
            let reparsed = once.parse::<f64>().expect("rendered number should parse");
            assert_eq!(render_number(reparsed), once, "value {}", value);
        }
    }
}
