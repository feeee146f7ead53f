//! Categorical labels for numeric scores.

pub fn cultural_fit_narrative(index: u32) -> &'static str {
    match index {
        i if i >= 75 => "High",
        i if i >= 50 => "Medium",
        _ => "Low",
    }
}

/// Blends fit, culture and experience into a hiring-outcome label.
///
/// `combined = fit × 0.6 + culture × 0.4`, plus up to 20 points for experience
/// (full credit at five years).
pub fn success_prediction(overall_fit: u32, cultural_fit: u32, years_experience: f64) -> &'static str {
    let combined = overall_fit as f64 * 0.6 + cultural_fit as f64 * 0.4;
    let experience_factor = (years_experience.max(0.0) / 5.0).min(1.0) * 20.0;
    match combined + experience_factor {
        s if s >= 85.0 => "Highly Likely",
        s if s >= 70.0 => "Likely",
        s if s >= 50.0 => "Possible",
        _ => "Unlikely",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cultural_fit_boundaries() {
        assert_eq!(cultural_fit_narrative(78), "High");
        assert_eq!(cultural_fit_narrative(75), "High");
        assert_eq!(cultural_fit_narrative(74), "Medium");
        assert_eq!(cultural_fit_narrative(50), "Medium");
        assert_eq!(cultural_fit_narrative(49), "Low");
    }

    #[test]
    fn test_success_prediction_bands() {
        // 80 × 0.6 + 70 × 0.4 = 76, + 20 → 96
        assert_eq!(success_prediction(80, 70, 10.0), "Highly Likely");
        // 60 × 0.6 + 50 × 0.4 = 56, + 2.5 × 4 = 10 → 66
        assert_eq!(success_prediction(60, 50, 2.5), "Possible");
        // 75 × 0.6 + 70 × 0.4 = 73, no experience
        assert_eq!(success_prediction(75, 70, 0.0), "Likely");
        assert_eq!(success_prediction(20, 50, 0.0), "Unlikely");
    }

    #[test]
    fn test_experience_credit_saturates_at_five_years() {
        assert_eq!(
            success_prediction(50, 50, 5.0),
            success_prediction(50, 50, 40.0)
        );
    }
}
