// Wear condition bands
//
// Five contiguous half-open bands over [0, 1). Lookup is first-match on
// min <= wear < max; out-of-domain values fall back to the first band.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WearCondition {
    pub min: f64,
    pub max: f64,
    pub name: &'static str,
    /// Indicator color class for the condition chip.
    pub color: &'static str,
}

pub const WEAR_CONDITIONS: [WearCondition; 5] = [
    WearCondition {
        min: 0.0,
        max: 0.07,
        name: "Factory New",
        color: "bg-green-500",
    },
    WearCondition {
        min: 0.07,
        max: 0.15,
        name: "Minimal Wear",
        color: "bg-blue-500",
    },
    WearCondition {
        min: 0.15,
        max: 0.38,
        name: "Field-Tested",
        color: "bg-yellow-500",
    },
    WearCondition {
        min: 0.38,
        max: 0.45,
        name: "Well-Worn",
        color: "bg-orange-500",
    },
    WearCondition {
        min: 0.45,
        max: 1.0,
        name: "Battle-Scarred",
        color: "bg-red-500",
    },
];

pub fn classify_wear(wear: f64) -> &'static WearCondition {
    WEAR_CONDITIONS
        .iter()
        .find(|condition| wear >= condition.min && wear < condition.max)
        .unwrap_or(&WEAR_CONDITIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_partition_without_gap_or_overlap() {
        assert_eq!(WEAR_CONDITIONS[0].min, 0.0);
        assert_eq!(WEAR_CONDITIONS[WEAR_CONDITIONS.len() - 1].max, 1.0);
        for pair in WEAR_CONDITIONS.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
            assert!(pair[0].min < pair[0].max);
        }
    }

    #[test]
    fn test_every_legal_wear_hits_exactly_one_band() {
        let mut wear = 0.0;
        while wear < 1.0 {
            let matches = WEAR_CONDITIONS
                .iter()
                .filter(|c| wear >= c.min && wear < c.max)
                .count();
            assert_eq!(matches, 1, "wear {} matched {} bands", wear, matches);
            wear += 0.001;
        }
    }

    #[test]
    fn test_band_boundaries_are_lower_inclusive() {
        assert_eq!(classify_wear(0.07).name, "Minimal Wear");
        assert_eq!(classify_wear(0.069999).name, "Factory New");
        assert_eq!(classify_wear(0.0).name, "Factory New");
        assert_eq!(classify_wear(0.15).name, "Field-Tested");
        assert_eq!(classify_wear(0.38).name, "Well-Worn");
        assert_eq!(classify_wear(0.45).name, "Battle-Scarred");
        assert_eq!(classify_wear(0.99).name, "Battle-Scarred");
    }

    #[test]
    fn test_out_of_domain_wear_falls_back_to_first_band() {
        assert_eq!(classify_wear(-0.5).name, "Factory New");
        assert_eq!(classify_wear(1.0).name, "Factory New");
        assert_eq!(classify_wear(42.0).name, "Factory New");
    }
}
