use std::fmt;
use std::sync::LazyLock;

use adrenal_core::{Growth, Referral};

use crate::facts::Facts;

/// How a fired rule phrases its finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Fixed(&'static str),
    AbsoluteWashout,
    RelativeWashout,
}

impl Template {
    /// Render against `facts`. `None` when the value the template needs is
    /// undefined for this observation.
    pub fn render(&self, facts: &Facts) -> Option<String> {
        match self {
            Template::Fixed(text) => Some((*text).to_string()),
            Template::AbsoluteWashout => facts
                .absolute_washout()
                .map(|pct| format!("Absolute washout: {pct:.2}%")),
            Template::RelativeWashout => facts
                .relative_washout()
                .map(|pct| format!("Relative washout: {pct:.2}%")),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Fixed(text) => f.write_str(text),
            Template::AbsoluteWashout => f.write_str("Absolute washout: X%"),
            Template::RelativeWashout => f.write_str("Relative washout: X%"),
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub importance: u32,
    pub template: Template,
    pub predicate: fn(&Facts) -> bool,
}

impl Rule {
    pub fn applies(&self, facts: &Facts) -> bool {
        (self.predicate)(facts)
    }
}

const fn fixed(
    id: &'static str,
    text: &'static str,
    importance: u32,
    predicate: fn(&Facts) -> bool,
) -> Rule {
    Rule {
        id,
        importance,
        template: Template::Fixed(text),
        predicate,
    }
}

const HYPERVASCULAR_HU: f64 = 120.0;
const HEMATOMA_MIN_HU: f64 = 20.0;
const HEMATOMA_MAX_SPREAD: f64 = 6.0;
const RELATIVE_WASHOUT_CUTOFF: f64 = 58.0;

fn indeterminate_hu(facts: &Facts) -> bool {
    facts
        .hu_non_contrast()
        .is_some_and(|hu| (10.0..=20.0).contains(&hu))
}

/// The canonical rule table, in evaluation order. Order matters: it decides
/// which of several equally important findings becomes the conclusion.
pub fn rule_table() -> &'static [Rule] {
    static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
        vec![
            // Referral
            fixed("referral_cancer_workup", "Referral risk: 43%", 1, |f| {
                f.referral == Referral::CancerWorkup
            }),
            fixed("referral_low_risk", "Referral risk: 3%", 1, |f| {
                matches!(
                    f.referral,
                    Referral::HormonalImbalance | Referral::Incidentaloma
                )
            }),
            // Age
            fixed("age_under_18", "Age risk: 62%", 1, |f| {
                f.age.is_some_and(|a| a < 18)
            }),
            fixed("age_18_39", "Age risk: 4%", 1, |f| {
                f.age.is_some_and(|a| (18..=39).contains(&a))
            }),
            fixed("age_40_65", "Age risk: 6%", 1, |f| {
                f.age.is_some_and(|a| (40..=65).contains(&a))
            }),
            fixed("age_over_65", "Age risk: 11%", 1, |f| {
                f.age.is_some_and(|a| a > 65)
            }),
            // Size
            fixed("size_under_1cm", "Very probably benign", 4, |f| {
                f.size().is_some_and(|s| s < 1.0)
            }),
            fixed("size_1_4cm", "Size risk: 2%", 2, |f| {
                f.size().is_some_and(|s| (1.0..4.0).contains(&s))
            }),
            fixed("size_4_6cm", "Size risk: 6%", 6, |f| {
                f.size().is_some_and(|s| (4.0..=6.0).contains(&s))
            }),
            fixed(
                "size_over_6cm",
                "Size risk: 25% carcinoma / 18% metastasis",
                9,
                |f| f.size().is_some_and(|s| s > 6.0),
            ),
            // Growth
            fixed("growth_slow", "Benign — slow growth", 5, |f| {
                f.growth() == Growth::SlowIncrease
            }),
            fixed("growth_fast", "Individual planning / MDT", 5, |f| {
                f.growth() == Growth::FastIncrease
            }),
            fixed("growth_in_doubt", "Repeat CT in 6–12 months", 5, |f| {
                f.growth() == Growth::InDoubt
            }),
            // Non-contrast attenuation
            fixed("hu_under_10", "Very probably benign (HU<10)", 9, |f| {
                f.hu_non_contrast().is_some_and(|hu| hu < 10.0)
            }),
            fixed("hu_indeterminate_small", "Thorax CT follow-up", 3, |f| {
                indeterminate_hu(f) && f.size().is_some_and(|s| s < 4.0)
            }),
            fixed("hu_indeterminate_large", "Individual planning", 3, |f| {
                indeterminate_hu(f) && f.size().is_some_and(|s| s >= 4.0)
            }),
            fixed("hu_over_20", "Check p-metanephrines", 8, |f| {
                f.hu_non_contrast().is_some_and(|hu| hu > 20.0)
            }),
            fixed("heterogeneous", "Check p-metanephrines", 8, |f| {
                f.ct_has(|ct| ct.heterogeneous)
            }),
            // Morphology
            fixed("bilateral", "Consider bilateral differentials", 7, |f| {
                f.ct_has(|ct| ct.bilateral)
            }),
            fixed("macroscopic_fat", "Probably myelolipoma", 10, |f| {
                f.ct_has(|ct| ct.macroscopic_fat)
            }),
            // Contrast
            Rule {
                id: "absolute_washout",
                importance: 1,
                template: Template::AbsoluteWashout,
                predicate: |f| f.absolute_washout().is_some(),
            },
            Rule {
                id: "relative_washout",
                importance: 1,
                template: Template::RelativeWashout,
                predicate: |f| f.relative_washout().is_some(),
            },
            fixed("hypervascular", "Hypervascular tumor suspected", 10, |f| {
                f.washout.is_some_and(|w| {
                    w.hu_venous > HYPERVASCULAR_HU || w.hu_delayed > HYPERVASCULAR_HU
                })
            }),
            fixed("hematoma", "Probable hematoma", 11, |f| {
                f.washout.is_some_and(|w| {
                    w.hu_non_contrast > HEMATOMA_MIN_HU
                        && w.hu_venous > HEMATOMA_MIN_HU
                        && w.hu_delayed > HEMATOMA_MIN_HU
                        && w.spread() <= HEMATOMA_MAX_SPREAD
                })
            }),
            fixed("low_washout", "Low washout — individual planning", 10, |f| {
                f.relative_washout()
                    .is_some_and(|rw| rw <= RELATIVE_WASHOUT_CUTOFF)
            }),
            fixed("benign_washout", "Washout suggests benign", 10, |f| {
                f.relative_washout()
                    .is_some_and(|rw| rw > RELATIVE_WASHOUT_CUTOFF)
                    && f.size().is_some_and(|s| s < 4.0)
            }),
        ]
    });
    &RULES
}
