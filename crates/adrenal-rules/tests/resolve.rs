use adrenal_core::{Conclusion, Finding};
use adrenal_rules::{rank, resolve};

#[test]
fn empty_input_returns_sentinel() {
    let conclusion = resolve(&[]);
    assert_eq!(conclusion, Conclusion::none());
    assert_eq!(conclusion.importance, 0);
    assert!(conclusion.is_none());
}

#[test]
fn picks_maximum_importance() {
    let findings = vec![
        Finding::new("Referral risk: 43%", 1),
        Finding::new("Size risk: 6%", 6),
        Finding::new("Check p-metanephrines", 8),
        Finding::new("Consider bilateral differentials", 7),
    ];
    let conclusion = resolve(&findings);
    assert_eq!(conclusion.text, "Check p-metanephrines");
    assert_eq!(conclusion.importance, 8);
    assert!(!conclusion.is_none());
}

#[test]
fn ties_go_to_the_earliest_finding() {
    let findings = vec![
        Finding::new("Age risk: 6%", 1),
        Finding::new("Hypervascular tumor suspected", 10),
        Finding::new("Washout suggests benign", 10),
    ];
    assert_eq!(resolve(&findings).text, "Hypervascular tumor suspected");
}

#[test]
fn a_lone_low_importance_finding_is_still_concluded() {
    let findings = vec![Finding::new("Age risk: 4%", 1)];
    assert_eq!(resolve(&findings), Conclusion::from(findings[0].clone()));
}

#[test]
fn rank_is_stable_and_descending() {
    let findings = vec![
        Finding::new("a", 1),
        Finding::new("b", 5),
        Finding::new("c", 1),
        Finding::new("d", 5),
    ];
    let ranked: Vec<_> = rank(&findings).into_iter().map(|f| f.text).collect();
    assert_eq!(ranked, vec!["b", "d", "a", "c"]);
}
