use std::collections::HashSet;

use adrenal_rules::{rule_summaries, rule_table};

#[test]
fn rule_ids_are_unique() {
    let ids: HashSet<_> = rule_table().iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), rule_table().len());
}

#[test]
fn every_rule_has_positive_importance() {
    assert!(rule_table().iter().all(|r| r.importance >= 1));
}

#[test]
fn hematoma_outranks_everything() {
    let max = rule_table().iter().map(|r| r.importance).max().unwrap();
    let top: Vec<_> = rule_table()
        .iter()
        .filter(|r| r.importance == max)
        .map(|r| r.id)
        .collect();
    assert_eq!(top, vec!["hematoma"]);
}

#[test]
fn summaries_mirror_table_order() {
    let summaries = rule_summaries();
    assert_eq!(summaries.len(), rule_table().len());
    assert_eq!(summaries[0].id, "referral_cancer_workup");
    let relative = summaries
        .iter()
        .find(|s| s.id == "relative_washout")
        .unwrap();
    assert_eq!(relative.template, "Relative washout: X%");
}
