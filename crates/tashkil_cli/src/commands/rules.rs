//! Rules command implementation

use miette::Result;
use tashkil_core::{REMOVE_LOOSE_DIACRITICS, RuleId};

pub fn run_rules() -> Result<()> {
    println!(
        "{:<28} {:<8} {:<8} {}",
        "Rule", "Default", "Fixable", "Description"
    );
    for rule in RuleId::ALL {
        println!(
            "{:<28} {:<8} {:<8} {}",
            rule.name(),
            rule.default_severity().as_str(),
            if rule.is_fixable() { "yes" } else { "no" },
            rule.description()
        );
    }
    println!();
    println!(
        "Set \"{}\": false to report loose diacritics without fixing them.",
        REMOVE_LOOSE_DIACRITICS
    );
    Ok(())
}
