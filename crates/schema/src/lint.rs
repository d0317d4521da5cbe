//! Advisory lint rules for validated dialogs
//!
//! A dialog that passes schema validation can still be questionable: two
//! buttons sharing a name, a tab panel with no tabs, several primary
//! buttons. The [`Linter`] runs a set of [`LintRule`]s and collects their
//! findings as warnings; it never rejects a dialog.

use crate::body::Body;
use crate::button::DialogButton;
use crate::dialog::Dialog;
use dialogspec_core::Named;
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

// ============================================================================
// LintReport
// ============================================================================

/// Findings of a lint run
#[derive(Debug, Clone, Default)]
pub struct LintReport {
    pub warnings: Vec<LintWarning>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, warning: LintWarning) {
        self.warnings.push(warning);
    }

    /// Merge another report into this one
    pub fn merge(&mut self, other: LintReport) {
        self.warnings.extend(other.warnings);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn has(&self, code: LintCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

// ============================================================================
// LintWarning
// ============================================================================

/// A single advisory finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub code: LintCode,
    pub message: String,
    /// Path to the element (e.g., "buttons[2]")
    pub path: Option<String>,
}

impl LintWarning {
    pub fn new(code: LintCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "[{}] Warning: {}", path, self.message)
        } else {
            write!(f, "Warning: {}", self.message)
        }
    }
}

/// Warning codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LintCode {
    EmptyTitle,
    NoButtons,
    DuplicateButtonName,
    MultiplePrimaryButtons,
    MenuWithoutTooltip,
    EmptyPanel,
    NoTabs,
    DuplicateTabName,
    EmptyTab,
}

// ============================================================================
// LintRule Trait
// ============================================================================

/// The parts of a dialog that lint rules look at
#[derive(Debug, Clone, Copy)]
pub struct DialogOutline<'a> {
    pub title: &'a str,
    pub body: &'a Body,
    pub buttons: &'a [DialogButton],
}

impl<'a, T> From<&'a Dialog<T>> for DialogOutline<'a> {
    fn from(dialog: &'a Dialog<T>) -> Self {
        Self {
            title: &dialog.title,
            body: &dialog.body,
            buttons: &dialog.buttons,
        }
    }
}

pub trait LintRule {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn check(&self, dialog: DialogOutline<'_>) -> LintReport;
}

// ============================================================================
// Linter
// ============================================================================

/// Runs a set of lint rules over a dialog
#[derive(Default)]
pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
}

impl Linter {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Linter with every built-in rule
    pub fn with_default_rules() -> Self {
        let mut linter = Self::new();
        linter.add_rule(Box::new(TitleRule));
        linter.add_rule(Box::new(ButtonsRule));
        linter.add_rule(Box::new(BodyRule));
        linter
    }

    pub fn add_rule(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn lint<T>(&self, dialog: &Dialog<T>) -> LintReport {
        let outline = DialogOutline::from(dialog);
        let mut report = LintReport::new();

        for rule in &self.rules {
            report.merge(rule.check(outline));
        }

        for warning in &report.warnings {
            warn!(title = %dialog.title, code = ?warning.code, "{}", warning);
        }
        report
    }
}

// ============================================================================
// Built-in Rules
// ============================================================================

/// Rule: the title should not be blank
pub struct TitleRule;

impl LintRule for TitleRule {
    fn name(&self) -> &'static str {
        "title"
    }

    fn description(&self) -> &'static str {
        "Warns when the dialog title is blank"
    }

    fn check(&self, dialog: DialogOutline<'_>) -> LintReport {
        let mut report = LintReport::new();
        if dialog.title.trim().is_empty() {
            report.add(
                LintWarning::new(LintCode::EmptyTitle, "Dialog title is blank").with_path("title"),
            );
        }
        report
    }
}

/// Rule: buttons should be distinguishable and unambiguous
pub struct ButtonsRule;

impl LintRule for ButtonsRule {
    fn name(&self) -> &'static str {
        "buttons"
    }

    fn description(&self) -> &'static str {
        "Checks button names, primary buttons, and menu tooltips"
    }

    fn check(&self, dialog: DialogOutline<'_>) -> LintReport {
        let mut report = LintReport::new();

        if dialog.buttons.is_empty() {
            report.add(LintWarning::new(
                LintCode::NoButtons,
                "Dialog has no buttons; it can only be closed with Esc",
            ));
            return report;
        }

        let mut seen_names: HashSet<&str> = HashSet::new();
        for (index, button) in dialog.buttons.iter().enumerate() {
            let path = format!("buttons[{}]", index);

            if !seen_names.insert(button.name()) {
                report.add(
                    LintWarning::new(
                        LintCode::DuplicateButtonName,
                        format!("Duplicate button name: '{}'", button.name()),
                    )
                    .with_path(&path),
                );
            }

            if let Some(menu) = button.menu() {
                if menu.tooltip.is_none() {
                    report.add(
                        LintWarning::new(
                            LintCode::MenuWithoutTooltip,
                            format!("Menu button '{}' has no tooltip", button.text),
                        )
                        .with_path(&path),
                    );
                }
            }
        }

        let primary = dialog.buttons.iter().filter(|b| b.primary).count();
        if primary > 1 {
            report.add(
                LintWarning::new(
                    LintCode::MultiplePrimaryButtons,
                    format!("{} buttons are marked primary", primary),
                )
                .with_path("buttons"),
            );
        }

        report
    }
}

/// Rule: the body should contain something to show
pub struct BodyRule;

impl LintRule for BodyRule {
    fn name(&self) -> &'static str {
        "body"
    }

    fn description(&self) -> &'static str {
        "Checks for empty panels and duplicate or empty tabs"
    }

    fn check(&self, dialog: DialogOutline<'_>) -> LintReport {
        let mut report = LintReport::new();

        match dialog.body {
            Body::Panel(panel) => {
                if panel.items.is_empty() {
                    report.add(
                        LintWarning::new(LintCode::EmptyPanel, "Panel has no components")
                            .with_path("body.items"),
                    );
                }
            }
            Body::TabPanel(panel) => {
                if panel.tabs.is_empty() {
                    report.add(
                        LintWarning::new(LintCode::NoTabs, "Tab panel has no tabs")
                            .with_path("body.tabs"),
                    );
                }

                let mut seen_names: HashSet<&str> = HashSet::new();
                for (index, tab) in panel.tabs.iter().enumerate() {
                    let path = format!("body.tabs[{}]", index);

                    if !seen_names.insert(tab.name()) {
                        report.add(
                            LintWarning::new(
                                LintCode::DuplicateTabName,
                                format!("Duplicate tab name: '{}'", tab.name()),
                            )
                            .with_path(&path),
                        );
                    }

                    if tab.items.is_empty() {
                        report.add(
                            LintWarning::new(
                                LintCode::EmptyTab,
                                format!("Tab '{}' has no components", tab.title),
                            )
                            .with_path(&path),
                        );
                    }
                }
            }
        }

        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::validate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn lint(value: serde_json::Value) -> LintReport {
        let dialog: Dialog = validate(&value.into()).unwrap();
        Linter::with_default_rules().lint(&dialog)
    }

    #[test]
    fn test_clean_dialog() {
        let report = lint(json!({
            "title": "Insert link",
            "body": {"type": "panel", "items": [{"type": "input", "name": "url"}]},
            "buttons": [
                {"type": "cancel", "name": "cancel", "text": "Cancel"},
                {"type": "submit", "name": "save", "text": "Save", "primary": true}
            ]
        }));
        assert!(report.is_clean(), "{:?}", report.warnings);
    }

    #[test]
    fn test_minimal_dialog_warnings() {
        let report = lint(json!({
            "title": " ",
            "body": {"type": "panel", "items": []},
            "buttons": []
        }));

        let codes: Vec<LintCode> = report.warnings.iter().map(|w| w.code).collect();
        assert_eq!(codes, vec![LintCode::EmptyTitle, LintCode::NoButtons, LintCode::EmptyPanel]);
    }

    #[test]
    fn test_button_warnings() {
        let report = lint(json!({
            "title": "T",
            "body": {"type": "panel", "items": [{"type": "input"}]},
            "buttons": [
                {"type": "submit", "name": "ok", "text": "OK", "primary": true},
                {"type": "custom", "name": "ok", "text": "Also OK", "primary": true},
                {"type": "menu", "text": "More"}
            ]
        }));

        assert!(report.has(LintCode::DuplicateButtonName));
        assert!(report.has(LintCode::MultiplePrimaryButtons));
        assert!(report.has(LintCode::MenuWithoutTooltip));

        let duplicate = report
            .warnings
            .iter()
            .find(|w| w.code == LintCode::DuplicateButtonName)
            .unwrap();
        assert_eq!(duplicate.to_string(), "[buttons[1]] Warning: Duplicate button name: 'ok'");
    }

    #[test]
    fn test_tab_warnings() {
        let report = lint(json!({
            "title": "T",
            "body": {"type": "tabpanel", "tabs": [
                {"name": "a", "title": "A", "items": [{"type": "input"}]},
                {"name": "a", "title": "B", "items": []}
            ]},
            "buttons": [{"type": "submit", "text": "OK"}]
        }));

        assert!(report.has(LintCode::DuplicateTabName));
        assert!(report.has(LintCode::EmptyTab));
        assert!(!report.has(LintCode::NoTabs));
    }

    #[test]
    fn test_empty_tab_panel() {
        let report = lint(json!({
            "title": "T",
            "body": {"type": "tabpanel", "tabs": []},
            "buttons": [{"type": "submit", "text": "OK"}]
        }));
        assert!(report.has(LintCode::NoTabs));
    }

    #[test]
    fn test_rule_names() {
        assert_eq!(Linter::with_default_rules().rule_names(), vec!["title", "buttons", "body"]);
        assert!(Linter::new().rule_names().is_empty());
    }
}
