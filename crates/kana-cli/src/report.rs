use std::fmt::Write as _;

use serde::Serialize;
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use kana_core::{validate_name, NameScript};

/// Outcome for a single name.
#[derive(Debug, Clone, Serialize)]
pub struct NameReport {
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<NameScript>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NameReport {
    pub fn check(name: impl Into<String>) -> Self {
        let name = name.into();
        let result = validate_name(&name);
        debug!(name = %name, ok = result.is_ok(), "checked name");
        match result {
            Ok(script) => Self {
                name,
                valid: true,
                script: Some(script),
                error: None,
            },
            Err(e) => Self {
                name,
                valid: false,
                script: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub entries: Vec<NameReport>,
    pub accepted: usize,
    pub rejected: usize,
}

impl Report {
    pub fn check_all<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut report = Self::default();
        for name in names {
            report.push(NameReport::check(name));
        }
        report
    }

    pub fn push(&mut self, entry: NameReport) {
        if entry.valid {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
        self.entries.push(entry);
    }

    pub fn all_accepted(&self) -> bool {
        self.rejected == 0
    }

    /// One line per name with the name column padded to display width,
    /// followed by a summary line.
    pub fn render_text(&self, show_accepted: bool) -> String {
        let visible: Vec<&NameReport> = self
            .entries
            .iter()
            .filter(|e| show_accepted || !e.valid)
            .collect();
        let col = visible
            .iter()
            .map(|e| e.name.width())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for e in visible {
            let label = e.name.as_str();
            let pad = col - label.width();
            let verdict = match (&e.script, &e.error) {
                (Some(script), _) => format!("OK ({})", script.as_str()),
                (None, Some(err)) => format!("NG: {err}"),
                (None, None) => "NG".to_string(),
            };
            let _ = writeln!(out, "{label}{:pad$}  {verdict}", "");
        }
        let _ = writeln!(
            out,
            "{} accepted, {} rejected",
            self.accepted, self.rejected
        );
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_verdicts() {
        let report = Report::check_all(["あいう", "Tanaka", "", "カタかな"]);
        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, 2);
        assert!(!report.all_accepted());
        assert_eq!(report.entries[0].script, Some(NameScript::Hiragana));
        assert_eq!(report.entries[3].script, Some(NameScript::Mixed));
        assert_eq!(
            report.entries[1].error.as_deref(),
            Some("invalid character 'T' (U+0054) at index 0")
        );
        assert_eq!(report.entries[2].error.as_deref(), Some("name is empty"));
    }

    #[test]
    fn render_text_pads_by_display_width() {
        let report = Report::check_all(["あいう", "abc"]);
        let text = report.render_text(true);
        let lines: Vec<&str> = text.lines().collect();
        // "あいう" is 6 columns wide, "abc" is 3.
        assert_eq!(lines[0], "あいう  OK (hiragana)");
        assert_eq!(
            lines[1],
            "abc     NG: invalid character 'a' (U+0061) at index 0"
        );
        assert_eq!(lines[2], "1 accepted, 1 rejected");
    }

    #[test]
    fn render_text_hides_accepted() {
        let report = Report::check_all(["アイウ", "あ "]);
        let text = report.render_text(false);
        assert!(!text.contains("アイウ"));
        assert!(text.starts_with("あ   NG: invalid character ' ' (U+0020) at index 1"));
        assert!(text.ends_with("1 accepted, 1 rejected\n"));
    }

    #[test]
    fn render_json_shape() {
        let report = Report::check_all(["ひらガナー", "たなか太郎"]);
        let json: serde_json::Value =
            serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(json["accepted"], 1);
        assert_eq!(json["rejected"], 1);
        assert_eq!(json["entries"][0]["valid"], true);
        assert_eq!(json["entries"][0]["script"], "mixed");
        assert!(json["entries"][0].get("error").is_none());
        assert_eq!(json["entries"][1]["valid"], false);
        assert!(json["entries"][1].get("script").is_none());
    }

    #[test]
    fn empty_name_leaves_label_blank() {
        let report = Report::check_all(["", "(empty)"]);
        let text = report.render_text(true);
        let lines: Vec<&str> = text.lines().collect();
        // Padded to the 7-column width of "(empty)".
        assert_eq!(lines[0], "         NG: name is empty");
        assert!(lines[1].starts_with("(empty)  NG: invalid character '('"));
    }

    #[test]
    fn empty_report_is_all_accepted() {
        let report = Report::check_all(Vec::<String>::new());
        assert!(report.all_accepted());
        assert_eq!(report.render_text(true), "0 accepted, 0 rejected\n");
    }
}
