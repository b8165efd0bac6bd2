//! Terminal rendering of showcase projections

use showcase_core::{Catalog, Field, Phase, RenderProjection};

/// Typing cursor
pub const CURSOR: char = '▌';

/// How projections are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Text card
    Text,
    /// One JSON object per line
    Json,
}

/// Renders projections as a text card or JSON lines
#[derive(Clone, Debug)]
pub struct Renderer {
    mode: OutputMode,
    width: usize,
    labels: Vec<String>,
}

impl Renderer {
    /// Create a renderer for `catalog`
    pub fn new(catalog: &Catalog, mode: OutputMode, width: usize) -> Self {
        Self {
            mode,
            width: width.max(20),
            labels: catalog.iter().map(|item| item.short_label.clone()).collect(),
        }
    }

    /// Render one projection
    pub fn render(&self, projection: &RenderProjection) -> String {
        match self.mode {
            OutputMode::Json => serde_json::to_string(projection)
                .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}")),
            OutputMode::Text => self.render_card(projection),
        }
    }

    fn render_card(&self, projection: &RenderProjection) -> String {
        let mut lines = vec![self.tabs(projection.active_index)];
        let rule = "─".repeat(self.width);
        lines.push(rule.clone());

        let texts = &projection.display_text;
        let with_cursor = |field: Field| {
            let text = texts.get(field);
            if projection.show_cursor && projection.cursor_field == Some(field) {
                format!("{text}{CURSOR}")
            } else {
                text.to_string()
            }
        };

        lines.extend(self.wrap("", &with_cursor(Field::Title)));
        if projection.show_content_block {
            for (label, field) in [
                ("Problem: ", Field::Problem),
                ("Solution: ", Field::Solution),
                ("Impact: ", Field::Impact),
            ] {
                let text = with_cursor(field);
                if !text.is_empty() {
                    lines.push(String::new());
                    lines.extend(self.wrap(label, &text));
                }
            }
        }

        if projection.show_call_to_action {
            lines.push(String::new());
            lines.push("→ Book a call to automate this".to_string());
        }

        lines.push(rule);
        lines.push(format!("[{}]", phase_label(projection.phase)));
        lines.join("\n")
    }

    fn tabs(&self, active: usize) -> String {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                if i == active {
                    format!("[{label}]")
                } else {
                    format!(" {label} ")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn wrap(&self, label: &str, text: &str) -> Vec<String> {
        let indent = " ".repeat(label.chars().count());
        let options = textwrap::Options::new(self.width)
            .initial_indent(label)
            .subsequent_indent(&indent)
            .wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
        textwrap::wrap(text, options)
            .into_iter()
            .map(std::borrow::Cow::into_owned)
            .collect()
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "ready",
        Phase::Exiting => "closing",
        Phase::Swapping => "switching",
        Phase::Entering => "typing",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use showcase_core::FieldTexts;

    fn projection() -> RenderProjection {
        RenderProjection {
            display_text: FieldTexts {
                title: "Instant Onboarding".to_string(),
                problem: "New clients wait days".to_string(),
                solution: String::new(),
                impact: String::new(),
            },
            show_cursor: true,
            cursor_field: Some(Field::Problem),
            show_content_block: true,
            show_call_to_action: false,
            active_index: 1,
            phase: Phase::Entering,
        }
    }

    #[test]
    fn test_cursor_follows_projected_field() {
        let renderer = Renderer::new(&Catalog::builtin(), OutputMode::Text, 40);
        let mut p = projection();
        p.display_text.problem = String::new();

        let card = renderer.render(&p);

        assert!(card.contains("Problem: ▌"));
        assert!(!card.contains("Instant Onboarding▌"));
    }

    #[test]
    fn test_text_card() {
        let renderer = Renderer::new(&Catalog::builtin(), OutputMode::Text, 40);
        let card = renderer.render(&projection());
        let lines: Vec<&str> = card.lines().collect();

        assert_eq!(lines[0], " Leads  [Onboard]  Support   Invoices ");
        assert_eq!(lines[2], "Instant Onboarding");
        assert!(card.contains("Problem: New clients wait days▌"));
        assert!(!card.contains("Solution:"));
        assert!(!card.contains("Book a call"));
        assert_eq!(lines.last(), Some(&"[typing]"));
    }

    #[test]
    fn test_idle_card_shows_call_to_action() {
        let renderer = Renderer::new(&Catalog::builtin(), OutputMode::Text, 40);
        let mut idle = projection();
        idle.phase = Phase::Idle;
        idle.show_cursor = false;
        idle.cursor_field = None;
        idle.show_call_to_action = true;

        let card = renderer.render(&idle);

        assert!(!card.contains(CURSOR));
        assert!(card.contains("Book a call"));
    }

    #[test]
    fn test_long_text_wraps_with_hanging_indent() {
        let renderer = Renderer::new(&Catalog::builtin(), OutputMode::Text, 24);
        let mut p = projection();
        p.show_cursor = false;
        p.cursor_field = None;
        p.display_text.problem = "one two three four five six seven".to_string();

        let card = renderer.render(&p);

        assert!(card.contains("Problem: one two three\n         four five six"));
    }

    #[test]
    fn test_json_line() {
        let renderer = Renderer::new(&Catalog::builtin(), OutputMode::Json, 80);
        let line = renderer.render(&projection());
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["phase"], "entering");
        assert_eq!(value["display_text"]["title"], "Instant Onboarding");
        assert!(!line.contains('\n'));
    }
}
