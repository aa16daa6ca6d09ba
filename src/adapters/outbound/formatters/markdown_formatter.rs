use super::group_thousands;
use crate::application::read_models::{
    EdgeView, HideoutReadModel, ItemLine, LevelLine, SelectionView, StationView,
};
use crate::hideout::domain::{EdgeStyle, NodeStyle, SelectionKind};
use crate::ports::outbound::HideoutFormatter;
use crate::shared::Result;

const ITEM_TABLE_HEADER: &str = "| Item | Amount |\n";
const ITEM_TABLE_SEPARATOR: &str = "|------|-------:|\n";
const LEVEL_TABLE_SEPARATOR: &str = "|------|------:|\n";
const STATION_TABLE_HEADER: &str = "| Station | Name | Level | Requires | Highlight |\n";
const STATION_TABLE_SEPARATOR: &str = "|---------|------|------:|----------|-----------|\n";

/// MarkdownFormatter adapter producing a shopping list document
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_selection(&self, output: &mut String, selection: &SelectionView) {
        output.push_str("# Hideout Upgrade Plan\n\n");

        if selection.kind == SelectionKind::Empty {
            output.push_str("*No stations selected*\n\n");
            return;
        }

        match &selection.anchor {
            Some(anchor) => output.push_str(&format!(
                "Selection is **{}**, anchored at `{}`.\n\n",
                selection.kind,
                Self::escape_cell(anchor)
            )),
            None => output.push_str(&format!("Selection is **{}**.\n\n", selection.kind)),
        }

        output.push_str("## Stations\n\n");
        for station in &selection.stations {
            output.push_str(&format!(
                "- `{}` {} (level {})\n",
                station.id, station.name, station.lvl
            ));
        }
        output.push('\n');
    }

    fn render_items(&self, output: &mut String, items: &[ItemLine]) {
        output.push_str("### Items\n\n");
        output.push_str(ITEM_TABLE_HEADER);
        output.push_str(ITEM_TABLE_SEPARATOR);
        for line in items {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_cell(&line.item),
                group_thousands(line.amount)
            ));
        }
        output.push('\n');
    }

    fn render_levels(&self, output: &mut String, title: &str, column: &str, lines: &[LevelLine]) {
        output.push_str(&format!("### {}\n\n", title));
        output.push_str(&format!("| {} | Level |\n", column));
        output.push_str(LEVEL_TABLE_SEPARATOR);
        for line in lines {
            output.push_str(&format!("| {} | {} |\n", Self::escape_cell(&line.name), line.lvl));
        }
        output.push('\n');
    }

    fn render_stations(&self, output: &mut String, stations: &[StationView]) {
        output.push_str("## Hideout Graph\n\n");
        output.push_str(STATION_TABLE_HEADER);
        output.push_str(STATION_TABLE_SEPARATOR);
        for station in stations {
            let highlight = match station.style {
                NodeStyle::Normal => "",
                NodeStyle::Highlighted => "✔",
                NodeStyle::Faded => "faded",
            };
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} |\n",
                station.id,
                Self::escape_cell(&station.name),
                station.lvl,
                station.requires.join(", "),
                highlight
            ));
        }
        output.push('\n');
    }

    fn render_edges(&self, output: &mut String, edges: &[EdgeView]) {
        output.push_str("## Prerequisite Lines\n\n");
        for edge in edges {
            let style = match edge.style {
                EdgeStyle::Plain => "plain",
                EdgeStyle::Active => "active",
                EdgeStyle::Leading => "leading",
                EdgeStyle::Dimmed => "dimmed",
            };
            output.push_str(&format!("- `{}` → `{}` ({})\n", edge.from, edge.to, style));
        }
        output.push('\n');
    }
}

impl HideoutFormatter for MarkdownFormatter {
    fn format(&self, model: &HideoutReadModel) -> Result<String> {
        let mut output = String::new();
        self.render_selection(&mut output, &model.selection);

        if let Some(summary) = &model.summary {
            output.push_str("## Requirements\n\n");
            if summary.is_empty() {
                output.push_str("*Nothing required*\n\n");
            }
            if !summary.items.is_empty() {
                self.render_items(&mut output, &summary.items);
            }
            if !summary.skills.is_empty() {
                self.render_levels(&mut output, "Skills", "Skill", &summary.skills);
            }
            if !summary.traders.is_empty() {
                self.render_levels(&mut output, "Traders", "Trader", &summary.traders);
            }
        }

        if let Some(stations) = &model.stations {
            self.render_stations(&mut output, stations);
        }
        if let Some(edges) = &model.edges {
            self.render_edges(&mut output, edges);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{StationRefView, SummaryView};

    fn model() -> HideoutReadModel {
        HideoutReadModel {
            selection: SelectionView {
                kind: SelectionKind::Pinned,
                anchor: Some("generator-1".to_string()),
                stations: vec![
                    StationRefView {
                        id: "generator-1".to_string(),
                        name: "Generator".to_string(),
                        lvl: 1,
                    },
                    StationRefView {
                        id: "vents-1".to_string(),
                        name: "Vents".to_string(),
                        lvl: 1,
                    },
                ],
            },
            summary: Some(SummaryView {
                items: vec![ItemLine {
                    item: "Roubles".to_string(),
                    amount: 65000,
                }],
                skills: vec![],
                traders: vec![LevelLine {
                    name: "Mechanic".to_string(),
                    lvl: 1,
                }],
            }),
            stations: None,
            edges: None,
        }
    }

    #[test]
    fn test_markdown_sections() {
        let output = MarkdownFormatter::new().format(&model()).unwrap();
        assert!(output.starts_with("# Hideout Upgrade Plan\n\n"));
        assert!(output.contains("Selection is **pinned**, anchored at `generator-1`."));
        assert!(output.contains("- `vents-1` Vents (level 1)\n"));
        assert!(output.contains("| Roubles | 65,000 |\n"));
        assert!(output.contains("| Trader | Level |\n| Mechanic | 1 |"));
        assert!(!output.contains("### Skills"));
    }

    #[test]
    fn test_markdown_empty_selection() {
        let model = HideoutReadModel {
            selection: SelectionView {
                kind: SelectionKind::Empty,
                anchor: None,
                stations: vec![],
            },
            summary: None,
            stations: None,
            edges: None,
        };
        let output = MarkdownFormatter::default().format(&model).unwrap();
        assert!(output.contains("*No stations selected*"));
        assert!(!output.contains("## Requirements"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(MarkdownFormatter::escape_cell("a|b\nc"), "a\\|b c");
    }

    #[test]
    fn test_graph_sections() {
        let mut model = model();
        model.stations = Some(vec![StationView {
            id: "generator-1".to_string(),
            name: "Generator".to_string(),
            lvl: 1,
            style: NodeStyle::Highlighted,
            requires: vec!["vents-1".to_string()],
        }]);
        model.edges = Some(vec![EdgeView {
            from: "vents-1".to_string(),
            to: "generator-1".to_string(),
            style: EdgeStyle::Active,
        }]);

        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("| `generator-1` | Generator | 1 | vents-1 | ✔ |"));
        assert!(output.contains("- `vents-1` → `generator-1` (active)"));
    }
}
