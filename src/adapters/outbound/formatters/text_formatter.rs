use super::group_thousands;
use crate::application::read_models::{
    EdgeView, HideoutReadModel, SelectionView, StationView, SummaryView,
};
use crate::hideout::domain::{EdgeStyle, NodeStyle, SelectionKind};
use crate::ports::outbound::HideoutFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter for terminal output
///
/// Highlighted stations are drawn bold green and faded ones dimmed, the
/// terminal counterpart of the graph's highlight styling. With `color`
/// off the output is plain text with markers only.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint_highlight(&self, text: &str) -> String {
        if self.color {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_faded(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_amount(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl TextFormatter {
    fn render_selection(&self, out: &mut String, selection: &SelectionView) -> std::fmt::Result {
        let heading = match (&selection.kind, &selection.anchor) {
            (SelectionKind::Empty, _) => "Selection: none".to_string(),
            (kind, Some(anchor)) => format!("Selection: {} ({})", kind, anchor),
            (kind, None) => format!("Selection: {}", kind),
        };
        writeln!(out, "{}", self.paint_heading(&heading))?;

        for station in &selection.stations {
            writeln!(
                out,
                "  {}  {} (level {})",
                self.paint_highlight(&station.id),
                station.name,
                station.lvl
            )?;
        }
        Ok(())
    }

    fn render_summary(&self, out: &mut String, summary: &SummaryView) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "{}", self.paint_heading("Requirements"))?;
        if summary.is_empty() {
            writeln!(out, "  nothing required")?;
            return Ok(());
        }

        if !summary.items.is_empty() {
            writeln!(out, "  Items:")?;
            let amounts: Vec<String> = summary
                .items
                .iter()
                .map(|line| group_thousands(line.amount))
                .collect();
            let width = amounts.iter().map(String::len).max().unwrap_or(0);
            for (line, amount) in summary.items.iter().zip(&amounts) {
                let padded = format!("{:>width$}", amount, width = width);
                writeln!(out, "    {}  {}", self.paint_amount(&padded), line.item)?;
            }
        }

        for (title, lines) in [("Skills", &summary.skills), ("Traders", &summary.traders)] {
            if lines.is_empty() {
                continue;
            }
            writeln!(out, "  {}:", title)?;
            let width = lines.iter().map(|line| line.name.len()).max().unwrap_or(0);
            for line in lines {
                writeln!(out, "    {:<width$}  level {}", line.name, line.lvl, width = width)?;
            }
        }
        Ok(())
    }

    fn render_stations(&self, out: &mut String, stations: &[StationView]) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "{}", self.paint_heading("Stations"))?;
        for station in stations {
            let (marker, id) = match station.style {
                NodeStyle::Normal => ("-", station.id.clone()),
                NodeStyle::Highlighted => ("*", self.paint_highlight(&station.id)),
                NodeStyle::Faded => (" ", self.paint_faded(&station.id)),
            };
            write!(out, "  {} {}  {} (level {})", marker, id, station.name, station.lvl)?;
            if !station.requires.is_empty() {
                write!(out, "  <- {}", station.requires.join(", "))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    fn render_edges(&self, out: &mut String, edges: &[EdgeView]) -> std::fmt::Result {
        writeln!(out)?;
        writeln!(out, "{}", self.paint_heading("Prerequisite lines"))?;
        for edge in edges {
            let line = format!("{} -> {}", edge.from, edge.to);
            let (line, label) = match edge.style {
                EdgeStyle::Plain => (line, "plain"),
                EdgeStyle::Active => (self.paint_highlight(&line), "active"),
                EdgeStyle::Leading => (line, "leading"),
                EdgeStyle::Dimmed => (self.paint_faded(&line), "dimmed"),
            };
            writeln!(out, "  {}  [{}]", line, label)?;
        }
        Ok(())
    }
}

impl HideoutFormatter for TextFormatter {
    fn format(&self, model: &HideoutReadModel) -> Result<String> {
        let mut out = String::new();
        self.render_selection(&mut out, &model.selection)?;
        if let Some(summary) = &model.summary {
            self.render_summary(&mut out, summary)?;
        }
        if let Some(stations) = &model.stations {
            self.render_stations(&mut out, stations)?;
        }
        if let Some(edges) = &model.edges {
            self.render_edges(&mut out, edges)?;
        }
        Ok(out)
    }
}
